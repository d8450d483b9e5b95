// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Timeline data model for video projects.
//!
//! This module provides the core editing entities:
//! - Project as the top-level editable unit
//! - Tracks as ordered lanes of a general kind
//! - Clips as timed media or text elements with typed properties

pub mod clip;
pub mod project;
pub mod track;

pub use clip::{Clip, ClipKind, ClipPatch, NewClip, Region, TextStyle};
pub use project::Project;
pub use track::{Track, TrackKind};

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated entity ids
const ID_LENGTH: usize = 9;

/// Generate a fresh lowercase alphanumeric id for a clip or track
pub fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_id_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }
}
