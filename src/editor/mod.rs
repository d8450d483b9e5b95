// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Editor session state and the action-dispatch store.
//!
//! This module provides the single authoritative in-memory state for
//! one open project plus transient playback/UI state:
//! - Immutable state snapshots
//! - A discrete action vocabulary applied by a pure reducer
//! - A single-owner store handle passed explicitly to consumers

pub mod store;

pub use store::{reduce, Action, EditorStore};

use crate::timeline::Project;

/// Default timeline zoom scale
const DEFAULT_SCALE: f64 = 1.0;

/// One immutable snapshot of the editor session.
///
/// Snapshots are plain values: the reducer never mutates a previous
/// snapshot, so consumers may hold a clone across ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// The open project
    pub project: Project,
    /// Playhead position, always within `[0, duration_in_frames]`
    pub current_frame: u64,
    /// Whether playback is running
    pub is_playing: bool,
    /// Currently selected clip, if any
    pub selected_clip_id: Option<String>,
    /// Timeline zoom scale
    pub scale: f64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            project: Project::default(),
            current_frame: 0,
            is_playing: false,
            selected_clip_id: None,
            scale: DEFAULT_SCALE,
        }
    }
}

impl EditorState {
    /// Create a session snapshot around an existing project
    pub fn with_project(project: Project) -> Self {
        Self {
            project,
            ..Default::default()
        }
    }
}
