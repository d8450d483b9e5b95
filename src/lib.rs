// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! REEL - an in-memory video timeline and composition engine.
//!
//! The crate models one open video project and its editing session:
//! - `timeline`: Project/Track/Clip data model
//! - `editor`: action-dispatch state store over immutable snapshots
//! - `compose`: pure (project, frame) -> layered composition mapping
//! - `validate`: media and scalar field validators
//! - `config`: YAML project persistence and hot reload

pub mod compose;
pub mod config;
pub mod editor;
pub mod timeline;
pub mod validate;

pub use compose::{render, Composition, Layer, LayerContent};
pub use editor::{Action, EditorState, EditorStore};
pub use timeline::{Clip, ClipKind, ClipPatch, NewClip, Project, Track, TrackKind};
