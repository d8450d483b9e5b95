// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Action vocabulary, reducer, and the single-owner store handle.
//!
//! Every mutation of editor state is a discrete action applied
//! synchronously by a pure reducer. Out-of-range frames clamp and
//! dangling ids no-op; routine UI input never errors.

use tracing::debug;

use super::EditorState;
use crate::timeline::{generate_id, Clip, ClipPatch, NewClip, Project, Track};

/// A discrete editor operation
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the open project wholesale
    SetProject(Project),
    /// Move the playhead; clamped into `[0, duration_in_frames]`
    SetCurrentFrame(i64),
    /// Start or stop playback
    TogglePlayback(bool),
    /// Select a clip, or clear the selection with `None`
    SelectClip(Option<String>),
    /// Append a track to the project
    AddTrack(Track),
    /// Add a clip to the named track; unknown track ids no-op
    AddClip {
        /// Target track id
        track_id: String,
        /// Clip fields; a fresh id is assigned on admission
        clip: NewClip,
    },
    /// Merge partial fields into the first clip matching the id
    UpdateClip {
        /// Target clip id
        clip_id: String,
        /// Fields to replace
        patch: ClipPatch,
    },
    /// Remove the clip from whichever track holds it
    RemoveClip(String),
    /// Set the timeline zoom scale
    SetScale(f64),
}

/// Apply an action to a snapshot, producing the next snapshot.
///
/// Pure: the previous snapshot is never mutated. Actions referencing
/// unknown track or clip ids leave the state unchanged.
pub fn reduce(state: &EditorState, action: Action) -> EditorState {
    match action {
        Action::SetProject(project) => {
            let current_frame = state.current_frame.min(project.duration_in_frames);
            EditorState {
                project,
                current_frame,
                ..state.clone()
            }
        }
        Action::SetCurrentFrame(frame) => {
            let clamped = frame.clamp(0, state.project.duration_in_frames as i64) as u64;
            EditorState {
                current_frame: clamped,
                ..state.clone()
            }
        }
        Action::TogglePlayback(is_playing) => EditorState {
            is_playing,
            ..state.clone()
        },
        Action::SelectClip(selected_clip_id) => EditorState {
            selected_clip_id,
            ..state.clone()
        },
        Action::AddTrack(track) => {
            let mut next = state.clone();
            next.project.add_track(track);
            next
        }
        Action::AddClip { track_id, clip } => {
            if state.project.track(&track_id).is_none() {
                return state.clone();
            }
            let mut next = state.clone();
            let clip = clip.into_clip(generate_id(), track_id.clone());
            // Checked above, but avoid panicking on a racing caller
            if let Some(track) = next.project.track_mut(&track_id) {
                track.add_clip(clip);
            }
            next
        }
        Action::UpdateClip { clip_id, patch } => {
            let mut next = state.clone();
            for track in &mut next.project.tracks {
                if let Some(existing) = track.clip_mut(&clip_id) {
                    *existing = existing.with_patch(&patch);
                    return next;
                }
            }
            state.clone()
        }
        Action::RemoveClip(clip_id) => {
            let mut next = state.clone();
            for track in &mut next.project.tracks {
                if track.remove_clip(&clip_id).is_some() {
                    return next;
                }
            }
            state.clone()
        }
        Action::SetScale(scale) => EditorState {
            scale,
            ..state.clone()
        },
    }
}

/// Single-owner state container for one open editor session.
///
/// The store is constructed once and passed by reference to every
/// component that needs it; there is exactly one logical writer and
/// each dispatch is an atomic swap to a new immutable snapshot.
#[derive(Debug, Default)]
pub struct EditorStore {
    state: EditorState,
}

impl EditorStore {
    /// Create a store holding the default project
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store around an existing project
    pub fn with_project(project: Project) -> Self {
        Self {
            state: EditorState::with_project(project),
        }
    }

    /// The current snapshot
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Clone the current snapshot for use across ticks
    pub fn snapshot(&self) -> EditorState {
        self.state.clone()
    }

    /// Apply an action, swapping in the next snapshot
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        self.state = reduce(&self.state, action);
    }

    /// Start playback
    pub fn play(&mut self) {
        self.dispatch(Action::TogglePlayback(true));
    }

    /// Stop playback
    pub fn pause(&mut self) {
        self.dispatch(Action::TogglePlayback(false));
    }

    /// Move the playhead, clamped into the project duration
    pub fn seek(&mut self, frame: i64) {
        self.dispatch(Action::SetCurrentFrame(frame));
    }

    /// Select a clip, or clear the selection
    pub fn select_clip(&mut self, clip_id: Option<String>) {
        self.dispatch(Action::SelectClip(clip_id));
    }

    /// Add a clip to the named track
    pub fn add_clip(&mut self, track_id: impl Into<String>, clip: NewClip) {
        self.dispatch(Action::AddClip {
            track_id: track_id.into(),
            clip,
        });
    }

    /// Merge partial fields into a clip by id
    pub fn update_clip(&mut self, clip_id: impl Into<String>, patch: ClipPatch) {
        self.dispatch(Action::UpdateClip {
            clip_id: clip_id.into(),
            patch,
        });
    }

    /// Remove a clip by id
    pub fn remove_clip(&mut self, clip_id: impl Into<String>) {
        self.dispatch(Action::RemoveClip(clip_id.into()));
    }

    /// The selected clip, if the selection still resolves
    pub fn selected_clip(&self) -> Option<&Clip> {
        let id = self.state.selected_clip_id.as_deref()?;
        self.state.project.find_clip(id).map(|(_, clip)| clip)
    }
}
