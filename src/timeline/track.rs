// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tracks: ordered lanes of clips.
//!
//! Clip order within a track is insertion order, not time order.
//! Rendering iterates independently wherever overlap matters, and
//! later-inserted clips stack on top of earlier ones.

use serde::{Deserialize, Serialize};

use super::clip::Clip;

/// General kind of content a track is meant to hold.
///
/// The kind is a convention, not a structural constraint: callers are
/// responsible for placing audio clips on audio tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    /// Primary content lane
    Main,
    /// Overlay lane rendered above main content
    Overlay,
    /// Audio lane with no visual footprint
    Audio,
}

/// An ordered lane of clips within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track id
    pub id: String,
    /// General content kind
    pub kind: TrackKind,
    /// Display name
    pub name: String,
    /// Whether audio from this track is muted
    #[serde(default)]
    pub is_muted: bool,
    /// Whether this track is excluded from rendering
    #[serde(default)]
    pub is_hidden: bool,
    /// Clips in insertion order
    #[serde(default)]
    pub clips: Vec<Clip>,
}

impl Track {
    /// Create a new empty track
    pub fn new(id: impl Into<String>, kind: TrackKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            is_muted: false,
            is_hidden: false,
            clips: Vec::new(),
        }
    }

    /// Get a clip by id
    pub fn clip(&self, clip_id: &str) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == clip_id)
    }

    /// Get a mutable clip by id
    pub fn clip_mut(&mut self, clip_id: &str) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| c.id == clip_id)
    }

    /// Append a clip, preserving insertion order
    pub fn add_clip(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    /// Remove a clip by id, returning it if present
    pub fn remove_clip(&mut self, clip_id: &str) -> Option<Clip> {
        let index = self.clips.iter().position(|c| c.id == clip_id)?;
        Some(self.clips.remove(index))
    }

    /// Clips active at the given frame, in insertion order
    pub fn clips_at_frame(&self, frame: u64) -> impl Iterator<Item = &Clip> {
        self.clips.iter().filter(move |c| c.is_active_at(frame))
    }

    /// Frame one past the last active frame of any clip on this track
    pub fn content_end(&self) -> u64 {
        self.clips.iter().map(|c| c.end_frame()).max().unwrap_or(0)
    }

    /// Number of clips on this track
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::clip::{ClipKind, Region};

    fn clip(id: &str, start: u64, duration: u64) -> Clip {
        Clip {
            id: id.to_string(),
            track_id: "track-1".to_string(),
            name: None,
            start_frame: start,
            duration_in_frames: duration,
            kind: ClipKind::Image {
                src: "https://example.com/a.png".to_string(),
                region: Region::full_canvas(1920, 1080),
            },
        }
    }

    #[test]
    fn test_track_creation() {
        let track = Track::new("track-1", TrackKind::Main, "Main Track");
        assert_eq!(track.id, "track-1");
        assert_eq!(track.kind, TrackKind::Main);
        assert!(!track.is_muted);
        assert!(!track.is_hidden);
        assert_eq!(track.clip_count(), 0);
    }

    #[test]
    fn test_add_and_remove_clip() {
        let mut track = Track::new("track-1", TrackKind::Main, "Main");
        track.add_clip(clip("a", 0, 30));
        track.add_clip(clip("b", 30, 30));

        assert_eq!(track.clip_count(), 2);
        assert!(track.clip("a").is_some());

        let removed = track.remove_clip("a");
        assert!(removed.is_some());
        assert_eq!(track.clip_count(), 1);
        assert!(track.clip("a").is_none());

        // Removing again is a no-op
        assert!(track.remove_clip("a").is_none());
        assert_eq!(track.clip_count(), 1);
    }

    #[test]
    fn test_clips_at_frame_preserves_insertion_order() {
        let mut track = Track::new("track-1", TrackKind::Main, "Main");
        // Inserted out of time order on purpose
        track.add_clip(clip("late", 20, 40));
        track.add_clip(clip("early", 0, 40));

        let active: Vec<&str> = track
            .clips_at_frame(25)
            .map(|c| c.id.as_str())
            .collect();

        assert_eq!(active, vec!["late", "early"]);
    }

    #[test]
    fn test_content_end() {
        let mut track = Track::new("track-1", TrackKind::Main, "Main");
        assert_eq!(track.content_end(), 0);

        track.add_clip(clip("a", 0, 30));
        track.add_clip(clip("b", 50, 100));
        assert_eq!(track.content_end(), 150);
    }
}
