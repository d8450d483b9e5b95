// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Projects: the top-level editable unit.
//!
//! A project owns its tracks exclusively and fixes the canvas size,
//! frame rate, and total duration every clip must fit within.

use serde::{Deserialize, Serialize};

use super::clip::Clip;
use super::track::{Track, TrackKind};

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Default frame rate
pub const DEFAULT_FPS: u32 = 30;
/// Default duration in frames (10 seconds at 30 fps)
pub const DEFAULT_DURATION_IN_FRAMES: u64 = 300;
/// Default background color
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";

/// The top-level editable video document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project id
    pub id: String,
    /// Display name
    pub name: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Frame rate in frames per second
    pub fps: u32,
    /// Total duration in frames; every clip must end at or before this
    pub duration_in_frames: u64,
    /// Background color as a hex string
    pub background_color: String,
    /// Tracks in back-to-front render order
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Default for Project {
    /// The fixed default project used when no prior project is loaded:
    /// 1920x1080 at 30 fps, 300 frames, with main/overlay/audio tracks.
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "Untitled Project".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            duration_in_frames: DEFAULT_DURATION_IN_FRAMES,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            tracks: vec![
                Track::new("track-1", TrackKind::Main, "Main Track"),
                Track::new("track-2", TrackKind::Overlay, "Overlay"),
                Track::new("track-3", TrackKind::Audio, "Audio"),
            ],
        }
    }
}

impl Project {
    /// Create an empty project with the given name and defaults otherwise
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get a track by id
    pub fn track(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    /// Get a mutable track by id
    pub fn track_mut(&mut self, track_id: &str) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == track_id)
    }

    /// Get the first track of the given kind
    pub fn track_of_kind(&self, kind: TrackKind) -> Option<&Track> {
        self.tracks.iter().find(|t| t.kind == kind)
    }

    /// Append a track, preserving back-to-front order
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Find a clip anywhere in the project, with its owning track
    pub fn find_clip(&self, clip_id: &str) -> Option<(&Track, &Clip)> {
        self.tracks
            .iter()
            .find_map(|t| t.clip(clip_id).map(|c| (t, c)))
    }

    /// Frame one past the last active frame of any clip on any track
    pub fn content_end(&self) -> u64 {
        self.tracks.iter().map(|t| t.content_end()).max().unwrap_or(0)
    }

    /// Total duration in seconds at the project frame rate
    pub fn duration_seconds(&self) -> f64 {
        self.duration_in_frames as f64 / self.fps as f64
    }

    /// Total number of clips across all tracks
    pub fn clip_count(&self) -> usize {
        self.tracks.iter().map(|t| t.clip_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::clip::{ClipKind, NewClip, Region};

    #[test]
    fn test_default_project() {
        let project = Project::default();

        assert_eq!(project.width, 1920);
        assert_eq!(project.height, 1080);
        assert_eq!(project.fps, 30);
        assert_eq!(project.duration_in_frames, 300);
        assert_eq!(project.tracks.len(), 3);
        assert_eq!(project.tracks[0].kind, TrackKind::Main);
        assert_eq!(project.tracks[1].kind, TrackKind::Overlay);
        assert_eq!(project.tracks[2].kind, TrackKind::Audio);
    }

    #[test]
    fn test_track_lookup() {
        let project = Project::default();

        assert!(project.track("track-2").is_some());
        assert!(project.track("missing").is_none());
        assert_eq!(
            project.track_of_kind(TrackKind::Audio).map(|t| t.id.as_str()),
            Some("track-3")
        );
    }

    #[test]
    fn test_find_clip_across_tracks() {
        let mut project = Project::default();
        let clip = NewClip::new(
            0,
            60,
            ClipKind::Image {
                src: "https://example.com/a.png".to_string(),
                region: Region::full_canvas(1920, 1080),
            },
        )
        .into_clip("c1".to_string(), "track-2".to_string());
        project.track_mut("track-2").unwrap().add_clip(clip);

        let (track, found) = project.find_clip("c1").unwrap();
        assert_eq!(track.id, "track-2");
        assert_eq!(found.id, "c1");
        assert!(project.find_clip("c2").is_none());
    }

    #[test]
    fn test_duration_seconds() {
        let project = Project::default();
        assert!((project.duration_seconds() - 10.0).abs() < f64::EPSILON);
    }
}
