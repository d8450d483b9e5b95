// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Clips: timed media and text elements placed on tracks.
//!
//! A clip occupies a half-open frame window on its owning track and
//! carries type-specific properties in a tagged union rather than a
//! loose property bag.

use serde::{Deserialize, Serialize};

/// Placement rectangle for visual clips, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Region covering the full canvas of the given size
    pub fn full_canvas(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// Styling for text clips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: u32,
    /// Text color as a hex string
    pub color: String,
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 48,
            color: "#ffffff".to_string(),
            x: 0,
            y: 0,
        }
    }
}

/// Type-specific clip content and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClipKind {
    /// Video media referenced by URL
    Video {
        /// Source URL
        src: String,
        /// Placement on the canvas
        region: Region,
        /// Embedded audio volume (0.0 - 1.0)
        volume: f64,
    },
    /// Still image referenced by URL
    Image {
        /// Source URL
        src: String,
        /// Placement on the canvas
        region: Region,
    },
    /// Literal text content
    Text {
        /// The text to display
        text: String,
        /// Text styling
        style: TextStyle,
    },
    /// Audio media referenced by URL; no visual footprint
    Audio {
        /// Source URL
        src: String,
        /// Playback volume (0.0 - 1.0)
        volume: f64,
        /// Fade-in length in frames
        fade_in_frames: u64,
        /// Fade-out length in frames
        fade_out_frames: u64,
    },
}

impl ClipKind {
    /// Short label for the clip kind, used in logs and summaries
    pub fn label(&self) -> &'static str {
        match self {
            ClipKind::Video { .. } => "video",
            ClipKind::Image { .. } => "image",
            ClipKind::Text { .. } => "text",
            ClipKind::Audio { .. } => "audio",
        }
    }

    /// Whether clips of this kind render visually
    pub fn is_visual(&self) -> bool {
        !matches!(self, ClipKind::Audio { .. })
    }
}

/// A single timed element on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip id
    pub id: String,
    /// Id of the owning track (back-reference, not ownership)
    pub track_id: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// First frame the clip is active
    pub start_frame: u64,
    /// Active window length in frames
    pub duration_in_frames: u64,
    /// Type-specific content and properties
    pub kind: ClipKind,
}

impl Clip {
    /// Frame one past the last active frame
    pub fn end_frame(&self) -> u64 {
        self.start_frame + self.duration_in_frames
    }

    /// Whether the clip is active at the given frame.
    ///
    /// The window is half-open: `start_frame <= frame < end_frame`.
    /// A zero-duration clip has an empty window and is never active.
    pub fn is_active_at(&self, frame: u64) -> bool {
        frame >= self.start_frame && frame < self.end_frame()
    }

    /// Apply a partial update, producing a new clip.
    ///
    /// Fields absent from the patch are carried over unchanged, so
    /// applying two patches in sequence equals applying their union.
    pub fn with_patch(&self, patch: &ClipPatch) -> Clip {
        Clip {
            id: self.id.clone(),
            track_id: self.track_id.clone(),
            name: patch.name.clone().or_else(|| self.name.clone()),
            start_frame: patch.start_frame.unwrap_or(self.start_frame),
            duration_in_frames: patch
                .duration_in_frames
                .unwrap_or(self.duration_in_frames),
            kind: patch.kind.clone().unwrap_or_else(|| self.kind.clone()),
        }
    }

    /// Effective audio volume at the given frame, with fades applied.
    ///
    /// Returns `None` for visual-only kinds and for frames outside the
    /// clip's active window.
    pub fn volume_at(&self, frame: u64) -> Option<f64> {
        if !self.is_active_at(frame) {
            return None;
        }
        let (volume, fade_in, fade_out) = match &self.kind {
            ClipKind::Audio {
                volume,
                fade_in_frames,
                fade_out_frames,
                ..
            } => (*volume, *fade_in_frames, *fade_out_frames),
            ClipKind::Video { volume, .. } => (*volume, 0, 0),
            _ => return None,
        };

        let position = frame - self.start_frame;
        let remaining = self.end_frame() - frame;

        let mut envelope = 1.0f64;
        if fade_in > 0 && position < fade_in {
            envelope = envelope.min(position as f64 / fade_in as f64);
        }
        if fade_out > 0 && remaining <= fade_out {
            envelope = envelope.min(remaining as f64 / fade_out as f64);
        }

        Some((volume * envelope).clamp(0.0, 1.0))
    }
}

/// A clip awaiting admission to a track; the store assigns its id
#[derive(Debug, Clone, PartialEq)]
pub struct NewClip {
    /// Optional display name
    pub name: Option<String>,
    /// First frame the clip is active
    pub start_frame: u64,
    /// Active window length in frames
    pub duration_in_frames: u64,
    /// Type-specific content and properties
    pub kind: ClipKind,
}

impl NewClip {
    /// Create a new clip description
    pub fn new(start_frame: u64, duration_in_frames: u64, kind: ClipKind) -> Self {
        Self {
            name: None,
            start_frame,
            duration_in_frames,
            kind,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Materialize into a clip with the given id on the given track
    pub fn into_clip(self, id: String, track_id: String) -> Clip {
        Clip {
            id,
            track_id,
            name: self.name,
            start_frame: self.start_frame,
            duration_in_frames: self.duration_in_frames,
            kind: self.kind,
        }
    }
}

/// Partial clip update applied by shallow merge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipPatch {
    /// Replacement display name
    pub name: Option<String>,
    /// Replacement start frame
    pub start_frame: Option<u64>,
    /// Replacement duration in frames
    pub duration_in_frames: Option<u64>,
    /// Replacement content and properties
    pub kind: Option<ClipKind>,
}

impl ClipPatch {
    /// Patch that moves a clip to a new start frame
    pub fn move_to(start_frame: u64) -> Self {
        Self {
            start_frame: Some(start_frame),
            ..Default::default()
        }
    }

    /// Patch that resizes a clip's duration
    pub fn resize(duration_in_frames: u64) -> Self {
        Self {
            duration_in_frames: Some(duration_in_frames),
            ..Default::default()
        }
    }

    /// Combine two patches; fields set in `other` win
    pub fn merged_with(&self, other: &ClipPatch) -> ClipPatch {
        ClipPatch {
            name: other.name.clone().or_else(|| self.name.clone()),
            start_frame: other.start_frame.or(self.start_frame),
            duration_in_frames: other.duration_in_frames.or(self.duration_in_frames),
            kind: other.kind.clone().or_else(|| self.kind.clone()),
        }
    }
}
