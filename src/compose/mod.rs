// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Composition: the rendered-at-a-given-frame layered output.
//!
//! The same pure mapping serves interactive preview and frame-by-frame
//! export, so everything here is side-effect-free: no clock reads, no
//! randomness, no I/O.

pub mod renderer;

pub use renderer::render;

use serde::{Deserialize, Serialize};

use crate::timeline::{Region, TextStyle};

/// A layered visual description of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Background color as a hex string
    pub background_color: String,
    /// Layers in back-to-front order
    pub layers: Vec<Layer>,
}

impl Composition {
    /// Whether the composition has no layers at all
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Whether any layer was emitted for the given clip
    pub fn contains_clip(&self, clip_id: &str) -> bool {
        self.layers.iter().any(|l| l.clip_id == clip_id)
    }

    /// Layers with a visual footprint, in back-to-front order
    pub fn visual_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers
            .iter()
            .filter(|l| !matches!(l.content, LayerContent::AudioCue { .. }))
    }

    /// Audio cues active at this frame
    pub fn audio_cues(&self) -> impl Iterator<Item = &Layer> {
        self.layers
            .iter()
            .filter(|l| matches!(l.content, LayerContent::AudioCue { .. }))
    }
}

/// One element of a composition, tied back to its source clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Source clip id
    pub clip_id: String,
    /// Source track id
    pub track_id: String,
    /// What to draw or play
    pub content: LayerContent,
}

/// Renderable content of a layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerContent {
    /// Video frame drawn into a region
    Video {
        /// Source URL
        src: String,
        /// Placement on the canvas
        region: Region,
        /// Frames elapsed since the clip started
        offset_frames: u64,
    },
    /// Still image drawn into a region
    Image {
        /// Source URL
        src: String,
        /// Placement on the canvas
        region: Region,
    },
    /// Text drawn with its style
    Text {
        /// The text to display
        text: String,
        /// Text styling
        style: TextStyle,
    },
    /// Audible-only cue with no visual footprint
    AudioCue {
        /// Source URL
        src: String,
        /// Effective volume at this frame, fades applied
        volume: f64,
        /// Frames elapsed since the clip started
        offset_frames: u64,
    },
}
