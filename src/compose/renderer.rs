// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pure mapping from (project, frame) to a layered composition.
//!
//! Stacking order is (track order, then clip insertion order within a
//! track): the first track is the back-most layer, and later-inserted
//! clips occlude earlier ones when they spatially overlap. There is no
//! explicit z-index; reorderings here would silently change visual
//! output.

use super::{Composition, Layer, LayerContent};
use crate::timeline::{Clip, ClipKind, Project, Track};

/// Render the project at a single frame.
///
/// Total over well-formed projects. A frame outside
/// `[0, duration_in_frames)` yields a composition with no layers.
pub fn render(project: &Project, frame: u64) -> Composition {
    let mut composition = Composition {
        width: project.width,
        height: project.height,
        background_color: project.background_color.clone(),
        layers: Vec::new(),
    };

    if frame >= project.duration_in_frames {
        return composition;
    }

    for track in &project.tracks {
        if track.is_hidden {
            continue;
        }
        for clip in track.clips_at_frame(frame) {
            if let Some(layer) = layer_for(track, clip, frame) {
                composition.layers.push(layer);
            }
        }
    }

    composition
}

/// Build the layer a clip contributes at a frame, if any
fn layer_for(track: &Track, clip: &Clip, frame: u64) -> Option<Layer> {
    let offset_frames = frame - clip.start_frame;

    let content = match &clip.kind {
        ClipKind::Video { src, region, .. } => LayerContent::Video {
            src: src.clone(),
            region: *region,
            offset_frames,
        },
        ClipKind::Image { src, region } => LayerContent::Image {
            src: src.clone(),
            region: *region,
        },
        ClipKind::Text { text, style } => LayerContent::Text {
            text: text.clone(),
            style: style.clone(),
        },
        ClipKind::Audio { src, .. } => {
            // Muting the track silences it without hiding visual clips
            if track.is_muted {
                return None;
            }
            LayerContent::AudioCue {
                src: src.clone(),
                volume: clip.volume_at(frame).unwrap_or(0.0),
                offset_frames,
            }
        }
    };

    Some(Layer {
        clip_id: clip.id.clone(),
        track_id: track.id.clone(),
        content,
    })
}
