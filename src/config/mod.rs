// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Project file persistence.
//!
//! Projects are saved and loaded as YAML documents. Loading validates
//! the document's structural invariants (clip windows within the
//! project duration, unique track ids, well-formed colors) before it
//! is handed to an editor session.

pub mod watcher;

pub use watcher::{ProjectEvent, ProjectWatcher};

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timeline::Project;
use crate::validate::{check_hex_color, ValidationReport};

/// Errors raised by project file I/O
#[derive(Debug, Error)]
pub enum ProjectFileError {
    /// The file could not be read or written
    #[error("failed to access project file {path}: {source}")]
    Io {
        /// File path involved
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// The document is not valid YAML for a project
    #[error("failed to parse project file: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// The document parsed but violates project invariants
    #[error("invalid project: {}", reasons.join("; "))]
    Invalid {
        /// Human-readable invariant violations
        reasons: Vec<String>,
    },
}

/// A project document as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// The project itself
    pub project: Project,
}

impl ProjectFile {
    /// Wrap a project for persistence
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// Load and validate a project from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProjectFileError> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|source| {
            ProjectFileError::Io {
                path: path.as_ref().display().to_string(),
                source,
            }
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a project from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ProjectFileError> {
        let file: ProjectFile = serde_yaml::from_str(yaml)?;
        let report = validate_project(&file.project);
        if report.is_valid() {
            Ok(file)
        } else {
            Err(ProjectFileError::Invalid {
                reasons: report.errors().to_vec(),
            })
        }
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ProjectFileError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ProjectFileError> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml).map_err(|source| ProjectFileError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })
    }
}

/// Check a project's structural invariants without applying it
pub fn validate_project(project: &Project) -> ValidationReport {
    let mut report = ValidationReport::valid();

    if project.fps == 0 {
        report.push("Frame rate must be greater than zero");
    }
    if project.duration_in_frames == 0 {
        report.push("Duration must be at least one frame");
    }
    if project.width == 0 || project.height == 0 {
        report.push("Canvas dimensions must be non-zero");
    }
    if !check_hex_color(&project.background_color).is_valid() {
        report.push(format!(
            "Background color {:?} is not a #RRGGBB hex color",
            project.background_color
        ));
    }

    for (index, track) in project.tracks.iter().enumerate() {
        if project.tracks[..index].iter().any(|t| t.id == track.id) {
            report.push(format!("Duplicate track id {:?}", track.id));
        }

        for clip in &track.clips {
            if clip.track_id != track.id {
                report.push(format!(
                    "Clip {:?} back-references track {:?} but lives on {:?}",
                    clip.id, clip.track_id, track.id
                ));
            }
            if clip.end_frame() > project.duration_in_frames {
                report.push(format!(
                    "Clip {:?} ends at frame {} past the project duration ({} frames)",
                    clip.id,
                    clip.end_frame(),
                    project.duration_in_frames
                ));
            }
            if clip.duration_in_frames == 0 {
                report.push(format!("Clip {:?} has zero duration", clip.id));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{ClipKind, NewClip, Region};

    fn project_with_image_clip(start: u64, duration: u64) -> Project {
        let mut project = Project::default();
        let clip = NewClip::new(
            start,
            duration,
            ClipKind::Image {
                src: "https://example.com/a.png".to_string(),
                region: Region::full_canvas(1920, 1080),
            },
        )
        .into_clip("c1".to_string(), "track-1".to_string());
        project.track_mut("track-1").unwrap().add_clip(clip);
        project
    }

    #[test]
    fn test_default_project_is_valid() {
        assert!(validate_project(&Project::default()).is_valid());
    }

    #[test]
    fn test_clip_past_duration_is_invalid() {
        let project = project_with_image_clip(250, 100);
        let report = validate_project(&project);
        assert!(!report.is_valid());
        assert!(report.errors()[0].contains("past the project duration"));
    }

    #[test]
    fn test_bad_background_color_is_invalid() {
        let mut project = Project::default();
        project.background_color = "black".to_string();
        assert!(!validate_project(&project).is_valid());
    }

    #[test]
    fn test_duplicate_track_ids_are_invalid() {
        let mut project = Project::default();
        let duplicate = project.tracks[0].clone();
        project.add_track(duplicate);
        assert!(!validate_project(&project).is_valid());
    }

    #[test]
    fn test_yaml_round_trip() {
        let file = ProjectFile::new(project_with_image_clip(0, 60));
        let yaml = file.to_yaml().unwrap();
        let restored = ProjectFile::from_yaml(&yaml).unwrap();
        assert_eq!(restored, file);
    }

    #[test]
    fn test_from_yaml_rejects_invalid_project() {
        let file = ProjectFile::new(project_with_image_clip(290, 100));
        let yaml = file.to_yaml().unwrap();

        let result = ProjectFile::from_yaml(&yaml);
        assert!(matches!(result, Err(ProjectFileError::Invalid { .. })));
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        let result = ProjectFile::from_yaml("this is not valid yaml: [");
        assert!(matches!(result, Err(ProjectFileError::Parse(_))));
    }
}
