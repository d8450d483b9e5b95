// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Media file validation against per-class size, type, and dimension
//! rules.
//!
//! The caller decodes the file far enough to fill in a descriptor;
//! validation itself touches no I/O. An image whose dimensions could
//! not be decoded is represented with `dimensions: None` and fails any
//! dimension rule with a specific reason instead of erroring.

use super::ValidationReport;

const MB: u64 = 1024 * 1024;

/// Maximum image size in bytes (10 MB)
pub const MAX_IMAGE_BYTES: u64 = 10 * MB;
/// Maximum video size in bytes (100 MB)
pub const MAX_VIDEO_BYTES: u64 = 100 * MB;
/// Maximum audio size in bytes (20 MB)
pub const MAX_AUDIO_BYTES: u64 = 20 * MB;
/// Maximum logo size in bytes (5 MB)
pub const MAX_LOGO_BYTES: u64 = 5 * MB;

/// Approved raster image extensions
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];
/// Approved video container extensions
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".mov"];
/// Approved audio extensions
pub const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".ogg", ".m4a"];

/// What is known about an uploaded file before admission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Original file name, used for extension detection
    pub file_name: String,
    /// File size in bytes
    pub size_bytes: u64,
    /// Decoded pixel dimensions; `None` when decoding failed or was
    /// not attempted
    pub dimensions: Option<(u32, u32)>,
}

impl MediaDescriptor {
    /// Create a descriptor without decoded dimensions
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
            dimensions: None,
        }
    }

    /// Attach decoded pixel dimensions
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    /// Lowercased extension including the leading dot, if any
    pub fn extension(&self) -> Option<String> {
        let dot = self.file_name.rfind('.')?;
        if dot == 0 || dot + 1 == self.file_name.len() {
            return None;
        }
        Some(self.file_name[dot..].to_ascii_lowercase())
    }
}

/// Optional pixel dimension bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionRules {
    /// Minimum width in pixels
    pub min_width: Option<u32>,
    /// Minimum height in pixels
    pub min_height: Option<u32>,
    /// Maximum width in pixels
    pub max_width: Option<u32>,
    /// Maximum height in pixels
    pub max_height: Option<u32>,
}

impl DimensionRules {
    /// Whether any bound is set
    pub fn is_empty(&self) -> bool {
        self.min_width.is_none()
            && self.min_height.is_none()
            && self.max_width.is_none()
            && self.max_height.is_none()
    }
}

/// Rule set a file must satisfy before entering the data model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRules {
    /// Maximum file size in bytes
    pub max_size_bytes: u64,
    /// Permitted extensions, lowercase with leading dot
    pub allowed_extensions: Vec<String>,
    /// Optional dimension bounds
    pub dimensions: DimensionRules,
}

impl MediaRules {
    /// Create rules with a size cap and extension allow-list
    pub fn new(max_size_bytes: u64, allowed_extensions: &[&str]) -> Self {
        Self {
            max_size_bytes,
            allowed_extensions: allowed_extensions.iter().map(|e| e.to_string()).collect(),
            dimensions: DimensionRules::default(),
        }
    }

    /// Set dimension bounds
    pub fn with_dimensions(mut self, dimensions: DimensionRules) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Run every applicable check against a descriptor
    pub fn validate(&self, file: &MediaDescriptor) -> ValidationReport {
        let mut report = check_size(file, self.max_size_bytes);
        report.merge(check_extension(file, &self.allowed_extensions));
        if !self.dimensions.is_empty() {
            report.merge(check_dimensions(file, &self.dimensions));
        }
        report
    }
}

/// Asset classes with representative default rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    /// Raster images, up to 10 MB
    Image,
    /// Video containers, up to 100 MB
    Video,
    /// Audio files, up to 20 MB
    Audio,
    /// Logos: image types only, up to 5 MB
    Logo,
}

impl AssetClass {
    /// Default rules for this asset class
    pub fn rules(&self) -> MediaRules {
        match self {
            AssetClass::Image => MediaRules::new(MAX_IMAGE_BYTES, IMAGE_EXTENSIONS),
            AssetClass::Video => MediaRules::new(MAX_VIDEO_BYTES, VIDEO_EXTENSIONS),
            AssetClass::Audio => MediaRules::new(MAX_AUDIO_BYTES, AUDIO_EXTENSIONS),
            AssetClass::Logo => MediaRules::new(MAX_LOGO_BYTES, IMAGE_EXTENSIONS),
        }
    }

    /// Validate a descriptor against this class's default rules
    pub fn validate(&self, file: &MediaDescriptor) -> ValidationReport {
        self.rules().validate(file)
    }
}

/// Check file size against a byte limit; the limit itself passes
pub fn check_size(file: &MediaDescriptor, max_size_bytes: u64) -> ValidationReport {
    if file.size_bytes > max_size_bytes {
        let file_mb = file.size_bytes as f64 / MB as f64;
        let max_mb = max_size_bytes as f64 / MB as f64;
        ValidationReport::invalid(format!(
            "File size ({file_mb:.2}MB) exceeds maximum allowed size ({max_mb:.2}MB)"
        ))
    } else {
        ValidationReport::valid()
    }
}

/// Check the file extension against an allow-list, case-insensitively
pub fn check_extension(file: &MediaDescriptor, allowed: &[String]) -> ValidationReport {
    match file.extension() {
        Some(ext) if allowed.iter().any(|a| *a == ext) => ValidationReport::valid(),
        Some(ext) => ValidationReport::invalid(format!(
            "File type {ext} is not supported. Allowed types: {}",
            allowed.join(", ")
        )),
        None => ValidationReport::invalid(format!(
            "File {:?} has no extension. Allowed types: {}",
            file.file_name,
            allowed.join(", ")
        )),
    }
}

/// Check decoded dimensions against bounds.
///
/// A descriptor without dimensions fails with a decode reason rather
/// than erroring, mirroring an undecodable upload.
pub fn check_dimensions(file: &MediaDescriptor, rules: &DimensionRules) -> ValidationReport {
    let (width, height) = match file.dimensions {
        Some(dims) => dims,
        None => return ValidationReport::invalid("Failed to load image"),
    };

    let mut report = ValidationReport::valid();
    if let Some(min) = rules.min_width {
        if width < min {
            report.push(format!("Image width ({width}px) is below minimum ({min}px)"));
        }
    }
    if let Some(min) = rules.min_height {
        if height < min {
            report.push(format!("Image height ({height}px) is below minimum ({min}px)"));
        }
    }
    if let Some(max) = rules.max_width {
        if width > max {
            report.push(format!("Image width ({width}px) exceeds maximum ({max}px)"));
        }
    }
    if let Some(max) = rules.max_height {
        if height > max {
            report.push(format!("Image height ({height}px) exceeds maximum ({max}px)"));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_boundary() {
        // Exactly at the 10 MB limit passes
        let at_limit = MediaDescriptor::new("photo.png", MAX_IMAGE_BYTES);
        assert!(AssetClass::Image.validate(&at_limit).is_valid());

        // One byte over fails with a size reason
        let over = MediaDescriptor::new("photo.png", MAX_IMAGE_BYTES + 1);
        let report = AssetClass::Image.validate(&over);
        assert!(!report.is_valid());
        assert!(report.errors()[0].contains("exceeds maximum allowed size"));
    }

    #[test]
    fn test_video_extension_allow_list() {
        let mov = MediaDescriptor::new("clip.mov", 1024);
        assert!(AssetClass::Video.validate(&mov).is_valid());

        let avi = MediaDescriptor::new("clip.avi", 1024);
        let report = AssetClass::Video.validate(&avi);
        assert!(!report.is_valid());
        assert!(report.errors()[0].contains("not supported"));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let upper = MediaDescriptor::new("CLIP.MOV", 1024);
        assert!(AssetClass::Video.validate(&upper).is_valid());
    }

    #[test]
    fn test_missing_extension() {
        let bare = MediaDescriptor::new("clip", 1024);
        assert!(!AssetClass::Video.validate(&bare).is_valid());

        let trailing_dot = MediaDescriptor::new("clip.", 1024);
        assert!(!AssetClass::Video.validate(&trailing_dot).is_valid());
    }

    #[test]
    fn test_logo_uses_image_extensions_and_smaller_cap() {
        let logo = MediaDescriptor::new("logo.png", MAX_LOGO_BYTES);
        assert!(AssetClass::Logo.validate(&logo).is_valid());

        let oversized = MediaDescriptor::new("logo.png", MAX_LOGO_BYTES + 1);
        assert!(!AssetClass::Logo.validate(&oversized).is_valid());

        let video_as_logo = MediaDescriptor::new("logo.mp4", 1024);
        assert!(!AssetClass::Logo.validate(&video_as_logo).is_valid());
    }

    #[test]
    fn test_dimension_bounds() {
        let rules = DimensionRules {
            min_width: Some(100),
            min_height: Some(100),
            max_width: Some(4096),
            max_height: Some(4096),
        };

        let ok = MediaDescriptor::new("a.png", 1024).with_dimensions(1920, 1080);
        assert!(check_dimensions(&ok, &rules).is_valid());

        let small = MediaDescriptor::new("a.png", 1024).with_dimensions(50, 1080);
        let report = check_dimensions(&small, &rules);
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].contains("below minimum"));

        let huge = MediaDescriptor::new("a.png", 1024).with_dimensions(8192, 8192);
        assert_eq!(check_dimensions(&huge, &rules).errors().len(), 2);
    }

    #[test]
    fn test_undecodable_image_degrades_to_reason() {
        let rules = DimensionRules {
            min_width: Some(100),
            ..Default::default()
        };
        let undecodable = MediaDescriptor::new("broken.png", 1024);

        let report = check_dimensions(&undecodable, &rules);
        assert!(!report.is_valid());
        assert_eq!(report.errors(), ["Failed to load image"]);
    }

    #[test]
    fn test_size_and_type_reasons_accumulate() {
        let bad = MediaDescriptor::new("clip.avi", MAX_VIDEO_BYTES + 1);
        let report = AssetClass::Video.validate(&bad);
        assert_eq!(report.errors().len(), 2);
    }
}
