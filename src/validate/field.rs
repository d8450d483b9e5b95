// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generic scalar validators reused across asset and non-asset fields.
//!
//! All checks compose the same pass/fail-with-reasons contract as the
//! media validators.

use url::Url;

use super::ValidationReport;

/// Minimum clip/project duration in frames (1 second at 30 fps)
pub const MIN_DURATION_FRAMES: u64 = 30;
/// Maximum clip/project duration in frames (5 minutes at 30 fps)
pub const MAX_DURATION_FRAMES: u64 = 9_000;

/// Check a string's length against inclusive bounds
pub fn check_string_length(value: &str, min_length: usize, max_length: usize) -> ValidationReport {
    let mut report = ValidationReport::valid();
    let length = value.chars().count();

    if length < min_length {
        report.push(format!("Value must be at least {min_length} characters"));
    }
    if length > max_length {
        report.push(format!("Value must not exceed {max_length} characters"));
    }
    report
}

/// Check a number against optional inclusive bounds; NaN always fails
pub fn check_number_range(value: f64, min: Option<f64>, max: Option<f64>) -> ValidationReport {
    if value.is_nan() {
        return ValidationReport::invalid("Value must be a valid number");
    }

    let mut report = ValidationReport::valid();
    if let Some(min) = min {
        if value < min {
            report.push(format!("Value must be at least {min}"));
        }
    }
    if let Some(max) = max {
        if value > max {
            report.push(format!("Value must not exceed {max}"));
        }
    }
    report
}

/// Check a color string for the `#RRGGBB` hex format
pub fn check_hex_color(color: &str) -> ValidationReport {
    let bytes = color.as_bytes();
    let well_formed = bytes.len() == 7
        && bytes[0] == b'#'
        && bytes[1..].iter().all(|b| b.is_ascii_hexdigit());

    if well_formed {
        ValidationReport::valid()
    } else {
        ValidationReport::invalid("Invalid color format. Use hex format (#RRGGBB)")
    }
}

/// Check a URL for well-formedness
pub fn check_url(value: &str) -> ValidationReport {
    match Url::parse(value) {
        Ok(_) => ValidationReport::valid(),
        Err(_) => ValidationReport::invalid("Invalid URL format"),
    }
}

/// Check a duration in frames against the tunable bounds
pub fn check_frame_duration(frames: u64) -> ValidationReport {
    check_number_range(
        frames as f64,
        Some(MIN_DURATION_FRAMES as f64),
        Some(MAX_DURATION_FRAMES as f64),
    )
}

/// Check a normalized volume is within `[0, 1]`
pub fn check_volume(volume: f64) -> ValidationReport {
    check_number_range(volume, Some(0.0), Some(1.0))
}

/// Check a start frame fits within the project duration
pub fn check_start_frame(start_frame: u64, duration_in_frames: u64) -> ValidationReport {
    check_number_range(start_frame as f64, Some(0.0), Some(duration_in_frames as f64))
}
