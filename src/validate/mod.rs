// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pre-admission validation for media files and scalar fields.
//!
//! Validators are stateless predicates returning a pass/fail report
//! with human-readable reasons. A routine validation failure is never
//! an error value, and input that cannot be checked at all degrades to
//! a failure reason rather than a panic.

pub mod field;
pub mod media;

pub use field::{
    check_frame_duration, check_hex_color, check_number_range, check_start_frame,
    check_string_length, check_url, check_volume,
};
pub use media::{AssetClass, DimensionRules, MediaDescriptor, MediaRules};

/// Outcome of one or more validation checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// A passing report with no reasons
    pub fn valid() -> Self {
        Self::default()
    }

    /// A failing report with a single reason
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            errors: vec![reason.into()],
        }
    }

    /// Whether every check passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The accumulated failure reasons
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Record a failure reason
    pub fn push(&mut self, reason: impl Into<String>) {
        self.errors.push(reason.into());
    }

    /// Fold another report's reasons into this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }

    /// Combine two reports, preserving reason order
    pub fn and(mut self, other: ValidationReport) -> ValidationReport {
        self.merge(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_report() {
        let report = ValidationReport::valid();
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_invalid_report() {
        let report = ValidationReport::invalid("too big");
        assert!(!report.is_valid());
        assert_eq!(report.errors(), ["too big"]);
    }

    #[test]
    fn test_merge_preserves_order() {
        let report = ValidationReport::invalid("first")
            .and(ValidationReport::valid())
            .and(ValidationReport::invalid("second"));

        assert_eq!(report.errors(), ["first", "second"]);
    }
}
