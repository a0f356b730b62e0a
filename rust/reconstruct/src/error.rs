// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for floor plan reconstruction.
//!
//! Only configuration problems are surfaced as errors. Degenerate curves and
//! "nothing matched" outcomes are represented in the result data instead.

/// Result type alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before a reconstruction run starts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The exterior and interior thickness bands (thickness ± tolerance) overlap,
    /// so a measured gap could belong to both classes.
    #[error(
        "exterior thickness {exterior} and interior thickness {interior} overlap with tolerance {tolerance}"
    )]
    OverlappingThicknessBands {
        exterior: f64,
        interior: f64,
        tolerance: f64,
    },

    /// A length parameter must be strictly positive.
    #[error("configuration value `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A length parameter must not be negative.
    #[error("configuration value `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// The tolerance reaches down to zero thickness, so coincident lines would pair.
    #[error("tolerance {tolerance} must be smaller than wall thickness {thickness}")]
    ToleranceTooLarge { tolerance: f64, thickness: f64 },

    /// A parameter is NaN or infinite.
    #[error("configuration value `{field}` is not finite")]
    NonFinite { field: &'static str },

    /// A `[min, max]` pair is inverted.
    #[error("configuration range `{min_field}`..`{max_field}` is inverted ({min} > {max})")]
    InvertedRange {
        min_field: &'static str,
        max_field: &'static str,
        min: f64,
        max: f64,
    },
}
