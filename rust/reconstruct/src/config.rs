// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reconstruction parameters.
//!
//! All lengths are in the caller's length unit ([`LengthUnit`]). Defaults are
//! tuned for drawings in feet, the native unit of most BIM hosts.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length unit of the incoming geometry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Feet,
    Inches,
    Meters,
    Millimeters,
}

impl LengthUnit {
    pub fn inches_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Feet => 12.0,
            LengthUnit::Inches => 1.0,
            LengthUnit::Meters => 1.0 / 0.0254,
            LengthUnit::Millimeters => 1.0 / 25.4,
        }
    }

    pub fn feet_per_unit(&self) -> f64 {
        self.inches_per_unit() / 12.0
    }
}

/// Configuration for the reconstruction pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReconstructionConfig {
    /// Exterior wall thickness. Default: 0.875 (10.5")
    pub exterior_wall_thickness: f64,
    /// Interior wall thickness. Default: 0.375 (4.5")
    pub interior_wall_thickness: f64,
    /// Allowed deviation of a measured gap from a thickness class. Default: 0.1
    pub tolerance: f64,
    /// Curves shorter than this are dropped during normalization. Default: 0.5
    pub min_line_length: f64,
    /// Merged walls shorter than this are discarded. Default: 2.0
    pub min_wall_length: f64,
    /// Largest gap bridged by the collinear merge. Default: 10.0
    pub max_merge_gap: f64,
    /// Gaps up to this width are bridged without recording an opening. Default: 0.25
    pub min_opening_gap: f64,
    /// Gaps at least this wide are provisionally doors. Default: 3.5
    pub door_width_threshold: f64,
    /// Narrowest window on an exterior wall. Default: 1.0
    pub window_min_width: f64,
    /// Widest window on an exterior wall. Default: 6.0
    pub window_max_width: f64,
    /// Smallest door swing arc radius. Default: 2.0
    pub min_door_radius: f64,
    /// Largest door swing arc radius. Default: 3.5
    pub max_door_radius: f64,
    /// Minimum longitudinal overlap of two paired lines. Default: 1.0
    pub min_overlap: f64,
    /// Grid used to group centerlines before merging. Default: 0.5
    pub centerline_snap: f64,
    /// How far a swing arc center may sit from a wall centerline. Default: 1.0
    pub swing_center_tolerance: f64,
    /// Unit of all lengths above and of the input curves
    pub unit: LengthUnit,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            exterior_wall_thickness: 0.875,
            interior_wall_thickness: 0.375,
            tolerance: 0.1,
            min_line_length: 0.5,
            min_wall_length: 2.0,
            max_merge_gap: 10.0,
            min_opening_gap: 0.25,
            door_width_threshold: 3.5,
            window_min_width: 1.0,
            window_max_width: 6.0,
            min_door_radius: 2.0,
            max_door_radius: 3.5,
            min_overlap: 1.0,
            centerline_snap: 0.5,
            swing_center_tolerance: 1.0,
            unit: LengthUnit::Feet,
        }
    }
}

impl ReconstructionConfig {
    /// Builder-style setter for both wall thickness classes.
    pub fn with_thicknesses(mut self, exterior: f64, interior: f64) -> Self {
        self.exterior_wall_thickness = exterior;
        self.interior_wall_thickness = interior;
        self
    }

    /// Builder-style setter for the thickness tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder-style setter for the length unit.
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Upper bound of the perpendicular gap the pair search will look at
    pub fn max_pair_gap(&self) -> f64 {
        self.exterior_wall_thickness.max(self.interior_wall_thickness) + self.tolerance
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("exteriorWallThickness", self.exterior_wall_thickness),
            ("interiorWallThickness", self.interior_wall_thickness),
            ("tolerance", self.tolerance),
            ("minLineLength", self.min_line_length),
            ("minWallLength", self.min_wall_length),
            ("maxMergeGap", self.max_merge_gap),
            ("minOpeningGap", self.min_opening_gap),
            ("doorWidthThreshold", self.door_width_threshold),
            ("windowMinWidth", self.window_min_width),
            ("windowMaxWidth", self.window_max_width),
            ("minDoorRadius", self.min_door_radius),
            ("maxDoorRadius", self.max_door_radius),
            ("minOverlap", self.min_overlap),
            ("centerlineSnap", self.centerline_snap),
            ("swingCenterTolerance", self.swing_center_tolerance),
        ];
        for (field, value) in values {
            if !value.is_finite() {
                return Err(Error::NonFinite { field });
            }
        }

        for (field, value) in [
            ("exteriorWallThickness", self.exterior_wall_thickness),
            ("interiorWallThickness", self.interior_wall_thickness),
            ("maxMergeGap", self.max_merge_gap),
            ("doorWidthThreshold", self.door_width_threshold),
            ("maxDoorRadius", self.max_door_radius),
            ("centerlineSnap", self.centerline_snap),
        ] {
            if value <= 0.0 {
                return Err(Error::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("tolerance", self.tolerance),
            ("minLineLength", self.min_line_length),
            ("minWallLength", self.min_wall_length),
            ("minOpeningGap", self.min_opening_gap),
            ("windowMinWidth", self.window_min_width),
            ("minDoorRadius", self.min_door_radius),
            ("minOverlap", self.min_overlap),
            ("swingCenterTolerance", self.swing_center_tolerance),
        ] {
            if value < 0.0 {
                return Err(Error::Negative { field, value });
            }
        }

        let thinnest = self
            .exterior_wall_thickness
            .min(self.interior_wall_thickness);
        if self.tolerance >= thinnest {
            return Err(Error::ToleranceTooLarge {
                tolerance: self.tolerance,
                thickness: thinnest,
            });
        }

        // Bands that merely touch are accepted; the shared boundary goes to exterior.
        // Equal thicknesses coincide even at zero tolerance.
        let separation = (self.exterior_wall_thickness - self.interior_wall_thickness).abs();
        if separation == 0.0 || separation < 2.0 * self.tolerance {
            return Err(Error::OverlappingThicknessBands {
                exterior: self.exterior_wall_thickness,
                interior: self.interior_wall_thickness,
                tolerance: self.tolerance,
            });
        }

        for (min_field, max_field, min, max) in [
            ("windowMinWidth", "windowMaxWidth", self.window_min_width, self.window_max_width),
            ("minDoorRadius", "maxDoorRadius", self.min_door_radius, self.max_door_radius),
            ("minOpeningGap", "maxMergeGap", self.min_opening_gap, self.max_merge_gap),
        ] {
            if min > max {
                return Err(Error::InvertedRange {
                    min_field,
                    max_field,
                    min,
                    max,
                });
            }
        }

        Ok(())
    }
}
