//! # Load Case
//!
//! Input geometry and loading for a simply-supported beam check.
//!
//! All inputs use US customary units: kip for the point load, psf for the
//! area load, feet for the tributary width and span.

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};

/// Loads and geometry for one beam evaluation.
///
/// The point load is applied at midspan; the area load acts over the
/// tributary width for the full span.
///
/// ## JSON Example
///
/// ```json
/// {
///   "point_load_kip": 15.0,
///   "area_load_psf": 30.0,
///   "trib_width_ft": 20.0,
///   "span_ft": 20.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Midspan point load (kip)
    pub point_load_kip: f64,

    /// Uniform area load (psf)
    pub area_load_psf: f64,

    /// Tributary width feeding area load to the beam (ft)
    pub trib_width_ft: f64,

    /// Clear span (ft)
    pub span_ft: f64,
}

impl LoadCase {
    /// Create a load case
    pub fn new(point_load_kip: f64, area_load_psf: f64, trib_width_ft: f64, span_ft: f64) -> Self {
        Self {
            point_load_kip,
            area_load_psf,
            trib_width_ft,
            span_ft,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CheckResult<()> {
        if self.span_ft <= 0.0 {
            return Err(CheckError::invalid_input(
                "span_ft",
                self.span_ft.to_string(),
                "Span must be positive",
            ));
        }
        if self.trib_width_ft < 0.0 {
            return Err(CheckError::invalid_input(
                "trib_width_ft",
                self.trib_width_ft.to_string(),
                "Tributary width must not be negative",
            ));
        }
        if self.point_load_kip < 0.0 {
            return Err(CheckError::invalid_input(
                "point_load_kip",
                self.point_load_kip.to_string(),
                "Point load must not be negative",
            ));
        }
        if self.area_load_psf < 0.0 {
            return Err(CheckError::invalid_input(
                "area_load_psf",
                self.area_load_psf.to_string(),
                "Area load must not be negative",
            ));
        }
        Ok(())
    }
}
