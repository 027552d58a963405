//! # Simply-Supported Beam Capacity Check
//!
//! Computes midspan moment and support shear for a simply-supported beam
//! under a midspan point load plus a uniform area load, then checks both
//! demands against tabulated section capacities.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Point load applied at midspan
//! - Area load (psf) collected over the tributary width for the full span
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::evaluate_design;
//! use beam_core::loads::LoadCase;
//!
//! let loads = LoadCase::new(15.0, 30.0, 20.0, 20.0);
//! let result = evaluate_design(&loads, "delta").unwrap();
//!
//! println!("Moment: {:.2} kip-ft", result.moment_kipft);
//! println!("Shear: {:.2} kip", result.shear_kip);
//! println!("Design status: {}", result.design_status);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CheckResult;
use crate::loads::LoadCase;
use crate::sections::{SectionTable, MAX_POINT_LOAD_KIP, SECTIONS};

/// Pounds per kip. Converts the psf x ft area-load term to kip per foot.
///
/// The capacity table and the point load are in kip units while the area
/// load is in psf, so the area-load contribution carries this divisor.
pub const LB_PER_KIP: f64 = 1000.0;

/// Outcome of a single capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Demand is within capacity
    Ok,
    /// Demand exceeds capacity ("not good")
    Ng,
}

impl CheckStatus {
    /// Short report code ("OK" or "NG")
    pub fn code(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Ng => "NG",
        }
    }

    /// True when the check passed
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Informational point-load check against [`MAX_POINT_LOAD_KIP`].
///
/// Reported alongside the capacity checks; it does not affect the design
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadCheck {
    /// Point load is at or below the allowable limit
    BelowLimit,
    /// Point load exceeds the allowable limit
    Exceeded,
}

impl LoadCheck {
    /// Classify a point load against the allowable limit
    pub fn for_point_load(point_load_kip: f64) -> Self {
        if point_load_kip > MAX_POINT_LOAD_KIP {
            LoadCheck::Exceeded
        } else {
            LoadCheck::BelowLimit
        }
    }

    /// Report wording for this flag
    pub fn message(&self) -> &'static str {
        match self {
            LoadCheck::BelowLimit => "Load below limit",
            LoadCheck::Exceeded => "Load is too much!",
        }
    }
}

impl std::fmt::Display for LoadCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Maximum moment at midspan (kip-ft).
///
/// M = P*L/4 for the midspan point load plus w*L^2/8 for the uniform
/// line load, where w = q * trib_width / [`LB_PER_KIP`] in kip/ft.
pub fn max_moment_kipft(loads: &LoadCase) -> f64 {
    let line_load_klf = loads.area_load_psf * loads.trib_width_ft / LB_PER_KIP;
    loads.point_load_kip * loads.span_ft / 4.0 + line_load_klf * loads.span_ft.powi(2) / 8.0
}

/// Maximum shear at the support (kip).
///
/// V = P*L/2 plus w*L/2 for the uniform line load.
pub fn max_shear_kip(loads: &LoadCase) -> f64 {
    let line_load_klf = loads.area_load_psf * loads.trib_width_ft / LB_PER_KIP;
    loads.point_load_kip * loads.span_ft / 2.0 + line_load_klf * loads.span_ft / 2.0
}

/// Check a demand value against a capacity. Equality passes.
pub fn check_capacity(demand: f64, capacity: f64) -> CheckStatus {
    if demand <= capacity {
        CheckStatus::Ok
    } else {
        CheckStatus::Ng
    }
}

/// Overall design status: OK only when both sub-checks pass.
pub fn design_status(moment_status: CheckStatus, shear_status: CheckStatus) -> CheckStatus {
    if moment_status.is_pass() && shear_status.is_pass() {
        CheckStatus::Ok
    } else {
        CheckStatus::Ng
    }
}

/// Results from a beam capacity evaluation.
///
/// Pairs each computed demand with the capacity it was checked against so
/// a consumer can render the full report without further lookups.
///
/// ## JSON Example
///
/// ```json
/// {
///   "moment_kipft": 105.0,
///   "shear_kip": 156.0,
///   "moment_capacity_kipft": 200.0,
///   "shear_capacity_kip": 150.0,
///   "moment_status": "Ok",
///   "shear_status": "Ng",
///   "design_status": "Ng",
///   "load_check": "BelowLimit"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Computed moment at midspan (kip-ft)
    pub moment_kipft: f64,

    /// Computed shear at the support (kip)
    pub shear_kip: f64,

    /// Allowable moment for the checked section (kip-ft)
    pub moment_capacity_kipft: f64,

    /// Allowable shear for the checked section (kip)
    pub shear_capacity_kip: f64,

    /// Moment check outcome
    pub moment_status: CheckStatus,

    /// Shear check outcome
    pub shear_status: CheckStatus,

    /// Overall design status, NG if either sub-check is NG
    pub design_status: CheckStatus,

    /// Informational point-load check
    pub load_check: LoadCheck,
}

impl DesignResult {
    /// True when both capacity checks pass
    pub fn passes(&self) -> bool {
        self.design_status.is_pass()
    }
}

/// Evaluate a load case against a section from the standard table.
///
/// This is a pure function: it computes both demands, looks up the
/// section capacities, and checks each demand.
///
/// # Arguments
///
/// * `loads` - Load case (point load, area load, tributary width, span)
/// * `section_id` - Section identifier (e.g., "delta")
///
/// # Returns
///
/// * `Ok(DesignResult)` - Demands, capacities, and pass/fail statuses
/// * `Err(CheckError)` - Invalid input, or the section is not registered
///
/// # Example
///
/// ```rust
/// use beam_core::calculations::beam::evaluate_design;
/// use beam_core::loads::LoadCase;
///
/// let loads = LoadCase::new(15.0, 30.0, 20.0, 20.0);
/// let result = evaluate_design(&loads, "delta").expect("Evaluation should succeed");
/// assert!(result.moment_kipft > 0.0);
/// ```
pub fn evaluate_design(loads: &LoadCase, section_id: &str) -> CheckResult<DesignResult> {
    evaluate_design_with(loads, section_id, &SECTIONS)
}

/// Evaluate a load case against a section from a caller-supplied table.
pub fn evaluate_design_with(
    loads: &LoadCase,
    section_id: &str,
    table: &SectionTable,
) -> CheckResult<DesignResult> {
    loads.validate()?;

    let capacity = table.lookup(section_id)?;

    let moment_kipft = max_moment_kipft(loads);
    let shear_kip = max_shear_kip(loads);

    let moment_status = check_capacity(moment_kipft, capacity.moment_capacity_kipft);
    let shear_status = check_capacity(shear_kip, capacity.shear_capacity_kip);

    Ok(DesignResult {
        moment_kipft,
        shear_kip,
        moment_capacity_kipft: capacity.moment_capacity_kipft,
        shear_capacity_kip: capacity.shear_capacity_kip,
        moment_status,
        shear_status,
        design_status: design_status(moment_status, shear_status),
        load_check: LoadCheck::for_point_load(loads.point_load_kip),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CheckError;
    use crate::sections::SectionCapacity;

    /// The documented example: 20 ft span, 15 kip at midspan, 30 psf over
    /// a 20 ft tributary width.
    fn example_loads() -> LoadCase {
        LoadCase::new(15.0, 30.0, 20.0, 20.0)
    }

    #[test]
    fn test_moment_calculation() {
        // M = 15*20/4 + (30*20/1000)*20^2/8 = 75 + 30 = 105 kip-ft
        let moment = max_moment_kipft(&example_loads());
        assert!((moment - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_shear_calculation() {
        // V = 15*20/2 + (30*20/1000)*20/2 = 150 + 6 = 156 kip
        let shear = max_shear_kip(&example_loads());
        assert!((shear - 156.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_load_only() {
        let loads = LoadCase::new(10.0, 0.0, 0.0, 8.0);
        assert!((max_moment_kipft(&loads) - 20.0).abs() < 1e-9);
        assert!((max_shear_kip(&loads) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_capacity_equality_passes() {
        assert_eq!(check_capacity(200.0, 200.0), CheckStatus::Ok);
    }

    #[test]
    fn test_capacity_exceeded_fails() {
        assert_eq!(check_capacity(201.0, 200.0), CheckStatus::Ng);
    }

    #[test]
    fn test_design_status_truth_table() {
        use CheckStatus::{Ng, Ok};
        assert_eq!(design_status(Ok, Ok), Ok);
        assert_eq!(design_status(Ok, Ng), Ng);
        assert_eq!(design_status(Ng, Ok), Ng);
        assert_eq!(design_status(Ng, Ng), Ng);
    }

    #[test]
    fn test_load_check_boundary() {
        // Strict comparison: at the limit is still below
        assert_eq!(LoadCheck::for_point_load(15.0), LoadCheck::BelowLimit);
        assert_eq!(LoadCheck::for_point_load(100.0), LoadCheck::BelowLimit);
        assert_eq!(LoadCheck::for_point_load(100.5), LoadCheck::Exceeded);
    }

    #[test]
    fn test_evaluate_delta_section() {
        let result = evaluate_design(&example_loads(), "delta").unwrap();

        assert_eq!(result.moment_capacity_kipft, 200.0);
        assert_eq!(result.shear_capacity_kip, 150.0);

        // Moment 105 <= 200 passes; shear 156 > 150 fails
        assert_eq!(result.moment_status, CheckStatus::Ok);
        assert_eq!(result.shear_status, CheckStatus::Ng);
        assert_eq!(result.design_status, CheckStatus::Ng);
        assert!(!result.passes());

        assert_eq!(result.load_check, LoadCheck::BelowLimit);
    }

    #[test]
    fn test_evaluate_unknown_section() {
        let result = evaluate_design(&example_loads(), "omega");
        assert_eq!(result, Err(CheckError::unknown_section("omega")));
    }

    #[test]
    fn test_evaluate_invalid_span() {
        let mut loads = example_loads();
        loads.span_ft = -5.0;
        let err = evaluate_design(&loads, "delta").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_evaluate_with_custom_table() {
        let mut table = SectionTable::new();
        table.insert("echo", SectionCapacity::new(500.0, 300.0));

        let result = evaluate_design_with(&example_loads(), "echo", &table).unwrap();
        assert!(result.passes());

        // The standard sections are not in the custom table
        let missing = evaluate_design_with(&example_loads(), "delta", &table);
        assert_eq!(missing, Err(CheckError::unknown_section("delta")));
    }

    #[test]
    fn test_light_loads_pass() {
        let loads = LoadCase::new(2.0, 10.0, 10.0, 10.0);
        // M = 5 + 1.25 = 6.25 kip-ft, V = 10 + 0.5 = 10.5 kip
        let result = evaluate_design(&loads, "alpha").unwrap();
        assert_eq!(result.moment_status, CheckStatus::Ok);
        assert_eq!(result.shear_status, CheckStatus::Ok);
        assert!(result.passes());
    }

    #[test]
    fn test_result_serialization() {
        let result = evaluate_design(&example_loads(), "delta").unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("moment_kipft"));
        assert!(json.contains("shear_status"));
        assert!(json.contains("design_status"));

        let roundtrip: DesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
