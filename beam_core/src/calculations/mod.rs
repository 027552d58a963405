//! # Beam Check Calculations
//!
//! Calculations follow one pattern:
//!
//! - [`LoadCase`](crate::loads::LoadCase) - Input parameters (JSON-serializable)
//! - [`DesignResult`] - Evaluation results (JSON-serializable)
//! - [`evaluate_design`] - Pure evaluation function returning `Result`
//!
//! ## Available Calculations
//!
//! - [`beam`] - Simply-supported beam moment/shear capacity check

pub mod beam;

pub use beam::{
    check_capacity, design_status, evaluate_design, evaluate_design_with, max_moment_kipft,
    max_shear_kip, CheckStatus, DesignResult, LoadCheck,
};
