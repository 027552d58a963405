//! # beam_core - Beam Capacity Check Engine
//!
//! `beam_core` computes midspan moment and support shear for a simply
//! supported beam under a combined point load and uniform area load, then
//! checks the demands against a fixed table of section capacities.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{evaluate_design, LoadCase};
//!
//! let loads = LoadCase::new(15.0, 30.0, 20.0, 20.0);
//! let result = evaluate_design(&loads, "delta").unwrap();
//!
//! println!("Moment: {:.2} kip-ft (capacity {})", result.moment_kipft, result.moment_capacity_kipft);
//! println!("Design status: {}", result.design_status);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam demand calculations and the capacity check
//! - [`sections`] - Section capacity table
//! - [`loads`] - Load case input type
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod sections;

// Re-export commonly used types at crate root for convenience
pub use calculations::beam::{evaluate_design, CheckStatus, DesignResult, LoadCheck};
pub use errors::{CheckError, CheckResult};
pub use loads::LoadCase;
pub use sections::{SectionCapacity, SectionTable, SECTIONS};
