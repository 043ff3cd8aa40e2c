//! SmartFit workout engine: plan-text parsing, retried text generation,
//! and program persistence.

pub mod generate;
pub mod plan;
pub mod program;
