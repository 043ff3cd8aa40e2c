//! Query functions, one module per table.

pub mod profiles;
pub mod programs;
pub mod splits;
