//! PostgreSQL persistence for SmartFit: fitness profiles, workout programs,
//! and per-day workout splits.

pub mod config;
pub mod models;
pub mod pool;
pub mod queries;
