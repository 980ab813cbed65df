//! Vacation Balance and Severance Settlement Engine
//!
//! This crate computes an employee's vacation balance for the current
//! anniversary year and the full severance settlement owed on termination:
//! notice period, proportional vacation, thirteenth and fourteenth month,
//! salary derivations and the monetary statement with its audit trace.
//!
//! Every calculation takes its reference date explicitly, so results are
//! deterministic and reproducible.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
