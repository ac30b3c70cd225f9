//! Childcare Leave Benefit Engine for Japan
//!
//! This crate estimates Japanese childcare leave benefits and compares them
//! against a worker's current net take-home pay, using statutory rate tables
//! loaded from configuration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

#[cfg(test)]
mod test_support;
