//! Core data types and structures
//!
//! This module contains node identity types that hosts can key a
//! dependency map with, separated from the detection logic.

pub mod types;

pub use types::*;
