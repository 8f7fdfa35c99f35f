//! # Config Crate
//!
//! Centralized configuration constants for the polyhedral notation pipeline.
//! Tolerances, default colours and the marker characters of both textual
//! notations are defined here so every crate agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, DEFAULT_FACE_COLOR, EPSILON};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! assert!(approx_equal(1.0, 1.0 + 1e-11));
//! assert_eq!(DEFAULT_FACE_COLOR, [128, 128, 128]);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No I/O**: Nothing here reads the environment or the file system

pub mod constants;

#[cfg(test)]
mod tests;
