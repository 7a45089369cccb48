//! View models for pre-computed rainfall frequency analysis results.
//!
//! The analysis backend fits candidate distributions to annual rainfall
//! series and ships the finished results (frequency curves, tabular
//! summaries, goodness-of-fit statistics) as JSON. This crate provides:
//! - `models`: typed structs mirroring those JSON shapes
//! - `parse`: string-to-struct entry points used by the WASM apps on
//!   embedded fixture data
//!
//! All shapes are externally owned: every nested section is optional and
//! consumers are expected to treat an absent section as "nothing to draw"
//! rather than an error.
//!
//! # Usage
//!
//! ```rust
//! use rfa_data::parse::parse_frequency_curve;
//!
//! let json = r#"{
//!     "theoretical_curve": [{"P_percent": 1.0, "Q": 412.5}],
//!     "empirical_points": [{"P_percent": 2.4, "Q": 398.0}]
//! }"#;
//! let curve = parse_frequency_curve(json).unwrap();
//! assert_eq!(curve.theoretical_curve.unwrap().len(), 1);
//! ```

pub mod models;
pub mod parse;
