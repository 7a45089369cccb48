//! Presentation logic shared by the frequency-analysis view apps.
//!
//! Everything here is a pure function over plain numbers: classifying
//! backend fit statistics into display tiers, reducing the theoretical
//! curve to the canonical return periods, binning the histogram sample,
//! and computing axis ranges. No I/O and no framework types, so the whole
//! crate is unit-testable off the browser.

pub mod axis;
pub mod fit;
pub mod format;
pub mod histogram;
pub mod return_period;
