//! Reverse conjugator.
//!
//! Recovers the (root, stem) pairs that can produce a vocalized surface
//! form by generating candidate roots and verifying each one against the
//! forward generator in `sarf-engine`.

mod analyzer;
mod candidates;

pub use analyzer::{analyze, analyze_detailed, Analysis, Analyzer, Match};
