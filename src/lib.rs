//! Estimate π by throwing random points at a square.
//!
//! Points are drawn uniformly from a square. The fraction that lands in the
//! square's inscribed circle approaches the ratio of the two areas, π/4:
//!
//! ```text
//!  A_circle      π r²      π          # in circle
//! ---------- = ------- = ---  =>  4 ------------- ≈ π
//!  A_square     4 r²      4           # in square
//! ```
//!
//! # Example
//!
//! ```
//! use mcpi::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//!
//! let mut experiment = Experiment::new(Point::origin(), 2.0, 10, 100).unwrap();
//! experiment.run(&mut rng);
//!
//! for trial in experiment.trials() {
//!     assert_eq!(trial.total_points(), 100);
//! }
//!
//! let pi_est = experiment.average_estimated_pi().unwrap();
//! let pct_err = experiment.average_percent_error().unwrap();
//! assert!(pi_est > 0.0 && pct_err >= 0.0);
//! ```
pub mod consts;
pub mod experiment;
pub mod geometry;
pub mod prelude;
pub mod random;
pub mod result;
pub mod trial;

pub use result::*;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Implements `Display` for a type that implements `From<&T> for String`
#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}
