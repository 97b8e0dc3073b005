//! Uniform draws on closed intervals
//!
//! Every function here takes the generator explicitly, so a seeded
//! generator gives a reproducible stream of draws.
//!
//! ```
//! use mcpi::random::uniform;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0x1234);
//! let x = uniform(&mut rng, -1.0, 1.0).unwrap();
//! assert!((-1.0..=1.0).contains(&x));
//!
//! assert!(uniform(&mut rng, 1.0, -1.0).is_err());
//! ```
use crate::result::{Error, ErrorKind, Result};
use rand::Rng;
use rand_distr::Uniform;

/// Draw a real uniformly from `[low, high]`
///
/// Fails with [`ErrorKind::InvalidRange`] if `low > high` or either bound
/// is not finite. A degenerate interval (`low == high`) yields `low`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Result<f64> {
    if !low.is_finite() || !high.is_finite() {
        let msg = format!("non-finite bound in [{}, {}]", low, high);
        Err(Error::new(ErrorKind::InvalidRange, &msg))
    } else if low > high {
        let msg = format!("low ({}) > high ({})", low, high);
        Err(Error::new(ErrorKind::InvalidRange, &msg))
    } else {
        Ok(uniform_unchecked(rng, low, high))
    }
}

/// Draw a real uniformly from `[low, high]` without validating the bounds.
///
/// Panics if `low > high` or either bound is not finite.
pub fn uniform_unchecked<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low == high {
        low
    } else if high - low > f64::MAX / 2.0 {
        // the width overflows inside `Uniform`; draw around the midpoint
        let mid = low / 2.0 + high / 2.0;
        let half = high / 2.0 - low / 2.0;
        let u: f64 = rng.sample(Uniform::new_inclusive(-1.0, 1.0));
        u.mul_add(half, mid).clamp(low, high)
    } else {
        rng.sample(Uniform::new_inclusive(low, high))
    }
}

/// Draw an integer uniformly from `low..=high`
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> Result<i64> {
    if low > high {
        let msg = format!("low ({}) > high ({})", low, high);
        Err(Error::new(ErrorKind::InvalidRange, &msg))
    } else {
        Ok(rng.gen_range(low..=high))
    }
}

/// Draw a real uniformly from `[0, 1]`
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    uniform_unchecked(rng, 0.0, 1.0)
}
