//! A single batch of sampled points
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::PI;
use crate::geometry::{Circle, Square};
use crate::impl_display;
use crate::result::{Error, ErrorKind, Result};
use rand::Rng;

/// Counts of the points drawn in one trial and how many of them landed in
/// the circle.
///
/// The estimate and its error are derived from the counts on every call.
///
/// # Example
///
/// ```
/// use mcpi::trial::Trial;
///
/// let mut trial = Trial::new();
/// assert!(trial.estimated_pi().is_err());
///
/// trial.record(true);
/// trial.record(true);
/// trial.record(true);
/// trial.record(false);
///
/// assert_eq!(trial.total_points(), 4);
/// assert_eq!(trial.estimated_pi().unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Trial {
    points_inside: u64,
    total_points: u64,
}

impl Trial {
    /// An empty trial
    #[inline]
    pub fn new() -> Self {
        Trial::default()
    }

    /// Build a trial from existing counts
    ///
    /// Fails if `points_inside > total_points`.
    pub fn from_counts(points_inside: u64, total_points: u64) -> Result<Self> {
        if points_inside > total_points {
            let msg = format!(
                "points_inside ({}) > total_points ({})",
                points_inside, total_points
            );
            Err(Error::new(ErrorKind::InvalidConfiguration, &msg))
        } else {
            Ok(Trial {
                points_inside,
                total_points,
            })
        }
    }

    /// Draw `n` points from `square` and tally those inside `circle`
    pub fn sample<R: Rng + ?Sized>(
        square: &Square,
        circle: &Circle,
        n: u64,
        rng: &mut R,
    ) -> Self {
        let mut trial = Trial::new();
        for _ in 0..n {
            let point = square.random_inside_point(rng);
            trial.record(circle.contains(&point));
        }
        trial
    }

    /// Tally one point
    #[inline]
    pub fn record(&mut self, inside: bool) {
        if inside {
            self.points_inside += 1;
        }
        self.total_points += 1;
    }

    #[inline]
    pub fn points_inside(&self) -> u64 {
        self.points_inside
    }

    #[inline]
    pub fn points_outside(&self) -> u64 {
        self.total_points - self.points_inside
    }

    #[inline]
    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_points == 0
    }

    /// `4 * points_inside / total_points`
    pub fn estimated_pi(&self) -> Result<f64> {
        if self.is_empty() {
            Err(Error::new(
                ErrorKind::DivisionByZero,
                "no points have been sampled",
            ))
        } else {
            Ok(4.0 * self.points_inside as f64 / self.total_points as f64)
        }
    }

    /// `|estimated_pi - π| / π * 100`
    pub fn percent_error(&self) -> Result<f64> {
        self.estimated_pi()
            .map(|est| (est - PI).abs() / PI * 100.0)
    }
}

impl From<&Trial> for String {
    fn from(t: &Trial) -> String {
        match t.estimated_pi() {
            Ok(est) => format!(
                "Trial({}/{} inside, π ≈ {})",
                t.points_inside, t.total_points, est
            ),
            Err(_) => String::from("Trial(empty)"),
        }
    }
}

impl_display!(Trial);
