//! Repeated trials over a fixed square and its inscribed circle
//!
//! An [`Experiment`] is configured once, then [`run`](Experiment::run)
//! samples every trial in one blocking call. Results are read back from
//! the experiment afterwards.
//!
//! ```
//! use mcpi::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1729);
//! let mut experiment = Experiment::new(Point::origin(), 2.0, 10, 1_000).unwrap();
//! assert_eq!(experiment.state(), ExperimentState::Configured);
//!
//! experiment.run(&mut rng);
//!
//! assert_eq!(experiment.state(), ExperimentState::Complete);
//! assert_eq!(experiment.trials().len(), 10);
//!
//! let pi_est = experiment.average_estimated_pi().unwrap();
//! assert!((pi_est - std::f64::consts::PI).abs() < 0.2);
//! ```
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Circle, Point, Square};
use crate::impl_display;
use crate::result::{Error, ErrorKind, Result};
use crate::trial::Trial;
use log::{debug, info, warn};
use rand::Rng;
use std::fmt;

/// Where an experiment is in its lifecycle
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum ExperimentState {
    /// No trials have been run
    Configured,
    /// Some, but not all, trials have been run
    Running,
    /// All trials have been run. The trial list is final.
    Complete,
}

impl ExperimentState {
    pub fn as_str(&self) -> &str {
        match self {
            ExperimentState::Configured => "configured",
            ExperimentState::Running => "running",
            ExperimentState::Complete => "complete",
        }
    }
}

impl fmt::Display for ExperimentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monte Carlo estimate of π over `n_trials` trials of `points_per_trial`
/// points each
///
/// With the `serde1` feature, deserialization goes through the same checks
/// as [`Experiment::new`] and additionally rejects stored trials that do not
/// fit the configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde1",
    serde(rename_all = "snake_case", try_from = "ExperimentData")
)]
pub struct Experiment {
    square: Square,
    circle: Circle,
    n_trials: usize,
    points_per_trial: u64,
    trials: Vec<Trial>,
}

impl Experiment {
    /// Create a new experiment
    ///
    /// # Arguments
    /// - square_center: center of the sampling square
    /// - square_side_length: side of the square. Must be positive.
    /// - n_trials: number of trials to run. Must be at least 1.
    /// - points_per_trial: points drawn in each trial. Must be at least 1.
    pub fn new(
        square_center: Point,
        square_side_length: f64,
        n_trials: usize,
        points_per_trial: u64,
    ) -> Result<Self> {
        if n_trials == 0 {
            return Err(Error::new(
                ErrorKind::InvalidConfiguration,
                "n_trials must be at least 1",
            ));
        }
        if points_per_trial == 0 {
            return Err(Error::new(
                ErrorKind::InvalidConfiguration,
                "points_per_trial must be at least 1",
            ));
        }

        let square = Square::new(square_center, square_side_length)?;
        let circle = square.inscribed_circle();

        Ok(Experiment {
            square,
            circle,
            n_trials,
            points_per_trial,
            trials: Vec::with_capacity(n_trials),
        })
    }

    #[inline]
    pub fn square(&self) -> &Square {
        &self.square
    }

    #[inline]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    #[inline]
    pub fn points_per_trial(&self) -> u64 {
        self.points_per_trial
    }

    /// Completed trials in the order they were run
    #[inline]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    pub fn state(&self) -> ExperimentState {
        if self.trials.is_empty() {
            ExperimentState::Configured
        } else if self.trials.len() < self.n_trials {
            ExperimentState::Running
        } else {
            ExperimentState::Complete
        }
    }

    /// Run every trial
    ///
    /// Does nothing if the experiment is already complete.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.run_with_progress(rng, |_, _| {})
    }

    /// Run every trial, calling `on_trial(completed, trial)` after each
    /// trial is stored
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::prelude::*;
    /// let mut rng = rand::thread_rng();
    /// let mut experiment = Experiment::new(Point::origin(), 2.0, 3, 10).unwrap();
    ///
    /// let mut seen = Vec::new();
    /// experiment.run_with_progress(&mut rng, |completed, trial| {
    ///     seen.push((completed, trial.total_points()));
    /// });
    ///
    /// assert_eq!(seen, vec![(1, 10), (2, 10), (3, 10)]);
    /// ```
    pub fn run_with_progress<R, F>(&mut self, rng: &mut R, mut on_trial: F)
    where
        R: Rng + ?Sized,
        F: FnMut(usize, &Trial),
    {
        if self.state() == ExperimentState::Complete {
            warn!("experiment already complete; not running again");
            return;
        }

        info!(
            "running {} trials of {} points in {}",
            self.n_trials, self.points_per_trial, self.square
        );

        while self.trials.len() < self.n_trials {
            let trial = Trial::sample(
                &self.square,
                &self.circle,
                self.points_per_trial,
                rng,
            );
            self.trials.push(trial);

            let completed = self.trials.len();
            debug!("trial {}/{}: {}", completed, self.n_trials, trial);
            on_trial(completed, &trial);
        }

        info!("experiment complete");
    }

    /// Sum of the per-trial estimates of π
    pub fn sum_estimated_pi(&self) -> Result<f64> {
        self.check_has_trials()?;
        self.trials
            .iter()
            .try_fold(0.0, |acc, trial| Ok(acc + trial.estimated_pi()?))
    }

    /// Mean of the per-trial estimates of π
    pub fn average_estimated_pi(&self) -> Result<f64> {
        self.check_has_trials()?;
        running_mean(self.trials.iter().map(Trial::estimated_pi))
    }

    /// Mean of the per-trial percent errors
    pub fn average_percent_error(&self) -> Result<f64> {
        self.check_has_trials()?;
        running_mean(self.trials.iter().map(Trial::percent_error))
    }

    /// Aggregate statistics over the completed trials
    pub fn summary(&self) -> Result<Summary> {
        self.check_has_trials()?;

        let mut best = self.trials[0];
        let mut worst = self.trials[0];
        for trial in self.trials.iter().skip(1) {
            let err = trial.percent_error()?;
            if err < best.percent_error()? {
                best = *trial;
            }
            if err > worst.percent_error()? {
                worst = *trial;
            }
        }

        Ok(Summary {
            n_trials: self.trials.len(),
            points_per_trial: self.points_per_trial,
            sum_estimated_pi: self.sum_estimated_pi()?,
            average_estimated_pi: self.average_estimated_pi()?,
            average_percent_error: self.average_percent_error()?,
            best_estimated_pi: best.estimated_pi()?,
            worst_estimated_pi: worst.estimated_pi()?,
        })
    }

    fn check_has_trials(&self) -> Result<()> {
        if self.trials.is_empty() {
            Err(Error::new(
                ErrorKind::DivisionByZero,
                "no trials have been run",
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(feature = "serde1")]
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct ExperimentData {
    square: Square,
    n_trials: usize,
    points_per_trial: u64,
    trials: Vec<Trial>,
}

#[cfg(feature = "serde1")]
impl TryFrom<ExperimentData> for Experiment {
    type Error = Error;

    fn try_from(data: ExperimentData) -> Result<Self> {
        let mut experiment = Experiment::new(
            data.square.center(),
            data.square.side(),
            data.n_trials,
            data.points_per_trial,
        )?;

        if data.trials.len() > experiment.n_trials {
            let msg = format!(
                "{} stored trials exceed n_trials ({})",
                data.trials.len(),
                experiment.n_trials
            );
            return Err(Error::new(ErrorKind::InvalidConfiguration, &msg));
        }

        for trial in &data.trials {
            Trial::from_counts(trial.points_inside(), trial.total_points())?;
            if trial.total_points() != experiment.points_per_trial {
                let msg = format!(
                    "trial has {} points, expected {}",
                    trial.total_points(),
                    experiment.points_per_trial
                );
                return Err(Error::new(ErrorKind::InvalidConfiguration, &msg));
            }
        }

        experiment.trials = data.trials;
        Ok(experiment)
    }
}

/// Incremental mean of `xs`, stopping at the first error
fn running_mean<I>(xs: I) -> Result<f64>
where
    I: IntoIterator<Item = Result<f64>>,
{
    let mut n: usize = 0;
    let mut mean = 0.0;
    for x in xs {
        let x = x?;
        n += 1;
        mean = (x - mean).mul_add((n as f64).recip(), mean);
    }
    if n == 0 {
        Err(Error::new(ErrorKind::DivisionByZero, "mean of zero values"))
    } else {
        Ok(mean)
    }
}

impl From<&Experiment> for String {
    fn from(e: &Experiment) -> String {
        format!(
            "Experiment({} trials × {} points in {}, {}/{} done)",
            e.n_trials,
            e.points_per_trial,
            e.square,
            e.trials.len(),
            e.n_trials
        )
    }
}

impl_display!(Experiment);

/// Aggregate results of an experiment
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Summary {
    /// Number of completed trials
    pub n_trials: usize,
    pub points_per_trial: u64,
    pub sum_estimated_pi: f64,
    pub average_estimated_pi: f64,
    pub average_percent_error: f64,
    /// Estimate of the trial with the lowest percent error
    pub best_estimated_pi: f64,
    /// Estimate of the trial with the highest percent error
    pub worst_estimated_pi: f64,
}

impl From<&Summary> for String {
    fn from(s: &Summary) -> String {
        format!(
            "{} trials of {} points: π ≈ {} ({}% error), best {}, worst {}",
            s.n_trials,
            s.points_per_trial,
            s.average_estimated_pi,
            s.average_percent_error,
            s.best_estimated_pi,
            s.worst_estimated_pi
        )
    }
}

impl_display!(Summary);
