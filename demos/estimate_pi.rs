// Use a Monte Carlo method to estimate the value of pi. We draw points from
// a 2-by-2 square, within which there is a perfectly inscribed circle. The
// fraction of points that land in the circle estimates the ratio of the
// areas.
//
//  A_circle      pi * r^2    pi         # in circle
// ----------  =  -------- = ----  => 4 ------------- ~= pi
//  A_square      4 * r^2      4         # in square
//
use mcpi::prelude::*;
use std::f64::consts::PI;

fn run(n_trials: usize, points_per_trial: u64) -> mcpi::Result<()> {
    let mut rng = rand::thread_rng();

    let mut experiment =
        Experiment::new(Point::origin(), 2.0, n_trials, points_per_trial)?;
    experiment.run(&mut rng);

    println!("{}", experiment);
    for (ix, trial) in experiment.trials().iter().enumerate() {
        println!(
            "  {:>3}: π_est: {:.6}, error: {:.3}%",
            ix,
            trial.estimated_pi()?,
            trial.percent_error()?
        );
    }

    let summary = experiment.summary()?;
    println!(
        "π_est: {}, π_true: {}, absolute error: {}",
        summary.average_estimated_pi,
        PI,
        (summary.average_estimated_pi - PI).abs()
    );
    println!("{}\n", summary);
    Ok(())
}

fn main() {
    // A handful of small trials shows how much a single estimate varies
    if let Err(err) = run(10, 100) {
        eprintln!("{}", err);
    }

    // One large trial converges much closer to the true value
    if let Err(err) = run(1, 1_000_000) {
        eprintln!("{}", err);
    }
}
