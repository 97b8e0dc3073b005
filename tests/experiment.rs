use mcpi::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::f64::consts::PI;

#[test]
fn million_point_trial_is_close_to_pi() {
    let mut rng = Xoshiro256Plus::seed_from_u64(0x5EED);

    let mut experiment =
        Experiment::new(Point::origin(), 2.0, 1, 1_000_000).unwrap();
    experiment.run(&mut rng);

    assert_eq!(experiment.trials().len(), 1);
    assert_eq!(experiment.trials()[0].total_points(), 1_000_000);

    let pi_est = experiment.average_estimated_pi().unwrap();
    assert::close(pi_est, 3.14159, 0.05);
}

#[test]
fn estimate_does_not_depend_on_square_placement() {
    let mut rng = Xoshiro256Plus::seed_from_u64(11);

    for (center, side) in [
        (Point::new(100.0, -250.0), 0.01),
        (Point::new(-3.5, 8.25), 40.0),
    ] {
        let mut experiment = Experiment::new(center, side, 20, 5_000).unwrap();
        experiment.run(&mut rng);

        let pi_est = experiment.average_estimated_pi().unwrap();
        assert::close(pi_est, PI, 0.05);
        assert!(experiment.average_percent_error().unwrap() < 5.0);
    }
}

#[test]
fn more_points_means_less_error() {
    let mut rng = Xoshiro256Plus::seed_from_u64(1234);

    let mut coarse = Experiment::new(Point::origin(), 2.0, 50, 100).unwrap();
    let mut fine = Experiment::new(Point::origin(), 2.0, 50, 100_000).unwrap();
    coarse.run(&mut rng);
    fine.run(&mut rng);

    let coarse_err = coarse.average_percent_error().unwrap();
    let fine_err = fine.average_percent_error().unwrap();
    assert!(fine_err < coarse_err);
}

#[test]
fn invalid_configurations_are_rejected() {
    let cases = [(0.0, 1, 1), (2.0, 0, 1), (2.0, 1, 0), (-2.0, 5, 5)];
    for (side, n_trials, points_per_trial) in cases {
        let err = Experiment::new(Point::origin(), side, n_trials, points_per_trial)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }
}

#[test]
fn unrun_experiment_has_no_average() {
    let experiment = Experiment::new(Point::origin(), 2.0, 10, 100).unwrap();
    let err = experiment.average_estimated_pi().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn summary_agrees_with_aggregates() {
    let mut rng = Xoshiro256Plus::seed_from_u64(77);
    let mut experiment = Experiment::new(Point::origin(), 2.0, 10, 1_000).unwrap();
    experiment.run(&mut rng);

    let summary = experiment.summary().unwrap();
    assert_eq!(summary.n_trials, 10);
    assert_eq!(summary.points_per_trial, 1_000);
    assert_eq!(
        summary.average_estimated_pi,
        experiment.average_estimated_pi().unwrap()
    );
    assert_eq!(
        summary.average_percent_error,
        experiment.average_percent_error().unwrap()
    );
    approx::assert_relative_eq!(
        summary.sum_estimated_pi / 10.0,
        summary.average_estimated_pi,
        max_relative = 1E-12
    );
    assert!((summary.best_estimated_pi - PI).abs() <= (summary.worst_estimated_pi - PI).abs());
}

#[cfg(feature = "serde1")]
#[test]
fn summary_serializes_to_json() {
    let mut rng = Xoshiro256Plus::seed_from_u64(5);
    let mut experiment = Experiment::new(Point::origin(), 2.0, 2, 10).unwrap();
    experiment.run(&mut rng);

    let summary = experiment.summary().unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["n_trials"], 2);
    assert_eq!(json["points_per_trial"], 10);

    let json = serde_json::to_string(&experiment).unwrap();
    let restored: Experiment = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.trials(), experiment.trials());
}

#[cfg(feature = "serde1")]
#[test]
fn deserialize_rejects_invalid_experiments() {
    let mut rng = Xoshiro256Plus::seed_from_u64(6);
    let mut experiment = Experiment::new(Point::origin(), 2.0, 2, 10).unwrap();
    experiment.run(&mut rng);
    let valid = serde_json::to_value(&experiment).unwrap();

    let mut zero_trials = valid.clone();
    zero_trials["n_trials"] = serde_json::json!(0);
    assert!(serde_json::from_value::<Experiment>(zero_trials).is_err());

    let mut too_many_trials = valid.clone();
    too_many_trials["n_trials"] = serde_json::json!(1);
    assert!(serde_json::from_value::<Experiment>(too_many_trials).is_err());

    let mut wrong_point_count = valid.clone();
    wrong_point_count["points_per_trial"] = serde_json::json!(11);
    assert!(serde_json::from_value::<Experiment>(wrong_point_count).is_err());

    let mut bad_side = valid.clone();
    bad_side["square"]["side"] = serde_json::json!(-2.0);
    assert!(serde_json::from_value::<Experiment>(bad_side).is_err());

    let restored: Experiment = serde_json::from_value(valid).unwrap();
    assert_eq!(restored, experiment);
}
