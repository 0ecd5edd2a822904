use std::{
    f64::consts::E,
    panic::{self, UnwindSafe},
};

use rosu_taiko_eval::taiko::{
    ColorEvaluator, GroupingError, HitType, NoteDifficulty, TaikoDifficultyObjects,
    TaikoEvaluation,
};

use self::common::*;

mod common;

fn logistic_exp(exp: f64) -> f64 {
    1.0 / (1.0 + f64::exp(exp))
}

/// Two mono streaks of two notes each, forming a single pattern and cycle.
fn dons_and_kats() -> Result<TaikoDifficultyObjects, GroupingError> {
    let hit_types = [HitType::Center, HitType::Center, HitType::Rim, HitType::Rim];
    let mut objects = TaikoDifficultyObjects::with_capacity(hit_types.len());

    for (i, hit_type) in hit_types.into_iter().enumerate() {
        objects.push(i as f64 * 150.0, 150.0, 560.0, hit_type);
    }

    let dons = objects.add_mono_streak(vec![0, 1])?;
    let kats = objects.add_mono_streak(vec![2, 3])?;
    let pattern = objects.add_alternating_mono_pattern(vec![dons, kats])?;
    objects.add_repeating_hit_patterns(vec![pattern], 17)?;

    Ok(objects)
}

#[test]
fn dons_and_kats_values() {
    let objects = dons_and_kats().unwrap();
    let actual = TaikoEvaluation::new().calculate(&objects);

    let cycle = 2.0 * (1.0 - logistic_exp(17.0 * E - 2.0 * E));
    let pattern = logistic_exp(-2.0 * E) * cycle;
    let first_mono = logistic_exp(-2.0 * E) * pattern * 0.5;
    let second_mono = logistic_exp(E - 2.0 * E) * pattern * 0.5;

    let note = |color: f64| NoteDifficulty {
        color,
        reading: 0.5,
        low_velocity: 0.0,
        object_density: actual[0].object_density,
    };

    let expected = [
        note(first_mono + pattern + cycle),
        note(0.0),
        // * One consistent pair before the note
        note(second_mono * 0.99),
        note(0.0),
    ];

    assert_eq!(actual.len(), expected.len());

    for (i, (actual, expected)) in actual.iter().zip(expected.iter()).enumerate() {
        run(actual, expected, i);
    }
}

#[test]
fn consistent_stream_before_burst() {
    let objects = alternating(&[200.0, 200.0, 200.0, 200.0, 50.0], 200.0);
    let burst = objects.get(4).unwrap();

    let penalty = ColorEvaluator::consistent_interval_penalty(burst, &objects, None);
    assert_eq_float(penalty, 0.98);

    let explicit = ColorEvaluator::consistent_interval_penalty(
        burst,
        &objects,
        Some(ColorEvaluator::CONSISTENCY_THRESHOLD),
    );
    assert_eq_float(penalty, explicit);
}

#[test]
fn evaluation_is_deterministic() {
    let objects = dons_and_kats().unwrap();
    let evaluation = TaikoEvaluation::new();

    let first = evaluation.calculate(&objects);
    let second = evaluation.calculate(&objects);

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.color.to_bits(), b.color.to_bits());
        assert_eq!(a.reading.to_bits(), b.reading.to_bits());
        assert_eq!(a.low_velocity.to_bits(), b.low_velocity.to_bits());
        assert_eq!(a.object_density.to_bits(), b.object_density.to_bits());
    }
}

#[test]
fn rejected_groupings_leave_no_trace() {
    let mut objects = alternating(&[150.0, 150.0, 150.0], 560.0);

    assert_eq!(
        objects.add_mono_streak(vec![0, 1]),
        Err(GroupingError::MixedHitTypes { hit_object: 1 })
    );

    let difficulties = TaikoEvaluation::new().calculate(&objects);

    assert!(difficulties.iter().all(|d| d.color.abs() < f64::EPSILON));
    assert!(objects.mono_streak(0).is_none());
}

#[test]
fn doublet_before_even_stream() {
    let mut objects = TaikoDifficultyObjects::with_capacity(7);
    let mut start_time = 0.0;

    for delta_time in [100.0, 100.0, 200.0, 40.0, 200.0, 100.0, 100.0] {
        start_time += delta_time;
        objects.push(start_time, delta_time, 200.0, HitType::Center);
    }

    objects.add_same_rhythm_group_of(&[0, 1]).unwrap();
    let doublet = objects.add_same_rhythm_group_of(&[2, 3]).unwrap();
    let stream = objects.add_same_rhythm_group_of(&[4, 5, 6]).unwrap();
    let patterns = objects.add_same_patterns_group(vec![doublet, stream]).unwrap();
    objects.add_mono_streak(vec![4, 5, 6]).unwrap();

    let patterns = objects.same_patterns_group(patterns).unwrap();
    assert_eq!(patterns.first_hit_object(&objects), Some(2));

    // One of two interval pairs matches
    let penalty = ColorEvaluator::doublet_penalty(objects.get(4).unwrap(), &objects);
    assert_eq_float(penalty, 0.5_f64.powf(1.2));

    // Notes of the doublet itself are not penalized
    let penalty = ColorEvaluator::doublet_penalty(objects.get(2).unwrap(), &objects);
    assert_eq_float(penalty, 1.0);
}

#[test]
fn slow_scroll_only_affects_low_velocity() {
    let objects = alternating(&[300.0, 300.0], 90.0);
    let difficulties = TaikoEvaluation::new().calculate(&objects);

    for difficulty in difficulties {
        assert!(difficulty.reading < 0.01, "{}", difficulty.reading);
        assert!(difficulty.low_velocity < 0.0, "{}", difficulty.low_velocity);
        assert!(difficulty.object_density > 0.0 && difficulty.object_density < 1.0);
    }
}

trait AssertEq {
    fn assert_eq(&self, expected: &Self);
}

impl AssertEq for NoteDifficulty {
    fn assert_eq(&self, expected: &Self) {
        let Self {
            color,
            reading,
            low_velocity,
            object_density,
        } = self;

        assert_eq_float(*color, expected.color);
        assert_eq_float(*reading, expected.reading);
        assert_eq_float(*low_velocity, expected.low_velocity);
        assert_eq_float(*object_density, expected.object_density);
    }
}

fn run<A>(actual: &A, expected: &A, note: usize)
where
    A: AssertEq,
    for<'a> &'a A: UnwindSafe,
{
    if panic::catch_unwind(|| actual.assert_eq(expected)).is_err() {
        panic!("Note: {note}");
    }
}
