use std::f64::consts::E;

use crate::{
    taiko::difficulty::{
        color::data::{
            alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
            repeating_hit_patterns::RepeatingHitPatterns,
        },
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
    util::difficulty::{is_ratio_within, logistic, logistic_exp},
};

pub struct ColorEvaluator;

impl ColorEvaluator {
    /// Relative difference up to which two delta times count as consistent.
    pub const CONSISTENCY_THRESHOLD: f64 = 0.01;
    const DOUBLET_THRESHOLD: f64 = 0.01;

    /// Evaluate the difficulty of the first note of a [`MonoStreak`].
    pub fn evaluate_mono_streak_diff(
        mono_streak: &MonoStreak,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        let parent_eval = mono_streak.parent(objects).map_or(0.0, |parent| {
            Self::evaluate_alternating_mono_pattern_diff(parent, objects)
        });

        logistic_exp(E * mono_streak.idx as f64 - 2.0 * E, None) * parent_eval * 0.5
    }

    /// Evaluate the difficulty of the first note of an
    /// [`AlternatingMonoPattern`].
    pub fn evaluate_alternating_mono_pattern_diff(
        alternating_mono_pattern: &AlternatingMonoPattern,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        let parent_eval = alternating_mono_pattern
            .parent(objects)
            .map_or(0.0, Self::evaluate_repeating_hit_patterns_diff);

        logistic_exp(E * alternating_mono_pattern.idx as f64 - 2.0 * E, None) * parent_eval
    }

    /// Evaluate the difficulty of the first note of a
    /// [`RepeatingHitPatterns`].
    pub fn evaluate_repeating_hit_patterns_diff(
        repeating_hit_patterns: &RepeatingHitPatterns,
    ) -> f64 {
        let repetition_interval = repeating_hit_patterns.repetition_interval as f64;

        2.0 * (1.0 - logistic_exp(E * repetition_interval - 2.0 * E, None))
    }

    /// Evaluate the colour difficulty of a note.
    ///
    /// Only notes that start a colour grouping carry difficulty.
    pub fn evaluate_difficulty_of(
        hit_object: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        Self::evaluate_difficulty_with(hit_object, objects, Self::CONSISTENCY_THRESHOLD)
    }

    pub(crate) fn evaluate_difficulty_with(
        hit_object: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
        consistency_threshold: f64,
    ) -> f64 {
        let color_data = &hit_object.color_data;
        let mut difficulty = 0.0;

        if let Some(mono_streak) = color_data.mono_streak(objects) {
            if mono_streak.first_hit_object() == Some(hit_object.idx) {
                difficulty += Self::evaluate_mono_streak_diff(mono_streak, objects);
            }
        }

        if let Some(alternating_mono_pattern) = color_data.alternating_mono_pattern(objects) {
            if alternating_mono_pattern.first_hit_object(objects) == Some(hit_object.idx) {
                difficulty += Self::evaluate_alternating_mono_pattern_diff(
                    alternating_mono_pattern,
                    objects,
                );
            }
        }

        if let Some(repeating_hit_patterns) = color_data.repeating_hit_patterns(objects) {
            if repeating_hit_patterns.first_hit_object(objects) == Some(hit_object.idx) {
                difficulty += Self::evaluate_repeating_hit_patterns_diff(repeating_hit_patterns);
            }
        }

        let consistency_penalty =
            Self::consistent_interval_penalty(hit_object, objects, Some(consistency_threshold));
        difficulty *= consistency_penalty;

        difficulty
    }

    /// Calculates a penalty in `(0, 1]` based on how many consecutive delta
    /// times before the note are consistent, compounded with
    /// [`doublet_penalty`].
    ///
    /// [`doublet_penalty`]: Self::doublet_penalty
    pub fn consistent_interval_penalty(
        hit_object: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
        threshold: Option<f64>,
    ) -> f64 {
        let threshold = threshold.unwrap_or(Self::CONSISTENCY_THRESHOLD);

        let mut consistent_count = 0_usize;
        let mut total_delta_time = 0.0;

        let mut curr = hit_object;

        while let Some(prev) = curr.previous(0, objects) {
            // * An interval pair needs an object before the previous one
            if prev.previous(0, objects).is_none() {
                break;
            }

            let curr_interval = curr.delta_time;
            let prev_interval = prev.delta_time;

            if is_ratio_within(curr_interval, prev_interval, threshold) {
                consistent_count += 1;
                total_delta_time += curr_interval;
            }

            curr = prev;
        }

        let penalty_scale = f64::min(consistent_count as f64 * 0.01, 0.10);
        let delta_penalty =
            (1.0 - total_delta_time / (consistent_count + 1) as f64 * 0.001).clamp(0.85, 1.0);

        let penalty = Self::doublet_penalty(hit_object, objects);

        (1.0 - f64::min(penalty_scale, 1.0 - delta_penalty)) * penalty
    }

    /// Penalizes a run of equal intervals that follows a short doublet after
    /// a long gap. Returns `1.0` if that shape is not present.
    pub fn doublet_penalty(
        hit_object: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        let rhythm_data = &hit_object.rhythm_data;

        let (Some(even_hit_objects), Some(_), Some(_)) = (
            rhythm_data.same_rhythm_grouped_hit_objects(objects),
            rhythm_data.same_patterns_grouped_hit_objects(objects),
            hit_object.color_data.mono_streak(objects),
        ) else {
            return 1.0;
        };

        let Some(prev) = even_hit_objects.previous(objects) else {
            return 1.0;
        };

        if prev.previous(objects).is_none() {
            return 1.0;
        }

        let children = &even_hit_objects.children;

        let is_doublet_shape = prev.children.len() == 2
            && even_hit_objects.start_time() - prev.end_time() > 100.0
            && prev.duration() < 55.0
            && children.len() > 1;

        if !is_doublet_shape {
            return 1.0;
        }

        let doublet_count = children
            .windows(2)
            .filter(|pair| match (pair[0].interval, pair[1].interval) {
                (Some(interval), Some(next_interval)) => {
                    is_ratio_within(interval, next_interval, Self::DOUBLET_THRESHOLD)
                }
                _ => false,
            })
            .count();

        let doublet_ratio = doublet_count as f64 / (children.len() - 1) as f64;

        logistic(doublet_ratio, 0.5, 1.5, Some(1.0)).powf(1.2)
    }
}
