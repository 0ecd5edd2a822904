use crate::taiko::difficulty::object::{TaikoDifficultyObject, TaikoDifficultyObjects};

pub use self::{
    color::{
        color_data::ColorData,
        data::{
            alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
            repeating_hit_patterns::RepeatingHitPatterns,
        },
    },
    error::{GroupKind, GroupingError},
    evaluators::{ColorEvaluator, ReadingEvaluator},
    rhythm::{
        data::{
            same_patterns_grouped_hit_objects::SamePatternsGroupedHitObjects,
            same_rhythm_hit_object_grouping::{RhythmChild, SameRhythmHitObjectGrouping},
        },
        rhythm_data::RhythmData,
    },
};

mod color;
mod error;
mod evaluators;
pub(crate) mod object;
mod rhythm;

/// Per-note evaluation of colour and reading difficulty on a
/// [`TaikoDifficultyObjects`] sequence.
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct TaikoEvaluation {
    consistency_threshold: Option<f64>,
}

impl TaikoEvaluation {
    /// Create a new evaluation with default settings.
    pub const fn new() -> Self {
        Self {
            consistency_threshold: None,
        }
    }

    /// Relative difference up to which two consecutive delta times are
    /// considered consistent.
    ///
    /// Negative or non-finite values fall back to the default of
    /// [`ColorEvaluator::CONSISTENCY_THRESHOLD`].
    pub const fn consistency_threshold(self, consistency_threshold: f64) -> Self {
        Self {
            consistency_threshold: Some(consistency_threshold),
        }
    }

    /// Evaluate all notes of the sequence.
    pub fn calculate(&self, objects: &TaikoDifficultyObjects) -> Vec<NoteDifficulty> {
        let difficulties: Vec<_> = objects
            .iter()
            .map(|hit_object| self.evaluate(hit_object, objects))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            notes = difficulties.len(),
            mono_streaks = objects.mono_streaks.len(),
            repeating_hit_patterns = objects.repeating_hit_patterns.len(),
            "Evaluated taiko notes"
        );

        difficulties
    }

    /// Evaluate a single note of the sequence.
    pub fn evaluate(
        &self,
        hit_object: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> NoteDifficulty {
        let object_density = ReadingEvaluator::object_density(hit_object);

        // * Drumrolls and swells are exempt from colour and reading
        if !hit_object.base_hit_type.is_hit() {
            return NoteDifficulty {
                object_density,
                ..NoteDifficulty::default()
            };
        }

        NoteDifficulty {
            color: ColorEvaluator::evaluate_difficulty_with(
                hit_object,
                objects,
                self.get_consistency_threshold(),
            ),
            reading: ReadingEvaluator::evaluate_diff_of(hit_object),
            low_velocity: ReadingEvaluator::low_velocity_diff_of(hit_object),
            object_density,
        }
    }

    pub(crate) fn get_consistency_threshold(&self) -> f64 {
        match self.consistency_threshold {
            Some(threshold) if threshold.is_finite() && threshold >= 0.0 => threshold,
            _ => ColorEvaluator::CONSISTENCY_THRESHOLD,
        }
    }
}

/// The evaluated difficulty values of a single note.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NoteDifficulty {
    /// Colour difficulty, including consistency and doublet penalties.
    pub color: f64,
    /// High scroll speed difficulty in `[0, 1]`.
    pub reading: f64,
    /// Low scroll speed adjustment; zero at 150 effective BPM and above.
    pub low_velocity: f64,
    pub object_density: f64,
}
