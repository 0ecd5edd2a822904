use crate::{taiko::difficulty::object::TaikoDifficultyObject, util::difficulty::logistic};

pub struct ReadingEvaluator;

impl ReadingEvaluator {
    const HIGH_VELOCITY_MULTIPLIER: f64 = 1.0;
    const LOW_VELOCITY_MULTIPLIER: f64 = 1.0;
    const LOW_VELOCITY_BPM_CAP: f64 = 150.0;

    /// Calculates the influence of high slider velocities on the note's
    /// difficulty, saturating as the effective BPM moves through the high
    /// velocity range.
    pub fn evaluate_diff_of(note_object: &TaikoDifficultyObject) -> f64 {
        let high_velocity = VelocityRange::new(480.0, 640.0);

        let effective_bpm = Self::effective_bpm(note_object);

        Self::HIGH_VELOCITY_MULTIPLIER
            * logistic(
                effective_bpm,
                high_velocity.center(),
                1.0 / (high_velocity.range() / 10.0),
                None,
            )
    }

    /// Adjustment for notes scrolling slower than 150 effective BPM.
    ///
    /// Kept separate from [`evaluate_diff_of`], the two are not meant to be
    /// summed. The value is zero from 150 BPM upwards and negative for most
    /// slower notes.
    ///
    /// [`evaluate_diff_of`]: Self::evaluate_diff_of
    pub fn low_velocity_diff_of(note_object: &TaikoDifficultyObject) -> f64 {
        let bpm_cap = Self::LOW_VELOCITY_BPM_CAP;
        let effective_cap_bpm = f64::min(Self::effective_bpm(note_object), bpm_cap);

        let low_velocity_bonus =
            f64::sqrt(f64::abs(effective_cap_bpm - bpm_cap) / bpm_cap).clamp(0.0, 0.57);

        let object_density = Self::object_density(note_object);

        let value = 200.0 / effective_cap_bpm - bpm_cap * 1.33;
        let adjusted_value = (value / effective_cap_bpm * 3.0) * object_density / 1.5;

        Self::LOW_VELOCITY_MULTIPLIER * adjusted_value * (low_velocity_bonus * 0.9)
    }

    /// Object density based on the delta time and effective BPM, in `(0, 1)`.
    pub fn object_density(note_object: &TaikoDifficultyObject) -> f64 {
        let object_density = 50.0 * logistic(note_object.delta_time, 200.0, 1.0 / 300.0, None);

        1.0 - logistic(
            Self::effective_bpm(note_object),
            object_density,
            1.0 / 240.0,
            None,
        )
    }

    // * Apply a cap to prevent outlier values on maps that exceed the editor's parameters.
    fn effective_bpm(note_object: &TaikoDifficultyObject) -> f64 {
        f64::max(1.0, note_object.effective_bpm)
    }
}

struct VelocityRange {
    min: f64,
    max: f64,
}

impl VelocityRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    const fn center(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    const fn range(&self) -> f64 {
        self.max - self.min
    }
}
