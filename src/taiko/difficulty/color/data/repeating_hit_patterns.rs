use crate::taiko::difficulty::object::TaikoDifficultyObjects;

/// A cycle of [`AlternatingMonoPattern`]s.
///
/// [`AlternatingMonoPattern`]: super::alternating_mono_pattern::AlternatingMonoPattern
#[derive(Clone, Debug)]
pub struct RepeatingHitPatterns {
    pub alternating_mono_patterns: Vec<usize>,
    pub prev: Option<usize>,
    /// How many cycles back the closest repetition of this cycle is.
    /// Larger values mean less repetitive.
    pub repetition_interval: usize,
}

impl RepeatingHitPatterns {
    /// Upper bound of sensible repetition intervals; anything further back
    /// counts as no repetition.
    pub const MAX_REPETITION_INTERVAL: usize = 16;

    pub(crate) const fn new(
        alternating_mono_patterns: Vec<usize>,
        prev: Option<usize>,
        repetition_interval: usize,
    ) -> Self {
        Self {
            alternating_mono_patterns,
            prev,
            repetition_interval,
        }
    }

    pub fn first_hit_object(&self, objects: &TaikoDifficultyObjects) -> Option<usize> {
        self.alternating_mono_patterns
            .first()
            .and_then(|&idx| objects.alternating_mono_pattern(idx))
            .and_then(|pattern| pattern.first_hit_object(objects))
    }
}
