use crate::taiko::difficulty::object::TaikoDifficultyObjects;

use super::repeating_hit_patterns::RepeatingHitPatterns;

/// Consecutive [`MonoStreak`]s whose colours alternate.
///
/// [`MonoStreak`]: super::mono_streak::MonoStreak
#[derive(Clone, Debug)]
pub struct AlternatingMonoPattern {
    pub mono_streaks: Vec<usize>,
    pub parent: Option<usize>,
    /// Position among the patterns of the parent.
    pub idx: usize,
}

impl AlternatingMonoPattern {
    pub(crate) const fn new(mono_streaks: Vec<usize>) -> Self {
        Self {
            mono_streaks,
            parent: None,
            idx: 0,
        }
    }

    pub fn first_hit_object(&self, objects: &TaikoDifficultyObjects) -> Option<usize> {
        self.mono_streaks
            .first()
            .and_then(|&idx| objects.mono_streak(idx))
            .and_then(|mono| mono.first_hit_object())
    }

    pub fn parent<'a>(
        &self,
        objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a RepeatingHitPatterns> {
        self.parent
            .and_then(|idx| objects.repeating_hit_patterns(idx))
    }
}
