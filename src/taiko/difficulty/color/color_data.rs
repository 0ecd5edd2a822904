use crate::taiko::difficulty::{
    color::data::{
        alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
        repeating_hit_patterns::RepeatingHitPatterns,
    },
    object::TaikoDifficultyObjects,
};

/// Indices of the colour groupings a note belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorData {
    pub mono_streak: Option<usize>,
    pub alternating_mono_pattern: Option<usize>,
    pub repeating_hit_patterns: Option<usize>,
}

impl ColorData {
    pub fn mono_streak<'a>(&self, objects: &'a TaikoDifficultyObjects) -> Option<&'a MonoStreak> {
        self.mono_streak.and_then(|idx| objects.mono_streak(idx))
    }

    pub fn alternating_mono_pattern<'a>(
        &self,
        objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a AlternatingMonoPattern> {
        self.alternating_mono_pattern
            .and_then(|idx| objects.alternating_mono_pattern(idx))
    }

    pub fn repeating_hit_patterns<'a>(
        &self,
        objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a RepeatingHitPatterns> {
        self.repeating_hit_patterns
            .and_then(|idx| objects.repeating_hit_patterns(idx))
    }
}
