use crate::taiko::difficulty::object::TaikoDifficultyObjects;

use super::same_rhythm_hit_object_grouping::SameRhythmHitObjectGrouping;

/// Consecutive [`SameRhythmHitObjectGrouping`]s that share a pattern.
#[derive(Clone, Debug)]
pub struct SamePatternsGroupedHitObjects {
    pub groups: Vec<usize>,
    pub previous: Option<usize>,
}

impl SamePatternsGroupedHitObjects {
    pub(crate) const fn new(previous: Option<usize>, groups: Vec<usize>) -> Self {
        Self { groups, previous }
    }

    pub fn first_hit_object(&self, objects: &TaikoDifficultyObjects) -> Option<usize> {
        self.groups
            .first()
            .and_then(|&idx| objects.same_rhythm_group(idx))
            .and_then(SameRhythmHitObjectGrouping::first_hit_object)
    }
}
