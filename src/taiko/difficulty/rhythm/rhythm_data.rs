use crate::taiko::difficulty::{
    object::TaikoDifficultyObjects,
    rhythm::data::{
        same_patterns_grouped_hit_objects::SamePatternsGroupedHitObjects,
        same_rhythm_hit_object_grouping::SameRhythmHitObjectGrouping,
    },
};

/// Indices of the rhythm groupings a note belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RhythmData {
    pub same_rhythm_grouped_hit_objects: Option<usize>,
    pub same_patterns_grouped_hit_objects: Option<usize>,
}

impl RhythmData {
    pub fn same_rhythm_grouped_hit_objects<'a>(
        &self,
        objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a SameRhythmHitObjectGrouping> {
        self.same_rhythm_grouped_hit_objects
            .and_then(|idx| objects.same_rhythm_group(idx))
    }

    pub fn same_patterns_grouped_hit_objects<'a>(
        &self,
        objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a SamePatternsGroupedHitObjects> {
        self.same_patterns_grouped_hit_objects
            .and_then(|idx| objects.same_patterns_group(idx))
    }
}
