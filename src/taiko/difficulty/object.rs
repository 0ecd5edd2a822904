use std::slice::Iter;

use crate::taiko::object::HitType;

use super::{
    color::{
        color_data::ColorData,
        data::{
            alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
            repeating_hit_patterns::RepeatingHitPatterns,
        },
    },
    rhythm::{
        data::{
            same_patterns_grouped_hit_objects::SamePatternsGroupedHitObjects,
            same_rhythm_hit_object_grouping::SameRhythmHitObjectGrouping,
        },
        rhythm_data::RhythmData,
    },
};

/// A single note of the sequence alongside the groupings it belongs to.
#[derive(Clone, Debug)]
pub struct TaikoDifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    pub delta_time: f64,
    /// Tempo adjusted by the local scroll speed.
    pub effective_bpm: f64,
    pub base_hit_type: HitType,
    pub color_data: ColorData,
    pub rhythm_data: RhythmData,
}

impl TaikoDifficultyObject {
    /// The object `backwards_idx + 1` positions before this one.
    pub fn previous<'a>(
        &self,
        backwards_idx: usize,
        objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a Self> {
        self.idx
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| objects.get(idx))
    }
}

impl PartialEq for TaikoDifficultyObject {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}

/// Flat, append-only storage of all notes and their groupings.
///
/// Groupings refer to each other and to notes through indices into this
/// container. Use the `add_*` methods to attach groupings so that the
/// containment invariants hold.
#[derive(Clone, Debug, Default)]
pub struct TaikoDifficultyObjects {
    pub(crate) objects: Vec<TaikoDifficultyObject>,
    pub(crate) mono_streaks: Vec<MonoStreak>,
    pub(crate) alternating_mono_patterns: Vec<AlternatingMonoPattern>,
    pub(crate) repeating_hit_patterns: Vec<RepeatingHitPatterns>,
    pub(crate) same_rhythm_groups: Vec<SameRhythmHitObjectGrouping>,
    pub(crate) same_patterns_groups: Vec<SamePatternsGroupedHitObjects>,
}

impl TaikoDifficultyObjects {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Append a note and return its index.
    ///
    /// The note belongs to no grouping until one is attached.
    pub fn push(
        &mut self,
        start_time: f64,
        delta_time: f64,
        effective_bpm: f64,
        hit_type: HitType,
    ) -> usize {
        let idx = self.objects.len();

        self.objects.push(TaikoDifficultyObject {
            idx,
            start_time,
            delta_time,
            effective_bpm,
            base_hit_type: hit_type,
            color_data: ColorData::default(),
            rhythm_data: RhythmData::default(),
        });

        idx
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, TaikoDifficultyObject> {
        self.objects.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&TaikoDifficultyObject> {
        self.objects.get(idx)
    }

    pub fn mono_streak(&self, idx: usize) -> Option<&MonoStreak> {
        self.mono_streaks.get(idx)
    }

    pub fn alternating_mono_pattern(&self, idx: usize) -> Option<&AlternatingMonoPattern> {
        self.alternating_mono_patterns.get(idx)
    }

    pub fn repeating_hit_patterns(&self, idx: usize) -> Option<&RepeatingHitPatterns> {
        self.repeating_hit_patterns.get(idx)
    }

    pub fn same_rhythm_group(&self, idx: usize) -> Option<&SameRhythmHitObjectGrouping> {
        self.same_rhythm_groups.get(idx)
    }

    pub fn same_patterns_group(&self, idx: usize) -> Option<&SamePatternsGroupedHitObjects> {
        self.same_patterns_groups.get(idx)
    }
}

impl<'a> IntoIterator for &'a TaikoDifficultyObjects {
    type Item = &'a TaikoDifficultyObject;
    type IntoIter = Iter<'a, TaikoDifficultyObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Notes may be evaluated from multiple threads at once.
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<TaikoDifficultyObjects>();
};
