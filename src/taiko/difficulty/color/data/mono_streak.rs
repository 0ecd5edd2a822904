use crate::taiko::{difficulty::object::TaikoDifficultyObjects, object::HitType};

use super::alternating_mono_pattern::AlternatingMonoPattern;

/// A run of consecutive notes of the same colour.
#[derive(Clone, Debug)]
pub struct MonoStreak {
    pub hit_objects: Vec<usize>,
    pub parent: Option<usize>,
    /// Position among the streaks of the parent.
    pub idx: usize,
}

impl MonoStreak {
    pub(crate) const fn new(hit_objects: Vec<usize>) -> Self {
        Self {
            hit_objects,
            parent: None,
            idx: 0,
        }
    }

    pub fn hit_type(&self, objects: &TaikoDifficultyObjects) -> Option<HitType> {
        self.first_hit_object()
            .and_then(|idx| objects.get(idx))
            .map(|h| h.base_hit_type)
    }

    pub fn first_hit_object(&self) -> Option<usize> {
        self.hit_objects.first().copied()
    }

    pub fn parent<'a>(
        &self,
        objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a AlternatingMonoPattern> {
        self.parent.and_then(|idx| objects.alternating_mono_pattern(idx))
    }
}
