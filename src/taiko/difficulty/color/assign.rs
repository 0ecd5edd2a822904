use crate::taiko::difficulty::{
    error::{GroupKind, GroupingError, check_members, reject},
    object::TaikoDifficultyObjects,
};

use super::data::{
    alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
    repeating_hit_patterns::RepeatingHitPatterns,
};

impl TaikoDifficultyObjects {
    /// Group the given hit objects into a [`MonoStreak`] and return its index.
    ///
    /// All hit objects must be hits of the same colour and not yet belong to
    /// another mono streak.
    pub fn add_mono_streak(&mut self, hit_objects: Vec<usize>) -> Result<usize, GroupingError> {
        check_members(GroupKind::MonoStreak, &hit_objects)?;

        let mut hit_type = None;

        for &idx in hit_objects.iter() {
            let Some(h) = self.objects.get(idx) else {
                return reject(GroupingError::UnknownHitObject(idx));
            };

            if h.color_data.mono_streak.is_some() {
                return reject(GroupingError::AlreadyAssigned {
                    kind: GroupKind::MonoStreak,
                    idx,
                });
            }

            let expected = *hit_type.get_or_insert(h.base_hit_type);

            if !h.base_hit_type.is_hit() || h.base_hit_type != expected {
                return reject(GroupingError::MixedHitTypes { hit_object: idx });
            }
        }

        let mono_idx = self.mono_streaks.len();

        for &idx in hit_objects.iter() {
            self.objects[idx].color_data.mono_streak = Some(mono_idx);
        }

        self.mono_streaks.push(MonoStreak::new(hit_objects));

        Ok(mono_idx)
    }

    /// Group the given mono streaks into an [`AlternatingMonoPattern`] and
    /// return its index.
    ///
    /// Neighbouring streaks must differ in colour. Each streak's index within
    /// the pattern is its position in `mono_streaks`.
    pub fn add_alternating_mono_pattern(
        &mut self,
        mono_streaks: Vec<usize>,
    ) -> Result<usize, GroupingError> {
        check_members(GroupKind::AlternatingMonoPattern, &mono_streaks)?;

        let mut prev_hit_type = None;

        for &idx in mono_streaks.iter() {
            let Some(mono) = self.mono_streaks.get(idx) else {
                return reject(GroupingError::UnknownMonoStreak(idx));
            };

            if mono.parent.is_some() {
                return reject(GroupingError::AlreadyAssigned {
                    kind: GroupKind::AlternatingMonoPattern,
                    idx,
                });
            }

            let hit_type = mono.hit_type(self);

            if prev_hit_type.is_some() && prev_hit_type == hit_type {
                return reject(GroupingError::NotAlternating { mono_streak: idx });
            }

            prev_hit_type = hit_type;
        }

        let pattern_idx = self.alternating_mono_patterns.len();

        for (i, &mono_idx) in mono_streaks.iter().enumerate() {
            let mono = &mut self.mono_streaks[mono_idx];
            mono.parent = Some(pattern_idx);
            mono.idx = i;

            for &h in mono.hit_objects.iter() {
                self.objects[h].color_data.alternating_mono_pattern = Some(pattern_idx);
            }
        }

        self.alternating_mono_patterns
            .push(AlternatingMonoPattern::new(mono_streaks));

        Ok(pattern_idx)
    }

    /// Group the given alternating mono patterns into a
    /// [`RepeatingHitPatterns`] cycle and return its index.
    ///
    /// The previously added cycle becomes the new cycle's predecessor.
    /// `repetition_interval` is capped at one more than
    /// [`RepeatingHitPatterns::MAX_REPETITION_INTERVAL`].
    pub fn add_repeating_hit_patterns(
        &mut self,
        alternating_mono_patterns: Vec<usize>,
        repetition_interval: usize,
    ) -> Result<usize, GroupingError> {
        check_members(
            GroupKind::RepeatingHitPatterns,
            &alternating_mono_patterns,
        )?;

        for &idx in alternating_mono_patterns.iter() {
            let Some(pattern) = self.alternating_mono_patterns.get(idx) else {
                return reject(GroupingError::UnknownAlternatingMonoPattern(idx));
            };

            if pattern.parent.is_some() {
                return reject(GroupingError::AlreadyAssigned {
                    kind: GroupKind::RepeatingHitPatterns,
                    idx,
                });
            }
        }

        let cycle_idx = self.repeating_hit_patterns.len();

        for (i, &pattern_idx) in alternating_mono_patterns.iter().enumerate() {
            let pattern = &mut self.alternating_mono_patterns[pattern_idx];
            pattern.parent = Some(cycle_idx);
            pattern.idx = i;

            for &mono_idx in pattern.mono_streaks.iter() {
                for &h in self.mono_streaks[mono_idx].hit_objects.iter() {
                    self.objects[h].color_data.repeating_hit_patterns = Some(cycle_idx);
                }
            }
        }

        let repetition_interval = repetition_interval
            .min(RepeatingHitPatterns::MAX_REPETITION_INTERVAL + 1);

        self.repeating_hit_patterns.push(RepeatingHitPatterns::new(
            alternating_mono_patterns,
            cycle_idx.checked_sub(1),
            repetition_interval,
        ));

        Ok(cycle_idx)
    }
}
