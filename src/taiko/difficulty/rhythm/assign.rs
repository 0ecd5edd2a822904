use crate::taiko::difficulty::{
    error::{GroupKind, GroupingError, check_members, reject},
    object::TaikoDifficultyObjects,
};

use super::data::{
    same_patterns_grouped_hit_objects::SamePatternsGroupedHitObjects,
    same_rhythm_hit_object_grouping::{RhythmChild, SameRhythmHitObjectGrouping},
};

impl TaikoDifficultyObjects {
    /// Group the given children into a [`SameRhythmHitObjectGrouping`] and
    /// return its index.
    ///
    /// The previously added group becomes the new group's predecessor.
    pub fn add_same_rhythm_group(
        &mut self,
        children: Vec<RhythmChild>,
    ) -> Result<usize, GroupingError> {
        let hit_objects: Vec<_> = children.iter().map(|child| child.hit_object).collect();
        check_members(GroupKind::SameRhythm, &hit_objects)?;

        for &idx in hit_objects.iter() {
            let Some(h) = self.objects.get(idx) else {
                return reject(GroupingError::UnknownHitObject(idx));
            };

            if h.rhythm_data.same_rhythm_grouped_hit_objects.is_some() {
                return reject(GroupingError::AlreadyAssigned {
                    kind: GroupKind::SameRhythm,
                    idx,
                });
            }
        }

        let group_idx = self.same_rhythm_groups.len();

        for &idx in hit_objects.iter() {
            self.objects[idx].rhythm_data.same_rhythm_grouped_hit_objects = Some(group_idx);
        }

        let group = SameRhythmHitObjectGrouping::new(group_idx.checked_sub(1), children, self);
        self.same_rhythm_groups.push(group);

        Ok(group_idx)
    }

    /// Same as [`add_same_rhythm_group`] but each child's interval is the
    /// time until the next hit object of the group. The last child has no
    /// interval.
    ///
    /// [`add_same_rhythm_group`]: Self::add_same_rhythm_group
    pub fn add_same_rhythm_group_of(
        &mut self,
        hit_objects: &[usize],
    ) -> Result<usize, GroupingError> {
        let start_time = |idx: usize| self.objects.get(idx).map(|h| h.start_time);

        let children: Vec<_> = hit_objects
            .iter()
            .enumerate()
            .map(|(i, &idx)| {
                let interval = hit_objects
                    .get(i + 1)
                    .and_then(|&next| start_time(next).zip(start_time(idx)))
                    .map(|(next, curr)| next - curr);

                RhythmChild::new(idx, interval)
            })
            .collect();

        self.add_same_rhythm_group(children)
    }

    /// Group the given same rhythm groups into a
    /// [`SamePatternsGroupedHitObjects`] and return its index.
    ///
    /// The previously added group becomes the new group's predecessor.
    pub fn add_same_patterns_group(&mut self, groups: Vec<usize>) -> Result<usize, GroupingError> {
        check_members(GroupKind::SamePatterns, &groups)?;

        for &idx in groups.iter() {
            let Some(group) = self.same_rhythm_groups.get(idx) else {
                return reject(GroupingError::UnknownSameRhythmGroup(idx));
            };

            // * Members of a same rhythm group are always assigned together
            let assigned = group
                .first_hit_object()
                .and_then(|idx| self.objects.get(idx))
                .is_some_and(|h| h.rhythm_data.same_patterns_grouped_hit_objects.is_some());

            if assigned {
                return reject(GroupingError::AlreadyAssigned {
                    kind: GroupKind::SamePatterns,
                    idx,
                });
            }
        }

        let patterns_idx = self.same_patterns_groups.len();

        for &group_idx in groups.iter() {
            for child in self.same_rhythm_groups[group_idx].children.iter() {
                self.objects[child.hit_object]
                    .rhythm_data
                    .same_patterns_grouped_hit_objects = Some(patterns_idx);
            }
        }

        self.same_patterns_groups.push(SamePatternsGroupedHitObjects::new(
            patterns_idx.checked_sub(1),
            groups,
        ));

        Ok(patterns_idx)
    }
}

#[cfg(test)]
mod tests {
    use crate::taiko::object::HitType;

    use super::*;

    fn objects(start_times: &[f64]) -> TaikoDifficultyObjects {
        let mut objects = TaikoDifficultyObjects::with_capacity(start_times.len());
        let mut last = 0.0;

        for &start_time in start_times {
            objects.push(start_time, start_time - last, 200.0, HitType::Center);
            last = start_time;
        }

        objects
    }

    #[test]
    fn derives_times_and_intervals() {
        let mut objects = objects(&[0.0, 50.0, 300.0, 400.0, 500.0]);

        let doublet = objects.add_same_rhythm_group_of(&[0, 1]).unwrap();
        let stream = objects.add_same_rhythm_group_of(&[2, 3, 4]).unwrap();

        let group = objects.same_rhythm_group(stream).unwrap();
        assert!((group.start_time() - 300.0).abs() < f64::EPSILON);
        assert!((group.end_time() - 500.0).abs() < f64::EPSILON);
        assert!((group.duration() - 200.0).abs() < f64::EPSILON);
        assert_eq!(group.first_hit_object(), Some(2));
        assert_eq!(
            group.children,
            vec![
                RhythmChild::new(2, Some(100.0)),
                RhythmChild::new(3, Some(100.0)),
                RhythmChild::new(4, None),
            ]
        );

        let prev = group.previous(&objects).unwrap();
        assert!((prev.duration() - 50.0).abs() < f64::EPSILON);
        assert!(prev.previous(&objects).is_none());

        let patterns = objects.add_same_patterns_group(vec![doublet, stream]).unwrap();
        let patterns = objects.same_patterns_group(patterns).unwrap();

        assert_eq!(patterns.first_hit_object(&objects), Some(0));
        assert_eq!(patterns.groups, vec![doublet, stream]);
        assert!(patterns.previous.is_none());
        assert!(objects.iter().all(|h| {
            h.rhythm_data.same_patterns_grouped_hit_objects.is_some()
                && h.rhythm_data.same_rhythm_grouped_hit_objects.is_some()
        }));
    }

    #[test]
    fn rejects_invalid_groups() {
        let mut objects = objects(&[0.0, 100.0, 200.0]);

        assert_eq!(
            objects.add_same_rhythm_group(Vec::new()),
            Err(GroupingError::EmptyGroup(GroupKind::SameRhythm))
        );
        assert_eq!(
            objects.add_same_rhythm_group_of(&[0, 5]),
            Err(GroupingError::UnknownHitObject(5))
        );

        let group = objects.add_same_rhythm_group_of(&[0, 1]).unwrap();

        assert_eq!(
            objects.add_same_rhythm_group_of(&[1, 2]),
            Err(GroupingError::AlreadyAssigned {
                kind: GroupKind::SameRhythm,
                idx: 1
            })
        );
        assert_eq!(
            objects.add_same_patterns_group(vec![group, group + 1]),
            Err(GroupingError::UnknownSameRhythmGroup(group + 1))
        );

        objects.add_same_patterns_group(vec![group]).unwrap();

        assert_eq!(
            objects.add_same_patterns_group(vec![group]),
            Err(GroupingError::AlreadyAssigned {
                kind: GroupKind::SamePatterns,
                idx: group
            })
        );
    }
}
