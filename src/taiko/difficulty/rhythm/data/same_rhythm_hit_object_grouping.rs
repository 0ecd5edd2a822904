use crate::taiko::difficulty::object::TaikoDifficultyObjects;

/// Member of a [`SameRhythmHitObjectGrouping`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RhythmChild {
    pub hit_object: usize,
    /// Time until the next member, if known.
    pub interval: Option<f64>,
}

impl RhythmChild {
    pub const fn new(hit_object: usize, interval: Option<f64>) -> Self {
        Self {
            hit_object,
            interval,
        }
    }
}

/// Notes whose intervals are all equal.
#[derive(Clone, Debug)]
pub struct SameRhythmHitObjectGrouping {
    pub children: Vec<RhythmChild>,
    /// Use [`Self::previous`] to access
    previous: Option<usize>,
    start_time: f64,
    end_time: f64,
}

impl SameRhythmHitObjectGrouping {
    pub(crate) fn new(
        previous: Option<usize>,
        children: Vec<RhythmChild>,
        objects: &TaikoDifficultyObjects,
    ) -> Self {
        let start_time = children
            .first()
            .and_then(|child| objects.get(child.hit_object))
            .map_or(0.0, |h| h.start_time);

        let end_time = children
            .last()
            .and_then(|child| objects.get(child.hit_object))
            .map_or(start_time, |h| h.start_time);

        Self {
            children,
            previous,
            start_time,
            end_time,
        }
    }

    pub fn previous<'a>(&self, objects: &'a TaikoDifficultyObjects) -> Option<&'a Self> {
        self.previous.and_then(|idx| objects.same_rhythm_group(idx))
    }

    pub fn first_hit_object(&self) -> Option<usize> {
        self.children.first().map(|child| child.hit_object)
    }

    /// Start time of the first member.
    pub const fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Start time of the last member.
    pub const fn end_time(&self) -> f64 {
        self.end_time
    }

    pub const fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}
