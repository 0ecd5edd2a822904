use std::{error, fmt};

/// The kind of grouping that is being attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GroupKind {
    MonoStreak,
    AlternatingMonoPattern,
    RepeatingHitPatterns,
    SameRhythm,
    SamePatterns,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MonoStreak => "mono streak",
            Self::AlternatingMonoPattern => "alternating mono pattern",
            Self::RepeatingHitPatterns => "repeating hit patterns",
            Self::SameRhythm => "same rhythm group",
            Self::SamePatterns => "same patterns group",
        };

        f.write_str(name)
    }
}

/// Reasons why a grouping could not be attached to
/// [`TaikoDifficultyObjects`].
///
/// The container is left untouched whenever one of these is returned.
///
/// [`TaikoDifficultyObjects`]: crate::taiko::TaikoDifficultyObjects
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupingError {
    /// The grouping has no members.
    EmptyGroup(GroupKind),
    /// Members are not in strictly increasing order.
    UnorderedMembers(GroupKind),
    UnknownHitObject(usize),
    UnknownMonoStreak(usize),
    UnknownAlternatingMonoPattern(usize),
    UnknownSameRhythmGroup(usize),
    /// The member at index `idx` already belongs to a grouping of this kind.
    AlreadyAssigned { kind: GroupKind, idx: usize },
    /// A mono streak contains differently coloured notes or non-hits.
    MixedHitTypes { hit_object: usize },
    /// Two neighbouring mono streaks of a pattern share their colour.
    NotAlternating { mono_streak: usize },
}

impl error::Error for GroupingError {}

impl fmt::Display for GroupingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGroup(kind) => write!(f, "{kind} has no members"),
            Self::UnorderedMembers(kind) => {
                write!(f, "members of {kind} must be strictly increasing")
            }
            Self::UnknownHitObject(idx) => write!(f, "no hit object at index {idx}"),
            Self::UnknownMonoStreak(idx) => write!(f, "no mono streak at index {idx}"),
            Self::UnknownAlternatingMonoPattern(idx) => {
                write!(f, "no alternating mono pattern at index {idx}")
            }
            Self::UnknownSameRhythmGroup(idx) => {
                write!(f, "no same rhythm group at index {idx}")
            }
            Self::AlreadyAssigned { kind, idx } => {
                write!(f, "member {idx} already belongs to another {kind}")
            }
            Self::MixedHitTypes { hit_object } => {
                write!(f, "hit object {hit_object} does not match the colour of its mono streak")
            }
            Self::NotAlternating { mono_streak } => {
                write!(f, "mono streak {mono_streak} has the same colour as its predecessor")
            }
        }
    }
}

/// Logs the error if the `tracing` feature is enabled.
pub(crate) fn reject<T>(err: GroupingError) -> Result<T, GroupingError> {
    #[cfg(feature = "tracing")]
    tracing::warn!(%err, "Rejected taiko grouping");

    Err(err)
}

/// Ensures members are non-empty and strictly increasing.
pub(crate) fn check_members(kind: GroupKind, members: &[usize]) -> Result<(), GroupingError> {
    if members.is_empty() {
        return reject(GroupingError::EmptyGroup(kind));
    }

    if members.windows(2).any(|pair| pair[0] >= pair[1]) {
        return reject(GroupingError::UnorderedMembers(kind));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_must_increase() {
        assert_eq!(
            check_members(GroupKind::SameRhythm, &[]),
            Err(GroupingError::EmptyGroup(GroupKind::SameRhythm))
        );
        assert_eq!(
            check_members(GroupKind::MonoStreak, &[0, 2, 2]),
            Err(GroupingError::UnorderedMembers(GroupKind::MonoStreak))
        );
        assert!(check_members(GroupKind::MonoStreak, &[0, 2, 5]).is_ok());
    }

    #[test]
    fn display() {
        let err = GroupingError::AlreadyAssigned {
            kind: GroupKind::AlternatingMonoPattern,
            idx: 3,
        };

        assert_eq!(
            err.to_string(),
            "member 3 already belongs to another alternating mono pattern"
        );
    }
}
