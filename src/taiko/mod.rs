pub use self::{
    difficulty::{
        AlternatingMonoPattern, ColorData, ColorEvaluator, GroupKind, GroupingError, MonoStreak,
        NoteDifficulty, ReadingEvaluator, RepeatingHitPatterns, RhythmChild, RhythmData,
        SamePatternsGroupedHitObjects, SameRhythmHitObjectGrouping, TaikoEvaluation,
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
    object::HitType,
};

mod difficulty;
mod object;
