pub mod same_patterns_grouped_hit_objects;
pub mod same_rhythm_hit_object_grouping;
