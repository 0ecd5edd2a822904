//! Colour and reading difficulty evaluators for [osu!taiko].
//!
//! ## Description
//!
//! Notes are stored in a [`TaikoDifficultyObjects`] sequence alongside the
//! colour groupings (mono streaks, alternating mono patterns and repeating
//! hit patterns) and rhythm groupings they belong to. The evaluators then
//! score single notes based on those groupings and on their scroll speed.
//!
//! ## Usage
//!
//! ```
//! use rosu_taiko_eval::taiko::{HitType, TaikoDifficultyObjects, TaikoEvaluation};
//!
//! let hit_types = [HitType::Center, HitType::Center, HitType::Rim, HitType::Rim];
//! let mut objects = TaikoDifficultyObjects::with_capacity(hit_types.len());
//!
//! for (i, hit_type) in hit_types.into_iter().enumerate() {
//!     // start time, delta time, effective bpm, colour
//!     objects.push(i as f64 * 150.0, 150.0, 240.0, hit_type);
//! }
//!
//! // Attach the colour groupings
//! let dons = objects.add_mono_streak(vec![0, 1])?;
//! let kats = objects.add_mono_streak(vec![2, 3])?;
//! let pattern = objects.add_alternating_mono_pattern(vec![dons, kats])?;
//! objects.add_repeating_hit_patterns(vec![pattern], 17)?;
//!
//! let difficulties = TaikoEvaluation::new()
//!     .consistency_threshold(0.01)
//!     .calculate(&objects);
//!
//! assert!(difficulties[0].color > 0.0);
//! # Ok::<_, rosu_taiko_eval::taiko::GroupingError>(())
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Rejected groupings will be logged through `tracing::warn` and batch evaluations through `tracing::debug`. If this feature is not enabled, nothing will be logged. | [`tracing`]
//!
//! [osu!taiko]: https://osu.ppy.sh/wiki/en/Game_mode/osu%21taiko
//! [`TaikoDifficultyObjects`]: crate::taiko::TaikoDifficultyObjects
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names
)]

/// Types for osu!taiko evaluations.
pub mod taiko;

mod util;
