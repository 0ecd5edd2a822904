use rosu_taiko_eval::taiko::{HitType, TaikoDifficultyObjects};

/// Tolerance for values that are recomputed in a different order.
pub const EPSILON: f64 = 1e-9;

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < EPSILON, "{a} != {b}");
}

/// Notes of alternating colour whose start times follow the delta times.
pub fn alternating(delta_times: &[f64], effective_bpm: f64) -> TaikoDifficultyObjects {
    let mut objects = TaikoDifficultyObjects::with_capacity(delta_times.len());
    let mut start_time = 0.0;

    for (i, &delta_time) in delta_times.iter().enumerate() {
        start_time += delta_time;

        let hit_type = if i % 2 == 0 {
            HitType::Center
        } else {
            HitType::Rim
        };

        objects.push(start_time, delta_time, effective_bpm, hit_type);
    }

    objects
}
