//! Numeric animation
//!
//! Eases a displayed number from its current value to a target over a
//! fixed duration. Each frame recomputes elapsed time from the timestamp
//! captured when the animation started, rather than accumulating deltas,
//! so long or uneven frames cannot drift the curve.

use leptos::prelude::*;

/// Cubic ease-out: fast start, settling into the target.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Interpolated value at `elapsed_ms` into the animation, clamped to the
/// target once the duration has passed.
pub fn value_at(start: f64, target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    start + (target - start) * ease_out_cubic(progress)
}

fn now_ms() -> f64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_default()
}

/// Animate `display` from its current value to `target` over
/// `duration_ms`, driven by `requestAnimationFrame`.
///
/// Animations are independent and carry no shared state; starting a second
/// animation on the same signal just means both overwrite the displayed
/// value until the older one reaches progress 1 and stops rescheduling.
pub fn animate_value(display: RwSignal<f64>, target: f64, duration_ms: f64) {
    let start = display.get_untracked();
    let started = now_ms();
    schedule_frame(display, start, target, started, duration_ms);
}

fn schedule_frame(display: RwSignal<f64>, start: f64, target: f64, started: f64, duration_ms: f64) {
    request_animation_frame(move || {
        let progress = if duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms() - started) / duration_ms).min(1.0)
        };
        display.set(start + (target - start) * ease_out_cubic(progress));

        if progress < 1.0 {
            schedule_frame(display, start, target, started, duration_ms);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert!((ease_out_cubic(0.0)).abs() < EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ease_out_cubic_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let eased = ease_out_cubic(step as f64 / 100.0);
            assert!(eased >= previous, "easing regressed at step {}", step);
            previous = eased;
        }
    }

    #[test]
    fn test_ease_out_cubic_front_loads_progress() {
        // More than half the distance is covered in the first half.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_value_at_start_and_end() {
        assert!((value_at(0.0, 100.0, 0.0, 300.0)).abs() < EPSILON);
        assert!((value_at(0.0, 100.0, 300.0, 300.0) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_value_clamps_past_duration() {
        assert!((value_at(0.0, 100.0, 450.0, 300.0) - 100.0).abs() < EPSILON);
        assert!((value_at(50.0, 10.0, 1_000.0, 300.0) - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_value_handles_descending_animations() {
        let midway = value_at(100.0, 0.0, 150.0, 300.0);
        assert!(midway < 100.0 && midway > 0.0);
    }

    #[test]
    fn test_zero_duration_snaps_to_target() {
        assert_eq!(value_at(5.0, 42.0, 0.0, 0.0), 42.0);
    }
}
