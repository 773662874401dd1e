use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Value shown `elapsed_ms` into a count from `start` to `end`, floored.
pub fn count_up_value(start: f64, end: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    let progress = if duration_ms > 0.0 {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (progress * (end - start) + start).floor()
}

/// Animates from zero up to `target` over `duration_ms`, one step per frame.
///
/// Dropping the component drops the pending frame request, which cancels it.
#[hook]
pub fn use_count_up(target: f64, duration_ms: f64) -> f64 {
    let value = use_state(|| 0.0);

    {
        let value = value.clone();

        use_effect_with(target.to_bits(), move |_| {
            let handle: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
            schedule_step(handle.clone(), None, target, duration_ms, value);

            move || drop(handle.borrow_mut().take())
        });
    }

    *value
}

fn schedule_step(
    handle: Rc<RefCell<Option<AnimationFrame>>>,
    started_at: Option<f64>,
    target: f64,
    duration_ms: f64,
    value: UseStateHandle<f64>,
) {
    let next_handle = handle.clone();
    let frame = request_animation_frame(move |timestamp| {
        let started_at = started_at.unwrap_or(timestamp);
        let elapsed = timestamp - started_at;
        value.set(count_up_value(0.0, target, elapsed, duration_ms));

        if elapsed < duration_ms {
            schedule_step(next_handle, Some(started_at), target, duration_ms, value);
        }
    });
    *handle.borrow_mut() = Some(frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_up_progress() {
        assert_eq!(count_up_value(0.0, 1000.0, 0.0, 1000.0), 0.0);
        assert_eq!(count_up_value(0.0, 1000.0, 500.0, 1000.0), 500.0);
        assert_eq!(count_up_value(0.0, 1234.7, 5000.0, 1000.0), 1234.0);
    }

    #[test]
    fn test_count_up_zero_duration() {
        assert_eq!(count_up_value(0.0, 42.9, 0.0, 0.0), 42.0);
    }
}
