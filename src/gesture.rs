//! Press-and-hold detection for destructive bulk actions.
//!
//! The tracker is fed once per frame with whatever target is currently held
//! down. It fires exactly once per hold, and only after the full duration
//! has elapsed without the press moving to another target or being released.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum HoldEvent<T> {
    Idle,
    Holding { target: T, progress: f32 },
    Fired(T),
    /// Released before the threshold; nothing must happen.
    Cancelled(T),
}

#[derive(Debug, Clone)]
struct Hold<T> {
    target: T,
    started: Duration,
    fired: bool,
}

#[derive(Debug, Clone)]
pub struct HoldTracker<T> {
    threshold: Duration,
    active: Option<Hold<T>>,
}

impl<T: Clone + PartialEq> HoldTracker<T> {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            active: None,
        }
    }

    /// `now` is any monotonic clock, e.g. the UI's input time.
    pub fn update(&mut self, pressed: Option<&T>, now: Duration) -> HoldEvent<T> {
        let Some(target) = pressed else {
            return match self.active.take() {
                Some(hold) if !hold.fired => HoldEvent::Cancelled(hold.target),
                _ => HoldEvent::Idle,
            };
        };

        if !matches!(&self.active, Some(hold) if hold.target == *target) {
            self.active = Some(Hold {
                target: target.clone(),
                started: now,
                fired: false,
            });
        }
        let Some(hold) = self.active.as_mut() else {
            return HoldEvent::Idle;
        };

        if hold.fired {
            return HoldEvent::Idle;
        }
        let elapsed = now.saturating_sub(hold.started);
        if elapsed >= self.threshold {
            hold.fired = true;
            HoldEvent::Fired(hold.target.clone())
        } else {
            HoldEvent::Holding {
                target: hold.target.clone(),
                progress: elapsed.as_secs_f32() / self.threshold.as_secs_f32(),
            }
        }
    }

    /// Fill fraction for drawing `target`'s button, if it is being held.
    pub fn progress(&self, target: &T, now: Duration) -> Option<f32> {
        let hold = self.active.as_ref().filter(|h| h.target == *target)?;
        if hold.fired || self.threshold.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_sub(hold.started);
        Some((elapsed.as_secs_f32() / self.threshold.as_secs_f32()).min(1.0))
    }

    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.fired)
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_after_threshold() {
        let mut tracker = HoldTracker::new(ms(500));
        assert!(matches!(tracker.update(Some(&"a"), ms(0)), HoldEvent::Holding { .. }));
        assert!(matches!(tracker.update(Some(&"a"), ms(499)), HoldEvent::Holding { .. }));
        assert_eq!(tracker.update(Some(&"a"), ms(500)), HoldEvent::Fired("a"));
        assert_eq!(tracker.update(Some(&"a"), ms(900)), HoldEvent::Idle);
        assert_eq!(tracker.update(None, ms(950)), HoldEvent::Idle);
    }

    #[test]
    fn release_before_threshold_cancels() {
        let mut tracker = HoldTracker::new(ms(500));
        tracker.update(Some(&"a"), ms(100));
        assert_eq!(tracker.update(None, ms(550)), HoldEvent::Cancelled("a"));
        assert!(!tracker.is_active());
    }

    #[test]
    fn moving_to_another_target_restarts_the_clock() {
        let mut tracker = HoldTracker::new(ms(500));
        tracker.update(Some(&"a"), ms(0));
        assert!(matches!(tracker.update(Some(&"b"), ms(400)), HoldEvent::Holding { .. }));
        assert!(matches!(tracker.update(Some(&"b"), ms(600)), HoldEvent::Holding { .. }));
        assert_eq!(tracker.update(Some(&"b"), ms(900)), HoldEvent::Fired("b"));
    }

    #[test]
    fn progress_tracks_the_held_target_only() {
        let mut tracker = HoldTracker::new(ms(1000));
        tracker.update(Some(&1), ms(0));
        let progress = tracker.progress(&1, ms(250)).unwrap();
        assert!((progress - 0.25).abs() < 1e-6);
        assert_eq!(tracker.progress(&2, ms(250)), None);
    }

    #[test]
    fn zero_threshold_fires_immediately() {
        let mut tracker = HoldTracker::new(Duration::ZERO);
        assert_eq!(tracker.update(Some(&"a"), ms(10)), HoldEvent::Fired("a"));
    }
}
