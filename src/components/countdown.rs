// Counts interval ticks down to zero and keeps a display string in sync.
use bevy_ecs::prelude::Component;

pub const FINISHED_TEXT: &str = "Yay it's over!";

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub remaining: i32,
    pub text: String,
    pub finished: bool,
}

impl Countdown {
    pub fn new(start: i32) -> Self {
        Countdown {
            remaining: start,
            text: Self::seconds_left_text(start),
            finished: false,
        }
    }

    /// Apply one tick. Returns `true` when the countdown has run out and the
    /// owning timer should be stopped.
    ///
    /// Reaching zero only updates the text; the tick after that one finishes.
    pub fn on_tick(&mut self) -> bool {
        if self.remaining != 0 {
            self.remaining -= 1;
            self.text = Self::seconds_left_text(self.remaining);
            false
        } else {
            self.text = FINISHED_TEXT.to_string();
            self.finished = true;
            true
        }
    }

    fn seconds_left_text(remaining: i32) -> String {
        format!("{} Seconds Left", remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_new_text() {
        let cd = Countdown::new(60);
        assert_eq!(cd.remaining, 60);
        assert_eq!(cd.text, "60 Seconds Left");
        assert!(!cd.finished);
    }

    #[test]
    fn test_countdown_finishes_on_tick_after_zero() {
        let mut cd = Countdown::new(2);
        assert!(!cd.on_tick());
        assert_eq!(cd.text, "1 Seconds Left");
        assert!(!cd.on_tick());
        assert_eq!(cd.text, "0 Seconds Left");
        assert!(!cd.finished);

        assert!(cd.on_tick());
        assert_eq!(cd.remaining, 0);
        assert_eq!(cd.text, FINISHED_TEXT);
        assert!(cd.finished);
    }

    #[test]
    fn test_countdown_from_zero_finishes_immediately() {
        let mut cd = Countdown::new(0);
        assert!(cd.on_tick());
    }
}
