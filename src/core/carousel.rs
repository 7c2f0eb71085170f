//! Carousel slide state
//!
//! Tracks which slide of a fixed-size carousel is visible. Autoplay ticks and
//! manual navigation mutate the same index independently: a manual move is not
//! protected from the next autoplay tick.

use std::num::NonZeroUsize;
use std::time::Duration;

/// Delay between autoplay advances
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("Slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Position within a carousel of `len` slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: NonZeroUsize,
}

impl Carousel {
    /// Create a carousel showing the first slide
    pub fn new(len: NonZeroUsize) -> Self {
        Self { current: 0, len }
    }

    /// Index of the visible slide, always in `[0, len)`
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.len.get()
    }

    /// Advance one slide, wrapping from the last to the first
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Go back one slide, wrapping from the first to the last
    pub fn previous(&mut self) {
        self.current = if self.current == 0 {
            self.len.get() - 1
        } else {
            self.current - 1
        };
    }

    /// Show slide `index` directly
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len.get() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len.get(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Apply one autoplay tick
    pub fn tick(&mut self) {
        self.next();
    }

    /// Apply every autoplay tick that fits into `elapsed`
    pub fn advance_by(&mut self, elapsed: Duration) {
        let ticks = autoplay_ticks(elapsed);
        let step = (ticks % self.len.get() as u128) as usize;
        self.current = (self.current + step) % self.len;
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    /// Horizontal offset of the slide track as a percentage of the viewport
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }

    /// CSS `transform` for the slide track
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent())
    }
}

/// Number of whole autoplay intervals contained in `elapsed`
pub fn autoplay_ticks(elapsed: Duration) -> u128 {
    elapsed.as_millis() / AUTOPLAY_INTERVAL.as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_starts_at_first_slide() {
        let c = carousel(5);
        assert_eq!(c.current(), 0);
        assert_eq!(c.slide_count(), 5);
        assert_eq!(c.track_transform(), "translateX(-0%)");
    }

    #[test]
    fn test_next_stays_in_range_and_cycles() {
        for len in 1..=7 {
            let mut c = carousel(len);
            for _ in 0..len * 3 {
                c.next();
                assert!(c.current() < len);
            }
            // 3 * len steps is a whole number of cycles
            assert_eq!(c.current(), 0);

            for _ in 0..len {
                c.next();
            }
            assert_eq!(c.current(), 0, "len {}", len);
        }
    }

    #[test]
    fn test_previous_wraps_from_first() {
        for len in 1..=7 {
            let mut c = carousel(len);
            c.previous();
            assert_eq!(c.current(), len - 1);
        }
    }

    #[test]
    fn test_previous_from_later_slide() {
        let mut c = carousel(5);
        for k in 1..5 {
            c.jump_to(k).unwrap();
            c.previous();
            assert_eq!(c.current(), k - 1);
        }
    }

    #[test]
    fn test_single_slide_never_moves() {
        let mut c = carousel(1);
        c.next();
        assert_eq!(c.current(), 0);
        c.previous();
        assert_eq!(c.current(), 0);
        c.advance_by(Duration::from_secs(60));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_jump_to_any_valid_index() {
        let mut c = carousel(5);
        for start in 0..5 {
            for target in 0..5 {
                c.jump_to(start).unwrap();
                c.jump_to(target).unwrap();
                assert_eq!(c.current(), target);
                assert!(c.is_active(target));
            }
        }
    }

    #[test]
    fn test_jump_out_of_range_keeps_state() {
        let mut c = carousel(5);
        c.jump_to(2).unwrap();

        let err = c.jump_to(5).unwrap_err();
        assert_eq!(err, CarouselError::IndexOutOfRange { index: 5, len: 5 });
        assert_eq!(err.to_string(), "Slide index 5 is out of range for 5 slides");
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_only_current_indicator_active() {
        let mut c = carousel(5);
        c.jump_to(3).unwrap();
        let active: Vec<_> = (0..5).filter(|&i| c.is_active(i)).collect();
        assert_eq!(active, [3]);
    }

    #[test]
    fn test_track_transform_follows_slide() {
        let mut c = carousel(5);
        c.jump_to(4).unwrap();
        assert_eq!(c.offset_percent(), 400);
        assert_eq!(c.track_transform(), "translateX(-400%)");
    }

    #[test]
    fn test_autoplay_ticks_floor() {
        assert_eq!(autoplay_ticks(Duration::ZERO), 0);
        assert_eq!(autoplay_ticks(Duration::from_millis(2999)), 0);
        assert_eq!(autoplay_ticks(Duration::from_millis(3000)), 1);
        assert_eq!(autoplay_ticks(Duration::from_millis(8999)), 2);
        assert_eq!(autoplay_ticks(Duration::from_millis(9000)), 3);
    }

    #[test]
    fn test_autoplay_position_after_elapsed_time() {
        for len in 1..=6 {
            for ms in (0..40_000).step_by(750) {
                let elapsed = Duration::from_millis(ms);
                let mut c = carousel(len);
                c.advance_by(elapsed);
                let expected = (autoplay_ticks(elapsed) % len as u128) as usize;
                assert_eq!(c.current(), expected, "len {} at {}ms", len, ms);
            }
        }
    }

    #[test]
    fn test_advance_by_matches_repeated_ticks() {
        let mut stepped = carousel(5);
        let mut jumped = carousel(5);
        for _ in 0..13 {
            stepped.tick();
        }
        jumped.advance_by(AUTOPLAY_INTERVAL * 13);
        assert_eq!(stepped, jumped);
    }

    #[test]
    fn test_autoplay_overrides_manual_navigation() {
        let mut c = carousel(5);
        c.jump_to(2).unwrap();
        c.tick();
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_autoplay_and_manual_interleaving() {
        let mut c = carousel(5);

        c.advance_by(Duration::from_millis(3000));
        assert_eq!(c.current(), 1);

        c.previous();
        assert_eq!(c.current(), 0);

        c.jump_to(4).unwrap();
        assert_eq!(c.current(), 4);

        c.advance_by(Duration::from_millis(3000));
        assert_eq!(c.current(), 0);
    }
}
