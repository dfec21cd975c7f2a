#[cfg(test)]
mod tests {
    use crate::FrameClock;
    use std::time::{Duration, Instant};

    const INTERVAL: Duration = Duration::from_millis(33);

    #[test]
    fn test_first_frame_is_ready() {
        let mut clock = FrameClock::new(INTERVAL);
        assert!(clock.ready(Instant::now()));
    }

    #[test]
    fn test_frames_wait_for_interval() {
        let mut clock = FrameClock::new(INTERVAL);
        let start = Instant::now();

        assert!(clock.ready(start));
        assert!(!clock.ready(start + Duration::from_millis(5)));
        assert!(!clock.ready(start + Duration::from_millis(32)));
        assert!(clock.ready(start + INTERVAL));

        // Measured from the last frame that ran
        assert!(!clock.ready(start + Duration::from_millis(40)));
        assert!(clock.ready(start + Duration::from_millis(66)));
    }

    #[test]
    fn test_until_next() {
        let mut clock = FrameClock::new(INTERVAL);
        let start = Instant::now();
        assert_eq!(clock.until_next(start), Duration::ZERO);

        clock.ready(start);
        assert_eq!(
            clock.until_next(start + Duration::from_millis(13)),
            Duration::from_millis(20)
        );
        assert_eq!(clock.until_next(start + INTERVAL * 2), Duration::ZERO);
    }

    #[test]
    fn test_earlier_instant_is_not_ready() {
        let mut clock = FrameClock::new(INTERVAL);
        let later = Instant::now() + Duration::from_secs(1);
        clock.ready(later);

        assert!(!clock.ready(later - Duration::from_millis(500)));
        assert_eq!(clock.interval(), INTERVAL);
    }
}
