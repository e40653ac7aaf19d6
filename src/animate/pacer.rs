use std::time::Duration;

/// Seam for the inter-step delay, so tests drive the animation without
/// actually sleeping.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Blocks the control thread with a plain sleep. The whole tool is
/// single-threaded cooperative, so the delay plus the render request together
/// define the visible frame rate.
#[derive(Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Records requested pauses instead of sleeping. Test use only, but lives
/// here because downstream crates writing their own sinks want it too.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_pacer_keeps_every_pause() {
        let mut pacer = RecordingPacer::default();
        pacer.pause(Duration::from_millis(500));
        pacer.pause(Duration::from_millis(250));

        assert_eq!(
            pacer.pauses,
            vec![Duration::from_millis(500), Duration::from_millis(250)]
        );
    }

    #[test]
    fn sleep_pacer_zero_delay_returns_immediately() {
        SleepPacer.pause(Duration::ZERO);
    }
}
