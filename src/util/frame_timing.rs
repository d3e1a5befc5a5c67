//! Frame clock: wall-clock deltas for ticking flights, with FPS smoothing
//! and optional frame limiting.

use web_time::{Duration, Instant};

/// Longest frame delta handed to the transition controller. A stalled tab
/// or a debugger pause would otherwise finish a flight in a single frame.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Frame clock producing per-frame deltas, FPS smoothing and optional frame
/// limiting.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a frame clock whose first frame starts at `start`.
    #[must_use]
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: start,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Start a new frame now and return the time since the previous one.
    pub fn begin_frame(&mut self) -> Duration {
        self.begin_frame_at(Instant::now())
    }

    /// Start a new frame at `now` and return the (capped) delta.
    pub fn begin_frame_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(MAX_FRAME_DELTA)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_time_since_previous_frame() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(60, start);

        let dt = timing.begin_frame_at(start + Duration::from_millis(16));
        assert_eq!(dt, Duration::from_millis(16));

        let dt = timing.begin_frame_at(start + Duration::from_millis(50));
        assert_eq!(dt, Duration::from_millis(34));
    }

    #[test]
    fn long_stalls_are_capped() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        let dt = timing.begin_frame_at(start + Duration::from_secs(3));
        assert_eq!(dt, MAX_FRAME_DELTA);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        for frame in 1..=400 {
            let _ = timing.begin_frame_at(start + Duration::from_millis(frame * 10));
        }
        assert!((timing.fps() - 100.0).abs() < 1.0, "fps {}", timing.fps());
    }

    #[test]
    fn unlimited_clock_always_renders() {
        assert!(FrameTiming::new(0).should_render());
    }
}
