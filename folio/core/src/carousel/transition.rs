//! Crossfade Transition
//!
//! Purely visual: the carousel index changes immediately and a crossfade is
//! recorded alongside it. Surfaces sample it each frame to blend the
//! outgoing and incoming frames.

use std::time::Duration;

/// Default crossfade length
pub const DEFAULT_CROSSFADE: Duration = Duration::from_millis(700);

/// A crossfade between two carousel items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossfade {
    /// Index fading out
    pub from: usize,
    /// Index fading in
    pub to: usize,
    /// Virtual time the fade began
    pub started_at: Duration,
    /// Total fade length
    pub duration: Duration,
}

impl Crossfade {
    /// Start a fade at `now`
    pub fn new(from: usize, to: usize, now: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration,
        }
    }

    /// Linear progress in `0.0..=1.0`
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased mix of the incoming frame (smoothstep: 3t^2 - 2t^3)
    pub fn blend(&self, now: Duration) -> f32 {
        let t = self.progress(now);
        t * t * (3.0 - 2.0 * t)
    }

    /// Blur strength, peaking halfway through the fade
    pub fn blur(&self, now: Duration) -> f32 {
        1.0 - (2.0 * self.blend(now) - 1.0).abs()
    }

    /// Whether the fade has finished at `now`
    pub fn is_complete(&self, now: Duration) -> bool {
        now >= self.started_at + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_progress_is_clamped() {
        let fade = Crossfade::new(0, 1, ms(1000), ms(700));
        assert_eq!(fade.progress(ms(500)), 0.0);
        assert!((fade.progress(ms(1350)) - 0.5).abs() < 0.001);
        assert_eq!(fade.progress(ms(5000)), 1.0);
    }

    #[test]
    fn test_blend_eases_in_and_out() {
        let fade = Crossfade::new(0, 1, ms(0), ms(1000));
        assert!(fade.blend(ms(100)) < fade.progress(ms(100)));
        assert!((fade.blend(ms(500)) - 0.5).abs() < 0.001);
        assert!(fade.blend(ms(900)) > fade.progress(ms(900)));
    }

    #[test]
    fn test_blur_peaks_midway() {
        let fade = Crossfade::new(2, 3, ms(0), ms(1000));
        assert!(fade.blur(ms(0)) < 0.01);
        assert!((fade.blur(ms(500)) - 1.0).abs() < 0.001);
        assert!(fade.blur(ms(1000)) < 0.01);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let fade = Crossfade::new(0, 1, ms(10), Duration::ZERO);
        assert_eq!(fade.progress(ms(10)), 1.0);
        assert!(fade.is_complete(ms(10)));
    }
}
