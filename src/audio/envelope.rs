//! Asymmetric envelope follower with transient ("emphasis") detection.
//!
//! The follower rises quickly toward louder input and decays slowly toward
//! quieter input. A steep rise in the smoothed signal latches `emphasis` to
//! 1.0, which then decays exponentially on its own regardless of how loud
//! the input stays.

use serde::{Deserialize, Serialize};

use crate::config::EnvelopeConfig;
use crate::utilities::math::{clamp_unit, lerp, sanitize_delta};

/// Snapshot of the follower after an update.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvelopeReading {
    /// Smoothed energy, 0.0–1.0.
    pub smoothed_energy: f64,
    /// Transient boost, 0.0–1.0.
    pub emphasis: f64,
}

#[derive(Debug, Clone)]
pub struct EnvelopeFollower {
    config: EnvelopeConfig,
    smoothed: f64,
    last_smoothed: f64,
    emphasis: f64,
}

impl Default for EnvelopeFollower {
    fn default() -> Self {
        Self::new(EnvelopeConfig::default())
    }
}

impl EnvelopeFollower {
    pub fn new(config: EnvelopeConfig) -> Self {
        Self {
            config,
            smoothed: 0.0,
            last_smoothed: 0.0,
            emphasis: 0.0,
        }
    }

    /// Advance one frame toward `raw_energy`.
    ///
    /// A zero (or invalid) `delta_time` leaves the state untouched, since
    /// neither a rate nor a derivative is defined for it.
    pub fn update(&mut self, raw_energy: f64, delta_time: f64) -> EnvelopeReading {
        let dt = sanitize_delta(delta_time);
        if dt == 0.0 {
            return self.reading();
        }
        let target = clamp_unit(raw_energy);
        let c = &self.config;

        let rate = if target > self.smoothed {
            c.attack_rate * c.attack_gain * dt
        } else {
            c.release_rate * dt
        };
        self.smoothed = clamp_unit(lerp(self.smoothed, target, rate));

        let derivative = (self.smoothed - self.last_smoothed) / dt;
        self.last_smoothed = self.smoothed;

        if derivative > c.transient_threshold && self.emphasis < c.emphasis_rearm_below {
            log::trace!("transient: d/dt = {:.2}, emphasis latched", derivative);
            self.emphasis = 1.0;
        }
        self.emphasis = lerp(self.emphasis, 0.0, c.emphasis_decay_rate * dt);

        self.reading()
    }

    pub fn reading(&self) -> EnvelopeReading {
        EnvelopeReading {
            smoothed_energy: self.smoothed,
            emphasis: self.emphasis,
        }
    }

    pub fn reset(&mut self) {
        self.smoothed = 0.0;
        self.last_smoothed = 0.0;
        self.emphasis = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_attack_is_faster_than_release() {
        let mut rising = EnvelopeFollower::default();
        let up = rising.update(1.0, DT).smoothed_energy;

        let mut falling = EnvelopeFollower::default();
        for _ in 0..600 {
            falling.update(1.0, DT);
        }
        let before = falling.reading().smoothed_energy;
        let after = falling.update(0.0, DT).smoothed_energy;

        // attack step 0.9 * 10 * dt = 0.15, release step 2 * dt ~ 0.033
        assert!((up - 0.15).abs() < 1e-12);
        assert!((before - after) < up);
    }

    #[test]
    fn test_smoothed_stays_bounded_and_never_overshoots() {
        let mut env = EnvelopeFollower::default();
        let samples = [0.0, 1.0, 0.3, 0.9, 0.0, 0.5, 1.0, 1.0, 0.2, 0.7];
        for dt in [1e-4, DT, 0.05, 0.5, 2.0] {
            for &target in &samples {
                let before = env.reading().smoothed_energy;
                let after = env.update(target, dt).smoothed_energy;
                assert!((0.0..=1.0).contains(&after));
                if target >= before {
                    assert!(after >= before && after <= target + 1e-12);
                } else {
                    assert!(after <= before && after >= target - 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let mut env = EnvelopeFollower::default();
        for _ in 0..200 {
            env.update(7.5, DT);
        }
        assert!(env.reading().smoothed_energy <= 1.0);
        for _ in 0..2000 {
            env.update(-3.0, DT);
        }
        assert!(env.reading().smoothed_energy >= 0.0);
    }

    #[test]
    fn test_spike_latches_emphasis() {
        let mut env = EnvelopeFollower::default();
        // 0 -> 0.15 in one frame: derivative 9.0/s
        let r = env.update(1.0, DT);
        let expected = 1.0 - 5.0 * DT;
        assert!((r.emphasis - expected).abs() < 1e-12);
    }

    #[test]
    fn test_no_emphasis_without_spike() {
        let mut env = EnvelopeFollower::default();
        // A slow ramp never produces a derivative above 2.0/s.
        for i in 0..600 {
            let target = i as f64 / 6000.0;
            let r = env.update(target, DT);
            assert_eq!(r.emphasis, 0.0);
        }
    }

    #[test]
    fn test_emphasis_decays_strictly() {
        let mut env = EnvelopeFollower::default();
        env.update(1.0, DT);
        let mut prev = env.reading().emphasis;
        // hold the input steady at the smoothed level so no new spike fires
        for _ in 0..30 {
            let level = env.reading().smoothed_energy;
            let r = env.update(level, DT);
            assert!(r.emphasis < prev);
            assert!(r.emphasis >= 0.0);
            prev = r.emphasis;
        }
    }

    #[test]
    fn test_emphasis_does_not_rearm_while_high() {
        let mut env = EnvelopeFollower::default();
        let first = env.update(1.0, DT).emphasis;
        // still rising steeply, but emphasis is above the re-arm level
        let second = env.update(1.0, DT).emphasis;
        assert!(first > 0.5);
        assert!(second < first);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut env = EnvelopeFollower::default();
        env.update(0.8, DT);
        let before = env.reading();
        let after = env.update(0.1, 0.0);
        assert_eq!(before, after);
    }

    #[test]
    fn test_reset() {
        let mut env = EnvelopeFollower::default();
        env.update(1.0, DT);
        env.reset();
        assert_eq!(env.reading(), EnvelopeReading::default());
    }
}
