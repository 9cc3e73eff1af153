use bevy::prelude::*;

/// Segment durations of one breathing cycle, in seconds
#[derive(Debug, Clone, Copy)]
pub struct BreathPattern {
    pub inhale: f32,
    pub hold_full: f32,
    pub exhale: f32,
    pub hold_empty: f32,
}

impl Default for BreathPattern {
    fn default() -> Self {
        // Relaxation pacing: slow exhale, brief holds
        Self {
            inhale: 4.0,
            hold_full: 2.0,
            exhale: 6.0,
            hold_empty: 1.0,
        }
    }
}

impl BreathPattern {
    pub fn period(&self) -> f32 {
        self.inhale + self.hold_full + self.exhale + self.hold_empty
    }
}

/// Wall-clock breathing clock. The engine never sees this resource: systems
/// read `phase()` and pass the float into the pure placement functions.
#[derive(Resource, Default)]
pub struct BreathClock {
    elapsed: f32,
    pub pattern: BreathPattern,
}

impl BreathClock {
    /// Seconds since startup, used as the wobble time base
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Breath phase in [0, 1]: 0 = full exhale, 1 = full inhale
    pub fn phase(&self) -> f32 {
        let p = self.pattern;
        let t = self.elapsed.rem_euclid(p.period().max(f32::EPSILON));

        if t < p.inhale {
            smoothstep(t / p.inhale)
        } else if t < p.inhale + p.hold_full {
            1.0
        } else if t < p.inhale + p.hold_full + p.exhale {
            1.0 - smoothstep((t - p.inhale - p.hold_full) / p.exhale)
        } else {
            0.0
        }
    }
}

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Advance the breath clock once per frame
pub fn tick_breath(time: Res<Time>, mut clock: ResMut<BreathClock>) {
    clock.elapsed += time.delta_secs();
}
