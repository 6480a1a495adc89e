//! Easing curves mapping linear progress in `[0, 1]` to eased progress.
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOut,
    EaseOut,
    Elastic,
    Bounce,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseInOut => ease_in_out(t),
            Self::EaseOut => ease_out(t),
            Self::Elastic => elastic(t),
            Self::Bounce => bounce(t),
        }
    }
}

/// Cubic, slow start and end.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t1 = -2.0 * t + 2.0;
        1.0 - t1 * t1 * t1 / 2.0
    }
}

/// Cubic, fast start.
fn ease_out(t: f32) -> f32 {
    let t1 = 1.0 - t;
    1.0 - t1 * t1 * t1
}

/// Overshoots and oscillates into place.
fn elastic(t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let c4 = (2.0 * PI) / 3.0;
    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
}

fn bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984_375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseInOut,
        Easing::EaseOut,
        Easing::Elastic,
        Easing::Bounce,
    ];

    #[test]
    fn every_easing_starts_at_zero_and_ends_at_one() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_out_at_half_progress() {
        assert!((Easing::EaseOut.apply(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_is_symmetric_around_the_middle() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
        assert!(Easing::EaseInOut.apply(0.75) > 0.75);
    }

    #[test]
    fn bounce_touches_the_end_at_each_threshold() {
        assert!((Easing::Bounce.apply(1.0 / 2.75) - 1.0).abs() < 1e-5);
        assert!(Easing::Bounce.apply(0.5) < 1.0);
    }
}
