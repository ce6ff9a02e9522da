use crate::curve::AnimClip;

pub const DEFAULT_CURVE_NAME: &str = "Distance";

/// Playback cursor for a distance matched clip.
///
/// Each tick the curve proposes a time for the current matching distance.
/// Playback jumps forward to it when it is ahead of the cursor and otherwise
/// advances in real time, so the clip never plays backwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatchPlayer {
    pub curve_name: String,
    pub enabled: bool,
    time: f32,
}

impl DistanceMatchPlayer {
    pub fn new(curve_name: impl Into<String>) -> Self {
        Self {
            curve_name: curve_name.into(),
            enabled: true,
            time: 0.0,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    pub fn update(&mut self, clip: &AnimClip, distance: f32, delta_time: f32) -> f32 {
        if !self.enabled {
            return self.time;
        }

        let target = clip.curve_time(&self.curve_name, distance);
        let time = if target > self.time {
            target
        } else {
            self.time + delta_time
        };
        self.time = time.min(clip.length);
        self.time
    }
}

impl Default for DistanceMatchPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_CURVE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CalibrationCurve;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-4;

    fn stop_clip() -> AnimClip {
        AnimClip::new("Jog_Stop", 1.0).with_curve(CalibrationCurve::from_pairs(
            DEFAULT_CURVE_NAME,
            &[(-100.0, 0.0), (-50.0, 0.25), (0.0, 0.5)],
        ))
    }

    #[test]
    fn jumps_to_curve_time_when_ahead() {
        let mut player = DistanceMatchPlayer::default();
        let time = player.update(&stop_clip(), -50.0, 0.016);
        assert_relative_eq!(time, 0.25, epsilon = TOLERANCE);
    }

    #[test]
    fn advances_in_real_time_when_curve_lags() {
        let clip = stop_clip();
        let mut player = DistanceMatchPlayer::default();
        player.update(&clip, -50.0, 0.016);
        let time = player.update(&clip, -80.0, 0.1);
        assert_relative_eq!(time, 0.35, epsilon = TOLERANCE);
    }

    #[test]
    fn clamps_to_clip_length() {
        let clip = stop_clip();
        let mut player = DistanceMatchPlayer::default();
        player.update(&clip, 0.0, 0.016);
        for _ in 0..10 {
            player.update(&clip, 0.0, 0.1);
        }
        assert_relative_eq!(player.time(), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn extrapolated_target_is_clamped() {
        let mut player = DistanceMatchPlayer::default();
        let time = player.update(&stop_clip(), 500.0, 0.016);
        assert_relative_eq!(time, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn disabled_player_holds_time() {
        let clip = stop_clip();
        let mut player = DistanceMatchPlayer::default();
        player.update(&clip, -50.0, 0.016);
        player.enabled = false;
        let time = player.update(&clip, 0.0, 0.5);
        assert_relative_eq!(time, 0.25, epsilon = TOLERANCE);
    }

    #[test]
    fn missing_curve_plays_in_real_time() {
        let clip = stop_clip();
        let mut player = DistanceMatchPlayer::new("Speed");
        player.update(&clip, -50.0, 0.1);
        let time = player.update(&clip, -50.0, 0.1);
        assert_relative_eq!(time, 0.2, epsilon = TOLERANCE);
    }

    #[test]
    fn reset_rewinds() {
        let clip = stop_clip();
        let mut player = DistanceMatchPlayer::default();
        player.update(&clip, -50.0, 0.016);
        player.reset();
        assert_eq!(player.time(), 0.0);
    }
}
