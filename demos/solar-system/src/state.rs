use crate::follow::FollowState;

/// User-adjustable simulation state. Only changed through the setters,
/// which drop values the scene cannot use.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    speed: f64,
    size_scale: f32,
    pub follow: FollowState,
}

impl SimulationState {
    pub fn new() -> Self {
        Self { speed: 1.0, size_scale: 1.0, follow: FollowState::Free }
    }

    /// Simulation speed multiplier. Zero and negative values are allowed.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn size_scale(&self) -> f32 {
        self.size_scale
    }

    pub fn set_speed(&mut self, speed: f64) {
        if !speed.is_finite() {
            log::warn!("ignoring non-finite simulation speed {speed}");
            return;
        }
        self.speed = speed;
    }

    pub fn set_size_scale(&mut self, scale: f32) {
        if !scale.is_finite() || scale <= 0.0 {
            log::warn!("ignoring size scale {scale}");
            return;
        }
        self.size_scale = scale;
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = SimulationState::new();
        assert_eq!(state.speed(), 1.0);
        assert_eq!(state.size_scale(), 1.0);
        assert!(!state.follow.is_following());
    }

    #[test]
    fn speed_accepts_zero_and_negative() {
        let mut state = SimulationState::new();
        state.set_speed(0.0);
        assert_eq!(state.speed(), 0.0);
        state.set_speed(-2.5);
        assert_eq!(state.speed(), -2.5);
        state.set_speed(f64::INFINITY);
        assert_eq!(state.speed(), -2.5);
    }

    #[test]
    fn size_scale_must_be_positive() {
        let mut state = SimulationState::new();
        state.set_size_scale(2.0);
        state.set_size_scale(0.0);
        state.set_size_scale(-1.0);
        state.set_size_scale(f32::NAN);
        assert_eq!(state.size_scale(), 2.0);
    }
}
