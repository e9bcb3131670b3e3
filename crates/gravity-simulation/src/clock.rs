//! Pause, speed, and the per-frame time step

/// Factor applied per speed-adjust step.
const SPEED_STEP_FACTOR: f32 = 1.25;

/// Bounds on the speed multiplier. The lower bound keeps the effective
/// step strictly positive while running; zero dt is reserved for pause.
pub const MIN_SPEED_MULTIPLIER: f32 = 0.1;
pub const MAX_SPEED_MULTIPLIER: f32 = 8.0;

pub const DEFAULT_SPEED_MULTIPLIER: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Running,
    Paused,
}

/// Owns the pause/speed/elapsed state and produces the effective `dt`
/// fed to the integrator each frame: `nominal * multiplier` while
/// running, `0` while paused.
#[derive(Debug, Clone, PartialEq)]
pub struct SimClock {
    state: ClockState,
    speed_multiplier: f32,
    elapsed: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            state: ClockState::Running,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            elapsed: 0.0,
        }
    }
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == ClockState::Paused
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Simulated seconds accumulated so far (pauses excluded).
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            ClockState::Running => ClockState::Paused,
            ClockState::Paused => ClockState::Running,
        };
        log::info!("simulation {:?}", self.state);
    }

    /// Scale the multiplier by `steps` discrete notches (positive or
    /// negative), clamped to the documented bounds.
    pub fn adjust_speed(&mut self, steps: i32) {
        self.speed_multiplier = (self.speed_multiplier * SPEED_STEP_FACTOR.powi(steps))
            .clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER);
        log::info!("speed multiplier: {:.3}", self.speed_multiplier);
    }

    /// Restore `Running`, the default multiplier, and zero elapsed time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Compute the effective step for this frame and account for it.
    pub fn tick(&mut self, nominal_dt: f32) -> f32 {
        assert!(nominal_dt >= 0.0, "negative frame delta: {nominal_dt}");
        let dt = match self.state {
            ClockState::Running => nominal_dt * self.speed_multiplier,
            ClockState::Paused => 0.0,
        };
        self.elapsed += dt;
        dt
    }
}
