use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::angle::{ease_out_cubic, normalize, slice_center, TWO_PI};
use crate::error::{SpinRejected, WheelError};
use crate::pool::NamePool;
use crate::random::{RandomIndex, ThreadRngIndex};
use crate::render::{layout, Palette, WheelFrame};

pub const SPIN_DURATION_MS: f64 = 4000.0; // Duration of spin animation in milliseconds
pub const EXTRA_TURNS: u32 = 5; // Full rotations added on top of the aligning turn
pub const POINTER_ANGLE: f64 = 1.5 * PI; // Top of the wheel in screen coordinates

/// Tunables for a single wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    pub extra_turns: u32,
    pub duration_ms: f64,
    pub pointer_angle: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            extra_turns: EXTRA_TURNS,
            duration_ms: SPIN_DURATION_MS,
            pointer_angle: POINTER_ANGLE,
        }
    }
}

impl WheelConfig {
    pub fn with_extra_turns(mut self, extra_turns: u32) -> Self {
        self.extra_turns = extra_turns;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn with_pointer_angle(mut self, pointer_angle: f64) -> Self {
        self.pointer_angle = normalize(pointer_angle);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelState {
    Idle,
    Spinning,
}

/// Everything fixed at the moment a spin starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub winner_index: usize,
    pub start_angle: f64,
    pub total_rotation: f64,
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

impl SpinPlan {
    /// Linear progress in `[0, 1]` at time `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn angle_at(&self, progress: f64) -> f64 {
        self.start_angle + self.total_rotation * ease_out_cubic(progress)
    }

    /// Angle the wheel reaches on the last frame, before it is reset.
    pub fn target_angle(&self) -> f64 {
        self.start_angle + self.total_rotation
    }
}

/// Emitted once per completed spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerEvent {
    pub name: String,
    pub index: usize,
}

/// Outcome of advancing the wheel by one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpinTick {
    /// No spin in progress.
    Idle,
    Turning { angle: f64, progress: f64 },
    Finished(WinnerEvent),
    /// The captured winner position no longer exists; nothing was removed.
    Inconsistent { index: usize, len: usize },
}

/// Time source in milliseconds, e.g. `performance.now()`.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Arranges for `NameWheel::on_frame` to be called again on the next frame.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// One wheel: its names, its rotation and at most one running spin.
#[derive(Debug, Clone)]
pub struct NameWheel<R = ThreadRngIndex> {
    pool: NamePool,
    angle: f64,
    session: Option<SpinPlan>,
    last_winner: Option<String>,
    rng: R,
    config: WheelConfig,
}

impl NameWheel<ThreadRngIndex> {
    pub fn new() -> Self {
        Self::with_rng(ThreadRngIndex)
    }
}

impl Default for NameWheel<ThreadRngIndex> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomIndex> NameWheel<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            pool: NamePool::new(),
            angle: 0.0,
            session: None,
            last_winner: None,
            rng,
            config: WheelConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WheelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> WheelState {
        if self.session.is_some() {
            WheelState::Spinning
        } else {
            WheelState::Idle
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn pool(&self) -> &NamePool {
        &self.pool
    }

    pub fn names(&self) -> &[String] {
        self.pool.names()
    }

    pub fn session(&self) -> Option<&SpinPlan> {
        self.session.as_ref()
    }

    pub fn last_winner(&self) -> Option<&str> {
        self.last_winner.as_deref()
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    fn ensure_idle(&self) -> Result<(), WheelError> {
        if self.is_spinning() {
            log::warn!("rejected name list change during a spin");
            return Err(WheelError::Spinning);
        }
        Ok(())
    }

    /// Adds a name. Returns `Ok(false)` when the input was blank and nothing changed.
    pub fn add_name(&mut self, raw: &str) -> Result<bool, WheelError> {
        self.ensure_idle()?;
        Ok(self.pool.add(raw))
    }

    pub fn remove_name(&mut self, index: usize) -> Result<String, WheelError> {
        self.ensure_idle()?;
        let name = self.pool.remove_at(index)?;
        log::debug!("removed {:?} from position {}", name, index);
        Ok(name)
    }

    /// Empties the list and puts the wheel back at its resting angle.
    pub fn clear_all(&mut self) -> Result<(), WheelError> {
        self.ensure_idle()?;
        self.pool.clear();
        self.angle = 0.0;
        self.last_winner = None;
        log::debug!("cleared every name");
        Ok(())
    }

    /// Starts a spin at `now_ms`. The winner is drawn here and never changes afterwards.
    pub fn request_spin(&mut self, now_ms: f64) -> Result<SpinPlan, SpinRejected> {
        if self.pool.is_empty() {
            log::warn!("spin requested with no names");
            return Err(SpinRejected::EmptyPool);
        }
        if self.is_spinning() {
            log::warn!("spin requested while already spinning");
            return Err(SpinRejected::AlreadySpinning);
        }

        let count = self.pool.len();
        let winner_index = self.rng.pick(count).min(count - 1);
        let target_base = self.config.pointer_angle - slice_center(winner_index, count);
        let start_angle = normalize(self.angle);
        let diff = normalize(target_base - start_angle);
        let total_rotation = diff + self.config.extra_turns as f64 * TWO_PI;

        let plan = SpinPlan {
            winner_index,
            start_angle,
            total_rotation,
            started_at_ms: now_ms,
            duration_ms: self.config.duration_ms,
        };
        log::debug!(
            "spin planned: winner slot {} of {}, rotating {:.3} rad over {} ms",
            winner_index,
            count,
            total_rotation,
            plan.duration_ms
        );

        self.angle = start_angle;
        self.session = Some(plan);
        Ok(plan)
    }

    /// Moves the running spin to time `now_ms`, finishing it once the duration has elapsed.
    pub fn advance(&mut self, now_ms: f64) -> SpinTick {
        let Some(plan) = self.session else {
            return SpinTick::Idle;
        };

        let progress = plan.progress(now_ms);
        if progress < 1.0 {
            self.angle = plan.angle_at(progress);
            return SpinTick::Turning {
                angle: self.angle,
                progress,
            };
        }

        self.angle = plan.target_angle();
        self.session = None;
        self.finish(plan.winner_index)
    }

    fn finish(&mut self, winner_index: usize) -> SpinTick {
        let tick = match self.pool.remove_at(winner_index) {
            Ok(name) => {
                log::info!("winner selected: {}", name);
                self.last_winner = Some(name.clone());
                SpinTick::Finished(WinnerEvent {
                    name,
                    index: winner_index,
                })
            }
            Err(err) => {
                log::error!("spin finished against a changed name list: {}", err);
                SpinTick::Inconsistent {
                    index: winner_index,
                    len: self.pool.len(),
                }
            }
        };
        self.angle = 0.0;
        tick
    }

    /// `request_spin` at the clock's current time, followed by a request for the first frame.
    pub fn start_spin(
        &mut self,
        clock: &dyn Clock,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<SpinPlan, SpinRejected> {
        let plan = self.request_spin(clock.now_ms())?;
        scheduler.request_frame();
        Ok(plan)
    }

    /// Animation-frame callback body: advance to the clock's time and keep frames coming while turning.
    pub fn on_frame(&mut self, clock: &dyn Clock, scheduler: &mut dyn FrameScheduler) -> SpinTick {
        let tick = self.advance(clock.now_ms());
        if matches!(tick, SpinTick::Turning { .. }) {
            scheduler.request_frame();
        }
        tick
    }

    pub fn frame(&self, palette: Palette) -> WheelFrame {
        layout(self.pool.names(), self.angle, palette)
    }
}
