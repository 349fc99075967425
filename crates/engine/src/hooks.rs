//! Presentation hooks
//!
//! The engine reports every animated phase through one [`EngineHooks`]
//! implementation injected at construction. All methods default to no-ops,
//! and the default [`EngineHooks::delay`] completes immediately, which is what
//! headless runs and tests want.
//!
//! Callbacks run on the resolution task and must return quickly. The only
//! place the cycle suspends is `delay`.

use std::future::Future;
use std::time::Duration;

use crate::core::Mask;

pub trait EngineHooks: Send + Sync + 'static {
    /// Every explode phase. `exploded` flags the cells about to be destroyed;
    /// the engine state still holds them until the following delay completes.
    fn on_changed_after_explode(&self, _changed: bool, _exploded: &Mask) {}

    /// An explosion happened; `fallen` flags cells that received a falling candy.
    fn on_explode_finished(&self, _fallen: &Mask) {}

    /// An explode phase found nothing to clear. The engine is idle again.
    fn on_explode_finished_no_change(&self) {}

    /// Refill computed and committed; `filled` flags the new candies.
    fn on_fall_finished(&self, _filled: &Mask) {}

    /// About to drop new candies into empty cells.
    fn on_add_missing_candies(&self) {}

    /// Score after an explosion was committed.
    fn on_score_updated(&self, _score: u32) {}

    /// Wait for the current animation to finish.
    fn delay(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// Headless hooks: no callbacks, no waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl EngineHooks for NoopHooks {}

/// Hooks that only pace the cycle with a fixed sleep between phases.
#[derive(Debug, Clone, Copy)]
pub struct SleepHooks {
    pub pause: Duration,
}

impl SleepHooks {
    pub fn new(pause: Duration) -> Self {
        Self { pause }
    }
}

impl EngineHooks for SleepHooks {
    fn delay(&self) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(self.pause)
    }
}
