//! Engine module - owns the live state and sequences the resolution rules
//!
//! The engine runs in two modes:
//!
//! - **Instant** ([`Engine::explode_and_fall_until_stable_sync`]): explode, fall
//!   and refill in a loop until nothing matches. No hooks fire. Used to set up a
//!   board with no pre-existing matches.
//! - **Animated** ([`Engine::resolve`]): one coroutine per cycle stepping
//!   `Explode -> Fall -> Refill -> Explode ...` until an explode phase finds
//!   nothing, reporting each step through [`EngineHooks`] and awaiting
//!   [`EngineHooks::delay`] between steps.
//!
//! Within a cycle the explosion is announced before it is committed (the
//! destroyed mask arrives, the delay runs, then the cells leave the state),
//! while fall and refill are committed before their hook and delay.
//!
//! Only one cycle runs at a time. While it runs, swaps are rejected with
//! [`ActionError::ResolutionInFlight`], further cycles are refused and
//! anything else that replaces the state fails with [`EngineError::Busy`].

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use crate::config::EngineConfig;
use crate::core::{self as rules, ActionError, CandyRng, Mask, State};
use crate::error::EngineError;
use crate::hooks::EngineHooks;
use crate::types::{Action, Phase};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Inner<H> {
    config: EngineConfig,
    hooks: H,
    state: Mutex<State>,
    rng: Mutex<CandyRng>,
    phase: AtomicU8,
    resolving: AtomicBool,
}

impl<H> Inner<H> {
    fn set_phase(&self, phase: Phase) {
        self.phase.store(phase.to_u8(), Ordering::SeqCst);
    }
}

/// Marks a resolution cycle as in flight; dropping it returns the engine to idle.
struct ResolveGuard<H> {
    inner: Arc<Inner<H>>,
}

impl<H> Drop for ResolveGuard<H> {
    fn drop(&mut self) {
        self.inner.set_phase(Phase::Idle);
        self.inner.resolving.store(false, Ordering::SeqCst);
    }
}

/// Handle to one game session.
///
/// Cloning is cheap and every clone drives the same session, which is how the
/// animated cycle runs on a spawned task while the caller keeps a handle.
pub struct Engine<H> {
    inner: Arc<Inner<H>>,
}

impl<H> Clone for Engine<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: EngineHooks> Engine<H> {
    /// Create an engine with an empty board; call [`Engine::init_random`] to deal one.
    pub fn new(config: EngineConfig, hooks: H) -> Result<Self, EngineError> {
        config.validate()?;
        let state = State::new(config.width, config.height)?;
        let rng = CandyRng::new(config.seed);

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                hooks,
                state: Mutex::new(state),
                rng: Mutex::new(rng),
                phase: AtomicU8::new(Phase::Idle.to_u8()),
                resolving: AtomicBool::new(false),
            }),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    pub fn hooks(&self) -> &H {
        &self.inner.hooks
    }

    /// Snapshot of the current state.
    ///
    /// While a cycle runs this races with it; prefer the masks and scores
    /// delivered through the hooks.
    pub fn state(&self) -> State {
        lock(&self.inner.state).clone()
    }

    /// Replace the current state (fixtures and replays).
    ///
    /// Fails with [`EngineError::Busy`] while a resolution cycle is running.
    pub fn set_state(&self, state: State) -> Result<(), EngineError> {
        let _guard = self.begin_or_busy()?;
        self.commit(state);
        Ok(())
    }

    fn commit(&self, state: State) {
        *lock(&self.inner.state) = state;
    }

    pub fn score(&self) -> u32 {
        lock(&self.inner.state).score()
    }

    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.inner.phase.load(Ordering::SeqCst)).unwrap_or_default()
    }

    pub fn is_resolving(&self) -> bool {
        self.inner.resolving.load(Ordering::SeqCst)
    }

    /// Empty board of the configured size with a zero score
    pub fn init(&self) -> Result<State, EngineError> {
        Ok(State::new(self.inner.config.width, self.inner.config.height)?)
    }

    /// Deal a fresh random board with no matches on it and a zero score.
    ///
    /// Fails with [`EngineError::Busy`] while a resolution cycle is running.
    pub fn init_random(&self) -> Result<(), EngineError> {
        let _guard = self.begin_or_busy()?;
        let empty = self.init()?;
        let state = rules::fill_random(&empty, &mut lock(&self.inner.rng));

        if state.width() == 0 || state.height() == 0 {
            return Err(EngineError::InvalidDimensions {
                width: state.width(),
                height: state.height(),
            });
        }

        self.commit(state);
        let rounds = self.settle()?;
        lock(&self.inner.state).set_score(0);

        log::debug!(
            "dealt {}x{} board after {} settling rounds",
            self.inner.config.width,
            self.inner.config.height,
            rounds
        );
        Ok(())
    }

    pub fn is_valid_action(&self, action: Action) -> Result<(), ActionError> {
        rules::is_valid_action(&lock(&self.inner.state), action)
    }

    /// Apply a player's swap and make it the current state.
    ///
    /// Fails without touching the state when the action is invalid or a
    /// resolution cycle is running. The swap is not resolved.
    pub fn try_swap(&self, action: Action) -> Result<State, ActionError> {
        if self.is_resolving() {
            return Err(ActionError::ResolutionInFlight);
        }
        self.apply_swap(action)
    }

    /// Like [`Engine::try_swap`], but a rejected swap is logged and the
    /// unchanged current state is returned.
    pub fn swap(&self, action: Action) -> State {
        match self.try_swap(action) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("rejected swap {}: {}", action, err);
                self.state()
            }
        }
    }

    fn apply_swap(&self, action: Action) -> Result<State, ActionError> {
        let mut state = lock(&self.inner.state);
        let next = rules::swap(&state, action)?;
        *state = next.clone();
        log::trace!("swapped {}", action);
        Ok(next)
    }

    /// Refill empty cells, notifying the hooks first.
    pub fn add_missing_candies(&self, state: &State) -> (State, Mask) {
        self.inner.hooks.on_add_missing_candies();
        rules::add_missing_candies(state, &mut lock(&self.inner.rng))
    }

    /// Raw adjacency enumeration over the current board
    pub fn find_valid_moves(&self) -> Vec<Action> {
        rules::find_valid_moves(&lock(&self.inner.state))
    }

    /// Resolve the current board instantly.
    ///
    /// Returns the number of explode rounds that cleared something. Fails with
    /// [`EngineError::Unstable`] if the board still matches after
    /// `max_sync_rounds` rounds; the state reached so far is kept. Fails with
    /// [`EngineError::Busy`] while an animated cycle is running.
    pub fn explode_and_fall_until_stable_sync(&self) -> Result<u32, EngineError> {
        let _guard = self.begin_or_busy()?;
        self.settle()
    }

    fn settle(&self) -> Result<u32, EngineError> {
        let max_rounds = self.inner.config.max_sync_rounds;
        let mut rounds = 0;

        loop {
            let current = self.state();
            let (exploded, changed, _) = rules::explode_and_score(&current);
            if !changed {
                log::trace!("instant resolution settled after {} rounds", rounds);
                return Ok(rounds);
            }
            if rounds >= max_rounds {
                log::error!("board still unstable after {} rounds", rounds);
                return Err(EngineError::Unstable { rounds });
            }

            let (fallen, _) = rules::fall(&exploded);
            let (filled, _) = rules::add_missing_candies(&fallen, &mut lock(&self.inner.rng));
            self.commit(filled);
            rounds += 1;
        }
    }

    fn try_begin(&self) -> Option<ResolveGuard<H>> {
        if self
            .inner
            .resolving
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::warn!("resolution already in flight");
            return None;
        }
        Some(ResolveGuard {
            inner: Arc::clone(&self.inner),
        })
    }

    fn begin_or_busy(&self) -> Result<ResolveGuard<H>, EngineError> {
        self.try_begin().ok_or(EngineError::Busy)
    }

    /// Run one animated resolution cycle to completion.
    ///
    /// Returns false without doing anything if a cycle is already running.
    pub async fn resolve(&self) -> bool {
        match self.try_begin() {
            Some(guard) => {
                self.run_cycle(guard).await;
                true
            }
            None => false,
        }
    }

    /// Start an animated cycle on the tokio runtime and return immediately.
    ///
    /// Returns None if a cycle is already running. Must be called from within
    /// a tokio runtime.
    pub fn explode_and_fall_until_stable(&self) -> Option<JoinHandle<()>> {
        let guard = self.try_begin()?;
        let engine = self.clone();
        Some(tokio::spawn(async move {
            engine.run_cycle(guard).await;
        }))
    }

    /// A full player turn: swap, let the swap animate, then resolve.
    ///
    /// Returns the swapped (unresolved) state.
    pub async fn swap_and_resolve(&self, action: Action) -> Result<State, ActionError> {
        let guard = self.try_begin().ok_or(ActionError::ResolutionInFlight)?;
        let swapped = self.apply_swap(action)?;

        self.inner.set_phase(Phase::Swap);
        self.inner.hooks.delay().await;

        self.run_cycle(guard).await;
        Ok(swapped)
    }

    async fn run_cycle(&self, guard: ResolveGuard<H>) {
        let hooks = &self.inner.hooks;
        let mut cascade = 0u32;

        loop {
            self.inner.set_phase(Phase::Explode);
            let current = self.state();
            let (exploded_state, changed, exploded) = rules::explode_and_score(&current);
            hooks.on_changed_after_explode(changed, &exploded);

            if !changed {
                log::debug!(
                    "resolution idle after {} cascades, score {}",
                    cascade,
                    current.score()
                );
                drop(guard);
                hooks.on_explode_finished_no_change();
                return;
            }

            // Destroyed cells stay visible until the removal animation is done.
            hooks.delay().await;
            let score = exploded_state.score();
            self.commit(exploded_state.clone());
            hooks.on_score_updated(score);
            log::trace!("exploded {} cells, score {}", exploded.count(), score);

            self.inner.set_phase(Phase::Fall);
            let (fallen_state, fallen) = rules::fall(&exploded_state);
            self.commit(fallen_state.clone());
            hooks.on_explode_finished(&fallen);
            hooks.delay().await;

            self.inner.set_phase(Phase::Refill);
            let (filled_state, filled) = self.add_missing_candies(&fallen_state);
            self.commit(filled_state);
            hooks.on_fall_finished(&filled);
            hooks.delay().await;

            cascade += 1;
        }
    }
}
