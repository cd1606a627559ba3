//! `BehaviorState` — one node of the FSM — and the lifecycle protocol.
//!
//! The five behaviors are variants of a payload enum; each lifecycle phase
//! is a single dispatch over that enum into the behavior modules.  There is
//! no per-state vtable: the whole machine is a tagged union and three
//! `match` expressions.

use crate::attack;
use crate::context::NpcContext;
use crate::error::{BehaviorError, BehaviorResult};
use crate::idle;
use crate::patrol::{self, PatrolData};
use crate::pursue;
use crate::runaway::{self, RunawayData};
use crate::stage::{BehaviorKind, Stage};

// ── Payload ───────────────────────────────────────────────────────────────────

/// Per-variant state payload.  Only Patrol and Runaway carry data between
/// ticks (the checkpoint cursor and the resolved safe location).
#[derive(Debug)]
pub(crate) enum StateData {
    Idle,
    Patrol(PatrolData),
    Pursue,
    Attack,
    Runaway(RunawayData),
}

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// One single-use FSM node.
///
/// Construct with one of the kind-specific constructors (always in
/// [`Stage::Enter`]), then call [`process`][Self::process] once per tick
/// until it yields a successor.  After that the instance is spent.
#[derive(Debug)]
pub struct BehaviorState {
    stage: Stage,
    data: StateData,
    /// Successor, set when Update decides a transition; taken by Exit.
    next: Option<Box<BehaviorState>>,
}

impl BehaviorState {
    fn fresh(data: StateData) -> Self {
        Self { stage: Stage::Enter, data, next: None }
    }

    // ── Constructors ──────────────────────────────────────────────────────

    /// The spawn state.
    pub fn idle() -> Self {
        Self::fresh(StateData::Idle)
    }

    pub fn patrol() -> Self {
        Self::fresh(StateData::Patrol(PatrolData::new()))
    }

    pub fn pursue() -> Self {
        Self::fresh(StateData::Pursue)
    }

    /// Fails with [`BehaviorError::MissingAudioCue`] when the NPC has no
    /// audio port — the weapon-fire cue is part of the attack contract.
    pub fn attack(ctx: &NpcContext<'_>) -> BehaviorResult<Self> {
        if !ctx.has_audio() {
            return Err(BehaviorError::MissingAudioCue);
        }
        Ok(Self::fresh(StateData::Attack))
    }

    /// Resolves the nearest "Safe"-tagged location up front; fails with
    /// [`BehaviorError::NoSafeLocation`] when the environment has none.
    pub fn runaway(ctx: &NpcContext<'_>) -> BehaviorResult<Self> {
        let data = RunawayData::resolve(ctx)?;
        Ok(Self::fresh(StateData::Runaway(data)))
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// Which of the five behavioral modes this state is.
    pub fn kind(&self) -> BehaviorKind {
        match self.data {
            StateData::Idle       => BehaviorKind::Idle,
            StateData::Patrol(_)  => BehaviorKind::Patrol,
            StateData::Pursue     => BehaviorKind::Pursue,
            StateData::Attack     => BehaviorKind::Attack,
            StateData::Runaway(_) => BehaviorKind::Runaway,
        }
    }

    /// Current lifecycle phase.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    // ── Lifecycle protocol ────────────────────────────────────────────────

    /// Run one tick of the lifecycle.
    ///
    /// Phases cascade: entry effects and the first update happen in the
    /// same call, as do a decided transition's exit effects.  Returns
    /// `Ok(Some(successor))` when this state has exited — the caller must
    /// replace it and never call it again.  Returns `Ok(None)` while the
    /// state stays active.
    ///
    /// A failed successor construction aborts the transition: the state
    /// remains live in Update and the error is returned.
    pub fn process(&mut self, ctx: &mut NpcContext<'_>) -> BehaviorResult<Option<BehaviorState>> {
        if self.stage == Stage::Exit && self.next.is_none() {
            return Err(BehaviorError::SpentState(self.kind()));
        }

        if self.stage == Stage::Enter {
            self.enter(ctx);
            self.stage = Stage::Update;
        }
        if self.stage == Stage::Update {
            if let Some(successor) = self.update(ctx)? {
                self.next = Some(Box::new(successor));
                self.stage = Stage::Exit;
            }
        }
        if self.stage == Stage::Exit {
            self.exit(ctx);
            // Leaving `next` empty marks the instance spent.
            return Ok(self.next.take().map(|boxed| *boxed));
        }
        Ok(None)
    }

    // ── Phase dispatch ────────────────────────────────────────────────────

    fn enter(&mut self, ctx: &mut NpcContext<'_>) {
        match &mut self.data {
            StateData::Idle          => idle::enter(ctx),
            StateData::Patrol(data)  => patrol::enter(data, ctx),
            StateData::Pursue        => pursue::enter(ctx),
            StateData::Attack        => attack::enter(ctx),
            StateData::Runaway(data) => runaway::enter(data, ctx),
        }
    }

    fn update(&mut self, ctx: &mut NpcContext<'_>) -> BehaviorResult<Option<BehaviorState>> {
        match &mut self.data {
            StateData::Idle          => idle::update(ctx),
            StateData::Patrol(data)  => patrol::update(data, ctx),
            StateData::Pursue        => pursue::update(ctx),
            StateData::Attack        => attack::update(ctx),
            StateData::Runaway(data) => runaway::update(data, ctx),
        }
    }

    fn exit(&mut self, ctx: &mut NpcContext<'_>) {
        match &self.data {
            StateData::Idle       => idle::exit(ctx),
            StateData::Patrol(_)  => patrol::exit(ctx),
            StateData::Pursue     => pursue::exit(ctx),
            StateData::Attack     => attack::exit(ctx),
            StateData::Runaway(_) => runaway::exit(ctx),
        }
    }
}
