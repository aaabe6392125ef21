//! Memory-one players and the per-round decision engine

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::StrategyError;
use crate::game::Payoffs;
use crate::random::SeededRng;
use crate::strategy;
use crate::vector::{Action, FourVector, Outcome};
use crate::zd::{variant, Baseline, ZdParams};

/// Policy for the first move of a match, before any outcome exists.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum OpeningMove {
    /// Always open with the given action.
    Fixed(Action),
    /// Open with a biased coin flip.
    Random { cooperation: f64 },
}

/// Strategy classification, queryable without playing a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifier {
    pub memory_depth: u32,
    pub stochastic: bool,
    pub makes_use_of_game: bool,
    pub long_run_time: bool,
}

/// Draw the next action from the current round state.
///
/// With no recorded outcome the opening policy applies. Otherwise a single
/// uniform draw u in [0, 1) selects Cooperate iff u < p(outcome); the draw
/// is one atomic operation, deterministic for a fixed seed and call
/// sequence.
pub fn decide(
    last: Option<Outcome>,
    opening: OpeningMove,
    vector: &FourVector,
    rng: &mut SeededRng,
) -> Action {
    match last {
        None => match opening {
            OpeningMove::Fixed(action) => action,
            OpeningMove::Random { cooperation } => coin_flip(cooperation, rng),
        },
        Some(outcome) => {
            let p = vector.probability(outcome);
            let action = coin_flip(p, rng);
            trace!("{outcome:?} p={p} -> {action:?}");
            action
        }
    }
}

fn coin_flip(cooperation: f64, rng: &mut SeededRng) -> Action {
    if rng.next_bool(cooperation) {
        Action::Cooperate
    } else {
        Action::Defect
    }
}

/// A player whose next action depends only on the previous round's
/// outcome, via a [`FourVector`].
///
/// The player owns its vector and the single most recent outcome. That
/// outcome is transient per-match state: [`record_round`] overwrites it
/// once per round and [`reset`] clears it at the start of a new match.
///
/// [`record_round`]: MemoryOnePlayer::record_round
/// [`reset`]: MemoryOnePlayer::reset
#[derive(Clone, Debug)]
pub struct MemoryOnePlayer {
    vector: Option<FourVector>,
    opening: OpeningMove,
    uses_game: bool,
    last: Option<Outcome>,
}

impl MemoryOnePlayer {
    /// A player with an explicit validated vector.
    pub fn new(vector: FourVector, opening: OpeningMove) -> Self {
        Self {
            vector: Some(vector),
            opening,
            uses_game: false,
            last: None,
        }
    }

    /// A generic player with no vector yet.
    ///
    /// Deciding before [`set_four_vector`](Self::set_four_vector) fails
    /// with [`StrategyError::VectorNotSet`].
    pub fn unconfigured() -> Self {
        Self {
            vector: None,
            opening: OpeningMove::Fixed(Action::Cooperate),
            uses_game: false,
            last: None,
        }
    }

    fn with_game_use(mut self) -> Self {
        self.uses_game = true;
        self
    }

    /// Win-Stay Lose-Shift (Pavlov), opening with Cooperate.
    pub fn win_stay_lose_shift() -> Result<Self, StrategyError> {
        Ok(Self::new(
            strategy::win_stay_lose_shift()?,
            OpeningMove::Fixed(Action::Cooperate),
        ))
    }

    /// Win-Shift Lose-Stay, opening with Defect.
    pub fn win_shift_lose_stay() -> Result<Self, StrategyError> {
        Ok(Self::new(
            strategy::win_shift_lose_stay()?,
            OpeningMove::Fixed(Action::Defect),
        ))
    }

    /// Generous Tit-For-Tat for the given payoffs.
    pub fn gtft(payoffs: &Payoffs, p: Option<f64>) -> Result<Self, StrategyError> {
        Ok(
            Self::new(strategy::gtft(payoffs, p)?, OpeningMove::Fixed(Action::Cooperate))
                .with_game_use(),
        )
    }

    /// Firm But Fair.
    pub fn firm_but_fair() -> Result<Self, StrategyError> {
        Ok(Self::new(
            strategy::firm_but_fair()?,
            OpeningMove::Fixed(Action::Cooperate),
        ))
    }

    /// Win-Stay Lose-Shift with error rate `epsilon`.
    pub fn stochastic_wsls(epsilon: f64) -> Result<Self, StrategyError> {
        Ok(Self::new(
            strategy::stochastic_wsls(epsilon)?,
            OpeningMove::Fixed(Action::Cooperate),
        ))
    }

    /// Soft Joss with forgiveness `q`.
    pub fn soft_joss(q: f64) -> Result<Self, StrategyError> {
        Ok(Self::new(
            strategy::soft_joss(q)?,
            OpeningMove::Fixed(Action::Cooperate),
        ))
    }

    /// Stochastic Cooperator.
    pub fn stochastic_cooperator() -> Result<Self, StrategyError> {
        Ok(Self::new(
            strategy::stochastic_cooperator()?,
            OpeningMove::Fixed(Action::Cooperate),
        ))
    }

    /// Install (or replace) the probability vector.
    pub fn set_four_vector(&mut self, vector: FourVector) {
        self.vector = Some(vector);
    }

    pub fn four_vector(&self) -> Option<&FourVector> {
        self.vector.as_ref()
    }

    /// Decide the next action for this round.
    pub fn decide(&self, rng: &mut SeededRng) -> Result<Action, StrategyError> {
        let vector = self.vector.as_ref().ok_or(StrategyError::VectorNotSet)?;
        Ok(decide(self.last, self.opening, vector, rng))
    }

    /// Record the actions just played; consulted on the next decision.
    pub fn record_round(&mut self, own: Action, opponent: Action) {
        self.last = Some(Outcome::new(own, opponent));
    }

    /// Forget the per-match state ahead of a new match.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn classifier(&self) -> Classifier {
        let stochastic = self
            .vector
            .as_ref()
            .map_or(false, FourVector::is_stochastic)
            || matches!(self.opening, OpeningMove::Random { .. });
        Classifier {
            memory_depth: 1,
            stochastic,
            makes_use_of_game: self.uses_game,
            long_run_time: false,
        }
    }
}

/// A memory-one player whose vector is computed from match attributes.
///
/// The (phi, s) parameters and the baseline rule are fixed at
/// construction; the vector itself needs the game payoffs, which arrive
/// through [`receive_match_attributes`](Self::receive_match_attributes)
/// before play begins. Deciding earlier is a configuration error.
#[derive(Clone, Debug)]
pub struct LinearRelationPlayer {
    phi: f64,
    s: f64,
    baseline: Baseline,
    inner: MemoryOnePlayer,
}

impl LinearRelationPlayer {
    pub fn new(phi: f64, s: f64, baseline: Baseline) -> Self {
        Self {
            phi,
            s,
            baseline,
            inner: MemoryOnePlayer::unconfigured().with_game_use(),
        }
    }

    pub fn from_params(params: ZdParams) -> Self {
        Self::new(params.phi, params.s, params.baseline)
    }

    pub fn zd_extort2() -> Self {
        Self::from_params(variant::ZD_EXTORT2)
    }

    pub fn zd_extort2_v2() -> Self {
        Self::from_params(variant::ZD_EXTORT2_V2)
    }

    pub fn zd_extort4() -> Self {
        Self::from_params(variant::ZD_EXTORT4)
    }

    pub fn zd_gen2() -> Self {
        Self::from_params(variant::ZD_GEN2)
    }

    pub fn zd_gtft2() -> Self {
        Self::from_params(variant::ZD_GTFT2)
    }

    pub fn zd_set2() -> Self {
        Self::from_params(variant::ZD_SET2)
    }

    /// Compute and install the four-vector from the game payoffs.
    ///
    /// Fails with a context error on a non-finite or infeasible target,
    /// and with a validation error if the relation produces an entry
    /// outside [0, 1].
    pub fn receive_match_attributes(&mut self, payoffs: &Payoffs) -> Result<(), StrategyError> {
        let params = ZdParams {
            phi: self.phi,
            s: self.s,
            baseline: self.baseline,
        };
        self.inner.set_four_vector(params.derive(payoffs)?);
        Ok(())
    }

    pub fn four_vector(&self) -> Option<&FourVector> {
        self.inner.four_vector()
    }

    pub fn decide(&self, rng: &mut SeededRng) -> Result<Action, StrategyError> {
        self.inner.decide(rng)
    }

    pub fn record_round(&mut self, own: Action, opponent: Action) {
        self.inner.record_round(own, opponent);
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn classifier(&self) -> Classifier {
        self.inner.classifier()
    }
}

/// Commits at match start to always-cooperate or always-defect.
///
/// The commitment is a single seeded draw (cooperate with probability
/// 0.6), held as per-match state and never re-derived until
/// [`reset`](Self::reset).
#[derive(Clone, Debug, Default)]
pub struct AllCOrAllD {
    committed: Option<Action>,
}

impl AllCOrAllD {
    const COOPERATION: f64 = 0.6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn decide(&mut self, rng: &mut SeededRng) -> Action {
        *self
            .committed
            .get_or_insert_with(|| coin_flip(Self::COOPERATION, rng))
    }

    /// Re-arm the commitment draw for a new match.
    pub fn reset(&mut self) {
        self.committed = None;
    }

    pub fn classifier(&self) -> Classifier {
        Classifier {
            memory_depth: 1,
            stochastic: true,
            makes_use_of_game: false,
            long_run_time: false,
        }
    }
}
