//! Closed-form derivations of memory-one probability vectors
//!
//! Each function reproduces an exact published four-vector, bit-for-bit
//! reproducible for the same inputs. Derived entries go through the usual
//! [0, 1] validation; infeasible parameters fail instead of being clamped.
//! The zero-determinant family lives in [`crate::zd`].

use log::debug;

use crate::error::StrategyError;
use crate::game::Payoffs;
use crate::vector::FourVector;

/// Default error rate for [`stochastic_wsls`].
pub const DEFAULT_WSLS_ERROR: f64 = 0.05;

/// Win-Stay Lose-Shift (Pavlov): repeat the last move after a good
/// outcome, switch after a bad one. Deterministic.
pub fn win_stay_lose_shift() -> Result<FourVector, StrategyError> {
    FourVector::new(1.0, 0.0, 0.0, 1.0)
}

/// The mirror image of Pavlov: switch after a good outcome, repeat after a
/// bad one. Conventionally opens with Defect.
pub fn win_shift_lose_stay() -> Result<FourVector, StrategyError> {
    FourVector::new(0.0, 1.0, 1.0, 0.0)
}

/// Generous Tit-For-Tat.
///
/// Cooperates after cooperation and forgives defection with probability
/// `p`. When `p` is `None` the generosity is derived from the payoffs as
/// min(1 - (T-R)/(R-S), (R-P)/(T-P)). `p = 0` degenerates to plain
/// Tit-For-Tat and is not an error.
pub fn gtft(payoffs: &Payoffs, p: Option<f64>) -> Result<FourVector, StrategyError> {
    let (r, pu, s, t) = payoffs.rpst();
    let p = p.unwrap_or_else(|| f64::min(1.0 - (t - r) / (r - s), (r - pu) / (t - pu)));
    debug!("gtft generosity p = {p}");
    FourVector::new(1.0, p, 1.0, p)
}

/// Firm But Fair: cooperates until defected against, then returns to
/// cooperation with probability 2/3 after mutual defection.
/// Payoff-independent.
pub fn firm_but_fair() -> Result<FourVector, StrategyError> {
    FourVector::new(1.0, 0.0, 1.0, 2.0 / 3.0)
}

/// Win-Stay Lose-Shift subject to an error rate `epsilon` on every entry.
pub fn stochastic_wsls(epsilon: f64) -> Result<FourVector, StrategyError> {
    FourVector::new(1.0 - epsilon, epsilon, epsilon, 1.0 - epsilon)
}

/// Soft Joss: Tit-For-Tat that, instead of retaliating outright,
/// still cooperates with probability `q` after the opponent defects.
pub fn soft_joss(q: f64) -> Result<FourVector, StrategyError> {
    FourVector::new(1.0, q, 1.0, q)
}

/// Stochastic Cooperator: the fixed mixed vector
/// (0.935, 0.229, 0.266, 0.42).
pub fn stochastic_cooperator() -> Result<FourVector, StrategyError> {
    FourVector::new(0.935, 0.229, 0.266, 0.42)
}
