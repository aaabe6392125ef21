//! Strategy error taxonomy

use thiserror::Error;

/// Errors surfaced by vector construction, parameter derivation and
/// decision calls.
///
/// All of these are unrecoverable where they occur: they are returned to
/// the caller immediately, nothing is clamped, defaulted or retried.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StrategyError {
    /// Decision requested before a probability vector was established.
    #[error("no probability vector set; configure the player before playing")]
    VectorNotSet,

    /// A supplied or derived probability falls outside [0, 1].
    #[error("probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    /// A linear-relation match attribute is not a finite number.
    #[error("match attribute {name} = {value} is not finite")]
    NonFiniteAttribute { name: &'static str, value: f64 },

    /// Linear-relation parameters violate the feasibility bounds
    /// (P <= l <= R and s_min <= s <= 1).
    #[error("infeasible linear relation: phi = {phi}, s = {s}, l = {l}")]
    InfeasibleRelation { phi: f64, s: f64, l: f64 },
}
