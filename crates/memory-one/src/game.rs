//! Game payoff values consumed from the match collaborator

use serde::{Deserialize, Serialize};

/// The four scalar payoffs of a Prisoner's Dilemma round.
///
/// Supplied by the surrounding game abstraction, which guarantees the
/// standard ordering T > R > P > S and 2R > T + S; the derivations here
/// only rely on what their formulas need algebraically.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payoffs {
    /// R: both cooperated
    pub reward: f64,
    /// P: both defected
    pub punishment: f64,
    /// S: cooperated against a defector
    pub sucker: f64,
    /// T: defected against a cooperator
    pub temptation: f64,
}

impl Payoffs {
    pub fn new(reward: f64, punishment: f64, sucker: f64, temptation: f64) -> Self {
        Self {
            reward,
            punishment,
            sucker,
            temptation,
        }
    }

    /// The (R, P, S, T) tuple the derivation formulas are written in.
    pub fn rpst(&self) -> (f64, f64, f64, f64) {
        (self.reward, self.punishment, self.sucker, self.temptation)
    }
}

impl Default for Payoffs {
    /// The conventional (R, P, S, T) = (3, 1, 0, 5) matrix.
    fn default() -> Self {
        Self::new(3.0, 1.0, 0.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matrix() {
        let payoffs = Payoffs::default();
        assert_eq!(payoffs.rpst(), (3.0, 1.0, 0.0, 5.0));
    }

    #[test]
    fn test_default_satisfies_dilemma_ordering() {
        let (r, p, s, t) = Payoffs::default().rpst();
        assert!(t > r && r > p && p > s);
        assert!(2.0 * r > t + s);
    }
}
