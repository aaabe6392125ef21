//! Actions, round outcomes and the conditional-cooperation table

use serde::{Deserialize, Serialize};

use crate::error::StrategyError;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

/// The pair of actions played in the previous round, ordered (own, opponent).
///
/// This is the lookup key into a [`FourVector`]. Before any round has been
/// played no outcome exists; callers model that as `Option<Outcome>`, never
/// as a fifth outcome value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub own: Action,
    pub opponent: Action,
}

impl Outcome {
    pub fn new(own: Action, opponent: Action) -> Self {
        Self { own, opponent }
    }

    /// Table position in the fixed (CC, CD, DC, DD) order.
    fn index(self) -> usize {
        match (self.own, self.opponent) {
            (Action::Cooperate, Action::Cooperate) => 0,
            (Action::Cooperate, Action::Defect) => 1,
            (Action::Defect, Action::Cooperate) => 2,
            (Action::Defect, Action::Defect) => 3,
        }
    }
}

/// Conditional cooperation probabilities indexed by previous-round outcome
/// in the fixed (CC, CD, DC, DD) order.
///
/// Every entry is validated into [0, 1] at construction; a vector never
/// changes after it is built.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct FourVector {
    probs: [f64; 4],
}

impl FourVector {
    /// Build from the four probabilities in (CC, CD, DC, DD) order.
    ///
    /// 0 and 1 are legal entries (deterministic behavior). Anything outside
    /// [0, 1], including NaN, fails with the offending value.
    pub fn new(cc: f64, cd: f64, dc: f64, dd: f64) -> Result<Self, StrategyError> {
        let probs = [cc, cd, dc, dd];
        for &p in &probs {
            if !(0.0..=1.0).contains(&p) {
                return Err(StrategyError::ProbabilityOutOfRange(p));
            }
        }
        Ok(Self { probs })
    }

    /// Cooperation probability after the given outcome.
    pub fn probability(&self, outcome: Outcome) -> f64 {
        self.probs[outcome.index()]
    }

    /// True iff at least one entry lies strictly between 0 and 1.
    ///
    /// An all-{0, 1} vector is deterministic. This is derived on demand,
    /// not stored.
    pub fn is_stochastic(&self) -> bool {
        self.probs.iter().any(|&p| p > 0.0 && p < 1.0)
    }
}

impl TryFrom<[f64; 4]> for FourVector {
    type Error = StrategyError;

    fn try_from(probs: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(probs[0], probs[1], probs[2], probs[3])
    }
}

impl From<FourVector> for [f64; 4] {
    fn from(vector: FourVector) -> Self {
        vector.probs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CC: Outcome = Outcome {
        own: Action::Cooperate,
        opponent: Action::Cooperate,
    };
    const CD: Outcome = Outcome {
        own: Action::Cooperate,
        opponent: Action::Defect,
    };
    const DC: Outcome = Outcome {
        own: Action::Defect,
        opponent: Action::Cooperate,
    };
    const DD: Outcome = Outcome {
        own: Action::Defect,
        opponent: Action::Defect,
    };

    #[test]
    fn test_lookup_follows_outcome_order() {
        let v = FourVector::new(0.1, 0.2, 0.3, 0.4).unwrap();

        assert_eq!(v.probability(CC), 0.1);
        assert_eq!(v.probability(CD), 0.2);
        assert_eq!(v.probability(DC), 0.3);
        assert_eq!(v.probability(DD), 0.4);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(FourVector::new(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(FourVector::new(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_entries() {
        assert_eq!(
            FourVector::new(0.1, 2.0, 0.5, 0.1),
            Err(StrategyError::ProbabilityOutOfRange(2.0)),
        );
        assert_eq!(
            FourVector::new(-0.01, 0.5, 0.5, 0.5),
            Err(StrategyError::ProbabilityOutOfRange(-0.01)),
        );
    }

    #[test]
    fn test_rejects_nan() {
        assert!(FourVector::new(0.5, f64::NAN, 0.5, 0.5).is_err());
    }

    #[test]
    fn test_stochastic_classification() {
        // All-{0,1} vectors are deterministic
        assert!(!FourVector::new(0.0, 0.0, 0.0, 0.0).unwrap().is_stochastic());
        assert!(!FourVector::new(1.0, 0.0, 1.0, 0.0).unwrap().is_stochastic());

        // Any fractional entry makes the vector stochastic
        assert!(FourVector::new(1.0, 0.5, 1.0, 0.5).unwrap().is_stochastic());
        assert!(FourVector::new(1.0, 1.0, 1.0, 0.999).unwrap().is_stochastic());
    }

    #[test]
    fn test_json_config_parses() {
        let v: FourVector = serde_json::from_str("[1.0, 0.0, 0.0, 1.0]").unwrap();
        assert_eq!(v, FourVector::new(1.0, 0.0, 0.0, 1.0).unwrap());
    }

    #[test]
    fn test_json_config_rejects_out_of_range() {
        // Deserialization runs through the validating constructor
        assert!(serde_json::from_str::<FourVector>("[0.1, 2.0, 0.5, 0.1]").is_err());
        assert!(serde_json::from_str::<FourVector>("[0.1, -0.5, 0.5, 0.1]").is_err());
    }

    proptest! {
        #[test]
        fn prop_valid_probabilities_always_construct(
            cc in 0.0..=1.0f64,
            cd in 0.0..=1.0f64,
            dc in 0.0..=1.0f64,
            dd in 0.0..=1.0f64,
        ) {
            let v = FourVector::new(cc, cd, dc, dd).unwrap();
            for outcome in [CC, CD, DC, DD] {
                prop_assert!((0.0..=1.0).contains(&v.probability(outcome)));
            }
        }

        #[test]
        fn prop_any_out_of_range_entry_fails(
            bad in prop_oneof![1.0001..100.0f64, -100.0..-0.0001f64],
            slot in 0usize..4,
        ) {
            let mut probs = [0.5f64; 4];
            probs[slot] = bad;
            prop_assert_eq!(
                FourVector::try_from(probs),
                Err(StrategyError::ProbabilityOutOfRange(bad))
            );
        }
    }
}
