//! Zero-determinant and linear-relation derivations
//!
//! A linear-relation strategy pins s * (S_xy - l) = S_yx - l between the
//! two players' stationary payoffs. Solving that relation yields the four
//! conditional cooperation probabilities in closed form; the named
//! variants below differ only in which (phi, s, l) they fix.

use log::debug;

use crate::error::StrategyError;
use crate::game::Payoffs;
use crate::vector::FourVector;

/// How a linear-relation strategy picks its payoff target `l` once the
/// game payoffs are known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Baseline {
    /// Pin the target to the reward payoff R (generous variants).
    Reward,
    /// Pin the target to the punishment payoff P (extortionate variants).
    Punishment,
    /// An explicit target value.
    Fixed(f64),
}

impl Baseline {
    pub fn resolve(self, payoffs: &Payoffs) -> f64 {
        match self {
            Baseline::Reward => payoffs.reward,
            Baseline::Punishment => payoffs.punishment,
            Baseline::Fixed(l) => l,
        }
    }
}

/// Parameterization of a named zero-determinant variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZdParams {
    /// Compliance factor phi
    pub phi: f64,
    /// Slope of the enforced payoff relation
    pub s: f64,
    /// Payoff target rule
    pub baseline: Baseline,
}

impl ZdParams {
    /// Derive the variant's four-vector for the given payoffs.
    pub fn derive(&self, payoffs: &Payoffs) -> Result<FourVector, StrategyError> {
        linear_relation(payoffs, self.phi, self.s, self.baseline.resolve(payoffs))
    }
}

/// Canonical parameterizations of the named zero-determinant strategies.
pub mod variant {
    use super::{Baseline, ZdParams};

    /// Extortion factor 2 over the punishment baseline.
    pub const ZD_EXTORT2: ZdParams = ZdParams {
        phi: 1.0 / 9.0,
        s: 0.5,
        baseline: Baseline::Punishment,
    };

    /// Extortion factor 2 over an explicit unit baseline.
    pub const ZD_EXTORT2_V2: ZdParams = ZdParams {
        phi: 1.0 / 8.0,
        s: 0.5,
        baseline: Baseline::Fixed(1.0),
    };

    /// Extortion factor 4.
    pub const ZD_EXTORT4: ZdParams = ZdParams {
        phi: 4.0 / 17.0,
        s: 0.25,
        baseline: Baseline::Fixed(1.0),
    };

    /// Generous variant over an explicit baseline of 3.
    pub const ZD_GEN2: ZdParams = ZdParams {
        phi: 1.0 / 8.0,
        s: 0.5,
        baseline: Baseline::Fixed(3.0),
    };

    /// Generous tit-for-tat variant over the reward baseline.
    pub const ZD_GTFT2: ZdParams = ZdParams {
        phi: 0.25,
        s: 0.5,
        baseline: Baseline::Reward,
    };

    /// Sets the opponent's payoff to a fixed target of 2 (slope 0).
    pub const ZD_SET2: ZdParams = ZdParams {
        phi: 0.25,
        s: 0.0,
        baseline: Baseline::Fixed(2.0),
    };
}

/// Derive the four-vector enforcing s * (S_xy - l) = S_yx - l.
///
/// Feasibility requires a finite `l` with P <= l <= R and a slope `s` in
/// [s_min, 1], where s_min = -min((T-l)/(l-S), (l-S)/(T-l)). Parameters
/// inside those bounds can still push an entry out of [0, 1] (a
/// too-aggressive `phi`, say); that surfaces as the usual probability
/// validation error, never as clamping.
pub fn linear_relation(
    payoffs: &Payoffs,
    phi: f64,
    s: f64,
    l: f64,
) -> Result<FourVector, StrategyError> {
    let (r, p, su, t) = payoffs.rpst();

    for (name, value) in [("phi", phi), ("s", s), ("l", l)] {
        if !value.is_finite() {
            return Err(StrategyError::NonFiniteAttribute { name, value });
        }
    }

    if l < p || l > r {
        return Err(StrategyError::InfeasibleRelation { phi, s, l });
    }
    let s_min = -f64::min((t - l) / (l - su), (l - su) / (t - l));
    if s > 1.0 || s < s_min {
        return Err(StrategyError::InfeasibleRelation { phi, s, l });
    }

    let p_cc = 1.0 - phi * (1.0 - s) * (r - l);
    let p_cd = 1.0 - phi * (s * (l - su) + (t - l));
    let p_dc = phi * ((l - su) + s * (t - l));
    let p_dd = phi * (1.0 - s) * (l - p);

    debug!("linear relation phi={phi} s={s} l={l} -> ({p_cc}, {p_cd}, {p_dc}, {p_dd})");
    FourVector::new(p_cc, p_cd, p_dc, p_dd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Action, Outcome};

    fn entries(v: &FourVector) -> [f64; 4] {
        [
            v.probability(Outcome::new(Action::Cooperate, Action::Cooperate)),
            v.probability(Outcome::new(Action::Cooperate, Action::Defect)),
            v.probability(Outcome::new(Action::Defect, Action::Cooperate)),
            v.probability(Outcome::new(Action::Defect, Action::Defect)),
        ]
    }

    fn assert_vector(params: ZdParams, expected: [f64; 4]) {
        let v = params.derive(&Payoffs::default()).unwrap();
        for (got, want) in entries(&v).iter().zip(expected.iter()) {
            assert!(
                (got - want).abs() < 1e-12,
                "expected {:?}, got {:?}",
                expected,
                entries(&v),
            );
        }
    }

    #[test]
    fn test_zd_extort2_vector() {
        assert_vector(variant::ZD_EXTORT2, [8.0 / 9.0, 0.5, 1.0 / 3.0, 0.0]);
    }

    #[test]
    fn test_zd_extort2_v2_vector() {
        assert_vector(variant::ZD_EXTORT2_V2, [7.0 / 8.0, 7.0 / 16.0, 3.0 / 8.0, 0.0]);
    }

    #[test]
    fn test_zd_extort4_vector() {
        assert_vector(variant::ZD_EXTORT4, [11.0 / 17.0, 0.0, 8.0 / 17.0, 0.0]);
    }

    #[test]
    fn test_zd_gen2_vector() {
        assert_vector(variant::ZD_GEN2, [1.0, 9.0 / 16.0, 0.5, 1.0 / 8.0]);
    }

    #[test]
    fn test_zd_gtft2_vector() {
        assert_vector(variant::ZD_GTFT2, [1.0, 1.0 / 8.0, 1.0, 0.25]);
    }

    #[test]
    fn test_zd_set2_vector() {
        assert_vector(variant::ZD_SET2, [0.75, 0.25, 0.5, 0.25]);
    }

    #[test]
    fn test_extortionate_variants_never_forgive_mutual_defection() {
        // l = P pins the punishment payoff, so p4 = phi (1 - s)(l - P) = 0
        for params in [variant::ZD_EXTORT2, variant::ZD_EXTORT2_V2, variant::ZD_EXTORT4] {
            let v = params.derive(&Payoffs::default()).unwrap();
            assert_eq!(entries(&v)[3], 0.0, "{:?}", params);
        }
    }

    #[test]
    fn test_rejects_non_finite_target() {
        let err = linear_relation(&Payoffs::default(), 0.0, 0.0, f64::NEG_INFINITY);
        assert_eq!(
            err,
            Err(StrategyError::NonFiniteAttribute {
                name: "l",
                value: f64::NEG_INFINITY,
            }),
        );

        assert!(linear_relation(&Payoffs::default(), f64::NAN, 0.0, 2.0).is_err());
    }

    #[test]
    fn test_rejects_target_outside_payoff_band() {
        let payoffs = Payoffs::default();

        // l must stay within [P, R]
        assert_eq!(
            linear_relation(&payoffs, 0.1, 0.5, 0.0),
            Err(StrategyError::InfeasibleRelation { phi: 0.1, s: 0.5, l: 0.0 }),
        );
        assert_eq!(
            linear_relation(&payoffs, 0.1, 0.5, 4.0),
            Err(StrategyError::InfeasibleRelation { phi: 0.1, s: 0.5, l: 4.0 }),
        );
    }

    #[test]
    fn test_rejects_slope_outside_bounds() {
        let payoffs = Payoffs::default();

        assert!(matches!(
            linear_relation(&payoffs, 0.1, 1.5, 2.0),
            Err(StrategyError::InfeasibleRelation { .. }),
        ));

        // s_min = -min((T-l)/(l-S), (l-S)/(T-l)) = -2/3 at l = 2
        assert!(linear_relation(&payoffs, 0.1, -0.5, 2.0).is_ok());
        assert!(matches!(
            linear_relation(&payoffs, 0.1, -1.0, 2.0),
            Err(StrategyError::InfeasibleRelation { .. }),
        ));
    }

    #[test]
    fn test_overaggressive_phi_is_a_validation_error() {
        // Feasible (phi, s, l) by the bounds above, but the derived
        // cooperation probability after (C, D) lands at 1 - 4.5 = -3.5
        let err = linear_relation(&Payoffs::default(), 1.0, 0.5, 1.0);
        assert_eq!(err, Err(StrategyError::ProbabilityOutOfRange(-3.5)));
    }

    #[test]
    fn test_derivation_is_reproducible() {
        let payoffs = Payoffs::default();
        let a = linear_relation(&payoffs, 0.2, 0.5, 2.0).unwrap();
        let b = linear_relation(&payoffs, 0.2, 0.5, 2.0).unwrap();
        assert_eq!(entries(&a), entries(&b));
    }
}
