//! Evaluation outcomes: approvals and gate rejections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an investment was turned down, with the figures that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Net gain after tax is zero or negative.
    NegativeGrowth { net_gain: f64 },
    /// Net gain does not cover the interest owed on the bank loan.
    BankLoanTooRisky { net_gain: f64, bank_payment: f64 },
    /// Simulated success probability is below the approval threshold.
    RiskTooHigh { risk_probability: f64, threshold: f64 },
}

impl RejectionReason {
    /// Risk probability, only known once the risk gate has run.
    pub fn risk_probability(&self) -> Option<f64> {
        match self {
            Self::RiskTooHigh {
                risk_probability, ..
            } => Some(*risk_probability),
            _ => None,
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeGrowth { .. } => write!(f, "Business rejected: negative growth"),
            Self::BankLoanTooRisky { .. } => write!(f, "Bank loan too risky"),
            Self::RiskTooHigh {
                risk_probability,
                threshold,
            } => write!(
                f,
                "Risk too high: {:.1}% success probability (needs >= {:.0}%)",
                risk_probability * 100.0,
                threshold * 100.0
            ),
        }
    }
}

/// Derived metrics of an approved investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    /// Investor's share of net gain.
    pub investor_return: f64,
    /// Investor return divided by the expected multiple.
    pub max_safe_investment: f64,
    /// Remaining net gain plus recovered principal.
    pub owner_return: f64,
    /// Simulated success probability (0.0 to 1.0).
    pub risk_probability: f64,
}

/// Result of a single evaluation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationResult {
    Approved(Approval),
    Rejected { reason: RejectionReason },
}

impl EvaluationResult {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved(_))
    }

    pub fn approval(&self) -> Option<&Approval> {
        match self {
            Self::Approved(approval) => Some(approval),
            Self::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            Self::Approved(_) => None,
            Self::Rejected { reason } => Some(reason),
        }
    }

    /// Risk probability, if the simulation ran for this request.
    pub fn risk_probability(&self) -> Option<f64> {
        match self {
            Self::Approved(approval) => Some(approval.risk_probability),
            Self::Rejected { reason } => reason.risk_probability(),
        }
    }
}

impl From<Approval> for EvaluationResult {
    fn from(approval: Approval) -> Self {
        Self::Approved(approval)
    }
}

impl From<RejectionReason> for EvaluationResult {
    fn from(reason: RejectionReason) -> Self {
        Self::Rejected { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let negative = RejectionReason::NegativeGrowth { net_gain: -10.0 };
        assert_eq!(negative.to_string(), "Business rejected: negative growth");

        let bank = RejectionReason::BankLoanTooRisky {
            net_gain: 100.0,
            bank_payment: 200.0,
        };
        assert_eq!(bank.to_string(), "Bank loan too risky");

        let risk = RejectionReason::RiskTooHigh {
            risk_probability: 0.623,
            threshold: 0.85,
        };
        assert_eq!(
            risk.to_string(),
            "Risk too high: 62.3% success probability (needs >= 85%)"
        );
    }

    #[test]
    fn test_risk_probability_only_on_risk_gate() {
        let result: EvaluationResult = RejectionReason::NegativeGrowth { net_gain: -1.0 }.into();
        assert_eq!(result.risk_probability(), None);
        assert!(!result.is_approved());

        let result: EvaluationResult = RejectionReason::RiskTooHigh {
            risk_probability: 0.5,
            threshold: 0.85,
        }
        .into();
        assert_eq!(result.risk_probability(), Some(0.5));

        let result: EvaluationResult = Approval {
            investor_return: 3.0,
            max_safe_investment: 2.0,
            owner_return: 10.0,
            risk_probability: 0.97,
        }
        .into();
        assert!(result.is_approved());
        assert_eq!(result.risk_probability(), Some(0.97));
        assert!(result.rejection().is_none());
    }

    #[test]
    fn test_result_serialization_is_tagged() {
        let result: EvaluationResult = RejectionReason::BankLoanTooRisky {
            net_gain: 5.0,
            bank_payment: 6.0,
        }
        .into();

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"]["reason"], "bank_loan_too_risky");
        assert_eq!(json["reason"]["bank_payment"], 6.0);
    }
}
