//! One row of the approved-investment history.

use invest_core::{Approval, EvaluationResult, InvestmentParameters};
use serde::{Deserialize, Serialize};

/// Column header of the history table, in order.
pub const HISTORY_COLUMNS: [&str; 13] = [
    "P0",
    "D",
    "E",
    "Tx",
    "Si",
    "t",
    "M",
    "BankLoan",
    "BankRate",
    "MaxInvestment",
    "InvestorReturn",
    "OwnerReturn",
    "RiskProbability",
];

/// Input parameters of an approved investment alongside its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "P0")]
    pub primary_revenue: f64,
    #[serde(rename = "D")]
    pub growth_rate: f64,
    #[serde(rename = "E")]
    pub expenses: f64,
    #[serde(rename = "Tx")]
    pub tax_rate: f64,
    #[serde(rename = "Si")]
    pub investor_share: f64,
    #[serde(rename = "t")]
    pub horizon: u32,
    #[serde(rename = "M")]
    pub expected_multiple: f64,
    #[serde(rename = "BankLoan")]
    pub bank_loan: f64,
    #[serde(rename = "BankRate")]
    pub bank_rate: f64,
    #[serde(rename = "MaxInvestment")]
    pub max_safe_investment: f64,
    #[serde(rename = "InvestorReturn")]
    pub investor_return: f64,
    #[serde(rename = "OwnerReturn")]
    pub owner_return: f64,
    #[serde(rename = "RiskProbability")]
    pub risk_probability: f64,
}

impl HistoryRecord {
    pub fn new(params: &InvestmentParameters, approval: &Approval) -> Self {
        Self {
            primary_revenue: params.primary_revenue(),
            growth_rate: params.growth_rate(),
            expenses: params.expenses(),
            tax_rate: params.tax_rate(),
            investor_share: params.investor_share(),
            horizon: params.horizon(),
            expected_multiple: params.expected_multiple(),
            bank_loan: params.bank_loan(),
            bank_rate: params.bank_rate(),
            max_safe_investment: approval.max_safe_investment,
            investor_return: approval.investor_return,
            owner_return: approval.owner_return,
            risk_probability: approval.risk_probability,
        }
    }

    /// Build a record for approved results; rejections are never stored.
    pub fn from_result(params: &InvestmentParameters, result: &EvaluationResult) -> Option<Self> {
        result.approval().map(|approval| Self::new(params, approval))
    }
}
