//! Deterministic financial projection of an investment proposal.

use invest_core::finance::{net_gain, revenue_at_horizon};
use invest_core::{Error, InvestmentParameters, Result};
use serde::{Deserialize, Serialize};

/// Figures derived from the expected (unperturbed) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Revenue after compounding over the horizon (Rt).
    pub revenue_at_horizon: f64,
    /// Net gain after tax (NG).
    pub net_gain: f64,
    /// Investor's share of net gain (IR).
    pub investor_return: f64,
    /// Investor return divided by the expected multiple (Imax).
    pub max_safe_investment: f64,
    /// Owner's share of net gain plus recovered principal (OR).
    pub owner_return: f64,
    /// Interest owed on the bank loan over the horizon.
    pub bank_payment: f64,
}

impl Projection {
    /// Compute the projection, failing if any figure overflows to a non-finite value.
    pub fn compute(params: &InvestmentParameters) -> Result<Self> {
        let p0 = params.primary_revenue();
        let share = params.investor_share();
        let periods = f64::from(params.horizon());

        let revenue_at_horizon = revenue_at_horizon(p0, params.growth_rate(), params.horizon());
        let net_gain = net_gain(
            revenue_at_horizon,
            p0,
            params.expenses(),
            params.horizon(),
            params.tax_rate(),
        );
        let investor_return = share * net_gain;

        let projection = Self {
            revenue_at_horizon,
            net_gain,
            investor_return,
            max_safe_investment: investor_return / params.expected_multiple(),
            owner_return: (1.0 - share) * net_gain + p0 * periods,
            bank_payment: params.bank_loan() * params.bank_rate() * periods,
        };

        projection.ensure_finite()?;
        Ok(projection)
    }

    fn ensure_finite(&self) -> Result<()> {
        let figures = [
            ("revenue_at_horizon", self.revenue_at_horizon),
            ("net_gain", self.net_gain),
            ("investor_return", self.investor_return),
            ("max_safe_investment", self.max_safe_investment),
            ("owner_return", self.owner_return),
            ("bank_payment", self.bank_payment),
        ];

        match figures.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(Error::NonFiniteProjection { field, value }),
            None => Ok(()),
        }
    }
}
