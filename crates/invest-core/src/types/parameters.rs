//! Investment input parameters and their validation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Raw, unvalidated parameters as supplied by a caller.
///
/// Rates are fractions (`0.04` means 4%). `Default` yields the standard
/// evaluation form values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInput {
    /// Base revenue (P0).
    pub primary_revenue: f64,
    /// Expected period-over-period growth (D), may be negative.
    pub growth_rate: f64,
    /// Expenses per period (E).
    pub expenses: f64,
    /// Tax rate (Tx).
    pub tax_rate: f64,
    /// Investor's share of net gain (Si).
    pub investor_share: f64,
    /// Number of periods in months (t).
    pub horizon: u32,
    /// Expected return multiple (M).
    pub expected_multiple: f64,
    /// Outstanding bank loan.
    pub bank_loan: f64,
    /// Bank interest rate per period.
    pub bank_rate: f64,
}

impl Default for ParameterInput {
    fn default() -> Self {
        Self {
            primary_revenue: 80_000.0,
            growth_rate: 0.04,
            expenses: 20_000.0,
            tax_rate: 0.15,
            investor_share: 0.30,
            horizon: 24,
            expected_multiple: 1.4,
            bank_loan: 300_000.0,
            bank_rate: 0.12,
        }
    }
}

impl ParameterInput {
    /// Validate and freeze into [`InvestmentParameters`].
    pub fn validate(self) -> Result<InvestmentParameters> {
        let finite = [
            ("primary_revenue", self.primary_revenue),
            ("growth_rate", self.growth_rate),
            ("expenses", self.expenses),
            ("tax_rate", self.tax_rate),
            ("investor_share", self.investor_share),
            ("expected_multiple", self.expected_multiple),
            ("bank_loan", self.bank_loan),
            ("bank_rate", self.bank_rate),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(Error::invalid(field, format!("must be a finite number, got {value}")));
            }
        }

        non_negative("primary_revenue", self.primary_revenue)?;
        non_negative("expenses", self.expenses)?;
        non_negative("bank_loan", self.bank_loan)?;
        unit_interval("tax_rate", self.tax_rate)?;
        unit_interval("investor_share", self.investor_share)?;

        if self.horizon == 0 {
            return Err(Error::invalid("horizon", "must be at least one period"));
        }
        // Also rules out the division by zero in max safe investment.
        if self.expected_multiple <= 0.0 {
            return Err(Error::invalid(
                "expected_multiple",
                format!("must be positive, got {}", self.expected_multiple),
            ));
        }

        Ok(InvestmentParameters { input: self })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(Error::invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn unit_interval(field: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid(
            field,
            format!("must be a fraction within [0, 1], got {value}"),
        ));
    }
    Ok(())
}

/// Validated, immutable investment parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InvestmentParameters {
    input: ParameterInput,
}

impl InvestmentParameters {
    pub fn primary_revenue(&self) -> f64 {
        self.input.primary_revenue
    }

    pub fn growth_rate(&self) -> f64 {
        self.input.growth_rate
    }

    pub fn expenses(&self) -> f64 {
        self.input.expenses
    }

    pub fn tax_rate(&self) -> f64 {
        self.input.tax_rate
    }

    pub fn investor_share(&self) -> f64 {
        self.input.investor_share
    }

    pub fn horizon(&self) -> u32 {
        self.input.horizon
    }

    pub fn expected_multiple(&self) -> f64 {
        self.input.expected_multiple
    }

    pub fn bank_loan(&self) -> f64 {
        self.input.bank_loan
    }

    pub fn bank_rate(&self) -> f64 {
        self.input.bank_rate
    }
}

impl TryFrom<ParameterInput> for InvestmentParameters {
    type Error = Error;

    fn try_from(input: ParameterInput) -> Result<Self> {
        input.validate()
    }
}

impl<'de> Deserialize<'de> for InvestmentParameters {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = ParameterInput::deserialize(deserializer)?;
        input.validate().map_err(serde::de::Error::custom)
    }
}
