//! Investment evaluator: projection plus the ordered approval policy.

use crate::gates::{Decision, Gate, GateContext, GatePipeline};
use crate::projection::Projection;
use invest_core::config::{PolicyConfig, SimulationConfig};
use invest_core::{Approval, EvaluationResult, InvestmentParameters, Result};
use risk_estimator::{MonteCarloRiskModel, RiskEstimate, RiskModel};
use serde::Serialize;
use tracing::{debug, info};

/// Full record of one evaluation, for callers that display or log details.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyTrace {
    pub projection: Projection,
    /// Gates passed before the decision, in order.
    pub gates_passed: Vec<Gate>,
    /// Gate that rejected the proposal, if any.
    pub rejected_at: Option<Gate>,
    /// Simulation tally, present only when the risk gate ran.
    pub risk: Option<RiskEstimate>,
    pub result: EvaluationResult,
}

/// Evaluates proposals against a risk model and approval policy.
///
/// Holds no per-request state, so one evaluator can serve any number of
/// independent requests.
#[derive(Debug, Clone)]
pub struct InvestmentEvaluator<M = MonteCarloRiskModel> {
    risk_model: M,
    policy: PolicyConfig,
}

impl InvestmentEvaluator<MonteCarloRiskModel> {
    /// Create an evaluator backed by the Monte Carlo risk model.
    pub fn monte_carlo(simulation: SimulationConfig, policy: PolicyConfig) -> Self {
        Self::with_model(MonteCarloRiskModel::new(simulation), policy)
    }
}

impl Default for InvestmentEvaluator<MonteCarloRiskModel> {
    fn default() -> Self {
        Self::monte_carlo(SimulationConfig::default(), PolicyConfig::default())
    }
}

impl<M: RiskModel> InvestmentEvaluator<M> {
    /// Create an evaluator with a custom risk model.
    pub fn with_model(risk_model: M, policy: PolicyConfig) -> Self {
        Self { risk_model, policy }
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    pub fn risk_model(&self) -> &M {
        &self.risk_model
    }

    /// Evaluate a proposal.
    ///
    /// Rejections are ordinary results. An error means the projection itself
    /// could not be computed.
    pub fn evaluate(&self, params: &InvestmentParameters) -> Result<EvaluationResult> {
        self.evaluate_traced(params).map(|trace| trace.result)
    }

    /// Evaluate a proposal and keep the intermediate figures.
    pub fn evaluate_traced(&self, params: &InvestmentParameters) -> Result<PolicyTrace> {
        let projection = Projection::compute(params)?;
        debug!(
            revenue_at_horizon = projection.revenue_at_horizon,
            net_gain = projection.net_gain,
            bank_payment = projection.bank_payment,
            "Computed projection"
        );

        let ctx = GateContext::new(
            params,
            &projection,
            &self.risk_model,
            self.policy.approval_threshold,
        );
        let mut pipeline = GatePipeline::new(ctx);
        let decision = pipeline.run();
        let gates_passed = pipeline.passed().to_vec();
        let risk = pipeline.risk();

        let (result, rejected_at) = match decision {
            Decision::Rejected { gate, reason } => {
                info!(gate = gate.name(), ?reason, "Investment rejected");
                (EvaluationResult::Rejected { reason }, Some(gate))
            }
            Decision::Approved { risk } => {
                let approval = Approval {
                    investor_return: projection.investor_return,
                    max_safe_investment: projection.max_safe_investment,
                    owner_return: projection.owner_return,
                    risk_probability: risk.probability(),
                };
                info!(
                    investor_return = approval.investor_return,
                    max_safe_investment = approval.max_safe_investment,
                    risk_probability = approval.risk_probability,
                    "Investment approved"
                );
                (EvaluationResult::Approved(approval), None)
            }
        };

        Ok(PolicyTrace {
            projection,
            gates_passed,
            rejected_at,
            risk,
            result,
        })
    }
}
