//! Ordered approval gates.
//!
//! The pipeline is a small state machine: it starts `Pending`, checks one gate
//! per step in [`Gate::ORDER`], and stops at the first rejection. The risk
//! simulation only runs when the risk gate is reached.

use crate::projection::Projection;
use invest_core::{InvestmentParameters, RejectionReason};
use risk_estimator::{RiskEstimate, RiskModel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single rejection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    /// Net gain must be strictly positive.
    NegativeGrowth,
    /// Net gain must exceed the bank loan interest.
    BankLoan,
    /// Simulated success probability must reach the approval threshold.
    Risk,
}

impl Gate {
    /// Evaluation order. Cheap deterministic checks run before the simulation.
    pub const ORDER: [Gate; 3] = [Gate::NegativeGrowth, Gate::BankLoan, Gate::Risk];

    pub fn name(&self) -> &'static str {
        match self {
            Gate::NegativeGrowth => "negative_growth",
            Gate::BankLoan => "bank_loan",
            Gate::Risk => "risk",
        }
    }

    pub fn check(self, ctx: &mut GateContext<'_>) -> GateVerdict {
        let projection = ctx.projection;
        match self {
            Gate::NegativeGrowth => {
                if projection.net_gain <= 0.0 {
                    return GateVerdict::Reject(RejectionReason::NegativeGrowth {
                        net_gain: projection.net_gain,
                    });
                }
            }
            Gate::BankLoan => {
                if projection.net_gain <= projection.bank_payment {
                    return GateVerdict::Reject(RejectionReason::BankLoanTooRisky {
                        net_gain: projection.net_gain,
                        bank_payment: projection.bank_payment,
                    });
                }
            }
            Gate::Risk => {
                let probability = ctx.risk_estimate().probability();
                if probability < ctx.approval_threshold {
                    return GateVerdict::Reject(RejectionReason::RiskTooHigh {
                        risk_probability: probability,
                        threshold: ctx.approval_threshold,
                    });
                }
            }
        }
        GateVerdict::Pass
    }
}

/// Result of checking one gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateVerdict {
    Pass,
    Reject(RejectionReason),
}

/// Everything a gate may inspect for one evaluation.
pub struct GateContext<'a> {
    pub params: &'a InvestmentParameters,
    pub projection: &'a Projection,
    pub approval_threshold: f64,
    risk_model: &'a dyn RiskModel,
    risk: Option<RiskEstimate>,
}

impl<'a> GateContext<'a> {
    pub fn new(
        params: &'a InvestmentParameters,
        projection: &'a Projection,
        risk_model: &'a dyn RiskModel,
        approval_threshold: f64,
    ) -> Self {
        Self {
            params,
            projection,
            approval_threshold,
            risk_model,
            risk: None,
        }
    }

    /// Run the risk model on first use and reuse its estimate afterwards.
    pub fn risk_estimate(&mut self) -> RiskEstimate {
        let (model, params) = (self.risk_model, self.params);
        *self.risk.get_or_insert_with(|| model.estimate(params))
    }

    /// Estimate produced so far, if the risk model has run.
    pub fn risk(&self) -> Option<RiskEstimate> {
        self.risk
    }
}

/// Pipeline state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PipelineState {
    /// Waiting to check `Gate::ORDER[next]`.
    Pending { next: usize },
    RejectedAt { gate: Gate, reason: RejectionReason },
    Approved { risk: RiskEstimate },
}

/// Terminal outcome of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    Rejected { gate: Gate, reason: RejectionReason },
    Approved { risk: RiskEstimate },
}

/// Sequential, short-circuiting run over [`Gate::ORDER`].
pub struct GatePipeline<'a> {
    ctx: GateContext<'a>,
    state: PipelineState,
    passed: Vec<Gate>,
}

impl<'a> GatePipeline<'a> {
    pub fn new(ctx: GateContext<'a>) -> Self {
        Self {
            ctx,
            state: PipelineState::Pending { next: 0 },
            passed: Vec::with_capacity(Gate::ORDER.len()),
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Gates passed so far, in order.
    pub fn passed(&self) -> &[Gate] {
        &self.passed
    }

    pub fn risk(&self) -> Option<RiskEstimate> {
        self.ctx.risk()
    }

    /// Advance by one transition. Terminal states are left unchanged.
    pub fn step(&mut self) -> &PipelineState {
        let PipelineState::Pending { next } = self.state else {
            return &self.state;
        };

        self.state = match Gate::ORDER.get(next) {
            None => PipelineState::Approved {
                risk: self.ctx.risk_estimate(),
            },
            Some(&gate) => match gate.check(&mut self.ctx) {
                GateVerdict::Pass => {
                    debug!(gate = gate.name(), "Gate passed");
                    self.passed.push(gate);
                    PipelineState::Pending { next: next + 1 }
                }
                GateVerdict::Reject(reason) => PipelineState::RejectedAt { gate, reason },
            },
        };

        &self.state
    }

    /// Step until a terminal state is reached.
    pub fn run(&mut self) -> Decision {
        loop {
            match *self.step() {
                PipelineState::Pending { .. } => continue,
                PipelineState::RejectedAt { gate, reason } => {
                    return Decision::Rejected { gate, reason }
                }
                PipelineState::Approved { risk } => return Decision::Approved { risk },
            }
        }
    }
}
