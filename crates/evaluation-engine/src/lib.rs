//! Evaluation Engine
//!
//! Deterministic return projection and the ordered gate policy that decides
//! whether an investment proposal is approved.

pub mod evaluator;
pub mod gates;
pub mod projection;

pub use evaluator::{InvestmentEvaluator, PolicyTrace};
pub use gates::{Decision, Gate, GateContext, GatePipeline, GateVerdict, PipelineState};
pub use projection::Projection;
