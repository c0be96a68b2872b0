//! Pipeline plan module
//!
//! This module builds the trigger steps for each resolved target and
//! serializes the plan entries consumed by the CI orchestrator.

pub(crate) mod plan_emitter;
pub(crate) mod step_builder;
pub(crate) mod trigger_step;
