//! Release-train gate module
//!
//! This module queries the chart-dashboard control service to decide
//! whether the release train is enabled for a chart.

pub(crate) mod gate_decision;
pub(crate) mod train_gate_checker;
