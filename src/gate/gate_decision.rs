#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Enabled,
    /// The train was disabled for this chart via the chart-dashboard, or
    /// the dashboard could not be reached. Deployment is gated behind a
    /// manual confirmation, not suppressed.
    DisabledByOperator,
    /// The chart name is registered by another repository. Fatal.
    DisabledByConflict(String),
}
