//! Strategy resolver module
//!
//! This module computes the final ordered list of cluster groups to
//! deploy to, from the chart's declared strategy and the static catalog.

pub(crate) mod strategy_resolver;
