//! Cluster catalog module for the default release-train targets
//!
//! This module provides the (cluster, environment) target type and
//! functionality for loading the ordered cluster-group catalog.

pub(crate) mod catalog_manager;
pub(crate) mod cluster_target;
