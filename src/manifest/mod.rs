//! Chart manifest module
//!
//! This module provides functionality for loading the chart manifest and
//! the deployment declaration it carries.

pub(crate) mod chart_manifest;
pub(crate) mod deployment;
pub(crate) mod end_to_end_tests;
pub(crate) mod manifest_manager;
