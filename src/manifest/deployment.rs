use crate::catalog::cluster_target::{ClusterGroup, ClusterTarget};
use serde::Deserialize;

#[derive(Deserialize, PartialEq, Debug)]
pub struct DeploymentConfig {
    #[serde(flatten)]
    pub strategy: DeploymentStrategy,
    #[serde(default)]
    pub trigger_salt_deploy: bool,
}

/// An unrecognized strategy name is a deserialization error, never an
/// empty plan.
#[derive(Deserialize, PartialEq, Debug)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum DeploymentStrategy {
    Default {
        #[serde(default)]
        to_aggregation: bool,
        #[serde(default)]
        to_on_prem: bool,
        #[serde(default)]
        to_global: bool,
        #[serde(default)]
        to_oxford_testing: bool,
        #[serde(default)]
        exclude_clusters: Vec<String>,
        #[serde(default)]
        additional_clusters: Vec<ClusterTarget>,
    },
    Custom {
        custom_strategy: Vec<CustomStep>,
    },
}

#[derive(Deserialize, PartialEq, Debug)]
pub struct CustomStep {
    pub group: ClusterGroup,
}
