use crate::catalog::cluster_target::ClusterTarget;
use serde::Deserialize;

#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
pub struct EndToEndTests {
    #[serde(default)]
    pub tests: Vec<String>,
    #[serde(default)]
    pub environments: Vec<ClusterTarget>,
}

impl EndToEndTests {
    /// The comma-joined test list applies only to targets the chart has
    /// explicitly listed; every other target gets an empty list.
    pub fn tests_for(&self, target: &ClusterTarget) -> String {
        if self.environments.iter().any(|environment| environment == target) {
            self.tests.join(",")
        } else {
            String::new()
        }
    }
}
