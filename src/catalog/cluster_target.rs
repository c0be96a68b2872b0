use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Eq, PartialEq, Hash, Clone, Debug)]
pub struct ClusterTarget {
    pub cluster: String,
    pub environment: String,
}

/// One deployment wave. Targets in a group carry no ordering constraint
/// relative to each other; groups execute strictly in sequence.
pub type ClusterGroup = Vec<ClusterTarget>;

impl fmt::Display for ClusterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.cluster, self.environment)
    }
}
