use crate::catalog::cluster_target::ClusterGroup;
use crate::plan::step_builder::{ReleaseMode, StepBuilder};
use crate::plan::trigger_step::TriggerStep;
use serde::ser::{Serialize, SerializeMap, Serializer};

const PRODUCTION_ENVIRONMENT: &str = "production";

/// One entry of the emitted plan: a trigger step, a synchronization
/// barrier, or a manual confirmation gate.
#[derive(PartialEq, Clone, Debug)]
pub enum PlanEntry {
    Trigger(TriggerStep),
    Wait,
    Block(String),
}

impl Serialize for PlanEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PlanEntry::Trigger(step) => step.serialize(serializer),
            PlanEntry::Wait => serializer.serialize_str("wait"),
            PlanEntry::Block(message) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("block", message)?;
                map.end()
            }
        }
    }
}

pub struct PlanEmitter<'a> {
    step_builder: &'a StepBuilder,
}

impl<'a> PlanEmitter<'a> {
    pub fn new(step_builder: &'a StepBuilder) -> Self {
        Self { step_builder }
    }

    /// Hotfix steps are independent per-target: one flat list, no barriers.
    pub fn hotfix_plan(&self, cluster_groups: &[ClusterGroup]) -> Vec<PlanEntry> {
        cluster_groups
            .iter()
            .flatten()
            .map(|target| {
                PlanEntry::Trigger(self.step_builder.build_step(target, ReleaseMode::Hotfix))
            })
            .collect()
    }

    /// Waves in order, with a barrier between consecutive waves and none
    /// after the last one.
    pub fn train_plan(&self, cluster_groups: &[ClusterGroup]) -> Vec<PlanEntry> {
        let mut entries = Vec::new();

        for (index, group) in cluster_groups.iter().enumerate() {
            for target in group {
                entries.push(PlanEntry::Trigger(
                    self.step_builder.build_step(target, ReleaseMode::Normal),
                ));
            }
            if index + 1 < cluster_groups.len() {
                entries.push(PlanEntry::Wait);
            }
        }

        entries
    }

    pub fn block_gate(&self, message: &str) -> Vec<PlanEntry> {
        vec![PlanEntry::Block(message.to_string())]
    }
}

pub fn filter_production_clusters(cluster_groups: &[ClusterGroup]) -> Vec<ClusterGroup> {
    project_clusters(cluster_groups, |environment| {
        environment != PRODUCTION_ENVIRONMENT
    })
}

pub fn extract_production_clusters(cluster_groups: &[ClusterGroup]) -> Vec<ClusterGroup> {
    project_clusters(cluster_groups, |environment| {
        environment == PRODUCTION_ENVIRONMENT
    })
}

fn project_clusters(
    cluster_groups: &[ClusterGroup],
    keep: impl Fn(&str) -> bool,
) -> Vec<ClusterGroup> {
    cluster_groups
        .iter()
        .map(|group| {
            group
                .iter()
                .filter(|target| keep(&target.environment))
                .cloned()
                .collect::<ClusterGroup>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}
