use crate::catalog::cluster_target::ClusterTarget;
use crate::manifest::end_to_end_tests::EndToEndTests;
use crate::plan::trigger_step::{BuildEnv, BuildMetaData, BuildRequest, TriggerStep};

const TRIGGER_PIPELINE: &str = "apply-kubernetes-charts";
const REPOSITORY_OWNER: &str = "platform";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseMode {
    /// Blocked, asynchronous, out-of-band step requiring a manual unblock
    Hotfix,
    /// Non-blocking step sequenced within its wave
    Normal,
}

#[derive(Debug, Clone, Default)]
pub struct CommonBuildParams {
    pub chart: String,
    pub repo_name: String,
    pub repo_sha1: String,
    pub prune: bool,
    pub version: String,
    pub no_external_tests: bool,
    pub no_email_notifications: bool,
    pub pull_requests: String,
    pub trigger_salt_deploy: bool,
    pub chart_repo: String,
    pub chart_version: String,
    pub chart_yaml: String,
}

pub struct StepBuilder {
    common: CommonBuildParams,
    end_to_end_tests: EndToEndTests,
}

impl StepBuilder {
    pub fn new(common: CommonBuildParams, end_to_end_tests: EndToEndTests) -> Self {
        Self {
            common,
            end_to_end_tests,
        }
    }

    pub fn build_step(&self, target: &ClusterTarget, mode: ReleaseMode) -> TriggerStep {
        let (name_prefix, block, is_async) = match mode {
            ReleaseMode::Hotfix => ("Blocked hotfix release to", true, true),
            ReleaseMode::Normal => ("Deploy to", false, false),
        };

        let combined_name = target.to_string();

        TriggerStep {
            name: format!("{name_prefix} {combined_name}"),
            trigger: TRIGGER_PIPELINE.to_string(),
            is_async,
            build: BuildRequest {
                message: format!("Deploy {} to {}", self.common.chart, combined_name),
                commit: "HEAD".to_string(),
                branch: format!("{}-{}", combined_name, self.common.chart),
                env: BuildEnv {
                    chart: self.common.chart.clone(),
                    cluster: target.cluster.clone(),
                    environment: target.environment.clone(),
                    repo_name: self.common.repo_name.clone(),
                    repo_sha1: self.common.repo_sha1.clone(),
                    dry_run: flag(false),
                    prune: flag(self.common.prune),
                    block: flag(block),
                    version: self.common.version.clone(),
                    no_external_tests: flag(self.common.no_external_tests),
                    no_email_notifications: flag(self.common.no_email_notifications),
                    trigger_salt_deploy: flag(self.common.trigger_salt_deploy),
                    end_to_end_tests: self.end_to_end_tests.tests_for(target),
                    chart_repo: self.common.chart_repo.clone(),
                    chart_version: self.common.chart_version.clone(),
                },
                meta_data: BuildMetaData {
                    chart: self.common.chart.clone(),
                    environment: target.environment.clone(),
                    cluster: target.cluster.clone(),
                    repository_owner: REPOSITORY_OWNER.to_string(),
                    repository_name: self.common.repo_name.clone(),
                    pull_request_ids: self.common.pull_requests.clone(),
                    chart_yaml: self.common.chart_yaml.clone(),
                },
            },
        }
    }
}

// The downstream build env expects Python-style boolean literals
fn flag(value: bool) -> String {
    if value {
        "True".to_string()
    } else {
        "False".to_string()
    }
}
