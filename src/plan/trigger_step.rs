use serde::Serialize;

/// One pipeline trigger. The build env and meta_data bags are passed
/// through verbatim to the downstream pipeline, never interpreted here.
#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct TriggerStep {
    pub name: String,
    pub trigger: String,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub build: BuildRequest,
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct BuildRequest {
    pub message: String,
    pub commit: String,
    pub branch: String,
    pub env: BuildEnv,
    pub meta_data: BuildMetaData,
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct BuildEnv {
    #[serde(rename = "CHART")]
    pub chart: String,
    #[serde(rename = "CLUSTER")]
    pub cluster: String,
    #[serde(rename = "ENVIRONMENT")]
    pub environment: String,
    #[serde(rename = "REPO_NAME")]
    pub repo_name: String,
    #[serde(rename = "REPO_SHA1")]
    pub repo_sha1: String,
    #[serde(rename = "DRY_RUN")]
    pub dry_run: String,
    #[serde(rename = "PRUNE")]
    pub prune: String,
    #[serde(rename = "BLOCK")]
    pub block: String,
    #[serde(rename = "VERSION")]
    pub version: String,
    #[serde(rename = "NO_EXTERNAL_TESTS")]
    pub no_external_tests: String,
    #[serde(rename = "NO_EMAIL_NOTIFICATIONS")]
    pub no_email_notifications: String,
    #[serde(rename = "TRIGGER_SALT_DEPLOY")]
    pub trigger_salt_deploy: String,
    #[serde(rename = "END_TO_END_TESTS")]
    pub end_to_end_tests: String,
    #[serde(rename = "CHART_REPO")]
    pub chart_repo: String,
    #[serde(rename = "CHART_VERSION")]
    pub chart_version: String,
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct BuildMetaData {
    pub chart: String,
    pub environment: String,
    pub cluster: String,
    #[serde(rename = "repository-owner")]
    pub repository_owner: String,
    #[serde(rename = "repository-name")]
    pub repository_name: String,
    #[serde(rename = "pull-request-ids")]
    pub pull_request_ids: String,
    #[serde(rename = "chart-yaml")]
    pub chart_yaml: String,
}
