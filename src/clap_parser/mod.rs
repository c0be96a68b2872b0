use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, about = "Release train pipeline generator")]
pub struct Args {
    #[arg(long)]
    pub chart: String,

    #[arg(long)]
    pub repo_name: String,

    #[arg(long)]
    pub repo_sha1: String,

    #[arg(long, action = clap::ArgAction::Set)]
    pub prune: bool,

    #[arg(long)]
    pub version: Option<String>,

    #[arg(long)]
    pub no_external_tests: bool,

    #[arg(long)]
    pub no_email_notifications: bool,

    #[arg(long)]
    pub skip_deployment_to_production: bool,

    /// Skip the chart-dashboard call and treat the train as disabled
    #[arg(long)]
    pub release_train_disabled: bool,

    #[arg(
        long,
        default_value = "release-train-control.release-train.svc.cluster.local"
    )]
    pub chart_control_hostname: String,

    #[arg(long)]
    pub pull_requests: Option<String>,

    #[arg(long)]
    pub chart_repo: Option<String>,

    #[arg(long)]
    pub chart_version: Option<String>,

    #[arg(long, default_value = "clusters.yaml")]
    pub clusters_file: String,

    #[arg(long, default_value = "Chart.yaml")]
    pub chart_manifest: String,
}
