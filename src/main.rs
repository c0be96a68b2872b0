mod catalog;
mod clap_parser;
mod gate;
mod manifest;
mod plan;
mod resolver;
mod version;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use crate::catalog::catalog_manager::CatalogManager;
use crate::clap_parser::Args;
use crate::gate::gate_decision::GateDecision;
use crate::gate::train_gate_checker::TrainGateChecker;
use crate::manifest::manifest_manager::ManifestManager;
use crate::plan::plan_emitter::{
    extract_production_clusters, filter_production_clusters, PlanEmitter, PlanEntry,
};
use crate::plan::step_builder::{CommonBuildParams, StepBuilder};
use crate::resolver::strategy_resolver::StrategyResolver;
use crate::version::{
    COPYRIGHT, COPYRIGHT_YEARS, LICENSE, PRODUCT_NAME, VERSION_ALIAS, VERSION_MAJOR, VERSION_MINOR,
    VERSION_PATCH,
};

const CHART_DISABLED_MESSAGE: &str =
    "The release-train for this chart has been disabled via the chart-dashboard. Continue?";
const PRODUCTION_DISABLED_MESSAGE: &str =
    "The release-train for production environments has been disabled. Continue?";

#[tokio::main]
async fn main() {
    let args = Args::parse();
    print_header();
    if let Err(error) = run(args).await {
        eprintln!("{}", format!("Error: {error:#}").red());
        process::exit(1);
    }
}

fn print_header() {
    let header = format!(
        "{} version {}.{}.{} ({}), License: {}, Copyright © {}. {}.",
        PRODUCT_NAME,
        VERSION_MAJOR,
        VERSION_MINOR,
        VERSION_PATCH,
        VERSION_ALIAS,
        LICENSE,
        COPYRIGHT,
        COPYRIGHT_YEARS
    )
    .red();
    eprintln!("{}", header);
}

async fn run(args: Args) -> Result<()> {
    let mut catalog_manager = CatalogManager::new(&args.clusters_file);
    catalog_manager.load_catalog_from_file().await?;

    let mut manifest_manager = ManifestManager::new(&args.chart_manifest);
    manifest_manager.load_manifest_from_file().await?;
    let manifest = manifest_manager.manifest()?;

    let resolver = StrategyResolver::new(catalog_manager.into_cluster_groups()?);
    let cluster_groups = resolver.resolve(&manifest.deployment.strategy);

    let decision = if args.release_train_disabled {
        GateDecision::DisabledByOperator
    } else {
        let checker = TrainGateChecker::new(&args.chart_control_hostname);
        checker.check_enabled(&args.chart, &args.repo_name).await?
    };

    // A chart name collision is fatal: abort before any plan output
    if let GateDecision::DisabledByConflict(message) = &decision {
        return Err(anyhow::anyhow!(message.clone()));
    }

    let common = CommonBuildParams {
        chart: args.chart.clone(),
        repo_name: args.repo_name.clone(),
        repo_sha1: args.repo_sha1.clone(),
        prune: args.prune,
        version: args.version.clone().unwrap_or_default(),
        no_external_tests: args.no_external_tests,
        no_email_notifications: args.no_email_notifications,
        pull_requests: args.pull_requests.clone().unwrap_or_default(),
        trigger_salt_deploy: manifest.deployment.trigger_salt_deploy,
        chart_repo: args.chart_repo.clone().unwrap_or_default(),
        chart_version: args.chart_version.clone().unwrap_or_default(),
        chart_yaml: manifest_manager.serialized_manifest()?.clone(),
    };
    let step_builder = StepBuilder::new(common, manifest.end_to_end_tests.clone());
    let emitter = PlanEmitter::new(&step_builder);

    print_plan(&emitter.hotfix_plan(&cluster_groups))?;

    if decision == GateDecision::DisabledByOperator {
        print_plan(&emitter.block_gate(CHART_DISABLED_MESSAGE))?;
    }

    if args.skip_deployment_to_production {
        let non_production_cluster_groups = filter_production_clusters(&cluster_groups);
        let production_cluster_groups = extract_production_clusters(&cluster_groups);

        print_plan(&emitter.train_plan(&non_production_cluster_groups))?;
        print_plan(&emitter.block_gate(PRODUCTION_DISABLED_MESSAGE))?;
        print_plan(&emitter.train_plan(&production_cluster_groups))?;
    } else {
        print_plan(&emitter.train_plan(&cluster_groups))?;
    }

    Ok(())
}

fn print_plan(entries: &[PlanEntry]) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }
    let rendered =
        serde_yaml::to_string(entries).context("Failed to serialize plan entries")?;
    println!("{rendered}");
    Ok(())
}
