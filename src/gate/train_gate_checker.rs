/// This module queries the chart-dashboard train-enabled endpoint.
///
/// The endpoint answers with a bare status code: 200 when the train is
/// enabled, 204 when an operator has disabled it for this chart, and 409
/// with a plaintext body when the chart name is already registered by
/// another repository.
use crate::gate::gate_decision::GateDecision;
use anyhow::Result;
use colored::Colorize;
use reqwest::StatusCode;
use std::time::Duration;

const RETRY_ATTEMPTS: u32 = 10;
const RETRY_DELAY: Duration = Duration::from_secs(30);

pub struct TrainGateChecker {
    client: reqwest::Client,
    base_url: String,
}

impl TrainGateChecker {
    pub fn new(hostname: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{hostname}"),
        }
    }

    /// Checks the train-enabled endpoint
    /// GET /train-enabled?chart=<chart>&repo=<repo>
    /// Retries transient failures; after RETRY_ATTEMPTS failed attempts the
    /// train is treated as disabled, never as silently enabled.
    pub async fn check_enabled(&self, chart: &str, repo_name: &str) -> Result<GateDecision> {
        let url = format!("{}/train-enabled", self.base_url);

        for _ in 0..RETRY_ATTEMPTS {
            let response = self
                .client
                .get(&url)
                .query(&[("chart", chart), ("repo", repo_name)])
                .send()
                .await;

            match response {
                Ok(response) => {
                    eprintln!("{}", response.url().as_str());
                    match response.status() {
                        StatusCode::OK => return Ok(GateDecision::Enabled),
                        StatusCode::NO_CONTENT => return Ok(GateDecision::DisabledByOperator),
                        StatusCode::CONFLICT => {
                            let message = response.text().await.unwrap_or_default();
                            return Ok(GateDecision::DisabledByConflict(message));
                        }
                        status => {
                            eprintln!(
                                "{}",
                                format!("Unexpected status {status} from chart-dashboard").yellow()
                            );
                        }
                    }
                }
                Err(error) => eprintln!("{}", error.to_string().yellow()),
            }

            eprintln!(
                "{}",
                format!(
                    "Failed to contact chart-dashboard, will retry again in {}s",
                    RETRY_DELAY.as_secs()
                )
                .yellow()
            );
            tokio::time::sleep(RETRY_DELAY).await;
        }

        // Failed to contact the chart-dashboard
        Ok(GateDecision::DisabledByOperator)
    }
}
