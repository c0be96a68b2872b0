use crate::manifest::chart_manifest::ChartManifest;
use anyhow::{Context, Result};
use tokio;

pub struct ManifestManager<'a> {
    manifest_file_name: &'a String,
    manifest: Option<ChartManifest>,
    serialized: Option<String>,
}

impl<'a> ManifestManager<'a> {
    pub fn new(manifest_file_name: &'a String) -> Self {
        Self {
            manifest_file_name,
            manifest: None,
            serialized: None,
        }
    }

    pub async fn load_manifest_from_file(&mut self) -> Result<()> {
        let content = tokio::fs::read_to_string(self.manifest_file_name)
            .await
            .with_context(|| {
                format!("Failed to read chart manifest: {}", self.manifest_file_name)
            })?;

        // The downstream trigger receives a normalized copy of the whole
        // manifest, so it is kept alongside the typed view.
        let raw: serde_yaml::Value = serde_yaml::from_str(&content).with_context(|| {
            format!(
                "Failed to deserialize chart manifest: {}",
                self.manifest_file_name
            )
        })?;

        self.serialized = Some(serde_yaml::to_string(&raw).with_context(|| {
            format!(
                "Failed to serialize chart manifest: {}",
                self.manifest_file_name
            )
        })?);

        self.manifest = Some(serde_yaml::from_str(&content).with_context(|| {
            format!(
                "Failed to deserialize chart manifest: {}",
                self.manifest_file_name
            )
        })?);

        Ok(())
    }

    pub fn manifest(&self) -> Result<&ChartManifest> {
        self.manifest.as_ref().context("No chart manifest loaded")
    }

    pub fn serialized_manifest(&self) -> Result<&String> {
        self.serialized.as_ref().context("No chart manifest loaded")
    }
}
