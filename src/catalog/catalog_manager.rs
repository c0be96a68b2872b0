use crate::catalog::cluster_target::ClusterGroup;
use anyhow::{Context, Result};
use tokio;

pub struct CatalogManager<'a> {
    catalog_file_name: &'a String,
    cluster_groups: Option<Vec<ClusterGroup>>,
}

impl<'a> CatalogManager<'a> {
    pub fn new(catalog_file_name: &'a String) -> Self {
        Self {
            catalog_file_name,
            cluster_groups: None,
        }
    }

    pub async fn load_catalog_from_file(&mut self) -> Result<()> {
        let content = tokio::fs::read_to_string(self.catalog_file_name)
            .await
            .with_context(|| {
                format!("Failed to read catalog file: {}", self.catalog_file_name)
            })?;

        self.cluster_groups = Some(serde_yaml::from_str(&content).with_context(|| {
            format!(
                "Failed to deserialize catalog file: {}",
                self.catalog_file_name
            )
        })?);

        Ok(())
    }

    pub fn into_cluster_groups(self) -> Result<Vec<ClusterGroup>> {
        self.cluster_groups.context("No catalog loaded")
    }
}
