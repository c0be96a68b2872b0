use crate::manifest::deployment::DeploymentConfig;
use crate::manifest::end_to_end_tests::EndToEndTests;
use serde::Deserialize;

#[derive(Deserialize, PartialEq, Debug)]
pub struct ChartManifest {
    pub deployment: DeploymentConfig,
    #[serde(default)]
    pub end_to_end_tests: EndToEndTests,
}
