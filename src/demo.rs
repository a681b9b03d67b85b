// Preview data set for `pipeview demo` and tests

use crate::models::{DeploymentInput, ProxyIdentity, StageStatus};

pub const SAMPLE_TIMESTAMP: &str = "2026-01-10 09:00:00";

/// A pipeline that finished every stage except the uat deployment
pub fn sample_input() -> DeploymentInput {
    let environments = ["dev", "test", "uat"];
    let results = [StageStatus::Success, StageStatus::Success, StageStatus::Pending];

    DeploymentInput {
        proxy: ProxyIdentity {
            name: "WeatherForecastAPI".to_string(),
            version: "12".to_string(),
        },
        deployed_environments: environments.iter().map(|e| e.to_string()).collect(),
        auth: StageStatus::Success,
        lint: StageStatus::Success,
        upload: StageStatus::Success,
        deploy_results: environments.iter()
            .zip(results)
            .map(|(env, status)| (env.to_string(), status))
            .collect(),
        timestamp: SAMPLE_TIMESTAMP.to_string(),
    }
}
