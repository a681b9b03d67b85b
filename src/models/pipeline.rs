use serde::Serialize;
use std::collections::BTreeMap;
use super::StageStatus;

/// Identity of the API proxy being deployed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyIdentity {
    pub name: String,
    pub version: String,
}

/// Per-environment deployment outcome, keyed by environment name
pub type EnvironmentResults = BTreeMap<String, StageStatus>;

/// Everything a single render needs. Nothing here is mutated by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentInput {
    pub proxy: ProxyIdentity,
    /// Display order of the environment rows
    pub deployed_environments: Vec<String>,
    pub auth: StageStatus,
    pub lint: StageStatus,
    pub upload: StageStatus,
    pub deploy_results: EnvironmentResults,
    pub timestamp: String,
}

impl DeploymentInput {
    /// Status of one environment; names missing from the results are pending.
    pub fn environment_status(&self, name: &str) -> StageStatus {
        self.deploy_results.get(name).copied().unwrap_or_default()
    }
}

/// Values derived from a `DeploymentInput` on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineOutcome {
    pub all_envs_succeeded: bool,
    pub environments_stage_status: StageStatus,
    pub overall_success: bool,
}

impl PipelineOutcome {
    pub fn derive(input: &DeploymentInput) -> Self {
        // Only the results mapping counts; an empty mapping is vacuously all-success.
        let all_envs_succeeded = input.deploy_results.values().all(StageStatus::is_success);

        // The environments stage is never shown as failed, only success or pending.
        let environments_stage_status = if all_envs_succeeded {
            StageStatus::Success
        } else {
            StageStatus::Pending
        };

        let overall_success = input.auth.is_success()
            && input.lint.is_success()
            && input.upload.is_success()
            && all_envs_succeeded;

        PipelineOutcome {
            all_envs_succeeded,
            environments_stage_status,
            overall_success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(
        auth: StageStatus,
        lint: StageStatus,
        upload: StageStatus,
        envs: &[(&str, StageStatus)],
    ) -> DeploymentInput {
        DeploymentInput {
            proxy: ProxyIdentity { name: "orders-api".to_string(), version: "7".to_string() },
            deployed_environments: envs.iter().map(|(name, _)| name.to_string()).collect(),
            auth,
            lint,
            upload,
            deploy_results: envs.iter().map(|(name, status)| (name.to_string(), *status)).collect(),
            timestamp: "2026-01-10 09:00:00".to_string(),
        }
    }

    use StageStatus::{Failed, Pending, Success};

    #[test]
    fn test_all_success() {
        let input = input_with(Success, Success, Success, &[("dev", Success), ("test", Success), ("uat", Success)]);
        let outcome = PipelineOutcome::derive(&input);
        assert!(outcome.all_envs_succeeded);
        assert_eq!(outcome.environments_stage_status, Success);
        assert!(outcome.overall_success);
    }

    #[test]
    fn test_one_pending_environment() {
        let input = input_with(Success, Success, Success, &[("dev", Success), ("test", Success), ("uat", Pending)]);
        let outcome = PipelineOutcome::derive(&input);
        assert!(!outcome.all_envs_succeeded);
        assert_eq!(outcome.environments_stage_status, Pending);
        assert!(!outcome.overall_success);
    }

    #[test]
    fn test_failed_environment_collapses_to_pending() {
        let input = input_with(Success, Success, Success, &[("dev", Failed), ("test", Success)]);
        let outcome = PipelineOutcome::derive(&input);
        assert!(!outcome.all_envs_succeeded);
        assert_eq!(outcome.environments_stage_status, Pending);
    }

    #[test]
    fn test_failed_stage_blocks_overall_success() {
        let envs = [("dev", Success)];
        assert!(!PipelineOutcome::derive(&input_with(Failed, Success, Success, &envs)).overall_success);
        assert!(!PipelineOutcome::derive(&input_with(Success, Pending, Success, &envs)).overall_success);
        assert!(!PipelineOutcome::derive(&input_with(Success, Success, Failed, &envs)).overall_success);
    }

    #[test]
    fn test_empty_results_count_as_all_succeeded() {
        let input = input_with(Success, Success, Success, &[]);
        let outcome = PipelineOutcome::derive(&input);
        assert!(outcome.all_envs_succeeded);
        assert!(outcome.overall_success);
    }

    #[test]
    fn test_missing_environment_is_pending() {
        let mut input = input_with(Success, Success, Success, &[("dev", Success)]);
        input.deployed_environments.push("prod".to_string());
        assert_eq!(input.environment_status("prod"), Pending);
        // Display-only names do not affect the aggregate
        assert!(PipelineOutcome::derive(&input).all_envs_succeeded);
    }
}
