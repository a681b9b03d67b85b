// Summary composition: turns a DeploymentInput into a SummaryView that the
// text, HTML and JSON writers all consume.

pub mod text;
pub mod html;

use serde::Serialize;
use crate::models::{DeploymentInput, PipelineOutcome, StageStatus};

pub use text::{format_summary_text, TextOptions};
pub use html::format_summary_html;

/// Default header title
pub const DEFAULT_TITLE: &str = "Apigee Deployment Pipeline";

pub const AUTH_DETAIL: &str = "GCP Workload Identity Authentication";
pub const LINT_DETAIL: &str = "Apigeelint Policy Validation";
pub const UPLOAD_FAILED_DETAIL: &str = "Failed to upload proxy bundle";

pub const TIMESTAMP_LABEL: &str = "Deployment Time";
pub const FOOTER_HEADING: &str = "Overall Status";
pub const FOOTER_SUCCESS_LABEL: &str = "Successfully Deployed";
pub const FOOTER_IN_PROGRESS_LABEL: &str = "Deployment In Progress";

/// Visual indicator for a stage status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusGlyph {
    Check,
    Cross,
    /// Neutral pulsing placeholder for anything not yet resolved
    Placeholder,
}

impl StatusGlyph {
    pub fn for_status(status: StageStatus) -> Self {
        match status {
            StageStatus::Success => StatusGlyph::Check,
            StageStatus::Failed => StatusGlyph::Cross,
            StageStatus::Pending => StatusGlyph::Placeholder,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StatusGlyph::Check => "✓",
            StatusGlyph::Cross => "✗",
            StatusGlyph::Placeholder => "○",
        }
    }
}

/// Color family of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTone {
    Affirmative,
    Negative,
    Neutral,
}

impl CardTone {
    pub fn for_status(status: StageStatus) -> Self {
        match status {
            StageStatus::Success => CardTone::Affirmative,
            StageStatus::Failed => CardTone::Negative,
            StageStatus::Pending => CardTone::Neutral,
        }
    }
}

/// The four pipeline stages, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Authentication,
    Linting,
    Upload,
    Environments,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Authentication, Stage::Linting, Stage::Upload, Stage::Environments];

    /// Stable identifier, matches the JSON form
    pub fn key(&self) -> &'static str {
        match self {
            Stage::Authentication => "authentication",
            Stage::Linting => "linting",
            Stage::Upload => "upload",
            Stage::Environments => "environments",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Authentication => "Authentication",
            Stage::Linting => "Linting Check",
            Stage::Upload => "Proxy Upload",
            Stage::Environments => "Environment Deployments",
        }
    }

    pub fn icon(&self) -> StageIcon {
        match self {
            Stage::Authentication => StageIcon::Key,
            Stage::Linting => StageIcon::Checklist,
            Stage::Upload => StageIcon::Upload,
            Stage::Environments => StageIcon::Globe,
        }
    }
}

/// Icon shown next to a card title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageIcon {
    Key,
    Checklist,
    Upload,
    Globe,
}

impl StageIcon {
    pub fn symbol(&self) -> &'static str {
        match self {
            StageIcon::Key => "⚷",
            StageIcon::Checklist => "≡",
            StageIcon::Upload => "⇪",
            StageIcon::Globe => "◎",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentRow {
    pub name: String,
    pub status: StageStatus,
    pub glyph: StatusGlyph,
}

/// Content rendered below a card's header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CardDetail {
    Text(String),
    Environments(Vec<EnvironmentRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepCardView {
    pub stage: Stage,
    pub icon: StageIcon,
    pub title: String,
    pub status: StageStatus,
    pub tone: CardTone,
    pub badge: StatusGlyph,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<CardDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub title: String,
    pub proxy_name: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterIndicator {
    Success,
    Spinner,
}

impl FooterIndicator {
    pub fn symbol(&self) -> &'static str {
        match self {
            FooterIndicator::Success => "✓",
            FooterIndicator::Spinner => "⟳",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub label: String,
    pub indicator: FooterIndicator,
}

/// Fully composed summary, ready for any writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub header: HeaderView,
    pub cards: Vec<StepCardView>,
    pub footer: FooterView,
    pub outcome: PipelineOutcome,
}

/// Build one stage card
pub fn step_card(stage: Stage, status: StageStatus, detail: Option<CardDetail>) -> StepCardView {
    StepCardView {
        stage,
        icon: stage.icon(),
        title: stage.title().to_string(),
        status,
        tone: CardTone::for_status(status),
        badge: StatusGlyph::for_status(status),
        detail,
    }
}

/// Detail line for the upload card
fn upload_detail(status: StageStatus, version: &str) -> String {
    if status.is_success() {
        format!("Successfully uploaded version {}", version)
    } else {
        UPLOAD_FAILED_DETAIL.to_string()
    }
}

fn environment_rows(input: &DeploymentInput) -> Vec<EnvironmentRow> {
    input.deployed_environments.iter()
        .map(|name| {
            let status = input.environment_status(name);
            EnvironmentRow {
                name: name.clone(),
                status,
                glyph: StatusGlyph::for_status(status),
            }
        })
        .collect()
}

fn footer(outcome: &PipelineOutcome) -> FooterView {
    // No aggregate-failure state: anything short of full success is in progress.
    if outcome.overall_success {
        FooterView {
            label: FOOTER_SUCCESS_LABEL.to_string(),
            indicator: FooterIndicator::Success,
        }
    } else {
        FooterView {
            label: FOOTER_IN_PROGRESS_LABEL.to_string(),
            indicator: FooterIndicator::Spinner,
        }
    }
}

/// Compose the deployment summary for one render
pub fn build_summary(input: &DeploymentInput, title: &str) -> SummaryView {
    let outcome = PipelineOutcome::derive(input);

    let cards = Stage::ALL.iter()
        .map(|&stage| match stage {
            Stage::Authentication => step_card(stage, input.auth, Some(CardDetail::Text(AUTH_DETAIL.to_string()))),
            Stage::Linting => step_card(stage, input.lint, Some(CardDetail::Text(LINT_DETAIL.to_string()))),
            Stage::Upload => step_card(
                stage,
                input.upload,
                Some(CardDetail::Text(upload_detail(input.upload, &input.proxy.version))),
            ),
            Stage::Environments => step_card(
                stage,
                outcome.environments_stage_status,
                Some(CardDetail::Environments(environment_rows(input))),
            ),
        })
        .collect();

    SummaryView {
        header: HeaderView {
            title: title.to_string(),
            proxy_name: input.proxy.name.clone(),
            version: input.proxy.version.clone(),
            timestamp: input.timestamp.clone(),
        },
        cards,
        footer: footer(&outcome),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_input;
    use StageStatus::{Failed, Pending, Success};

    fn card(view: &SummaryView, stage: Stage) -> &StepCardView {
        view.cards.iter().find(|c| c.stage == stage).unwrap()
    }

    #[test]
    fn test_status_glyph_mapping() {
        assert_eq!(StatusGlyph::for_status(Success), StatusGlyph::Check);
        assert_eq!(StatusGlyph::for_status(Failed), StatusGlyph::Cross);
        assert_eq!(StatusGlyph::for_status(Pending), StatusGlyph::Placeholder);
        assert_eq!(StatusGlyph::for_status(StageStatus::from_label("running")), StatusGlyph::Placeholder);
    }

    #[test]
    fn test_step_card_tone() {
        assert_eq!(step_card(Stage::Linting, Success, None).tone, CardTone::Affirmative);
        assert_eq!(step_card(Stage::Linting, Failed, None).tone, CardTone::Negative);
        assert_eq!(step_card(Stage::Linting, Pending, None).tone, CardTone::Neutral);
    }

    #[test]
    fn test_cards_in_fixed_order() {
        let view = build_summary(&sample_input(), DEFAULT_TITLE);
        let titles: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Authentication", "Linting Check", "Proxy Upload", "Environment Deployments"]);
    }

    #[test]
    fn test_sample_renders_in_progress() {
        let view = build_summary(&sample_input(), DEFAULT_TITLE);
        assert!(!view.outcome.all_envs_succeeded);
        assert!(!view.outcome.overall_success);
        assert_eq!(view.footer.label, FOOTER_IN_PROGRESS_LABEL);
        assert_eq!(view.footer.indicator, FooterIndicator::Spinner);
    }

    #[test]
    fn test_all_success_footer() {
        let mut input = sample_input();
        input.deploy_results.insert("uat".to_string(), Success);
        let view = build_summary(&input, DEFAULT_TITLE);
        assert_eq!(view.footer.label, FOOTER_SUCCESS_LABEL);
        assert_eq!(view.footer.indicator, FooterIndicator::Success);
    }

    #[test]
    fn test_failed_auth_is_still_in_progress() {
        let mut input = sample_input();
        input.auth = Failed;
        input.deploy_results.insert("uat".to_string(), Success);
        let view = build_summary(&input, DEFAULT_TITLE);
        assert_eq!(view.footer.label, FOOTER_IN_PROGRESS_LABEL);
        assert_eq!(card(&view, Stage::Authentication).tone, CardTone::Negative);
    }

    #[test]
    fn test_failed_environment_does_not_turn_card_red() {
        let mut input = sample_input();
        input.deploy_results.insert("test".to_string(), Failed);
        let view = build_summary(&input, DEFAULT_TITLE);
        let envs = card(&view, Stage::Environments);
        assert_eq!(envs.status, Pending);
        assert_eq!(envs.tone, CardTone::Neutral);
        match &envs.detail {
            Some(CardDetail::Environments(rows)) => {
                assert_eq!(rows[1].name, "test");
                assert_eq!(rows[1].glyph, StatusGlyph::Cross);
            }
            other => panic!("unexpected detail: {:?}", other),
        }
    }

    #[test]
    fn test_upload_detail_mentions_version_only_on_success() {
        let mut input = sample_input();
        input.proxy.version = "42".to_string();
        let view = build_summary(&input, DEFAULT_TITLE);
        assert_eq!(
            card(&view, Stage::Upload).detail,
            Some(CardDetail::Text("Successfully uploaded version 42".to_string()))
        );

        for status in [Failed, Pending] {
            input.upload = status;
            let view = build_summary(&input, DEFAULT_TITLE);
            assert_eq!(
                card(&view, Stage::Upload).detail,
                Some(CardDetail::Text("Failed to upload proxy bundle".to_string()))
            );
        }
    }

    #[test]
    fn test_auth_and_lint_details() {
        let mut input = sample_input();
        input.auth = Failed;
        input.lint = Pending;
        let view = build_summary(&input, DEFAULT_TITLE);
        // The descriptions name the tool, not the outcome, so they never change
        assert_eq!(
            card(&view, Stage::Authentication).detail,
            Some(CardDetail::Text("GCP Workload Identity Authentication".to_string()))
        );
        assert_eq!(
            card(&view, Stage::Linting).detail,
            Some(CardDetail::Text("Apigeelint Policy Validation".to_string()))
        );
    }

    #[test]
    fn test_environment_rows_follow_display_order() {
        let mut input = sample_input();
        input.deployed_environments = vec!["uat".to_string(), "prod".to_string(), "dev".to_string()];
        let view = build_summary(&input, DEFAULT_TITLE);
        match &card(&view, Stage::Environments).detail {
            Some(CardDetail::Environments(rows)) => {
                let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, vec!["uat", "prod", "dev"]);
                assert_eq!(rows[1].status, Pending);
                assert_eq!(rows[2].glyph, StatusGlyph::Check);
            }
            other => panic!("unexpected detail: {:?}", other),
        }
    }

    #[test]
    fn test_build_summary_is_idempotent() {
        let input = sample_input();
        assert_eq!(build_summary(&input, DEFAULT_TITLE), build_summary(&input, DEFAULT_TITLE));
    }
}
