// Assembling a DeploymentInput from an input document and command-line flags

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use crate::models::{DeploymentInput, ProxyIdentity, StageStatus};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid deploy result '{0}': expected ENV=STATUS (e.g. dev=success)")]
    MalformedDeployPair(String),
    #[error("Environment name cannot be empty")]
    EmptyEnvironment,
    #[error("Failed to read input from {source_name}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Input from {source_name} is not a valid pipeline document: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON document describing one pipeline snapshot.
/// Every field is optional; missing values degrade to pending/empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputDocument {
    pub proxy_name: Option<String>,
    /// String or number
    pub version: Option<serde_json::Value>,
    pub deployed_environments: Option<Vec<String>>,
    pub auth_result: StageStatus,
    pub lint_result: StageStatus,
    pub upload_result: StageStatus,
    pub deploy_results: BTreeMap<String, StageStatus>,
    pub timestamp: Option<String>,
}

impl InputDocument {
    pub fn from_json(text: &str, source_name: &str) -> Result<Self, InputError> {
        serde_json::from_str(text).map_err(|source| InputError::Parse {
            source_name: source_name.to_string(),
            source,
        })
    }

    /// Read a document from a file, or from stdin when `path` is "-"
    pub fn load(path: &str) -> Result<Self, InputError> {
        if path == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| InputError::Read { source_name: "stdin".to_string(), source })?;
            return Self::from_json(&text, "stdin");
        }

        let text = std::fs::read_to_string(Path::new(path))
            .map_err(|source| InputError::Read { source_name: path.to_string(), source })?;
        Self::from_json(&text, path)
    }
}

fn version_text(value: Option<serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Parse an `ENV=STATUS` pair. The status part is never rejected.
pub fn parse_deploy_pair(pair: &str) -> Result<(String, StageStatus), InputError> {
    let (env, status) = pair.split_once('=')
        .ok_or_else(|| InputError::MalformedDeployPair(pair.to_string()))?;
    let env = env.trim();
    if env.is_empty() {
        return Err(InputError::EmptyEnvironment);
    }
    Ok((env.to_string(), StageStatus::from_label(status)))
}

/// Values given on the command line; each one overrides the document
#[derive(Debug, Default, Clone)]
pub struct InputOverrides {
    pub proxy: Option<String>,
    pub proxy_version: Option<String>,
    pub environments: Vec<String>,
    pub auth: Option<String>,
    pub lint: Option<String>,
    pub upload: Option<String>,
    pub deploy: Vec<String>,
    pub timestamp: Option<String>,
}

/// Merge a document and flag overrides into render input.
/// `now` supplies the timestamp when neither source has one.
pub fn assemble_input(
    doc: InputDocument,
    overrides: InputOverrides,
    now: impl FnOnce() -> String,
) -> Result<DeploymentInput, InputError> {
    // Base display order comes from the document before flags add results
    let mut order = doc.deployed_environments
        .unwrap_or_else(|| doc.deploy_results.keys().cloned().collect());
    let mut deploy_results = doc.deploy_results;
    let mut flag_order: Vec<String> = Vec::new();
    for pair in &overrides.deploy {
        let (env, status) = parse_deploy_pair(pair)?;
        if !flag_order.contains(&env) {
            flag_order.push(env.clone());
        }
        deploy_results.insert(env, status);
    }

    for env in &overrides.environments {
        if env.trim().is_empty() {
            return Err(InputError::EmptyEnvironment);
        }
    }

    // Display order: --env, else the document order with new --deploy environments appended
    let deployed_environments = if !overrides.environments.is_empty() {
        overrides.environments.iter().map(|e| e.trim().to_string()).collect()
    } else {
        for env in flag_order {
            if !order.contains(&env) {
                order.push(env);
            }
        }
        order
    };

    let status_or = |flag: Option<String>, fallback: StageStatus| {
        flag.map(|s| StageStatus::from_label(&s)).unwrap_or(fallback)
    };

    Ok(DeploymentInput {
        proxy: ProxyIdentity {
            name: overrides.proxy.or(doc.proxy_name).unwrap_or_default(),
            version: overrides.proxy_version.unwrap_or_else(|| version_text(doc.version)),
        },
        deployed_environments,
        auth: status_or(overrides.auth, doc.auth_result),
        lint: status_or(overrides.lint, doc.lint_result),
        upload: status_or(overrides.upload, doc.upload_result),
        deploy_results,
        timestamp: overrides.timestamp.or(doc.timestamp).unwrap_or_else(now),
    })
}
