use clap::{Args, Parser, Subcommand};
use crate::cli::error::{user_error, validate_non_empty};
use crate::cli::input::{assemble_input, InputDocument, InputOverrides};
use crate::cli::output::{enable_ansi, get_terminal_width, is_tty, resolve_color, resolve_width, ColorMode, OutputFormat};
use crate::config::Config;
use crate::demo::sample_input;
use crate::models::DeploymentInput;
use crate::render::{build_summary, format_summary_html, format_summary_text, TextOptions, DEFAULT_TITLE};
use crate::utils::now_timestamp;
use anyhow::{Context, Result};

#[derive(Parser)]
#[command(name = "pipeview")]
#[command(about = "Pipeview - Render a static summary of a proxy deployment pipeline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Presentation flags shared by every rendering command
#[derive(Args, Debug, Default, Clone)]
pub struct DisplayArgs {
    /// Output format (defaults to `format` in ~/.pipeview/rc, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// When to use ANSI colors in text output
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,
    /// Line width for text output, 40-200 (defaults to the terminal width)
    #[arg(long, value_parser = clap::value_parser!(u16).range(40..=200))]
    pub width: Option<u16>,
    /// Header title
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a pipeline summary from an input document and/or flags
    Render {
        /// JSON input document ("-" reads stdin)
        #[arg(long, short = 'i')]
        input: Option<String>,
        /// Proxy name
        #[arg(long)]
        proxy: Option<String>,
        /// Proxy version or revision
        #[arg(long = "proxy-version")]
        proxy_version: Option<String>,
        /// Environment to display, in order (repeatable)
        #[arg(long = "env")]
        environments: Vec<String>,
        /// Authentication result (success, failed, anything else is pending)
        #[arg(long)]
        auth: Option<String>,
        /// Lint result
        #[arg(long)]
        lint: Option<String>,
        /// Upload result
        #[arg(long)]
        upload: Option<String>,
        /// Environment deployment result as ENV=STATUS (repeatable)
        #[arg(long)]
        deploy: Vec<String>,
        /// Snapshot timestamp (defaults to now)
        #[arg(long)]
        timestamp: Option<String>,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Render the built-in sample pipeline
    Demo {
        #[command(flatten)]
        display: DisplayArgs,
    },
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with exit 0; usage errors exit 2
            e.exit();
        }
    };

    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            input,
            proxy,
            proxy_version,
            environments,
            auth,
            lint,
            upload,
            deploy,
            timestamp,
            display,
        } => {
            let overrides = InputOverrides {
                proxy,
                proxy_version,
                environments,
                auth,
                lint,
                upload,
                deploy,
                timestamp,
            };
            handle_render(input, overrides, display)
        }
        Commands::Demo { display } => handle_demo(display),
    }
}

fn handle_render(input: Option<String>, overrides: InputOverrides, display: DisplayArgs) -> Result<()> {
    let doc = match input.as_deref() {
        Some(path) => {
            log::debug!("Reading pipeline document from {}", path);
            InputDocument::load(path).context("Failed to load pipeline input")?
        }
        None => InputDocument::default(),
    };
    let deployment = assemble_input(doc, overrides, now_timestamp)
        .context("Failed to assemble pipeline input")?;
    print_summary(&deployment, &display)
}

fn handle_demo(display: DisplayArgs) -> Result<()> {
    let mut deployment = sample_input();
    deployment.timestamp = now_timestamp();
    print_summary(&deployment, &display)
}

/// Resolved presentation settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub format: OutputFormat,
    pub text: TextOptions,
    pub title: String,
}

/// Combine flags, rc file and terminal facts. Flags win over the rc file.
pub fn resolve_settings(display: &DisplayArgs, config: &Config, is_tty: bool, terminal_width: usize) -> RenderSettings {
    let mode = display.color.or(config.color).unwrap_or_default();
    let no_color_set = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());

    RenderSettings {
        format: display.format.or(config.format).unwrap_or_default(),
        text: TextOptions {
            color: resolve_color(mode, is_tty, no_color_set),
            width: resolve_width(display.width.map(usize::from).or(config.width), terminal_width),
        },
        title: display.title.clone()
            .or_else(|| config.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
    }
}

/// Render a deployment in the requested format
pub fn render_deployment(deployment: &DeploymentInput, settings: &RenderSettings) -> Result<String> {
    let view = build_summary(deployment, &settings.title);
    let output = match settings.format {
        OutputFormat::Text => format_summary_text(&view, &settings.text),
        OutputFormat::Html => format_summary_html(&view),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&view)
                .context("Failed to serialize summary")?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

fn print_summary(deployment: &DeploymentInput, display: &DisplayArgs) -> Result<()> {
    if let Some(title) = &display.title {
        if let Err(e) = validate_non_empty(title, "Title") {
            user_error(&e);
        }
    }

    let config = Config::load()?;
    let settings = resolve_settings(display, &config, is_tty(), get_terminal_width());
    log::debug!("Render settings: {:?}", settings);

    if settings.text.color {
        enable_ansi();
    }

    let output = render_deployment(deployment, &settings)?;
    print!("{}", output);
    Ok(())
}
