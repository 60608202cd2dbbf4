//! CLI entrypoint for Offer Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use council_application::{
    ConversationLogger, NoConversationLogger, PolicyProvider, ProgressNotifier,
    RunEvaluationUseCase, RunImprovementUseCase, StaticPolicy,
};
use council_domain::{Context, CouncilMode, EvaluationBundle, Severity, ValidationPolicy};
use council_infrastructure::{
    ConfigLoader, FileConfig, FilePolicyProvider, JsonlConversationLogger, OpenAiReasoningClient,
};
use council_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "offer-council.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Try `offer-council evaluate --context ctx.json`.");
    };

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_tracing(cli.verbose, &config)?;
    info!("Starting Offer Council");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => tracing::error!("config: {}", issue.message),
            Severity::Warning => warn!("config: {}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Configuration is invalid; fix the errors above and retry.");
    }

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    if !output.color {
        colored::control::set_override(false);
    }

    let mut params = config.round.to_round_params();
    if cli.flag_only {
        params = params.with_validation(ValidationPolicy::Flag);
    }

    // === Inputs ===
    let mut context: Context = read_json(command.context_path(), "context")?;
    let policy: Box<dyn PolicyProvider> = match command.policy_path() {
        Some(path) => Box::new(FilePolicyProvider::new(path)),
        None => Box::new(StaticPolicy::new(context.policy_text.clone())),
    };
    context.policy_text = policy
        .load_policy()
        .await
        .context("Failed to load policy")?;

    // === Dependency Injection ===
    let client = Arc::new(
        OpenAiReasoningClient::from_config(&config.reasoning)
            .context("Failed to create reasoning client")?,
    );
    let mode = match command {
        Command::Evaluate { .. } => CouncilMode::Evaluation,
        Command::Improve { .. } => CouncilMode::Improvement,
    };
    let logger = conversation_logger(&config, mode);

    let progress: Box<dyn ProgressNotifier> = if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let progress: &dyn ProgressNotifier = if output.show_progress {
        progress.as_ref()
    } else {
        &council_application::NoProgress
    };

    // Ctrl-C cancels the round; in-flight calls are aborted.
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let formatter = ConsoleFormatter::new(output.format);
    let rendered = match &command {
        Command::Evaluate { .. } => {
            let use_case = RunEvaluationUseCase::new(client)
                .with_params(params)
                .with_logger(logger);
            let outcome = use_case
                .execute_with_progress(&context, progress, cancel)
                .await?;
            formatter.format_evaluation(&outcome)
        }
        Command::Improve { evaluation, .. } => {
            let bundle: EvaluationBundle = read_json(evaluation, "evaluation")?;
            let use_case = RunImprovementUseCase::new(client)
                .with_params(params)
                .with_logger(logger);
            let outcome = use_case
                .execute_with_progress(&context, &bundle, progress, cancel)
                .await?;
            formatter.format_improvement(&outcome)
        }
    };

    println!("{}", rendered);
    Ok(())
}

/// Stderr logging filtered by `-v`, plus a log file when `[logging].dir` is set.
fn init_tracing(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &config.logging.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn conversation_logger(config: &FileConfig, mode: CouncilMode) -> Arc<dyn ConversationLogger> {
    let Some(dir) = config.logging.transcript_dir() else {
        return Arc::new(NoConversationLogger);
    };
    match JsonlConversationLogger::for_round(&dir, mode) {
        Ok(logger) => {
            info!("Writing round transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open transcript in {}: {}", dir.display(), e);
            Arc::new(NoConversationLogger)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} file {}", what, path.display()))
}
