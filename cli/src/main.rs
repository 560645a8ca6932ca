//! CLI entrypoint for replymate
//!
//! This is the main binary that wires together all layers using
//! dependency injection: config → gateway → session → orchestrator/TUI
//! or one-shot use case.

use anyhow::{Context, Result};
use clap::Parser;
use replymate_application::{
    ChatOrchestrator, ConversationLogger, DraftOnceUseCase, NoConversationLogger, ReplyGateway,
    ReplySession,
};
use replymate_domain::prompt;
use replymate_infrastructure::{ConfigLoader, GeminiReplyGateway, JsonlConversationLogger};
use replymate_presentation::{Cli, ConsoleFormatter, DraftSpinner, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let chat_mode = cli.chat || cli.scenario.is_none();

    // In chat mode the terminal belongs to the TUI, so diagnostics go to a
    // file under the user data dir; in one-shot mode they go to stderr.
    let _log_guard = init_tracing(chat_mode, cli.verbose)?;

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }

    // === Dependency Injection ===
    // Fatal without the credential: never proceed into message handling.
    let gateway = GeminiReplyGateway::from_env(&config.model)?;

    let persona = config.chat.persona.as_deref().unwrap_or(prompt::PERSONA);
    let session = gateway.create_session(persona);

    let logger = conversation_logger(config.logging.conversation_log);

    info!("Starting replymate (model {})", config.model.name);

    if chat_mode {
        run_chat(session, logger, &config.model.name).await
    } else {
        let scenario = cli.scenario.as_deref().unwrap_or_default();
        run_one_shot(session, logger, scenario, cli.quiet).await
    }
}

/// Interactive chat: orchestrator actor + TUI loop over two channels.
async fn run_chat(
    session: Arc<dyn ReplySession>,
    logger: Arc<dyn ConversationLogger>,
    model_name: &str,
) -> Result<()> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let orchestrator =
        ChatOrchestrator::new(session, event_tx).with_conversation_logger(logger);
    let orchestrator_handle = tokio::spawn(orchestrator.run(command_rx));

    let mut app = TuiApp::new(command_tx.clone(), event_rx, model_name);
    app.run().await?;

    // The TUI sends Shutdown on quit; dropping the sender closes the inbox
    // either way.
    drop(command_tx);
    let _ = orchestrator_handle.await;

    Ok(())
}

/// One-shot mode: draft a single reply and print it.
async fn run_one_shot(
    session: Arc<dyn ReplySession>,
    logger: Arc<dyn ConversationLogger>,
    scenario: &str,
    quiet: bool,
) -> Result<()> {
    let use_case = DraftOnceUseCase::new(session).with_conversation_logger(logger);

    let spinner = (!quiet).then(DraftSpinner::start);
    let result = use_case.execute(scenario).await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    let reply = result.context("could not draft a reply")?;
    println!("{}", ConsoleFormatter::format_reply(scenario, &reply));

    Ok(())
}

/// Initialize tracing; returns the appender guard that must outlive main.
fn init_tracing(
    chat_mode: bool,
    verbosity: u8,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = match verbosity {
        0 => EnvFilter::try_from_env("REPLYMATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if chat_mode {
        let dir = data_dir().context("no user data directory")?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("could not create {}", dir.display()))?;
        let appender = tracing_appender::rolling::never(&dir, "replymate.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .init();

        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();

        Ok(None)
    }
}

fn conversation_logger(enabled: bool) -> Arc<dyn ConversationLogger> {
    if !enabled {
        return Arc::new(NoConversationLogger);
    }

    data_dir()
        .map(|d| d.join("conversation.jsonl"))
        .and_then(JsonlConversationLogger::new)
        .map(|l| Arc::new(l) as Arc<dyn ConversationLogger>)
        .unwrap_or_else(|| Arc::new(NoConversationLogger))
}

fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("replymate"))
}
