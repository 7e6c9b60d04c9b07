//! Shop Assistant console
//!
//! Reads shopper utterances from stdin, one per line, and prints each
//! reply as a JSON object on stdout. Logs go to stderr.
//!
//! - `/reset` forgets every slot of the session
//! - `/quit` ends the session and exits

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shop_assistant::adapters::InMemorySessionStore;
use shop_assistant::application::handlers::assistant::{
    ConfirmHandoffHandler, ConfirmHandoffQuery, EndSessionCommand, EndSessionHandler,
    ProcessMessageCommand, ProcessMessageHandler, ResetContextCommand, ResetContextHandler,
    StartSessionCommand, StartSessionHandler,
};
use shop_assistant::config::{AppConfig, LoggingConfig};
use shop_assistant::ports::AssistantSessionStore;

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Trimmed text of one input line, or `None` when it is not UTF-8
fn decode_line(bytes: &[u8]) -> Option<&str> {
    match std::str::from_utf8(bytes) {
        Ok(line) => Some(line.trim()),
        Err(err) => {
            tracing::warn!(error = %err, "Skipping input line that is not UTF-8");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.logging);

    let store: Arc<dyn AssistantSessionStore> = Arc::new(InMemorySessionStore::new());
    let pipeline = Arc::new(config.assistant.pipeline());

    let start = StartSessionHandler::new(store.clone());
    let process = ProcessMessageHandler::new(store.clone(), pipeline.clone());
    let reset = ResetContextHandler::new(store.clone());
    let handoff = ConfirmHandoffHandler::new(store.clone(), pipeline);
    let end = EndSessionHandler::new(store);

    let session_id = start
        .handle(StartSessionCommand::default())
        .await?
        .context
        .session_id;

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if stdin.read_until(b'\n', &mut buffer).await? == 0 {
            break;
        }

        let Some(utterance) = decode_line(&buffer) else {
            continue;
        };

        match utterance {
            "/quit" => break,
            "/reset" => {
                reset.handle(ResetContextCommand { session_id }).await?;
                continue;
            }
            _ => {}
        }

        let confirmed = handoff
            .handle(ConfirmHandoffQuery {
                session_id,
                utterance: utterance.to_string(),
            })
            .await?;
        if let Some(link) = confirmed.link {
            println!("{}", link);
            continue;
        }

        let result = process
            .handle(ProcessMessageCommand {
                session_id,
                utterance: utterance.to_string(),
            })
            .await?;
        println!("{}", serde_json::to_string(&result.reply)?);
    }

    end.handle(EndSessionCommand { session_id }).await?;
    Ok(())
}
