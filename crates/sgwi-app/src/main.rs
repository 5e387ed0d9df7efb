mod cli;
mod render;
mod repl;
mod setup;

use sgwi_ai::{ChatSession, SubmitOutcome};
use sgwi_config::SgwiConfig;

fn main() {
    // Load .env file before anything else
    setup::load_dotenv();

    let args = cli::parse();

    match start(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("sgwi-chat: {e}");
            std::process::exit(1);
        }
    }
}

fn start(args: cli::Args) -> sgwi_common::Result<i32> {
    // Config is read before logging starts so its level can apply; a
    // fallback is reported right after.
    let (config, fallback) = setup::load_settings(args.config.as_deref())?;

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive());
    setup::init_logging(&directive);

    tracing::info!("sgwi-chat v{} starting...", env!("CARGO_PKG_VERSION"));
    match fallback {
        None => tracing::info!("Config loaded (model: {})", config.assistant.model),
        Some(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    if args.print_config {
        println!("{}", sgwi_config::config_to_json(&config));
        return Ok(0);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(args, config))
}

async fn run(args: cli::Args, config: SgwiConfig) -> sgwi_common::Result<i32> {
    let agent = setup::build_agent(&config.assistant);

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let one_shot = args.ask.is_some();
    let renderer = render::spawn(rx, one_shot);

    let mut session = ChatSession::new().with_events(tx);
    tracing::debug!(session = %session.id(), "session opened");

    let result = match args.ask {
        Some(question) => Ok(exit_code(session.ask(&agent, question).await)),
        None => {
            if config.chat.show_header {
                print!("{}", render::header(agent.paper()));
            }
            if config.chat.greeting && !args.no_greeting {
                session = session.with_greeting();
            }
            repl::run_interactive(&mut session, &agent).await.map(|()| 0)
        }
    };

    // Closing the session closes the event channel and lets the renderer drain.
    drop(session);
    if let Err(e) = renderer.await {
        tracing::warn!("renderer task ended abnormally: {e}");
    }
    result
}

/// Process exit status for a one-shot `--ask`.
fn exit_code(outcome: SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Answered => 0,
        SubmitOutcome::Throttled | SubmitOutcome::Failed => 1,
        SubmitOutcome::Ignored => 2,
    }
}
