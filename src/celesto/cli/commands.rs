use super::render::{print_messages, render_banner, render_idea_summary, ConsoleNarrator};
use super::setup::{Cli, Commands};
use celesto::api::{CelestoApi, ChatOptions};
use celesto::config::CelestoConfig;
use celesto::env::load_env;
use celesto::error::Result;
use celesto::model::GenerateOptions;
use celesto::provider::openai::OpenAiProvider;
use celesto::store::fs::FileStore;
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "CELESTO_LOG";
const DEFAULT_LOG_FILTER: &str = "error";

struct AppContext {
    api: CelestoApi<OpenAiProvider, FileStore, ConsoleNarrator>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Env must be in place before the log filter or any subcommand reads it.
    load_env(cli.env.as_deref())?;
    init_tracing();

    let Some(command) = cli.command else {
        print!("{}", render_banner());
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut ctx = init_context(cli.verbose);

    match command {
        Commands::Generate {
            topic,
            kb,
            dump,
            assets,
        } => handle_generate(&mut ctx, topic, kb, dump, assets).await,
        Commands::Chat { kb, dump } => handle_chat(&ctx, kb, dump),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

fn init_context(verbose: bool) -> AppContext {
    let config = CelestoConfig::from_env();
    tracing::debug!(model = %config.model, base_url = %config.base_url, "resolved provider config");

    let api = CelestoApi::new(
        OpenAiProvider::new(config),
        FileStore::new(),
        ConsoleNarrator::new(verbose),
    );
    AppContext { api }
}

async fn handle_generate(
    ctx: &mut AppContext,
    topic: String,
    kb: Option<PathBuf>,
    dump: Option<PathBuf>,
    assets: Vec<String>,
) -> Result<()> {
    let mut options = GenerateOptions::new(topic).with_assets(assets);
    if let Some(kb) = kb {
        options = options.with_kb_path(kb);
    }
    if let Some(dump) = dump {
        options = options.with_dump_path(dump);
    }

    let result = ctx.api.generate_ideas(&options).await?;
    print!(
        "{}",
        render_idea_summary(&result.ideas, result.stored_path.as_deref())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_chat(ctx: &AppContext, kb: Option<PathBuf>, dump: Option<PathBuf>) -> Result<()> {
    let options = ChatOptions {
        kb_path: kb,
        dump_path: dump,
    };
    let result = ctx.api.chat(&options)?;
    print_messages(&result.messages);
    Ok(())
}
