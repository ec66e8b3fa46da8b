use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "1.0.0" for releases, "1.0.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("CELESTO_GIT_HASH");
    const GIT_DATE: &str = env!("CELESTO_GIT_DATE");
    const IS_RELEASE: &str = env!("CELESTO_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "celesto", bin_name = "celesto", version = get_version())]
#[command(about = "Celesto is an AI-powered startup idea generator!", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to env file
    #[arg(long, global = true, value_name = "PATH")]
    pub env: Option<PathBuf>,

    /// Narrate progress
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate startup ideas
    #[command(alias = "g", display_order = 1)]
    Generate {
        /// Topic for idea generation
        #[arg(long)]
        topic: String,

        /// Path to knowledge base folder
        #[arg(long, value_name = "PATH")]
        kb: Option<PathBuf>,

        /// Folder to dump knowledge base
        #[arg(long, value_name = "PATH")]
        dump: Option<PathBuf>,

        /// Assets to generate (comma separated)
        #[arg(long, value_name = "ITEMS", value_delimiter = ',')]
        assets: Vec<String>,
    },

    /// Start interactive chat mode
    #[command(display_order = 2)]
    Chat {
        /// Path to knowledge base folder
        #[arg(long, value_name = "PATH")]
        kb: Option<PathBuf>,

        /// Folder to dump knowledge base
        #[arg(long, value_name = "PATH")]
        dump: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_requires_topic() {
        assert!(Cli::try_parse_from(["celesto", "generate"]).is_err());
    }

    #[test]
    fn generate_parses_all_options() {
        let cli = parse(&[
            "celesto",
            "generate",
            "--topic",
            "AI",
            "--kb",
            "./custom_kb",
            "--dump",
            "./dump",
            "--assets",
            "web,mobile,api",
        ]);
        match cli.command {
            Some(Commands::Generate {
                topic,
                kb,
                dump,
                assets,
            }) => {
                assert_eq!(topic, "AI");
                assert_eq!(kb, Some(PathBuf::from("./custom_kb")));
                assert_eq!(dump, Some(PathBuf::from("./dump")));
                assert_eq!(assets, vec!["web", "mobile", "api"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&["celesto", "chat", "--env", ".env.local", "-v"]);
        assert_eq!(cli.env, Some(PathBuf::from(".env.local")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Chat { .. })));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = parse(&["celesto"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }
}
