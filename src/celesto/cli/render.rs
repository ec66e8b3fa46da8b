//! Terminal output: the console narrator, message printing, the banner and
//! the post-generation summary. Render functions return strings so they can
//! be tested without capturing stdout.

use super::styles::{
    BANNER_HINT, BANNER_TAGLINE, BANNER_TITLE, IDEA_DETAIL, IDEA_INDEX, IDEA_TITLE,
};
use celesto::api::{CmdMessage, MessageLevel};
use celesto::model::Idea;
use celesto::narrate::Narrator;
use colored::Colorize;
use std::path::Path;

const BANNER: &str = r"
  ____     _           _        _
 / ___|___| | ___  ___| |_ ___ | |
| |   / _ \ |/ _ \/ __| __/ _ \| |
| |__|  __/ |  __/\__ \ || (_) |_|
 \____\___|_|\___||___/\__\___/(_)
";

const TAGLINE: &str = "Celesto is an AI agent that helps you generate startup ideas.";
const HINT: &str = "Run `celesto generate --topic <TOPIC>` to get started.";

/// Narrator for the terminal. Errors go to stderr, everything else to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNarrator {
    verbose: bool,
}

impl ConsoleNarrator {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Narrator for ConsoleNarrator {
    fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    fn emit(&self, message: CmdMessage) {
        print_message(&message);
    }
}

pub fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => eprintln!("{}", message.content.red()),
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_message(message);
    }
}

pub fn render_banner() -> String {
    format!(
        "{}\n{}\n{}\n",
        BANNER_TITLE.apply_to(BANNER.trim_start_matches('\n')),
        BANNER_TAGLINE.apply_to(TAGLINE),
        BANNER_HINT.apply_to(HINT),
    )
}

pub fn render_idea_summary(ideas: &[Idea], stored_path: Option<&Path>) -> String {
    let mut output = String::new();

    if ideas.is_empty() {
        output.push_str("No ideas returned.\n");
    }

    for (i, idea) in ideas.iter().enumerate() {
        output.push_str(&format!(
            "{} {}\n",
            IDEA_INDEX.apply_to(format!("{}.", i + 1)),
            IDEA_TITLE.apply_to(&idea.title)
        ));
        output.push_str(&format!(
            "   {}\n",
            IDEA_DETAIL.apply_to(format!(
                "{} | market size: {}",
                idea.market, idea.potential_market_size
            ))
        ));
    }

    if let Some(path) = stored_path {
        output.push_str(&format!("\nSaved to {}\n", path.display()));
    }

    output
}
