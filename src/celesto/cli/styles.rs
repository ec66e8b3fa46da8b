use console::Style;
use once_cell::sync::Lazy;

pub static BANNER_TITLE: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static BANNER_TAGLINE: Lazy<Style> = Lazy::new(|| Style::new().blue().bright());
pub static BANNER_HINT: Lazy<Style> = Lazy::new(|| Style::new().yellow().bright());
pub static IDEA_INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static IDEA_TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static IDEA_DETAIL: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
