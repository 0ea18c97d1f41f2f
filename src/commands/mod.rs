pub mod clear;
pub mod edit;
pub mod groups;

use std::path::PathBuf;

use debtbook::presentation::{create_book_use_case, ColorWhen};
use debtbook::{BookUseCase, Config, LoadRecovery};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Flags shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Globals {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub data: Option<PathBuf>,
}

impl Globals {
    pub fn ui(&self, config: &Config) -> UiContext {
        UiContext::new(self.json, self.color, config)
    }
}

/// Open the book, reporting on stderr if startup had to fall back to a
/// fresh default group.
pub fn open_book(globals: &Globals, config: &Config, ui: &UiContext) -> BookUseCase {
    let opened = create_book_use_case(config, globals.data.clone());
    if let Some(recovery) = &opened.recovered {
        eprint!("{}", render_recovery(recovery, ui.color, ui.unicode));
    }
    opened.book
}

fn render_recovery(recovery: &LoadRecovery, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning("Could not load the ledger; starting with a fresh default group.")
            .render(supports_color)
    );
    for line in recovery.error.to_string().lines() {
        out.push_str(&format!("  {}\n", line.trim_start()));
    }
    if let Some(moved) = &recovery.moved_to {
        out.push_str(&format!(
            "  {} previous file kept at {}\n",
            Icon::Arrow.render(supports_unicode),
            moved.display()
        ));
    }
    if recovery.read_only {
        out.push_str(&format!(
            "  {} the file was left in place; changes are refused until it can be read\n",
            Icon::Arrow.render(supports_unicode)
        ));
    }
    out
}
