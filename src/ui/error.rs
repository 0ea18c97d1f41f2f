use debtbook::{BookError, DebtbookError, LedgerError, StoreError};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Short machine-readable category for an error.
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    if let Some(book) = err.downcast_ref::<BookError>() {
        return match book {
            BookError::Validation(_) | BookError::UnknownGroup { .. } => "validation",
            BookError::Save(_) | BookError::ReadOnly(_) => "persistence",
        };
    }
    if err.downcast_ref::<LedgerError>().is_some() {
        return "validation";
    }
    if err.downcast_ref::<StoreError>().is_some() {
        return "persistence";
    }
    if err.downcast_ref::<DebtbookError>().is_some() {
        return "config";
    }
    "error"
}

fn fix_hint(err: &anyhow::Error) -> Option<String> {
    let ledger = err
        .downcast_ref::<BookError>()
        .and_then(|b| match b {
            BookError::Validation(e) => Some(e),
            _ => None,
        })
        .or_else(|| err.downcast_ref::<LedgerError>());

    if let Some(ledger) = ledger {
        return match ledger {
            LedgerError::UnknownMember { .. } => {
                Some("Run `debtbook show <GROUP>` to list members and their indices.".into())
            }
            LedgerError::DuplicateMember { .. } => {
                Some("Member names must be unique within a group.".into())
            }
            LedgerError::InvalidAmount { .. } | LedgerError::NonPositiveAmount { .. } => {
                Some("Use a positive number, e.g. 12.50".into())
            }
            _ => None,
        };
    }

    match err.downcast_ref::<BookError>() {
        Some(BookError::UnknownGroup { .. }) => {
            Some("Run `debtbook groups` to list groups and their indices.".into())
        }
        Some(BookError::ReadOnly(_)) => Some(
            "Fix the file's permissions, or move it away so a fresh ledger can be started (`debtbook path`)."
                .into(),
        ),
        Some(BookError::Save(_)) => {
            Some("Check that the ledger file's directory is writable (`debtbook path`).".into())
        }
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.render(supports_unicode),
            ColoredText::dim(cause.to_string()).render(supports_color)
        ));
    }

    if let Some(fix) = fix_hint(err) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::info("Fix:").render(supports_color),
            fix
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "kind": error_kind(err),
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}
