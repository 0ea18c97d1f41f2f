//! Mutating commands. Each one is translated to a [`BookCommand`], applied
//! (which autosaves), and answered with the affected group's ledger.

use anyhow::Result;

use debtbook::presentation::Commands;
use debtbook::{BookCommand, BookUseCase, CommandOutcome, Config};

use crate::commands::{open_book, Globals};
use crate::ui::context::UiContext;
use crate::ui::json::{emit, ledger_json};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::ledger::LedgerView;

pub fn cmd_edit(globals: &Globals, config: &Config, command: &Commands) -> Result<()> {
    let Some(command) = command.to_book_command()? else {
        anyhow::bail!("'{:?}' does not change the ledger", command);
    };
    apply(globals, config, command)
}

pub(crate) fn apply(globals: &Globals, config: &Config, command: BookCommand) -> Result<()> {
    let ui = globals.ui(config);
    let mut book = open_book(globals, config, &ui);

    let outcome = book.execute(command)?;
    tracing::debug!(?outcome, path = %book.location().display(), "command applied");

    report(&ui, &book, &outcome)
}

fn report(ui: &UiContext, book: &BookUseCase, outcome: &CommandOutcome) -> Result<()> {
    let index = outcome.group().unwrap_or(0);
    let Some(group) = book.registry().group(index) else {
        anyhow::bail!("group {} disappeared after the command ran", index);
    };
    let message = summary(book, outcome);

    if ui.json {
        emit(serde_json::json!({
            "event": event_name(outcome),
            "message": message,
            "group": ledger_json(index, &group.name, &group.ledger),
        }))?;
        return Ok(());
    }

    println!(
        "{} {}\n",
        Icon::Success.colored(ui.color, ui.unicode),
        ColoredText::success(message).render(ui.color)
    );
    print!(
        "{}",
        LedgerView::new(index, &group.name, &group.ledger).render(ui.color, ui.unicode)
    );
    Ok(())
}

fn event_name(outcome: &CommandOutcome) -> &'static str {
    match outcome {
        CommandOutcome::GroupCreated { .. } => "group_created",
        CommandOutcome::MemberAdded { .. } => "member_added",
        CommandOutcome::MemberRenamed { .. } => "member_renamed",
        CommandOutcome::TransactionRecorded { .. } => "transaction_recorded",
        CommandOutcome::Cleared => "cleared",
    }
}

fn summary(book: &BookUseCase, outcome: &CommandOutcome) -> String {
    let groups = book.registry();
    let group_name = move |g: usize| groups.group(g).map(|g| g.name.as_str()).unwrap_or("?");
    let member_name = move |g: usize, m: usize| {
        groups
            .group(g)
            .and_then(|g| g.ledger.member(m))
            .unwrap_or("?")
    };

    match outcome {
        CommandOutcome::GroupCreated { group } => {
            format!("Created group '{}' (group {})", group_name(*group), group)
        }
        CommandOutcome::MemberAdded { group, member } => format!(
            "Added '{}' to '{}'",
            member_name(*group, *member),
            group_name(*group)
        ),
        CommandOutcome::MemberRenamed {
            group,
            member,
            previous,
        } => format!(
            "Renamed '{}' to '{}' in '{}'",
            previous,
            member_name(*group, *member),
            group_name(*group)
        ),
        CommandOutcome::TransactionRecorded {
            group,
            lender,
            borrower,
            amount,
        } => format!(
            "{} lent {} to {} in '{}'",
            member_name(*group, *lender),
            amount,
            member_name(*group, *borrower),
            group_name(*group)
        ),
        CommandOutcome::Cleared => format!(
            "Cleared all groups; starting over with '{}'",
            group_name(0)
        ),
    }
}
