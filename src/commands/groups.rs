//! Read-only commands: `groups`, `show`, `path`.

use anyhow::Result;

use debtbook::presentation::factory::data_path;
use debtbook::{Config, GroupRef};

use crate::commands::{open_book, Globals};
use crate::ui::json::{emit, ledger_json};
use crate::ui::views::groups::GroupsView;
use crate::ui::views::ledger::LedgerView;

pub fn cmd_groups(globals: &Globals, config: &Config) -> Result<()> {
    let ui = globals.ui(config);
    let book = open_book(globals, config, &ui);
    let groups = book.registry().groups();

    if ui.json {
        let groups: Vec<_> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| {
                serde_json::json!({
                    "index": i,
                    "name": g.name,
                    "members": g.ledger.members(),
                })
            })
            .collect();
        emit(serde_json::json!({
            "event": "groups",
            "path": book.location().display().to_string(),
            "groups": groups,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        GroupsView::new(groups, book.location()).render(ui.color, ui.unicode)
    );
    Ok(())
}

pub fn cmd_show(globals: &Globals, config: &Config, group: Option<String>) -> Result<()> {
    let ui = globals.ui(config);
    let book = open_book(globals, config, &ui);

    let reference = group.map(GroupRef::new).unwrap_or_else(|| GroupRef::index(0));
    let (index, group) = book.group(&reference)?;

    if ui.json {
        emit(serde_json::json!({
            "event": "ledger",
            "group": ledger_json(index, &group.name, &group.ledger),
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        LedgerView::new(index, &group.name, &group.ledger).render(ui.color, ui.unicode)
    );
    Ok(())
}

pub fn cmd_path(globals: &Globals, config: &Config) -> Result<()> {
    let path = data_path(config, globals.data.clone());

    if globals.json {
        emit(serde_json::json!({
            "event": "path",
            "path": path.display().to_string(),
            "exists": path.exists(),
        }))?;
        return Ok(());
    }

    println!("{}", path.display());
    Ok(())
}
