use anyhow::Result;
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use debtbook::{BookCommand, Config};

use crate::commands::edit::apply;
use crate::commands::Globals;

pub fn cmd_clear(globals: &Globals, config: &Config, yes: bool) -> Result<()> {
    if !yes {
        if globals.json || !std::io::stdin().is_terminal() {
            anyhow::bail!("refusing to delete every group without confirmation; pass --yes");
        }

        let confirmed = Confirm::new()
            .with_prompt("Delete every group and all recorded debts?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    apply(globals, config, BookCommand::ClearAll)
}
