//! debtbook - track who owes whom across groups
//!
//! Usage: debtbook [OPTIONS] [COMMAND]
//!
//! Commands:
//!   groups         List groups with their member counts
//!   show           Show a group's debt matrix
//!   add-group      Create a group
//!   add-member     Add a member to a group
//!   rename-member  Rename a member
//!   lend           Record a loan between two members
//!   clear          Delete everything and start over
//!   path           Print the ledger file location

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use debtbook::presentation::{Cli, Commands};
use debtbook::Config;

mod commands;
mod ui;

use commands::Globals;

fn main() {
    let cli = Cli::parse();
    ui::logging::init_tracing(cli.verbose, std::io::stderr().is_terminal());

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default();
    let globals = Globals {
        json: cli.json,
        color: cli.color,
        data: cli.data,
    };

    match cli.command.unwrap_or(Commands::Groups) {
        Commands::Groups => commands::groups::cmd_groups(&globals, &config),
        Commands::Show { group } => commands::groups::cmd_show(&globals, &config, group),
        Commands::Path => commands::groups::cmd_path(&globals, &config),
        Commands::Clear { yes } => commands::clear::cmd_clear(&globals, &config, yes),
        command => commands::edit::cmd_edit(&globals, &config, &command),
    }
}
