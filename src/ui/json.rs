use std::io::{self, Write};

use debtbook::Ledger;

/// Write a single JSON event (one object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Machine-readable snapshot of one group's ledger.
pub fn ledger_json(index: usize, name: &str, ledger: &Ledger) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "name": name,
        "members": ledger.members(),
        "debt_matrix": ledger.matrix(),
        "net_balances": ledger.all_net_balances(),
    })
}
