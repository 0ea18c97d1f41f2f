use unicode_width::UnicodeWidthStr;

use debtbook::Ledger;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::views::{pad_left, pad_right};

/// Debt matrix table for one group.
///
/// Off-diagonal cells are gross amounts lent by the row member to the column
/// member. The diagonal shows each member's net balance, signed.
pub struct LedgerView<'a> {
    index: usize,
    name: &'a str,
    ledger: &'a Ledger,
}

impl<'a> LedgerView<'a> {
    pub fn new(index: usize, name: &'a str, ledger: &'a Ledger) -> Self {
        Self {
            index,
            name,
            ledger,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let members = self.ledger.members();
        let display = self.ledger.display_matrix();

        let labels: Vec<String> = members
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{} {}", i, m))
            .collect();
        let cells: Vec<Vec<String>> = display
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, v)| format_cell(row == col, *v))
                    .collect()
            })
            .collect();

        let label_width = labels
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0)
            .max("Lender".len());
        let col_widths: Vec<usize> = (0..members.len())
            .map(|col| {
                cells
                    .iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(UnicodeWidthStr::width(members[col].as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let (vertical, horizontal, cross) = if supports_unicode {
            (theme::rules::VERTICAL, theme::rules::HORIZONTAL, theme::rules::CROSS)
        } else {
            (
                theme::rules_ascii::VERTICAL,
                theme::rules_ascii::HORIZONTAL,
                theme::rules_ascii::CROSS,
            )
        };

        let mut out = String::new();
        out.push_str(&format!(
            "{} {} {}\n\n",
            Icon::Group.colored(supports_color, supports_unicode),
            ColoredText::plain(self.name).bold().render(supports_color),
            ColoredText::dim(format!("(group {})", self.index)).render(supports_color)
        ));

        let mut header = format!("{} {}", pad_right("Lender", label_width), vertical);
        for (col, member) in members.iter().enumerate() {
            header.push_str("  ");
            header.push_str(&pad_left(member, col_widths[col]));
        }
        out.push_str(&ColoredText::dim(header.trim_end()).render(supports_color));
        out.push('\n');

        let body_width: usize = col_widths.iter().map(|w| w + 2).sum();
        out.push_str(&ColoredText::dim(format!(
            "{}{}{}",
            horizontal.repeat(label_width + 1),
            cross,
            horizontal.repeat(body_width)
        ))
        .render(supports_color));
        out.push('\n');

        for (row, label) in labels.iter().enumerate() {
            let mut line = format!("{} {}", pad_right(label, label_width), vertical);
            for (col, text) in cells[row].iter().enumerate() {
                line.push_str("  ");
                let padded = pad_left(text, col_widths[col]);
                line.push_str(&style_cell(row == col, display[row][col], padded).render(supports_color));
            }
            out.push_str(&line);
            out.push('\n');
        }

        out.push('\n');
        out.push_str(
            &ColoredText::dim(format!(
                "Diagonal: net balance (+ is owed to the member). Total lent: {:.2}",
                self.ledger.total_lent()
            ))
            .render(supports_color),
        );
        out.push('\n');
        out
    }
}

fn format_cell(diagonal: bool, value: f64) -> String {
    if diagonal {
        // Avoid rendering "-0.00" for balances that round to zero.
        if value.abs() < 0.005 {
            return "0.00".to_string();
        }
        format!("{:+.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn style_cell(diagonal: bool, value: f64, text: String) -> ColoredText {
    if !diagonal {
        return if value == 0.0 {
            ColoredText::dim(text)
        } else {
            ColoredText::plain(text)
        };
    }
    if value >= 0.005 {
        ColoredText::success(text).bold()
    } else if value <= -0.005 {
        ColoredText::error(text).bold()
    } else {
        ColoredText::dim(text)
    }
}
