use std::path::Path;

use debtbook::Group;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::pad_right;

pub struct GroupsView<'a> {
    groups: &'a [Group],
    location: &'a Path,
}

impl<'a> GroupsView<'a> {
    pub fn new(groups: &'a [Group], location: &'a Path) -> Self {
        Self { groups, location }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        out.push_str(
            &ColoredText::dim(format!("Ledger: {}", self.location.display())).render(supports_color),
        );
        out.push_str("\n\n");

        let width = self
            .groups
            .iter()
            .map(|g| unicode_width::UnicodeWidthStr::width(g.name.as_str()))
            .max()
            .unwrap_or(0);

        for (i, group) in self.groups.iter().enumerate() {
            let count = group.ledger.len();
            let noun = if count == 1 { "member" } else { "members" };
            out.push_str(&format!(
                "{} {:>2}  {}  {}\n",
                Icon::Group.colored(supports_color, supports_unicode),
                i,
                pad_right(&group.name, width),
                ColoredText::dim(format!("{} {}", count, noun)).render(supports_color)
            ));
        }
        out
    }
}
