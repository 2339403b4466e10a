//! Plan summary tables for the batch commands

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::calc::UNAVAILABLE;
use crate::wizard::{DerivedSummary, UNANSWERED};

/// Lines computed by the calculators rather than typed by the user
const DERIVED_LABELS: [&str; 5] = [
    "Estimated timeline",
    "Estimated spend",
    "Net position",
    "Visa allowance",
    "Visa check",
];

/// Build the table without printing it
pub fn summary_table(summary: &DerivedSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Question").add_attribute(Attribute::Bold),
        Cell::new("Answer").add_attribute(Attribute::Bold),
    ]);

    for line in &summary.lines {
        let derived = DERIVED_LABELS.contains(&line.label.as_str());
        let value = Cell::new(&line.value);
        let value = if line.value == UNANSWERED || line.value == UNAVAILABLE {
            value.fg(Color::DarkGrey)
        } else if derived {
            value.fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            value
        };
        let label = if derived {
            Cell::new(&line.label).fg(Color::Cyan)
        } else {
            Cell::new(&line.label)
        };
        table.add_row(vec![label, value]);
    }
    table
}

pub fn display_summary(summary: &DerivedSummary) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style(summary.title.to_uppercase()).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let table = summary_table(summary);
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
    println!();
}
