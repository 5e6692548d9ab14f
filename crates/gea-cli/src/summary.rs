//! Terminal output for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

use crate::commands::{CountryPanel, RenderSummary};

pub fn print_render_summary(summary: &RenderSummary) {
    println!(
        "Rendered {} figures for {} ({}) into {}",
        summary.files.len(),
        summary.country,
        summary.year,
        summary.out_dir.display()
    );
    for file in &summary.files {
        println!("  {file}");
    }
}

pub fn print_country_panel(panel: &CountryPanel) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new(&panel.country).add_attribute(Attribute::Bold),
        Cell::new(panel.year).add_attribute(Attribute::Bold),
    ]);
    for (label, value) in &panel.rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
    println!();
    println!("{}", panel.curiosity);
}
