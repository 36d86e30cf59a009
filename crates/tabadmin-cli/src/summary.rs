//! Human-readable output for the `check` and `env` commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use tabadmin_model::{ColumnSelection, ResolvedTables, TableOptions};

use crate::commands::{CheckReport, EnvReport};

pub fn print_check(report: &CheckReport) {
    println!("Config: {}", report.config_path.display());
    println!("Admin account: {}", report.admin_email);
    println!("Application database: {} on {}", report.database, report.host);

    match &report.resolved {
        Some(resolved) => {
            println!();
            print_plan(resolved);
        }
        None => {
            println!();
            print_requested(report);
            println!("(no schema snapshot given; pass --schema to preview the resolved views)");
        }
    }
}

/// Prints the resolved view plan, one row per retained table.
fn print_plan(resolved: &ResolvedTables) {
    let mut table = new_table(vec![
        "Table",
        "Visible columns",
        "Filters",
        "Rich text",
        "Link",
        "Menu group",
    ]);
    match resolved {
        ResolvedTables::Passthrough(tables) => {
            for discovered in tables {
                table.add_row(vec![
                    discovered.name.clone(),
                    "(all)".to_string(),
                    "(all)".to_string(),
                    "(all)".to_string(),
                    String::new(),
                    String::new(),
                ]);
            }
        }
        ResolvedTables::Configured(descriptors) => {
            for descriptor in descriptors {
                table.add_row(vec![
                    descriptor.table.name.clone(),
                    selection_cell(&descriptor.visible_columns),
                    selection_cell(&descriptor.visible_filters),
                    selection_cell(&descriptor.rich_text_columns),
                    descriptor
                        .link_column
                        .as_ref()
                        .map(|c| c.name.clone())
                        .unwrap_or_default(),
                    descriptor.menu_group.clone().unwrap_or_default(),
                ]);
            }
        }
    }
    println!("{table}");
    println!("{} table(s) will be shown in the panel", resolved.len());
}

/// Prints the configured table list as written, before any resolution.
fn print_requested(report: &CheckReport) {
    match &report.config.tables {
        None => println!("No tables key configured: every reflected table passes through."),
        Some(tables) => {
            let mut out = new_table(vec!["Table", "Options"]);
            for (name, options) in tables {
                out.add_row(vec![name.clone(), options_cell(options)]);
            }
            println!("{out}");
        }
    }
}

pub fn print_env(report: &EnvReport) {
    for (name, set) in &report.vars {
        let status = if *set { "set" } else { "MISSING" };
        println!("{name:<12} {status}");
    }
    if !report.all_set() {
        println!();
        println!("Missing variables are fatal at startup.");
    }
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn selection_cell(selection: &ColumnSelection) -> String {
    match selection.columns() {
        None => "(all)".to_string(),
        Some([]) => "(none matched)".to_string(),
        Some(columns) => columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn options_cell(options: &TableOptions) -> String {
    let mut parts = Vec::new();
    if let Some(columns) = &options.visible_columns {
        parts.push(format!("columns: {}", columns.join(", ")));
    }
    if let Some(filters) = &options.visible_filters {
        parts.push(format!("filters: {}", filters.join(", ")));
    }
    if let Some(rich) = &options.rich_text_columns {
        parts.push(format!("rich text: {}", rich.join(", ")));
    }
    if let Some(link) = &options.link_column {
        parts.push(format!("link: {link}"));
    }
    if let Some(group) = &options.menu_group {
        parts.push(format!("group: {group}"));
    }
    if parts.is_empty() {
        "(defaults)".to_string()
    } else {
        parts.join("; ")
    }
}
