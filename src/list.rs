//! One-shot `list` command: fetch once and print.

use crate::api::SyncError;
use crate::callers::RecentCaller;
use crate::store::Actions;

const HEADERS: [&str; 5] = ["CALLER", "CONTACT", "DATE", "INPUT", "RESULTS"];

/// Output format of the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Json,
}

/// Errors from the `list` command.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("Failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Run the startup hook, fetch once, and render the store's caller list.
pub async fn run(actions: &Actions, format: ListFormat) -> Result<String, ListError> {
    actions.init_app();
    actions.fetch_recent_callers().await?;

    let callers = actions.store().read(|s| s.recent_callers.clone());
    match format {
        ListFormat::Table => Ok(render_table(&callers)),
        ListFormat::Json => Ok(serde_json::to_string_pretty(&callers)?),
    }
}

/// Render callers as an aligned plain-text table.
pub fn render_table(callers: &[RecentCaller]) -> String {
    let rows: Vec<[&str; 5]> = callers
        .iter()
        .map(|c| {
            [
                c.caller_id.as_str(),
                c.contact_id.as_str(),
                c.date.as_str(),
                c.input.as_str(),
                c.results.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
