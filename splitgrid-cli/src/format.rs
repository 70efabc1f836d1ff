//! Rendering layout descriptions as tables or JSON.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;
use splitgrid_core::{LayoutDescription, Orientation, TabId};

use crate::error::CliError;

/// Short names for tabs, as used in scripts and output.
pub type TabLabels = HashMap<TabId, String>;

/// Serializable layout with tabs replaced by their labels
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOutput {
    pub group: String,
    pub kind: String,
    pub columns: usize,
    pub rows: usize,
    pub regions: Vec<RegionOutput>,
    pub dividers: Vec<DividerOutput>,
    pub column_widths: Vec<f64>,
    pub row_heights: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<String>,
}

/// One tab's cell rectangle
#[derive(Debug, Clone, Serialize)]
pub struct RegionOutput {
    pub tab: String,
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

/// One divider track
#[derive(Debug, Clone, Serialize)]
pub struct DividerOutput {
    pub track: String,
    pub orientation: String,
    pub structural_index: usize,
    pub span_start: usize,
    pub span_end: usize,
}

fn label(labels: &TabLabels, tab: TabId) -> String {
    labels.get(&tab).cloned().unwrap_or_else(|| tab.to_string())
}

/// Track handle as written in scripts, e.g. `v1` or `h2`.
pub fn track_handle(orientation: Orientation, sequence: usize) -> String {
    match orientation {
        Orientation::Vertical => format!("v{sequence}"),
        Orientation::Horizontal => format!("h{sequence}"),
    }
}

impl LayoutOutput {
    /// Builds the output form of `layout`.
    pub fn new(layout: &LayoutDescription, labels: &TabLabels) -> Self {
        Self {
            group: layout.group.0.to_string(),
            kind: layout.layout_kind.to_string(),
            columns: layout.template.columns,
            rows: layout.template.rows,
            regions: layout
                .regions
                .iter()
                .map(|region| RegionOutput {
                    tab: label(labels, region.tab),
                    row: region.row,
                    column: region.column,
                    row_span: region.row_span,
                    column_span: region.column_span,
                })
                .collect(),
            dividers: layout
                .template
                .dividers
                .iter()
                .map(|track| DividerOutput {
                    track: track_handle(track.orientation, track.sequence),
                    orientation: track.orientation.to_string(),
                    structural_index: track.structural_index,
                    span_start: track.span.start,
                    span_end: track.span.end,
                })
                .collect(),
            column_widths: layout.column_widths.clone(),
            row_heights: layout.row_heights.clone(),
            focused: layout.focused_tab.map(|tab| label(labels, tab)),
        }
    }
}

fn percentages(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a layout as a table string
#[must_use]
pub fn format_table(layout: &LayoutOutput) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Group:  {}", layout.group);
    let _ = writeln!(output, "Kind:   {}", layout.kind);
    let _ = writeln!(
        output,
        "Grid:   {} column(s) x {} row(s)",
        layout.columns, layout.rows
    );
    if let Some(focused) = &layout.focused {
        let _ = writeln!(output, "Focus:  {focused}");
    }
    output.push('\n');

    let tab_width = layout
        .regions
        .iter()
        .map(|r| r.tab.len())
        .max()
        .unwrap_or(3)
        .max(3);
    let _ = writeln!(
        output,
        "{:<tab_width$}  {:<4}  {:<6}  {:<8}  {:<11}",
        "TAB", "ROW", "COLUMN", "ROW SPAN", "COLUMN SPAN"
    );
    let _ = writeln!(
        output,
        "{:-<tab_width$}  {:-<4}  {:-<6}  {:-<8}  {:-<11}",
        "", "", "", "", ""
    );
    for region in &layout.regions {
        let _ = writeln!(
            output,
            "{:<tab_width$}  {:<4}  {:<6}  {:<8}  {:<11}",
            region.tab, region.row, region.column, region.row_span, region.column_span
        );
    }
    output.push('\n');

    if layout.dividers.is_empty() {
        output.push_str("No dividers.\n");
    } else {
        let _ = writeln!(output, "{:<7}  {:<5}  {:<6}", "DIVIDER", "INDEX", "SPAN");
        let _ = writeln!(output, "{:-<7}  {:-<5}  {:-<6}", "", "", "");
        for divider in &layout.dividers {
            let _ = writeln!(
                output,
                "{:<7}  {:<5}  {}..{}",
                divider.track, divider.structural_index, divider.span_start, divider.span_end
            );
        }
    }
    output.push('\n');

    let _ = writeln!(output, "Column widths:  {}", percentages(&layout.column_widths));
    let _ = writeln!(output, "Row heights:    {}", percentages(&layout.row_heights));

    output.trim_end().to_string()
}

/// Format a layout as JSON string
///
/// # Errors
///
/// Returns `CliError::Output` if JSON serialization fails.
pub fn format_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}
