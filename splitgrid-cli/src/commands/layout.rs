//! Layout command: split N fresh tabs and print the result.

use std::path::Path;

use splitgrid_core::{HeadlessSurface, TabId, TabSnapshot};

use crate::cli::{KindArg, OutputFormat};
use crate::error::CliError;
use crate::format::{LayoutOutput, TabLabels, format_json, format_table};
use crate::util::build_engine;

/// Layout command handler
pub fn cmd_layout(
    config_path: Option<&Path>,
    tabs: usize,
    kind: Option<KindArg>,
    format: OutputFormat,
) -> Result<(), CliError> {
    if tabs < 2 {
        return Err(CliError::Layout(format!(
            "a split needs at least two tabs, got {tabs}"
        )));
    }

    let snapshots: Vec<TabSnapshot> = (0..tabs).map(|_| TabSnapshot::new(TabId::new())).collect();
    let labels: TabLabels = snapshots
        .iter()
        .enumerate()
        .map(|(i, tab)| (tab.id, (i + 1).to_string()))
        .collect();

    let mut engine = build_engine(config_path, HeadlessSurface::default())?;
    engine
        .create_split_view(&snapshots, kind.map(Into::into))
        .ok_or_else(|| CliError::Layout("no split group was created".to_string()))?;
    let layout = engine
        .active_layout()
        .ok_or_else(|| CliError::Layout("no active split group".to_string()))?;

    let output = LayoutOutput::new(&layout, &labels);
    match format {
        OutputFormat::Table => println!("{}", format_table(&output)),
        OutputFormat::Json => println!("{}", format_json(&output)?),
    }
    Ok(())
}
