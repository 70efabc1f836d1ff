//! Settings commands.

use std::fmt::Write as _;
use std::path::Path;

use splitgrid_core::SplitViewSettings;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::format_json;
use crate::util::create_config_manager;

/// Print the effective settings
pub fn cmd_config_show(config_path: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let manager = create_config_manager(config_path)?;
    let settings = manager.load_settings()?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_settings(&settings, &manager.settings_path()));
        }
        OutputFormat::Json => println!("{}", format_json(&settings)?),
    }
    Ok(())
}

/// Write default settings, refusing to overwrite unless `force` is set
pub fn cmd_config_init(config_path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let manager = create_config_manager(config_path)?;
    let path = manager.settings_path();
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    manager.save_settings(&SplitViewSettings::default())?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

/// Format settings as a key/value listing
#[must_use]
pub fn format_settings(settings: &SplitViewSettings, source: &Path) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Settings file:           {}", source.display());
    let _ = writeln!(
        output,
        "default_layout_kind:     {}",
        settings.default_layout_kind
    );
    let _ = writeln!(
        output,
        "min_size_percent:        {:.2}",
        settings.min_size_percent
    );
    let _ = writeln!(
        output,
        "coalesce_pointer_moves:  {}",
        settings.coalesce_pointer_moves
    );
    let _ = writeln!(output, "tracing_level:           {}", settings.tracing_level);
    output.trim_end().to_string()
}
