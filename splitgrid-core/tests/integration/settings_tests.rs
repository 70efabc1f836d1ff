//! Settings loaded from disk flowing into the engine

use std::fs;

use splitgrid_core::{
    ConfigError, ConfigManager, DividerHit, HeadlessSurface, LayoutKind, Orientation,
    PointerEvent, PointerPosition, SplitGridError, SplitViewEngine, SplitViewSettings,
    SurfaceExtent, TabId, TabSnapshot,
};
use tempfile::TempDir;

const EPS: f64 = 1e-9;

fn snapshots(n: usize) -> Vec<TabSnapshot> {
    (0..n).map(|_| TabSnapshot::new(TabId::new())).collect()
}

#[test]
fn loaded_settings_drive_engine_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.toml"),
        "default_layout_kind = \"hsep\"\nmin_size_percent = 20.0\ncoalesce_pointer_moves = false\n",
    )
    .unwrap();

    let settings = ConfigManager::with_config_dir(dir.path().to_path_buf())
        .load_settings()
        .unwrap();
    let mut engine = SplitViewEngine::new(
        HeadlessSurface::new(SurfaceExtent::new(1000.0, 1000.0)),
        settings,
    );

    let id = engine.create_split_view(&snapshots(2), None).unwrap();
    assert_eq!(engine.active_group_layout_kind(), Some(LayoutKind::Hsep));
    assert!((engine.resize_controller().minimum_percent() - 20.0).abs() < EPS);

    engine.handle_pointer_event(PointerEvent::Down {
        position: PointerPosition::new(0.0, 500.0),
        target: Some(DividerHit {
            orientation: Orientation::Horizontal,
            sequence: 1,
        }),
    });
    engine.handle_pointer_event(PointerEvent::Move {
        position: PointerPosition::new(0.0, 0.0),
    });

    // Uncoalesced: applied immediately, clamped at the configured 20%.
    let heights = engine.store().group(id).unwrap().sizes().row_heights().to_vec();
    assert!((heights[0] - 20.0).abs() < EPS);
    assert!((heights[1] - 80.0).abs() < EPS);
}

#[test]
fn init_writes_defaults_that_load_back() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().join("splitgrid"));

    manager.save_settings(&SplitViewSettings::default()).unwrap();
    let content = fs::read_to_string(manager.settings_path()).unwrap();
    assert!(content.contains("default_layout_kind = \"grid\""));
    assert_eq!(manager.load_settings().unwrap(), SplitViewSettings::default());
}

#[test]
fn engine_from_config_uses_stored_settings() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    fs::write(manager.settings_path(), "default_layout_kind = \"vsep\"\n").unwrap();

    let mut engine = SplitViewEngine::from_config(HeadlessSurface::default(), &manager).unwrap();
    engine.create_split_view(&snapshots(3), None).unwrap();
    assert_eq!(engine.active_group_layout_kind(), Some(LayoutKind::Vsep));
}

#[test]
fn engine_from_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().join("absent"));

    let engine = SplitViewEngine::from_config(HeadlessSurface::default(), &manager).unwrap();
    assert_eq!(engine.settings(), &SplitViewSettings::default());
}

#[test]
fn engine_from_config_rejects_invalid_settings() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    fs::write(manager.settings_path(), "min_size_percent = 75.0\n").unwrap();

    let err = SplitViewEngine::from_config(HeadlessSurface::default(), &manager).unwrap_err();
    assert!(matches!(
        err,
        SplitGridError::Config(ConfigError::Validation { ref field, .. }) if field == "min_size_percent"
    ));
    assert!(err.to_string().starts_with("Configuration error:"));
}
