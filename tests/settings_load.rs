mod support;

use churnboard::app_dirs::APP_DIR_NAME;
use churnboard::config::{self, CONFIG_FILE_NAME, ConfigError, DashboardSettings};
use support::config_env::ConfigHomeGuard;

#[test]
fn defaults_when_no_config_file_exists() {
    let temp = tempfile::tempdir().unwrap();
    let _env = ConfigHomeGuard::set(temp.path().to_path_buf());

    let settings = config::load_or_default().unwrap();
    assert_eq!(settings, DashboardSettings::default());
    assert!(temp.path().join(APP_DIR_NAME).is_dir());
    assert!(!temp.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME).exists());
}

#[test]
fn reads_config_from_app_folder() {
    let temp = tempfile::tempdir().unwrap();
    let _env = ConfigHomeGuard::set(temp.path().to_path_buf());
    let dir = temp.path().join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join(CONFIG_FILE_NAME),
        "[scatter]\npoints = 12\nseed = 3\n\n[animation]\nfade_in_delay_ms = 250\n",
    )
    .unwrap();

    let settings = config::load_or_default().unwrap();
    assert_eq!(settings.scatter.points, 12);
    assert_eq!(settings.scatter.seed, Some(3));
    assert_eq!(settings.animation.fade_in_delay_ms, 250);
    assert_eq!(settings.animation.fade_duration_ms, 600);
}

#[test]
fn malformed_config_is_reported_not_defaulted() {
    let temp = tempfile::tempdir().unwrap();
    let _env = ConfigHomeGuard::set(temp.path().to_path_buf());
    let dir = temp.path().join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(CONFIG_FILE_NAME), "[scatter\n").unwrap();

    assert!(matches!(
        config::load_or_default(),
        Err(ConfigError::ParseToml { .. })
    ));
}
