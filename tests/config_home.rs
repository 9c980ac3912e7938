mod support;

use support::destrank_env::DestrankEnvGuard;

use destrank::app_dirs::APP_DIR_NAME;
use destrank::config::{CONFIG_FILE_NAME, EvalConfig, config_path};
use destrank::ml::TieBreak;

#[test]
fn config_round_trips_through_config_home() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = DestrankEnvGuard::set_config_home(temp.path().to_path_buf());

    let path = config_path().expect("config path");
    assert_eq!(path, temp.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    assert_eq!(EvalConfig::load_or_default().unwrap(), EvalConfig::default());

    let config = EvalConfig {
        rank: 3,
        class_count: 8,
        tie_break: TieBreak::HigherIndexFirst,
        ..EvalConfig::default()
    };
    config.save_to(&path).expect("save config");
    assert_eq!(EvalConfig::load_or_default().unwrap(), config);
}
