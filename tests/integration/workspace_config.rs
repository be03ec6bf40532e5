use std::env;

use anyhow::Result;
use footprintbase::workspace;
use tempfile::TempDir;

// The only test that touches FOOTPRINTBASE_HOME; keeping env mutation in a
// single test avoids races between parallel test threads.
#[test]
fn workspace_and_config_live_under_the_home_override() -> Result<()> {
    let home = TempDir::new()?;
    env::set_var("FOOTPRINTBASE_HOME", home.path());

    let paths = workspace::ensure_workspace_structure()?;
    assert_eq!(paths.root, home.path());
    assert!(paths.data_dir.is_dir());
    assert!(paths.config_dir.is_dir());

    let mut config = workspace::load_or_default()?;
    assert!(config.last_active_user_id.is_none());
    config.last_active_user_id = Some("user-42".to_string());
    workspace::save(&config)?;

    let reloaded = workspace::load_or_default()?;
    assert_eq!(reloaded.last_active_user_id.as_deref(), Some("user-42"));
    assert!(home.path().join("config").join("config.toml").is_file());
    Ok(())
}
