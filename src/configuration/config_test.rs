use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

// Config is a process-wide singleton, so defaults and overrides are checked
// in one test to keep the assertions ordered.
#[test]
fn it_loads_defaults_then_applies_cli_overrides() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["homefixi"])?;
    Config::load(vec![&matches])?;

    assert_eq!(Config::get(ConfigKey::Assistant), "canned");
    assert_eq!(Config::get(ConfigKey::StartingCredits), "25");
    assert_eq!(Config::get(ConfigKey::MaxCredits), "50");

    let matches = cli::build().try_get_matches_from(vec![
        "homefixi",
        "--starting-credits",
        "30",
        "--username",
        "tester",
    ])?;
    Config::load(vec![&matches])?;

    assert_eq!(Config::get(ConfigKey::StartingCredits), "30");
    assert_eq!(Config::get(ConfigKey::Username), "tester");
    return Ok(());
}

#[test]
fn it_rejects_unknown_assistant() {
    let res = cli::build().try_get_matches_from(vec!["homefixi", "--assistant", "gpt4"]);
    assert!(res.is_err());
}
