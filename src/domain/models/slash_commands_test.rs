use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse(" ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_invalid_prefix() {
    assert!(SlashCommand::parse("!q").is_none());
}

#[test]
fn it_parse_plain_prompt() {
    assert!(SlashCommand::parse("my faucet is leaking").is_none());
}

#[test]
fn it_is_short_quit() {
    assert!(SlashCommand::parse("/q").unwrap().is_quit());
}

#[test]
fn it_is_exit() {
    assert!(SlashCommand::parse("/exit").unwrap().is_quit());
}

#[test]
fn it_is_new_job() {
    assert!(SlashCommand::parse("/new").unwrap().is_new_job());
    assert!(SlashCommand::parse("/n").unwrap().is_new_job());
}

#[test]
fn it_is_job_select_with_index() {
    let cmd = SlashCommand::parse("/job 3").unwrap();
    assert!(cmd.is_job_select());
    assert_eq!(cmd.args, vec!["3"]);
}

#[test]
fn it_is_not_job_select_without_index() {
    assert!(SlashCommand::parse("/job").is_none());
}

#[test]
fn it_is_rename_with_multi_word_title() {
    let cmd = SlashCommand::parse("/rename Kitchen sink drip").unwrap();
    assert!(cmd.is_rename());
    assert_eq!(cmd.args.join(" "), "Kitchen sink drip");
}

#[test]
fn it_is_pin_without_index() {
    let cmd = SlashCommand::parse("/pin").unwrap();
    assert!(cmd.is_pin());
    assert!(cmd.args.is_empty());
}

#[test]
fn it_is_pin_with_index() {
    let cmd = SlashCommand::parse("/p 2").unwrap();
    assert!(cmd.is_pin());
    assert_eq!(cmd.args, vec!["2"]);
}

#[test]
fn it_is_delete() {
    assert!(SlashCommand::parse("/delete").unwrap().is_delete());
    assert!(SlashCommand::parse("/d 4").unwrap().is_delete());
}

#[test]
fn it_is_job_type() {
    let cmd = SlashCommand::parse("/type Home Appliances").unwrap();
    assert!(cmd.is_job_type());
    assert_eq!(cmd.args.join(" "), "Home Appliances");
}

#[test]
fn it_is_appliance() {
    let cmd = SlashCommand::parse("/appliance GTW465 SN-100").unwrap();
    assert!(cmd.is_appliance());
    assert_eq!(cmd.args, vec!["GTW465", "SN-100"]);
}

#[test]
fn it_is_image() {
    let cmd = SlashCommand::parse("/image photos/leak.jpg").unwrap();
    assert!(cmd.is_image());
    assert_eq!(cmd.args, vec!["photos/leak.jpg"]);
    assert!(SlashCommand::parse("/i pic.png").unwrap().is_image());
}

#[test]
fn it_is_regenerate() {
    assert!(SlashCommand::parse("/regen").unwrap().is_regenerate());
}

#[test]
fn it_is_help() {
    assert!(SlashCommand::parse("/h").unwrap().is_help());
    assert!(SlashCommand::parse("/help").unwrap().is_help());
}

#[test]
fn it_collapses_repeated_spaces_in_args() {
    let cmd = SlashCommand::parse("/rename   Dripping   faucet").unwrap();
    assert_eq!(cmd.args.join(" "), "Dripping faucet");
}
