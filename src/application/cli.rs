use std::io;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use owo_colors::OwoColorize;
use strum::VariantNames;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AssistantName;
use crate::domain::services::actions::help_text;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .short('u')
        .long(ConfigKey::Username.to_string())
        .env("HOMEFIXI_USERNAME")
        .num_args(1)
        .help(format!(
            "The name shown on your side of the conversation. [default: {}]",
            Config::default(ConfigKey::Username)
        ));
}

fn arg_assistant() -> Arg {
    return Arg::new(ConfigKey::Assistant.to_string())
        .short('a')
        .long(ConfigKey::Assistant.to_string())
        .env("HOMEFIXI_ASSISTANT")
        .num_args(1)
        .help(format!(
            "The assistant that answers repair questions. [default: {}]",
            Config::default(ConfigKey::Assistant)
        ))
        .value_parser(PossibleValuesParser::new(AssistantName::VARIANTS));
}

fn arg_response_delay() -> Arg {
    return Arg::new(ConfigKey::ResponseDelay.to_string())
        .long(ConfigKey::ResponseDelay.to_string())
        .env("HOMEFIXI_RESPONSE_DELAY")
        .num_args(1)
        .help(format!(
            "Simulated thinking time in milliseconds before a reply arrives. [default: {}]",
            Config::default(ConfigKey::ResponseDelay)
        ));
}

fn arg_starting_credits() -> Arg {
    return Arg::new(ConfigKey::StartingCredits.to_string())
        .long(ConfigKey::StartingCredits.to_string())
        .env("HOMEFIXI_STARTING_CREDITS")
        .num_args(1)
        .help(format!(
            "Credits available when the session starts. [default: {}]",
            Config::default(ConfigKey::StartingCredits)
        ));
}

fn arg_max_credits() -> Arg {
    return Arg::new(ConfigKey::MaxCredits.to_string())
        .long(ConfigKey::MaxCredits.to_string())
        .env("HOMEFIXI_MAX_CREDITS")
        .num_args(1)
        .help(format!(
            "Cap on session credits. [default: {}]",
            Config::default(ConfigKey::MaxCredits)
        ));
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return format!("CHAT {line}").underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("homefixi")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .arg(arg_username())
        .arg(arg_assistant())
        .arg(arg_response_delay())
        .arg(arg_starting_credits())
        .arg(arg_max_credits());
}

/// Returns true when the chat UI should start, false when a subcommand
/// already did its work.
pub fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        _ => {
            Config::load(vec![&matches])?;
        }
    }

    return Ok(true);
}
