mod cli;
mod logging;

use crate::cli::{Cli, Command, Output};
use anyhow::{Context, bail};
use apex_legends_api::{ApexApi, Payload, describe};
use clap::Parser;
use log::warn;
use serde::Serialize;

fn main() -> anyhow::Result<()> {
    better_panic::install();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let api = ApexApi::from_config(cli.api_config()).context("could not set up the API client")?;

    run(&api, cli.command, cli.output)
}

fn run(api: &ApexApi, command: Command, output: Output) -> anyhow::Result<()> {
    match command {
        Command::Stats { target, skip_rank } => {
            let payload = api.player_stats(&target.identity(), target.platform, skip_rank)?;
            emit_payload("stats", payload, output)
        }
        Command::Events { target, action } => {
            let payload = if target.uid {
                api.events_by_uid(&target.player, target.platform, action)?
            } else {
                api.events(&target.player, target.platform, action)?
            };
            emit_payload("events", payload, output)
        }
        Command::Origin { player, all_hits } => {
            let accounts = api.origin_accounts(&player, all_hits)?;
            emit("origin", &accounts, output)
        }
        Command::Player { target } => {
            let player = if target.uid {
                api.get_player_by_uid(&target.player, target.platform)?
            } else {
                api.get_player(&target.player, target.platform)?
            };
            if !player.history_tracked {
                warn!("{} is not tracked; no match history available", target.player);
            }
            emit("player", &player, output)
        }
        Command::Tracked => {
            let tracked = api.tracked_players()?;
            emit("tracked", &tracked, output)
        }
        Command::Purge { yes } => {
            if !yes {
                bail!("purge deletes every tracked player; pass --yes to confirm");
            }
            let deleted = api.delete_all_tracked_players()?;
            println!("deleted {deleted} tracked players");
            Ok(())
        }
    }
}

fn emit_payload(label: &str, payload: Payload, output: Output) -> anyhow::Result<()> {
    match payload {
        Payload::Records(records) => emit(label, &records, output),
        Payload::Text(text) => {
            println!("{text}");
            Ok(())
        }
    }
}

fn emit<T: Serialize>(label: &str, value: &T, output: Output) -> anyhow::Result<()> {
    let rendered = match output {
        Output::Json => serde_json::to_string_pretty(value)?,
        Output::Text => describe(label, value, false)?,
        Output::Schema => describe(label, value, true)?,
    };
    println!("{rendered}");
    Ok(())
}
