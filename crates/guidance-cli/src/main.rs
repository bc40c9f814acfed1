//! `guidance`: terminal front end of the career guidance self-assessment

mod commands;
mod interactive;
mod logging;
mod render;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use guidance_session::{GuidanceConfig, Navigator};
use guidance_store::RemoteConfig;
use interactive::Console;
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("guidance")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Career guidance self-assessment")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory of the local snapshot (overrides config)"),
        )
        .arg(
            Arg::new("remote-url")
                .long("remote-url")
                .global(true)
                .help("Base URL of the remote mirror (overrides config)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter directives, e.g. debug or guidance_store=trace"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(Command::new("run").about("Start an interactive session"))
        .subcommand(
            Command::new("report")
                .about("Score the stored answers of one student")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("class").long("class").required(true))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("catalog").about("List the instruments"))
        .subcommand(
            Command::new("registry")
                .about("Inspect or extend the class registry")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List registered names")
                        .arg(Arg::new("class").long("class")),
                )
                .subcommand(
                    Command::new("add")
                        .about("Register a name in a class")
                        .arg(Arg::new("class").long("class").required(true))
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<GuidanceConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => GuidanceConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GuidanceConfig::default(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }
    if let Some(url) = matches.get_one::<String>("remote-url") {
        let remote = match config.remote.take() {
            Some(remote) => RemoteConfig {
                base_url: url.clone(),
                ..remote
            },
            None => RemoteConfig::new(url.clone()),
        };
        config = config.with_remote(remote);
    }
    Ok(config)
}

fn arg<'a>(matches: &'a ArgMatches, id: &str) -> anyhow::Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("missing --{id}"))
}

async fn dispatch(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(matches)?;
    let mut stdout = std::io::stdout().lock();

    match matches.subcommand() {
        Some(("run", _)) => {
            let store = commands::open_store(&config)?;
            let mut nav = Navigator::new(store, config.seed_registry()).await;
            let mut console = Console::new(std::io::stdin().lock(), stdout);
            interactive::session(&mut nav, &mut console).await
        }
        Some(("report", args)) => {
            let store = commands::open_store(&config)?;
            commands::report(
                store.as_ref(),
                arg(args, "class")?,
                arg(args, "name")?,
                args.get_flag("json"),
                &mut stdout,
            )
            .await
        }
        Some(("catalog", _)) => commands::list_catalog(&mut stdout),
        Some(("registry", args)) => {
            let store = commands::open_store(&config)?;
            match args.subcommand() {
                Some(("list", list)) => {
                    let class = list.get_one::<String>("class").map(String::as_str);
                    commands::list_registry(store.as_ref(), &config, class, &mut stdout).await
                }
                Some(("add", add)) => {
                    commands::add_to_registry(
                        store.as_ref(),
                        arg(add, "class")?,
                        arg(add, "name")?,
                        &mut stdout,
                    )
                    .await
                }
                _ => Ok(()),
            }
        }
        _ => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();

    let level = matches.get_one::<String>("log-level").map(String::as_str);
    if let Err(e) = logging::init(level, matches.get_flag("log-json")) {
        eprintln!("cannot initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match dispatch(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("command failed: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
