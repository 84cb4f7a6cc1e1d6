use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use sudogen::Value;

const DEFAULT_SIZE: usize = 9;
const DEFAULT_BOX_SIZE: usize = 3;
const DEFAULT_OUTPUT_PATH: &str = "output/solutions.jsonl";
const DEFAULT_CHUNK_SIZE: usize = 1000;
const DEFAULT_TIME_BUDGET_MS: u64 = 30;

#[derive(Clone)]
pub(crate) struct Options {
    command: Command,
}

#[derive(Clone)]
pub(crate) enum Command {
    Export(Export),
    Session(Session),
}

/// Enumerate every board and persist the lot (`sudogen export`).
#[derive(Clone)]
pub(crate) struct Export {
    pub size: usize,
    pub box_size: usize,
    pub max_value: Value,
    pub output_path: PathBuf,
    pub chunk_size: usize,
    pub quiet: bool,
}

/// Produce boards one at a time, interactively (`sudogen session`).
#[derive(Clone)]
pub(crate) struct Session {
    pub size: usize,
    pub box_size: usize,
    pub max_value: Value,
    pub auto_confirm: bool,
    pub quiet: bool,
    pub time_budget_ms: u64,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let command = match matches.subcommand() {
            ("export", Some(matches)) => {
                let (size, box_size, max_value) = grid_options(matches)?;
                Command::Export(Export {
                    size,
                    box_size,
                    max_value,
                    output_path: matches
                        .value_of("output_path")
                        .map_or_else(|| DEFAULT_OUTPUT_PATH.into(), PathBuf::from),
                    chunk_size: parse_arg(matches, "chunk_size", DEFAULT_CHUNK_SIZE)?,
                    quiet: matches.is_present("quiet"),
                })
            }
            ("session", Some(matches)) => {
                let (size, box_size, max_value) = grid_options(matches)?;
                Command::Session(Session {
                    size,
                    box_size,
                    max_value,
                    auto_confirm: matches.is_present("yes"),
                    quiet: matches.is_present("quiet"),
                    time_budget_ms: parse_arg(matches, "time_budget", DEFAULT_TIME_BUDGET_MS)?,
                })
            }
            _ => unreachable!("subcommand is required"),
        };
        Ok(Self { command })
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

fn grid_options(matches: &ArgMatches<'_>) -> Result<(usize, usize, Value)> {
    let size = parse_arg(matches, "size", DEFAULT_SIZE)?;
    let box_size = parse_arg(matches, "box_size", DEFAULT_BOX_SIZE)?;
    let max_value = parse_arg(matches, "max_value", size as Value)?;
    Ok((size, box_size, max_value))
}

fn parse_arg<T: std::str::FromStr>(
    matches: &ArgMatches<'_>,
    name: &str,
    default: T,
) -> Result<T> {
    match matches.value_of(name) {
        None => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| anyhow!("invalid value for --{}: \"{}\"", name.replace('_', "-"), s)),
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, SubCommand};

    App::new("sudogen")
        .about("Generate complete Sudoku-style boards")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("export")
                .about("enumerate every board and save them all")
                .arg(size_arg())
                .arg(box_size_arg())
                .arg(max_value_arg())
                .arg(
                    Arg::with_name("output_path")
                        .short("o")
                        .long("output-path")
                        .takes_value(true)
                        .value_name("PATH")
                        .help("file to write the solution rows to"),
                )
                .arg(
                    Arg::with_name("chunk_size")
                        .long("chunk-size")
                        .takes_value(true)
                        .value_name("COUNT")
                        .help("number of boards per insert batch"),
                )
                .arg(quiet_arg()),
        )
        .subcommand(
            SubCommand::with_name("session")
                .about("produce boards one at a time with pause and resume")
                .arg(size_arg())
                .arg(box_size_arg())
                .arg(max_value_arg())
                .arg(
                    Arg::with_name("yes")
                        .short("y")
                        .long("yes")
                        .help("keep producing boards without asking"),
                )
                .arg(
                    Arg::with_name("time_budget")
                        .long("time-budget")
                        .takes_value(true)
                        .value_name("MILLIS")
                        .help("time budget per search step"),
                )
                .arg(quiet_arg()),
        )
}

fn size_arg() -> clap::Arg<'static, 'static> {
    clap::Arg::with_name("size")
        .short("s")
        .long("size")
        .takes_value(true)
        .value_name("N")
        .help("width and height of the grid")
}

fn box_size_arg() -> clap::Arg<'static, 'static> {
    clap::Arg::with_name("box_size")
        .short("b")
        .long("box-size")
        .takes_value(true)
        .value_name("B")
        .help("width and height of each box; must divide the grid size")
}

fn max_value_arg() -> clap::Arg<'static, 'static> {
    clap::Arg::with_name("max_value")
        .short("m")
        .long("max-value")
        .takes_value(true)
        .value_name("M")
        .help("largest cell value; defaults to the grid size")
}

fn quiet_arg() -> clap::Arg<'static, 'static> {
    clap::Arg::with_name("quiet")
        .short("q")
        .long("quiet")
        .help("suppress per-board output")
}
