#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use itertools::Itertools;
use sudogen::generate::BoardGenerator;
use sudogen::geometry::Geometry;
use sudogen::search::{BoardSearch, SearchOutcome};
use sudogen::Value;

use crate::options::{Command, Export, Options, Session};
use crate::printer::format_board;
use crate::store::{BoardCache, SolutionTable};

mod options;
mod printer;
mod store;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    match options.command() {
        Command::Export(export) => run_export(export),
        Command::Session(session) => run_session(session),
    }
}

fn run_export(options: &Export) -> Result<()> {
    let geometry = Geometry::new(options.size, options.box_size, options.max_value)?;
    let cache_key = format!(
        "{}_{}_{}_",
        options.size, options.box_size, options.max_value
    );

    println!("Caching the boards...");
    let mut cache = BoardCache::new();
    let start = Instant::now();
    let mut total: u64 = 0;
    for board in BoardGenerator::new(&geometry) {
        cache.forever(format!("{}{}", cache_key, total), board.to_vec());
        total += 1;
        if !options.quiet {
            progress_line(&format!(
                "Total {n} x {n} boards cached: {total}",
                n = options.size,
                total = total
            ))?;
        }
    }
    if !options.quiet {
        println!();
    }
    report_elapsed(start.elapsed(), total);

    println!("Saving them to {}...", options.output_path.display());
    let mut table = SolutionTable::create(&options.output_path)?;
    let chunk_size = options.chunk_size.max(1);
    let start = Instant::now();
    let mut saved: u64 = 0;
    while !cache.is_empty() {
        let mut chunk = Vec::with_capacity(chunk_size);
        while chunk.len() < chunk_size && saved + chunk.len() as u64 != total {
            let key = format!("{}{}", cache_key, saved + chunk.len() as u64);
            // keys below `total` are always present; staged once, pulled once
            let board = cache.pull(&key).expect("staged board missing");
            chunk.push(flatten(&board));
        }
        table.insert(&chunk)?;
        saved += chunk.len() as u64;
        if !options.quiet {
            progress_line(&format!(
                "Total {n} x {n} boards saved: {saved}",
                n = options.size,
                saved = saved
            ))?;
        }
    }
    table.finish()?;
    if !options.quiet {
        println!();
    }
    report_elapsed(start.elapsed(), saved);
    Ok(())
}

fn run_session(options: &Session) -> Result<()> {
    let geometry = Geometry::new(options.size, options.box_size, options.max_value)?;
    let mut search =
        BoardSearch::with_time_budget(&geometry, Duration::from_millis(options.time_budget_ms));

    println!("Session started.");
    let session_start = Instant::now();
    let mut total: u64 = 0;
    loop {
        let step_start = Instant::now();
        match search.advance() {
            SearchOutcome::Found(board) => {
                total += 1;
                if !options.quiet {
                    println!("{}", format_board(&board, options.box_size));
                    println!("Generated in {:.2}ms", as_millis(step_start.elapsed()));
                }
                if !options.auto_confirm && !confirm("Print another?")? {
                    break;
                }
            }
            SearchOutcome::TimedOut => {
                println!(
                    "Time budget ({}ms) spent before the next board; the search can resume.",
                    options.time_budget_ms
                );
                if !options.auto_confirm && !confirm("Keep searching?")? {
                    break;
                }
            }
            SearchOutcome::Exhausted => {
                println!("No more boards exist.");
                break;
            }
        }
    }
    let elapsed = session_start.elapsed();

    println!("Session ended.");
    println!("Total combinations: {}", total);
    report_elapsed(elapsed, total);
    Ok(())
}

fn flatten(board: &[Value]) -> String {
    board.iter().join("")
}

fn progress_line(message: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    write!(stdout, "\r\x1b[2K{}", message)?;
    stdout.flush()?;
    Ok(())
}

fn report_elapsed(elapsed: Duration, count: u64) {
    let millis = as_millis(elapsed);
    println!("Total time: {:.2}ms", millis);
    println!("Time per board: {:.2}ms", millis / count.max(1) as f64);
}

fn as_millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [Y/n] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim();
    Ok(answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
