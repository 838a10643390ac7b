// src/cli.rs
//
// Headless front end: inspect one URL, print the report.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::options::InspectOptions,
    core::{ValidationError, deeplink::gsc_inspect_link, normalize, open::{OpenError, open_in_browser}},
    inspect::SimulatedInspector,
    report,
    runner::{Finished, Runner, Start},
};

const HELP: &str = "\
Usage: cli [options] <url>

Simulated Search Console URL inspection for a single URL.

Options:
  --delay-ms <n>   artificial wait before the result (default 1000)
  --no-delay       same as --delay-ms 0
  --link           print the Search Console deep link and exit
  --open           also open the deep link in the default browser
  -h, --help       show this help";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n\n{help}", help = HELP)]
    Usage(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Open(#[from] OpenError),

    #[error("Inspection failed: {0}")]
    Inspection(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub url: String,
    pub inspect: InspectOptions,
    pub open: bool,
    pub link_only: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Inspect(CliArgs),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut url: Option<String> = None;
    let mut inspect = InspectOptions::default();
    let mut open = false;
    let mut link_only = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--delay-ms" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --delay-ms"))?;
                inspect.delay_ms = v
                    .parse()
                    .map_err(|_| usage(format!("Invalid --delay-ms value: {v}")))?;
            }
            "--no-delay" => inspect.delay_ms = 0,
            "--open" => open = true,
            "--link" => link_only = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with("--") => return Err(usage(format!("Unknown arg: {flag}"))),
            _ if url.is_some() => {
                return Err(usage("Only one URL per run"));
            }
            _ => url = Some(a),
        }
    }

    let url = url.ok_or_else(|| usage("Missing <url>"))?;
    Ok(Command::Inspect(CliArgs { url, inspect, open, link_only }))
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}

pub fn run<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let args = match parse_args(args)? {
        Command::Help => {
            println!("{HELP}");
            return Ok(());
        }
        Command::Inspect(a) => a,
    };

    if args.link_only {
        let url = normalize(&args.url)?;
        let link = gsc_inspect_link(&url);
        println!("{link}");
        if args.open {
            open_in_browser(&link)?;
        }
        return Ok(());
    }

    let inspector = SimulatedInspector::from_options(&args.inspect);
    let mut runner = Runner::new(Arc::new(inspector));

    let url = match runner.start(&args.url, || {})? {
        Start::Started(u) => u,
        Start::Busy => return Err(CliError::Inspection(s!("runner busy"))),
    };
    eprintln!("Checking: {url}");

    match runner.wait() {
        Some(Finished::Done(c)) => {
            print!("{}", report::render(&c.url, &c.result));
            if args.open {
                open_in_browser(&gsc_inspect_link(&c.url))?;
            }
            Ok(())
        }
        Some(Finished::Failed(e)) => Err(CliError::Inspection(e)),
        None => Err(CliError::Inspection(s!("no inspection was started"))),
    }
}
