use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use fact_counter::config::Config;
use fact_counter::counter::{CounterAction, CounterState};
use fact_counter::logging::init_tracing;
use fact_counter::store::Store;

#[derive(Parser, Debug)]
#[command(name = "fact-counter")]
#[command(about = "Headless driver for the effect-driven counter", long_about = None)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the fact service base URL
    #[arg(long)]
    facts_url: Option<String>,

    /// Override the timer interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Dispatch(CounterAction),
    Show,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Option<Input> {
    let word = line.trim();
    let input = match word {
        "" => return None,
        "+" | "inc" => Input::Dispatch(CounterAction::Increment),
        "-" | "dec" => Input::Dispatch(CounterAction::Decrement),
        "fact" => Input::Dispatch(CounterAction::RequestFact),
        "timer" => Input::Dispatch(CounterAction::ToggleTimer),
        "state" => Input::Show,
        "quit" | "q" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    };
    Some(input)
}

fn describe(state: &CounterState) -> String {
    let mut line = format!("count={}", state.count);
    if state.is_timer_on {
        line.push_str(" timer=on");
    }
    if state.is_loading {
        line.push_str(" loading");
    }
    if let Some(fact) = &state.fact {
        line.push_str(&format!(" fact=\"{}\"", fact));
    }
    line
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    if let Some(url) = &cli.facts_url {
        config.facts.base_url = url.clone();
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.timer.interval_ms = interval_ms;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let store = Store::live(&config).context("building fact client")?;

    let mut changes = store.subscribe();
    let printer = tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let line = describe(&changes.borrow_and_update());
            println!("{}", line);
        }
    });

    println!("{}", describe(&store.state()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            None => {}
            Some(Input::Dispatch(action)) => store.submit(action)?,
            Some(Input::Show) => println!("{}", describe(&store.state())),
            Some(Input::Quit) => break,
            Some(Input::Unknown(word)) => {
                eprintln!("unknown command '{}' (try + - fact timer state quit)", word)
            }
        }
    }

    store.shutdown().await?;
    printer.abort();
    Ok(())
}
