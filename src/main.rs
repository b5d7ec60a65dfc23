use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use navhistory::config::Config;
use navhistory::script::loader::{load_script_file, load_script_from_stdin};
use navhistory::script::ScriptRunner;

/// navhistory - replay editor events through back/forward navigation history
#[derive(Parser)]
#[command(name = "navhistory")]
#[command(version)]
#[command(about = "Replay editor events through back/forward navigation history", long_about = None)]
struct Cli {
    /// Script to replay (omit to read from stdin; `.gz` files are decompressed)
    script: Option<PathBuf>,

    /// Entries kept in each of the back and forward stacks
    #[arg(long)]
    history_size: Option<usize>,

    /// Movements within this many lines are not recorded
    #[arg(long)]
    line_threshold: Option<usize>,

    /// Do not skip entries whose file is missing
    #[arg(long)]
    no_skip_stale: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // CLI flags override the config file
    let mut config = Config::load();
    if let Some(size) = cli.history_size {
        config.history_size = size;
    }
    if let Some(threshold) = cli.line_threshold {
        config.line_threshold = threshold;
    }
    if cli.no_skip_stale {
        config.skip_stale = false;
    }
    log::debug!("using {:?}", config);

    let commands = match cli.script {
        Some(path) => load_script_file(&path)?,
        None => {
            if io::stdin().is_terminal() {
                anyhow::bail!("No script given and stdin is a terminal");
            }
            load_script_from_stdin()?
        }
    };

    let mut runner = ScriptRunner::new(&config);
    let result = runner.run(&commands);

    // Print what ran before any failure
    for line in runner.output() {
        println!("{}", line);
    }

    result
}
