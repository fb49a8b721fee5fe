use std::fs::File;
use std::io::{self, BufReader, Write};
use std::os::fd::AsFd;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use seekline::{extract, Navigator, Requests};

#[derive(Debug, Parser)]
#[command(name = "seekline")]
#[command(version, about = "Extract arbitrary lines from standard input by line number")]
struct Cli {
    /// File holding the 1-based line numbers to extract, separated by whitespace
    #[arg(short = 'f', value_name = "FILE")]
    requests: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("seekline: {}", e);
        process::exit(2);
    }
}

fn run(cli: &Cli) -> seekline::Result<()> {
    let requests = Requests::new(BufReader::new(File::open(&cli.requests)?));

    // Standard input, reopened as a plain file handle. Whether it can actually seek depends on
    // what the descriptor points at; a pipe fails on the first out-of-order request.
    let data = File::from(io::stdin().as_fd().try_clone_to_owned()?);
    let mut navigator = Navigator::new(data);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    extract(requests, &mut navigator, &mut out)?;
    out.flush()?;

    Ok(())
}
