mod chronometer;
mod cli;
mod configuration;
mod hash;
mod logger;

use anyhow::{Context, Error};
use base58::Encoding;
use clap::Parser;
use std::{
    io::{self, Read, Write},
    process,
};

use self::{
    cli::Opts,
    configuration::{Configuration, Mode},
    logger::configure_logger,
};

fn main() {
    let opts = Opts::parse();
    if let Err(error) = run(&opts) {
        eprintln!("{:#}", error);
        process::exit(1);
    }
}

fn run(opts: &Opts) -> Result<(), Error> {
    let configuration = Configuration::new(opts)?;
    configure_logger(configuration.log_level());

    let scheme = configuration.scheme();
    let mut buffer = Vec::new();
    io::stdin().lock().read_to_end(&mut buffer).context("failed to read stdin")?;
    log::debug!("read {} bytes ({} padding)", buffer.len(), scheme);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    match configuration.mode() {
        Mode::Decode => {
            let output = scheme.decode(trim(&buffer))?;
            log::debug!("decoded {} bytes", output.len());
            stdout.write_all(&output)?;
        }
        Mode::Encode { hash } => {
            if let Some(algorithm) = hash {
                buffer = algorithm.digest(&buffer);
                log::debug!("hashed input with {}", algorithm);
            }
            let output = scheme.encode(&buffer);
            log::debug!("encoded {} symbols", output.len());
            writeln!(stdout, "{}", output)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn trim(input: &[u8]) -> &[u8] {
    let start = input.iter().position(|value| !value.is_ascii_whitespace()).unwrap_or(input.len());
    let end = input.iter().rposition(|value| !value.is_ascii_whitespace()).map_or(start, |index| index + 1);
    &input[start..end]
}
