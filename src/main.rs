use next_keygen::KeyPair;
use ring::rand::SystemRandom;
use std::{io::stdout, process::ExitCode};
use tracing::Level;

fn run() -> anyhow::Result<()> {
    let rng = SystemRandom::new();
    let key_pair = KeyPair::generate(&rng)?;

    next_keygen::write_to(&mut stdout().lock(), &key_pair)?;

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
