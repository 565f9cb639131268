mod prompter;

use anyhow::Result;
use clap::Parser;
use opendag_core::{DEFAULT_SCORE_FILE, ScoreFile, run_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::prompter::CliPrompter;

#[derive(Parser)]
#[command(name = "score")]
#[command(version, about = "Interactive score tracker writing to scores.txt")]
struct Args {}

fn main() -> Result<()> {
    // Logs go to stderr so prompts stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("score_cli=warn".parse()?)
                .add_directive("opendag_core=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    let file = ScoreFile::new(DEFAULT_SCORE_FILE);
    let mut prompter = CliPrompter::stdio();
    let ledger = run_session(&mut prompter, &file)?;
    info!("Saved {} scores to {:?}", ledger.len(), file.path());

    Ok(())
}
