use anyhow::Result;
use clap::Parser;
use swordswing::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    swordswing::app::run(&args)
}
