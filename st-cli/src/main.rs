#![cfg_attr(coverage, feature(coverage_attribute))]
mod delete;

use clap::{
    crate_version,
    Parser,
    Subcommand,
};
use st_core::logging;
use st_core::prelude::*;

#[derive(Parser)]
#[command(about = "command-line client for a storyteller server", version, propagate_version = true)]
struct StCommandRoot {
    #[command(subcommand)]
    subcommand: StSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum StSubcommand {
    #[command(
        about = "delete an entity (asks for confirmation first)",
        visible_aliases = &["d", "del", "rm"],
    )]
    Delete(delete::Args),

    #[command(about = "stctl version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = StCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        StSubcommand::Delete(args) => delete::cmd(args).await,
        StSubcommand::Version => {
            println!("stctl {}", crate_version!());
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests;
