mod app;
mod cli;
mod effects;
mod logging;

use anyhow::Result;

fn main() -> Result<()> {
    let options = match cli::CliOptions::parse(std::env::args().skip(1))? {
        Some(options) => options,
        None => return Ok(()), // --help
    };
    logging::initialize(logging::LogDestination::File);
    app::run(options)
}
