// src/bin/cli.rs
use gsc_inspect::{
    cli,
    log::{self, LogTarget},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(LogTarget::Terminal);

    cli::run(std::env::args().skip(1))?;
    Ok(())
}
