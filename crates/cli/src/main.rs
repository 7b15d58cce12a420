use std::error::Error;

use clap::Parser;

mod formats;
mod identify;

use formats::Formats;
use identify::Identify;

// Avoid musl's default allocator due to lackluster performance
// https://nickb.dev/blog/default-musl-allocator-considered-harmful-to-performance
#[cfg(all(target_env = "musl", target_arch = "x86_64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Identify spectral FITS files from their header.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Print the format of each given file
    #[clap(name = "identify")]
    Identify(Identify),
    /// List the known formats and their signatures
    #[clap(name = "formats")]
    Formats(Formats),
}

impl Args {
    fn exec(self) -> Result<(), Box<dyn Error>> {
        match self {
            Self::Identify(args) => args.exec(),
            Self::Formats(args) => args.exec(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    args.exec()
}
