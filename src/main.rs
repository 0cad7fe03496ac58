//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use hufzip::compression::compress::compress;
use hufzip::compression::decompress::decompress;
use hufzip::tools::cli::{hufopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Unable to start the terminal logger.");
    }

    let options = hufopts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options)
            .map(|reports| reports.iter().for_each(|report| println!("{}", report))),
        Mode::Unzip => decompress(&options, false)
            .map(|reports| reports.iter().for_each(|report| println!("{}", report))),
        Mode::Test => decompress(&options, true)
            .map(|reports| reports.iter().for_each(|report| println!("{}", report))),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Done.\n");
}
