use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, warn};

use crate::compression::codec_names;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct HufOpts {
    /// Name of the codec used when compressing
    pub codec: String,
    /// Vec of names of files to read for input
    pub files: Vec<PathBuf>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Directory for output files. None puts them next to their input.
    pub output_dir: Option<PathBuf>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HufOpts {
    pub fn new() -> Self {
        Self {
            codec: "huffman".to_string(),
            files: vec![],
            force_overwrite: false,
            op_mode: Mode::Zip,
            output_dir: None,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HufOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A byte-oriented Huffman / RLE file compressor",
    long_about = "
    Compresses each input file with a static Huffman tree (or a simple run length code) and
    writes <name>_<codec>_compressed.<ext> next to it, or into --output-dir. Decompression
    recovers the codec from that file name and writes <name>_decompressed.<ext>.

    Input files are never removed."
)]
pub struct Args {
    /// Files to process
    #[clap(required = true)]
    files: Vec<PathBuf>,

    /// Perform compression on the input files (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test compressed file integrity
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Codec used for compression: huffman or rle
    #[clap(short = 'a', long = "algorithm", default_value = "huffman")]
    algorithm: String,

    /// Write output files into this directory
    #[clap(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Suppress log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u64,
}

impl From<Args> for HufOpts {
    fn from(args: Args) -> Self {
        let mut opts = HufOpts::new();
        opts.files = args.files;
        opts.codec = args.algorithm;
        opts.output_dir = args.output_dir;
        opts.force_overwrite = args.force;

        // Compress beats test beats decompress. Compress is also the default.
        if args.decompress {
            opts.op_mode = Mode::Unzip
        };
        if args.test {
            opts.op_mode = Mode::Test
        };
        if args.compress {
            opts.op_mode = Mode::Zip
        };

        opts.verbose = match (args.quiet, args.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Warnings,
            (false, 1) => Verbosity::Info,
            (false, 2) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        };
        opts
    }
}

/// Parse the command line, set the log level and report the resulting options.
pub fn hufopts_init() -> HufOpts {
    let opts = HufOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.op_mode == Mode::Zip {
        info!("Codec set to {} (available: {})", opts.codec, codec_names().join(", "));
    }
    match &opts.output_dir {
        Some(dir) => info!("Writing output into {}", dir.display()),
        None => info!("Writing output next to each input file"),
    }
    if opts.force_overwrite {
        warn!("Forcing file overwriting")
    };
    info!("---- Initialization End ----\n");
    opts
}
