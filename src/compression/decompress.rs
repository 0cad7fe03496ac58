use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::info;

use super::codec_by_name;
use super::compress::{output_path, split_name, write_output};
use crate::error::{Error, Result};
use crate::tools::cli::HufOpts;

/// What decompressing (or testing) one file produced.
#[derive(Debug, Clone)]
pub struct DecompressionReport {
    /// None when the file was only tested.
    pub output: Option<PathBuf>,
    pub input: PathBuf,
    pub decompressed_size: usize,
    pub elapsed: Duration,
}

impl Display for DecompressionReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.output {
            Some(output) => write!(
                f,
                "{}: {} bytes, {:.4} seconds",
                output.display(),
                self.decompressed_size,
                self.elapsed.as_secs_f64()
            ),
            None => write!(
                f,
                "{}: ok ({} bytes), {:.4} seconds",
                self.input.display(),
                self.decompressed_size,
                self.elapsed.as_secs_f64()
            ),
        }
    }
}

/// The pieces of a `<stem>_<codec>_compressed<.ext>` file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedName {
    pub stem: String,
    pub codec: String,
    pub ext: String,
}

impl CompressedName {
    /// Split the file name of `path`. The stem may itself contain underscores.
    pub fn parse(path: &Path) -> Result<Self> {
        let bad_name = || Error::BadFileName(path.display().to_string());
        let (name, ext) = split_name(path);
        let mut parts = name.rsplitn(3, '_');
        let (tag, codec, stem) = match (parts.next(), parts.next(), parts.next()) {
            (Some(tag), Some(codec), Some(stem)) => (tag, codec, stem),
            _ => return Err(bad_name()),
        };
        if tag != "compressed" || codec.is_empty() {
            return Err(bad_name());
        }
        Ok(CompressedName {
            stem: stem.to_string(),
            codec: codec.to_string(),
            ext,
        })
    }

    /// `<stem>_decompressed<.ext>`
    pub fn decompressed_name(&self) -> String {
        format!("{}_decompressed{}", self.stem, self.ext)
    }
}

/// Decompress every file named in opts, or only verify them when testing.
pub fn decompress(opts: &HufOpts, test_only: bool) -> Result<Vec<DecompressionReport>> {
    let mut reports = Vec::with_capacity(opts.files.len());

    for path in &opts.files {
        let name = CompressedName::parse(path)?;
        let codec = codec_by_name(&name.codec)?;
        let data = fs::read(path)?;
        info!("Decompressing {} ({} bytes) with {}.", path.display(), data.len(), codec.name());

        let start = Instant::now();
        let decompressed = codec.decode(&data)?;
        let elapsed = start.elapsed();

        let output = if test_only {
            None
        } else {
            let output = output_path(path, opts.output_dir.as_deref(), &name.decompressed_name());
            write_output(&output, &decompressed, opts.force_overwrite)?;
            Some(output)
        };

        let report = DecompressionReport {
            output,
            input: path.clone(),
            decompressed_size: decompressed.len(),
            elapsed,
        };
        info!("{}", report);
        reports.push(report);
    }
    Ok(reports)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_name_test() {
        let name = CompressedName::parse(Path::new("up/my_notes_huffman_compressed.txt")).unwrap();
        assert_eq!(
            name,
            CompressedName {
                stem: "my_notes".to_string(),
                codec: "huffman".to_string(),
                ext: ".txt".to_string(),
            }
        );
        assert_eq!(name.decompressed_name(), "my_notes_decompressed.txt");
    }

    #[test]
    fn parse_name_without_extension_test() {
        let name = CompressedName::parse(Path::new("data_rle_compressed")).unwrap();
        assert_eq!(name.codec, "rle");
        assert_eq!(name.decompressed_name(), "data_decompressed");
    }

    #[test]
    fn bad_names_test() {
        for bad in ["plain.txt", "huffman_compressed.txt", "a_huffman_packed.txt", "a__compressed"] {
            assert!(
                matches!(CompressedName::parse(Path::new(bad)), Err(Error::BadFileName(_))),
                "{}",
                bad
            );
        }
    }
}
