use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info};

use super::codec_by_name;
use crate::error::{Error, Result};
use crate::tools::cli::HufOpts;

/// What compressing one file produced.
#[derive(Debug, Clone)]
pub struct CompressionReport {
    pub output: PathBuf,
    pub original_size: usize,
    pub compressed_size: usize,
    pub elapsed: Duration,
}

impl CompressionReport {
    /// original / compressed. Infinite when the compressed file is empty.
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            f64::INFINITY
        } else {
            self.original_size as f64 / self.compressed_size as f64
        }
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} bytes, ratio {:.2}, {:.4} seconds",
            self.output.display(),
            self.original_size,
            self.compressed_size,
            self.ratio(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Compress every file named in opts with the codec named in opts.
pub fn compress(opts: &HufOpts) -> Result<Vec<CompressionReport>> {
    let codec = codec_by_name(&opts.codec)?;
    let mut reports = Vec::with_capacity(opts.files.len());

    for path in &opts.files {
        let data = fs::read(path)?;
        info!("Compressing {} ({} bytes) with {}.", path.display(), data.len(), codec.name());

        let start = Instant::now();
        let compressed = codec.encode(&data)?;
        let elapsed = start.elapsed();

        let output = output_path(path, opts.output_dir.as_deref(), &compressed_name(path, codec.name()));
        write_output(&output, &compressed, opts.force_overwrite)?;

        let report = CompressionReport {
            output,
            original_size: data.len(),
            compressed_size: compressed.len(),
            elapsed,
        };
        info!("{}", report);
        reports.push(report);
    }
    Ok(reports)
}

/// `<stem>_<codec>_compressed<.ext>` for the file at `path`.
pub fn compressed_name(path: &Path, codec: &str) -> String {
    let (stem, ext) = split_name(path);
    format!("{}_{}_compressed{}", stem, codec, ext)
}

/// File stem and extension (with its dot, or empty) of `path`.
pub(crate) fn split_name(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, ext)
}

/// Where a file called `name` derived from `input` is written.
pub(crate) fn output_path(input: &Path, output_dir: Option<&Path>, name: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Write `data` to `path`, refusing to replace an existing file unless `force` is set.
pub(crate) fn write_output(path: &Path, data: &[u8], force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::OutputExists(path.display().to_string()));
    }
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(path, data)?;
    debug!("Wrote {} bytes to {}.", data.len(), path.display());
    Ok(())
}
