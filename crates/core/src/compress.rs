//! Firmware compression hook.
//!
//! Runs as a post-action after the firmware binary is produced. Writes a
//! gzip-compressed copy next to the binary so the OTA endpoint can serve the
//! smaller image.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use flate2::{Compression, write::GzEncoder};
use serde::Serialize;
use tracing::{debug, info};

use crate::Result;
use crate::env::BuildEnv;

/// Sizes recorded after compressing a firmware image.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
}

impl CompressionReport {
    /// Compressed size as a percentage of the original size.
    pub fn ratio_percent(&self) -> f64 {
        self.compressed_size as f64 / self.original_size as f64 * 100.0
    }
}

/// Gzip-compress the firmware binary next to itself.
///
/// Reads `<build_dir>/<progname>.bin` and writes `<build_dir>/<progname>.bin.gz`,
/// overwriting any previous compressed copy. The source binary is left
/// untouched. The binary must already exist; any I/O failure propagates.
pub fn compress_firmware(env: &BuildEnv) -> Result<CompressionReport> {
    let source = env.firmware_path();
    let mut dest = source.clone().into_os_string();
    dest.push(".gz");
    let dest = PathBuf::from(dest);

    debug!(source = %source.display(), dest = %dest.display(), "compressing firmware");

    let mut reader = BufReader::new(File::open(&source)?);
    let mut writer = BufWriter::new(File::create(&dest)?);
    let mut encoder = GzEncoder::new(&mut writer, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;
    writer.flush()?;

    let original_size = fs::metadata(&source)?.len();
    let compressed_size = fs::metadata(&dest)?.len();
    info!(original_size, compressed_size, "firmware compressed");

    Ok(CompressionReport {
        source,
        dest,
        original_size,
        compressed_size,
    })
}
