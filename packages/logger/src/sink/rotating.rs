//! Size-rotated log file
//!
//! When a write would push the active file past the size limit, the file is
//! moved to `<path>.1` (gzip-compressed to `<path>.1.gz` when enabled), older
//! backups shift up by one, and anything beyond `max_backups` is deleted.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default size limit in megabytes
pub const DEFAULT_MAX_SIZE_MB: u64 = 100;

/// Default number of rotated files kept
pub const DEFAULT_MAX_BACKUPS: usize = 7;

/// Rotation settings for a [`RotatingFile`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Active log file
    pub path: PathBuf,
    /// Size limit of the active file in bytes
    pub max_size_bytes: u64,
    /// Rotated files kept; 0 discards the old file on rotation
    pub max_backups: usize,
    /// Gzip rotated files
    pub compress: bool,
}

impl RotationPolicy {
    /// 100 MB, 7 backups, compressed
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            max_size_bytes: DEFAULT_MAX_SIZE_MB * 1024 * 1024,
            max_backups: DEFAULT_MAX_BACKUPS,
            compress: true,
        }
    }

    /// Set the size limit in bytes
    #[must_use]
    pub fn with_max_size_bytes(mut self, bytes: u64) -> Self {
        self.max_size_bytes = bytes;
        self
    }

    /// Set the number of rotated files kept
    #[must_use]
    pub fn with_max_backups(mut self, backups: usize) -> Self {
        self.max_backups = backups;
        self
    }

    /// Enable or disable gzip of rotated files
    #[must_use]
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Path of the `n`th rotated file, 1 being the newest
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let suffix = if self.compress { ".gz" } else { "" };
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{n}{suffix}"));
        PathBuf::from(name)
    }
}

/// Append-only file writer that rotates by size
#[derive(Debug)]
pub struct RotatingFile {
    policy: RotationPolicy,
    file: File,
    size: u64,
}

impl RotatingFile {
    /// Open (or create) the active file, continuing from its current size
    pub fn open(policy: RotationPolicy) -> io::Result<Self> {
        if let Some(parent) = policy.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = open_append(&policy.path)?;
        let size = file.metadata()?.len();
        Ok(Self { policy, file, size })
    }

    /// Rotation settings
    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    /// Bytes in the active file
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Rotate now, regardless of size
    pub fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.policy.max_backups == 0 {
            fs::remove_file(&self.policy.path)?;
        } else {
            self.shift_backups()?;
            if self.policy.compress {
                let mut staged = self.policy.path.clone().into_os_string();
                staged.push(".rotating");
                let staged = PathBuf::from(staged);
                fs::rename(&self.policy.path, &staged)?;
                gzip(&staged, &self.policy.backup_path(1))?;
                fs::remove_file(&staged)?;
            } else {
                fs::rename(&self.policy.path, self.policy.backup_path(1))?;
            }
        }

        self.file = open_append(&self.policy.path)?;
        self.size = 0;
        Ok(())
    }

    fn shift_backups(&self) -> io::Result<()> {
        let oldest = self.policy.backup_path(self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.policy.max_backups).rev() {
            let from = self.policy.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.policy.backup_path(n + 1))?;
            }
        }
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.size > 0 && self.size + buf.len() as u64 > self.policy.max_size_bytes {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn gzip(src: &Path, dst: &Path) -> io::Result<()> {
    let mut input = File::open(src)?;
    let mut encoder = GzEncoder::new(File::create(dst)?, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;
    Ok(())
}
