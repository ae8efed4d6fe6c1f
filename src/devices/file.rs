//! Rotating file device

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::clock::ClockCache;

/// File switch granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// One file per `YYMMDD` bucket
    Daily,
    /// One file per `YYMMDDHH` bucket
    Hourly,
}

struct FileState {
    writer: Option<BufWriter<File>>,
    bucket: u32,
}

/// Appends records to `<dir>/<prefix>-<bucket>.log`, switching files when
/// the clock bucket changes.
///
/// Files open lazily on the first write of a bucket, so a device created at
/// startup costs nothing until it is used. The rotation check consults only
/// the clock cache, never the wall clock.
pub struct FileDevice {
    prefix: String,
    dir: PathBuf,
    rotation: Rotation,
    clock: Arc<ClockCache>,
    state: Mutex<FileState>,
}

impl FileDevice {
    /// Device writing under the standard logs directory.
    pub fn new(prefix: &str, rotation: Rotation, clock: Arc<ClockCache>) -> Self {
        Self::with_dir(default_log_dir(), prefix, rotation, clock)
    }

    /// Device writing under an explicit directory.
    pub fn with_dir(
        dir: impl Into<PathBuf>,
        prefix: &str,
        rotation: Rotation,
        clock: Arc<ClockCache>,
    ) -> Self {
        Self {
            prefix: prefix.to_string(),
            dir: dir.into(),
            rotation,
            clock,
            state: Mutex::new(FileState {
                writer: None,
                bucket: 0,
            }),
        }
    }

    fn bucket(&self) -> u32 {
        match self.rotation {
            Rotation::Daily => self.clock.date_bucket(),
            Rotation::Hourly => self.clock.hour_bucket(),
        }
    }

    fn path_for(&self, bucket: u32) -> PathBuf {
        self.dir.join(format!("{}-{}.log", self.prefix, bucket))
    }

    pub fn write(&self, record: &[u8]) {
        let mut state = self.state.lock();
        let bucket = self.bucket();
        if state.bucket != bucket {
            if let Some(mut writer) = state.writer.take() {
                if let Err(err) = writer.flush() {
                    eprintln!("[LOGGER ERROR] logger cannot close file: {}", err);
                }
            }
            state.bucket = bucket;
        }
        if state.writer.is_none() {
            let path = self.path_for(bucket);
            let _ = fs::create_dir_all(&self.dir);
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => state.writer = Some(BufWriter::new(file)),
                Err(err) => {
                    drop(state);
                    eprintln!("[LOGGER ERROR] logger cannot open file: {}", err);
                    return;
                }
            }
        }
        let result = match state.writer.as_mut() {
            Some(writer) => writer.write_all(record),
            None => Ok(()),
        };
        drop(state);
        if let Err(err) = result {
            eprintln!("[LOGGER ERROR] logger cannot write file: {}", err);
        }
    }

    pub fn flush(&self) {
        let mut state = self.state.lock();
        if let Some(ref mut writer) = state.writer {
            if let Err(err) = writer.flush() {
                eprintln!("[LOGGER ERROR] logger cannot flush file: {}", err);
            }
        }
    }
}

impl Drop for FileDevice {
    fn drop(&mut self) {
        self.flush();
    }
}

/// `logs` beside the parent of the executable's directory, falling back to
/// `./logs` when the executable path is unavailable.
fn default_log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent()
                .and_then(|dir| dir.parent())
                .map(|base| base.join("logs"))
        })
        .unwrap_or_else(|| PathBuf::from("logs"))
}
