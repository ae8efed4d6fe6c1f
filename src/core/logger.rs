//! Main logger implementation

use std::fmt;
use std::panic::Location;
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::buffer_pool::BufferPool;
use crate::core::clock::ClockCache;
use crate::core::error::{LogError, Result};
use crate::core::format::Formatter;
use crate::core::level::Severity;
use crate::devices::Device;

/// One output slot of a logger: a severity threshold and the device that
/// records at or above it are written to.
pub struct Writer {
    threshold: Severity,
    device: Device,
}

impl Writer {
    pub fn new(threshold: Severity, device: Device) -> Self {
        Self { threshold, device }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }
}

/// Target of a threshold update: every writer, or one by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterSelect {
    All,
    At(usize),
}

/// A named log producer fanning records out to its writers.
///
/// Every mutating call recomputes the cached aggregate threshold before it
/// returns, so the suppression fast path in [`write`](Logger::write) never
/// runs against a stale floor.
pub struct Logger {
    formatter: Formatter,
    writers: RwLock<Vec<Writer>>,
    /// Lowest non-`Disable` writer threshold, `Disable` when there is none.
    /// Fast path only: per-writer thresholds are re-checked during fan-out.
    aggregate: AtomicU8,
    clock: Arc<ClockCache>,
    pool: Arc<BufferPool>,
}

impl Logger {
    pub fn new(formatter: Formatter, clock: Arc<ClockCache>, pool: Arc<BufferPool>) -> Self {
        Self {
            formatter,
            writers: RwLock::new(Vec::new()),
            aggregate: AtomicU8::new(Severity::Disable as u8),
            clock,
            pool,
        }
    }

    /// Append a writer. Records dispatched after this call see it.
    pub fn push_writer(&self, writer: Writer) {
        let mut writers = self.writers.write();
        writers.push(writer);
        self.store_aggregate(&writers);
    }

    /// Change the threshold of the selected writer(s).
    ///
    /// `WriterSelect::At` past the end of the writer list returns
    /// `IndexOutOfBound` and changes nothing.
    pub fn set_writer_level(&self, select: WriterSelect, level: Severity) -> Result<()> {
        let mut writers = self.writers.write();
        match select {
            WriterSelect::All => {
                for writer in writers.iter_mut() {
                    writer.threshold = level;
                }
            }
            WriterSelect::At(index) => {
                let count = writers.len();
                let writer = writers
                    .get_mut(index)
                    .ok_or(LogError::IndexOutOfBound { index, count })?;
                writer.threshold = level;
            }
        }
        self.store_aggregate(&writers);
        Ok(())
    }

    fn store_aggregate(&self, writers: &[Writer]) {
        let min = writers
            .iter()
            .map(Writer::threshold)
            .filter(|threshold| *threshold != Severity::Disable)
            .min()
            .unwrap_or(Severity::Disable);
        self.aggregate.store(min as u8, Ordering::Relaxed);
    }

    pub fn writer_count(&self) -> usize {
        self.writers.read().len()
    }

    /// Format one record and hand it to every writer whose threshold permits
    /// `level`, in registration order. Suppressed records cost one atomic
    /// load.
    #[track_caller]
    pub fn write(&self, level: Severity, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        let aggregate = self.aggregate.load(Ordering::Relaxed);
        if aggregate == Severity::Disable as u8 || (level as u8) < aggregate {
            return;
        }
        let record = self
            .formatter
            .format(level, caller, args, &self.clock, &self.pool);
        let writers = self.writers.read();
        for writer in writers.iter() {
            if writer.threshold.permits(level) {
                writer.device.write(&record);
            }
        }
        drop(writers);
        self.pool.put(record);
    }

    /// Flush every writer's device, regardless of thresholds.
    pub fn flush(&self) {
        let writers = self.writers.read();
        for writer in writers.iter() {
            writer.device.flush();
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Debug, args);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Info, args);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Warn, args);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Error, args);
    }

    /// Write a `Fatal` record, flush every device, and terminate the process
    /// with a non-zero status.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.write(Severity::Fatal, args);
        self.flush();
        process::exit(1);
    }
}
