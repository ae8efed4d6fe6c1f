//! Console and buffered stream devices

use std::io::{self, BufWriter, Stdout, Write};

use parking_lot::Mutex;

/// Unbuffered writes straight to stdout. Flushing is a no-op and write
/// errors are ignored.
pub struct ConsoleDevice {
    out: Mutex<Stdout>,
}

impl ConsoleDevice {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(io::stdout()),
        }
    }

    pub fn write(&self, record: &[u8]) {
        let _ = self.out.lock().write_all(record);
    }

    pub fn flush(&self) {}
}

impl Default for ConsoleDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffered writes to stdout. Records become visible on the periodic or
/// shutdown flush, which keeps high-volume logging off the stdout lock.
pub struct StreamDevice {
    out: Mutex<BufWriter<Stdout>>,
}

impl StreamDevice {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(BufWriter::new(io::stdout())),
        }
    }

    pub fn write(&self, record: &[u8]) {
        let _ = self.out.lock().write_all(record);
    }

    pub fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

impl Default for StreamDevice {
    fn default() -> Self {
        Self::new()
    }
}
