//! Cached wall-clock buckets for record stamps and file rotation

use std::fmt::Write;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{Datelike, Local, Timelike};
use parking_lot::RwLock;

/// Second-resolution clock shared by every formatter and rotating file
/// device in a context.
///
/// `refresh` runs once at construction, once per (re)initialization, and
/// then once per second on the background flusher. Readers only ever see
/// whole-second granularity, which bounds how late a file rotation can be.
pub struct ClockCache {
    /// `YYMMDD` of the last refresh
    date: AtomicU32,
    /// `HHMMSS` of the last refresh
    time: AtomicU32,
    /// Preformatted `YYMMDD HHMMSS` stamp
    stamp: RwLock<String>,
}

impl ClockCache {
    pub fn new() -> Self {
        let clock = Self {
            date: AtomicU32::new(0),
            time: AtomicU32::new(0),
            stamp: RwLock::new(String::with_capacity(16)),
        };
        clock.refresh();
        clock
    }

    /// Re-read the wall clock and publish the new buckets and stamp.
    pub fn refresh(&self) {
        let now = Local::now();
        let date = (now.year() as u32 % 100) * 10000 + now.month() * 100 + now.day();
        let time = now.hour() * 10000 + now.minute() * 100 + now.second();
        self.store(date, time);
    }

    fn store(&self, date: u32, time: u32) {
        self.date.store(date, Ordering::Relaxed);
        self.time.store(time, Ordering::Relaxed);
        let mut stamp = self.stamp.write();
        stamp.clear();
        let _ = write!(stamp, "{:06} {:06}", date, time);
    }

    /// `YYMMDD` of the last refresh.
    pub fn date_bucket(&self) -> u32 {
        self.date.load(Ordering::Relaxed)
    }

    /// `HHMMSS` of the last refresh.
    pub fn time_bucket(&self) -> u32 {
        self.time.load(Ordering::Relaxed)
    }

    /// `YYMMDDHH` of the last refresh.
    pub fn hour_bucket(&self) -> u32 {
        self.date_bucket() * 100 + self.time_bucket() / 10000
    }

    /// Append the cached `YYMMDD HHMMSS` stamp to `buf`.
    pub fn write_stamp(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.stamp.read().as_bytes());
    }

    #[cfg(test)]
    pub(crate) fn set_buckets(&self, date: u32, time: u32) {
        self.store(date, time);
    }
}

impl Default for ClockCache {
    fn default() -> Self {
        Self::new()
    }
}
