//! Output devices
//!
//! Every writer ends in one of the devices here. A device accepts fully
//! formatted records and owns its own synchronization, so one device
//! instance can be shared by a logger's fan-out without extra locking.

pub mod console;
pub mod file;
pub mod queue;

pub use console::{ConsoleDevice, StreamDevice};
pub use file::{FileDevice, Rotation};
pub use queue::{NsqPublisher, Publish, QueueDescriptor, QueueDevice};

use std::fmt;
use std::sync::Arc;

use crate::core::buffer_pool::BufferPool;
use crate::core::clock::ClockCache;
use crate::core::error::{LogError, Result};

/// The closed set of record sinks a writer can target.
pub enum Device {
    File(FileDevice),
    Console(ConsoleDevice),
    Stream(StreamDevice),
    Queue(QueueDevice),
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Device::File(_) => "File",
            Device::Console(_) => "Console",
            Device::Stream(_) => "Stream",
            Device::Queue(_) => "Queue",
        })
    }
}

impl Device {
    pub fn console() -> Self {
        Device::Console(ConsoleDevice::new())
    }

    pub fn stream() -> Self {
        Device::Stream(StreamDevice::new())
    }

    /// Build a device from a config `writer` value.
    ///
    /// The leading tag selects the device kind; everything after the first
    /// colon is passed through as device arguments. `file` and `file_hour`
    /// take the file prefix, `nsq` takes `host:port:name:topic`.
    pub fn from_descriptor(
        descriptor: &str,
        clock: &Arc<ClockCache>,
        pool: &Arc<BufferPool>,
    ) -> Result<Self> {
        let (tag, args) = match descriptor.split_once(':') {
            Some((tag, args)) => (tag, args),
            None => (descriptor, ""),
        };
        match tag {
            "file" => Ok(Device::File(FileDevice::new(
                args,
                Rotation::Daily,
                Arc::clone(clock),
            ))),
            "file_hour" => Ok(Device::File(FileDevice::new(
                args,
                Rotation::Hourly,
                Arc::clone(clock),
            ))),
            "console" => Ok(Device::console()),
            "stdout" => Ok(Device::stream()),
            "nsq" => {
                let parsed = QueueDescriptor::parse(args)?;
                Ok(Device::Queue(QueueDevice::new(parsed, Arc::clone(pool))))
            }
            _ => Err(LogError::unknown_sink(descriptor)),
        }
    }

    pub fn write(&self, record: &[u8]) {
        match self {
            Device::File(device) => device.write(record),
            Device::Console(device) => device.write(record),
            Device::Stream(device) => device.write(record),
            Device::Queue(device) => device.write(record),
        }
    }

    pub fn flush(&self) {
        match self {
            Device::File(device) => device.flush(),
            Device::Console(device) => device.flush(),
            Device::Stream(device) => device.flush(),
            Device::Queue(device) => device.flush(),
        }
    }
}
