//! Message-queue device and the bundled NSQ publisher
//!
//! The device itself only depends on the [`Publish`] capability, so any
//! queue client can stand behind it. The publisher shipped here speaks just
//! enough of the NSQ TCP protocol to PUB records.

use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::buffer_pool::BufferPool;
use crate::core::error::{LogError, Result};

/// Opaque queue-client capability: deliver one payload under a topic.
pub trait Publish: Send {
    fn publish(&mut self, topic: &str, body: &[u8]) -> io::Result<()>;
}

/// Parsed `host:port:name:topic` sink descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueDescriptor {
    pub host: String,
    pub port: String,
    pub name: String,
    pub topic: String,
}

impl QueueDescriptor {
    /// Split a descriptor into its four fields. Every field must be present
    /// and non-empty after trimming.
    pub fn parse(args: &str) -> Result<Self> {
        let fields: Vec<&str> = args.splitn(4, ':').map(str::trim).collect();
        if fields.len() != 4 || fields.iter().any(|field| field.is_empty()) {
            return Err(LogError::malformed_queue_sink(args));
        }
        Ok(Self {
            host: fields[0].to_string(),
            port: fields[1].to_string(),
            name: fields[2].to_string(),
            topic: fields[3].to_string(),
        })
    }

    /// `host:port` dial address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Publishes each record to a message queue as `<name>|<record>` under a
/// fixed topic.
///
/// A failed publish is reported and the record is lost; nothing is queued
/// for retry.
pub struct QueueDevice {
    name: String,
    topic: String,
    publisher: Mutex<Box<dyn Publish>>,
    pool: Arc<BufferPool>,
}

impl QueueDevice {
    /// Device backed by the bundled NSQ publisher.
    pub fn new(descriptor: QueueDescriptor, pool: Arc<BufferPool>) -> Self {
        let publisher = NsqPublisher::new(descriptor.address());
        Self::with_publisher(descriptor.name, descriptor.topic, Box::new(publisher), pool)
    }

    /// Device backed by a caller-supplied publisher.
    pub fn with_publisher(
        name: impl Into<String>,
        topic: impl Into<String>,
        publisher: Box<dyn Publish>,
        pool: Arc<BufferPool>,
    ) -> Self {
        Self {
            name: name.into(),
            topic: topic.into(),
            publisher: Mutex::new(publisher),
            pool,
        }
    }

    pub fn write(&self, record: &[u8]) {
        let mut body = self.pool.get();
        body.extend_from_slice(self.name.as_bytes());
        body.push(b'|');
        body.extend_from_slice(record);
        if let Err(err) = self.publisher.lock().publish(&self.topic, &body) {
            eprintln!("[LOGGER ERROR] logger cannot write queue: {}", err);
        }
        self.pool.put(body);
    }

    pub fn flush(&self) {}
}

const MAGIC_V2: &[u8] = b"  V2";
const FRAME_RESPONSE: i32 = 0;
const FRAME_ERROR: i32 = 1;
const HEARTBEAT: &[u8] = b"_heartbeat_";
const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Minimal NSQ client: one TCP connection, `PUB` frames, heartbeat replies.
///
/// The connection opens lazily on the first publish and is dropped on any
/// failure; the next publish reconnects.
pub struct NsqPublisher {
    address: String,
    stream: Option<TcpStream>,
}

impl NsqPublisher {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            stream: None,
        }
    }

    fn connect(&mut self) -> io::Result<&mut TcpStream> {
        if self.stream.is_none() {
            let mut stream = TcpStream::connect(&self.address)?;
            stream.set_write_timeout(Some(IO_TIMEOUT))?;
            stream.set_read_timeout(Some(IO_TIMEOUT))?;
            stream.set_nodelay(true)?;
            stream.write_all(MAGIC_V2)?;
            self.stream = Some(stream);
        }
        match self.stream.as_mut() {
            Some(stream) => Ok(stream),
            None => Err(io::Error::new(io::ErrorKind::NotConnected, "no connection")),
        }
    }

    fn send_pub(&mut self, topic: &str, body: &[u8]) -> io::Result<()> {
        let stream = self.connect()?;

        let mut frame = Vec::with_capacity(topic.len() + body.len() + 16);
        frame.extend_from_slice(b"PUB ");
        frame.extend_from_slice(topic.as_bytes());
        frame.push(b'\n');
        frame.extend_from_slice(&(body.len() as u32).to_be_bytes());
        frame.extend_from_slice(body);
        stream.write_all(&frame)?;

        read_response(stream)
    }
}

impl Publish for NsqPublisher {
    fn publish(&mut self, topic: &str, body: &[u8]) -> io::Result<()> {
        let result = self.send_pub(topic, body);
        if result.is_err() {
            self.stream = None;
        }
        result
    }
}

/// Read frames until the server answers the PUB: heartbeats are
/// acknowledged with NOP, an error frame becomes an `io::Error`.
fn read_response(stream: &mut TcpStream) -> io::Result<()> {
    loop {
        let mut size_buf = [0u8; 4];
        stream.read_exact(&mut size_buf)?;
        let size = u32::from_be_bytes(size_buf) as usize;
        if size < 4 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("frame size too small: {}", size),
            ));
        }

        let mut payload = vec![0u8; size];
        stream.read_exact(&mut payload)?;
        let frame_type = i32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);
        let data = &payload[4..];

        match frame_type {
            FRAME_RESPONSE if data == HEARTBEAT => {
                stream.write_all(b"NOP\n")?;
            }
            FRAME_RESPONSE => return Ok(()),
            FRAME_ERROR => {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    String::from_utf8_lossy(data).into_owned(),
                ));
            }
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unexpected frame type: {}", other),
                ));
            }
        }
    }
}
