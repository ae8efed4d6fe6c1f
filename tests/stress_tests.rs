//! Stress tests for concurrent dispatch
//!
//! These tests verify:
//! - No records are lost under concurrent high-volume logging
//! - Records never interleave inside a device
//! - Threshold changes are safe while writers are busy
//! - Re-initialization is safe while loggers are in use

use fanlog::config::LoggerDef;
use fanlog::core::logger::{Logger, Writer, WriterSelect};
use fanlog::core::registry::LoggingContext;
use fanlog::core::{BufferPool, ClockCache, Formatter, Severity};
use fanlog::devices::{Device, FileDevice, Publish, QueueDevice, Rotation};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn file_logger(dir: &TempDir, prefix: &str) -> (Arc<Logger>, std::path::PathBuf) {
    let clock = Arc::new(ClockCache::new());
    let pool = Arc::new(BufferPool::new());
    let device = FileDevice::with_dir(dir.path(), prefix, Rotation::Daily, Arc::clone(&clock));
    let path = dir
        .path()
        .join(format!("{}-{}.log", prefix, clock.date_bucket()));

    let logger = Logger::new(Formatter::Default, clock, pool);
    logger.push_writer(Writer::new(Severity::Debug, Device::File(device)));
    (Arc::new(logger), path)
}

/// Test that synchronous dispatch loses nothing under concurrent load
#[test]
fn test_concurrent_writers_lose_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, path) = file_logger(&temp_dir, "stress");

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                logger.info(format_args!("T{} record {}", thread_id, i));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    logger.flush();

    let content = std::fs::read_to_string(&path).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 500, "Expected 500 records, got {}", lines.len());

    for thread_id in 0..5 {
        let marker = format!("T{} record", thread_id);
        let count = content.matches(&marker).count();
        assert_eq!(count, 100, "Thread {} lost records: {}", thread_id, count);
    }
}

/// Test that every record lands in the file as one intact line
#[test]
fn test_concurrent_records_never_interleave() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, path) = file_logger(&temp_dir, "intact");

    let mut handles = vec![];
    for thread_id in 0..8 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                logger.info(format_args!("payload {} from thread {}", i, thread_id));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    logger.flush();

    let content = std::fs::read_to_string(&path).expect("Failed to read log file");
    for line in content.lines() {
        assert!(line.starts_with('I'), "Torn record: {:?}", line);
        assert!(
            line.contains(" stress_tests.rs:"),
            "Torn record: {:?}",
            line
        );
        assert!(line.contains("payload "), "Torn record: {:?}", line);
    }
    assert_eq!(content.lines().count(), 400);
}

/// Test threshold flips while writers are dispatching
#[test]
fn test_threshold_changes_during_dispatch() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, path) = file_logger(&temp_dir, "flip");

    let mut handles = vec![];
    for thread_id in 0..4 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..200 {
                logger.info(format_args!("T{} {}", thread_id, i));
            }
        }));
    }

    let flipper = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for round in 0..50 {
                let level = if round % 2 == 0 {
                    Severity::Disable
                } else {
                    Severity::Debug
                };
                logger
                    .set_writer_level(WriterSelect::All, level)
                    .expect("Failed to set level");
            }
            logger
                .set_writer_level(WriterSelect::All, Severity::Debug)
                .expect("Failed to set level");
        })
    };

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    flipper.join().expect("Flipper panicked");
    logger.flush();

    // Suppression windows may drop records, but whatever landed is intact
    let content = std::fs::read_to_string(&path).expect("Failed to read log file");
    for line in content.lines() {
        assert!(line.starts_with('I'), "Torn record: {:?}", line);
        assert!(line.contains("] T"), "Torn record: {:?}", line);
    }
}

/// Test re-initialization while loggers are handing out records
#[test]
fn test_init_during_concurrent_writes() {
    let context = Arc::new(LoggingContext::new());
    context.init(&[LoggerDef {
        name: "busy".to_string(),
        level: "debug".to_string(),
        writer: "stdout".to_string(),
    }]);

    let logger = context.lookup("busy");
    let mut handles = vec![];
    for thread_id in 0..4 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                logger.debug(format_args!("T{} {}", thread_id, i));
            }
        }));
    }

    for _ in 0..5 {
        context.init(&[LoggerDef {
            name: "busy".to_string(),
            level: "error".to_string(),
            writer: "stdout".to_string(),
        }]);
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let logger = context.lookup("busy");
    assert!(logger.writer_count() >= 6, "Writers should accumulate across inits");
}

/// Stress test with rapid bursts through a queue device
#[test]
fn test_rapid_burst_logging() {
    struct CountingPublisher {
        sent: Arc<Mutex<Vec<Vec<u8>>>>,
    }
    impl Publish for CountingPublisher {
        fn publish(&mut self, _topic: &str, body: &[u8]) -> io::Result<()> {
            self.sent.lock().push(body.to_vec());
            Ok(())
        }
    }

    let clock = Arc::new(ClockCache::new());
    let pool = Arc::new(BufferPool::new());
    let sent = Arc::new(Mutex::new(Vec::new()));
    let device = Device::Queue(QueueDevice::with_publisher(
        "burst",
        "logs",
        Box::new(CountingPublisher {
            sent: Arc::clone(&sent),
        }),
        Arc::clone(&pool),
    ));
    let logger = Logger::new(Formatter::Simple, clock, pool);
    logger.push_writer(Writer::new(Severity::Debug, device));

    for burst in 0..10 {
        for i in 0..20 {
            logger.debug(format_args!("burst {} record {}", burst, i));
        }
        logger.error(format_args!("burst {} complete", burst));
    }

    let sent = sent.lock();
    assert_eq!(sent.len(), 210, "Expected 210 records, got {}", sent.len());
    for burst in 0..10 {
        let marker = format!("burst {} complete\n", burst);
        assert!(
            sent.iter().any(|body| body.ends_with(marker.as_bytes())),
            "Burst {} completion marker missing!",
            burst
        );
    }
}
