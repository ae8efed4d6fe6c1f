//! Named-logger registry, configuration merge, and the background flusher

use std::collections::HashMap;
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};
use parking_lot::{Mutex, RwLock};

use crate::config::{self, LoggerDef};
use crate::core::buffer_pool::BufferPool;
use crate::core::clock::ClockCache;
use crate::core::error::{LogError, Result};
use crate::core::format::Formatter;
use crate::core::level::Severity;
use crate::core::logger::{Logger, Writer, WriterSelect};
use crate::devices::Device;

/// Refresh-and-flush cadence of the background task. Rotation can lag the
/// wall clock by at most this long.
const TICK_PERIOD: Duration = Duration::from_secs(1);

struct TickerHandle {
    stop: Sender<()>,
    handle: thread::JoinHandle<()>,
}

struct RegistryState {
    named: HashMap<String, Arc<Logger>>,
    default: Arc<Logger>,
}

/// Process-wide logging state: the default logger, the named-logger map, the
/// shared clock cache and buffer pool, and the background flusher.
///
/// A context is self-contained; tests and embedders can build as many as
/// they like. The crate-root functions operate on one global instance.
pub struct LoggingContext {
    clock: Arc<ClockCache>,
    pool: Arc<BufferPool>,
    state: RwLock<RegistryState>,
    ticker: Mutex<Option<TickerHandle>>,
}

impl LoggingContext {
    /// A context whose default logger writes to the console at `Debug` using
    /// the standard record format. The background flusher starts
    /// immediately.
    pub fn new() -> Self {
        let clock = Arc::new(ClockCache::new());
        let pool = Arc::new(BufferPool::new());
        let default = Logger::new(Formatter::Default, Arc::clone(&clock), Arc::clone(&pool));
        default.push_writer(Writer::new(Severity::Debug, Device::console()));
        let context = Self {
            clock,
            pool,
            state: RwLock::new(RegistryState {
                named: HashMap::new(),
                default: Arc::new(default),
            }),
            ticker: Mutex::new(None),
        };
        context.start_ticker();
        context
    }

    /// The clock cache shared by this context's loggers and devices.
    pub fn clock(&self) -> &Arc<ClockCache> {
        &self.clock
    }

    /// The buffer pool shared by this context's loggers and devices.
    pub fn pool(&self) -> &Arc<BufferPool> {
        &self.pool
    }

    /// The logger registered under `name`, or the default logger when no
    /// such name exists. Never fails.
    pub fn lookup(&self, name: &str) -> Arc<Logger> {
        let state = self.state.read();
        match state.named.get(name) {
            Some(logger) => Arc::clone(logger),
            None => Arc::clone(&state.default),
        }
    }

    /// The current default logger.
    pub fn default_logger(&self) -> Arc<Logger> {
        Arc::clone(&self.state.read().default)
    }

    /// Apply configuration entries on top of the current state.
    ///
    /// The background flusher is stopped (and its exit awaited) before the
    /// state changes, and a fresh one starts once they are applied. Per
    /// entry: a known name gains one writer, an unknown name becomes a new
    /// logger, and `default` replaces the default logger on its first
    /// occurrence in the call, with later `default` entries adding writers
    /// to the replacement. Entries whose sink cannot be built are reported
    /// and skipped, except a malformed queue sink, which terminates the
    /// process.
    pub fn init(&self, entries: &[LoggerDef]) {
        self.stop_ticker();

        {
            let mut state = self.state.write();
            let mut replaced_default = false;
            for entry in entries {
                let name = entry.name.to_lowercase();
                let sink = entry.writer.to_lowercase();
                let level = Severity::parse_or_info(&entry.level);
                let device = match Device::from_descriptor(&sink, &self.clock, &self.pool) {
                    Ok(device) => device,
                    Err(err @ LogError::MalformedQueueSink(_)) => {
                        eprintln!("[LOGGER ERROR] {}", err);
                        process::exit(1);
                    }
                    Err(err) => {
                        eprintln!("[LOGGER ERROR] {}", err);
                        continue;
                    }
                };
                let writer = Writer::new(level, device);
                if name == "default" {
                    if !replaced_default {
                        state.default = Arc::new(self.fresh_logger());
                        replaced_default = true;
                    }
                    state.default.push_writer(writer);
                } else {
                    match state.named.get(&name) {
                        Some(logger) => logger.push_writer(writer),
                        None => {
                            let logger = self.fresh_logger();
                            logger.push_writer(writer);
                            state.named.insert(name, Arc::new(logger));
                        }
                    }
                }
            }
        }

        self.clock.refresh();
        self.start_ticker();
    }

    /// Decode a TOML configuration document and apply it.
    pub fn init_from_str(&self, text: &str) -> Result<()> {
        let config = config::decode(text)?;
        self.init(&config.logger);
        Ok(())
    }

    /// Read and decode a TOML configuration file and apply it.
    pub fn init_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let config = config::load(path)?;
        self.init(&config.logger);
        Ok(())
    }

    /// Change writer thresholds on the named logger.
    ///
    /// `default` addresses the default logger directly. Any other name must
    /// be registered, else `NameNotFound` is returned and nothing changes.
    pub fn set_level(&self, name: &str, select: WriterSelect, level: &str) -> Result<()> {
        let logger = {
            let state = self.state.read();
            if name == "default" {
                Arc::clone(&state.default)
            } else {
                match state.named.get(name) {
                    Some(logger) => Arc::clone(logger),
                    None => {
                        let err = LogError::name_not_found(name);
                        eprintln!("[LOGGER ERROR] {}", err);
                        return Err(err);
                    }
                }
            }
        };
        let level = Severity::parse_or_info(level);
        logger.set_writer_level(select, level).inspect_err(|err| {
            eprintln!("[LOGGER ERROR] {}", err);
        })
    }

    fn fresh_logger(&self) -> Logger {
        Logger::new(
            Formatter::Default,
            Arc::clone(&self.clock),
            Arc::clone(&self.pool),
        )
    }

    /// Every logger the background flusher must visit.
    fn flush_set(&self) -> Vec<Arc<Logger>> {
        let state = self.state.read();
        let mut loggers = Vec::with_capacity(state.named.len() + 1);
        loggers.push(Arc::clone(&state.default));
        loggers.extend(state.named.values().cloned());
        loggers
    }

    fn start_ticker(&self) {
        let mut slot = self.ticker.lock();
        if slot.is_some() {
            return;
        }
        let (stop, stopped) = bounded::<()>(1);
        let clock = Arc::clone(&self.clock);
        let loggers = self.flush_set();
        let handle = thread::spawn(move || {
            let ticker = tick(TICK_PERIOD);
            loop {
                select! {
                    recv(stopped) -> _ => return,
                    recv(ticker) -> _ => {
                        clock.refresh();
                        for logger in &loggers {
                            logger.flush();
                        }
                    }
                }
            }
        });
        *slot = Some(TickerHandle { stop, handle });
    }

    /// Ask the flusher to stop and wait until it has. The join is the
    /// acknowledgment; once this returns no flusher thread is running.
    fn stop_ticker(&self) {
        let handle = self.ticker.lock().take();
        if let Some(TickerHandle { stop, handle }) = handle {
            let _ = stop.send(());
            if handle.join().is_err() {
                eprintln!("[LOGGER ERROR] background flusher panicked");
            }
        }
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoggingContext {
    fn drop(&mut self) {
        self.stop_ticker();
        for logger in self.flush_set() {
            logger.flush();
        }
    }
}
