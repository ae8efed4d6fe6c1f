//! Record formatting

use std::fmt;
use std::io::Write;
use std::panic::Location;

use crate::core::buffer_pool::BufferPool;
use crate::core::clock::ClockCache;
use crate::core::level::Severity;

/// Record layouts a logger can emit.
///
/// The set is closed; configuration and the registry only ever produce these
/// two shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatter {
    /// `<L><YYMMDD> <HHMMSS> <file>:<line>] <message>` plus a trailing
    /// newline, with the stamp taken from the clock cache.
    #[default]
    Default,
    /// The bare message plus a trailing newline.
    Simple,
}

impl Formatter {
    /// Render one record into a pooled buffer.
    ///
    /// The caller owns the returned buffer and must hand it back to `pool`
    /// once every writer has seen it.
    pub fn format(
        self,
        level: Severity,
        caller: &'static Location<'static>,
        args: fmt::Arguments<'_>,
        clock: &ClockCache,
        pool: &BufferPool,
    ) -> Vec<u8> {
        let mut buf = pool.get();
        match self {
            Formatter::Default => {
                buf.push(level.code());
                clock.write_stamp(&mut buf);
                let _ = write!(
                    buf,
                    " {}:{}] {}",
                    short_file(caller.file()),
                    caller.line(),
                    args
                );
            }
            Formatter::Simple => {
                let _ = write!(buf, "{}", args);
            }
        }
        buf.push(b'\n');
        buf
    }
}

/// Last path segment of a source file path.
fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
