//! Reusable record buffers

use parking_lot::Mutex;

/// Pool of byte buffers shared by formatting and device framing.
///
/// `get` pops a free buffer or allocates an empty one; `put` clears the
/// contents and keeps the capacity for the next user. The pool is unbounded
/// and purely an allocation optimization: nothing may rely on a buffer
/// coming back.
#[derive(Default)]
pub struct BufferPool {
    free: Mutex<Vec<Vec<u8>>>,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a buffer out of the pool. The result is always empty.
    pub fn get(&self) -> Vec<u8> {
        self.free.lock().pop().unwrap_or_default()
    }

    /// Hand a buffer back. Its contents are discarded.
    pub fn put(&self, mut buf: Vec<u8>) {
        buf.clear();
        self.free.lock().push(buf);
    }
}
