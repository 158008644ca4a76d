//! Shared helpers for capturing console output in tests.

#![allow(dead_code)]

use melodylog::{ConsoleLogger, LoggerBuilder, fmt::strip_ansi};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory writer; every clone appends to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Output with escapes removed.
    pub fn plain(&self) -> String {
        strip_ansi(&self.contents())
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger writing into a fresh buffer.
pub fn capture(builder: LoggerBuilder) -> (ConsoleLogger, SharedBuf) {
    let buf = SharedBuf::default();
    let logger = builder.writer(buf.clone()).build();
    (logger, buf)
}
