//! Writer adapter that wraps every chunk in an escape sequence and a reset.

use std::io::{self, Write};

use crate::color::RESET;

#[derive(Debug)]
pub struct ColorWriter<W: Write> {
    inner: W,
    esc_code: String,
    enabled: bool,
}

impl<W: Write> ColorWriter<W> {
    pub fn new(inner: W, esc_code: &str, enabled: bool) -> Self {
        Self {
            inner,
            esc_code: esc_code.to_string(),
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for ColorWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.enabled {
            return self.inner.write(buf);
        }
        if buf.is_empty() {
            return Ok(0);
        }
        // Escape, payload and reset go out together so a chunk is never left unterminated.
        let mut chunk = Vec::with_capacity(self.esc_code.len() + buf.len() + RESET.len());
        chunk.extend_from_slice(self.esc_code.as_bytes());
        chunk.extend_from_slice(buf);
        chunk.extend_from_slice(RESET.as_bytes());
        if let Err(e) = self.inner.write_all(&chunk) {
            // The escape may already be out; try to close it before reporting.
            let _ = self.inner.write_all(RESET.as_bytes());
            let _ = self.inner.flush();
            return Err(e);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
