//! Run a child process and forward its stderr through a [`ColorWriter`].

use std::io::{self, Read, Write};
use std::process::{Command, ExitStatus, Stdio};

use which::which;

use crate::errors::StderredError;
use crate::painter::ColorWriter;

const PUMP_BUF_SIZE: usize = 8 * 1024;

/// Length of the prefix of `buf` that does not end inside a UTF-8 sequence.
/// At most 3 trailing bytes are held back; anything else passes as-is.
fn complete_utf8_len(buf: &[u8]) -> usize {
    let len = buf.len();
    for back in 1..=len.min(3) {
        let b = buf[len - back];
        if b & 0b1100_0000 == 0b1000_0000 {
            continue;
        }
        let need = if b & 0b1110_0000 == 0b1100_0000 {
            2
        } else if b & 0b1111_0000 == 0b1110_0000 {
            3
        } else if b & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            1
        };
        return if need > back { len - back } else { len };
    }
    len
}

/// Copy `src` into `dst` chunk by chunk until EOF, flushing after each chunk.
/// A multibyte character split across reads is carried into the next chunk.
pub fn pump<R: Read, W: Write>(mut src: R, dst: &mut W) -> io::Result<u64> {
    let mut buf = [0u8; PUMP_BUF_SIZE];
    let mut pending: Vec<u8> = Vec::with_capacity(PUMP_BUF_SIZE + 3);
    let mut total = 0u64;
    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        total += n as u64;
        pending.extend_from_slice(&buf[..n]);
        let ready = complete_utf8_len(&pending);
        if ready > 0 {
            dst.write_all(&pending[..ready])?;
            dst.flush()?;
            pending.drain(..ready);
        }
    }
    if !pending.is_empty() {
        dst.write_all(&pending)?;
        dst.flush()?;
    }
    Ok(total)
}

pub fn run_colorized(
    argv: &[String],
    enabled: bool,
    esc_code: &str,
) -> Result<ExitStatus, StderredError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(StderredError::Message(
            "stderred: no command given".to_string(),
        ));
    };
    let resolved = which(program).map_err(|_| {
        StderredError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("stderred: command not found: {program}"),
        ))
    })?;
    tracing::debug!(program = %resolved.display(), enabled, "spawning child");

    let mut child = Command::new(&resolved)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(child_err) = child.stderr.take() {
        let stderr = io::stderr();
        let mut painter = ColorWriter::new(stderr.lock(), esc_code, enabled);
        if let Err(e) = pump(child_err, &mut painter) {
            // Keep waiting for the child; a broken stderr must not orphan it.
            tracing::warn!("stderr forwarding stopped: {e}");
        }
    }

    let status = child.wait()?;
    tracing::debug!(?status, "child exited");
    Ok(status)
}

/// Exit code to report for a finished child.
pub fn exit_code_for_status(status: &ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return (code & 0xff) as u8;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return (128 + (sig & 0x7f)) as u8;
        }
    }
    1
}
