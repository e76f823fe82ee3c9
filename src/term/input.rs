use std::io::{self, ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const POLL: Duration = Duration::from_millis(50);

/// ## Interruptible standard input
///
/// A helper thread does the blocking reads. `read` waits on the thread
/// in short slices and fails with `ErrorKind::Interrupted` once the
/// interrupt flag is set, so ctrl-c still stops a program blocked in `G`.

pub struct Input {
    chunks: Receiver<io::Result<Vec<u8>>>,
    interrupted: Arc<AtomicBool>,
    buffer: Vec<u8>,
    pos: usize,
    eof: bool,
}

impl Input {
    pub fn stdin(interrupted: Arc<AtomicBool>) -> Input {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            let mut stdin = stdin.lock();
            loop {
                let mut chunk = vec![0; 4096];
                let result = match stdin.read(&mut chunk) {
                    Ok(len) => {
                        chunk.truncate(len);
                        Ok(chunk)
                    }
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => Err(e),
                };
                let last = !matches!(&result, Ok(chunk) if !chunk.is_empty());
                if tx.send(result).is_err() || last {
                    break;
                }
            }
        });
        Input::new(rx, interrupted)
    }

    pub fn new(chunks: Receiver<io::Result<Vec<u8>>>, interrupted: Arc<AtomicBool>) -> Input {
        Input {
            chunks,
            interrupted,
            buffer: vec![],
            pos: 0,
            eof: false,
        }
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.pos == self.buffer.len() {
            if self.eof || buf.is_empty() {
                return Ok(0);
            }
            if self.interrupted.load(Ordering::SeqCst) {
                return Err(ErrorKind::Interrupted.into());
            }
            match self.chunks.recv_timeout(POLL) {
                Ok(Ok(chunk)) => {
                    self.eof = chunk.is_empty();
                    self.buffer = chunk;
                    self.pos = 0;
                }
                Ok(Err(e)) => return Err(e),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => self.eof = true,
            }
        }
        let len = buf.len().min(self.buffer.len() - self.pos);
        buf[..len].copy_from_slice(&self.buffer[self.pos..self.pos + len]);
        self.pos += len;
        Ok(len)
    }
}
