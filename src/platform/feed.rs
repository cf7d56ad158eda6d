//! Key presses delivered from a reader thread
//!
//! The host loop blocks on the feed until either a key arrives or the
//! pending reset falls due, so the reset fires on time with no key pressed.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use super::input::Key;

/// Why the host loop woke up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    Key(Key),
    /// The wait ran out before any key arrived
    Timeout,
    /// The input source is exhausted
    Closed,
}

pub struct KeyFeed {
    rx: Receiver<Key>,
}

impl KeyFeed {
    pub fn new(rx: Receiver<Key>) -> Self {
        Self { rx }
    }

    /// Read one key name per line from `reader` on a helper thread.
    /// Blank lines are skipped; a read error ends the feed.
    pub fn spawn<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("Key input failed: {}", e);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                if tx.send(Key::from_name(&line)).is_err() {
                    break;
                }
            }
        });
        Self::new(rx)
    }

    /// Block for the next key, or at most `timeout` when one is given
    pub fn wait(&self, timeout: Option<Duration>) -> Wake {
        match timeout {
            Some(timeout) => match self.rx.recv_timeout(timeout) {
                Ok(key) => Wake::Key(key),
                Err(RecvTimeoutError::Timeout) => Wake::Timeout,
                Err(RecvTimeoutError::Disconnected) => Wake::Closed,
            },
            None => self.rx.recv().map_or(Wake::Closed, Wake::Key),
        }
    }
}
