//! Line-oriented input shared by everyone reading the terminal.

use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;

type BoxedReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Cloneable handle to one line source.
///
/// Both hot-seat players and the rematch prompt read from the same
/// stream, so lines are handed out one at a time behind a lock.
#[derive(Clone)]
pub struct LineInput {
    lines: Arc<Mutex<Lines<BoxedReader>>>,
}

impl LineInput {
    /// Reads from the process's standard input.
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }

    /// Reads from any buffered async source.
    pub fn from_reader(reader: impl AsyncBufRead + Unpin + Send + 'static) -> Self {
        let boxed: BoxedReader = Box::new(reader);
        Self {
            lines: Arc::new(Mutex::new(boxed.lines())),
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    pub async fn read_line(&self) -> Result<Option<String>> {
        let mut lines = self.lines.lock().await;
        Ok(lines.next_line().await?)
    }
}

impl std::fmt::Debug for LineInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineInput").finish_non_exhaustive()
    }
}
