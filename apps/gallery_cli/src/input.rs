//! Line reader feeding terminal input to the event loop.

use std::io::ErrorKind;

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::warn;

/// Sends every line of `reader` to `tx` until end of input or the receiver goes away.
///
/// A line that is not valid UTF-8 is skipped; any other read error stops the reader.
pub async fn forward_lines<R>(reader: R, tx: mpsc::Sender<String>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if tx.send(line).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(error) if error.kind() == ErrorKind::InvalidData => {
                warn!(%error, "skipping unreadable input line");
            }
            Err(error) => {
                warn!(%error, "stopped reading input");
                break;
            }
        }
    }
}
