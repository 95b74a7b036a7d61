// SPDX-License-Identifier: MPL-2.0
//! Tearing signals read as JSON lines.

use crate::signals::TearingSignal;
use iced::futures::channel::mpsc;
use iced::futures::SinkExt;
use iced::futures::Stream;
use iced::stream;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// Returns the next well-formed signal, skipping blank and malformed lines.
///
/// Yields `None` once the input ends or can no longer be read.
pub async fn next_signal<R>(lines: &mut Lines<R>) -> Option<TearingSignal>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match TearingSignal::parse(trimmed) {
                    Ok(signal) => return Some(signal),
                    Err(err) => tracing::warn!(line = trimmed, "skipping malformed signal: {err}"),
                }
            }
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("signal input failed: {err}");
                return None;
            }
        }
    }
}

/// Stream of signals arriving on standard input.
pub fn stdin_signals() -> impl Stream<Item = TearingSignal> {
    signal_stream(BufReader::new(tokio::io::stdin()))
}

/// Stream of signals read line by line from `reader` until it ends.
pub fn signal_stream<R>(reader: R) -> impl Stream<Item = TearingSignal>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    stream::channel(100, |mut output: mpsc::Sender<TearingSignal>| async move {
        let mut lines = reader.lines();
        while let Some(signal) = next_signal(&mut lines).await {
            if output.send(signal).await.is_err() {
                break;
            }
        }
        tracing::info!("signal input closed");
    })
}
