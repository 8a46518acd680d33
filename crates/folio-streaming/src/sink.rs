//! Shell-first streaming sink.
//!
//! The sink enforces the one ordering rule of a streamed demo page: the
//! shell goes out first, exactly once, and sections only after it.

use std::fmt::Display;

use folio_core::{TimingContext, WorkloadError};
use futures::{Sink, SinkExt};

use crate::flush::{FlushController, FlushPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    AwaitingShell,
    Streaming,
    Closed,
}

/// Streaming response writer, generic over any `Sink<Vec<u8>>` so it works
/// with Spin's `OutgoingBody` in production and a channel in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    flush: FlushController,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::AwaitingShell,
            timing,
            sections_sent: Vec::new(),
            flush: FlushController::default(),
        }
    }

    pub fn with_flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.flush = FlushController::new(policy);
        self
    }

    /// Send the shell. Must happen before any section, and only once.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::AwaitingShell {
            return Err(WorkloadError::StreamError(
                "shell already sent or sink closed".to_owned(),
            ));
        }

        self.timing.mark("shell_start");
        self.write(html.as_bytes().to_vec()).await?;
        if self.flush.shell_flush_due() {
            self.flush_now().await?;
        }
        self.timing.mark("shell_sent");
        self.state = SinkState::Streaming;
        Ok(())
    }

    /// Send one named section. Sections may arrive in any order once the
    /// shell is out.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_streaming()?;

        self.timing.mark_section_start(name);
        let flush_due = self.flush.note_write(html.len());
        self.write(html.as_bytes().to_vec()).await?;
        if self.flush.section_flush_due() || flush_due {
            self.flush_now().await?;
        }
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_owned());
        Ok(())
    }

    /// Send raw bytes, e.g. the closing half of the shell.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        self.ensure_streaming()?;

        let flush_due = self.flush.note_write(bytes.len());
        self.write(bytes).await?;
        if flush_due {
            self.flush_now().await?;
        }
        Ok(())
    }

    /// Mark the response finished. Further sends are rejected.
    pub fn complete(&mut self) {
        self.state = SinkState::Closed;
        self.timing.mark("complete");
    }

    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        self.inner
            .send(bytes)
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }

    async fn flush_now(&mut self) -> Result<(), WorkloadError> {
        self.inner
            .flush()
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.flush.mark_flushed();
        Ok(())
    }

    fn ensure_streaming(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::AwaitingShell => Err(WorkloadError::ShellNotSent),
            SinkState::Closed => {
                Err(WorkloadError::StreamError("sink already closed".to_owned()))
            }
            SinkState::Streaming => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;

    fn collected(rx: mpsc::UnboundedReceiver<Vec<u8>>) -> String {
        let chunks: Vec<Vec<u8>> = block_on(rx.collect());
        String::from_utf8(chunks.concat()).unwrap()
    }

    #[test]
    fn shell_then_sections_then_close() {
        let (tx, rx) = mpsc::unbounded();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.send_section("current", "<div>31C</div>").await.unwrap();
            sink.send_raw(b"</html>".to_vec()).await.unwrap();
        });
        sink.complete();

        assert_eq!(sink.sections_sent(), &["current".to_owned()]);
        assert!(sink.timing().section_timing("current").is_some());
        drop(sink);
        assert_eq!(collected(rx), "<html><div>31C</div></html>");
    }

    #[test]
    fn section_before_shell_is_rejected() {
        let (tx, _rx) = mpsc::unbounded();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let err = block_on(sink.send_section("catalog", "<div/>")).unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
    }

    #[test]
    fn second_shell_is_rejected() {
        let (tx, _rx) = mpsc::unbounded();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(sink.send_shell("<html>")).unwrap();
        assert!(block_on(sink.send_shell("<html>")).is_err());
    }

    #[test]
    fn send_after_complete_is_rejected() {
        let (tx, _rx) = mpsc::unbounded();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(sink.send_shell("<html>")).unwrap();
        sink.complete();
        assert!(block_on(sink.send_section("cart", "<div/>")).is_err());
    }
}
