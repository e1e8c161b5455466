//! Progress Reader
//!
//! Wraps the file reader handed to the MEGA client and reports every read
//! as a byte-count delta on the bounded progress channel.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::io::AsyncRead;
use tokio_util::sync::PollSender;

use crate::domain::repositories::remote_storage::ProgressSender;

/// Reader that forwards the number of bytes read to a progress channel.
///
/// A channel slot is reserved before each read, so a full channel stalls the
/// upload instead of dropping deltas. Once the receiving side is gone the
/// reader keeps working without reporting.
pub struct ProgressReader<R> {
    inner: R,
    sender: Option<PollSender<u64>>,
}

impl<R> ProgressReader<R> {
    pub fn new(inner: R, progress: Option<ProgressSender>) -> Self {
        Self {
            inner,
            sender: progress.map(PollSender::new),
        }
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for ProgressReader<R> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let this = &mut *self;

        if let Some(sender) = this.sender.as_mut() {
            match sender.poll_reserve(cx) {
                Poll::Ready(Ok(())) => {}
                Poll::Ready(Err(_)) => this.sender = None,
                Poll::Pending => return Poll::Pending,
            }
        }

        let read = match Pin::new(&mut this.inner).poll_read(cx, buf) {
            Poll::Ready(Ok(read)) => read,
            other => return other,
        };

        if read > 0 {
            if let Some(sender) = this.sender.as_mut() {
                if sender.send_item(read as u64).is_err() {
                    this.sender = None;
                }
            }
        }

        Poll::Ready(Ok(read))
    }
}
