use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::display::DisplayPainter;
use crate::http::parser::find_headers_end;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::status::Dispatcher;

/// One accepted client: read a request, answer it once, close.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    max_request_bytes: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing,
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, max_request_bytes: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(max_request_bytes),
            max_request_bytes,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to completion and closes it.
    ///
    /// The stream is shut down even when reading or writing failed; the
    /// first error is returned afterwards.
    pub async fn run<D: DisplayPainter>(
        &mut self,
        dispatcher: &mut Dispatcher<D>,
    ) -> anyhow::Result<Option<Response>> {
        let result = self.drive(dispatcher).await;

        // Shutdown may fail on a peer that already went away
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "Shutdown after response failed");
        }
        self.state = ConnectionState::Closed;

        result
    }

    async fn drive<D: DisplayPainter>(
        &mut self,
        dispatcher: &mut Dispatcher<D>,
    ) -> anyhow::Result<Option<Response>> {
        let mut sent = None;

        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    if self.read_request().await? {
                        self.state = ConnectionState::Processing;
                    } else {
                        tracing::debug!("Client closed before sending a request");
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Processing => {
                    let response = dispatcher.handle_bytes(&self.buffer);
                    let writer = ResponseWriter::new(&response);
                    sent = Some(response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // One response per connection
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(sent)
    }

    /// Reads until the header block is complete, the peer stops sending,
    /// or the buffer is full. Returns `false` if nothing was received.
    pub async fn read_request(&mut self) -> anyhow::Result<bool> {
        loop {
            if find_headers_end(&self.buffer).is_some() {
                return Ok(true);
            }

            if self.buffer.len() >= self.max_request_bytes {
                tracing::debug!(bytes = self.buffer.len(), "Request buffer full");
                return Ok(true);
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Peer finished writing; serve whatever arrived
                return Ok(!self.buffer.is_empty());
            }
        }
    }
}
