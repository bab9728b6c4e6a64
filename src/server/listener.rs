use std::io;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::display::DisplayPainter;
use crate::http::connection::Connection;
use crate::status::Dispatcher;

/// Binds a listener on `addr` with the given accept backlog.
pub fn bind(addr: SocketAddr, backlog: u32) -> anyhow::Result<TcpListener> {
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .context("creating socket")?;

    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("binding {addr}"))?;

    let listener = socket.listen(backlog).context("listening")?;
    info!("Listening on {} (backlog {})", listener.local_addr()?, backlog);
    Ok(listener)
}

/// Accept errors that concern one pending connection rather than the
/// listener.
pub fn is_transient_accept_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
    )
}

/// Serves connections one at a time until the listener fails.
///
/// Each connection is read, answered and closed before the next accept.
/// Per-connection failures, including a peer that gave up while still
/// queued, are logged and never end the loop.
pub async fn serve<D: DisplayPainter>(
    listener: &TcpListener,
    dispatcher: &mut Dispatcher<D>,
    max_request_bytes: usize,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) if is_transient_accept_error(&e) => {
                tracing::warn!(error = %e, "Dropped pending connection");
                continue;
            }
            Err(e) => return Err(e).context("accepting connection"),
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, max_request_bytes);
        match conn.run(dispatcher).await {
            Ok(Some(response)) => {
                tracing::debug!(%peer, status = response.status.as_u16(), "Response sent");
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(%peer, error = %e, "Connection error");
            }
        }
    }
}
