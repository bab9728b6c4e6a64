use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::sleep;

/// Interval between link checks while connecting.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// The link did not come up within the allowed time.
    Timeout { network: String, waited: Duration },
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectError::Timeout { network, waited } => write!(
                f,
                "could not connect to {network} within {} seconds",
                waited.as_secs()
            ),
        }
    }
}

impl std::error::Error for ConnectError {}

/// Joins the network and reports the address the device got.
#[allow(async_fn_in_trait)]
pub trait WifiConnector {
    async fn connect(&mut self, timeout: Duration) -> Result<IpAddr, ConnectError>;

    /// Network name, for the operator error screen.
    fn network(&self) -> &str;
}

/// A link whose state can be polled.
#[allow(async_fn_in_trait)]
pub trait Link {
    /// Returns the assigned address once the link is up.
    async fn address(&mut self) -> Option<IpAddr>;
}

/// Polls `link` once per `interval` until it reports an address.
///
/// Gives up with [`ConnectError::Timeout`] once more than `timeout` has
/// elapsed without the link coming up.
pub async fn wait_for_link<L: Link>(
    link: &mut L,
    network: &str,
    timeout: Duration,
    interval: Duration,
) -> Result<IpAddr, ConnectError> {
    let mut waited = Duration::ZERO;
    loop {
        if let Some(ip) = link.address().await {
            tracing::info!(%ip, network, "Connected");
            return Ok(ip);
        }

        tracing::info!(network, waited_secs = waited.as_secs(), "Waiting for connection...");
        sleep(interval).await;
        waited += interval;

        if waited > timeout {
            return Err(ConnectError::Timeout {
                network: network.to_string(),
                waited: timeout,
            });
        }
    }
}

/// Host link: up once the configured address is assigned to a local
/// interface, which is checked by binding a throwaway UDP socket on it.
#[derive(Debug, Clone)]
pub struct HostWifi {
    network: String,
    address: IpAddr,
}

impl HostWifi {
    pub fn new(network: impl Into<String>, address: IpAddr) -> Self {
        Self {
            network: network.into(),
            address,
        }
    }
}

impl Link for HostWifi {
    async fn address(&mut self) -> Option<IpAddr> {
        match UdpSocket::bind(SocketAddr::new(self.address, 0)).await {
            Ok(_) => Some(self.address),
            Err(e) => {
                tracing::debug!(address = %self.address, error = %e, "Address not available yet");
                None
            }
        }
    }
}

impl WifiConnector for HostWifi {
    async fn connect(&mut self, timeout: Duration) -> Result<IpAddr, ConnectError> {
        let network = self.network.clone();
        wait_for_link(self, &network, timeout, POLL_INTERVAL).await
    }

    fn network(&self) -> &str {
        &self.network
    }
}
