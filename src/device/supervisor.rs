//! Outer connect/serve loop with operator-gated recovery.

use std::net::SocketAddr;

use tokio::time::sleep;

use crate::config::Config;
use crate::device::buttons::{Button, ButtonInput, wait_for_press};
use crate::device::wifi::WifiConnector;
use crate::display::{Panel, StatusScreen};
use crate::server::listener;
use crate::status::Dispatcher;

const BOOT_TEXT: &str = "Waiting for connection...";
const READY_TEXT: &str = "Ready and accepting requests!";
const REBOOT_HINT: &str = "If this fails, reboot!";

/// Reconnect message for the button the operator pressed.
pub fn reconnect_text(button: Button) -> &'static str {
    match button {
        Button::A => "Trying new server...",
        Button::B => "Trying to re-establish server...",
    }
}

pub struct Supervisor<W, B, P> {
    config: Config,
    wifi: W,
    buttons: B,
    dispatcher: Dispatcher<StatusScreen<P>>,
}

impl<W, B, P> Supervisor<W, B, P>
where
    W: WifiConnector,
    B: ButtonInput,
    P: Panel,
{
    pub fn new(config: Config, wifi: W, buttons: B, panel: P) -> Self {
        Self {
            config,
            wifi,
            buttons,
            dispatcher: Dispatcher::new(StatusScreen::new(panel)),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<StatusScreen<P>> {
        &self.dispatcher
    }

    fn screen(&mut self) -> &mut StatusScreen<P> {
        self.dispatcher.painter_mut()
    }

    /// Runs forever: boot, then serve and recover in turn.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.boot().await;

        loop {
            if let Err(e) = self.session().await {
                tracing::error!(error = %e, "Serving session ended");
            }
            self.recover().await;
        }
    }

    pub async fn boot(&mut self) {
        if let Err(e) = self.screen().boot(BOOT_TEXT) {
            tracing::warn!(error = %e, "Boot screen failed");
        }
        sleep(self.config.boot_delay()).await;
    }

    /// Connects, binds and serves until the transport fails.
    ///
    /// The listener is dropped, and with it the bound port, when this
    /// returns.
    pub async fn session(&mut self) -> anyhow::Result<()> {
        let ip = self.wifi.connect(self.config.connect_timeout()).await?;

        let addr = SocketAddr::new(ip, self.config.server.port);
        let listener = listener::bind(addr, self.config.server.backlog)?;

        if let Err(e) = self.screen().ready(READY_TEXT, ip) {
            tracing::warn!(error = %e, "Ready screen failed");
        }

        tracing::info!(state = %self.dispatcher.state(), "Starting server...");
        let max_request_bytes = self.config.server.max_request_bytes;
        listener::serve(&listener, &mut self.dispatcher, max_request_bytes).await
    }

    /// Shows the error screen and waits for the operator before returning.
    ///
    /// Only a press made after the error screen is up counts.
    pub async fn recover(&mut self) -> Button {
        self.buttons.clear();

        let network = self.wifi.network().to_string();
        let waited = self.config.connect_timeout();
        if let Err(e) = self.screen().error(&network, waited, true) {
            tracing::warn!(error = %e, "Error screen failed");
        }

        let button = wait_for_press(&mut self.buttons, self.config.button_poll()).await;

        if let Err(e) = self.screen().reconnect(reconnect_text(button), REBOOT_HINT) {
            tracing::warn!(error = %e, "Reconnect screen failed");
        }
        sleep(self.config.retry_delay()).await;

        button
    }
}
