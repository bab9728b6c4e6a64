//! Screen layouts: the status screen and the operator screens shown by the
//! supervisor while connecting or recovering.

use std::net::IpAddr;
use std::time::Duration;

use crate::display::DisplayPainter;
use crate::display::palette::{self, Rgb565};
use crate::display::panel::Panel;
use crate::status::{ColorState, TextLines};

/// Longest line that fits the panel width.
pub const MAX_LINE_CHARS: usize = 28;

const LEFT_MARGIN: u16 = 2;
const LINE_HEIGHT: u16 = 20;

/// Shortens `text` to fit one panel line, marking the cut with `...`.
///
/// # Example
///
/// ```
/// # use pi_in_the_sky::display::screens::trim;
/// assert_eq!(trim("short"), "short");
/// assert_eq!(trim(&"x".repeat(30)), format!("{}...", "x".repeat(25)));
/// ```
pub fn trim(text: &str) -> String {
    if text.chars().count() > MAX_LINE_CHARS {
        let kept: String = text.chars().take(MAX_LINE_CHARS - 3).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

/// Background and text color for a state.
pub fn colors_for(state: ColorState) -> (Rgb565, Rgb565) {
    match state {
        ColorState::Green => (palette::GREEN, palette::BLACK),
        ColorState::Yellow => (palette::YELLOW, palette::BLACK),
        ColorState::Red => (palette::RED, palette::WHITE),
        ColorState::DarkRed => (palette::DARK_RED, palette::WHITE),
    }
}

/// Paints status and operator screens onto a [`Panel`].
pub struct StatusScreen<P> {
    panel: P,
}

impl<P: Panel> StatusScreen<P> {
    pub fn new(panel: P) -> Self {
        Self { panel }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Shown once at power-up before the first connection attempt.
    pub fn boot(&mut self, text: &str) -> anyhow::Result<()> {
        self.panel.fill(palette::PURPLE);
        self.panel.text(text, LEFT_MARGIN, 20, palette::WHITE);
        self.panel.show()
    }

    /// Shown when the server is listening on `ip`.
    pub fn ready(&mut self, text: &str, ip: IpAddr) -> anyhow::Result<()> {
        self.panel.fill(palette::PINK);
        self.panel.text(text, LEFT_MARGIN, 20, palette::BLACK);
        self.panel.text(&format!("IPv4: {ip}"), 4, 60, palette::BLACK);
        self.panel.show()
    }

    /// Shown after the serving session failed.
    pub fn error(&mut self, network: &str, waited: Duration, retry: bool) -> anyhow::Result<()> {
        self.panel.fill(palette::ORANGE);
        self.panel.text("CONNECTION FAILED!!!!", LEFT_MARGIN, 20, palette::WHITE);
        self.panel.text(&trim(&format!("Network: {network}")), 10, 40, palette::WHITE);
        self.panel.text(
            &format!("Waited: {} seconds.", waited.as_secs()),
            10,
            60,
            palette::WHITE,
        );
        self.panel.text("Restart Pico to try again!", LEFT_MARGIN, 80, palette::WHITE);
        if retry {
            self.panel.text("A or B to retry...", 10, 120, palette::WHITE);
        }
        self.panel.show()
    }

    /// Shown while a reconnect requested by the operator is under way.
    pub fn reconnect(&mut self, top: &str, bottom: &str) -> anyhow::Result<()> {
        self.panel.fill(palette::PURPLE);
        if !top.is_empty() {
            self.panel.text(&trim(top), LEFT_MARGIN, 20, palette::WHITE);
        }
        if !bottom.is_empty() {
            self.panel.text(&trim(bottom), LEFT_MARGIN, 40, palette::WHITE);
        }
        self.panel.show()
    }
}

impl<P: Panel> DisplayPainter for StatusScreen<P> {
    fn paint(&mut self, state: ColorState, lines: &TextLines) -> anyhow::Result<()> {
        let (background, text_color) = colors_for(state);
        self.panel.fill(background);

        for (row, line) in (0u16..).zip(lines.iter()) {
            if !line.is_empty() {
                self.panel.text(&trim(line), LEFT_MARGIN, row * LINE_HEIGHT, text_color);
            }
        }

        self.panel.show()
    }
}
