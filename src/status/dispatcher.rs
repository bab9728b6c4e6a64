use crate::display::DisplayPainter;
use crate::http::parser::parse_request;
use crate::http::query::map_lines;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::status::render::{render_not_found, render_ok};
use crate::status::resolver::resolve;
use crate::status::state::ColorState;

/// Turns requests into display updates and responses.
///
/// Owns the single [`ColorState`] of the device. The state changes only when
/// a request hits an allowlisted path; anything else is answered with 404
/// and leaves both the state and the panel alone.
pub struct Dispatcher<D> {
    painter: D,
    state: ColorState,
}

impl<D: DisplayPainter> Dispatcher<D> {
    /// Creates a dispatcher starting in [`ColorState::Green`].
    pub fn new(painter: D) -> Self {
        Self {
            painter,
            state: ColorState::default(),
        }
    }

    pub fn state(&self) -> ColorState {
        self.state
    }

    pub fn painter(&self) -> &D {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut D {
        &mut self.painter
    }

    /// Handles the raw bytes of one request.
    pub fn handle_bytes(&mut self, raw: &[u8]) -> Response {
        let request = parse_request(raw);
        self.handle(&request)
    }

    /// Handles one parsed request and returns the response to send.
    pub fn handle(&mut self, request: &Request) -> Response {
        let Some(next) = resolve(&request.path, self.state) else {
            tracing::info!(path = %request.path, "Rejected unsupported path");
            return render_not_found();
        };

        let lines = map_lines(request.query.as_deref());

        // A failed paint still reports the requested state to the client
        if let Err(e) = self.painter.paint(next, &lines) {
            tracing::warn!(state = %next, error = %e, "Display paint failed");
        }

        if next != self.state {
            tracing::info!(from = %self.state, to = %next, "Display state changed");
        }
        self.state = next;

        render_ok(next)
    }
}
