//! Display output.
//!
//! The HTTP side only knows about [`DisplayPainter`]: it hands over a color
//! state and seven lines and expects them on the panel when the call
//! returns. [`StatusScreen`] is the painter used by the binary; it lays the
//! lines out on any [`Panel`], such as the in-memory [`Canvas`].

pub mod palette;
pub mod panel;
pub mod screens;

pub use palette::Rgb565;
pub use panel::{Canvas, Panel};
pub use screens::StatusScreen;

use crate::status::{ColorState, TextLines};

/// Renders a state and its text lines onto the physical display.
///
/// Painting is blocking; the server waits for it before replying.
pub trait DisplayPainter {
    fn paint(&mut self, state: ColorState, lines: &TextLines) -> anyhow::Result<()>;
}
