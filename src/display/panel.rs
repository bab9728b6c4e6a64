use crate::display::palette::{self, Rgb565};

/// Drawing surface the screens are painted on.
///
/// Calls draw into a back buffer; nothing is visible until [`Panel::show`].
pub trait Panel {
    /// Fills the whole buffer with `color`.
    fn fill(&mut self, color: Rgb565);

    /// Draws `text` with its top-left corner at (`x`, `y`).
    fn text(&mut self, text: &str, x: u16, y: u16, color: Rgb565);

    /// Pushes the buffer to the screen.
    fn show(&mut self) -> anyhow::Result<()>;
}

/// One text draw call recorded by [`Canvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOp {
    pub text: String,
    pub x: u16,
    pub y: u16,
    pub color: Rgb565,
}

/// A frame as it was last shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub background: Option<Rgb565>,
    pub texts: Vec<TextOp>,
}

impl Frame {
    /// Text of every draw call, top to bottom in call order.
    pub fn lines(&self) -> Vec<&str> {
        self.texts.iter().map(|op| op.text.as_str()).collect()
    }
}

/// In-memory panel that records draw calls and logs each shown frame.
#[derive(Debug, Default)]
pub struct Canvas {
    pending: Frame,
    shown: Frame,
    frames: usize,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame pushed by the latest `show`.
    pub fn shown(&self) -> &Frame {
        &self.shown
    }

    /// Number of frames shown so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Panel for Canvas {
    fn fill(&mut self, color: Rgb565) {
        // A fill covers everything drawn before it
        self.pending = Frame {
            background: Some(color),
            texts: Vec::new(),
        };
    }

    fn text(&mut self, text: &str, x: u16, y: u16, color: Rgb565) {
        self.pending.texts.push(TextOp {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }

    fn show(&mut self) -> anyhow::Result<()> {
        self.shown = self.pending.clone();
        self.frames += 1;

        let background = self.shown.background.map(palette::name).unwrap_or("none");
        tracing::info!(frame = self.frames, background, "Display updated");
        for op in &self.shown.texts {
            tracing::info!(x = op.x, y = op.y, color = palette::name(op.color), "  {}", op.text);
        }

        Ok(())
    }
}
