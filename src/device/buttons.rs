use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::sleep;

/// The two front buttons of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
}

pub trait ButtonInput {
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Drops any press registered before now.
    fn clear(&mut self) {}
}

/// Blocks until the operator presses A or B and returns which one.
pub async fn wait_for_press<B: ButtonInput>(buttons: &mut B, poll: Duration) -> Button {
    loop {
        for button in [Button::A, Button::B] {
            if buttons.is_pressed(button) {
                tracing::info!(?button, "Operator acknowledged");
                return button;
            }
        }
        sleep(poll).await;
    }
}

/// Buttons driven from the terminal: type `a` or `b` and press Enter.
///
/// Each press is reported once.
#[derive(Debug, Clone, Default)]
pub struct ConsoleButtons {
    a: Arc<AtomicBool>,
    b: Arc<AtomicBool>,
}

impl ConsoleButtons {
    /// Starts a task reading presses from stdin.
    pub fn spawn() -> Self {
        let buttons = Self::default();
        let (a, b) = (buttons.a.clone(), buttons.b.clone());

        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => match line.trim() {
                        "a" | "A" => a.store(true, Ordering::SeqCst),
                        "b" | "B" => b.store(true, Ordering::SeqCst),
                        "" => {}
                        other => tracing::debug!(input = other, "Ignoring console input"),
                    },
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "Console input failed");
                        break;
                    }
                }
            }
        });

        buttons
    }

    /// Records a press as if it came from the console.
    pub fn press(&self, button: Button) {
        match button {
            Button::A => self.a.store(true, Ordering::SeqCst),
            Button::B => self.b.store(true, Ordering::SeqCst),
        }
    }
}

impl ButtonInput for ConsoleButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::A => self.a.swap(false, Ordering::SeqCst),
            Button::B => self.b.swap(false, Ordering::SeqCst),
        }
    }

    fn clear(&mut self) {
        self.a.store(false, Ordering::SeqCst);
        self.b.store(false, Ordering::SeqCst);
    }
}
