use std::fmt;

/// The display's current mode, driving background and text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorState {
    /// All good
    #[default]
    Green,
    /// Busy or away
    Yellow,
    /// Do not disturb
    Red,
    /// Running late
    DarkRed,
}

impl ColorState {
    /// Returns the upper-case name reported in the status page.
    ///
    /// # Example
    ///
    /// ```
    /// # use pi_in_the_sky::status::ColorState;
    /// assert_eq!(ColorState::DarkRed.name(), "DARK_RED");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            ColorState::Green => "GREEN",
            ColorState::Yellow => "YELLOW",
            ColorState::Red => "RED",
            ColorState::DarkRed => "DARK_RED",
        }
    }
}

impl fmt::Display for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
