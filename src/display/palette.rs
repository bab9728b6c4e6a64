/// A color in the panel's native 16-bit layout.
///
/// The panel takes RGB565 with the two bytes swapped, so the value is not a
/// plain `rrrrrggggggbbbbb` word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    /// Converts an RGB888 triple to the panel's byte-swapped RGB565.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (r, g, b) = (r as u16, g as u16, b as u16);
        let low = ((g & 0b0001_1100) << 3) + ((b & 0b1111_1000) >> 3);
        let high = (r & 0b1111_1000) + ((g & 0b1110_0000) >> 5);
        Self((low << 8) + high)
    }

    /// Raw 16-bit value as sent to the panel.
    pub const fn raw(self) -> u16 {
        self.0
    }
}

pub const RED: Rgb565 = Rgb565::from_rgb(255, 0, 0);
pub const YELLOW: Rgb565 = Rgb565::from_rgb(255, 255, 0);
pub const GREEN: Rgb565 = Rgb565::from_rgb(0, 255, 0);
pub const WHITE: Rgb565 = Rgb565::from_rgb(255, 255, 255);
pub const BLACK: Rgb565 = Rgb565::from_rgb(0, 0, 0);
pub const ORANGE: Rgb565 = Rgb565::from_rgb(204, 132, 0);
pub const PURPLE: Rgb565 = Rgb565::from_rgb(111, 0, 255);
pub const PINK: Rgb565 = Rgb565::from_rgb(254, 221, 228);
pub const DARK_RED: Rgb565 = Rgb565::from_rgb(120, 0, 33);

/// Human-readable name of a palette color, for logs.
pub fn name(color: Rgb565) -> &'static str {
    match color {
        c if c == RED => "red",
        c if c == YELLOW => "yellow",
        c if c == GREEN => "green",
        c if c == WHITE => "white",
        c if c == BLACK => "black",
        c if c == ORANGE => "orange",
        c if c == PURPLE => "purple",
        c if c == PINK => "pink",
        c if c == DARK_RED => "dark_red",
        _ => "custom",
    }
}
