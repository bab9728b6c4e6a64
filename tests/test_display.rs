use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use pi_in_the_sky::display::palette;
use pi_in_the_sky::display::screens::{MAX_LINE_CHARS, colors_for, trim};
use pi_in_the_sky::display::{Canvas, DisplayPainter, Rgb565, StatusScreen};
use pi_in_the_sky::status::{ColorState, TextLines};

#[test]
fn test_palette_conversion() {
    assert_eq!(Rgb565::from_rgb(255, 0, 0), palette::RED);
    assert_eq!(palette::BLACK.raw(), 0);
    assert_eq!(palette::WHITE.raw(), 0xFFFF);
    assert_eq!(palette::name(palette::DARK_RED), "dark_red");
    assert_eq!(palette::name(Rgb565(0x1234)), "custom");
}

#[test]
fn test_trim_boundaries() {
    let exact = "y".repeat(MAX_LINE_CHARS);
    assert_eq!(trim(&exact), exact);

    let long = "z".repeat(MAX_LINE_CHARS + 1);
    let trimmed = trim(&long);
    assert_eq!(trimmed.chars().count(), MAX_LINE_CHARS);
    assert!(trimmed.ends_with("..."));
}

#[test]
fn test_trim_counts_characters_not_bytes() {
    let text = "é".repeat(MAX_LINE_CHARS);
    assert_eq!(trim(&text), text);
}

#[test]
fn test_state_colors() {
    assert_eq!(colors_for(ColorState::Green), (palette::GREEN, palette::BLACK));
    assert_eq!(colors_for(ColorState::Yellow), (palette::YELLOW, palette::BLACK));
    assert_eq!(colors_for(ColorState::Red), (palette::RED, palette::WHITE));
    assert_eq!(colors_for(ColorState::DarkRed), (palette::DARK_RED, palette::WHITE));
}

#[test]
fn test_paint_status_layout() {
    let mut screen = StatusScreen::new(Canvas::new());
    let lines = TextLines::from(["first", "", "third", "", "", "", "seventh"]);

    screen.paint(ColorState::Red, &lines).unwrap();

    let frame = screen.panel().shown();
    assert_eq!(frame.background, Some(palette::RED));
    assert_eq!(frame.lines(), ["first", "third", "seventh"]);

    let rows: Vec<u16> = frame.texts.iter().map(|op| op.y).collect();
    assert_eq!(rows, [0, 40, 120]);
    assert!(frame.texts.iter().all(|op| op.x == 2 && op.color == palette::WHITE));
}

#[test]
fn test_paint_replaces_previous_frame() {
    let mut screen = StatusScreen::new(Canvas::new());

    screen
        .paint(ColorState::Green, &TextLines::from(["a", "b", "", "", "", "", ""]))
        .unwrap();
    screen.paint(ColorState::Yellow, &TextLines::new()).unwrap();

    let frame = screen.panel().shown();
    assert_eq!(frame.background, Some(palette::YELLOW));
    assert!(frame.texts.is_empty());
    assert_eq!(screen.panel().frames(), 2);
}

#[test]
fn test_paint_trims_long_lines() {
    let mut screen = StatusScreen::new(Canvas::new());
    let long = "Back after the quarterly planning offsite";
    let mut lines = TextLines::new();
    lines.set(1, long);

    screen.paint(ColorState::Green, &lines).unwrap();

    assert_eq!(screen.panel().shown().lines(), [trim(long).as_str()]);
}

#[test]
fn test_operator_screens() {
    let mut screen = StatusScreen::new(Canvas::new());

    screen.boot("Waiting for connection...").unwrap();
    assert_eq!(screen.panel().shown().background, Some(palette::PURPLE));

    screen
        .ready("Ready and accepting requests!", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7)))
        .unwrap();
    assert_eq!(screen.panel().shown().background, Some(palette::PINK));
    assert!(screen.panel().shown().lines().contains(&"IPv4: 10.0.0.7"));

    screen.error("office", Duration::from_secs(10), true).unwrap();
    let frame = screen.panel().shown();
    assert_eq!(frame.background, Some(palette::ORANGE));
    assert!(frame.lines().contains(&"Network: office"));
    assert!(frame.lines().contains(&"Waited: 10 seconds."));
    assert!(frame.lines().contains(&"A or B to retry..."));

    screen.error("office", Duration::from_secs(10), false).unwrap();
    assert!(!screen.panel().shown().lines().contains(&"A or B to retry..."));

    screen.reconnect("Trying new server...", "").unwrap();
    assert_eq!(screen.panel().shown().lines(), ["Trying new server..."]);
}
