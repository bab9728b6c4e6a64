//! Maps a query string onto the seven display lines.

use crate::http::percent;
use crate::status::lines::{LINE_COUNT, TextLines};

/// Returns the line number named by `key` (`line1` to `line7`).
fn line_number(key: &str) -> Option<usize> {
    let n: usize = key.strip_prefix("line")?.parse().ok()?;
    // "line01" would parse to 1; only the canonical spelling counts
    if (1..=LINE_COUNT).contains(&n) && key.len() == 5 {
        Some(n)
    } else {
        None
    }
}

/// Splits `query` into the seven display lines.
///
/// Segments are separated by `&` and split on the first `=`. Segments
/// without `=` and unknown keys are skipped. A repeated key keeps its last
/// value. Values are percent-decoded.
///
/// # Example
///
/// ```
/// # use pi_in_the_sky::http::query::map_lines;
/// let lines = map_lines(Some("line1=Hi%20there&line2=Bye"));
/// assert_eq!(lines.get(1), Some("Hi there"));
/// assert_eq!(lines.get(2), Some("Bye"));
/// assert_eq!(lines.get(3), Some(""));
/// ```
pub fn map_lines(query: Option<&str>) -> TextLines {
    let mut lines = TextLines::new();

    let Some(query) = query else {
        return lines;
    };

    for segment in query.split('&') {
        let Some((key, value)) = segment.split_once('=') else {
            tracing::debug!(segment, "Skipping query segment without '='");
            continue;
        };

        if let Some(n) = line_number(key) {
            lines.set(n, percent::decode_to_string(value));
        }
    }

    lines
}
