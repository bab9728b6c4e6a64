//! Allowlist of request paths that may change the display state.

use crate::status::state::ColorState;

/// Path prefixes accepted by the server and the state each one selects.
pub const ROUTES: [(&str, ColorState); 4] = [
    ("/red", ColorState::Red),
    ("/yellow", ColorState::Yellow),
    ("/green", ColorState::Green),
    ("/late", ColorState::DarkRed),
];

fn starts_with_ignore_case(path: &str, prefix: &str) -> bool {
    path.len() >= prefix.len()
        && path.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Looks up the state selected by `path`.
///
/// Matching is an ASCII case-insensitive prefix match. Returns `None` for any
/// path outside the allowlist; such requests must be rejected untouched.
///
/// # Example
///
/// ```
/// # use pi_in_the_sky::status::{resolver::route, ColorState};
/// assert_eq!(route("/Late"), Some(ColorState::DarkRed));
/// assert_eq!(route("/unknown"), None);
/// ```
pub fn route(path: &str) -> Option<ColorState> {
    ROUTES
        .iter()
        .find(|(prefix, _)| starts_with_ignore_case(path, prefix))
        .map(|(_, state)| *state)
}

/// Computes the next state for `path` given the `current` one.
///
/// `None` means the path is not allowlisted and `current` must stay as is.
pub fn resolve(path: &str, current: ColorState) -> Option<ColorState> {
    let next = route(path)?;
    tracing::debug!(path, from = %current, to = %next, "Resolved path");
    Some(next)
}
