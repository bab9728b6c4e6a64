use crate::http::request::Request;

/// Extracts the request-target from the first line of `line`.
///
/// The second whitespace-delimited token is the target. With fewer than two
/// tokens the path is empty. Method and version are not validated.
pub fn parse_request_line(line: &str) -> Request {
    let first = line.lines().next().unwrap_or("");
    let mut parts = first.split_whitespace();

    match parts.nth(1) {
        Some(target) => Request::from_target(target),
        None => Request::default(),
    }
}

/// Parses the request line at the start of a raw request buffer.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn parse_request(buf: &[u8]) -> Request {
    let line_end = find_line_end(buf).unwrap_or(buf.len());
    let line = String::from_utf8_lossy(&buf[..line_end]);
    parse_request_line(&line)
}

/// Position of the first `\n` in `buf`, if any.
pub fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}

/// Position of the blank line terminating the header block, if present.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
        .or_else(|| buf.windows(2).position(|w| w == b"\n\n"))
}
