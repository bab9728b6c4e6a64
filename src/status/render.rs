//! HTML pages returned to clients.

use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::status::state::ColorState;

/// Value of the `Server` header.
pub const SERVER_NAME: &str = "pi-in-the-sky";

const HEAD: &str = "<!DOCTYPE html><html lang='en'><head><meta charset='UTF-8' />\
<meta http-equiv='X-UA-Compatible' content='IE=edge' />\
<meta name='viewport' content='width=device-width, initial-scale=1.0' />\
<title>Pico Status</title></head>";

const NOT_FOUND_BODY: &str = "<body><h1>Not Found</h1>\
<p>The URL you submitted does not exist on this server.</p></body></html>";

fn page(status: StatusCode, body: String) -> Response {
    ResponseBuilder::new(status)
        .header("Cache-Control", "no-cache")
        .header("Server", SERVER_NAME)
        .header("Content-Type", "text/html")
        .body(body.into_bytes())
        .build()
}

/// Status page with navigation links and the current state name.
pub fn render_ok(state: ColorState) -> Response {
    let body = format!(
        "{HEAD}<body>\
<a href='/green'>Green</a><br /><br />\
<a href='/yellow'>Yellow</a><br /><br />\
<a href='/red'>Red</a>\
<p>Screen is {state}</p></body></html>\n"
    );
    page(StatusCode::Ok, body)
}

/// Static page for paths outside the allowlist.
pub fn render_not_found() -> Response {
    page(StatusCode::NotFound, format!("{HEAD}{NOT_FOUND_BODY}\n"))
}
