use pi_in_the_sky::http::response::{ResponseBuilder, StatusCode};
use pi_in_the_sky::http::writer::{ResponseWriter, serialize_response};
use pi_in_the_sky::status::ColorState;
use pi_in_the_sky::status::render::{render_not_found, render_ok};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("B", "2")
        .header("A", "1")
        .header("C", "3")
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["B", "A", "C"]);
}

#[test]
fn test_response_builder_replaces_header_in_place() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Server", "one")
        .header("X", "x")
        .header("server", "two")
        .build();

    assert_eq!(response.headers.len(), 2);
    assert_eq!(response.headers[0].1, "two");
}

#[test]
fn test_response_builder_adds_no_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"body".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), None);
}

#[test]
fn test_render_ok_headers_in_order() {
    let response = render_ok(ColorState::Yellow);

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.headers,
        vec![
            ("Cache-Control".to_string(), "no-cache".to_string()),
            ("Server".to_string(), "pi-in-the-sky".to_string()),
            ("Content-Type".to_string(), "text/html".to_string()),
        ]
    );
}

#[test]
fn test_render_ok_body_reports_state_and_links() {
    let response = render_ok(ColorState::DarkRed);
    let body = String::from_utf8(response.body).unwrap();

    assert!(body.contains("<p>Screen is DARK_RED</p>"));
    assert!(body.contains("href='/green'"));
    assert!(body.contains("href='/yellow'"));
    assert!(body.contains("href='/red'"));
}

#[test]
fn test_render_ok_is_deterministic() {
    assert_eq!(render_ok(ColorState::Red), render_ok(ColorState::Red));
    assert_ne!(render_ok(ColorState::Red).body, render_ok(ColorState::Green).body);
}

#[test]
fn test_render_not_found() {
    let response = render_not_found();
    let body = String::from_utf8(response.body.clone()).unwrap();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.header("Server"), Some("pi-in-the-sky"));
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("Cache-Control"), Some("no-cache"));
    assert!(body.contains("Not Found"));
}

#[test]
fn test_serialize_wire_layout() {
    let bytes = serialize_response(&render_ok(ColorState::Green));
    let text = String::from_utf8(bytes).unwrap();

    let expected_head = "HTTP/1.1 200 OK\r\n\
Cache-Control: no-cache\r\n\
Server: pi-in-the-sky\r\n\
Content-Type: text/html\r\n\
\r\n";
    assert!(text.starts_with(expected_head), "got {text:?}");
    assert!(text.ends_with("</html>\n"));
}

#[test]
fn test_serialize_not_found_status_line() {
    let bytes = serialize_response(&render_not_found());

    assert!(bytes.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
}

#[tokio::test]
async fn test_writer_writes_everything() {
    let response = render_ok(ColorState::Red);
    let expected = serialize_response(&response);

    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&response);
    assert_eq!(writer.remaining(), expected.len());

    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, expected);
    assert_eq!(writer.remaining(), 0);
}
