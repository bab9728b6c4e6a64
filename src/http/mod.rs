//! Minimal HTTP/1.x handling for the display server.
//!
//! Only the request-target of the first line is used. Every connection
//! carries exactly one request and one response, and responses have no
//! `Content-Length`: the client reads until the server closes.
//!
//! # Architecture
//!
//! - **`connection`**: per-client state machine (read, process, write, close)
//! - **`parser`**: extracts path and query from the request line
//! - **`percent`**: `%XX` decoding of query values
//! - **`query`**: maps `line1`..`line7` parameters to display lines
//! - **`request`**: the parsed request-target
//! - **`response`**: response representation with builder
//! - **`writer`**: serializes and writes responses
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request head
//!        └──────┬──────┘
//!               │ Head received (or peer stopped sending)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve state, paint, render
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod parser;
pub mod percent;
pub mod query;
pub mod request;
pub mod response;
pub mod writer;
