//! Display state and the request-to-display pipeline.
//!
//! - **`state`**: the four color states
//! - **`lines`**: the seven text lines shown under the color
//! - **`resolver`**: allowlisted paths and the state each selects
//! - **`render`**: status and not-found pages
//! - **`dispatcher`**: runs one request through the pipeline
//!
//! ```text
//! raw bytes ─► parse ─► path ──► resolve ──┬─ none ─► 404
//!                   └─► query ─► map_lines ┴─ state ─► paint ─► commit ─► 200
//! ```

pub mod dispatcher;
pub mod lines;
pub mod render;
pub mod resolver;
pub mod state;

pub use dispatcher::Dispatcher;
pub use lines::TextLines;
pub use state::ColorState;
