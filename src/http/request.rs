/// Represents the request-target extracted from a client's request line.
///
/// Only the target matters to the display; the method, version and headers
/// are never inspected. A missing or malformed target yields an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    /// The request path (e.g., "/green")
    pub path: String,
    /// Raw query string after the first `?`, if one was present
    pub query: Option<String>,
}

impl Request {
    /// Creates a request from a path and an optional raw query string.
    pub fn new(path: impl Into<String>, query: Option<impl Into<String>>) -> Self {
        Self {
            path: path.into(),
            query: query.map(Into::into),
        }
    }

    /// Builds a request from a request-target by splitting on the first `?`.
    ///
    /// # Example
    ///
    /// ```
    /// # use pi_in_the_sky::http::request::Request;
    /// let req = Request::from_target("/red?line1=a?b");
    /// assert_eq!(req.path, "/red");
    /// assert_eq!(req.query.as_deref(), Some("line1=a?b"));
    /// ```
    pub fn from_target(target: &str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self::new(path, Some(query)),
            None => Self::new(target, None::<String>),
        }
    }
}
