//! API responses and status classification.

use crate::error::{Error, Result};

/// Raw API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl Response {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx responses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Classifies a response by status code.
///
/// | Status          | Result                     |
/// |-----------------|----------------------------|
/// | 204, 301, 302   | `Ok`                       |
/// | 401             | [`Error::Unauthorized`]    |
/// | 403             | [`Error::Forbidden`]       |
/// | 404             | [`Error::NotFound`]        |
/// | 422             | [`Error::Unprocessable`]   |
/// | other non-2xx   | [`Error::Api`]             |
/// | other 2xx       | `Ok`                       |
///
/// # Errors
///
/// Returns a status error carrying the response for unsuccessful codes.
pub fn check_response(response: Response) -> Result<Response> {
    match response.status {
        204 | 301 | 302 => Ok(response),
        401 => Err(Error::Unauthorized(response)),
        403 => Err(Error::Forbidden(response)),
        404 => Err(Error::NotFound(response)),
        422 => Err(Error::Unprocessable(response)),
        status if !(200..300).contains(&status) => Err(Error::Api(response)),
        _ => Ok(response),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    fn check(status: u16) -> Result<Response> {
        check_response(Response::new(status, "body"))
    }

    #[test]
    fn test_success_codes() {
        for status in [200, 201, 202, 204, 299, 301, 302] {
            let response = check(status).unwrap();
            assert_eq!(response.status, status);
            assert_eq!(response.body, "body");
        }
    }

    #[test]
    fn test_named_failures() {
        assert!(matches!(check(401), Err(Error::Unauthorized(_))));
        assert!(matches!(check(403), Err(Error::Forbidden(_))));
        assert!(matches!(check(404), Err(Error::NotFound(_))));
        assert!(matches!(check(422), Err(Error::Unprocessable(_))));
    }

    #[test]
    fn test_generic_failures() {
        for status in [100, 303, 304, 400, 429, 500, 503] {
            assert!(matches!(check(status), Err(Error::Api(r)) if r.status == status));
        }
    }

    #[test]
    fn test_is_success() {
        assert!(Response::new(202, "").is_success());
        assert!(!Response::new(302, "").is_success());
    }
}
