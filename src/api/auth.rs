use axum::http::HeaderMap;

pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

/// Shared-secret gate for mutating operations. Exact, case-sensitive
/// comparison of the `X-Access-Token` header against the configured secret.
/// An unconfigured secret rejects every request.
pub fn authorize(headers: &HeaderMap, secret: Option<&str>) -> bool {
    let Some(secret) = secret else {
        return false;
    };

    headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        == Some(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(ACCESS_TOKEN_HEADER.as_bytes()).unwrap(),
            HeaderValue::from_str(token).unwrap(),
        );
        headers
    }

    #[test]
    fn test_exact_match_passes() {
        assert!(authorize(&headers_with_token("s3cret"), Some("s3cret")));
    }

    #[test]
    fn test_wrong_or_missing_token_fails() {
        assert!(!authorize(&headers_with_token("wrong"), Some("s3cret")));
        assert!(!authorize(&HeaderMap::new(), Some("s3cret")));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert!(!authorize(&headers_with_token("S3CRET"), Some("s3cret")));
    }

    #[test]
    fn test_unconfigured_secret_rejects_everything() {
        assert!(!authorize(&headers_with_token("anything"), None));
        assert!(!authorize(&HeaderMap::new(), None));
    }
}
