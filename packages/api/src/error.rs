use reqwest::StatusCode;

/// Errors returned by [`crate::HttpServicesApi`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} responded with {status}")]
    Status { status: StatusCode, url: String },
    #[error("{0} not found")]
    NotFound(String),
}

impl ApiError {
    /// Map a non-success status to an error. `None` for 2xx.
    pub(crate) fn from_status(status: StatusCode, url: &str) -> Option<Self> {
        if status.is_success() {
            None
        } else if status == StatusCode::NOT_FOUND {
            Some(ApiError::NotFound(url.to_string()))
        } else {
            Some(ApiError::Status {
                status,
                url: url.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(ApiError::from_status(StatusCode::OK, "/api/services/").is_none());
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "/api/services/9/"),
            Some(ApiError::NotFound(url)) if url == "/api/services/9/"
        ));
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "/api/services/").unwrap();
        assert_eq!(
            err.to_string(),
            "/api/services/ responded with 502 Bad Gateway"
        );
    }
}
