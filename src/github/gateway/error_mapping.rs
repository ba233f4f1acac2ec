//! Error mapping for the Octocrab gateway.

use http::StatusCode;

use crate::error::GateError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> GateError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_status(operation, source.status_code, &source.message);
    }

    if is_network_error(error) {
        return GateError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    GateError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_status(operation: &str, status: StatusCode, message: &str) -> GateError {
    if is_auth_failure(status) {
        GateError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        GateError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::map_status;
    use crate::error::GateError;

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED)]
    #[case::forbidden(StatusCode::FORBIDDEN)]
    fn auth_statuses_map_to_authentication(#[case] status: StatusCode) {
        let error = map_status("rate limit", status, "Bad credentials");
        assert!(
            matches!(&error, GateError::Authentication { message } if message.contains("Bad credentials")),
            "expected Authentication, got {error:?}"
        );
    }

    #[rstest]
    #[case::not_found(StatusCode::NOT_FOUND)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    fn other_statuses_map_to_api(#[case] status: StatusCode) {
        let error = map_status("rate limit", status, "boom");
        assert!(
            matches!(&error, GateError::Api { message } if message.contains(status.as_str())),
            "expected Api, got {error:?}"
        );
    }
}
