//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use skylark_domain::SkylarkError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SkylarkError);

impl From<InfraError> for SkylarkError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SkylarkError> for InfraError {
    fn from(value: SkylarkError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSkylarkError {
    fn into_skylark(self) -> SkylarkError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SkylarkError */
/* -------------------------------------------------------------------------- */

impl IntoSkylarkError for HttpError {
    fn into_skylark(self) -> SkylarkError {
        if self.is_timeout() {
            return SkylarkError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return SkylarkError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return SkylarkError::Upstream(format!("failed to decode response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => SkylarkError::Auth(message),
                400..=499 if code != 429 => SkylarkError::InvalidInput(message),
                _ => SkylarkError::Network(message),
            };
        }

        SkylarkError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_skylark())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let mapped: SkylarkError = InfraError::from(status_error(StatusCode::UNAUTHORIZED).await).into();
        match mapped {
            SkylarkError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_status_422_maps_to_invalid_input() {
        let mapped: SkylarkError =
            InfraError::from(status_error(StatusCode::UNPROCESSABLE_ENTITY).await).into();
        assert!(matches!(mapped, SkylarkError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn rate_limits_and_server_errors_map_to_network() {
        let throttled: SkylarkError =
            InfraError::from(status_error(StatusCode::TOO_MANY_REQUESTS).await).into();
        let unavailable: SkylarkError =
            InfraError::from(status_error(StatusCode::SERVICE_UNAVAILABLE).await).into();

        assert!(matches!(throttled, SkylarkError::Network(_)));
        assert!(matches!(unavailable, SkylarkError::Network(_)));
    }

    #[test]
    fn domain_errors_round_trip_through_newtype() {
        let original = SkylarkError::Config("missing".into());
        let back: SkylarkError = InfraError::from(original.clone()).into();
        assert_eq!(back, original);
    }
}
