use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use error_stack::Report;

use kernel::KernelError;

use crate::error::ErrorStatus;

/// JSON body whose decoding failures answer with the standard error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ErrorStatus))]
pub struct JsonBody<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ErrorStatus))]
pub struct QueryParams<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ErrorStatus))]
pub struct PathParam<T>(pub T);

fn invalid_input(reason: String) -> ErrorStatus {
    ErrorStatus::from(Report::new(KernelError::InvalidInput).attach_printable(reason))
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        invalid_input(rejection.body_text())
    }
}

impl From<QueryRejection> for ErrorStatus {
    fn from(rejection: QueryRejection) -> Self {
        invalid_input(rejection.body_text())
    }
}

impl From<PathRejection> for ErrorStatus {
    fn from(rejection: PathRejection) -> Self {
        invalid_input(rejection.body_text())
    }
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::extract::{FromRequest, FromRequestParts};
    use axum::http::{header, Request, StatusCode};
    use axum::response::{IntoResponse, Response};
    use serde::Deserialize;
    use time::Date;

    use crate::extract::{JsonBody, QueryParams};

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Window {
        from: Option<Date>,
    }

    #[derive(Debug, Deserialize)]
    struct Return {
        returned_on: Date,
    }

    async fn error_kind(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, body["error"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_input() {
        let request = Request::builder()
            .method("POST")
            .uri("/returns")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"returned_on": "yesterday"}"#))
            .unwrap();
        let rejection = JsonBody::<Return>::from_request(request, &())
            .await
            .err()
            .unwrap();

        let (status, kind) = error_kind(rejection.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(kind, "invalid_input");
    }

    #[tokio::test]
    async fn malformed_query_is_invalid_input() {
        let (mut parts, _) = Request::builder()
            .uri("/repairs?from=2025-13-40")
            .body(())
            .unwrap()
            .into_parts();
        let rejection = QueryParams::<Window>::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();

        let (status, kind) = error_kind(rejection.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(kind, "invalid_input");
    }

    #[tokio::test]
    async fn well_formed_body_is_decoded() {
        let request = Request::builder()
            .method("POST")
            .uri("/returns")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"returned_on": "2025-08-05"}"#))
            .unwrap();
        let JsonBody(decoded) = JsonBody::<Return>::from_request(request, &())
            .await
            .ok()
            .unwrap();
        assert_eq!(decoded.returned_on, time::macros::date!(2025 - 08 - 05));
    }
}
