//! Form submission extractor
//!
//! Accepts either a urlencoded form post or a JSON object and yields the
//! untyped `RawSubmission` the form validators run on. Rejections come
//! back in the API error format.

use axum::{
    extract::{Form, FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json as AxumJson,
};

use super::error::{ApiErrorDetail, ApiErrorResponse, ApiErrorType};
use crate::domain::forms::RawSubmission;

/// Extractor wrapping a `RawSubmission`
#[derive(Debug, Clone, Default)]
pub struct Submission(pub RawSubmission);

impl Submission {
    pub fn into_inner(self) -> RawSubmission {
        self.0
    }
}

impl std::ops::Deref for Submission {
    type Target = RawSubmission;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection returned when the body cannot be read as form data
#[derive(Debug)]
pub struct SubmissionRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for SubmissionRejection {
    fn into_response(self) -> Response {
        let response = ApiErrorResponse {
            error: ApiErrorDetail {
                message: self.message,
                error_type: ApiErrorType::InvalidRequestError,
            },
        };

        (self.status, AxumJson(response)).into_response()
    }
}

impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = SubmissionRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            return match AxumJson::<serde_json::Value>::from_request(req, state).await {
                Ok(AxumJson(value)) if value.is_object() => {
                    Ok(Submission(RawSubmission::from_json(&value)))
                }
                Ok(_) => Err(SubmissionRejection {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: "Expected a JSON object of form fields".to_string(),
                }),
                Err(rejection) => Err(SubmissionRejection {
                    status: rejection.status(),
                    message: format!("Invalid JSON body: {}", rejection.body_text()),
                }),
            };
        }

        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => Ok(Submission(RawSubmission::from_pairs(pairs))),
            Err(rejection) => Err(SubmissionRejection {
                status: rejection.status(),
                message: format!("Invalid form body: {}", rejection.body_text()),
            }),
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .split(';')
                .next()
                .is_some_and(|mime| mime.trim() == "application/json")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    fn request(content_type: &str, body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_urlencoded_body() {
        let req = request(
            "application/x-www-form-urlencoded",
            "username=maria&phone_number=9+1234+5678",
        );

        let submission = Submission::from_request(req, &()).await.unwrap();
        assert_eq!(submission.value("username"), Some("maria"));
        assert_eq!(submission.value("phone_number"), Some("9 1234 5678"));
    }

    #[tokio::test]
    async fn test_json_body() {
        let req = request("application/json", r#"{"username": "maria", "stock": 5}"#);

        let submission = Submission::from_request(req, &()).await.unwrap();
        assert_eq!(submission.value("username"), Some("maria"));
        assert_eq!(submission.value("stock"), Some("5"));
    }

    #[tokio::test]
    async fn test_json_array_rejected() {
        let req = request("application/json", r#"["not", "an", "object"]"#);

        let result = Submission::from_request(req, &()).await;
        assert!(result.is_err());
    }
}
