//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::Serialize;

use crate::models::ErrorBody;
use crate::Error;

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";

fn builder(status: u16) -> lambda_http::http::response::Builder {
    Response::builder()
        .status(status)
        .header("access-control-allow-origin", "*")
        .header("access-control-allow-methods", ALLOWED_METHODS)
        .header("access-control-allow-headers", "Content-Type, Authorization")
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    Ok(builder(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(data)?))
        .map_err(Box::new)?)
}

/// Create the `{ error, details }` response for a failed request.
pub fn error_response(error: &Error) -> Result<Response<Body>, lambda_http::Error> {
    let body = ErrorBody {
        error: error.category(),
        details: error.to_string(),
    };

    let mut response = json_response(error.status_code(), &body)?;
    if let Error::MethodNotAllowed(_) = error {
        response
            .headers_mut()
            .insert("allow", lambda_http::http::HeaderValue::from_static(ALLOWED_METHODS));
    }

    Ok(response)
}

/// Answer a CORS preflight with no body.
pub fn preflight_response() -> Result<Response<Body>, lambda_http::Error> {
    Ok(builder(200).body(Body::Empty).map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(response: &Response<Body>) -> serde_json::Value {
        serde_json::from_slice(response.body().as_ref()).unwrap()
    }

    #[test]
    fn test_error_response_shape() {
        let response = error_response(&Error::UpstreamStatus {
            status: 500,
            body: "oops".to_string(),
        })
        .unwrap();

        assert_eq!(response.status(), 502);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body = body_json(&response);
        assert_eq!(body["error"], "External service error");
        assert!(body["details"].as_str().unwrap().contains("500"));
    }

    #[test]
    fn test_method_not_allowed_sets_allow() {
        let response = error_response(&Error::MethodNotAllowed("DELETE".to_string())).unwrap();

        assert_eq!(response.status(), 405);
        assert_eq!(response.headers()["allow"], ALLOWED_METHODS);
        assert_eq!(body_json(&response)["error"], "Method not allowed");
    }

    #[test]
    fn test_preflight() {
        let response = preflight_response().unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert!(matches!(response.body(), Body::Empty));
    }
}
