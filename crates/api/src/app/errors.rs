use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockledger_core::DomainError;

/// Body used for every not-found response.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": NOT_FOUND_MESSAGE })),
        )
            .into_response(),
        DomainError::InsufficientStock {
            requested,
            available,
        } => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "success": false,
                "error": "Insufficient inventory",
                "requested": requested,
                "available": available,
            })),
        )
            .into_response(),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        let cases = [
            (DomainError::NotFound, StatusCode::NOT_FOUND),
            (DomainError::insufficient_stock(5, 2), StatusCode::BAD_REQUEST),
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::conflict("dup"), StatusCode::CONFLICT),
        ];
        for (err, expected) in cases {
            assert_eq!(domain_error_to_response(err).status(), expected);
        }
    }
}
