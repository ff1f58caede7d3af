use lifeplus_client::error::{ApiError, AppError};
use reqwest::StatusCode;
use std::collections::HashMap;

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound;
    assert_eq!(error.to_string(), "not found");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("quantity must be positive".to_string());
    assert_eq!(error.to_string(), "invalid input: quantity must be positive");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_GATEWAY);
    assert!(error.to_string().contains("502"));
}

#[test]
fn test_api_error_display_without_field_errors() {
    let error = ApiError::new(500, "server error");
    assert_eq!(error.to_string(), "api error (500): server error");
}

#[test]
fn test_api_error_display_with_field_errors() {
    let mut errors = HashMap::new();
    errors.insert("phone".to_string(), vec!["required".to_string()]);
    let error = ApiError {
        status: 422,
        message: "validation failed".to_string(),
        errors,
    };
    let display = error.to_string();
    assert!(display.contains("422"));
    assert!(display.contains("validation failed"));
    assert!(display.contains("1 field(s) invalid"));
}

#[test]
fn test_api_error_field_errors_accessor() {
    let mut errors = HashMap::new();
    errors.insert(
        "phone".to_string(),
        vec!["required".to_string(), "must be numeric".to_string()],
    );
    let error = ApiError {
        status: 422,
        message: "validation failed".to_string(),
        errors,
    };

    assert_eq!(
        error.field_errors("phone"),
        Some(&["required".to_string(), "must be numeric".to_string()][..])
    );
    assert_eq!(error.field_errors("password"), None);
}

#[test]
fn test_app_error_as_api_error() {
    let error = AppError::Api(ApiError::new(422, "validation failed"));
    assert_eq!(error.as_api_error().map(|e| e.status), Some(422));
    assert!(AppError::Unauthorized.as_api_error().is_none());
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}
