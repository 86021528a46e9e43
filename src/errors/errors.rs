//! 애플리케이션 전역에서 사용하는 인증 에러 시스템
//!
//! 인증 실패 모드를 일관된 방식으로 전달하기 위한 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 각 실패 모드를
//! 기계 판독용 `code`와 사람이 읽는 `description`을 가진 JSON 응답으로
//! 변환합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "code": "token_expired",
//!   "description": "Token Expired"
//! }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AuthError;
//!
//! fn extract_token(header: &str) -> Result<&str, AuthError> {
//!     if header.is_empty() {
//!         return Err(AuthError::MissingAuthorization);
//!     }
//!     // ...
//!     # Ok(header)
//! }
//! ```

use thiserror::Error;

/// 인증 파이프라인 전역 에러 타입
///
/// 토큰 추출, 서명 검증, 권한 확인의 각 실패 모드를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Authorization 헤더 없음 (401 Unauthorized)
    #[error("Authorization header is expected.")]
    MissingAuthorization,

    /// 헤더/토큰 형식 오류 (401 Unauthorized)
    #[error("{0}")]
    InvalidHeader(String),

    /// 토큰 만료 (401 Unauthorized)
    #[error("Token Expired")]
    TokenExpired,

    /// audience/issuer 클레임 불일치 (401 Unauthorized)
    #[error("{0}")]
    InvalidClaims(String),

    /// permissions 클레임 자체가 없음 (403 Forbidden)
    ///
    /// Auth0 대시보드에서 RBAC 설정과 "Add Permissions in the Access Token"
    /// 옵션이 켜져 있어야 permissions 클레임이 발급됩니다.
    #[error("Permissions are not defined in token.")]
    MissingPermissions,

    /// 요구 권한 미보유 (403 Forbidden)
    #[error("You don't have sufficient permission to perform this action.")]
    NotPermitted,

    /// JWKS 조회/파싱 실패 (500 Internal Server Error)
    #[error("JWKS error: {0}")]
    Jwks(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    /// 기계 판독용 에러 코드를 반환합니다.
    ///
    /// 프론트엔드가 분기에 사용하는 안정적인 식별자입니다.
    /// `MissingPermissions`는 403이지만 역사적 이유로 `invalid_header`
    /// 코드를 유지합니다 (기존 클라이언트와의 와이어 호환).
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "authorization_header_missing",
            AuthError::InvalidHeader(_) => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims(_) => "invalid_claims",
            AuthError::MissingPermissions => "invalid_header",
            AuthError::NotPermitted => "not_permitted",
            AuthError::Jwks(_) => "jwks_error",
            AuthError::Internal(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AuthError {
    /// 각 에러 타입에 대응하는 HTTP 상태 코드를 반환합니다.
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidHeader(_)
            | AuthError::TokenExpired
            | AuthError::InvalidClaims(_) => StatusCode::UNAUTHORIZED,
            AuthError::MissingPermissions | AuthError::NotPermitted => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 에러를 `{"code", "description"}` 형태의 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "code": self.code(),
            "description": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;

/// 외부 라이브러리 에러를 AuthError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AuthResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AuthResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AuthResult<T> {
        self.map_err(|e| AuthError::Internal(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AuthResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AuthError::Internal(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_missing_authorization_response() {
        let error = AuthError::MissingAuthorization;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        assert_eq!(error.code(), "authorization_header_missing");
    }

    #[test]
    fn test_invalid_header_response() {
        let error = AuthError::InvalidHeader("Token not found.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        assert_eq!(error.code(), "invalid_header");
    }

    #[test]
    fn test_token_expired_response() {
        let error = AuthError::TokenExpired;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        assert_eq!(error.code(), "token_expired");
        assert_eq!(error.to_string(), "Token Expired");
    }

    #[test]
    fn test_not_permitted_response() {
        let error = AuthError::NotPermitted;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
        assert_eq!(error.code(), "not_permitted");
    }

    #[test]
    fn test_missing_permissions_keeps_legacy_code() {
        let error = AuthError::MissingPermissions;
        let response = error.error_response();

        // 403이지만 코드는 기존 클라이언트 호환을 위해 invalid_header
        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
        assert_eq!(error.code(), "invalid_header");
    }

    #[test]
    fn test_jwks_error_response() {
        let error = AuthError::Jwks("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let auth_result = result.context("Additional context");

        assert!(auth_result.is_err());
        if let Err(AuthError::Internal(msg)) = auth_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected Internal error");
        }
    }
}
