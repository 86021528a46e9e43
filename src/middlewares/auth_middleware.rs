//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Auth0 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::auth::authentication_request::{AuthMode, RequiredPermission};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 권한 (선택사항)
    required_permission: Option<RequiredPermission>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_permission: None,
        }
    }

    /// 권한 요구사항이 있는 인증 미들웨어 생성
    pub fn new_with_permission(mode: AuthMode, required_permission: RequiredPermission) -> Self {
        Self {
            mode,
            required_permission: Some(required_permission),
        }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 특정 권한 요구 인증 미들웨어 생성
    pub fn required_with_permission(permission: &str) -> Self {
        Self::new_with_permission(
            AuthMode::Required,
            RequiredPermission::Single(permission.to_string()),
        )
    }

    /// 복수 권한 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_any(permissions: Vec<&str>) -> Self {
        let permission_strings: Vec<String> =
            permissions.into_iter().map(|s| s.to_string()).collect();
        Self::new_with_permission(
            AuthMode::Required,
            RequiredPermission::Any(permission_strings),
        )
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_permission: self.required_permission.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_permission_single() {
        let required = RequiredPermission::Single("post:drinks".to_string());
        let barista = vec!["get:drinks-detail".to_string(), "post:drinks".to_string()];
        let customer = vec!["get:drinks".to_string()];

        assert!(required.is_satisfied(&barista));
        assert!(!required.is_satisfied(&customer));
    }

    #[test]
    fn test_required_permission_any() {
        let required = RequiredPermission::Any(vec![
            "patch:drinks".to_string(),
            "delete:drinks".to_string(),
        ]);
        let manager = vec!["patch:drinks".to_string(), "get:drinks".to_string()];
        let customer = vec!["get:drinks".to_string()];

        assert!(required.is_satisfied(&manager));
        assert!(!required.is_satisfied(&customer));
    }

    #[test]
    fn test_required_permission_empty_grants() {
        let required = RequiredPermission::Single("post:drinks".to_string());
        assert!(!required.is_satisfied(&[]));
    }
}
