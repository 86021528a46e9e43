//! 검증된 토큰에서 추출된 사용자 정보

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::auth::claims::Auth0Claims;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Auth0 사용자 고유 ID (`sub` 클레임)
    pub user_id: String,

    /// RBAC 권한 목록
    pub permissions: Vec<String>,
}

impl AuthenticatedUser {
    /// 검증된 클레임에서 사용자 정보를 구성
    pub fn from_claims(claims: &Auth0Claims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            permissions: claims.permissions.clone().unwrap_or_default(),
        }
    }

    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(&permission.to_string())
    }

    /// 여러 권한 중 하나라도 보유하고 있는지 확인
    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|&p| self.has_permission(p))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "auth0|barista".to_string(),
            permissions: vec!["get:drinks-detail".to_string(), "post:drinks".to_string()],
        }
    }

    #[test]
    fn test_has_permission() {
        let user = sample_user();

        assert!(user.has_permission("post:drinks"));
        assert!(user.has_permission("get:drinks-detail"));
        assert!(!user.has_permission("delete:drinks"));
    }

    #[test]
    fn test_has_any_permission() {
        let user = sample_user();

        assert!(user.has_any_permission(&["delete:drinks", "post:drinks"]));
        assert!(!user.has_any_permission(&["delete:drinks", "patch:drinks"]));
    }

    #[test]
    fn test_from_claims_without_permissions() {
        let claims = Auth0Claims {
            sub: "auth0|customer".to_string(),
            permissions: None,
            iat: None,
            exp: 1999999999,
        };
        let user = AuthenticatedUser::from_claims(&claims);

        assert_eq!(user.user_id, "auth0|customer");
        assert!(user.permissions.is_empty());
    }

    #[actix_web::test]
    async fn test_from_request_with_extension() {
        use actix_web::test::TestRequest;

        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(sample_user());

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.user_id, "auth0|barista");
    }

    #[actix_web::test]
    async fn test_from_request_without_extension_fails() {
        use actix_web::test::TestRequest;

        let req = TestRequest::default().to_http_request();
        assert!(AuthenticatedUser::extract(&req).await.is_err());

        let OptionalUser(user) = OptionalUser::extract(&req).await.unwrap();
        assert!(user.is_none());
    }
}
