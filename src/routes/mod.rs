//! API 라우트 설정 모듈
//!
//! 헬스체크, 프론트엔드 설정 레코드, 인증 확인 엔드포인트를 제공합니다.
//! 음료 API 등 애플리케이션 라우팅은 이 서비스의 범위가 아닙니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ```rust,ignore
//! // 인증 불필요 (Public 라우트)
//! cfg.service(get_frontend_config);
//!
//! // 인증 필요
//! cfg.service(
//!     web::scope("/api/v1/auth")
//!         .wrap(AuthMiddleware::required())
//!         .service(get_current_user)
//! );
//!
//! // 특정 권한 요구
//! cfg.service(
//!     web::scope("/api/v1/manage")
//!         .wrap(AuthMiddleware::required_with_permission("get:verification-settings"))
//!         .service(/* ... */)
//! );
//! ```

use actix_web::web;
use serde_json::json;

use crate::config::{Auth0Config, DeployTarget, EnvironmentConfig};
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::App;
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Public: 프론트엔드 부트스트랩 설정
    cfg.service(get_frontend_config);

    // Protected: 인증 확인
    cfg.service(
        web::scope("/api/v1/auth")
            .wrap(AuthMiddleware::required())
            .service(get_current_user),
    );

    // Protected: 운영자 전용 (권한 요구)
    cfg.service(
        web::scope("/api/v1/manage")
            .wrap(AuthMiddleware::required_with_permission(
                "get:verification-settings",
            ))
            .service(get_verification_settings),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "coffee_shop_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "deploy_target": format!("{:?}", DeployTarget::current()),
    }))
}

/// 프론트엔드 환경 설정 레코드를 반환합니다
///
/// 현재 배포 대상의 설정 레코드를 그대로 제공합니다.
/// 모든 값이 공개 정보이므로 (클라이언트 ID 포함) 인증이 필요 없습니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/api/v1/config
/// ```
///
/// Response:
/// ```json
/// {
///   "production": true,
///   "apiServerUrl": "https://coffee-shop-backend.onrender.com/",
///   "auth0": {
///     "url": "amrikhudair.eu.auth0.com",
///     "audience": "https://coffee-shop.test",
///     "clientId": "hVgU7yeYmEW0KkJxSGQ6qOMS8dJbuRrC",
///     "callbackURL": "https://coffee-shop.test"
///   }
/// }
/// ```
#[actix_web::get("/api/v1/config")]
async fn get_frontend_config() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(EnvironmentConfig::active())
}

/// 현재 인증된 사용자 정보를 반환합니다
///
/// `AuthMiddleware::required()`가 검증을 마친 뒤 extension에 저장한
/// 사용자 정보를 그대로 돌려줍니다. 토큰 디버깅용 엔드포인트입니다.
#[actix_web::get("/me")]
async fn get_current_user(user: AuthenticatedUser) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "user_id": user.user_id,
        "permissions": user.permissions,
    }))
}

/// 서버 측 토큰 검증 설정을 반환합니다
///
/// 운영자가 배포된 서비스의 검증 구성을 확인하는 용도입니다.
/// `get:verification-settings` 권한이 있는 토큰만 접근할 수 있습니다.
#[actix_web::get("/verification-settings")]
async fn get_verification_settings() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "domain": Auth0Config::domain(),
        "audience": Auth0Config::audience(),
        "issuer": Auth0Config::issuer(),
        "jwks_url": Auth0Config::jwks_url(),
        "algorithm": "RS256",
    }))
}
