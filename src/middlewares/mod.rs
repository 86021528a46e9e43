//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Authorization 헤더에서 bearer 토큰 추출
//! - 테넌트 JWKS 공개키로 RS256 서명 검증
//! - RBAC 권한 확인 (선택)
//! - 인증된 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! // 라우트 그룹에 강제 인증 적용
//! web::scope("/api/v1/auth")
//!     .wrap(AuthMiddleware::required())
//!     .service(me_handler);
//!
//! // 특정 권한 요구
//! web::scope("/api/v1/drinks")
//!     .wrap(AuthMiddleware::required_with_permission("post:drinks"))
//!     .service(create_drink);
//! ```

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::*;
