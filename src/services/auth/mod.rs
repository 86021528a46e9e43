//! 인증 및 보안 서비스 모듈
//!
//! Auth0가 발급한 RS256 액세스 토큰의 검증을 담당하는 서비스들을 제공합니다.
//! 이 서버는 토큰을 발급하지 않습니다. 로그인과 토큰 발급은 전적으로
//! Auth0의 책임이며, 여기서는 검증과 권한 확인만 수행합니다.
//!
//! # Features
//!
//! - 테넌트 JWKS 조회 및 캐싱
//! - RS256 서명 검증 (kid 기반 키 매칭)
//! - audience / issuer 클레임 검증
//! - RBAC 권한 확인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let token = token_service.extract_bearer_token(auth_header)?;
//! let claims = token_service.verify_token(token).await?;
//! token_service.check_permissions("post:drinks", &claims)?;
//! ```

pub mod jwks_service;
pub mod token_service;

pub use jwks_service::*;
pub use token_service::*;
