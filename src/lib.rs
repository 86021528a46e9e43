//! 커피숍 백엔드
//!
//! 커피숍 애플리케이션의 Rust 기반 백엔드입니다.
//! 배포 대상별 프론트엔드 환경 설정 레코드를 제공하고,
//! Auth0가 발급한 RS256 액세스 토큰을 테넌트 JWKS로 검증합니다.
//!
//! # Features
//!
//! - **환경 설정 레코드**: 배포 변형별 상수 (API URL, Auth0 통합 값)
//! - **토큰 검증**: JWKS 기반 RS256 서명 검증, audience/issuer 확인
//! - **RBAC**: Auth0 permissions 클레임 기반 권한 제어
//! - **JWKS 캐싱**: TTL + 키 순환 대응 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /api/v1/config, /api/v1/auth/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← bearer 추출, 검증, 권한 확인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← TokenService, JwksService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Auth0 Tenant   │ ← /.well-known/jwks.json
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use coffee_shop_backend::config::EnvironmentConfig;
//! use coffee_shop_backend::services::auth::TokenService;
//!
//! // 활성 배포 변형의 설정 레코드
//! let config = EnvironmentConfig::active();
//!
//! // 토큰 검증
//! let token_service = TokenService::instance();
//! let claims = token_service.verify_token(token).await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod middlewares;
pub mod routes;
pub mod services;
