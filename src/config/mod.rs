//! # Configuration Module
//!
//! 커피숍 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 배포 대상(deployment target)별 프론트엔드 설정 레코드와
//! Auth0 토큰 검증에 필요한 서버 측 설정을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`env_config`] - 배포 대상 선택 및 서버 바인딩 설정
//! - [`frontend_config`] - 프론트엔드에 전달되는 환경 설정 레코드
//! - [`auth_config`] - Auth0 테넌트, audience, JWKS 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 배포 대상 분리
//!
//! 커스텀 테스트 도메인과 Vercel 기본 도메인, 두 개의 배포 변형이 존재하며
//! 키 구성은 동일하고 `audience`와 `callbackURL` 값만 다릅니다.
//! 선택은 기동 시점에 `DEPLOY_TARGET` 환경 변수로 한 번만 이루어집니다.
//!
//! ### 2. 불변 레코드
//!
//! 설정 레코드는 프로세스 시작 시 한 번 구성되고 이후 변경되지 않습니다.
//! 런타임 변이가 없으므로 모든 리더가 동기화 없이 읽을 수 있습니다.
//!
//! ### 3. 기동 시 검증
//!
//! 레코드의 URL 필드는 `validator`로 기동 시 한 번 검증됩니다.
//! 잘못된 값은 배포 오류이므로 요청 처리 전에 조기 실패합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Auth0Config, DeployTarget, EnvironmentConfig};
//!
//! // 현재 배포 대상 확인
//! let target = DeployTarget::current();
//!
//! // 프론트엔드 설정 레코드
//! let config = EnvironmentConfig::active();
//! println!("API server: {}", config.api_server_url);
//!
//! // 토큰 검증 설정
//! let issuer = Auth0Config::issuer();
//! ```

pub mod auth_config;
pub mod env_config;
pub mod frontend_config;

pub use auth_config::*;
pub use env_config::*;
pub use frontend_config::*;
