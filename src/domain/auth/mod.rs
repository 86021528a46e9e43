//! 인증 도메인 모델
//!
//! Auth0 토큰 클레임, 인증된 사용자, 인증 요구사항을 정의합니다.

pub mod authenticated_user;
pub mod authentication_request;
pub mod claims;

pub use authenticated_user::*;
pub use authentication_request::*;
pub use claims::*;
