//! 서비스 모듈
//!
//! 비즈니스 로직을 담당하는 서비스들을 제공합니다.

pub mod auth;
