//! 도메인 모델 모듈
//!
//! 인증 파이프라인에서 사용하는 핵심 도메인 타입들을 제공합니다.

pub mod auth;
