//! # Authentication Configuration Module
//!
//! Auth0 토큰 검증에 필요한 서버 측 설정을 관리하는 모듈입니다.
//! 로그인 플로우 자체는 Auth0가 전적으로 담당하며, 이 서버는
//! 발급된 RS256 액세스 토큰을 테넌트 JWKS로 검증하기만 합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export AUTH0_DOMAIN="amrikhudair.eu.auth0.com"
//! export AUTH0_AUDIENCE="https://coffee-shop.test"
//! export JWKS_CACHE_TTL_SECONDS="3600"
//! ```
//!
//! 변수가 설정되지 않은 경우 테스트 도메인 배포의 기본값을 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::Auth0Config;
//!
//! let issuer = Auth0Config::issuer();
//! let jwks_url = Auth0Config::jwks_url();
//! ```

use jsonwebtoken::Algorithm;
use std::env;

/// Auth0 토큰 검증 설정을 관리하는 구조체
///
/// Auth0 대시보드의 API 설정과 대응되는 값들을 관리합니다.
/// 모든 값은 공개 정보이며 비밀 키는 존재하지 않습니다.
/// 서명 검증은 테넌트가 공개하는 JWKS의 RSA 공개키로 수행됩니다.
pub struct Auth0Config;

impl Auth0Config {
    /// Auth0 테넌트 도메인을 반환합니다.
    ///
    /// issuer와 JWKS URL의 기반이 되는 호스트 이름입니다.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH0_DOMAIN`: 커스텀 테넌트 도메인 (기본값: `amrikhudair.eu.auth0.com`)
    pub fn domain() -> String {
        env::var("AUTH0_DOMAIN").unwrap_or_else(|_| "amrikhudair.eu.auth0.com".to_string())
    }

    /// 토큰이 유효한 대상 API(audience)를 반환합니다.
    ///
    /// 검증 시 토큰의 `aud` 클레임과 일치해야 하는 값입니다.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH0_AUDIENCE`: 커스텀 audience (기본값: `https://coffee-shop.test`)
    pub fn audience() -> String {
        env::var("AUTH0_AUDIENCE").unwrap_or_else(|_| "https://coffee-shop.test".to_string())
    }

    /// 토큰 발급자(issuer) URL을 반환합니다.
    ///
    /// Auth0는 `https://{domain}/` 형태로 `iss` 클레임을 발급합니다.
    /// 끝의 슬래시까지 정확히 일치해야 검증에 성공합니다.
    pub fn issuer() -> String {
        format!("https://{}/", Self::domain())
    }

    /// 테넌트 JWKS 문서의 URL을 반환합니다.
    ///
    /// 토큰 서명 검증에 사용할 RSA 공개키들이 이 표준 경로에 공개됩니다.
    pub fn jwks_url() -> String {
        format!("https://{}/.well-known/jwks.json", Self::domain())
    }

    /// 토큰 서명 알고리즘을 반환합니다.
    ///
    /// Auth0 API 토큰은 RS256으로 서명됩니다. 다른 알고리즘으로 서명된
    /// 토큰은 검증 단계에서 거부됩니다.
    pub fn algorithm() -> Algorithm {
        Algorithm::RS256
    }

    /// JWKS 캐시 유효 시간을 초 단위로 반환합니다.
    ///
    /// 테넌트 공개키는 거의 변하지 않으므로 매 검증마다 JWKS를
    /// 내려받지 않고 캐시합니다. 키 순환 시에는 알 수 없는 `kid`를
    /// 만나면 TTL과 무관하게 즉시 갱신합니다.
    ///
    /// # Environment Variables
    ///
    /// - `JWKS_CACHE_TTL_SECONDS`: 캐시 유효 시간 (기본값: 3600)
    pub fn jwks_cache_ttl_seconds() -> i64 {
        env::var("JWKS_CACHE_TTL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600)
    }
}
