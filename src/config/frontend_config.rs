//! 프론트엔드 환경 설정 레코드
//!
//! Ionic 프론트엔드가 부트스트랩 시 소비하는 배포별 상수 레코드입니다.
//! HTTP 클라이언트는 `apiServerUrl`을, Auth0 통합 라이브러리는 `auth0`
//! 블록을 읽습니다. 레코드는 기동 시 한 번 구성되고 이후 변경되지 않습니다.
//!
//! ## 직렬화 형식
//!
//! 프론트엔드가 기대하는 키 이름을 그대로 유지합니다:
//!
//! ```json
//! {
//!   "production": true,
//!   "apiServerUrl": "https://coffee-shop-backend.onrender.com/",
//!   "auth0": {
//!     "url": "amrikhudair.eu.auth0.com",
//!     "audience": "https://coffee-shop.test",
//!     "clientId": "hVgU7yeYmEW0KkJxSGQ6qOMS8dJbuRrC",
//!     "callbackURL": "https://coffee-shop.test"
//!   }
//! }
//! ```

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::DeployTarget;

/// 두 배포 변형이 공유하는 값들
const API_SERVER_URL: &str = "https://coffee-shop-backend.onrender.com/";
const AUTH0_TENANT: &str = "amrikhudair.eu.auth0.com";
const AUTH0_CLIENT_ID: &str = "hVgU7yeYmEW0KkJxSGQ6qOMS8dJbuRrC";

/// 배포 변형별로 다른 값들
const TEST_DOMAIN_ORIGIN: &str = "https://coffee-shop.test";
const VERCEL_ORIGIN: &str = "https://coffee-shop-delta.vercel.app";

/// 활성 설정 레코드 저장소
static ACTIVE_CONFIG: OnceCell<EnvironmentConfig> = OnceCell::new();

/// 프론트엔드 환경 설정 레코드
///
/// 배포별 상수를 보관하고 읽기 전용으로 노출합니다.
/// 필드 접근 외의 연산은 없으며 런타임에 실패할 수 없습니다.
/// 잘못된 값은 런타임 결함이 아니라 배포 오류이므로,
/// 검증은 기동 시 [`Validate`]로 한 번만 수행합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EnvironmentConfig {
    /// 프로덕션 배포 여부
    pub production: bool,

    /// 백엔드 서비스의 절대 URL
    #[serde(rename = "apiServerUrl")]
    #[validate(url)]
    pub api_server_url: String,

    /// Auth0 통합 설정 블록
    #[validate(nested)]
    pub auth0: Auth0Settings,
}

/// Auth0 통합 라이브러리가 소비하는 설정 블록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Auth0Settings {
    /// Auth0 테넌트 도메인 (스킴 없는 호스트 형태)
    #[validate(length(min = 1))]
    pub url: String,

    /// 발급된 토큰이 유효한 보호 자원(API)의 식별 URL
    #[validate(url)]
    pub audience: String,

    /// Auth0가 발급한 공개 클라이언트 식별자 (비밀 아님)
    #[serde(rename = "clientId")]
    #[validate(length(min = 1))]
    pub client_id: String,

    /// 로그인 완료 후 Auth0가 리디렉션하는 절대 URL
    ///
    /// Auth0 대시보드에 등록된 callback URL과 일치해야 합니다.
    #[serde(rename = "callbackURL")]
    #[validate(url)]
    pub callback_url: String,
}

impl EnvironmentConfig {
    /// 주어진 배포 대상의 설정 레코드를 구성합니다.
    ///
    /// 두 변형은 `audience`와 `callbackURL`만 다릅니다.
    /// 변형 선택 자체는 배포 시점의 관심사이며 ([`DeployTarget::current`]),
    /// 레코드 구성에는 런타임 분기가 없습니다.
    ///
    /// # Arguments
    ///
    /// * `target` - 대상 배포 변형
    pub fn for_target(target: &DeployTarget) -> Self {
        let origin = match target {
            DeployTarget::TestDomain => TEST_DOMAIN_ORIGIN,
            DeployTarget::Vercel => VERCEL_ORIGIN,
        };

        EnvironmentConfig {
            production: true,
            api_server_url: API_SERVER_URL.to_string(),
            auth0: Auth0Settings {
                url: AUTH0_TENANT.to_string(),
                audience: origin.to_string(),
                client_id: AUTH0_CLIENT_ID.to_string(),
                callback_url: origin.to_string(),
            },
        }
    }

    /// 활성 설정 레코드를 반환합니다.
    ///
    /// 첫 호출 시 `DEPLOY_TARGET` 환경 변수에 따라 레코드를 구성하고,
    /// 이후 호출에서는 동일한 인스턴스를 반환합니다. 프로세스 수명 동안
    /// 변경되지 않으므로 여러 스레드가 동기화 없이 읽을 수 있습니다.
    pub fn active() -> &'static EnvironmentConfig {
        ACTIVE_CONFIG.get_or_init(|| Self::for_target(&DeployTarget::current()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_domain_variant_values() {
        let config = EnvironmentConfig::for_target(&DeployTarget::TestDomain);

        assert!(config.production);
        assert_eq!(
            config.api_server_url,
            "https://coffee-shop-backend.onrender.com/"
        );
        assert_eq!(config.auth0.url, "amrikhudair.eu.auth0.com");
        assert_eq!(config.auth0.audience, "https://coffee-shop.test");
        assert_eq!(config.auth0.callback_url, "https://coffee-shop.test");
    }

    #[test]
    fn test_vercel_variant_values() {
        let config = EnvironmentConfig::for_target(&DeployTarget::Vercel);

        // apiServerUrl은 그대로, audience/callbackURL만 다름
        assert_eq!(
            config.api_server_url,
            "https://coffee-shop-backend.onrender.com/"
        );
        assert_eq!(
            config.auth0.callback_url,
            "https://coffee-shop-delta.vercel.app"
        );
        assert_eq!(
            config.auth0.audience,
            "https://coffee-shop-delta.vercel.app"
        );
    }

    #[test]
    fn test_variants_share_key_set() {
        let test_domain = EnvironmentConfig::for_target(&DeployTarget::TestDomain);
        let vercel = EnvironmentConfig::for_target(&DeployTarget::Vercel);

        assert_eq!(test_domain.production, vercel.production);
        assert_eq!(test_domain.api_server_url, vercel.api_server_url);
        assert_eq!(test_domain.auth0.url, vercel.auth0.url);
        assert_eq!(test_domain.auth0.client_id, vercel.auth0.client_id);
        assert_ne!(test_domain.auth0.audience, vercel.auth0.audience);
        assert_ne!(test_domain.auth0.callback_url, vercel.auth0.callback_url);
    }

    #[test]
    fn test_both_variants_validate() {
        EnvironmentConfig::for_target(&DeployTarget::TestDomain)
            .validate()
            .expect("test domain variant must validate");
        EnvironmentConfig::for_target(&DeployTarget::Vercel)
            .validate()
            .expect("vercel variant must validate");
    }

    #[test]
    fn test_all_fields_non_empty() {
        let config = EnvironmentConfig::for_target(&DeployTarget::TestDomain);

        assert!(!config.api_server_url.is_empty());
        assert!(!config.auth0.url.is_empty());
        assert!(!config.auth0.audience.is_empty());
        assert!(!config.auth0.client_id.is_empty());
        assert!(!config.auth0.callback_url.is_empty());
    }

    #[test]
    fn test_urls_use_https_scheme() {
        let config = EnvironmentConfig::for_target(&DeployTarget::Vercel);

        assert!(config.api_server_url.starts_with("https://"));
        assert!(config.auth0.audience.starts_with("https://"));
        assert!(config.auth0.callback_url.starts_with("https://"));
        // 테넌트 도메인은 스킴 없는 호스트 형태
        assert!(!config.auth0.url.contains("://"));
    }

    #[test]
    fn test_serialized_key_names() {
        let config = EnvironmentConfig::for_target(&DeployTarget::TestDomain);
        let json = serde_json::to_value(&config).unwrap();

        assert!(json.get("production").is_some());
        assert!(json.get("apiServerUrl").is_some());
        let auth0 = json.get("auth0").unwrap();
        assert!(auth0.get("url").is_some());
        assert!(auth0.get("audience").is_some());
        assert!(auth0.get("clientId").is_some());
        assert!(auth0.get("callbackURL").is_some());
    }

    #[test]
    fn test_record_roundtrip() {
        let config = EnvironmentConfig::for_target(&DeployTarget::Vercel);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EnvironmentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_malformed_url_fails_validation() {
        let mut config = EnvironmentConfig::for_target(&DeployTarget::TestDomain);
        config.api_server_url = "not-a-url".to_string();

        assert!(config.validate().is_err());
    }
}
