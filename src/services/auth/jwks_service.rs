//! JWKS 조회 및 캐싱 서비스
//!
//! Auth0 테넌트가 `/.well-known/jwks.json`에 공개하는 JSON Web Key Set을
//! 내려받아 토큰 서명 검증용 RSA 공개키를 제공합니다.
//!
//! # 캐싱 전략
//!
//! 테넌트 공개키는 거의 변하지 않으므로 매 검증마다 JWKS를 내려받지
//! 않고 프로세스 내 캐시를 사용합니다:
//!
//! - TTL 내 캐시에 `kid`가 있으면 그대로 사용
//! - 캐시 만료 또는 알 수 없는 `kid`이면 한 번 갱신 후 재탐색 (키 순환 대응)
//! - 갱신 후에도 `kid`가 없으면 토큰 쪽 문제로 간주하고 401 처리

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use jsonwebtoken::DecodingKey;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::config::Auth0Config;
use crate::errors::{AuthError, AuthResult, ErrorContext};

/// JWKS 문서의 개별 키 항목
///
/// RFC 7517의 RSA 서명 키 표현입니다. Auth0는 `kty: "RSA"`,
/// `use: "sig"`, `alg: "RS256"` 키만 공개합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwk {
    /// 키 타입 ("RSA")
    pub kty: String,
    /// 키 용도 ("sig")
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,
    /// 키 식별자 (토큰 헤더의 kid와 매칭)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// 서명 알고리즘 ("RS256")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// RSA modulus (base64url)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    /// RSA exponent (base64url)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
}

/// JWKS 문서 전체
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

/// 조회 시각이 기록된 캐시 항목
struct CachedJwks {
    jwks: JwkSet,
    fetched_at: DateTime<Utc>,
}

/// JWKS 조회 서비스
///
/// reqwest 클라이언트와 프로세스 내 캐시를 보유하는 싱글톤 서비스입니다.
pub struct JwksService {
    client: reqwest::Client,
    cache: RwLock<Option<CachedJwks>>,
}

/// 싱글톤 인스턴스 저장소
static JWKS_SERVICE_INSTANCE: OnceCell<Arc<JwksService>> = OnceCell::new();

impl JwksService {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 첫 호출 시 빈 캐시로 인스턴스를 생성하고,
    /// 이후 호출에서는 캐시된 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        JWKS_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            cache: RwLock::new(None),
        }
    }

    /// 주어진 `kid`에 대응하는 서명 검증 키를 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `kid` - 토큰 헤더에서 추출한 키 식별자
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidHeader` - 갱신 후에도 해당 `kid`의 키가 없는 경우
    /// * `AuthError::Jwks` - JWKS 조회/파싱 실패 또는 키 재료 손상
    pub async fn decoding_key_for(&self, kid: &str) -> AuthResult<DecodingKey> {
        if let Some(jwk) = self.cached_key(kid)? {
            return decoding_key_from_jwk(&jwk);
        }

        // 캐시 미스 또는 알 수 없는 kid: 테넌트에서 새로 내려받는다
        let jwks = self.fetch_jwks().await?;
        let jwk = find_key(&jwks, kid).cloned();
        self.store(jwks)?;

        let jwk = jwk.ok_or_else(|| {
            AuthError::InvalidHeader("Unable to find the appropriate key.".to_string())
        })?;
        decoding_key_from_jwk(&jwk)
    }

    /// TTL이 지나지 않은 캐시에서 키를 찾습니다.
    fn cached_key(&self, kid: &str) -> AuthResult<Option<Jwk>> {
        let guard = self.cache.read().context("JWKS cache lock poisoned")?;

        if let Some(cached) = guard.as_ref() {
            let age = Utc::now() - cached.fetched_at;
            if age.num_seconds() < Auth0Config::jwks_cache_ttl_seconds() {
                return Ok(find_key(&cached.jwks, kid).cloned());
            }
        }

        Ok(None)
    }

    fn store(&self, jwks: JwkSet) -> AuthResult<()> {
        let mut guard = self.cache.write().context("JWKS cache lock poisoned")?;
        *guard = Some(CachedJwks {
            jwks,
            fetched_at: Utc::now(),
        });
        Ok(())
    }

    /// 테넌트 JWKS 문서를 내려받습니다.
    async fn fetch_jwks(&self) -> AuthResult<JwkSet> {
        let url = Auth0Config::jwks_url();
        log::debug!("JWKS 갱신: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AuthError::Jwks(format!("failed to fetch JWKS from {}: {}", url, e)))?
            .error_for_status()
            .map_err(|e| AuthError::Jwks(format!("JWKS endpoint returned an error: {}", e)))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::Jwks(format!("failed to parse JWKS document: {}", e)))
    }
}

/// JWK의 RSA 구성 요소로 검증 키를 만듭니다.
///
/// 테스트에서 네트워크 없이 검증 키를 만들 수 있도록 분리되어 있습니다.
pub fn decoding_key_from_jwk(jwk: &Jwk) -> AuthResult<DecodingKey> {
    let n = jwk
        .n
        .as_deref()
        .ok_or_else(|| AuthError::Jwks("JWK is missing the RSA modulus".to_string()))?;
    let e = jwk
        .e
        .as_deref()
        .ok_or_else(|| AuthError::Jwks("JWK is missing the RSA exponent".to_string()))?;

    DecodingKey::from_rsa_components(n, e)
        .map_err(|err| AuthError::Jwks(format!("invalid JWK key material: {}", err)))
}

fn find_key<'a>(jwks: &'a JwkSet, kid: &str) -> Option<&'a Jwk> {
    jwks.keys.iter().find(|key| key.kid.as_deref() == Some(kid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rsa_jwk(kid: &str) -> Jwk {
        // 비표준 키 재료라도 구조 탐색 테스트에는 충분함
        Jwk {
            kty: "RSA".to_string(),
            use_: Some("sig".to_string()),
            kid: Some(kid.to_string()),
            alg: Some("RS256".to_string()),
            n: Some("AQAB".to_string()),
            e: Some("AQAB".to_string()),
        }
    }

    #[test]
    fn test_find_key_matches_kid() {
        let jwks = JwkSet {
            keys: vec![rsa_jwk("key-1"), rsa_jwk("key-2")],
        };

        assert!(find_key(&jwks, "key-2").is_some());
        assert!(find_key(&jwks, "key-3").is_none());
    }

    #[test]
    fn test_decoding_key_requires_components() {
        let mut jwk = rsa_jwk("key-1");
        jwk.n = None;

        let result = decoding_key_from_jwk(&jwk);
        assert!(matches!(result, Err(AuthError::Jwks(_))));
    }

    #[test]
    fn test_jwks_document_deserializes() {
        // Auth0 응답 형태 그대로
        let json = r#"{
            "keys": [{
                "kty": "RSA",
                "use": "sig",
                "kid": "abc",
                "alg": "RS256",
                "n": "AQAB",
                "e": "AQAB",
                "x5c": ["ignored"],
                "x5t": "ignored"
            }]
        }"#;
        let jwks: JwkSet = serde_json::from_str(json).unwrap();

        assert_eq!(jwks.keys.len(), 1);
        assert_eq!(jwks.keys[0].kid.as_deref(), Some("abc"));
    }
}
