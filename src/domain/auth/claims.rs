//! Auth0 액세스 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 Auth0 RBAC 확장 클레임을 포함합니다.

use serde::{Deserialize, Serialize};

/// Auth0 액세스 토큰의 클레임(Payload) 구조체
///
/// 검증 후 요청 처리에 필요한 최소한의 클레임만 역직렬화합니다.
/// `aud`와 `iss`는 구조체로 꺼내지 않고 서명 검증 단계에서
/// `jsonwebtoken`의 Validation으로 직접 확인합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (Auth0 사용자 ID, 예: `auth0|5f3...`)
/// - `permissions`: RBAC 권한 목록 (예: `post:drinks`)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auth0Claims {
    /// 토큰의 주체 (Auth0 사용자 ID)
    pub sub: String,

    /// RBAC 권한 목록
    ///
    /// Auth0 테넌트에서 RBAC가 꺼져 있으면 클레임 자체가 발급되지
    /// 않으므로 `Option`으로 구분합니다. 빈 목록과 누락은 다른
    /// 실패 모드로 처리됩니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,

    /// 토큰 발급 시간 (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
