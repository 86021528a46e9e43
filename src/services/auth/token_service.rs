//! Auth0 액세스 토큰 검증 서비스
//!
//! Authorization 헤더에서 bearer 토큰을 추출하고, 테넌트 JWKS의 공개키로
//! RS256 서명을 검증하며, RBAC 권한을 확인합니다.
//!
//! # 검증 순서
//!
//! 1. 헤더에서 bearer 토큰 추출 ([`TokenService::extract_bearer_token`])
//! 2. 토큰 헤더의 `kid`로 JWKS에서 검증 키 탐색
//! 3. RS256 서명 + `aud` + `iss` 클레임 검증 ([`TokenService::verify_token`])
//! 4. 요구 권한 확인 ([`TokenService::check_permissions`])

use std::sync::Arc;

use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};
use once_cell::sync::OnceCell;

use crate::config::Auth0Config;
use crate::domain::auth::claims::Auth0Claims;
use crate::errors::{AuthError, AuthResult};
use crate::services::auth::jwks_service::JwksService;

/// Auth0 토큰 검증 서비스
///
/// 상태를 갖지 않으며, 키 조회는 [`JwksService`]에 위임합니다.
pub struct TokenService;

/// 싱글톤 인스턴스 저장소
static TOKEN_SERVICE_INSTANCE: OnceCell<Arc<TokenService>> = OnceCell::new();

impl TokenService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        TOKEN_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(TokenService))
            .clone()
    }

    /// Authorization 헤더에서 bearer 토큰 부분을 추출합니다.
    ///
    /// # Arguments
    ///
    /// * `auth_header` - HTTP Authorization 헤더 값 전체
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - bearer 접두사를 제거한 순수 토큰 문자열
    ///
    /// # Errors
    ///
    /// * `AuthError::MissingAuthorization` - 헤더가 비어 있는 경우
    /// * `AuthError::InvalidHeader` - bearer 형식이 아니거나 토큰이 없는 경우
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AuthResult<&'a str> {
        if auth_header.is_empty() {
            return Err(AuthError::MissingAuthorization);
        }

        // 공백 하나 기준으로 나눈다: 연속/후행 공백은 빈 조각을 만들어
        // 아래 조각 수 검사에서 형식 오류로 걸러진다
        let parts: Vec<&str> = auth_header.split(' ').collect();

        if parts.len() > 2 || !parts[0].eq_ignore_ascii_case("bearer") {
            return Err(AuthError::InvalidHeader(
                "Authorization header must be bearer token.".to_string(),
            ));
        }

        if parts.len() == 1 {
            return Err(AuthError::InvalidHeader("Token not found.".to_string()));
        }

        Ok(parts[1])
    }

    /// 토큰 서명과 클레임을 검증하고 클레임을 반환합니다.
    ///
    /// 토큰 헤더의 `kid`로 JWKS에서 공개키를 찾은 뒤 RS256 서명을
    /// 검증하고, `aud`/`iss` 클레임이 설정값과 일치하는지 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidHeader` - `kid` 누락, 키 미발견, 손상된 토큰
    /// * `AuthError::TokenExpired` - 토큰 만료
    /// * `AuthError::InvalidClaims` - audience 또는 issuer 불일치
    /// * `AuthError::Jwks` - JWKS 조회 실패
    pub async fn verify_token(&self, token: &str) -> AuthResult<Auth0Claims> {
        let header = decode_header(token).map_err(|_| {
            AuthError::InvalidHeader("Unable to parse authentication token.".to_string())
        })?;

        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidHeader("Authorization is malformed.".to_string()))?;

        let key = JwksService::instance().decoding_key_for(&kid).await?;
        self.verify_with_key(token, &key)
    }

    /// 주어진 검증 키로 토큰을 검증합니다.
    ///
    /// 키 조회가 끝난 뒤의 순수 검증 단계입니다. 테스트에서는
    /// 네트워크 없이 이 함수를 직접 사용합니다.
    pub fn verify_with_key(&self, token: &str, key: &DecodingKey) -> AuthResult<Auth0Claims> {
        let mut validation = Validation::new(Auth0Config::algorithm());
        validation.set_audience(&[Auth0Config::audience()]);
        validation.set_issuer(&[Auth0Config::issuer()]);

        decode::<Auth0Claims>(token, key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidAudience
                | jsonwebtoken::errors::ErrorKind::InvalidIssuer => AuthError::InvalidClaims(
                    "Incorrect claims. Please, check the audience and issuer.".to_string(),
                ),
                _ => AuthError::InvalidHeader(
                    "Unable to parse authentication token.".to_string(),
                ),
            })
    }

    /// 클레임이 요구 권한을 포함하는지 확인합니다.
    ///
    /// # Arguments
    ///
    /// * `permission` - 요구 권한 문자열 (예: `post:drinks`)
    /// * `claims` - 검증된 토큰의 클레임
    ///
    /// # Errors
    ///
    /// * `AuthError::MissingPermissions` - permissions 클레임 자체가 없음
    ///   (Auth0 RBAC 설정 확인 필요)
    /// * `AuthError::NotPermitted` - 권한 목록에 요구 권한이 없음
    pub fn check_permissions(&self, permission: &str, claims: &Auth0Claims) -> AuthResult<()> {
        let granted = claims
            .permissions
            .as_ref()
            .ok_or(AuthError::MissingPermissions)?;

        if !granted.iter().any(|p| p == permission) {
            return Err(AuthError::NotPermitted);
        }

        Ok(())
    }
}
