//! AuthMiddleware 인증 로직의 핵심적인 기능

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::auth::authentication_request::{AuthMode, RequiredPermission};
use crate::domain::auth::claims::Auth0Claims;
use crate::errors::{AuthError, AuthResult};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_permission: Option<RequiredPermission>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_permission = self.required_permission.clone();

        Box::pin(async move {
            let token_service = TokenService::instance();

            // Authorization 헤더에서 토큰 추출 및 검증 시도
            let auth_result = authenticate_request(&req, &token_service).await;

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                // Required 모드에서 인증 성공
                (AuthMode::Required, Ok(claims)) => {
                    // 권한 검증 (클레임 누락과 권한 미보유를 구분)
                    if let Some(ref required) = required_permission {
                        if let Err(err) = check_required(required, &claims, &token_service) {
                            log::warn!(
                                "권한 부족: 사용자 ID {}, 필요 권한: {:?}",
                                claims.sub,
                                required
                            );
                            let response = err.error_response();
                            let (req, _) = req.into_parts();
                            let res = ServiceResponse::new(req, response).map_into_right_body();
                            return Ok(res);
                        }
                    }

                    // 사용자 정보를 Request Extensions에 저장
                    let user = AuthenticatedUser::from_claims(&claims);
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                // Optional 모드에서 인증 성공
                (AuthMode::Optional, Ok(claims)) => {
                    let user = AuthenticatedUser::from_claims(&claims);
                    if let Some(ref required) = required_permission {
                        // Optional 모드에서는 권한이 부족해도 진행 허용
                        if required.is_satisfied(&user.permissions) {
                            log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                            req.extensions_mut().insert(user);
                        } else {
                            log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
                        }
                    } else {
                        log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    }
                }
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 bearer 토큰을 추출하고 검증
async fn authenticate_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> AuthResult<Auth0Claims> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingAuthorization)?;

    let token = token_service.extract_bearer_token(auth_header)?;
    token_service.verify_token(token).await
}

/// 요구 권한을 클레임에 대해 확인
///
/// `Single`은 원래 백엔드의 permission 검사를 그대로 따르고,
/// `Any`는 목록 중 하나라도 보유하면 허용합니다. 두 경우 모두
/// permissions 클레임 누락은 별도 실패 모드로 처리합니다.
fn check_required(
    required: &RequiredPermission,
    claims: &Auth0Claims,
    token_service: &TokenService,
) -> AuthResult<()> {
    match required {
        RequiredPermission::Single(permission) => {
            token_service.check_permissions(permission, claims)
        }
        RequiredPermission::Any(permissions) => {
            let granted = claims
                .permissions
                .as_ref()
                .ok_or(AuthError::MissingPermissions)?;

            if permissions.iter().any(|p| granted.contains(p)) {
                Ok(())
            } else {
                Err(AuthError::NotPermitted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with(permissions: Option<Vec<&str>>) -> Auth0Claims {
        Auth0Claims {
            sub: "auth0|barista".to_string(),
            permissions: permissions
                .map(|ps| ps.into_iter().map(|p| p.to_string()).collect()),
            iat: None,
            exp: 1999999999,
        }
    }

    #[test]
    fn test_check_required_single() {
        let service = TokenService;
        let required = RequiredPermission::Single("post:drinks".to_string());

        assert!(check_required(&required, &claims_with(Some(vec!["post:drinks"])), &service).is_ok());
        assert!(matches!(
            check_required(&required, &claims_with(Some(vec!["get:drinks"])), &service),
            Err(AuthError::NotPermitted)
        ));
    }

    #[test]
    fn test_check_required_any() {
        let service = TokenService;
        let required = RequiredPermission::Any(vec![
            "patch:drinks".to_string(),
            "delete:drinks".to_string(),
        ]);

        assert!(
            check_required(&required, &claims_with(Some(vec!["delete:drinks"])), &service).is_ok()
        );
        assert!(matches!(
            check_required(&required, &claims_with(Some(vec!["get:drinks"])), &service),
            Err(AuthError::NotPermitted)
        ));
    }

    #[test]
    fn test_check_required_missing_claim() {
        let service = TokenService;
        let required = RequiredPermission::Any(vec!["get:drinks".to_string()]);

        assert!(matches!(
            check_required(&required, &claims_with(None), &service),
            Err(AuthError::MissingPermissions)
        ));
    }
}
