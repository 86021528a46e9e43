//! 배포 대상 및 서버 설정 관리 모듈
//!
//! 배포 변형 선택과 서버 바인딩 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 배포 대상
///
/// 두 변형은 프론트엔드 설정 레코드의 `audience`와 `callbackURL` 값만
/// 다르며, 나머지 키와 값은 동일합니다. 어느 쪽이든 정식 프로덕션
/// 구성이고 호스팅 대상만 다릅니다.
#[derive(Debug, Clone, PartialEq)]
pub enum DeployTarget {
    /// 커스텀 테스트 도메인 (coffee-shop.test)
    TestDomain,
    /// Vercel 기본 할당 도메인 (coffee-shop-delta.vercel.app)
    Vercel,
}

impl DeployTarget {
    /// 현재 배포 대상을 감지합니다.
    ///
    /// `DEPLOY_TARGET` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `TestDomain`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let target = DeployTarget::current();
    /// match target {
    ///     DeployTarget::TestDomain => println!("테스트 도메인 배포"),
    ///     DeployTarget::Vercel => println!("Vercel 배포"),
    /// }
    /// ```
    pub fn current() -> Self {
        match env::var("DEPLOY_TARGET") {
            Ok(value) => Self::from_str(&value),
            Err(_) => DeployTarget::TestDomain,
        }
    }

    /// 문자열에서 DeployTarget을 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 배포 대상 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 DeployTarget 값. 알 수 없는 값인 경우 `TestDomain`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "vercel" | "delta" => DeployTarget::Vercel,
            _ => DeployTarget::TestDomain,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}
