//! 인증 모드 및 권한 요구사항 정의

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 요구되는 권한 정보
///
/// Auth0 RBAC 권한 문자열(`동사:자원` 형태, 예: `delete:drinks`)을
/// 기준으로 접근을 제어합니다.
#[derive(Debug, Clone)]
pub enum RequiredPermission {
    /// 특정 단일 권한이 필요
    Single(String),
    /// 여러 권한 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<String>),
}

impl RequiredPermission {
    /// 사용자 권한이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, granted: &[String]) -> bool {
        match self {
            RequiredPermission::Single(permission) => granted.contains(permission),
            RequiredPermission::Any(permissions) => {
                permissions.iter().any(|p| granted.contains(p))
            }
        }
    }
}
