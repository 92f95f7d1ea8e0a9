//! 인증 관련 설정 모듈
//!
//! JWT 서명 키와 만료 시간을 환경 변수에서 읽어옵니다.

use std::env;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰의 만료 시간 (시간 단위). 기본값: 24
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }
}
