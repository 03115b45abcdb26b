//! 비밀번호 해싱
//!
//! 느리고 조정 가능한 비용의 단방향 해시(bcrypt)로 비밀번호를 해싱하고 검증합니다.
//! 솔트 생성과 상수 시간 비교는 `bcrypt` 크레이트에 위임합니다.
//!
//! bcrypt는 입력의 앞 72바이트만 사용하므로, 그보다 긴 비밀번호는 잘라내지 않고 거부합니다.

use std::time::Instant;
use log::{debug, warn};
use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult, ErrorContext};

/// bcrypt가 사용하는 최대 비밀번호 길이 (바이트)
pub const MAX_PASSWORD_BYTES: usize = 72;

/// 비밀번호 해싱 협력자
///
/// `AuthInfo`는 이 trait을 통해서만 해시를 생성하고 검증합니다.
/// 해싱은 CPU 집약적인 작업이므로 지연 시간에 민감한 경로에서 호출할 때는
/// 비용을 감안해야 합니다.
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 솔트가 포함된 해시 바이트로 변환합니다.
    fn hash(&self, password: &str) -> AppResult<Vec<u8>>;

    /// 저장된 해시가 평문 비밀번호와 일치하는지 확인합니다.
    ///
    /// 해시가 비어 있거나 형식이 잘못된 경우에도 `false`를 반환합니다.
    fn verify(&self, hashed: &[u8], password: &str) -> bool;
}

/// bcrypt 기반 해셔
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// 현재 환경 설정(`PasswordConfig::bcrypt_cost`)의 cost로 생성합니다.
    pub fn from_config() -> Self {
        Self::with_cost(PasswordConfig::bcrypt_cost())
    }

    /// 지정한 cost로 생성합니다.
    ///
    /// cost가 bcrypt 허용 범위(4-31)를 벗어나면 해싱 시점에
    /// `AppError::HashingError`가 반환됩니다.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::from_config()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> AppResult<Vec<u8>> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::ValidationError(format!(
                "비밀번호는 {}바이트를 넘을 수 없습니다",
                MAX_PASSWORD_BYTES
            )));
        }

        let hash_start = Instant::now();
        let hashed = bcrypt::non_truncating_hash(password, self.cost).map_err(|e| {
            warn!("Password hashing failed (cost {}): {}", self.cost, e);
            AppError::HashingError(format!("비밀번호 해싱 실패: {}", e))
        })?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(hashed.into_bytes())
    }

    fn verify(&self, hashed: &[u8], password: &str) -> bool {
        if hashed.is_empty() {
            return false;
        }

        let hashed = match std::str::from_utf8(hashed).context("저장된 해시가 UTF-8이 아닙니다") {
            Ok(hashed) => hashed,
            Err(e) => {
                warn!("{}", e);
                return false;
            }
        };

        let verify_start = Instant::now();
        // 72바이트를 넘는 입력은 잘리지 않고 에러가 되어 불일치로 처리됨
        let result = bcrypt::non_truncating_verify(password, hashed).unwrap_or_else(|e| {
            warn!("비밀번호 검증 실패: {}", e);
            false
        });
        debug!("Password verification took: {:?}", verify_start.elapsed());

        result
    }
}
