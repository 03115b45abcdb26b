//! AuthInfo 서비스 구현
//!
//! 식별자 생성기와 비밀번호 해셔를 한 번 구성해 두고
//! 레코드 생성과 비밀번호 관리를 수행하는 진입점입니다.
//!
//! ## 성능 고려사항
//!
//! - **bcrypt 해싱**: 환경별 cost 설정으로 보안 강도 조절 (`PasswordConfig`)
//! - **해싱 비용**: cost가 높을수록 보안은 강화되지만 처리 시간 증가
//!
//! ```text
//! [DEBUG] Password hashing took: 156ms
//! [INFO] Total AuthInfo creation took: 157ms
//! ```

use std::sync::Arc;
use std::time::Instant;
use log::{debug, info, warn};
use crate::{
    domain::{
        entities::auth_info::AuthInfo,
        models::{auth::AuthData, provider::ProviderData},
    },
    errors::{AppError, AppResult},
    services::{
        identity::{IdGenerator, UuidGenerator},
        password::{BcryptHasher, PasswordHasher},
    },
};

/// 인증 레코드 서비스
#[derive(Clone)]
pub struct AuthInfoService {
    ids: Arc<dyn IdGenerator>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AuthInfoService {
    /// UUID 식별자와 환경 설정 cost의 bcrypt 해셔로 구성합니다.
    pub fn new() -> Self {
        Self::with_components(Arc::new(UuidGenerator), Arc::new(BcryptHasher::from_config()))
    }

    /// 협력자를 직접 주입합니다.
    pub fn with_components(ids: Arc<dyn IdGenerator>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { ids, hasher }
    }

    pub fn hasher(&self) -> &dyn PasswordHasher {
        self.hasher.as_ref()
    }

    /// 비밀번호 기반 레코드 생성
    pub fn create_with_password(&self, password: &str) -> AppResult<AuthInfo> {
        let start_time = Instant::now();

        let info = AuthInfo::new_with_password(self.ids.as_ref(), self.hasher.as_ref(), password)
            .inspect_err(|e| log_failure("AuthInfo creation failed", e))?;

        info!("Total AuthInfo creation took: {:?}", start_time.elapsed());
        Ok(info)
    }

    /// 익명 레코드 생성
    pub fn create_anonymous(&self) -> AppResult<AuthInfo> {
        AuthInfo::new_anonymous(self.ids.as_ref())
            .inspect_err(|e| log_failure("Anonymous AuthInfo creation failed", e))
    }

    /// 외부 프로바이더 연동 레코드 생성
    pub fn create_with_provider_info(
        &self,
        key: impl Into<String>,
        data: ProviderData,
    ) -> AppResult<AuthInfo> {
        AuthInfo::new_with_provider_info(self.ids.as_ref(), key, data)
            .inspect_err(|e| log_failure("Provider AuthInfo creation failed", e))
    }

    /// 비밀번호 변경
    ///
    /// 변경 이전에 발급된 세션 토큰은 `accepts_token_issued_at`에서 거부됩니다.
    pub fn change_password(&self, info: &mut AuthInfo, new_password: &str) -> AppResult<()> {
        let start_time = Instant::now();

        info.set_password(self.hasher.as_ref(), new_password)
            .inspect_err(|e| log_failure(&format!("Password change failed for {}", info.id()), e))?;

        info!("Password changed for {} in {:?}", info.id(), start_time.elapsed());
        Ok(())
    }

    /// 로그인 시도 검증
    ///
    /// `AuthData`가 유효하지 않거나, 계정이 정지되었거나, 비밀번호가 틀리면 `false`를 반환합니다.
    /// 성공 시 로그인 시각을 기록합니다.
    ///
    /// `AuthInfo`에는 `username`/`email`이 없으므로 `auth_data`는 형식만 검증됩니다.
    /// `auth_data`로 올바른 레코드를 찾아 `info`로 넘기는 것은 호출자(저장소 계층)의 책임이며,
    /// 이 메서드는 `info`가 `auth_data`에 해당하는 레코드인지 확인하지 않습니다.
    pub fn verify_password(&self, auth_data: &AuthData, info: &mut AuthInfo, password: &str) -> bool {
        if !auth_data.is_valid() {
            warn!("Rejected login attempt with invalid auth data");
            return false;
        }

        if info.is_disabled() {
            warn!("Rejected login attempt for disabled AuthInfo {}", info.id());
            return false;
        }

        if !info.is_same_password(self.hasher.as_ref(), password) {
            return false;
        }

        info.record_login();
        true
    }
}

/// 입력 오류는 debug, 작업을 중단시킨 치명적 오류는 warn 레벨로 남깁니다.
fn log_failure(what: &str, error: &AppError) {
    if error.is_fatal() {
        warn!("{}: {}", what, error);
    } else {
        debug!("{}: {}", what, error);
    }
}

impl Default for AuthInfoService {
    fn default() -> Self {
        Self::new()
    }
}
