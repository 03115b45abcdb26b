//! AuthInfo Entity Implementation
//!
//! 사용자 인증 레코드의 핵심 구현체입니다.
//! 비밀번호 기반, 익명, 외부 프로바이더 연동의 세 가지 신원 유형을 하나의 모델로 표현합니다.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use crate::domain::models::provider::{ProviderData, ProviderInfo};
use crate::errors::{AppError, AppResult};
use crate::services::identity::IdGenerator;
use crate::services::password::PasswordHasher;

/// 사용자 인증 레코드
///
/// 고유 식별자, 해시된 비밀번호, 토큰 무효화 기준 시각, 외부 프로바이더 연동 데이터를 보관합니다.
/// 동일 인스턴스를 여러 스레드에서 동시에 변경하려면 소유자가 외부에서 잠금을 걸어야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthInfo {
    /// 고유 식별자 (생성 후 변경 불가, 빈 문자열 불가)
    #[serde(deserialize_with = "deserialize_non_empty_id")]
    id: String,
    /// 해시된 비밀번호 (익명/프로바이더 전용 레코드는 빈 값)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    hashed_password: Vec<u8>,
    /// 이 시각 이전에 발급된 세션 토큰은 무효
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token_valid_since: Option<DateTime<Utc>>,
    /// 프로바이더 키 → 연동 데이터
    #[serde(default)]
    provider_info: ProviderInfo,
    /// 역할 목록
    #[serde(default)]
    pub roles: Vec<String>,
    /// 계정 정지 여부
    #[serde(default)]
    pub disabled: bool,
    /// 계정 정지 사유
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_message: Option<String>,
    /// 계정 정지 만료 시각 (None이면 무기한)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_expiry: Option<DateTime<Utc>>,
    /// 마지막 로그인 시각
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    /// 마지막 활동 시각
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl AuthInfo {
    fn with_id(ids: &dyn IdGenerator) -> AppResult<Self> {
        let id = ids.generate();
        if id.is_empty() {
            return Err(AppError::InternalError(
                "식별자 생성기가 빈 식별자를 반환했습니다".to_string(),
            ));
        }

        Ok(Self {
            id,
            hashed_password: Vec::new(),
            token_valid_since: None,
            provider_info: ProviderInfo::new(),
            roles: Vec::new(),
            disabled: false,
            disabled_message: None,
            disabled_expiry: None,
            last_login_at: None,
            last_seen_at: None,
        })
    }

    /// 비밀번호 기반 레코드 생성
    ///
    /// 비밀번호를 해싱해 저장합니다. `token_valid_since`는 설정되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 비밀번호가 빈 문자열인 경우
    /// * `AppError::HashingError` - 해싱 실패 시 (레코드가 만들어지지 않음)
    /// * `AppError::InternalError` - 식별자 생성기가 빈 식별자를 반환한 경우
    pub fn new_with_password(
        ids: &dyn IdGenerator,
        hasher: &dyn PasswordHasher,
        password: &str,
    ) -> AppResult<Self> {
        let hashed_password = hash_non_empty(hasher, password)?;

        let mut info = Self::with_id(ids)?;
        info.hashed_password = hashed_password;
        info!("AuthInfo created with password: {}", info.id);

        Ok(info)
    }

    /// 익명 레코드 생성
    pub fn new_anonymous(ids: &dyn IdGenerator) -> AppResult<Self> {
        let info = Self::with_id(ids)?;
        info!("Anonymous AuthInfo created: {}", info.id);
        Ok(info)
    }

    /// 외부 프로바이더 연동 레코드 생성
    pub fn new_with_provider_info(
        ids: &dyn IdGenerator,
        key: impl Into<String>,
        data: ProviderData,
    ) -> AppResult<Self> {
        let mut info = Self::with_id(ids)?;
        let key = key.into();
        info!("AuthInfo created with provider {}: {}", key, info.id);
        info.provider_info.insert(key, data);
        Ok(info)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hashed_password(&self) -> &[u8] {
        &self.hashed_password
    }

    pub fn token_valid_since(&self) -> Option<DateTime<Utc>> {
        self.token_valid_since
    }

    pub fn provider_info(&self) -> &ProviderInfo {
        &self.provider_info
    }

    /// 비밀번호 인증이 가능한 레코드인지 확인
    pub fn has_password(&self) -> bool {
        !self.hashed_password.is_empty()
    }

    /// 비밀번호를 설정하고 토큰 무효화 기준 시각을 현재로 갱신합니다.
    ///
    /// 기준 시각은 항상 이전 값보다 늦습니다. 해싱에 실패하면 레코드는 변경되지 않습니다.
    /// bcrypt 해싱은 의도적으로 느리므로 지연 시간에 민감한 경로에서는 주의해야 합니다.
    pub fn set_password(&mut self, hasher: &dyn PasswordHasher, password: &str) -> AppResult<()> {
        let hashed_password = hash_non_empty(hasher, password)?;

        self.hashed_password = hashed_password;
        self.token_valid_since = Some(next_watermark(self.token_valid_since, Utc::now()));
        debug!("Password changed for {}, tokens valid since {:?}", self.id, self.token_valid_since);

        Ok(())
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 저장된 해시가 없으면 항상 `false`입니다.
    pub fn is_same_password(&self, hasher: &dyn PasswordHasher, password: &str) -> bool {
        self.has_password() && hasher.verify(&self.hashed_password, password)
    }

    /// 주어진 시각에 발급된 세션 토큰이 아직 유효한지 확인합니다.
    pub fn accepts_token_issued_at(&self, issued_at: DateTime<Utc>) -> bool {
        match self.token_valid_since {
            Some(since) => issued_at >= since,
            None => true,
        }
    }

    /// 프로바이더 연동 데이터를 저장합니다. 기존 값은 덮어씁니다.
    pub fn set_provider_info_data(&mut self, key: impl Into<String>, data: ProviderData) {
        self.provider_info.insert(key.into(), data);
    }

    pub fn get_provider_info_data(&self, key: &str) -> Option<&ProviderData> {
        self.provider_info.get(key)
    }

    /// 프로바이더 연동 데이터를 삭제합니다. 키가 없으면 아무 일도 하지 않습니다.
    pub fn remove_provider_info_data(&mut self, key: &str) -> Option<ProviderData> {
        self.provider_info.remove(key)
    }

    /// 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_roles<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().any(|role| self.has_role(role.as_ref()))
    }

    /// 모든 역할을 보유하고 있는지 확인
    pub fn has_all_roles<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().all(|role| self.has_role(role.as_ref()))
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 계정을 정지합니다. `expiry`가 None이면 무기한 정지입니다.
    pub fn disable(&mut self, message: Option<String>, expiry: Option<DateTime<Utc>>) {
        self.disabled = true;
        self.disabled_message = message;
        self.disabled_expiry = expiry;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
        self.disabled_message = None;
        self.disabled_expiry = None;
    }

    /// 주어진 시각 기준으로 정지 상태인지 확인
    pub fn is_disabled_at(&self, now: DateTime<Utc>) -> bool {
        if !self.disabled {
            return false;
        }

        match self.disabled_expiry {
            Some(expiry) => now < expiry,
            None => true,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled_at(Utc::now())
    }

    /// 로그인 시각과 활동 시각을 현재로 기록합니다.
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.last_seen_at = Some(now);
    }
}

fn deserialize_non_empty_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    if id.is_empty() {
        return Err(serde::de::Error::custom("AuthInfo id must not be empty"));
    }
    Ok(id)
}

fn hash_non_empty(hasher: &dyn PasswordHasher, password: &str) -> AppResult<Vec<u8>> {
    if password.is_empty() {
        return Err(AppError::ValidationError("비밀번호는 필수입니다".to_string()));
    }

    let hashed = hasher.hash(password)?;
    if hashed.is_empty() {
        return Err(AppError::HashingError("빈 해시가 반환되었습니다".to_string()));
    }

    Ok(hashed)
}

/// 이전 기준 시각보다 반드시 늦은 새 기준 시각
fn next_watermark(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(prev) if now <= prev => prev + Duration::microseconds(1),
        _ => now,
    }
}
