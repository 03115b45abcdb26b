//! 로그인 요청 인증 데이터
//!
//! 인증을 시도하는 호출자가 전달한 로그인 필드를 담는 임시 구조체입니다.
//! 저장되지 않으며, 자격 증명 조회 전에 검증하는 용도로만 사용됩니다.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 사용자 이름 키
pub const USERNAME_KEY: &str = "username";
/// 이메일 키
pub const EMAIL_KEY: &str = "email";

/// 호출자가 제공한 로그인 필드
///
/// `username` 또는 `email` 중 하나가 null이 아닌 값으로 있어야 유효합니다.
/// 알 수 없는 키는 허용되지만 그 자체로 유효성을 만들지는 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthData(HashMap<String, Value>);

impl AuthData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// null이 아닌 값이 있는 경우에만 반환합니다.
    fn present(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// `username` 또는 `email`이 null이 아닌 값으로 존재하는지 확인합니다.
    pub fn is_valid(&self) -> bool {
        self.present(USERNAME_KEY).is_some() || self.present(EMAIL_KEY).is_some()
    }

    /// null이 아닌 값이 하나도 없는지 확인합니다.
    ///
    /// 키 이름은 보지 않습니다. `{"iamyourfather": "johndoe"}`는 유효하지 않지만
    /// 비어 있지도 않습니다.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Value::is_null)
    }

    /// 문자열 `username` 값
    pub fn username(&self) -> Option<&str> {
        self.present(USERNAME_KEY).and_then(Value::as_str)
    }

    /// 문자열 `email` 값
    pub fn email(&self) -> Option<&str> {
        self.present(EMAIL_KEY).and_then(Value::as_str)
    }
}

impl From<HashMap<String, Value>> for AuthData {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AuthData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
