use std::collections::HashMap;
use serde_json::{Map, Value};

/// 외부 프로바이더가 제공한 연동 데이터
///
/// 키는 문자열이고 값은 타입이 정해지지 않은 중첩 JSON 값입니다.
/// 저장했다가 꺼낼 때 원본과 동일한 값이 보존됩니다.
pub type ProviderData = Map<String, Value>;

/// 프로바이더 키 → 연동 데이터 매핑
pub type ProviderInfo = HashMap<String, ProviderData>;

/// 프로바이더 키 구분자
pub const PROVIDER_KEY_SEPARATOR: char = ':';

/// `issuer:subject` 형태의 프로바이더 키를 만듭니다.
///
/// 키 자체는 `AuthInfo`에게 불투명한 문자열이며, 이 함수는 호출자 측 관례를
/// 한 곳에 모아 둔 것입니다.
///
/// ```rust
/// use skydb_auth::domain::models::provider::provider_key;
///
/// assert_eq!(provider_key("google", "1234"), "google:1234");
/// ```
pub fn provider_key(issuer: &str, subject: &str) -> String {
    format!("{}{}{}", issuer, PROVIDER_KEY_SEPARATOR, subject)
}

/// [`provider_key`]로 만든 키를 `(issuer, subject)`로 분리합니다.
///
/// subject에 구분자가 포함될 수 있으므로 첫 번째 구분자에서만 자릅니다.
pub fn split_provider_key(key: &str) -> Option<(&str, &str)> {
    key.split_once(PROVIDER_KEY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_key_composition() {
        assert_eq!(provider_key("org.example", "user-1"), "org.example:user-1");
    }

    #[test]
    fn test_split_provider_key() {
        assert_eq!(split_provider_key("google:1234"), Some(("google", "1234")));
        assert_eq!(
            split_provider_key("https://issuer:sub"),
            Some(("https", "//issuer:sub"))
        );
        assert_eq!(split_provider_key("no-separator"), None);

        let key = provider_key("github", "a:b");
        assert_eq!(split_provider_key(&key), Some(("github", "a:b")));
    }
}
