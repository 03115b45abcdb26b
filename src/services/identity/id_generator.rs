//! 레코드 식별자 생성
//!
//! 전역 난수원을 암묵적으로 사용하지 않고, 식별자 생성 기능을
//! 생성자에 명시적으로 전달합니다. 테스트에서는 결정적인 생성기로 교체할 수 있습니다.

use uuid::Uuid;

/// 레코드 식별자 생성기
pub trait IdGenerator: Send + Sync {
    /// 비어 있지 않은 새 식별자를 반환합니다.
    ///
    /// 빈 문자열을 반환하면 `AuthInfo` 생성자가 `AppError::InternalError`로 거부합니다.
    fn generate(&self) -> String;
}

/// UUID v4 기반 식별자 생성기
///
/// 122비트 난수를 사용하므로 충돌 확률은 무시할 수 있습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
