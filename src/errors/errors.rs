//! 인증 레코드 전역에서 사용하는 에러 시스템
//!
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//! 입력값이 잘못된 경우와 해싱 실패처럼 작업 자체를 중단해야 하는 경우만
//! 에러로 표현하며, `AuthData` 검증이나 프로바이더 키 조회 실패는
//! 에러가 아닌 `bool` / `Option` 결과로 표현됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn change_password(info: &mut AuthInfo, hasher: &BcryptHasher, new: &str) -> Result<(), AppError> {
//!     if new.is_empty() {
//!         return Err(AppError::ValidationError("Password is required".to_string()));
//!     }
//!
//!     info.set_password(hasher, new)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 레코드를 생성하거나 비밀번호를 변경할 때 발생할 수 있는 에러를 포괄합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 에러 (빈 비밀번호 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 비밀번호 해싱 실패 (cost 설정 오류 등)
    ///
    /// 이 에러가 발생하면 해시되지 않은 비밀번호가 저장되지 않도록
    /// 해당 작업 전체가 중단됩니다.
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 작업을 중단시켜야 하는 치명적인 에러인지 확인
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::ValidationError(_))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
