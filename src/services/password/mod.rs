//! 비밀번호 해싱 서비스
//!
//! - bcrypt 비밀번호 해싱
//! - 상수 시간 해시 검증

pub mod password_hasher;

pub use password_hasher::{BcryptHasher, PasswordHasher, MAX_PASSWORD_BYTES};
