//! 인증 요청 모델

pub mod auth_data;

pub use auth_data::AuthData;
