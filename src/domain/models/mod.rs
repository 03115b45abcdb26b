//! # Domain Models Module
//!
//! - [`auth`] - 로그인 요청 인증 데이터 (`AuthData`)
//! - [`provider`] - 외부 프로바이더 연동 데이터 타입

pub mod auth;
pub mod provider;
