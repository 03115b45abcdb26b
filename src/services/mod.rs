//! # Services Module
//!
//! - [`auth_info`] - 인증 레코드 생성 및 비밀번호 관리
//! - [`password`] - 비밀번호 해싱 협력자
//! - [`identity`] - 식별자 생성 협력자

pub mod auth_info;
pub mod identity;
pub mod password;
