//! 사용자 인증 레코드 코어
//!
//! 단일 사용자 인증 레코드(`AuthInfo`)의 데이터 모델과 무결성 규칙을 제공합니다.
//! 저장소, 네트워크, 동시성 모델은 이 크레이트를 소유하는 계층이 담당합니다.
//!
//! # Features
//!
//! - **세 가지 신원 유형**: 비밀번호 기반, 익명, 외부 프로바이더 연동
//! - **bcrypt 해싱**: 환경별 cost, 솔트 자동 생성, 상수 시간 검증
//! - **토큰 무효화 기준 시각**: 비밀번호 변경 이전에 발급된 토큰 거부
//! - **프로바이더 연동 데이터**: 임의의 중첩 JSON 페이로드 저장/조회/삭제
//! - **로그인 필드 검증**: `AuthData::is_valid` / `AuthData::is_empty`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ AuthInfoService │ ← 협력자 구성 + 타이밍 로그
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    AuthInfo     │ ← 도메인 엔티티
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ IdGenerator     │ ← UUID v4
//! │ PasswordHasher  │ ← bcrypt
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use skydb_auth::services::auth_info::AuthInfoService;
//! use skydb_auth::services::identity::UuidGenerator;
//! use skydb_auth::services::password::BcryptHasher;
//!
//! let service = AuthInfoService::with_components(
//!     Arc::new(UuidGenerator),
//!     Arc::new(BcryptHasher::with_cost(4)),
//! );
//!
//! let mut info = service.create_anonymous().unwrap();
//! service.change_password(&mut info, "secret").unwrap();
//! assert!(info.is_same_password(service.hasher(), "secret"));
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

#[cfg(test)]
mod test_support;
