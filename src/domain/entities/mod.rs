//! # Domain Entities Module
//!
//! 인증 도메인의 핵심 엔티티를 정의합니다.
//! 엔티티는 serde로 직렬화되어 외부 저장소 계층이 문서 형태로 보관할 수 있습니다.
//!
//! ```text
//! entities/
//! └── auth_info/   ← AuthInfo 엔티티
//! ```

pub mod auth_info;
