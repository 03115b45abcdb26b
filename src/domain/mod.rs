//! # Domain Layer Module
//!
//! 인증 레코드의 데이터 모델과 도메인 규칙을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities   - AuthInfo (영속 대상 레코드)
//! └── Models     - AuthData, ProviderInfo (값 타입)
//! ```

pub mod entities;
pub mod models;

pub use entities::*;
pub use models::*;
