//! AuthInfo Entity Module
//!
//! 사용자 인증 레코드 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust
//! use serde_json::json;
//! use skydb_auth::domain::entities::auth_info::AuthInfo;
//! use skydb_auth::services::identity::UuidGenerator;
//! use skydb_auth::services::password::BcryptHasher;
//!
//! let hasher = BcryptHasher::with_cost(4);
//!
//! // 비밀번호 기반 레코드
//! let mut info = AuthInfo::new_with_password(&UuidGenerator, &hasher, "secret").unwrap();
//! assert!(info.is_same_password(&hasher, "secret"));
//!
//! // 프로바이더 연동 데이터
//! let data = json!({"name": "John"}).as_object().cloned().unwrap();
//! info.set_provider_info_data("google:1234", data);
//! assert!(info.get_provider_info_data("google:1234").is_some());
//! ```

pub mod auth_info;

pub use auth_info::AuthInfo;
