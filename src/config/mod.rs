//! # Configuration Module
//!
//! 인증 레코드 코어의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, bcrypt cost, `.env` 프로파일 로딩
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export PROFILE="prod"            # .env.prod 로드
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use skydb_auth::config::{load_env_file, Environment, PasswordConfig};
//!
//! load_env_file();
//! let env = Environment::current();
//! let cost = PasswordConfig::bcrypt_cost();
//! ```

pub mod data_config;

pub use data_config::*;
