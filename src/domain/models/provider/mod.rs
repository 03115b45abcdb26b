//! 외부 프로바이더 연동 데이터 모델

pub mod provider_info;

pub use provider_info::*;
