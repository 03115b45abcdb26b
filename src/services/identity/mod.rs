//! 식별자 생성 서비스

pub mod id_generator;

pub use id_generator::{IdGenerator, UuidGenerator};
