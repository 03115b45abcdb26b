//! 테스트용 협력자 대역

use std::sync::atomic::{AtomicUsize, Ordering};
use crate::errors::{AppError, AppResult};
use crate::services::identity::IdGenerator;
use crate::services::password::{BcryptHasher, PasswordHasher};

/// 테스트 로그 출력 초기화 (여러 번 호출해도 안전)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 가장 낮은 cost의 bcrypt 해셔
pub fn fast_hasher() -> BcryptHasher {
    BcryptHasher::with_cost(4)
}

/// `{prefix}-1`, `{prefix}-2`, ... 순서로 식별자를 만드는 결정적 생성기
pub struct SequenceIdGenerator {
    prefix: &'static str,
    next: AtomicUsize,
}

impl SequenceIdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: AtomicUsize::new(1) }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// 항상 같은 식별자를 반환하는 생성기
pub struct FixedIdGenerator(pub &'static str);

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// 항상 실패하는 해셔
pub struct FailingHasher;

impl PasswordHasher for FailingHasher {
    fn hash(&self, _password: &str) -> AppResult<Vec<u8>> {
        Err(AppError::HashingError("hasher misconfigured".to_string()))
    }

    fn verify(&self, _hashed: &[u8], _password: &str) -> bool {
        false
    }
}
