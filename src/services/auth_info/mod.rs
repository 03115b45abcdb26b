//! AuthInfo 서비스 모듈
//!
//! 인증 레코드 생성과 비밀번호 관리를 담당합니다.
//!
//! - 환경별 bcrypt cost 적용
//! - 비밀번호 변경 시 토큰 무효화 기준 시각 갱신
//! - 로그인 시도 검증

pub mod auth_info_service;

pub use auth_info_service::AuthInfoService;
