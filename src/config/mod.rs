//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, MongoDB 설정
//! - [`http_config`] - Rate Limiting, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="invitation_expense_dev"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
//! ```
//!
//! `PROFILE` 환경 변수에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다 (`main.rs` 참고).

pub mod data_config;
pub mod http_config;

pub use data_config::*;
pub use http_config::*;
