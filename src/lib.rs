//! 초대/경조사 지출 관리 백엔드
//!
//! 사용자가 결혼식, 돌잔치, 장례식 등 행사에서 주고받은 금액을 기록하고
//! 조회하는 REST API입니다. 사용자 신원은 게이트웨이가 넣어 주는 `user_id` 헤더를 신뢰합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /ping, /expense/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← ExpenseController (헤더/쿼리/본문 → 요청 DTO)
//! └─────────────────┘
//!          │  Arc<dyn ExpenseService>
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← ExpenseServiceImpl (정렬/커서/합계 규칙)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← ExpenseRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use invitation_expense_backend::handlers::expenses::ExpenseController;
//! use invitation_expense_backend::routes::configure_all_routes;
//! use invitation_expense_backend::services::expenses::ExpenseServiceImpl;
//!
//! let service = Arc::new(ExpenseServiceImpl::new(expense_repo));
//! let controller = web::Data::new(ExpenseController::new(service));
//!
//! App::new()
//!     .app_data(controller.clone())
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
