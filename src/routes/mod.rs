//! # HTTP Routes
//!
//! 메서드 + 경로를 컨트롤러 핸들러에 연결합니다.
//! `ExpenseController`는 `App::app_data`로 등록되어 있어야 합니다.
//! `/expense` 스코프에서는 `Content-Type` 없는 본문을 form으로 바인딩합니다.
//!
//! ```text
//! GET    /ping            → {"message": "pong"}
//! POST   /expense         → create_expense
//! PUT    /expense         → update_expense
//! DELETE /expense         → delete_expense
//! GET    /expense         → get_expense
//! GET    /expense/list    → get_expense_list
//! GET    /expense/total   → get_expense_total
//! GET    /expense/search  → get_expense_search
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::handlers::expenses::ExpenseController;
use crate::middlewares::form_content_type::DefaultFormContentType;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(ping);

    configure_expense_routes(cfg);
}

fn configure_expense_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/expense")
            .wrap(DefaultFormContentType)
            .service(
                web::resource("")
                    .route(web::post().to(ExpenseController::create_expense))
                    .route(web::put().to(ExpenseController::update_expense))
                    .route(web::delete().to(ExpenseController::delete_expense))
                    .route(web::get().to(ExpenseController::get_expense)),
            )
            .route("/list", web::get().to(ExpenseController::get_expense_list))
            .route("/total", web::get().to(ExpenseController::get_expense_total))
            .route("/search", web::get().to(ExpenseController::get_expense_search)),
    );
}

/// 헬스 체크
#[actix_web::get("/ping")]
async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "pong" }))
}
