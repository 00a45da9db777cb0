//! 지출 관리 서비스 메인 애플리케이션
//!
//! MongoDB 연결과 인덱스를 준비하고, 서비스를 컨트롤러에 주입한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use invitation_expense_backend::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
use invitation_expense_backend::db::Database;
use invitation_expense_backend::handlers::expenses::{ExpenseController, USER_ID_HEADER};
use invitation_expense_backend::repositories::expenses::ExpenseRepository;
use invitation_expense_backend::routes::configure_all_routes;
use invitation_expense_backend::services::expenses::ExpenseServiceImpl;

/// (profile, 파일 이름, 로드 결과)
type EnvFileLoad = (String, &'static str, Result<(), dotenv::Error>);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_file = load_env_file();
    init_logging();
    log_env_file_result(env_file);

    info!("🚀 지출 관리 서비스 시작중... ({:?})", Environment::current());

    let database = Arc::new(Database::new().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?);

    let expense_repo = Arc::new(ExpenseRepository::new(database));
    expense_repo.create_indexes().await.map_err(|e| {
        error!("인덱스 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let expense_service = Arc::new(ExpenseServiceImpl::new(expense_repo));
    let controller = web::Data::new(ExpenseController::new(expense_service));

    info!("✅ 모든 서비스가 초기화되었습니다");

    start_http_server(controller).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 순서: Rate Limiting → CORS → 접근 로그 → 경로 정규화
async fn start_http_server(controller: web::Data<ExpenseController>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다 (workers: {})", bind_address, workers);
    info!("📍 Health check: http://{}/ping", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            .app_data(controller.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// `RUST_LOG`도 이 파일에서 올 수 있으므로 로거보다 먼저 호출되며,
/// 결과는 로거 초기화 후에 [`log_env_file_result`]로 기록합니다.
fn load_env_file() -> EnvFileLoad {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let loaded = if filename == ".env" {
        dotenv().map(|_| ())
    } else {
        dotenv::from_filename(filename).map(|_| ())
    };

    (profile, filename, loaded)
}

fn log_env_file_result((profile, filename, loaded): EnvFileLoad) {
    info!("Current profile: {}", profile);

    match loaded {
        Ok(()) => info!("{} 파일 로드 됨", filename),
        Err(e) => error!("{} 파일 로드 실패: {}", filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=invitation_expense_backend::services=debug cargo run
/// ```
fn init_logging() {
    let default_filter = Environment::current().default_log_filter();
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}

/// CORS 설정을 구성합니다
///
/// 신원 정보가 담긴 `user_id` 헤더를 허용해야 브라우저에서 API를 호출할 수 있습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .max_age(3600)
}
