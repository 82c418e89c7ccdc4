//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                      GET     健康检查
//! - /employees                     GET     列出所有员工
//! - /employees                     POST    创建员工
//! - /employees/search/:name        GET     按姓名搜索
//! - /employees/search/             GET     空搜索串（400）
//! - /employees/highest-salary      GET     最高薪资
//! - /employees/top10-salaries      GET     薪资前十名姓名
//! - /employees/:id                 GET     获取员工
//! - /employees/:id                 DELETE  删除员工

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ping", get(handlers::ping))
        .merge(employee_routes())
}

/// Employee 路由
///
/// 静态段（highest-salary、top10-salaries）优先于 `:id` 匹配
fn employee_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route("/employees/search/:name", get(handlers::search_employees))
        .route(
            "/employees/search/",
            get(handlers::search_employees_without_name),
        )
        .route("/employees/highest-salary", get(handlers::highest_salary))
        .route("/employees/top10-salaries", get(handlers::top_ten_earners))
        .route(
            "/employees/:id",
            get(handlers::get_employee).delete(handlers::delete_employee),
        )
}
