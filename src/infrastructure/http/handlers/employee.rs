//! Employee HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    CreateEmployee, DeleteEmployee, GetEmployee, GetHighestSalary, GetTopTenEarners,
    ListEmployees, SearchEmployees,
};
use crate::domain::employee::{Employee, EmployeeInput};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取员工列表
///
/// 上游失败时仍返回空列表，状态码取自上游
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Vec<Employee>>) {
    match state.employee_service.list_all(ListEmployees).await {
        Ok(employees) => (StatusCode::OK, Json(employees)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list employees");
            (e.status_code(), Json(Vec::new()))
        }
    }
}

/// 按姓名搜索员工
pub async fn search_employees(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state
        .employee_service
        .search_by_name(SearchEmployees { name })
        .await?;
    Ok(Json(employees))
}

/// 搜索路径缺少姓名时按空搜索串处理
pub async fn search_employees_without_name(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state
        .employee_service
        .search_by_name(SearchEmployees {
            name: String::new(),
        })
        .await?;
    Ok(Json(employees))
}

/// 获取员工详情
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let employee = state.employee_service.get_by_id(GetEmployee { id }).await?;
    Ok(Json(employee))
}

/// 最高薪资
pub async fn highest_salary(State(state): State<Arc<AppState>>) -> Result<Json<i64>, ApiError> {
    let salary = state
        .employee_service
        .highest_salary(GetHighestSalary)
        .await?;
    Ok(Json(salary))
}

/// 薪资前十名员工姓名
pub async fn top_ten_earners(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let names = state
        .employee_service
        .top_ten_earners(GetTopTenEarners)
        .await?;
    Ok(Json(names))
}

/// 创建员工
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let created = state
        .employee_service
        .create(CreateEmployee { input })
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// 删除员工
///
/// 成功与失败都返回文本信息
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, String) {
    match state
        .employee_service
        .delete_by_id(DeleteEmployee { id })
        .await
    {
        Ok(message) => (StatusCode::OK, message),
        Err(e) => (e.status_code(), e.to_string()),
    }
}
