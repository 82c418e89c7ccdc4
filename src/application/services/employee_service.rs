//! Employee Service
//!
//! 上游员工目录的门面。每个操作都是一次独立的请求/响应往返：
//! - 读操作统一通过 `list_all` 拉取全量数据，再在内存中过滤/聚合
//! - 输入校验在任何网络调用之前完成
//! - 上游失败在此处被转换为 [`ApplicationError`]，不会继续向外传播

use std::sync::Arc;

use http::StatusCode;

use crate::application::commands::{CreateEmployee, DeleteEmployee};
use crate::application::error::{failure_status, ApplicationError};
use crate::application::ports::{EmployeeDirectoryPort, UpstreamEnvelope};
use crate::application::queries::{
    GetEmployee, GetHighestSalary, GetTopTenEarners, ListEmployees, SearchEmployees,
};
use crate::domain::employee::{
    filter_by_name, highest_salary, top_earners, Employee, EmployeeId, TOP_EARNERS_LIMIT,
};

const EMPLOYEES_PATH: &str = "/employees";
const CREATE_PATH: &str = "/create";

fn employee_path(id: &EmployeeId) -> String {
    format!("/employee/{}", id)
}

fn delete_path(id: &EmployeeId) -> String {
    format!("/delete/{}", id)
}

/// 员工服务
#[derive(Clone)]
pub struct EmployeeService {
    directory: Arc<dyn EmployeeDirectoryPort>,
}

impl EmployeeService {
    pub fn new(directory: Arc<dyn EmployeeDirectoryPort>) -> Self {
        Self { directory }
    }

    /// 拉取全部员工
    pub async fn list_all(&self, _query: ListEmployees) -> Result<Vec<Employee>, ApplicationError> {
        tracing::info!("Fetching all employees");

        let envelope = self.directory.get(EMPLOYEES_PATH).await.map_err(|e| {
            tracing::error!(error = %e, "Error while fetching employees");
            ApplicationError::from(e)
        })?;

        if !envelope.is_ok() {
            tracing::error!(status = %envelope.status, "Failed to fetch employees");
            return Err(ApplicationError::upstream(
                envelope.status,
                format!("Failed to fetch employees: {}", envelope.status),
            ));
        }

        tracing::debug!(count = envelope.employees.len(), "Employees fetched");
        Ok(envelope.employees)
    }

    /// 按姓名搜索
    pub async fn search_by_name(
        &self,
        query: SearchEmployees,
    ) -> Result<Vec<Employee>, ApplicationError> {
        if query.name.is_empty() {
            return Err(ApplicationError::invalid_input("Search string cannot be empty"));
        }

        tracing::info!(name = %query.name, "Searching employees by name");

        let employees = self.fetch_for_aggregate().await?;
        Ok(filter_by_name(&employees, &query.name))
    }

    /// 按 ID 获取员工
    pub async fn get_by_id(&self, query: GetEmployee) -> Result<Employee, ApplicationError> {
        let id = EmployeeId::parse(&query.id)?;

        tracing::info!(employee_id = %id, "Fetching employee");

        let envelope = self.directory.get(&employee_path(&id)).await.map_err(|e| {
            tracing::error!(employee_id = %id, error = %e, "Error while fetching employee");
            ApplicationError::from(e)
        })?;

        if !envelope.is_ok() {
            tracing::warn!(employee_id = %id, status = %envelope.status, "Employee not found");
            return Err(ApplicationError::not_found(format!("Employee not found: {}", id)));
        }

        first_employee(envelope)
            .ok_or_else(|| ApplicationError::not_found(format!("Employee not found: {}", id)))
    }

    /// 最高薪资
    pub async fn highest_salary(&self, _query: GetHighestSalary) -> Result<i64, ApplicationError> {
        tracing::info!("Fetching highest salary of employees");

        let employees = self.fetch_for_aggregate().await?;
        highest_salary(&employees)?
            .ok_or_else(|| ApplicationError::not_found("No employee data available"))
    }

    /// 薪资前十名员工的姓名
    pub async fn top_ten_earners(
        &self,
        _query: GetTopTenEarners,
    ) -> Result<Vec<String>, ApplicationError> {
        tracing::info!("Fetching top 10 highest earning employee names");

        let employees = self.fetch_for_aggregate().await?;
        Ok(top_earners(&employees, TOP_EARNERS_LIMIT)?)
    }

    /// 创建员工
    ///
    /// 校验通过后把原始输入原样提交给上游
    pub async fn create(&self, command: CreateEmployee) -> Result<Employee, ApplicationError> {
        let validated = command.input.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejected employee input");
            ApplicationError::from(e)
        })?;

        tracing::info!(
            name = %validated.name,
            salary = validated.salary,
            age = validated.age,
            "Creating new employee"
        );

        let envelope = self
            .directory
            .post(CREATE_PATH, &command.input.to_value())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error while creating employee");
                ApplicationError::from(e)
            })?;

        if !envelope.is_ok() {
            tracing::error!(status = %envelope.status, "Failed to create employee");
            return Err(ApplicationError::upstream(
                envelope.status,
                format!("Failed to create employee: {}", envelope.status),
            ));
        }

        let created = first_employee(envelope).ok_or_else(|| {
            ApplicationError::upstream(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Upstream returned no created employee",
            )
        })?;

        tracing::info!(employee_id = %created.id, name = %created.name, "Employee created");
        Ok(created)
    }

    /// 删除员工，成功时返回确认信息
    pub async fn delete_by_id(&self, command: DeleteEmployee) -> Result<String, ApplicationError> {
        let id = EmployeeId::parse(&command.id)?;

        tracing::info!(employee_id = %id, "Deleting employee");

        let status = match self.directory.delete(&delete_path(&id)).await {
            Ok(envelope) if envelope.is_ok() => {
                tracing::info!(employee_id = %id, "Employee deleted");
                return Ok(format!("Successfully deleted employee with id: {}", id));
            }
            Ok(envelope) => envelope.status,
            Err(e) => {
                tracing::error!(employee_id = %id, error = %e, "Error while deleting employee");
                e.status_code()
            }
        };

        tracing::error!(employee_id = %id, status = %status, "Failed to delete employee");
        Err(ApplicationError::Upstream {
            status: failure_status(status),
            message: format!("Failed to delete employee: {}", status),
        })
    }

    /// 聚合类操作的数据来源：上游失败或无数据都视为 NotFound
    async fn fetch_for_aggregate(&self) -> Result<Vec<Employee>, ApplicationError> {
        match self.list_all(ListEmployees).await {
            Ok(employees) if !employees.is_empty() => Ok(employees),
            Ok(_) | Err(_) => Err(ApplicationError::not_found("No employee data available")),
        }
    }
}

fn first_employee(envelope: UpstreamEnvelope) -> Option<Employee> {
    envelope.employees.into_iter().next()
}
