//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（EmployeeDirectoryPort）
//! - commands / queries: 写操作与读操作的输入
//! - services: EmployeeService，上游调用与结果转换
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use commands::{CreateEmployee, DeleteEmployee};
pub use error::{failure_status, ApplicationError};
pub use ports::{EmployeeDirectoryPort, UpstreamEnvelope, UpstreamError};
pub use queries::{
    GetEmployee, GetHighestSalary, GetTopTenEarners, ListEmployees, SearchEmployees,
};
pub use services::EmployeeService;
