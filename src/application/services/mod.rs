//! 应用服务

mod employee_service;

pub use employee_service::EmployeeService;
