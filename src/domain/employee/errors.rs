//! Employee Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmployeeError {
    #[error("Invalid employee ID")]
    InvalidId(String),

    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("员工 {id} 的薪资无法解析: {value:?}")]
    InvalidSalary { id: String, value: String },
}
