//! Employee Commands

use crate::domain::employee::EmployeeInput;

/// 创建员工命令
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub input: EmployeeInput,
}

/// 删除员工命令
#[derive(Debug, Clone)]
pub struct DeleteEmployee {
    pub id: String,
}
