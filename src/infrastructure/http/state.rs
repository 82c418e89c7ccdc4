//! Application State
//!
//! 所有请求共享的只读状态；唯一的共享资源是上游客户端的连接池

use std::sync::Arc;

use crate::application::{EmployeeDirectoryPort, EmployeeService};

/// 应用状态
pub struct AppState {
    pub employee_service: EmployeeService,
}

impl AppState {
    /// 创建应用状态
    pub fn new(directory: Arc<dyn EmployeeDirectoryPort>) -> Self {
        Self {
            employee_service: EmployeeService::new(directory),
        }
    }
}
