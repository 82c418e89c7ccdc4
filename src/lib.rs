//! Employee Gateway - 第三方员工目录 API 的 HTTP 门面
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Employee Context: 员工实体、输入校验、薪资聚合
//!
//! 应用层 (application/):
//! - Ports: EmployeeDirectoryPort（上游客户端抽象）
//! - Services: EmployeeService
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: HTTP / Fake 目录客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
