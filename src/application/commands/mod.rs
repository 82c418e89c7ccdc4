//! 应用层 - 命令（写操作）
//!
//! 写操作直接转发给上游，本服务不持有任何状态

mod employee_commands;

pub use employee_commands::*;
