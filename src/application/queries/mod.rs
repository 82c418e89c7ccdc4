//! 应用层 - 查询（读操作）
//!
//! 所有查询都基于一次"拉取全部员工"完成，再在内存中过滤/聚合

mod employee_queries;

pub use employee_queries::*;
