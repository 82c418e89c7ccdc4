//! Employee Context - 员工限界上下文
//!
//! 职责:
//! - 员工实体与上游字段的映射
//! - ID 与创建输入的校验
//! - 薪资聚合（最高薪资、排行）

mod entities;
mod errors;
mod ranking;
mod value_objects;

pub use entities::Employee;
pub use errors::EmployeeError;
pub use ranking::{filter_by_name, highest_salary, top_earners, TOP_EARNERS_LIMIT};
pub use value_objects::{EmployeeId, EmployeeInput, NewEmployee, MAX_AGE, MIN_AGE};
