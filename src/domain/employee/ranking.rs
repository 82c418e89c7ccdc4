//! 员工列表的内存聚合：按姓名过滤、最高薪资、薪资排行

use super::{Employee, EmployeeError};

/// 薪资排行默认取前 N 名
pub const TOP_EARNERS_LIMIT: usize = 10;

/// 姓名包含 `query`（忽略大小写）的员工，保持上游顺序
pub fn filter_by_name(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    employees
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// 最高薪资；列表为空时返回 `None`
pub fn highest_salary(employees: &[Employee]) -> Result<Option<i64>, EmployeeError> {
    let mut highest = None;
    for employee in employees {
        let salary = employee.parsed_salary()?;
        highest = Some(highest.map_or(salary, |h: i64| h.max(salary)));
    }
    Ok(highest)
}

/// 按薪资降序取前 `limit` 名员工的姓名
///
/// 稳定排序：薪资相同的员工保持上游中的相对顺序
pub fn top_earners(employees: &[Employee], limit: usize) -> Result<Vec<String>, EmployeeError> {
    let mut ranked = employees
        .iter()
        .map(|e| e.parsed_salary().map(|salary| (salary, e)))
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(ranked
        .into_iter()
        .take(limit)
        .map(|(_, e)| e.name.clone())
        .collect())
}
