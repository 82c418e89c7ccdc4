//! Employee Queries

/// 列出所有员工
#[derive(Debug, Clone)]
pub struct ListEmployees;

/// 按姓名搜索员工（忽略大小写的子串匹配）
#[derive(Debug, Clone)]
pub struct SearchEmployees {
    pub name: String,
}

/// 按 ID 获取员工
#[derive(Debug, Clone)]
pub struct GetEmployee {
    pub id: String,
}

/// 最高薪资
#[derive(Debug, Clone)]
pub struct GetHighestSalary;

/// 薪资最高的前十名员工姓名
#[derive(Debug, Clone)]
pub struct GetTopTenEarners;
