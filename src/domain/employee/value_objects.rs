//! Employee Context - Value Objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EmployeeError;

/// 员工年龄下限（含）
pub const MIN_AGE: i64 = 18;
/// 员工年龄上限（含）
pub const MAX_AGE: i64 = 100;

/// 员工唯一标识
///
/// 不变量: 非空，且全部由十进制数字组成
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn parse(raw: &str) -> Result<Self, EmployeeError> {
        if raw.trim().is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(EmployeeError::InvalidId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 创建员工的原始输入
///
/// 客户端提交的任意键值对，原样转发给上游
///
/// 使用前必须先通过 [`EmployeeInput::validate`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeInput(Map<String, Value>);

/// 校验通过的创建请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub salary: u64,
    pub age: u8,
}

impl EmployeeInput {
    /// 设置字段（链式）
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// 校验输入，第一条不满足的规则决定错误信息
    pub fn validate(&self) -> Result<NewEmployee, EmployeeError> {
        let name = match self.field("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
            _ => return Err(EmployeeError::InvalidInput("Employee name cannot be empty")),
        };

        let (salary, age) = match (self.field("salary"), self.field("age")) {
            (Some(salary), Some(age)) => (salary, age),
            _ => {
                return Err(EmployeeError::InvalidInput(
                    "Salary and age must be provided",
                ))
            }
        };

        let salary = parse_integer(salary)
            .ok_or(EmployeeError::InvalidInput("Invalid salary format"))?;
        let salary = u64::try_from(salary)
            .map_err(|_| EmployeeError::InvalidInput("Salary cannot be negative"))?;

        let age = parse_integer(age).ok_or(EmployeeError::InvalidInput("Invalid age format"))?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(EmployeeError::InvalidInput("Age must be between 18 and 100"));
        }

        Ok(NewEmployee {
            name,
            salary,
            // 已在 [18, 100] 区间内
            age: age as u8,
        })
    }

    /// 读取字段，显式的 null 视为缺失
    fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }
}

/// 整数可以是 JSON 数字，也可以是数字字符串
fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}
