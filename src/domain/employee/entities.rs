//! Employee Context - Entities

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::EmployeeError;

/// 员工
///
/// 不变量:
/// - 数值字段（salary、age）以字符串形式传输，按需解析
/// - 构造后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,

    #[serde(
        alias = "employee_name",
        alias = "employeeName",
        deserialize_with = "flexible_string"
    )]
    pub name: String,

    #[serde(
        alias = "employee_salary",
        alias = "employeeSalary",
        deserialize_with = "flexible_string"
    )]
    pub salary: String,

    #[serde(
        alias = "employee_age",
        alias = "employeeAge",
        deserialize_with = "flexible_string"
    )]
    pub age: String,

    /// 头像地址，可能为空
    #[serde(alias = "profile_image", default, deserialize_with = "flexible_string")]
    pub profile_image: String,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        salary: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary: salary.into(),
            age: age.into(),
            profile_image: String::new(),
        }
    }

    /// 解析薪资字段
    pub fn parsed_salary(&self) -> Result<i64, EmployeeError> {
        self.salary
            .parse::<i64>()
            .map_err(|_| EmployeeError::InvalidSalary {
                id: self.id.clone(),
                value: self.salary.clone(),
            })
    }
}

/// 上游字段可能是字符串、数字或 null，统一归一化为字符串
fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_upstream_snake_case() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "employee_name": "Tiger Nixon",
            "employee_salary": 320800,
            "employee_age": 61,
            "profile_image": ""
        }))
        .unwrap();

        assert_eq!(employee.id, "1");
        assert_eq!(employee.name, "Tiger Nixon");
        assert_eq!(employee.salary, "320800");
        assert_eq!(employee.age, "61");
        assert_eq!(employee.profile_image, "");
    }

    #[test]
    fn test_deserialize_camel_case_and_missing_image() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "7",
            "employeeName": "Mr Test",
            "employeeSalary": "50000",
            "employeeAge": "30"
        }))
        .unwrap();

        assert_eq!(employee, Employee::new("7", "Mr Test", "50000", "30"));
    }

    #[test]
    fn test_null_profile_image_becomes_empty() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "2",
            "name": "Garrett Winters",
            "salary": "170750",
            "age": "63",
            "profile_image": null
        }))
        .unwrap();
        assert!(employee.profile_image.is_empty());
    }

    #[test]
    fn test_rejects_nested_values() {
        let result: Result<Employee, _> = serde_json::from_value(json!({
            "id": "2",
            "name": ["not", "a", "name"],
            "salary": "1",
            "age": "20"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_service_field_names() {
        let value = serde_json::to_value(Employee::new("3", "Ashton Cox", "86000", "66")).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "3",
                "name": "Ashton Cox",
                "salary": "86000",
                "age": "66",
                "profileImage": ""
            })
        );
    }

    #[test]
    fn test_parsed_salary() {
        assert_eq!(Employee::new("1", "a", "60000", "30").parsed_salary().unwrap(), 60000);

        let err = Employee::new("9", "b", "lots", "30").parsed_salary().unwrap_err();
        assert!(matches!(err, EmployeeError::InvalidSalary { ref id, .. } if id == "9"));
    }
}
