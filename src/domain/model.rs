use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_alphabetic, validate_contains_space};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIRST_NAME: &str = "first name";
pub const LAST_NAME: &str = "last name";
pub const COURSE_NAME: &str = "course name";

/// 一筆選課紀錄。欄位只能透過驗證過的建構子或 setter 寫入，
/// 因此任何 `Student` 實例都一定是合法的。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    first_name: String,
    last_name: String,
    course_name: String,
}

/// 檔案中的一列，欄位名稱與磁碟格式一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudentRow {
    pub first_name: String,
    pub last_name: String,
    pub course_name: String,
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, course_name: &str) -> Result<Self> {
        Ok(Self {
            first_name: normalize_name(FIRST_NAME, first_name)?,
            last_name: normalize_name(LAST_NAME, last_name)?,
            course_name: normalize_course(course_name)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.first_name = normalize_name(FIRST_NAME, value)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.last_name = normalize_name(LAST_NAME, value)?;
        Ok(())
    }

    pub fn set_course_name(&mut self, value: &str) -> Result<()> {
        self.course_name = normalize_course(value)?;
        Ok(())
    }

    /// "Wanda Maximoff is enrolled in Python 100."
    pub fn enrollment_line(&self) -> String {
        format!(
            "{} {} is enrolled in {}.",
            self.first_name, self.last_name, self.course_name
        )
    }

    pub fn to_row(&self) -> StudentRow {
        StudentRow::from(self.clone())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.first_name, self.last_name, self.course_name
        )
    }
}

impl TryFrom<StudentRow> for Student {
    type Error = RegistryError;

    fn try_from(row: StudentRow) -> Result<Self> {
        Student::new(&row.first_name, &row.last_name, &row.course_name)
    }
}

impl From<Student> for StudentRow {
    fn from(student: Student) -> Self {
        Self {
            first_name: student.first_name,
            last_name: student.last_name,
            course_name: student.course_name,
        }
    }
}

fn normalize_name(field: &str, value: &str) -> Result<String> {
    validate_alphabetic(field, value)?;
    Ok(title_case(value))
}

fn normalize_course(value: &str) -> Result<String> {
    validate_contains_space(COURSE_NAME, value)?;
    Ok(title_case(value))
}

/// 每個字的第一個字母大寫，其餘小寫；非字母字元視為字的邊界
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}
