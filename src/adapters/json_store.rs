use crate::domain::model::{Student, StudentRow};
use crate::domain::ports::{EnrollmentStore, RejectedRow, Roster};
use crate::utils::error::{RegistryError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

/// 將整份選課清單存成 JSON 陣列的檔案儲存
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// 檔案不存在時建立空檔，之後仍回報找不到檔案
    fn create_missing(&self, source: std::io::Error) -> RegistryError {
        tracing::warn!("Enrollment file {} not found, creating it", self.display_path());

        match File::create(&self.path) {
            Ok(_) => RegistryError::FileNotFound {
                path: self.display_path(),
                source,
            },
            Err(e) => RegistryError::Write {
                path: self.display_path(),
                source: e,
            },
        }
    }

    fn encode(students: &[Student]) -> Result<Vec<u8>> {
        let rows: Vec<StudentRow> = students.iter().map(Student::to_row).collect();

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        rows.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl EnrollmentStore for JsonFileStore {
    fn load(&self) -> Result<Roster> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(self.create_missing(e)),
            Err(e) => {
                return Err(RegistryError::Read {
                    path: self.display_path(),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            tracing::debug!("{} is empty, starting with no enrollments", self.display_path());
            return Ok(Roster::default());
        }

        let rows: Vec<StudentRow> =
            serde_json::from_str(&content).map_err(|e| RegistryError::Parse {
                path: self.display_path(),
                source: e,
            })?;

        let mut roster = Roster::default();
        for (index, row) in rows.into_iter().enumerate() {
            match Student::try_from(row) {
                Ok(student) => roster.students.push(student),
                Err(error) => {
                    tracing::warn!(
                        "Skipping row {} of {}: {}",
                        index + 1,
                        self.display_path(),
                        error
                    );
                    roster.rejected.push(RejectedRow {
                        position: index + 1,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Loaded {} enrollments from {} ({} rejected)",
            roster.students.len(),
            self.display_path(),
            roster.rejected.len()
        );
        Ok(roster)
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        let data = Self::encode(students)?;

        let write = |data: &[u8]| -> std::io::Result<()> {
            let mut file = File::create(&self.path)?;
            file.write_all(data)?;
            file.flush()
        };

        write(&data).map_err(|e| RegistryError::Write {
            path: self.display_path(),
            source: e,
        })?;

        tracing::info!("Saved {} enrollments to {}", students.len(), self.display_path());
        Ok(())
    }

    fn location(&self) -> String {
        self.display_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use tempfile::TempDir;

    fn sample() -> Vec<Student> {
        vec![
            Student::new("wanda", "maximoff", "python 100").unwrap(),
            Student::new("Vision", "Synth", "Intro Robotics").unwrap(),
        ]
    }

    #[test]
    fn test_save_writes_one_space_indented_array() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("Enrollments.json"));

        store.save(&sample()[..1]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "[\n {\n  \"FirstName\": \"Wanda\",\n  \"LastName\": \"Maximoff\",\n  \
             \"CourseName\": \"Python 100\"\n }\n]\n"
        );
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("Enrollments.json"));

        store.save(&sample()).unwrap();
        let roster = store.load().unwrap();

        assert_eq!(roster.students, sample());
        assert!(roster.rejected.is_empty());
    }

    #[test]
    fn test_load_missing_file_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Enrollments.json");
        let store = JsonFileStore::new(&path);

        let err = store.load().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::MissingFile);
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        // 第二次載入空檔不再報錯
        let roster = store.load().unwrap();
        assert!(roster.students.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_leaves_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Enrollments.json");
        fs::write(&path, "FirstName,LastName\nWanda,Maximoff\n").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.load().unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Corruption);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "FirstName,LastName\nWanda,Maximoff\n"
        );
    }

    #[test]
    fn test_load_undecodable_file_is_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Enrollments.json");
        fs::write(&path, [b'[', 0xff, 0xfe, b']']).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();

        assert!(matches!(err, RegistryError::Read { .. }));
        assert_eq!(err.category(), ErrorCategory::Corruption);
        assert_eq!(fs::read(&path).unwrap(), vec![b'[', 0xff, 0xfe, b']']);
    }

    #[test]
    fn test_load_row_missing_key_is_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Enrollments.json");
        fs::write(&path, r#"[{"FirstName": "Wanda", "LastName": "Maximoff"}]"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    #[test]
    fn test_load_skips_invalid_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Enrollments.json");
        fs::write(
            &path,
            r#"[
 {"FirstName": "Wanda", "LastName": "Maximoff", "CourseName": "Python 100"},
 {"FirstName": "Tony", "LastName": "5tark", "CourseName": "Intro Robotics"},
 {"LastName": "Barnes", "CourseName": "history 101", "FirstName": "bucky", "Extra": 1}
]"#,
        )
        .unwrap();

        let roster = JsonFileStore::new(&path).load().unwrap();

        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.students[1].to_string(), "Bucky, Barnes, History 101");
        assert_eq!(roster.rejected.len(), 1);
        assert_eq!(roster.rejected[0].position, 2);
        assert_eq!(roster.rejected[0].error.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_save_failure_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        // 目錄本身無法當成檔案開啟
        let store = JsonFileStore::new(temp_dir.path());

        let err = store.save(&sample()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Write);
    }
}
