use crate::domain::model::Student;
use crate::utils::error::{RegistryError, Result};

/// 一列被拒絕的資料：在檔案中的位置（從 1 開始）與原因
#[derive(Debug)]
pub struct RejectedRow {
    pub position: usize,
    pub error: RegistryError,
}

/// 載入結果：合法紀錄依檔案順序排列，不合法的列另外回報
#[derive(Debug, Default)]
pub struct Roster {
    pub students: Vec<Student>,
    pub rejected: Vec<RejectedRow>,
}

pub trait EnrollmentStore {
    /// 讀取全部紀錄。檔案不存在或內容損毀時回傳 `Err`，呼叫端以空清單繼續。
    fn load(&self) -> Result<Roster>;

    /// 以 `students` 覆寫整個檔案
    fn save(&self, students: &[Student]) -> Result<()>;

    fn location(&self) -> String;
}
