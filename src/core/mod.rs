pub mod menu;
pub mod session;

pub use crate::domain::model::Student;
pub use crate::domain::ports::{EnrollmentStore, RejectedRow, Roster};
pub use crate::utils::error::Result;
