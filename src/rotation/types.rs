use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotationError {
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("employee {0} is on a day/night rotation but has no anchor")]
    MissingAnchor(String),
    #[error("anchor given for unknown employee: {0}")]
    OrphanAnchor(String),
    #[error("duplicate employee name: {0}")]
    DuplicateEmployee(String),
    #[error("employee name cannot be empty")]
    EmptyName,
}
