use thiserror::Error;

pub type MsResult<T> = Result<T, MsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
