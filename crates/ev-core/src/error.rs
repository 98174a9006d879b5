use thiserror::Error;

pub type EvResult<T> = Result<T, EvError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
