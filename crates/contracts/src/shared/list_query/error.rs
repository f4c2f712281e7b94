use thiserror::Error;

/// Ошибки конструирования параметров списка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListQueryError {
    #[error("page size must be positive")]
    ZeroPageSize,
}
