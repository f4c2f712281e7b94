pub mod language;
pub mod role;
pub mod subject;

pub use language::Language;
pub use role::{Role, RoleSet};
pub use subject::Subject;
