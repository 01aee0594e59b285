//! yUML DSL generation and remote rendering

mod formatter;
mod remote;
mod statement;

pub use formatter::YumlFormatter;
pub use remote::{YumlClient, YUML_BASE_URL};
pub use statement::{join_dsl, Statement};
