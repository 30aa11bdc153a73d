//! Configuration sources, applied in precedence order.

pub mod environment;
pub mod workspace_file;
