// Engine module - session reconstruction and row transformation
// This layer sits between raw audit records (audex-log) and CLI output

pub mod row;
pub mod session;
pub mod transform;

pub use row::{OUTPUT_HEADER, OutputRow};
pub use session::{build_session_table, scan_connection_markers, widen_from_queries};
pub use transform::query_rows;
