pub mod app;
pub mod domain;
pub mod infra;
pub mod rendering;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::data_source::{DataSource, RowSource};
pub use domain::record::{Record, Snapshot};
pub use domain::resolve::{resolve, Verdict};
pub use infra::sheets::SheetsClient;
