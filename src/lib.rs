// Library root: re-exports the modules so integration tests, benches, and the
// bins all share one crate surface.

pub mod csv_ingest;
pub mod http_client;
pub mod report_export;
pub mod schedule;
pub mod source_fetch;
pub mod standings;
pub mod state;
