//! Spool Adapters

mod temp_file_spool;

pub use temp_file_spool::{TempFileSpool, TempFileSpooler, SPOOL_PREFIX};
