mod db_mock;
mod expectation;
mod result;
mod single_record_reader;

pub use db_mock::*;
pub use expectation::*;
pub use result::*;
pub use single_record_reader::*;
