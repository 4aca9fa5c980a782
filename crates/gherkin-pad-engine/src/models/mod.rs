pub mod test_case;

pub use test_case::{RecordId, TestCaseRecord, steps_of};
