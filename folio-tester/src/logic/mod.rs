pub mod harness;
pub mod reports;
pub mod tester;

pub use harness::{CheckError, HarnessPage, PageHarness, PageKind, expect_eq, random_settings};
pub use tester::*;
