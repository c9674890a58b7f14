//! Per-request caller context.

mod extractor;

pub use extractor::{UserId, USER_ID_HEADER};
