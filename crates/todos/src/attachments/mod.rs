//! Attachment URL signers.

mod bucket;

pub use bucket::BucketUrlSigner;
