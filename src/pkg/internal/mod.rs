pub mod adaptors;
pub mod search;
pub mod storage;
