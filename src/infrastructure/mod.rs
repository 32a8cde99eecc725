pub mod audio;
pub mod connection_string;
pub mod observability;
pub mod persistence;
pub mod storage;
