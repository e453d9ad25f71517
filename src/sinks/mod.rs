//! Ready-made output sinks
//!
//! A logger accepts any `std::io::Write + Send`; these cover the common
//! cases of capturing output in memory and appending to a file.

#[cfg(feature = "file")]
pub mod file;
pub mod memory;

#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::MemorySink;
