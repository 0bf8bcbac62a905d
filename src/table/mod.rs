pub mod reader;
pub mod writer;

pub use reader::{read_keys, KeyColumn};
pub use writer::{verify_header, RowWriter};
