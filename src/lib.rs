pub mod error;
pub mod parser;
pub mod value;
pub mod writer;

pub use error::JsonError;
pub use parser::{parse, parse_file, parse_value};
pub use value::Value;
pub use writer::to_json;
