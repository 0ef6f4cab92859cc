//! Build JSON values from shell arguments.
//!
//! Every argument is one token, so nothing needs JSON quoting:
//!
//! ```
//! use argjson::{parse_program, Grammar};
//!
//! let args = ["foo:", "45", "bar:", "[", "x:", "657", "]", "y:", ".[", "3", "5", "6", "]"];
//! let document = parse_program(&args, Grammar::Sequence).unwrap();
//! let json = serde_json::to_string(&document.values()[0]).unwrap();
//! assert_eq!(json, r#"{"foo":45,"bar":{"x":657},"y":[3,5,6]}"#);
//! ```

mod coerce;
mod cursor;
mod error;
mod output;
mod parser;
mod value;

pub use error::{ErrorKind, SyntaxError};
pub use output::{write_document, write_value, Layout};
pub use parser::{parse_program, Document, Grammar, UnknownGrammar};
pub use value::{Number, Value};
