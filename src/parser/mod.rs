pub mod extract;
pub mod ident;
pub mod markers;
pub mod tokens;

pub use ident::{extract_id, identify, IdKind};
pub use tokens::{Document, Tag, Token};
