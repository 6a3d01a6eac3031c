pub mod base;
pub mod card;
pub mod parse_result;
pub mod validation_result;

pub use base::JsonObject;
pub use card::{CardType, ParsedCard};
pub use parse_result::ParseResult;
pub use validation_result::ValidationResult;
