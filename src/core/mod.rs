pub mod convert;
pub mod format;
pub mod parse;
pub mod screen;

pub use crate::domain::model::{Conversion, Direction, Scale};
pub use crate::domain::ports::StringResources;
pub use crate::utils::error::Result;

/// Host boundary: raw field text plus switch state in, display line out.
pub fn render(text: &str, direction: impl Into<Direction>) -> String {
    let direction = direction.into();
    let input = parse::parse_input_text(text);
    format::format_result(input, convert::convert(input, direction), direction)
}
