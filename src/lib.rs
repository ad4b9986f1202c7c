pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::toml_config::{Strings, TomlConfig};
pub use crate::core::convert::{convert, evaluate};
pub use crate::core::format::{format_fixed, format_result};
pub use crate::core::parse::{parse_input_text, parse_input_text_strict};
pub use crate::core::render;
pub use crate::core::screen::{Screen, ScreenView};
pub use crate::domain::model::{Conversion, Direction, Scale};
pub use crate::domain::ports::StringResources;
pub use crate::utils::error::{ConvError, Result};
