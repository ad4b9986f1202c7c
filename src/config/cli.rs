use crate::core::convert::evaluate;
use crate::core::parse::{parse_input_text, parse_input_text_strict};
use crate::core::screen::{Screen, ScreenView};
use crate::domain::model::{Conversion, Direction};
use crate::domain::ports::StringResources;
use crate::utils::error::{ConvError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "tempconv")]
#[command(about = "Convert temperatures between Celsius and Fahrenheit")]
pub struct CliConfig {
    /// Temperatures to convert; read one per line from stdin when omitted.
    /// Options must come before the first value, which may start with '-'
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Convert Fahrenheit to Celsius instead of Celsius to Fahrenheit
    #[arg(short = 'f', long = "f-to-c")]
    pub fahrenheit_to_celsius: bool,

    /// Convert Celsius to Fahrenheit even when the config file says otherwise
    #[arg(long = "c-to-f", conflicts_with = "fahrenheit_to_celsius")]
    pub celsius_to_fahrenheit: bool,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print header, field label and switch caption with each result
    #[arg(long)]
    pub screen: bool,

    /// Emit one JSON object per conversion
    #[arg(long)]
    pub json: bool,

    /// Fail on input that is not a number instead of reading it as 0
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log in JSON format
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// `--f-to-c` or `--c-to-f` wins; otherwise the config file decides.
    pub fn direction(&self, fallback: Direction) -> Direction {
        if self.fahrenheit_to_celsius {
            Direction::FahrenheitToCelsius
        } else if self.celsius_to_fahrenheit {
            Direction::CelsiusToFahrenheit
        } else {
            fallback
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    conversion: Conversion,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<&'a ScreenView>,
}

/// Feeds each input through the converter screen and writes the results.
///
/// Inputs come from `config.values`, or line by line from `input` when no
/// values were given. Returns the number of conversions written.
pub fn run<R, W, S>(
    config: &CliConfig,
    resources: &S,
    fallback: Direction,
    input: R,
    out: &mut W,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    S: StringResources,
{
    let mut screen = Screen::new(config.direction(fallback));
    tracing::debug!("Converting with direction {:?}", screen.direction());

    let texts: Box<dyn Iterator<Item = io::Result<String>> + '_> = if config.values.is_empty() {
        tracing::debug!("No values given, reading from stdin");
        Box::new(input.lines())
    } else {
        Box::new(config.values.iter().cloned().map(Ok))
    };

    let mut count = 0;
    for text in texts {
        let text = text?;
        if config.strict && parse_input_text_strict(&text).is_none() {
            tracing::warn!("Rejecting non-numeric input {:?}", text);
            return Err(ConvError::InputError { input: text });
        }

        screen.set_input(text);
        let view = screen.view(resources);
        let conversion = evaluate(parse_input_text(screen.input()), screen.direction());

        if config.json {
            let record = JsonRecord {
                conversion,
                text: &view.output,
                view: config.screen.then_some(&view),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else if config.screen {
            if count > 0 {
                writeln!(out)?;
            }
            let switch = if screen.direction().is_fahrenheit_to_celsius() { "on" } else { "off" };
            writeln!(out, "{}", view.header)?;
            writeln!(out, "{}: {}", view.label, screen.input())?;
            writeln!(out, "{} {}", view.switch_caption, switch)?;
            writeln!(out, "{}", view.output)?;
        } else {
            writeln!(out, "{}", view.output)?;
        }
        count += 1;
    }

    tracing::debug!("Wrote {} conversions", count);
    Ok(count)
}
