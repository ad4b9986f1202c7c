use clap::Parser;
use tempconv::config::cli;
use tempconv::utils::error::ConvError;
use tempconv::utils::{logger, validation::Validate};
use tempconv::{CliConfig, TomlConfig};

fn fail(e: &ConvError) -> ! {
    tracing::error!(
        "❌ tempconv failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let settings = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
                Ok(settings) => settings,
                Err(e) => fail(&e),
            }
        }
        None => TomlConfig::default(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli::run(&config, &settings.strings, settings.direction(), stdin.lock(), &mut out) {
        Ok(count) => tracing::debug!("✅ Converted {} values", count),
        Err(e) => fail(&e),
    }
}
