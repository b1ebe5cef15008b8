use clap::{Parser, Subcommand};
use eyre::Result;

use sokha_client::config;
use sokha_client::{DeviceConfig, HttpBackend};
use sokha_core::{Locale, QuestionnaireKind};

mod runner;

#[derive(Parser, Debug)]
#[command(
    name = "sokha",
    about = "Terminal runner for the Sokha questionnaire flow",
    version,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configure this device (backend address, default locale)
    Configure {
        /// Base URL of the questionnaire backend
        #[arg(long)]
        base_url: String,
        /// Locale the device boots into (en or kh)
        #[arg(long, default_value = "en")]
        locale: String,
    },
    /// Show the stored device configuration
    Info,
    /// Walk a questionnaire against the configured backend
    Run {
        /// Questionnaire flow: client or provider
        #[arg(long, default_value = "client")]
        kind: String,
        /// Site token, as printed on the device's registration sheet
        #[arg(long)]
        token: String,
        /// Override the device's default locale for this session
        #[arg(long)]
        locale: Option<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Configure { base_url, locale } => {
            let locale = Locale::parse(&locale).map_err(|e| eyre::eyre!("{e}"))?;
            let device = DeviceConfig::new(base_url, locale);
            config::save_config(&device)?;
            println!("configured device {}", device.device_label);
            Ok(())
        }
        Commands::Info => {
            let device = config::load_config()?;
            println!("device:         {}", device.device_label);
            println!("backend:        {}", device.base_url);
            println!("default locale: {}", device.default_locale);
            println!("configured at:  {}", device.created_at);
            Ok(())
        }
        Commands::Run {
            kind,
            token,
            locale,
        } => {
            let device = config::load_config()?;
            let kind = QuestionnaireKind::parse(&kind).map_err(|e| eyre::eyre!("{e}"))?;
            let locale = match locale {
                Some(value) => Locale::parse(&value).map_err(|e| eyre::eyre!("{e}"))?,
                None => device.default_locale,
            };
            let backend = HttpBackend::new(&device.base_url);
            runner::run(&backend, kind, &token, locale)
        }
    }
}
