use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vkit::cli::SubmitInput;
use vkit_contact::FieldRole;

/// vkit - contact form for the VK IT Solutions website
#[derive(Parser)]
#[command(name = "vkit")]
#[command(about = "Validate and submit the website contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the contact form and submit it
    Submit {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        /// Optional 10-digit mobile number
        #[arg(long, default_value = "")]
        phone: String,

        /// Selected service
        #[arg(long, default_value = "")]
        service: String,

        #[arg(long, default_value = "")]
        message: String,
    },
    /// Check a single field the way the form does when it loses focus
    Validate {
        /// name, email, phone or message
        #[arg(long)]
        field: FieldRole,

        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = vkit::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    vkit::observability::init_observability(
        "vkit",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Submit {
            name,
            email,
            phone,
            service,
            message,
        } => {
            let report = vkit::cli::submit(
                &config,
                SubmitInput {
                    name,
                    email,
                    phone,
                    service,
                    message,
                },
            )
            .await?;

            print!("{report}");

            Ok(if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Validate { field, value } => {
            match vkit::cli::check_field(&config.form.binding(), field, &value) {
                Some(message) => {
                    println!("{field}: {message}");
                    Ok(ExitCode::FAILURE)
                }
                None => {
                    println!("{field}: ok");
                    Ok(ExitCode::SUCCESS)
                }
            }
        }
    }
}
