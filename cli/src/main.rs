mod formatter;
mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use decicalc::CalculationRequest;
use formatter::Formatter;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "decicalc")]
#[command(about = "A decimal calculator behind an HTTP gateway.")]
#[command(
    long_about = "decicalc adds, subtracts, multiplies and divides decimal numbers without binary floating point error.\nThe CLI runs the calculator behind a local HTTP gateway, invokes it with a recorded gateway event, or evaluates a single calculation."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a local HTTP gateway (default: localhost:3000)
    ///
    /// Every request is converted into a gateway event and answered by the calculator.
    /// API: GET /?num1=2&num2=3&operation=add or POST / with {num1, num2, operation}
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Run the handler once on a gateway event
    ///
    /// Reads the event as JSON from a file (or stdin) and prints the
    /// {statusCode, headers, body} response as JSON.
    Invoke {
        /// Path to the event JSON file. Reads stdin when omitted.
        #[arg(short, long)]
        event: Option<PathBuf>,
    },
    /// Evaluate a single calculation
    ///
    /// Examples:
    ///   decicalc eval 0.1 add 0.2
    ///   decicalc eval 10 divide 4 --raw
    Eval {
        /// First operand
        #[arg(allow_hyphen_values = true)]
        num1: String,
        /// Operation: add, subtract, multiply or divide
        operation: String,
        /// Second operand
        #[arg(allow_hyphen_values = true)]
        num2: String,
        /// Output the raw result only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match &cli.command {
        Commands::Serve { host, port } => serve_command(host, *port),
        Commands::Invoke { event } => invoke_command(event.as_deref()),
        Commands::Eval {
            num1,
            operation,
            num2,
            raw,
        } => eval_command(num1, operation, num2, *raw),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `invoke` and `eval` output can be piped
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decicalc=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn serve_command(host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(server::http::start_server(host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

fn invoke_command(event_path: Option<&Path>) -> Result<()> {
    let raw = match event_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read event from stdin")?;
            input
        }
    };

    let event: Value = serde_json::from_str(&raw).context("Event is not valid JSON")?;
    let response = decicalc::handle_value(event);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn eval_command(num1: &str, operation: &str, num2: &str, raw: bool) -> Result<()> {
    let request = CalculationRequest::new(num1, num2, operation);
    request.validate()?;

    let operation = request.operation_name()?;
    let (result, errors) = decicalc::calculate(&request.num1, &request.num2, &operation)?;

    match result {
        Some(value) => {
            let formatter = Formatter::default();
            print!("{}", formatter.format_calculation(&request, &operation, &value, raw));
            Ok(())
        }
        None => anyhow::bail!("{}", errors.join("; ")),
    }
}
