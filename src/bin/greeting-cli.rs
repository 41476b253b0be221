use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "greeting-cli")]
#[command(about = "Command line client for the secure greeting service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Print response headers as well as the body.
    #[arg(long)]
    headers: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a greeting
    Greeting {
        /// Name to greet; the service defaults to "World"
        name: Option<String>,
    },
    /// Look up an element of the fixed table
    Number {
        #[arg(allow_hyphen_values = true)]
        index: String,
    },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match &cli.command {
        Commands::Greeting { name } => {
            let mut req = client.get(format!("{}/greeting", base));
            if let Some(name) = name {
                req = req.query(&[("name", name)]);
            }
            req.send().await?
        }
        Commands::Number { index } => client.get(format!("{}/number/{}", base, index)).send().await?,
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
    };

    print_response(res, cli.headers).await
}

async fn print_response(
    res: reqwest::Response,
    show_headers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("HTTP {}", status);
    if show_headers {
        for (name, value) in res.headers() {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
        println!();
    }

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }

    if !status.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
