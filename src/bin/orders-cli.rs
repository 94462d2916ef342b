use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "orders-cli")]
#[command(about = "Command-line client for the restaurant ordering API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// List all restaurants
    Restaurants,
    /// Show one restaurant
    Restaurant {
        id: String,
    },
    /// Place an order
    Order {
        #[arg(short, long)]
        customer: String,

        /// Item to order; repeat for several
        #[arg(short, long = "item", required = true)]
        items: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", base))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Restaurants => {
            let res = client.get(format!("{}/api/restaurants", base))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Restaurant { id } => {
            let res = client.get(format!("{}/api/restaurants/{}", base, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Order { customer, items } => {
            let res = client.post(format!("{}/api/orders", base))
                .json(&json!({ "customer": customer, "items": items }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
