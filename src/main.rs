// Cova API Probe - Main Entry Point
// Sequentially probes the Cova retail API and dumps what it finds

use clap::Parser;
use cova_probe::verbosity::set_verbosity_level;
use cova_probe::{request_token, CovaClient, CovaConfig, Explorer, ExplorerOptions};

#[derive(Parser, Debug)]
#[command(name = "cova_probe", version, about = "Exploratory diagnostic client for the Cova retail/inventory API")]
struct ProbeArgs {
    /// Path to the TOML configuration file
    #[arg(long, default_value = cova_probe::CONFIG_FILE)]
    config: String,

    /// Increase output detail (-v request payloads, -vv raw bodies)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append every API call to the configured log file
    #[arg(long)]
    api_log: bool,

    /// Write response dumps here instead of the configured directory
    #[arg(long)]
    output_dir: Option<String>,

    /// Skip the catalog-item endpoint probing step
    #[arg(long)]
    skip_catalog: bool,

    /// Skip the generic inventory endpoint probing step
    #[arg(long)]
    skip_inventory_probe: bool,

    /// Skip the pricing and tax step
    #[arg(long)]
    skip_pricing: bool,

    /// Skip the recently-updated products step
    #[arg(long)]
    skip_updated_since: bool,

    /// Skip the rooms and room-inventory step
    #[arg(long)]
    skip_rooms: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ProbeArgs::parse();
    set_verbosity_level(args.verbose);

    println!("🛰️  Cova API Probe starting...");

    let mut config = CovaConfig::load_or_create(&args.config)?;
    if let Some(output_dir) = args.output_dir {
        config.probe.output_dir = output_dir;
    }
    config.validate().map_err(|e| format!("Invalid configuration: {}", e))?;
    config.print_summary();

    println!("\n🔑 Getting authentication token...");
    let token = match request_token(&config).await {
        Ok(token) => {
            println!("✅ Successfully got token: {}...", &token[..token.len().min(10)]);
            token
        }
        Err(e) => {
            eprintln!("❌ Failed to get token: {}", e);
            eprintln!("Exiting.");
            return Err(e);
        }
    };

    let mut client = CovaClient::new(token, &config)?;
    client.set_api_logging(args.api_log);

    let options = ExplorerOptions {
        skip_catalog: args.skip_catalog,
        skip_inventory_probe: args.skip_inventory_probe,
        skip_pricing: args.skip_pricing,
        skip_updated_since: args.skip_updated_since,
        skip_rooms: args.skip_rooms,
    };

    let mut explorer = Explorer::new(client, &config, options);
    explorer.run().await?;

    println!("\n🏁 Exploration complete");
    Ok(())
}
