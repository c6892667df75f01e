use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use num_bigint::BigUint;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use opensea_assets::{
    Address, ApiKey, AssetsQuery, MarketClient, Network, config::AppConfig,
    constants::API_KEY_ENV,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query the OpenSea assets API from the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Network to query (mainnet or testnet); defaults to the config file
    #[arg(short, long, global = true)]
    network: Option<Network>,

    /// API key sent as X-API-KEY
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List assets matching the given filters
    List(ListArgs),
    /// Fetch a single asset
    Asset {
        /// Contract address
        contract: Address,
        /// Token id in decimal
        token_id: BigUint,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Only assets held by this address
    #[arg(long)]
    owner: Option<Address>,
    /// Token id filter, repeatable
    #[arg(long = "token-id")]
    token_ids: Vec<BigUint>,
    #[arg(long)]
    collection: Option<String>,
    /// Contract address filter, repeatable
    #[arg(long = "contract")]
    contracts: Vec<Address>,
    #[arg(long)]
    order_by: Option<String>,
    /// asc or desc
    #[arg(long)]
    order_direction: Option<String>,
    #[arg(long)]
    limit: Option<u64>,
    #[arg(long)]
    offset: Option<u64>,
    #[arg(long)]
    cursor: Option<u64>,
    /// Embed open orders in each asset
    #[arg(long)]
    include_orders: bool,
}

impl ListArgs {
    fn into_query(self) -> AssetsQuery {
        let mut query = AssetsQuery {
            owner: self.owner,
            token_ids: self.token_ids,
            collection: self.collection.unwrap_or_default(),
            order_by: self.order_by.unwrap_or_default(),
            order_direction: self.order_direction.unwrap_or_default(),
            asset_contract_addresses: self.contracts,
            limit: self.limit,
            offset: self.offset,
            cursor: self.cursor,
            ..AssetsQuery::default()
        };
        if self.include_orders {
            query.include_orders = Some(true);
        }
        query
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = AppConfig::load();
    if let Some(network) = cli.network {
        settings.network = network;
    }
    let config = settings.client_config(cli.api_key.map(ApiKey::from))?;
    let client = MarketClient::from_config(config).map_err(|e| e.into_report())?;

    match cli.command {
        Commands::List(args) => {
            let page = client
                .list_assets(&args.into_query())
                .await
                .wrap_err("Failed to list assets")?;
            print_json(&page)
        }
        Commands::Asset { contract, token_id } => {
            let asset = client
                .get_asset(&contract, &token_id)
                .await
                .wrap_err_with(|| format!("Failed to fetch asset {contract}/{token_id}"))?;
            print_json(&asset)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_args_into_query() {
        let cli = Cli::try_parse_from([
            "opensea-assets",
            "--network",
            "testnet",
            "--api-key",
            "k",
            "list",
            "--owner",
            "0x8ba1f109551bd432803012645ac136ddd64dba72",
            "--token-id",
            "1",
            "--token-id",
            "2",
            "--limit",
            "0",
            "--include-orders",
        ])
        .unwrap();

        assert_eq!(cli.network, Some(Network::TestNet));
        let Commands::List(args) = cli.command else {
            panic!("Expected list command");
        };
        assert_eq!(
            args.into_query().encode(),
            "include_orders=true&limit=0&owner=0x8ba1f109551bd432803012645ac136ddd64dba72&token_ids=1&token_ids=2"
        );
    }

    #[test]
    fn test_asset_command_parses_big_token_id() {
        let cli = Cli::try_parse_from([
            "opensea-assets",
            "asset",
            "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d",
            "123456789012345678901234567890",
        ])
        .unwrap();

        let Commands::Asset { token_id, .. } = cli.command else {
            panic!("Expected asset command");
        };
        assert_eq!(token_id.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn test_rejects_bad_address() {
        assert!(
            Cli::try_parse_from(["opensea-assets", "list", "--owner", "0x1234"]).is_err()
        );
    }
}
