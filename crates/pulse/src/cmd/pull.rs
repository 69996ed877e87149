//! Pull command - fetch the endpoint once and print the payload

use anyhow::{Context, Result, anyhow};
use clap::Args;
use tracing::info;

use pulse_config::{HttpMethod, HttpSourceConfig};
use pulse_connectors::{HttpApiClient, RequestBuilder};

/// Pull command arguments
#[derive(Args, Debug)]
pub struct PullArgs {
    /// URL to fetch
    #[arg(value_name = "URL")]
    url: String,

    /// HTTP method
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// Bearer token for the Authorization header
    #[arg(short, long)]
    token: Option<String>,

    /// Raw query string appended to the URL
    #[arg(short, long)]
    query: Option<String>,
}

/// Run the pull command
pub async fn run(args: PullArgs) -> Result<()> {
    let method: HttpMethod = args.method.parse().map_err(|e: String| anyhow!(e))?;

    let config = HttpSourceConfig {
        url: args.url,
        method,
        auth_bearer: args.token.unwrap_or_default(),
        query_params: args.query.unwrap_or_default(),
        topic: "stdout".into(),
        ..Default::default()
    };

    info!(url = %config.url, method = %config.method, "fetching endpoint");

    let builder = RequestBuilder::from_config(&config);
    let client = HttpApiClient::new(&config).context("failed to create HTTP client")?;
    let request = builder.build(&config.url, config.method)?;

    let payload = client.execute(request).await.context("request failed")?;
    println!("{}", payload);

    Ok(())
}
