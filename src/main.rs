use std::sync::Arc;

use clap::Parser;
use log::{debug, info};
use tokio::runtime::Handle;

use github_search::{
    GITHUB_API_URL, GITHUB_LANGUAGE_COLORS_URL, HttpLanguageColorClient, HttpRepoSearchClient,
    ParallelRepoItemRepository, RepoItemRepository, StdResult,
};

/// Command line arguments for the GitHub repository search
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Search term forwarded verbatim to the search API
    #[arg(short, long)]
    term: String,

    /// Page of results to fetch
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    /// Root URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    api_url: String,

    /// URL of the JSON document mapping languages to colors
    #[arg(long, env = "GITHUB_LANGUAGE_COLORS_URL", default_value = GITHUB_LANGUAGE_COLORS_URL)]
    colors_url: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let repository = build_repository(&args)?;
    info!("Searching term={}, page={}", args.term, args.page);
    let result = repository.search(&args.term, args.page).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for repo_item in result.iter() {
            println!("{repo_item}");
        }
        println!("({} repositories)", result.len());
    }

    Ok(())
}

fn build_repository(args: &Args) -> StdResult<Arc<dyn RepoItemRepository>> {
    let github_api_token = std::env::var("GITHUB_API_TOKEN").ok();
    let color_client = Arc::new(HttpLanguageColorClient::try_new(&args.colors_url)?);
    let search_client = Arc::new(HttpRepoSearchClient::try_new(
        &args.api_url,
        github_api_token,
    )?);

    Ok(Arc::new(ParallelRepoItemRepository::new(
        color_client,
        search_client,
        Handle::current(),
    )))
}
