use katapultpro::{ClientConfig, KatapultClient, ListJobsOptions, DEFAULT_RATE_LIMIT_INTERVAL};
use tracing_subscriber::EnvFilter;

/// Lists jobs and the node count of the first few.
///
/// Reads `KATAPULT_API_KEY` (and optionally `KATAPULT_BASE_URL`,
/// `KATAPULT_RATE_LIMIT_MS`) from the environment or a `.env` file.
/// Set `RUST_LOG=katapultpro=debug` to see pacing decisions.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = ClientConfig::from_env_file("KATAPULT")?;
    if config.rate_limit.is_none() {
        config = config.rate_limit(DEFAULT_RATE_LIMIT_INTERVAL);
    }
    let client = KatapultClient::from_config(config)?;

    let jobs = client
        .jobs()
        .list(Some(&ListJobsOptions {
            include_archived: false,
            metadata_filter: None,
        }))
        .await?;
    println!("Found {} jobs", jobs.len());

    for job in jobs.iter().take(5) {
        let Some(job_id) = job.id.as_deref() else {
            continue;
        };
        match client.job(job_id).nodes().list().await {
            Ok(nodes) => println!(
                "{} ({}): {} nodes",
                job.name.as_deref().unwrap_or("unnamed"),
                job_id,
                nodes.len()
            ),
            Err(e) => println!("{}: failed to list nodes: {}", job_id, e),
        }
    }

    if let Some(meta) = client.last_meta() {
        println!("Tokens remaining: {}", meta.token_count);
    }

    Ok(())
}
