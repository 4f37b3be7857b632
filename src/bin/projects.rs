//! Prints the project listing a page-load would render.
//!
//! Loads the configuration from the environment, lists projects (falling
//! back to the local mock when no API base is set), flattens each record
//! and prints one line per item. Errors degrade to an empty listing, the
//! same policy the listing page applies at its boundary.

use project_client::{Config, ProjectClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let client = ProjectClient::new(config)?;

    let projects = match client.list_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!("Failed to load projects: {}", e);
            Vec::new()
        }
    };

    println!("{} project(s)", projects.len());
    for project in &projects {
        let item = project.to_list_item();
        println!(
            "[{:>5.1}] {} - {} ({})",
            item.temperature,
            item.name,
            item.company.as_deref().unwrap_or("unknown company"),
            if item.tags.is_empty() {
                "no tags".to_string()
            } else {
                item.tags.join(", ")
            }
        );
    }

    Ok(())
}
