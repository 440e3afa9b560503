//! Command-line entry point: load config, render the month, write the JSON
//! artifacts.

use sankey_config::ConfigManager;
use sankey_storage_json::write_node_and_link_files;

use crate::{render_month, SankeyError};

pub fn run_cli() -> Result<(), SankeyError> {
    let manager = ConfigManager::from_default_location()?;
    let mut config = manager.load()?;
    config.apply_env_overrides();

    let graph = render_month(&config)?;

    let output_dir = config.resolve_output_dir();
    let paths = write_node_and_link_files(&graph, &output_dir)?;
    tracing::info!(
        nodes = %paths.nodes.display(),
        links = %paths.links.display(),
        "wrote sankey artifacts"
    );
    println!(
        "Wrote {} nodes -> {}",
        graph.nodes().len(),
        paths.nodes.display()
    );
    println!(
        "Wrote {} links -> {}",
        graph.links().len(),
        paths.links.display()
    );
    Ok(())
}
