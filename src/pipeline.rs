//! Fetch, build, and flatten orchestration over a validated config.

use sankey_config::Config;
use sankey_core::{FlowTree, SankeyGraph};
use sankey_ynab::{categories_by_group, MonthSelector, YnabClient};

use crate::SankeyError;

/// Fetches one budget month and produces its flow graph.
///
/// Each call constructs a fresh client, tree, and graph; nothing is shared
/// or cached between invocations, so a new upstream snapshot always yields
/// a new instance.
pub fn render_month(config: &Config) -> Result<SankeyGraph, SankeyError> {
    config.validate()?;
    let month_selector: MonthSelector = config.month.parse()?;

    let client = YnabClient::new(config.token.clone())?;
    let groups = client.categories(&config.budget_id)?;
    let month = client.budget_month(&config.budget_id, month_selector)?;
    tracing::debug!(
        groups = groups.len(),
        month_categories = month.categories.len(),
        "fetched budget snapshot"
    );

    let by_group = categories_by_group(&month);
    let tree = FlowTree::build(month.budgeted, &groups, &by_group);
    let graph = SankeyGraph::from_tree(&tree)?;
    tracing::info!(
        nodes = graph.nodes().len(),
        links = graph.links().len(),
        "flattened budget month"
    );
    Ok(graph)
}
