//! End-to-end checks over already-fetched data: month-keyed grouping, tree
//! building, flattening, and file output. No network.

use std::fs;

use chrono::NaiveDate;
use sankey_config::Config;
use sankey_core::{FlowTree, SankeyGraph};
use sankey_domain::{BudgetCategory, BudgetCategoryGroup, BudgetMonth, FlatNode, Link, ROOT_ID};
use sankey_storage_json::write_node_and_link_files;
use sankey_ynab::categories_by_group;
use tempfile::tempdir;
use uuid::Uuid;

fn group(name: &str, hidden: bool) -> BudgetCategoryGroup {
    BudgetCategoryGroup {
        id: Uuid::new_v4(),
        name: name.into(),
        hidden,
        deleted: false,
        categories: None,
    }
}

fn category(group_id: Uuid, name: &str, budgeted: i64) -> BudgetCategory {
    BudgetCategory {
        id: Uuid::new_v4(),
        name: name.into(),
        group_id,
        budgeted,
        hidden: false,
        deleted: false,
    }
}

fn month(budgeted: i64, categories: Vec<BudgetCategory>) -> BudgetMonth {
    BudgetMonth {
        month: NaiveDate::from_ymd_opt(2024, 5, 1).expect("date"),
        budgeted,
        categories,
    }
}

#[test]
fn month_snapshot_flows_through_to_files() {
    let rent = group("Rent", false);
    let snapshot = month(1000, vec![category(rent.id, "Apt", 500)]);

    let by_group = categories_by_group(&snapshot);
    let tree = FlowTree::build(snapshot.budgeted, &[rent], &by_group);
    let graph = SankeyGraph::from_tree(&tree).expect("flatten");

    let dir = tempdir().expect("tempdir");
    let paths = write_node_and_link_files(&graph, dir.path()).expect("write");

    let nodes: Vec<FlatNode> =
        serde_json::from_str(&fs::read_to_string(&paths.nodes).expect("read nodes"))
            .expect("decode nodes");
    let links: Vec<Link> =
        serde_json::from_str(&fs::read_to_string(&paths.links).expect("read links"))
            .expect("decode links");

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0].id, ROOT_ID);
    assert_eq!(nodes[0].value, 1000);
    assert_eq!(nodes[1].name, "Rent");
    assert_eq!(nodes[2].name, "Apt");
    // Subtree-first ordering: the Rent->Apt edge precedes root->Rent.
    assert_eq!(
        links,
        vec![
            Link {
                source: 1,
                target: 2,
                value: 500
            },
            Link {
                source: 0,
                target: 1,
                value: 500
            },
        ]
    );
}

#[test]
fn zero_budget_only_group_leaves_root_alone() {
    let misc = group("Misc", false);
    let snapshot = month(1000, vec![category(misc.id, "Nothing", 0)]);

    let by_group = categories_by_group(&snapshot);
    let tree = FlowTree::build(snapshot.budgeted, &[misc], &by_group);
    let graph = SankeyGraph::from_tree(&tree).expect("flatten");

    assert_eq!(graph.nodes().len(), 1);
    assert_eq!(graph.nodes()[0].id, ROOT_ID);
    assert!(graph.links().is_empty());
}

#[test]
fn hidden_group_never_reaches_the_graph() {
    let secret = group("Secret", true);
    let visible = group("Visible", false);
    let snapshot = month(
        1000,
        vec![
            category(secret.id, "Valid", 400),
            category(visible.id, "Kept", 100),
        ],
    );

    let by_group = categories_by_group(&snapshot);
    let tree = FlowTree::build(snapshot.budgeted, &[secret, visible], &by_group);
    let graph = SankeyGraph::from_tree(&tree).expect("flatten");

    let names: Vec<&str> = graph.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Budgeted Income", "Visible", "Kept"]);
}

#[test]
fn render_month_rejects_unconfigured_runs() {
    let config = Config::default();
    let err = budget_sankey::render_month(&config).expect_err("missing token must fail");
    assert!(err.to_string().contains("token"));
}

#[test]
fn filtered_values_never_reach_group_totals() {
    let g = group("Mixed", false);
    let mut hidden = category(g.id, "Hidden", 999);
    hidden.hidden = true;
    let snapshot = month(
        500,
        vec![hidden, category(g.id, "A", 200), category(g.id, "B", 300)],
    );

    let by_group = categories_by_group(&snapshot);
    let tree = FlowTree::build(snapshot.budgeted, &[g], &by_group);
    let graph = SankeyGraph::from_tree(&tree).expect("flatten");

    assert_eq!(graph.nodes()[1].value, 500);
    assert!(graph.nodes().iter().all(|node| node.value > 0));
    assert!(graph.nodes().iter().all(|node| node.name != "Hidden"));
}
