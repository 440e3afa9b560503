//! sankey-storage-json
//!
//! Filesystem output for flattened Sankey graphs: plain UTF-8 JSON with
//! stable field names, written atomically (temp file then rename).

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use thiserror::Error;

use sankey_core::SankeyGraph;
use sankey_domain::{FlatNode, Link};

pub const NODES_FILE: &str = "nodes.json";
pub const LINKS_FILE: &str = "links.json";
pub const GRAPH_FILE: &str = "sankey.json";

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Paths of the two files produced by [`write_node_and_link_files`].
#[derive(Debug, Clone)]
pub struct GraphPaths {
    pub nodes: PathBuf,
    pub links: PathBuf,
}

#[derive(Serialize)]
struct GraphDocument<'a> {
    nodes: &'a [FlatNode],
    links: &'a [Link],
}

/// Writes `nodes.json` and `links.json` into `dir`, creating it as needed.
pub fn write_node_and_link_files(
    graph: &SankeyGraph,
    dir: &Path,
) -> Result<GraphPaths, StorageError> {
    fs::create_dir_all(dir)?;
    let nodes = dir.join(NODES_FILE);
    write_pretty(&nodes, graph.nodes())?;
    let links = dir.join(LINKS_FILE);
    write_pretty(&links, graph.links())?;
    Ok(GraphPaths { nodes, links })
}

/// Writes a single `sankey.json` combining both arrays.
pub fn write_graph(graph: &SankeyGraph, dir: &Path) -> Result<PathBuf, StorageError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(GRAPH_FILE);
    write_pretty(
        &path,
        &GraphDocument {
            nodes: graph.nodes(),
            links: graph.links(),
        },
    )?;
    Ok(path)
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|err| StorageError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
