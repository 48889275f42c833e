//! Graph description files
//!
//! ```toml
//! undirected = false
//! nodes = ["A", "B"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! label = "comic-1"     # labeled graphs
//! # cost = 1.5          # weighted graphs, nodes written as "x,y"
//!
//! [[books]]             # labeled graphs only
//! title = "Avengers 1"
//! characters = ["Thor", "Hulk", "Iron Man"]
//!
//! [[buildings]]         # weighted graphs only
//! short = "CSE"
//! long = "Paul G. Allen Center"
//! at = "2259.7,1715.5"
//! ```
//!
//! Endpoints named by an edge are added to the graph the first time they are
//! seen. A book connects every earlier character to every later one with an
//! edge labeled by its title. With `undirected = true` every edge also gets
//! its opposing edge.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use pathgraph_core::bail_invalid;
use pathgraph_core::config::SearchConfig;
use pathgraph_core::error::{GraphError, Result};
use pathgraph_core::graph::{Edge, Label, NodeId};
use pathgraph_core::{Building, CampusMap, Cost, Graph, Point};

/// Raw contents of a graph file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    #[serde(default)]
    pub undirected: bool,

    #[serde(default)]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeEntry>,

    #[serde(default)]
    pub books: Vec<BookEntry>,

    #[serde(default)]
    pub buildings: Vec<BuildingEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeEntry {
    pub from: Option<String>,
    pub to: Option<String>,
    pub label: Option<String>,
    pub cost: Option<f64>,
}

/// Characters appearing together in one book
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookEntry {
    pub title: Option<String>,
    #[serde(default)]
    pub characters: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildingEntry {
    pub short: Option<String>,
    pub long: Option<String>,
    pub at: Option<String>,
}

impl GraphFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build a graph whose labels are strings
    pub fn into_labeled(self, search: &SearchConfig) -> Result<Graph<String, String>> {
        if !self.buildings.is_empty() {
            bail_invalid!("table (labeled graphs have no `buildings`)", "buildings");
        }
        let mut graph = new_graph(search);
        for name in &self.nodes {
            ensure_node(&mut graph, required(Some(name), "node name")?.to_string())?;
        }
        for entry in &self.edges {
            if entry.cost.is_some() {
                bail_invalid!(
                    "edge field (labeled graphs use `label`, not `cost`)",
                    "cost"
                );
            }
            let from = required(entry.from.as_deref(), "edge `from`")?.to_string();
            let to = required(entry.to.as_deref(), "edge `to`")?.to_string();
            let label = required(entry.label.as_deref(), "edge `label`")?.to_string();
            insert(&mut graph, Edge::new(from, to, label), self.undirected)?;
        }
        for book in &self.books {
            let title = required(book.title.as_deref(), "book `title`")?;
            let mut characters: Vec<String> = Vec::with_capacity(book.characters.len());
            for name in &book.characters {
                let name = required(Some(name), "character name")?.to_string();
                if !characters.contains(&name) {
                    characters.push(name);
                }
            }
            for name in &characters {
                ensure_node(&mut graph, name.clone())?;
            }
            for (i, first) in characters.iter().enumerate() {
                for second in &characters[i + 1..] {
                    let edge = Edge::new(first.clone(), second.clone(), title.to_string());
                    insert(&mut graph, edge, self.undirected)?;
                }
            }
        }
        debug!(
            nodes = graph.total_nodes(),
            edges = graph.total_edges(),
            "loaded labeled graph"
        );
        Ok(graph)
    }

    /// Build a graph of points whose labels are edge costs
    pub fn into_weighted(self, search: &SearchConfig) -> Result<Graph<Point, Cost>> {
        if !self.books.is_empty() {
            bail_invalid!("table (weighted graphs have no `books`)", "books");
        }
        let mut graph = new_graph(search);
        for name in &self.nodes {
            ensure_node(&mut graph, parse_point(Some(name), "node name")?)?;
        }
        for building in self.parse_buildings()? {
            ensure_node(&mut graph, building.location)?;
        }
        for entry in &self.edges {
            if entry.label.is_some() {
                bail_invalid!(
                    "edge field (weighted graphs use `cost`, not `label`)",
                    "label"
                );
            }
            let from = parse_point(entry.from.as_deref(), "edge `from`")?;
            let to = parse_point(entry.to.as_deref(), "edge `to`")?;
            let cost = entry.cost.ok_or_else(|| GraphError::missing("edge `cost`"))?;
            let cost = Cost::try_new(cost)?;
            insert(&mut graph, Edge::new(from, to, cost), self.undirected)?;
        }
        debug!(
            nodes = graph.total_nodes(),
            edges = graph.total_edges(),
            "loaded weighted graph"
        );
        Ok(graph)
    }

    /// Build a campus map: the weighted graph plus its named buildings
    pub fn into_campus(self, search: &SearchConfig) -> Result<CampusMap> {
        let buildings = self.parse_buildings()?;
        let graph = self.into_weighted(search)?.freeze();
        CampusMap::new(buildings, graph)
    }

    fn parse_buildings(&self) -> Result<Vec<Building>> {
        self.buildings
            .iter()
            .map(|entry| -> Result<Building> {
                let short = required(entry.short.as_deref(), "building `short`")?;
                let long = required(entry.long.as_deref(), "building `long`")?;
                let at = parse_point(entry.at.as_deref(), "building `at`")?;
                Ok(Building::new(short, long, at))
            })
            .collect()
    }
}

/// Load a labeled graph file
pub fn load_labeled(path: &Path, search: &SearchConfig) -> Result<Graph<String, String>> {
    GraphFile::load(path)?.into_labeled(search)
}

/// Load a weighted graph file
pub fn load_weighted(path: &Path, search: &SearchConfig) -> Result<Graph<Point, Cost>> {
    GraphFile::load(path)?.into_weighted(search)
}

/// Load a weighted graph file together with its buildings
pub fn load_campus(path: &Path, search: &SearchConfig) -> Result<CampusMap> {
    GraphFile::load(path)?.into_campus(search)
}

/// Reject absent or blank names
pub fn required<'a>(value: Option<&'a str>, what: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GraphError::missing(what)),
    }
}

pub fn parse_point(value: Option<&str>, what: &str) -> Result<Point> {
    required(value, what)?.parse()
}

fn new_graph<N: NodeId, L: Label>(search: &SearchConfig) -> Graph<N, L> {
    let graph = Graph::new();
    if search.check_invariants {
        graph.with_invariant_checks(true)
    } else {
        graph
    }
}

fn ensure_node<N: NodeId, L: Label>(graph: &mut Graph<N, L>, node: N) -> Result<()> {
    if graph.contains_node(&node) {
        return Ok(());
    }
    graph.add_node(node)
}

/// Add `edge`, plus its reverse for undirected files unless it is a self-loop
fn insert<N, L>(graph: &mut Graph<N, L>, edge: Edge<N, L>, undirected: bool) -> Result<()>
where
    N: NodeId,
    L: Label,
{
    ensure_node(graph, edge.parent().clone())?;
    ensure_node(graph, edge.child().clone())?;
    let reverse = (undirected && edge.parent() != edge.child()).then(|| edge.reversed());
    for edge in std::iter::once(edge).chain(reverse) {
        let (parent, child, label) = edge.into_parts();
        graph.add_edge(parent, child, label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn labeled(content: &str) -> Result<Graph<String, String>> {
        GraphFile::parse(content)?.into_labeled(&SearchConfig::default())
    }

    fn weighted(content: &str) -> Result<Graph<Point, Cost>> {
        GraphFile::parse(content)?.into_weighted(&SearchConfig::default())
    }

    fn edge_count(graph: &Graph<String, String>, parent: &str, child: &str) -> usize {
        graph
            .total_num_edges(&parent.to_string(), &child.to_string())
            .unwrap()
    }

    const BUILDING: &str = r#"
[[buildings]]
short = "A"
long = "Alpha"
at = "1,2"
"#;

    #[test]
    fn test_endpoints_added_on_first_sight() {
        let graph = labeled(
            r#"
nodes = ["Loner"]

[[edges]]
from = "Thor"
to = "Hulk"
label = "Avengers 1"

[[edges]]
from = "Thor"
to = "Hulk"
label = "Avengers 2"
"#,
        )
        .unwrap();
        assert_eq!(graph.total_nodes(), 3);
        assert_eq!(graph.total_edges(), 2);
        assert_eq!(
            graph
                .total_num_edges(&"Thor".to_string(), &"Hulk".to_string())
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_undirected_inserts_both_directions() {
        let graph = labeled(
            r#"
undirected = true

[[edges]]
from = "A"
to = "B"
label = "x"

[[edges]]
from = "A"
to = "A"
label = "loop"
"#,
        )
        .unwrap();
        assert_eq!(graph.total_edges(), 3);
        let back = graph.get_labels(&"B".to_string(), &"A".to_string()).unwrap();
        assert_eq!(back.into_iter().collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(
            graph
                .total_num_edges(&"A".to_string(), &"A".to_string())
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_book_connects_each_pair_once() {
        let graph = labeled(
            r#"
[[books]]
title = "Avengers 1"
characters = ["Thor", "Hulk", "Iron Man", "Thor"]
"#,
        )
        .unwrap();
        assert_eq!(graph.total_nodes(), 3);
        assert_eq!(graph.total_edges(), 3);
        assert_eq!(edge_count(&graph, "Thor", "Iron Man"), 1);
        assert_eq!(edge_count(&graph, "Hulk", "Iron Man"), 1);
        assert_eq!(edge_count(&graph, "Iron Man", "Thor"), 0);

        let labels = graph.get_labels(&"Thor".into(), &"Hulk".into()).unwrap();
        assert!(labels.contains(&"Avengers 1".to_string()));
    }

    #[test]
    fn test_undirected_books_and_lone_characters() {
        let graph = labeled(
            r#"
undirected = true

[[books]]
title = "Hulk 180"
characters = ["Hulk", "Wolverine"]

[[books]]
title = "Solo"
characters = ["Loner"]
"#,
        )
        .unwrap();
        assert_eq!(graph.total_nodes(), 3);
        assert_eq!(graph.total_edges(), 2);
        assert!(graph.contains_node(&"Loner".to_string()));
    }

    #[test]
    fn test_book_requires_title_and_names() {
        let err = labeled(
            r#"
[[books]]
characters = ["A", "B"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::MissingArgument { .. }));

        let err = labeled(
            r#"
[[books]]
title = "T"
characters = ["A", " "]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::MissingArgument { .. }));
    }

    #[test]
    fn test_blank_names_are_missing_arguments() {
        let err = labeled("nodes = [\"  \"]").unwrap_err();
        assert!(matches!(err, GraphError::MissingArgument { .. }));

        let err = labeled(
            r#"
[[edges]]
from = "A"
to = "B"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::MissingArgument { .. }));
    }

    #[test]
    fn test_duplicate_edge_in_file() {
        let err = labeled(
            r#"
[[edges]]
from = "A"
to = "B"
label = "x"

[[edges]]
from = "A"
to = "B"
label = "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
    }

    #[test]
    fn test_weighted_file() {
        let graph = weighted(
            r#"
undirected = true

[[edges]]
from = "0,0"
to = "3,4"
cost = 5.0
"#,
        )
        .unwrap();
        assert_eq!(graph.total_nodes(), 2);
        assert_eq!(graph.total_edges(), 2);
        assert!(graph.contains_node(&Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_weighted_rejects_negative_and_missing_cost() {
        let err = weighted(
            r#"
[[edges]]
from = "0,0"
to = "1,1"
cost = -2.0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::InvalidCost { .. }));

        let err = weighted(
            r#"
[[edges]]
from = "0,0"
to = "1,1"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::MissingArgument { .. }));
    }

    #[test]
    fn test_mismatched_edge_fields() {
        let content = r#"
[[edges]]
from = "0,0"
to = "1,1"
cost = 1.0
"#;
        assert!(matches!(
            labeled(content),
            Err(GraphError::InvalidValue { .. })
        ));
        assert!(matches!(
            weighted("[[edges]]\nfrom = \"0,0\"\nto = \"1,1\"\nlabel = \"x\"\n"),
            Err(GraphError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_buildings_are_nodes_of_the_campus() {
        let content = r#"
undirected = true

[[buildings]]
short = "CSE"
long = "Paul G. Allen Center"
at = "10,0"

[[buildings]]
short = "KNE"
long = "Kane Hall"
at = "(20, 0)"

[[edges]]
from = "10,0"
to = "20,0"
cost = 10.0
"#;
        let graph = weighted(content).unwrap();
        assert_eq!(graph.total_nodes(), 2);

        let campus = GraphFile::parse(content)
            .unwrap()
            .into_campus(&SearchConfig::default())
            .unwrap();
        assert_eq!(campus.long_name_for_short("KNE").unwrap(), "Kane Hall");
        assert_eq!(campus.locate("CSE").unwrap(), Point::new(10.0, 0.0));
        assert_eq!(campus.graph().total_edges(), 2);
    }

    #[test]
    fn test_lone_building_is_added_as_node() {
        let graph = weighted(BUILDING).unwrap();
        assert!(graph.contains_node(&Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_tables_belong_to_one_graph_kind() {
        let book = "[[books]]\ntitle = \"T\"\ncharacters = [\"A\"]\n";
        assert!(matches!(
            weighted(book),
            Err(GraphError::InvalidValue { .. })
        ));
        assert!(matches!(
            labeled(BUILDING),
            Err(GraphError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(matches!(
            labeled("directed = true"),
            Err(GraphError::Toml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nodes = [\"A\", \"B\"]").unwrap();
        let graph = load_labeled(file.path(), &SearchConfig::default()).unwrap();
        assert_eq!(graph.total_nodes(), 2);

        let missing = load_labeled(
            Path::new("/nonexistent/graph.toml"),
            &SearchConfig::default(),
        );
        assert!(matches!(missing, Err(GraphError::Io(_))));
    }
}
