//! Campus directory
//!
//! Named buildings placed on a weighted graph of points. Buildings are looked
//! up by short name (`CSE`) and carry a long display name; routes between
//! them run the weighted search over the walkway graph.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::bail_invalid;
use crate::config::SearchConfig;
use crate::error::{GraphError, Result};
use crate::graph::{find_weighted_path_with, Cost, FrozenGraph, Path, Point};

/// A named location on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub location: Point,
}

impl Building {
    pub fn new(short_name: &str, long_name: &str, location: Point) -> Self {
        Building {
            short_name: short_name.to_string(),
            long_name: long_name.to_string(),
            location,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CampusMap {
    buildings: BTreeMap<String, Building>,
    graph: FrozenGraph<Point, Cost>,
}

impl CampusMap {
    /// Every building's location must already be a node of `graph`, and
    /// short names must be unique.
    pub fn new(
        buildings: impl IntoIterator<Item = Building>,
        graph: FrozenGraph<Point, Cost>,
    ) -> Result<Self> {
        let mut by_name = BTreeMap::new();
        for building in buildings {
            let short = building.short_name.trim().to_string();
            if short.is_empty() {
                return Err(GraphError::missing("building short name"));
            }
            if building.long_name.trim().is_empty() {
                return Err(GraphError::missing("building long name"));
            }
            if !graph.contains_node(&building.location) {
                return Err(GraphError::unknown_node(building.location));
            }
            if by_name.contains_key(&short) {
                bail_invalid!("building (duplicate short name)", short);
            }
            by_name.insert(short, building);
        }
        tracing::debug!(buildings = by_name.len(), "built campus map");
        Ok(CampusMap {
            buildings: by_name,
            graph,
        })
    }

    pub fn graph(&self) -> &FrozenGraph<Point, Cost> {
        &self.graph
    }

    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.buildings.contains_key(short_name)
    }

    /// Fails with `UnknownBuilding` for a short name not on the map
    pub fn building(&self, short_name: &str) -> Result<&Building> {
        self.buildings
            .get(short_name)
            .ok_or_else(|| GraphError::unknown_building(short_name))
    }

    pub fn long_name_for_short(&self, short_name: &str) -> Result<&str> {
        Ok(&self.building(short_name)?.long_name)
    }

    /// Short name to long name for every building, ordered by short name
    pub fn building_names(&self) -> BTreeMap<&str, &str> {
        self.buildings
            .iter()
            .map(|(short, b)| (short.as_str(), b.long_name.as_str()))
            .collect()
    }

    /// Buildings ordered by short name
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.values()
    }

    /// Resolve a building short name, or failing that an `"x,y"` point
    pub fn locate(&self, name: &str) -> Result<Point> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GraphError::missing("location"));
        }
        if let Some(building) = self.buildings.get(name) {
            return Ok(building.location);
        }
        name.parse().map_err(|err| {
            if self.buildings.is_empty() {
                err
            } else {
                GraphError::unknown_building(name)
            }
        })
    }

    /// Least-cost route between two buildings named by short name
    pub fn find_shortest_path(
        &self,
        start_short: &str,
        end_short: &str,
        config: &SearchConfig,
    ) -> Result<Option<Path<Point>>> {
        let start = self.required_building(start_short, "start building")?;
        let end = self.required_building(end_short, "destination building")?;
        find_weighted_path_with(&self.graph, &start.location, &end.location, config)
    }

    /// Least-cost route between two buildings or points
    pub fn find_route(
        &self,
        from: &str,
        to: &str,
        config: &SearchConfig,
    ) -> Result<Option<Path<Point>>> {
        let from = self.locate(from)?;
        let to = self.locate(to)?;
        find_weighted_path_with(&self.graph, &from, &to, config)
    }

    fn required_building(&self, short_name: &str, what: &str) -> Result<&Building> {
        let short_name = short_name.trim();
        if short_name.is_empty() {
            return Err(GraphError::missing(what));
        }
        self.building(short_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Library and hall joined directly (250) and through a fountain (200)
    fn campus() -> CampusMap {
        let (library, fountain, hall) = (pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 100.0));
        let mut graph = Graph::new();
        for node in [library, fountain, hall] {
            graph.add_node(node).unwrap();
        }
        for (a, b, cost) in [
            (library, fountain, 100.0),
            (fountain, hall, 100.0),
            (library, hall, 250.0),
        ] {
            graph.add_edge(a, b, Cost::new(cost)).unwrap();
            graph.add_edge(b, a, Cost::new(cost)).unwrap();
        }
        let buildings = [
            Building::new("LIB", "Suzzallo Library", library),
            Building::new("HALL", "Kane Hall", hall),
        ];
        CampusMap::new(buildings, graph.freeze()).unwrap()
    }

    #[test]
    fn test_name_lookups() {
        let map = campus();
        assert!(map.short_name_exists("LIB"));
        assert!(!map.short_name_exists("Suzzallo Library"));
        assert_eq!(map.long_name_for_short("HALL").unwrap(), "Kane Hall");
        assert!(matches!(
            map.long_name_for_short("XYZ"),
            Err(GraphError::UnknownBuilding { .. })
        ));

        let names = map.building_names();
        assert_eq!(names.len(), 2);
        assert_eq!(names["LIB"], "Suzzallo Library");
        let shorts: Vec<&str> = map.buildings().map(|b| b.short_name.as_str()).collect();
        assert_eq!(shorts, vec!["HALL", "LIB"]);
    }

    #[test]
    fn test_shortest_path_between_buildings() {
        let map = campus();
        let config = SearchConfig::default();
        let path = map
            .find_shortest_path("LIB", "HALL", &config)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), Cost::new(200.0));
        assert_eq!(path.len(), 2);
        assert_eq!(*path.end(), pt(100.0, 100.0));

        let same = map.find_shortest_path("LIB", "LIB", &config).unwrap();
        assert_eq!(same.map(|p| p.len()), Some(0));
    }

    #[test]
    fn test_shortest_path_rejects_unknown_and_blank_names() {
        let map = campus();
        let config = SearchConfig::default();
        assert!(matches!(
            map.find_shortest_path("LIB", "XYZ", &config),
            Err(GraphError::UnknownBuilding { .. })
        ));
        assert!(matches!(
            map.find_shortest_path(" ", "HALL", &config),
            Err(GraphError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_locate_accepts_names_and_points() {
        let map = campus();
        assert_eq!(map.locate("HALL").unwrap(), pt(100.0, 100.0));
        assert_eq!(map.locate("100,0").unwrap(), pt(100.0, 0.0));
        assert!(matches!(
            map.locate("XYZ"),
            Err(GraphError::UnknownBuilding { .. })
        ));

        let route = map
            .find_route("100,0", "HALL", &SearchConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(route.cost(), Cost::new(100.0));
    }

    #[test]
    fn test_new_rejects_duplicates_and_strays() {
        let mut graph: Graph<Point, Cost> = Graph::new();
        graph.add_node(pt(0.0, 0.0)).unwrap();
        let frozen = graph.freeze();

        let twice = [
            Building::new("A", "Alpha", pt(0.0, 0.0)),
            Building::new("A", "Again", pt(0.0, 0.0)),
        ];
        assert!(matches!(
            CampusMap::new(twice, frozen.clone()),
            Err(GraphError::InvalidValue { .. })
        ));

        let stray = [Building::new("B", "Beta", pt(5.0, 5.0))];
        assert!(matches!(
            CampusMap::new(stray, frozen.clone()),
            Err(GraphError::UnknownNode { .. })
        ));

        let blank = [Building::new("  ", "Gamma", pt(0.0, 0.0))];
        assert!(matches!(
            CampusMap::new(blank, frozen),
            Err(GraphError::MissingArgument { .. })
        ));
    }
}
