//! Serializable summary of an orbit map, for JSON output.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::orbit_map::OrbitMap;

/// Totals for a whole map, plus an optional transfer query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSummary {
    /// Body the depths were measured from.
    pub root: String,
    pub nodes: usize,
    pub edges: usize,
    /// Sum of every body's depth under `root`.
    pub total_orbits: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers: Option<TransferSummary>,
}

/// Result of a transfer query between two bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSummary {
    pub from: String,
    pub to: String,
    /// Bodies strictly between `from` and `to`.
    pub path: Vec<String>,
    pub transfers: usize,
}

impl MapSummary {
    /// Summarize `map` under `root`, answering the transfer query if given.
    pub fn build(map: &OrbitMap, root: &str, transfer: Option<(&str, &str)>) -> Result<Self> {
        let transfers = match transfer {
            Some((from, to)) => Some(TransferSummary {
                from: from.to_string(),
                to: to.to_string(),
                path: map.shortest_path(from, to)?,
                transfers: map.orbital_transfers(from, to)?,
            }),
            None => None,
        };

        Ok(Self {
            root: root.to_string(),
            nodes: map.node_count(),
            edges: map.edge_count(),
            total_orbits: map.total_orbit_count(root),
            transfers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrbitError;
    use crate::parse::parse_map;

    #[test]
    fn test_summary_without_transfer() {
        let map = parse_map(["COM)A", "A)B", "COM)C"]).unwrap();
        let summary = MapSummary::build(&map, "COM", None).unwrap();
        assert_eq!(summary.nodes, 4);
        assert_eq!(summary.edges, 3);
        assert_eq!(summary.total_orbits, 4);
        assert!(summary.transfers.is_none());
    }

    #[test]
    fn test_summary_with_transfer() {
        let map = parse_map(["COM)A", "A)YOU", "COM)C", "C)SAN"]).unwrap();
        let summary = MapSummary::build(&map, "COM", Some(("YOU", "SAN"))).unwrap();
        let transfers = summary.transfers.unwrap();
        assert_eq!(transfers.path, vec!["A", "COM", "C"]);
        assert_eq!(transfers.transfers, 2);
    }

    #[test]
    fn test_summary_propagates_query_error() {
        let map = parse_map(["COM)A"]).unwrap();
        assert_eq!(
            MapSummary::build(&map, "COM", Some(("YOU", "SAN"))),
            Err(OrbitError::UnknownNode("YOU".into()))
        );
    }
}
