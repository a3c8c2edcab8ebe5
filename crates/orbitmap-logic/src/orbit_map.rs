//! The orbit map: a forest of bodies keyed by label.
//!
//! `OrbitMap` keeps two lookups, child → parent and parent → children, and
//! answers depth and transfer queries over them. Traversals visit each body
//! at most once, so they terminate even on input that is not a true forest.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{OrbitError, Result};

/// Label of the universal center of mass, the usual root of a map.
pub const DEFAULT_ROOT: &str = "COM";

/// Parent/child relationships between orbiting bodies.
#[derive(Debug, Clone, Default)]
pub struct OrbitMap {
    /// child → the body it directly orbits
    parents: HashMap<String, String>,
    /// parent → bodies directly orbiting it, in insertion order
    children: HashMap<String, Vec<String>>,
}

impl OrbitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `child` directly orbits `parent`.
    ///
    /// Fails if `child` already orbits something; the map is left untouched.
    pub fn insert(&mut self, parent: &str, child: &str) -> Result<()> {
        if let Some(existing) = self.parents.get(child) {
            return Err(OrbitError::DuplicateParent {
                child: child.to_string(),
                existing: existing.clone(),
                attempted: parent.to_string(),
            });
        }
        self.parents.insert(child.to_string(), parent.to_string());
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(child.to_string());
        Ok(())
    }

    /// Undirected neighbours of `node`: its parent first, then its children.
    pub fn connections(&self, node: &str) -> Vec<&str> {
        self.parent(node)
            .into_iter()
            .chain(self.children(node).iter().map(String::as_str))
            .collect()
    }

    pub fn parent(&self, node: &str) -> Option<&str> {
        self.parents.get(node).map(String::as_str)
    }

    pub fn children(&self, node: &str) -> &[String] {
        self.children.get(node).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Check if a body appears anywhere in the map.
    pub fn contains(&self, node: &str) -> bool {
        self.parents.contains_key(node) || self.children.contains_key(node)
    }

    /// Number of distinct bodies.
    pub fn node_count(&self) -> usize {
        self.parents
            .keys()
            .chain(self.children.keys())
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of direct orbits. Every child has exactly one.
    pub fn edge_count(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Bodies that orbit nothing, sorted by label.
    pub fn roots(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self
            .children
            .keys()
            .map(String::as_str)
            .filter(|node| !self.parents.contains_key(*node))
            .collect();
        roots.sort_unstable();
        roots
    }

    /// Depth of every body reachable from `root`, with `root` itself at 0.
    ///
    /// A body's depth is its count of direct plus indirect orbits.
    pub fn total_orbits(&self, root: &str) -> HashMap<String, usize> {
        let mut depths: HashMap<String, usize> = HashMap::new();
        depths.insert(root.to_string(), 0);

        let mut to_visit: Vec<&str> = self.children(root).iter().map(String::as_str).collect();
        while let Some(current) = to_visit.pop() {
            if depths.contains_key(current) {
                continue;
            }
            let Some(depth) = self
                .parents
                .get(current)
                .and_then(|parent| depths.get(parent.as_str()))
                .map(|d| d + 1)
            else {
                continue;
            };
            depths.insert(current.to_string(), depth);
            to_visit.extend(self.children(current).iter().map(String::as_str));
        }

        log::debug!(
            "computed depths for {} bodies under `{}`",
            depths.len(),
            root
        );
        depths
    }

    /// Sum of all depths under `root`: the total number of direct and
    /// indirect orbits.
    pub fn total_orbit_count(&self, root: &str) -> usize {
        self.total_orbits(root).values().sum()
    }

    /// Bodies strictly between `src` and `dst` on the shortest path, in order
    /// from `src`.
    ///
    /// Returns an empty path when `src == dst` or when they are adjacent.
    pub fn shortest_path(&self, src: &str, dst: &str) -> Result<Vec<String>> {
        for node in [src, dst] {
            if !self.contains(node) {
                return Err(OrbitError::UnknownNode(node.to_string()));
            }
        }
        if src == dst {
            return Ok(vec![]);
        }

        match self.bfs(src, dst) {
            Some(path) => Ok(path.into_iter().map(str::to_string).collect()),
            None => {
                log::warn!("`{}` and `{}` are in disconnected trees", src, dst);
                Err(OrbitError::NoPath {
                    src: src.to_string(),
                    dst: dst.to_string(),
                })
            }
        }
    }

    /// Transfers needed to move from the body `src` orbits to the body `dst`
    /// orbits. A path of N bodies takes N - 1 transfers.
    pub fn orbital_transfers(&self, src: &str, dst: &str) -> Result<usize> {
        if src == dst && self.contains(src) {
            return Ok(0);
        }
        let path = self.shortest_path(src, dst)?;
        path.len().checked_sub(1).ok_or_else(|| OrbitError::NoPath {
            src: src.to_string(),
            dst: dst.to_string(),
        })
    }

    fn bfs<'a>(&'a self, src: &'a str, dst: &str) -> Option<Vec<&'a str>> {
        let mut visited = HashSet::new();
        let mut queue: VecDeque<(&str, Vec<&str>)> = VecDeque::new();
        visited.insert(src);
        queue.push_back((src, vec![]));

        while let Some((current, path)) = queue.pop_front() {
            for next in self.connections(current) {
                if next == dst {
                    return Some(path);
                }
                if visited.insert(next) {
                    let mut new_path = path.clone();
                    new_path.push(next);
                    queue.push_back((next, new_path));
                }
            }
        }

        None
    }
}
