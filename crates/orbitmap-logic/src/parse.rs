//! Parsing of `PARENT)CHILD` orbit lines.

use std::str::FromStr;

use crate::error::{OrbitError, Result};
use crate::orbit_map::OrbitMap;

/// Separates the orbited body from the orbiting one.
pub const ORBIT_SEPARATOR: char = ')';

/// Split a single orbit line into `(parent, child)`.
///
/// Surrounding whitespace is ignored. Exactly one separator and two
/// non-empty labels are required.
pub fn parse_orbit(line: &str) -> Result<(&str, &str)> {
    let trimmed = line.trim();
    let (parent, child) = trimmed
        .split_once(ORBIT_SEPARATOR)
        .ok_or_else(|| OrbitError::MissingSeparator(trimmed.to_string()))?;
    if child.contains(ORBIT_SEPARATOR) {
        return Err(OrbitError::MalformedOrbit(trimmed.to_string()));
    }
    if parent.is_empty() || child.is_empty() {
        return Err(OrbitError::EmptyLabel(trimmed.to_string()));
    }
    Ok((parent, child))
}

/// Build a map from orbit lines, skipping blank ones.
///
/// Stops at the first bad line; the error carries its 1-based line number.
pub fn parse_map<I, S>(lines: I) -> Result<OrbitMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = OrbitMap::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        parse_orbit(line)
            .and_then(|(parent, child)| map.insert(parent, child))
            .map_err(|source| OrbitError::Line {
                line: index + 1,
                source: Box::new(source),
            })?;
    }
    log::debug!(
        "parsed {} orbits over {} bodies",
        map.edge_count(),
        map.node_count()
    );
    Ok(map)
}

impl FromStr for OrbitMap {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_map(s.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orbit() {
        assert_eq!(parse_orbit("COM)B").unwrap(), ("COM", "B"));
        assert_eq!(parse_orbit("  B)C \n").unwrap(), ("B", "C"));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_orbit("COMB"),
            Err(OrbitError::MissingSeparator("COMB".into()))
        );
    }

    #[test]
    fn test_extra_separator() {
        assert_eq!(
            parse_orbit("A)B)C"),
            Err(OrbitError::MalformedOrbit("A)B)C".into()))
        );
    }

    #[test]
    fn test_empty_labels() {
        assert_eq!(parse_orbit(")B"), Err(OrbitError::EmptyLabel(")B".into())));
        assert_eq!(parse_orbit("A)"), Err(OrbitError::EmptyLabel("A)".into())));
    }

    #[test]
    fn test_parse_map_skips_blank_lines() {
        let map = parse_map(["COM)B", "", "   ", "B)C"]).unwrap();
        assert_eq!(map.edge_count(), 2);
        assert_eq!(map.parent("C"), Some("B"));
    }

    #[test]
    fn test_parse_map_reports_line_number() {
        let err = parse_map(vec!["COM)B".to_string(), "BC".to_string()]).unwrap_err();
        assert_eq!(
            err,
            OrbitError::Line {
                line: 2,
                source: Box::new(OrbitError::MissingSeparator("BC".into())),
            }
        );
    }

    #[test]
    fn test_parse_map_duplicate_parent() {
        let err = parse_map(["COM)B", "C)B"]).unwrap_err();
        assert!(matches!(
            err.root_cause(),
            OrbitError::DuplicateParent { child, .. } if child == "B"
        ));
    }

    #[test]
    fn test_from_str() {
        let map: OrbitMap = "COM)B\nB)C\n".parse().unwrap();
        assert_eq!(map.total_orbit_count("COM"), 3);
    }
}
