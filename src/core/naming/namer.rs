use super::errors::PatternError;
use super::pattern::{Coordinate, NamePattern, INCREMENT_COLUMN_CEILING};
use crate::core::port::Port;
use crate::core::types::PortId;
use std::collections::HashMap;

/// Compute new names for `ports` from a batch naming pattern.
///
/// Ports are visited in row-major order regardless of input order. The input is
/// never modified; only ports that received a name appear in the result.
pub fn apply_name_pattern(
    pattern: &str,
    ports: &[Port],
) -> Result<HashMap<PortId, String>, PatternError> {
    Ok(NamePattern::parse(pattern)?.assign(ports))
}

/// Row/column cursor walking generated names. Kept wider than the parsed
/// coordinates so stepping past `u32::MAX` cannot overflow.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    row: u64,
    col: u64,
}

impl From<Coordinate> for Cursor {
    fn from(coord: Coordinate) -> Self {
        Self {
            row: u64::from(coord.row),
            col: u64::from(coord.col),
        }
    }
}

impl Cursor {
    fn name(&self, prefix: &str) -> String {
        format!("{}{}/{}", prefix, self.row, self.col)
    }

    fn is_past(&self, end: Cursor) -> bool {
        self.row > end.row || (self.row == end.row && self.col > end.col)
    }
}

fn row_major(ports: &[Port]) -> Vec<&Port> {
    let mut sorted: Vec<&Port> = ports.iter().collect();
    sorted.sort_by_key(|port| port.position());
    sorted
}

impl NamePattern {
    /// Generate names for `ports` according to this pattern
    pub fn assign(&self, ports: &[Port]) -> HashMap<PortId, String> {
        match self {
            NamePattern::Template(template) => ports
                .iter()
                .map(|port| {
                    let name = NamePattern::render_template(template, port.row(), port.col());
                    (port.id.clone(), name)
                })
                .collect(),
            NamePattern::Range { prefix, start, end } => assign_range(prefix, *start, *end, ports),
            NamePattern::Increment { prefix, start } => assign_increment(prefix, *start, ports),
        }
    }
}

fn assign_range(
    prefix: &str,
    start: Coordinate,
    end: Coordinate,
    ports: &[Port],
) -> HashMap<PortId, String> {
    let start = Cursor::from(start);
    let end = Cursor::from(end);
    let mut cursor = start;
    let mut names = HashMap::new();

    for port in row_major(ports) {
        if cursor.is_past(end) {
            break;
        }
        names.insert(port.id.clone(), cursor.name(prefix));

        cursor.col += 1;
        if cursor.col > end.col {
            cursor.col = start.col;
            cursor.row += 1;
        }
    }
    names
}

fn assign_increment(prefix: &str, start: Coordinate, ports: &[Port]) -> HashMap<PortId, String> {
    let mut cursor = Cursor::from(start);
    let ceiling = u64::from(INCREMENT_COLUMN_CEILING);

    row_major(ports)
        .into_iter()
        .map(|port| {
            let name = cursor.name(prefix);
            cursor.col += 1;
            if cursor.col > ceiling {
                // Wrapped rows restart at the first column
                cursor.col = 1;
                cursor.row += 1;
            }
            (port.id.clone(), name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::GridPosition;

    fn row_of_ports(count: u32) -> Vec<Port> {
        (0..count)
            .map(|col| Port::new(PortId::new(format!("p{}", col)), "", GridPosition::new(0, col)))
            .collect()
    }

    #[test]
    fn test_template_first_port() {
        let ports = row_of_ports(1);
        let names = apply_name_pattern("E{row}/{col}", &ports).unwrap();
        assert_eq!(names[&PortId::new("p0")], "E1/1");
    }

    #[test]
    fn test_increment_names_every_port() {
        let ports = row_of_ports(4);
        let names = apply_name_pattern("Gi1/1", &ports).unwrap();
        assert_eq!(names.len(), 4);
        assert_eq!(names[&PortId::new("p3")], "Gi1/4");
    }

    #[test]
    fn test_range_stops_at_end() {
        let ports = row_of_ports(5);
        let names = apply_name_pattern("E1/1 - 1/3", &ports).unwrap();
        assert_eq!(names.len(), 3);
        assert!(!names.contains_key(&PortId::new("p3")));
    }

    #[test]
    fn test_range_with_start_column_beyond_end_column() {
        // Each row restarts at the start column, which is already past the end column
        let ports = row_of_ports(4);
        let names = apply_name_pattern("E1/5 - 2/3", &ports).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[&PortId::new("p0")], "E1/5");
    }

    #[test]
    fn test_rejected_pattern_returns_error() {
        let ports = row_of_ports(2);
        assert_eq!(apply_name_pattern("   ", &ports), Err(PatternError::EmptyPattern));
    }

    #[test]
    fn test_empty_port_list() {
        assert!(apply_name_pattern("E1/1", &[]).unwrap().is_empty());
    }
}
