#[cfg(test)]
mod tests {
    use crate::core::naming::{apply_name_pattern, NamePattern, PatternError};
    use crate::core::port::Port;
    use crate::core::types::{GridPosition, PortId};
    use proptest::prelude::*;

    fn grid(rows: u32, cols: u32) -> Vec<Port> {
        let mut ports = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                ports.push(Port::new(
                    PortId::new(format!("r{}c{}", row, col)),
                    "",
                    GridPosition::new(row, col),
                ));
            }
        }
        ports
    }

    fn id(row: u32, col: u32) -> PortId {
        PortId::new(format!("r{}c{}", row, col))
    }

    #[test]
    fn test_range_boundary() {
        let ports = grid(1, 5);
        let names = apply_name_pattern("E1/1 - 1/3", &ports).unwrap();

        assert_eq!(names.len(), 3);
        assert_eq!(names[&id(0, 0)], "E1/1");
        assert_eq!(names[&id(0, 1)], "E1/2");
        assert_eq!(names[&id(0, 2)], "E1/3");
        assert!(!names.contains_key(&id(0, 3)));
        assert!(!names.contains_key(&id(0, 4)));
    }

    #[test]
    fn test_range_wraps_to_start_column() {
        let ports = grid(2, 4);
        let names = apply_name_pattern("Te2/3 - 4/4", &ports).unwrap();

        // Cursor: 2/3 2/4 3/3 3/4 4/3 4/4, then exhausted
        let expected = ["Te2/3", "Te2/4", "Te3/3", "Te3/4", "Te4/3", "Te4/4"];
        let sorted = [id(0, 0), id(0, 1), id(0, 2), id(0, 3), id(1, 0), id(1, 1)];
        for (port, name) in sorted.iter().zip(expected) {
            assert_eq!(names[port], name);
        }
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_increment_wraparound() {
        let ports = grid(1, 5);
        let names = apply_name_pattern("A1/997", &ports).unwrap();

        assert_eq!(names[&id(0, 0)], "A1/997");
        assert_eq!(names[&id(0, 1)], "A1/998");
        assert_eq!(names[&id(0, 2)], "A1/999");
        assert_eq!(names[&id(0, 3)], "A2/1");
        assert_eq!(names[&id(0, 4)], "A2/2");
    }

    #[test]
    fn test_increment_ignores_grid_rows() {
        // Increment only wraps at the column ceiling, not at the layout edge
        let ports = grid(2, 2);
        let names = apply_name_pattern("Gi1/1", &ports).unwrap();
        assert_eq!(names[&id(1, 0)], "Gi1/3");
        assert_eq!(names[&id(1, 1)], "Gi1/4");
    }

    #[test]
    fn test_template_substitution() {
        let ports = vec![Port::new(PortId::new("x"), "old", GridPosition::new(2, 5))];
        let names = apply_name_pattern("Gi{row}/0/{col}", &ports).unwrap();
        assert_eq!(names[&PortId::new("x")], "Gi3/0/6");
    }

    #[test]
    fn test_template_names_every_port() {
        let ports = grid(3, 4);
        let names = apply_name_pattern("{row}-{col}", &ports).unwrap();
        assert_eq!(names.len(), 12);
        assert_eq!(names[&id(2, 3)], "3-4");
    }

    #[test]
    fn test_rejection() {
        let ports = grid(2, 2);
        let before = ports.clone();
        let result = apply_name_pattern("not a pattern", &ports);

        assert_eq!(
            result,
            Err(PatternError::PatternNotRecognized {
                pattern: "not a pattern".to_string()
            })
        );
        assert_eq!(ports, before);
    }

    #[test]
    fn test_grammar_precedence() {
        assert!(matches!(
            NamePattern::parse("E{row}/{col} - 2/3"),
            Ok(NamePattern::Template(_))
        ));

        let ports = vec![Port::new(PortId::new("x"), "", GridPosition::new(0, 1))];
        let names = apply_name_pattern("E{row}/{col} - 2/3", &ports).unwrap();
        assert_eq!(names[&PortId::new("x")], "E1/2 - 2/3");
    }

    #[test]
    fn test_numbers_are_not_padded() {
        let ports = grid(1, 2);
        let names = apply_name_pattern("E01/09", &ports).unwrap();
        assert_eq!(names[&id(0, 0)], "E1/9");
        assert_eq!(names[&id(0, 1)], "E1/10");
    }

    fn shuffled(ports: &[Port], keys: &[u32]) -> Vec<Port> {
        let mut keyed: Vec<(u32, Port)> = keys.iter().copied().zip(ports.iter().cloned()).collect();
        keyed.sort_by_key(|(key, _)| *key);
        keyed.into_iter().map(|(_, port)| port).collect()
    }

    proptest! {
        #[test]
        fn prop_template_is_idempotent(rows in 1u32..6, cols in 1u32..6) {
            let ports = grid(rows, cols);
            let first = apply_name_pattern("E{row}/{col}", &ports).unwrap();
            let second = apply_name_pattern("E{row}/{col}", &ports).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_input_order_does_not_matter(
            rows in 1u32..5,
            cols in 1u32..5,
            keys in proptest::collection::vec(any::<u32>(), 16),
            pattern in prop_oneof![
                Just("E1/1"),
                Just("Gi2/990"),
                Just("E1/1 - 2/3"),
                Just("Te3/2 - 5/4"),
            ],
        ) {
            let ports = grid(rows, cols);
            let reordered = shuffled(&ports, &keys);

            let expected = apply_name_pattern(pattern, &ports).unwrap();
            let actual = apply_name_pattern(pattern, &reordered).unwrap();
            prop_assert_eq!(expected, actual);
        }
    }
}
