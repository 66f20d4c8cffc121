use crate::game::Breadcrumb;

/// Compresses consecutive moves of the same totem, e.g. `A-UU, B-R`.
pub fn format_solution(moves: &[Breadcrumb]) -> String {
    let mut runs: Vec<(&str, String)> = Vec::new();

    for crumb in moves {
        if let Some((totem, directions)) = runs.last_mut() {
            if *totem == crumb.totem {
                directions.push(crumb.direction.symbol());
                continue;
            }
        }
        runs.push((crumb.totem.as_str(), crumb.direction.symbol().to_string()));
    }

    runs.iter()
        .map(|(totem, directions)| format!("{}-{}", totem, directions))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats every solution, fewest moves first. Equal lengths keep their
/// discovery order.
pub fn format_all(solutions: &[Vec<Breadcrumb>]) -> Vec<String> {
    let mut sorted: Vec<&Vec<Breadcrumb>> = solutions.iter().collect();
    sorted.sort_by_key(|moves| moves.len());
    sorted.into_iter().map(|moves| format_solution(moves)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totem::Direction::{self, *};

    fn moves(steps: &[(&str, Direction)]) -> Vec<Breadcrumb> {
        steps
            .iter()
            .map(|&(totem, direction)| Breadcrumb::new(totem, direction))
            .collect()
    }

    #[test]
    fn compresses_runs() {
        assert_eq!(
            format_solution(&moves(&[("A", Up), ("A", Up), ("B", Right)])),
            "A-UU, B-R"
        );
        assert_eq!(
            format_solution(&moves(&[("X", Down), ("X", Down), ("Y", Up)])),
            "X-DD, Y-U"
        );
    }

    #[test]
    fn same_totem_again_starts_new_run() {
        assert_eq!(
            format_solution(&moves(&[("A", Left), ("X", Up), ("A", Right), ("A", Down)])),
            "A-L, X-U, A-RD"
        );
    }

    #[test]
    fn empty_solution_formats_empty() {
        assert_eq!(format_solution(&[]), "");
    }

    #[test]
    fn shortest_first_and_stable() {
        let solutions = vec![
            moves(&[("A", Up), ("B", Up), ("X", Left), ("B", Down), ("X", Up)]),
            moves(&[("C", Up), ("X", Right), ("X", Down)]),
            moves(&[("B", Left), ("X", Left), ("X", Left)]),
        ];
        assert_eq!(
            format_all(&solutions),
            vec![
                "C-U, X-RD",
                "B-L, X-LL",
                "A-U, B-U, X-L, B-D, X-U",
            ]
        );
    }

    #[test]
    fn no_solutions() {
        assert!(format_all(&[]).is_empty());
    }
}
