//! Resolution of extracted labels against TRIZ reference data
//!
//! The model reports parameters and principles as free text. Labels that
//! match reference entries (by name or number) gain numeric ids; when both
//! sides of a contradiction resolve, the classical matrix's suggestions
//! for the pair are attached alongside the model's.

use crate::parse::RawContradiction;
use trizhub_common::models::{Contradiction, ParameterRef, PrincipleRef};
use trizhub_common::triz::TrizReference;

fn resolve_parameter(label: String, reference: &TrizReference) -> ParameterRef {
    let id = reference.resolve_parameter(&label);
    ParameterRef { label, id }
}

fn resolve_principle(label: String, reference: &TrizReference) -> PrincipleRef {
    let id = reference.resolve_principle(&label);
    PrincipleRef { label, id }
}

/// Resolve a batch of raw contradictions
pub fn resolve_contradictions(
    raw: Vec<RawContradiction>,
    reference: &TrizReference,
) -> Vec<Contradiction> {
    raw.into_iter()
        .map(|item| {
            let improving = resolve_parameter(item.contradiction.improving_parameter, reference);
            let worsening = resolve_parameter(item.contradiction.worsening_parameter, reference);

            let matrix_principles = match (improving.id, worsening.id) {
                (Some(imp), Some(wor)) => reference
                    .lookup(imp, wor)
                    .map(|principles| principles.to_vec())
                    .unwrap_or_default(),
                _ => Vec::new(),
            };

            Contradiction {
                improving,
                worsening,
                principles: item
                    .suggested_principles
                    .into_iter()
                    .map(|label| resolve_principle(label, reference))
                    .collect(),
                matrix_principles,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::RawContradictionPair;

    fn raw(improving: &str, worsening: &str, principles: &[&str]) -> RawContradiction {
        RawContradiction {
            contradiction: RawContradictionPair {
                improving_parameter: improving.into(),
                worsening_parameter: worsening.into(),
            },
            suggested_principles: principles.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_resolves_known_labels() {
        let reference = TrizReference::builtin();
        let resolved = resolve_contradictions(
            vec![raw("Speed", "Force", &["Segmentation", "Dynamics"])],
            &reference,
        );

        assert_eq!(resolved[0].improving.id, Some(9));
        assert_eq!(resolved[0].worsening.id, Some(10));
        assert_eq!(resolved[0].principles[0].id, Some(1));
        assert_eq!(resolved[0].principles[1].id, Some(15));
    }

    #[test]
    fn test_unknown_labels_stay_unresolved() {
        let reference = TrizReference::builtin();
        let resolved = resolve_contradictions(
            vec![raw("Quantum flux", "Speed", &["Reversal of gravity"])],
            &reference,
        );

        assert_eq!(resolved[0].improving.id, None);
        assert_eq!(resolved[0].improving.label, "Quantum flux");
        assert_eq!(resolved[0].worsening.id, Some(9));
        assert_eq!(resolved[0].principles[0].id, None);
    }

    #[test]
    fn test_numeric_labels_resolve() {
        let reference = TrizReference::builtin();
        let resolved = resolve_contradictions(vec![raw("9", "10", &["15", "35"])], &reference);
        assert_eq!(resolved[0].improving.id, Some(9));
        assert_eq!(resolved[0].principles[1].id, Some(35));
    }

    #[test]
    fn test_matrix_suggestions_attached() {
        let reference = TrizReference::builtin();

        // Pair (1, 2) is a populated matrix cell
        let resolved = resolve_contradictions(
            vec![raw("Weight of moving object", "Weight of stationary object", &[])],
            &reference,
        );
        assert_eq!(resolved[0].matrix_principles, vec![10, 1, 29, 35]);

        // Pair outside the shipped rows has no suggestions
        let resolved = resolve_contradictions(vec![raw("Speed", "Force", &[])], &reference);
        assert!(resolved[0].matrix_principles.is_empty());
    }
}
