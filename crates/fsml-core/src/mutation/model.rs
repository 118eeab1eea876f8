use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::PlanError;

/// One file or folder rename
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

impl Rename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn invert(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Result of a reorder computation.
///
/// `renames` must be applied strictly in order; any other order may hit a
/// name that is still occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPlan {
    /// Where the moved entry ends up
    pub new_path: String,
    pub renames: Vec<Rename>,
}

impl ReorderPlan {
    pub fn noop(path: impl Into<String>) -> Self {
        Self {
            new_path: path.into(),
            renames: Vec::new(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.renames.is_empty()
    }

    /// The plan that undoes this one.
    ///
    /// Renames run in reverse with `from`/`to` swapped, so the inverse is as
    /// collision-free as the original.
    pub fn invert(self) -> Self {
        let new_path = self
            .renames
            .iter()
            .find(|r| r.to == self.new_path)
            .map(|r| r.from.clone())
            .unwrap_or(self.new_path);

        Self {
            new_path,
            renames: self.renames.into_iter().rev().map(Rename::invert).collect(),
        }
    }

    /// Dry-run the renames against a snapshot of existing paths.
    ///
    /// Returns the resulting path set, or the first step that would fail.
    pub fn simulate<S: AsRef<str>>(&self, files: &[S]) -> Result<BTreeSet<String>, PlanError> {
        let mut state: BTreeSet<String> = files.iter().map(|f| f.as_ref().to_string()).collect();

        for (step, rename) in self.renames.iter().enumerate() {
            if !state.remove(&rename.from) {
                return Err(PlanError::MissingSource {
                    step,
                    from: rename.from.clone(),
                });
            }
            if !state.insert(rename.to.clone()) {
                return Err(PlanError::Collision {
                    step,
                    from: rename.from.clone(),
                    to: rename.to.clone(),
                });
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> ReorderPlan {
        ReorderPlan {
            new_path: "01-results.md".to_string(),
            renames: vec![
                Rename::new("03-results.md", "01-results.md"),
                Rename::new("02-methods.md", "03-methods.md"),
                Rename::new("01-intro.md", "02-intro.md"),
            ],
        }
    }

    #[test]
    fn test_invert() {
        let inverted = plan().invert();
        assert_eq!(inverted.new_path, "03-results.md");
        assert_eq!(
            inverted.renames,
            vec![
                Rename::new("02-intro.md", "01-intro.md"),
                Rename::new("03-methods.md", "02-methods.md"),
                Rename::new("01-results.md", "03-results.md"),
            ]
        );
    }

    #[test]
    fn test_invert_noop() {
        let inverted = ReorderPlan::noop("02-methods.md").invert();
        assert_eq!(inverted, ReorderPlan::noop("02-methods.md"));
        assert!(inverted.is_noop());
    }

    #[test]
    fn test_simulate_then_undo_restores_snapshot() {
        let files = ["01-intro.md", "02-methods.md", "03-results.md", "notes.md"];
        let plan = plan();

        let after = plan.simulate(&files).unwrap();
        assert!(after.contains("01-results.md"));
        assert!(after.contains("notes.md"));
        assert!(!after.contains("03-results.md"));

        let after: Vec<String> = after.into_iter().collect();
        let restored = plan.invert().simulate(&after).unwrap();
        let expected: BTreeSet<String> = files.iter().map(|f| f.to_string()).collect();
        assert_eq!(restored, expected);
    }

    #[test]
    fn test_simulate_reports_collision() {
        let plan = ReorderPlan {
            new_path: "01-a.md".to_string(),
            renames: vec![
                Rename::new("02-a.md", "01-a.md"),
                Rename::new("01-a.md", "02-a.md"),
            ],
        };
        let err = plan.simulate(&["01-a.md", "02-a.md"]).unwrap_err();
        assert_eq!(
            err,
            PlanError::Collision {
                step: 0,
                from: "02-a.md".to_string(),
                to: "01-a.md".to_string(),
            }
        );
    }

    #[test]
    fn test_simulate_reports_missing_source() {
        let err = plan().simulate(&["01-intro.md"]).unwrap_err();
        assert!(matches!(err, PlanError::MissingSource { step: 0, ref from } if from == "03-results.md"));
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let value = serde_json::to_value(plan()).unwrap();
        assert_eq!(value["newPath"], "01-results.md");
        assert_eq!(value["renames"][0]["from"], "03-results.md");
        assert_eq!(value["renames"][0]["to"], "01-results.md");
    }
}
