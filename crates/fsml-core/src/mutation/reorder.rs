use std::cmp::Reverse;

use crate::model::{PathDescriptor, Position};
use crate::mutation::model::{ReorderPlan, Rename};
use crate::parser::parse_path;

/// How a reorder affects the numbered siblings of the target directory.
///
/// "Down" and "up" refer to the visual direction in a top-to-bottom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderCase {
    /// Same directory, moving to a higher number. Siblings in between close
    /// the gap by decreasing their order.
    SameDirDown { old_order: u32 },
    /// Same directory, moving to a lower number. Siblings in between
    /// increase their order to open a slot.
    SameDirUp { old_order: u32 },
    /// Coming from another directory, or currently unnumbered. Everything at
    /// or after the insertion point shifts up by one.
    CrossDirOrUnnumbered,
    /// Already in place
    NoOp,
}

impl ReorderCase {
    pub fn select(source: &PathDescriptor, target_dir: &str, desired: u32) -> Self {
        match source.order {
            Some(old_order) if source.parent == target_dir => {
                if old_order < desired {
                    ReorderCase::SameDirDown { old_order }
                } else if old_order > desired {
                    ReorderCase::SameDirUp { old_order }
                } else {
                    ReorderCase::NoOp
                }
            }
            _ => ReorderCase::CrossDirOrUnnumbered,
        }
    }

    /// True when the case renumbers siblings downwards, which requires the
    /// lowest original order to be renamed first
    pub fn decreases_orders(&self) -> bool {
        matches!(self, ReorderCase::SameDirDown { .. })
    }
}

/// A numbered entry of the target directory
struct Sibling {
    desc: PathDescriptor,
    order: u32,
}

/// Compute every rename needed to move `source_path` next to (or into)
/// `target_path`, shifting numbered siblings to make room.
///
/// `siblings` is a snapshot of the paths around the drop target; only those
/// directly inside the target directory with an order prefix take part.
/// Applying the returned renames strictly in order never renames onto a path
/// that is still occupied, as long as sibling stems are distinct.
///
/// # Examples
///
/// ```
/// use fsml_core::{compute_reorder, Position, Rename};
///
/// let plan = compute_reorder(
///     "02-config.md",
///     "01-intro.md",
///     Position::Before,
///     &["01-intro.md", "02-config.md"],
/// );
/// assert_eq!(plan.new_path, "01-config.md");
/// assert_eq!(
///     plan.renames,
///     vec![
///         Rename::new("02-config.md", "01-config.md"),
///         Rename::new("01-intro.md", "02-intro.md"),
///     ]
/// );
/// ```
pub fn compute_reorder<S: AsRef<str>>(
    source_path: &str,
    target_path: &str,
    position: Position,
    siblings: &[S],
) -> ReorderPlan {
    let source = parse_path(source_path);
    let target = parse_path(target_path);

    let target_dir = match position {
        Position::Inside => target.path.clone(),
        Position::Before | Position::After => target.parent.clone(),
    };

    let mut group: Vec<Sibling> = siblings
        .iter()
        .map(|p| parse_path(p.as_ref()))
        .filter(|desc| desc.parent == target_dir)
        .filter_map(|desc| desc.order.map(|order| Sibling { desc, order }))
        .collect();
    group.sort_by_key(|s| s.order);

    let desired = desired_order(position, &target, &group);
    let case = ReorderCase::select(&source, &target_dir, desired);

    log::debug!(
        "reorder {source_path} {position} {target_path}: {case:?}, desired order {desired}"
    );

    let (source_order, shifts): (u32, Vec<(&Sibling, u32)>) = match case {
        ReorderCase::NoOp => return ReorderPlan::noop(source_path),
        ReorderCase::SameDirDown { old_order } => {
            let placed = desired - 1;
            let shifts = group
                .iter()
                .filter(|s| s.desc.path != source.path)
                .filter(|s| s.order > old_order && s.order <= placed)
                .map(|s| (s, s.order - 1))
                .collect();
            (placed, shifts)
        }
        ReorderCase::SameDirUp { old_order } => {
            let shifts = group
                .iter()
                .filter(|s| s.desc.path != source.path)
                .filter(|s| s.order >= desired && s.order < old_order)
                .map(|s| (s, s.order.saturating_add(1)))
                .collect();
            (desired, shifts)
        }
        ReorderCase::CrossDirOrUnnumbered => {
            let shifts = group
                .iter()
                .filter(|s| s.order >= desired)
                .map(|s| (s, s.order.saturating_add(1)))
                .collect();
            (desired, shifts)
        }
    };

    let mut renames: Vec<Rename> = shifts
        .into_iter()
        .map(|(s, order)| Rename::new(s.desc.path.clone(), numbered_path(&target_dir, order, &s.desc)))
        .filter(|r| r.from != r.to)
        .collect();

    let new_path = numbered_path(&target_dir, source_order, &source);
    let source_rename = (source_path != new_path).then(|| Rename::new(source_path, new_path.clone()));

    if case == ReorderCase::CrossDirOrUnnumbered {
        // the source's order belongs to its old directory; rename it once its slot is free
        sort_for_execution(&mut renames, false);
        renames.extend(source_rename);
    } else {
        renames.extend(source_rename);
        sort_for_execution(&mut renames, case.decreases_orders());
    }

    log::trace!("reorder plan for {source_path}: {} renames", renames.len());

    ReorderPlan { new_path, renames }
}

/// Rename only the source, without shifting any sibling.
///
/// Meant for callers that renumber on their own; `Inside` always lands on
/// order 1.
pub fn compute_new_path(source_path: &str, target_path: &str, position: Position) -> ReorderPlan {
    let source = parse_path(source_path);
    let target = parse_path(target_path);

    let (target_dir, order) = match position {
        Position::Before => (target.parent, nonzero_or_one(target.order)),
        Position::After => (target.parent, target.order.unwrap_or(0).saturating_add(1)),
        Position::Inside => (target.path, 1),
    };

    let file_name = format!("{:02}-{}{}", order, source.name, source.extension);
    let new_path = join_dir(&target_dir, &file_name);

    let renames = if source_path != new_path {
        vec![Rename::new(source_path, new_path.clone())]
    } else {
        Vec::new()
    };

    ReorderPlan { new_path, renames }
}

fn desired_order(position: Position, target: &PathDescriptor, group: &[Sibling]) -> u32 {
    match position {
        Position::Inside => group
            .iter()
            .map(|s| s.order)
            .max()
            .map_or(1, |max| max.saturating_add(1)),
        Position::Before => nonzero_or_one(target.order),
        Position::After => target.order.unwrap_or(0).saturating_add(1),
    }
}

/// An order of 0 counts as unnumbered when used as an insertion point
fn nonzero_or_one(order: Option<u32>) -> u32 {
    order.filter(|&o| o != 0).unwrap_or(1)
}

/// `dir/NN-name.ext`, with folders keeping no extension
fn numbered_path(dir: &str, order: u32, desc: &PathDescriptor) -> String {
    let extension = if desc.is_folder { "" } else { desc.extension.as_str() };
    join_dir(dir, &format!("{:02}-{}{}", order, desc.name, extension))
}

fn join_dir(dir: &str, file_name: &str) -> String {
    if dir.is_empty() {
        file_name.to_string()
    } else {
        format!("{dir}/{file_name}")
    }
}

/// Order renames so no step targets a name that is still taken: lowest
/// original order first when orders decrease, highest first otherwise
fn sort_for_execution(renames: &mut [Rename], decreasing: bool) {
    let key = |r: &Rename| parse_path(&r.from).order.unwrap_or(0);
    if decreasing {
        renames.sort_by_key(key);
    } else {
        renames.sort_by_key(|r| Reverse(key(r)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIBLINGS: [&str; 3] = ["01-intro.md", "02-methods.md", "03-results.md"];

    fn renames(plan: &ReorderPlan) -> Vec<(&str, &str)> {
        plan.renames
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str()))
            .collect()
    }

    #[test]
    fn test_move_last_before_first() {
        let plan = compute_reorder("03-results.md", "01-intro.md", Position::Before, &SIBLINGS);
        assert_eq!(plan.new_path, "01-results.md");
        assert_eq!(
            renames(&plan),
            vec![
                ("03-results.md", "01-results.md"),
                ("02-methods.md", "03-methods.md"),
                ("01-intro.md", "02-intro.md"),
            ]
        );
    }

    #[test]
    fn test_noop_when_already_in_place() {
        let plan = compute_reorder("02-methods.md", "01-intro.md", Position::After, &SIBLINGS);
        assert_eq!(plan, ReorderPlan::noop("02-methods.md"));
    }

    #[test]
    fn test_insert_from_other_directory() {
        let plan = compute_reorder(
            "other/external-file.md",
            "02-methods.md",
            Position::Before,
            &SIBLINGS,
        );
        assert_eq!(plan.new_path, "02-external-file.md");
        assert_eq!(
            renames(&plan),
            vec![
                ("03-results.md", "04-results.md"),
                ("02-methods.md", "03-methods.md"),
                ("other/external-file.md", "02-external-file.md"),
            ]
        );
    }

    #[test]
    fn test_numbered_source_from_other_directory_moves_last() {
        let siblings = ["01-intro.md", "02-b.md", "other/05-intro.md"];
        let plan = compute_reorder("other/05-intro.md", "01-intro.md", Position::Before, &siblings);
        assert_eq!(plan.new_path, "01-intro.md");
        assert_eq!(
            renames(&plan),
            vec![
                ("02-b.md", "03-b.md"),
                ("01-intro.md", "02-intro.md"),
                ("other/05-intro.md", "01-intro.md"),
            ]
        );

        let after = plan.simulate(&siblings).unwrap();
        assert!(after.contains("01-intro.md"));
        assert!(after.contains("02-intro.md"));
        assert!(!after.contains("other/05-intro.md"));
    }

    #[test]
    fn test_move_first_after_last() {
        let plan = compute_reorder("01-intro.md", "03-results.md", Position::After, &SIBLINGS);
        assert_eq!(plan.new_path, "03-intro.md");
        assert_eq!(
            renames(&plan),
            vec![
                ("01-intro.md", "03-intro.md"),
                ("02-methods.md", "01-methods.md"),
                ("03-results.md", "02-results.md"),
            ]
        );
    }

    #[test]
    fn test_move_down_one_slot() {
        let plan = compute_reorder("01-intro.md", "02-methods.md", Position::After, &SIBLINGS);
        assert_eq!(plan.new_path, "02-intro.md");
        assert_eq!(
            renames(&plan),
            vec![("01-intro.md", "02-intro.md"), ("02-methods.md", "01-methods.md")]
        );
    }

    #[test]
    fn test_move_down_onto_next_is_noop_in_effect() {
        // dropping right before the next sibling keeps the current slot
        let plan = compute_reorder("01-intro.md", "02-methods.md", Position::Before, &SIBLINGS);
        assert_eq!(plan.new_path, "01-intro.md");
        assert!(plan.is_noop());
    }

    #[test]
    fn test_inside_appends_after_max() {
        let siblings = ["docs/01-a.md", "docs/05-b.md", "docs/notes.md", "top.md"];
        let plan = compute_reorder("top.md", "docs", Position::Inside, &siblings);
        assert_eq!(plan.new_path, "docs/06-top.md");
        assert_eq!(renames(&plan), vec![("top.md", "docs/06-top.md")]);
    }

    #[test]
    fn test_inside_empty_folder() {
        let plan = compute_reorder("notes/draft.md", "02-docs", Position::Inside, &["02-docs"]);
        assert_eq!(plan.new_path, "02-docs/01-draft.md");
    }

    #[test]
    fn test_unnumbered_target_defaults_to_one() {
        let plan = compute_reorder("x/a.md", "readme.md", Position::Before, &SIBLINGS);
        assert_eq!(plan.new_path, "01-a.md");
        assert_eq!(plan.renames.len(), 4);

        let plan = compute_reorder("x/a.md", "readme.md", Position::After, &SIBLINGS);
        assert_eq!(plan.new_path, "01-a.md");
    }

    #[test]
    fn test_unnumbered_source_in_same_dir() {
        let siblings = ["01-intro.md", "02-methods.md", "appendix.md"];
        let plan = compute_reorder("appendix.md", "01-intro.md", Position::After, &siblings);
        assert_eq!(plan.new_path, "02-appendix.md");
        assert_eq!(
            renames(&plan),
            vec![("02-methods.md", "03-methods.md"), ("appendix.md", "02-appendix.md")]
        );
    }

    #[test]
    fn test_unnumbered_siblings_are_inert() {
        let siblings = ["01-a.md", "b.md", "02-c.md", "sub/01-d.md"];
        let plan = compute_reorder("02-c.md", "01-a.md", Position::Before, &siblings);
        assert_eq!(
            renames(&plan),
            vec![("02-c.md", "01-c.md"), ("01-a.md", "02-a.md")]
        );
    }

    #[test]
    fn test_folder_keeps_no_extension() {
        let siblings = ["01-intro.md", "02-guide", "03-api"];
        let plan = compute_reorder("03-api", "01-intro.md", Position::Before, &siblings);
        assert_eq!(plan.new_path, "01-api");
        assert!(plan.renames.contains(&Rename::new("02-guide", "03-guide")));
        assert!(plan.renames.contains(&Rename::new("01-intro.md", "02-intro.md")));
    }

    #[test]
    fn test_nested_directory_paths() {
        let siblings = ["02-docs/01-a.md", "02-docs/02-b.md", "02-docs/03-c.md"];
        let plan = compute_reorder("02-docs/03-c.md", "02-docs/02-b.md", Position::Before, &siblings);
        assert_eq!(plan.new_path, "02-docs/02-c.md");
        assert_eq!(
            renames(&plan),
            vec![("02-docs/03-c.md", "02-docs/02-c.md"), ("02-docs/02-b.md", "02-docs/03-b.md")]
        );
    }

    #[test]
    fn test_gaps_are_not_compacted() {
        let siblings = ["01-a.md", "05-b.md", "09-c.md"];
        let plan = compute_reorder("09-c.md", "05-b.md", Position::Before, &siblings);
        assert_eq!(plan.new_path, "05-c.md");
        assert_eq!(renames(&plan), vec![("09-c.md", "05-c.md"), ("05-b.md", "06-b.md")]);
    }

    #[test]
    fn test_padding_widens_past_99() {
        let siblings = ["99-a.md", "100-b.md"];
        let plan = compute_reorder("x/new.md", "99-a.md", Position::Before, &siblings);
        assert_eq!(
            renames(&plan),
            vec![
                ("100-b.md", "101-b.md"),
                ("99-a.md", "100-a.md"),
                ("x/new.md", "99-new.md"),
            ]
        );
    }

    #[test]
    fn test_underscore_prefix_normalized_to_hyphen() {
        let siblings = ["01_a.md", "02_b.md"];
        let plan = compute_reorder("02_b.md", "01_a.md", Position::Before, &siblings);
        assert_eq!(plan.new_path, "01-b.md");
        assert_eq!(renames(&plan), vec![("02_b.md", "01-b.md"), ("01_a.md", "02-a.md")]);
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        let empty: [&str; 0] = [];
        let plan = compute_reorder("", "", Position::Before, &empty);
        assert_eq!(plan.new_path, "01-");

        let plan = compute_reorder("a.md", "", Position::Inside, &["", "/", "01-x.md"]);
        assert_eq!(plan.new_path, "02-a.md");

        let plan = compute_reorder("x/a.md", "4294967295-max.md", Position::After, &empty);
        assert_eq!(plan.new_path, "4294967295-a.md");
    }

    #[test]
    fn test_zero_order_target() {
        let siblings = ["00-zero.md", "01-one.md"];
        let plan = compute_reorder("x/new.md", "00-zero.md", Position::Before, &siblings);
        assert_eq!(plan.new_path, "01-new.md");
    }

    #[test]
    fn test_case_selection() {
        let source = parse_path("docs/03-c.md");
        assert_eq!(
            ReorderCase::select(&source, "docs", 5),
            ReorderCase::SameDirDown { old_order: 3 }
        );
        assert_eq!(
            ReorderCase::select(&source, "docs", 1),
            ReorderCase::SameDirUp { old_order: 3 }
        );
        assert_eq!(ReorderCase::select(&source, "docs", 3), ReorderCase::NoOp);
        assert_eq!(
            ReorderCase::select(&source, "", 1),
            ReorderCase::CrossDirOrUnnumbered
        );
        assert_eq!(
            ReorderCase::select(&parse_path("docs/c.md"), "docs", 1),
            ReorderCase::CrossDirOrUnnumbered
        );
        assert!(ReorderCase::SameDirDown { old_order: 1 }.decreases_orders());
        assert!(!ReorderCase::CrossDirOrUnnumbered.decreases_orders());
    }

    #[test]
    fn test_compute_new_path() {
        let plan = compute_new_path("03-results.md", "01-intro.md", Position::Before);
        assert_eq!(plan.new_path, "01-results.md");
        assert_eq!(renames(&plan), vec![("03-results.md", "01-results.md")]);

        let plan = compute_new_path("03-results.md", "docs", Position::Inside);
        assert_eq!(plan.new_path, "docs/01-results.md");

        let plan = compute_new_path("a.md", "notes.md", Position::After);
        assert_eq!(plan.new_path, "01-a.md");

        let plan = compute_new_path("01-a.md", "x.md", Position::Before);
        assert!(plan.is_noop());
    }
}
