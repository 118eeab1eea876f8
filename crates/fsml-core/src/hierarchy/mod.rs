use std::collections::HashSet;

use crate::config::NavConfig;
use crate::model::NavNode;
use crate::order::sort_paths;
use crate::parser::parse_path;

mod arena;

use arena::FolderArena;

/// Build a navigation tree from a flat list of relative paths.
///
/// Hidden (`_`) and system (`.`) trees and the root manifest are dropped.
/// Folders are synthesized for every directory that contains a surviving
/// path; index files mark their folder with `has_index` instead of showing up
/// as nodes.
///
/// # Examples
///
/// ```
/// use fsml_core::{build_nav_tree, NavConfig};
///
/// let tree = build_nav_tree(
///     &["mrmd.md", "01-intro.md", "02-docs/index.md", "02-docs/01-a.md"],
///     &NavConfig::default(),
/// );
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree[1].path, "02-docs");
/// assert!(tree[1].has_index);
/// assert_eq!(tree[1].children.len(), 1);
/// ```
pub fn build_nav_tree<S: AsRef<str>>(paths: &[S], config: &NavConfig) -> Vec<NavNode> {
    let visible: Vec<&str> = paths
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| {
            let parsed = parse_path(p);
            let is_manifest =
                parsed.depth == 0 && config.is_root_manifest(parsed.path.trim_start_matches('/'));
            !parsed.is_hidden && !parsed.is_system && !is_manifest
        })
        .collect();

    let sorted = sort_paths(&visible);
    let mut arena = FolderArena::default();

    // First pass: synthesize folders and flag index files
    let mut entries = Vec::with_capacity(sorted.len());
    for path in &sorted {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(&filename) = segments.last() else {
            continue;
        };

        let parent = arena.ensure_ancestors(&segments);
        let is_index = config.is_index_file(filename);
        if is_index {
            if let Some(idx) = parent {
                arena.mark_index(idx);
            }
        }
        entries.push((segments, parent, is_index));
    }

    // Second pass: attach leaves
    let mut seen = HashSet::new();
    for (segments, parent, is_index) in entries {
        if is_index {
            continue;
        }
        let path = segments.join("/");
        if arena.contains(&path) || !seen.insert(path.clone()) {
            continue;
        }

        let parsed = parse_path(&path);
        arena.attach_leaf(
            parent,
            NavNode {
                path,
                title: parsed.title,
                order: parsed.order,
                is_folder: false,
                has_index: false,
                children: Vec::new(),
            },
        );
    }

    log::debug!(
        "nav tree: kept {} of {} paths, synthesized {} folders",
        visible.len(),
        paths.len(),
        arena.folder_count()
    );

    // Third pass: link folders, then sort and materialize
    arena.attach_folders();
    arena.into_forest()
}

/// [`build_nav_tree`] with the default index filenames and root manifest
pub fn build_nav_tree_default<S: AsRef<str>>(paths: &[S]) -> Vec<NavNode> {
    build_nav_tree(paths, &NavConfig::default())
}
