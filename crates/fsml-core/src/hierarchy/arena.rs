use std::collections::HashMap;

use crate::model::NavNode;
use crate::order::compare_ordered;
use crate::parser::segment_order;
use crate::title::title_from_filename;

/// Child reference inside a folder record
enum Slot {
    Leaf(NavNode),
    Folder(usize),
}

struct FolderRecord {
    path: String,
    title: String,
    order: Option<u32>,
    has_index: bool,
    depth: usize,
    parent: Option<usize>,
    slots: Vec<Slot>,
}

/// Folder records keyed by directory path.
///
/// Records are only ever created after their parent, so a record's index is
/// always greater than its parent's. Materialization walks the records in
/// reverse depth order and never recurses.
#[derive(Default)]
pub(crate) struct FolderArena {
    records: Vec<FolderRecord>,
    by_path: HashMap<String, usize>,
    root: Vec<Slot>,
}

impl FolderArena {
    /// Make sure a record exists for every proper ancestor of `segments`.
    /// Returns the index of the innermost one (the immediate parent).
    pub(crate) fn ensure_ancestors(&mut self, segments: &[&str]) -> Option<usize> {
        let (_, ancestors) = segments.split_last()?;
        let mut parent = None;
        let mut path = String::new();

        for (depth, segment) in ancestors.iter().enumerate() {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment);

            let idx = match self.by_path.get(&path) {
                Some(&idx) => idx,
                None => {
                    let idx = self.records.len();
                    self.records.push(FolderRecord {
                        path: path.clone(),
                        title: title_from_filename(segment),
                        order: segment_order(segment),
                        has_index: false,
                        depth,
                        parent,
                        slots: Vec::new(),
                    });
                    self.by_path.insert(path.clone(), idx);
                    idx
                }
            };
            parent = Some(idx);
        }

        parent
    }

    pub(crate) fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    pub(crate) fn mark_index(&mut self, idx: usize) {
        self.records[idx].has_index = true;
    }

    pub(crate) fn folder_count(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn attach_leaf(&mut self, parent: Option<usize>, node: NavNode) {
        match parent {
            Some(idx) => self.records[idx].slots.push(Slot::Leaf(node)),
            None => self.root.push(Slot::Leaf(node)),
        }
    }

    /// Link every folder to its parent, shallowest first
    pub(crate) fn attach_folders(&mut self) {
        let mut by_depth: Vec<usize> = (0..self.records.len()).collect();
        by_depth.sort_by_key(|&idx| self.records[idx].depth);

        for idx in by_depth {
            let parent = self.records[idx].parent;
            match parent {
                Some(parent) => self.records[parent].slots.push(Slot::Folder(idx)),
                None => self.root.push(Slot::Folder(idx)),
            }
        }
    }

    /// Turn the arena into an owned forest with every child list sorted
    pub(crate) fn into_forest(self) -> Vec<NavNode> {
        let FolderArena { records, root, .. } = self;

        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by(|&a, &b| records[b].depth.cmp(&records[a].depth));

        let mut pending: Vec<Option<FolderRecord>> = records.into_iter().map(Some).collect();
        let mut finished: Vec<Option<NavNode>> = (0..pending.len()).map(|_| None).collect();

        for idx in order {
            let Some(record) = pending[idx].take() else {
                continue;
            };
            let children = resolve_slots(record.slots, &mut finished);
            finished[idx] = Some(NavNode {
                path: record.path,
                title: record.title,
                order: record.order,
                is_folder: true,
                has_index: record.has_index,
                children,
            });
        }

        resolve_slots(root, &mut finished)
    }
}

fn resolve_slots(slots: Vec<Slot>, finished: &mut [Option<NavNode>]) -> Vec<NavNode> {
    let mut nodes: Vec<NavNode> = slots
        .into_iter()
        .filter_map(|slot| match slot {
            Slot::Leaf(node) => Some(node),
            Slot::Folder(idx) => finished[idx].take(),
        })
        .collect();
    sort_siblings(&mut nodes);
    nodes
}

/// Numbered first, ascending; unnumbered by title
pub(crate) fn sort_siblings(nodes: &mut [NavNode]) {
    nodes.sort_by(|a, b| compare_ordered(a.order, b.order).unwrap_or_else(|| a.title.cmp(&b.title)));
}
