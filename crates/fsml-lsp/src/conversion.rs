//! Conversion utilities between Core types and LSP types

use std::path::Path;

use fsml_core::ReorderPlan;
use tower_lsp::lsp_types::{
    DocumentChangeOperation, DocumentChanges, RenameFile, RenameFileOptions, ResourceOp,
    WorkspaceEdit,
};
use url::Url;

/// Resolve a workspace-relative path (or an absolute `file://` URI) to a URI
pub fn relative_to_uri(root: &Path, relative: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(relative) {
        if url.scheme() == "file" {
            return Some(url);
        }
    }

    let relative = relative.trim_start_matches(['/', '\\']).trim_end_matches('/');
    Url::from_file_path(root.join(relative)).ok()
}

/// Convert a reorder plan into one `WorkspaceEdit` of `RenameFile` operations.
///
/// Operation order matches `plan.renames`; clients apply `documentChanges`
/// sequentially. Returns `None` when a path cannot be expressed as a URI.
pub fn reorder_plan_to_workspace_edit(plan: &ReorderPlan, root: &Path) -> Option<WorkspaceEdit> {
    let mut document_changes = Vec::with_capacity(plan.renames.len());

    for rename in &plan.renames {
        let op = ResourceOp::Rename(RenameFile {
            old_uri: relative_to_uri(root, &rename.from)?,
            new_uri: relative_to_uri(root, &rename.to)?,
            options: Some(RenameFileOptions {
                overwrite: Some(false),
                ignore_if_exists: Some(false),
            }),
            annotation_id: None,
        });
        document_changes.push(DocumentChangeOperation::Op(op));
    }

    Some(WorkspaceEdit {
        changes: None,
        document_changes: Some(DocumentChanges::Operations(document_changes)),
        change_annotations: None,
    })
}
