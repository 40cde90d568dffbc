//! Bridges stack snapshots to the layout contract.

use crate::dismiss::CloseHandle;
use crate::layout::ModalLayout;
use crate::registry::ModalRegistry;
use crate::stack::StackSnapshot;

/// Fold the snapshot bottom to top into one rendered node.
///
/// Each entry's content is resolved from the registry and wrapped by the
/// layout with its derived depth and top flag; the collected layers are
/// wrapped once by the background. An empty snapshot composes to `None`:
/// the modal layer is fully absent, not merely transparent.
pub(crate) fn compose<N>(
    snapshot: &StackSnapshot,
    registry: &ModalRegistry<N>,
    layout: &dyn ModalLayout<N>,
    on_close: CloseHandle,
) -> Option<N> {
    if snapshot.is_empty() {
        return None;
    }
    let mut layers = Vec::with_capacity(snapshot.len());
    for entry in snapshot.entries() {
        // Pushes are validated against the registry, so a miss here is an
        // engine defect, not a caller error.
        debug_assert!(
            registry.contains(&entry.key),
            "stack entry `{}` missing from registry",
            entry.key
        );
        let Some(content) = registry.produce(&entry.key) else {
            log::error!("dropping stack entry `{}` with no registered content", entry.key);
            continue;
        };
        layers.push(layout.modal_wrap(content, entry.depth, entry.is_top));
    }
    Some(layout.background(layers, on_close))
}
