//! The per-key push / top-level pop surface applications touch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::compose::compose;
use crate::dismiss::{DismissHook, StackCore};
use crate::error::OrchestratorError;
use crate::layout::ModalLayout;
use crate::registry::ModalRegistry;
use crate::stack::ModalKey;

/// The orchestration facade: one push handle per registered key plus a
/// top-level pop.
///
/// Constructed from an immutable registry and a layout; neither can be
/// swapped afterwards (build a new facade to change presets). The facade
/// holds no state of its own beyond shared references, so cloning it is
/// cheap and every clone drives the same stack.
pub struct Orchestrator<N> {
    core: Arc<StackCore>,
    registry: Arc<ModalRegistry<N>>,
    layout: Arc<dyn ModalLayout<N>>,
    handles: HashMap<ModalKey, ModalHandle>,
}

impl<N> Orchestrator<N> {
    /// Build a facade over `registry`, composing through `layout`.
    ///
    /// Push handles are derived once from the registry's key set; unknown
    /// keys are rejected at lookup rather than at push time.
    pub fn new(registry: ModalRegistry<N>, layout: impl ModalLayout<N> + 'static) -> Self {
        let core = StackCore::new();
        let handles = registry
            .keys()
            .cloned()
            .map(|key| {
                let handle = ModalHandle {
                    key: key.clone(),
                    core: Arc::clone(&core),
                };
                (key, handle)
            })
            .collect();
        Self {
            core,
            registry: Arc::new(registry),
            layout: Arc::new(layout),
            handles,
        }
    }

    /// Attach the host's escape-key listener seam.
    ///
    /// Expected at construction time, before the first push.
    pub fn with_dismiss_hook(self, hook: impl DismissHook + 'static) -> Self {
        self.core.set_hook(Box::new(hook));
        self
    }

    /// The push handle for `key`.
    pub fn modal(&self, key: impl Into<ModalKey>) -> Result<&ModalHandle, OrchestratorError> {
        let key = key.into();
        self.handles
            .get(&key)
            .ok_or(OrchestratorError::UnknownKey { key })
    }

    /// All push handles, in registration order.
    pub fn handles(&self) -> impl Iterator<Item = &ModalHandle> {
        self.registry
            .keys()
            .filter_map(|key| self.handles.get(key))
    }

    /// Open the modal registered under `key`.
    ///
    /// Fails fast on unknown keys and leaves the stack unchanged.
    pub fn push(&self, key: impl Into<ModalKey>) -> Result<(), OrchestratorError> {
        let key = key.into();
        if !self.registry.contains(&key) {
            return Err(OrchestratorError::UnknownKey { key });
        }
        self.core.push(key);
        Ok(())
    }

    /// Dismiss the top modal. A no-op when nothing is open.
    pub fn pop(&self) {
        self.core.pop();
    }

    /// Compose the currently open stack into one rendered node.
    ///
    /// Returns `None` while the stack is empty: the modal layer must be
    /// fully absent so it cannot intercept input when unused.
    pub fn view(&self) -> Option<N> {
        let snapshot = self.core.snapshot();
        compose(
            &snapshot,
            &self.registry,
            self.layout.as_ref(),
            self.core.close_handle(),
        )
    }

    /// Monotonic change counter for cheap host-side diffing.
    pub fn revision(&self) -> u64 {
        self.core.revision()
    }
}

impl<N> Clone for Orchestrator<N> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            registry: Arc::clone(&self.registry),
            layout: Arc::clone(&self.layout),
            handles: self.handles.clone(),
        }
    }
}

impl<N> fmt::Debug for Orchestrator<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Push handle for one registered key.
///
/// Created at facade construction, so pushing through a handle cannot
/// reference an unknown key.
#[derive(Clone)]
pub struct ModalHandle {
    key: ModalKey,
    core: Arc<StackCore>,
}

impl ModalHandle {
    /// The key this handle opens.
    pub fn key(&self) -> &ModalKey {
        &self.key
    }

    /// Open this modal on top of the stack.
    pub fn push(&self) {
        self.core.push(self.key.clone());
    }
}

impl fmt::Debug for ModalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalHandle")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
