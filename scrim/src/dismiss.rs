//! Dismissal coordination: the close handle and the escape-key seam.
//!
//! All dismissal triggers (backdrop activation, escape key, programmatic
//! pop) funnel into the same [`CloseHandle`], which removes exactly one
//! entry per activation. The host's process-wide escape listener plugs in
//! through [`DismissHook`]; the engine installs it exactly once when the
//! stack leaves `Empty` and removes it exactly once when it returns there.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::stack::{ModalKey, ModalStack, SequenceId, StackSnapshot};

/// Host seam for the process-wide escape-key listener.
///
/// `install` and `remove` mirror the stack's `Empty <-> Open` transitions
/// one-to-one; nesting further modals while open never re-installs. The
/// callbacks run while the engine's internal state is held, so they must
/// not re-enter the orchestrator synchronously; defer the actual dismissal
/// to the host's event dispatch and call [`CloseHandle::close`] from there.
pub trait DismissHook: Send {
    /// Called once when the first modal opens.
    fn install(&mut self, on_close: CloseHandle);

    /// Called once when the last modal closes.
    fn remove(&mut self);
}

/// Cloneable trigger that dismisses the current top entry.
///
/// Each activation pops at most one entry; activating with nothing open is
/// a no-op. The handle holds only a weak reference to the engine, so one
/// retained by a host listener after teardown degrades to a no-op instead
/// of keeping the engine alive.
#[derive(Clone)]
pub struct CloseHandle {
    core: Weak<StackCore>,
}

impl CloseHandle {
    /// Dismiss the top entry, if any.
    pub fn close(&self) {
        if let Some(core) = self.core.upgrade() {
            core.pop();
        }
    }
}

impl fmt::Debug for CloseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseHandle").finish_non_exhaustive()
    }
}

struct HookState {
    hook: Option<Box<dyn DismissHook>>,
    installed: bool,
}

/// Shared mutation core: the stack plus the listener state that must stay
/// in lockstep with it.
pub(crate) struct StackCore {
    weak: Weak<StackCore>,
    stack: Mutex<ModalStack>,
    hook: Mutex<HookState>,
}

impl StackCore {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new_cyclic(|weak| Self {
            weak: weak.clone(),
            stack: Mutex::new(ModalStack::new()),
            hook: Mutex::new(HookState {
                hook: None,
                installed: false,
            }),
        })
    }

    pub(crate) fn close_handle(&self) -> CloseHandle {
        CloseHandle {
            core: self.weak.clone(),
        }
    }

    /// Attach the host's dismiss hook. Expected before the first push; if
    /// modals are already open the hook is installed immediately so the
    /// mirror invariant holds.
    pub(crate) fn set_hook(&self, mut hook: Box<dyn DismissHook>) {
        let is_open = !self.lock_stack().is_empty();
        let mut state = self.lock_hook();
        debug_assert!(state.hook.is_none(), "dismiss hook attached twice");
        if is_open {
            hook.install(self.close_handle());
            state.installed = true;
        }
        state.hook = Some(hook);
    }

    pub(crate) fn push(&self, key: ModalKey) -> SequenceId {
        let (sequence, was_empty) = {
            let mut stack = self.lock_stack();
            let was_empty = stack.is_empty();
            (stack.push(key), was_empty)
        };
        self.sync_hook(was_empty, false);
        sequence
    }

    pub(crate) fn pop(&self) {
        let (was_empty, now_empty) = {
            let mut stack = self.lock_stack();
            let was_empty = stack.is_empty();
            stack.pop();
            (was_empty, stack.is_empty())
        };
        self.sync_hook(was_empty, now_empty);
    }

    pub(crate) fn snapshot(&self) -> StackSnapshot {
        self.lock_stack().snapshot()
    }

    pub(crate) fn revision(&self) -> u64 {
        self.lock_stack().revision()
    }

    fn lock_stack(&self) -> MutexGuard<'_, ModalStack> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_hook(&self) -> MutexGuard<'_, HookState> {
        self.hook.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mirror an `Empty <-> Open` transition onto the dismiss hook.
    fn sync_hook(&self, was_empty: bool, now_empty: bool) {
        if was_empty == now_empty {
            return;
        }
        let mut state = self.lock_hook();
        let HookState { hook, installed } = &mut *state;
        let Some(hook) = hook.as_mut() else {
            return;
        };
        if now_empty {
            debug_assert!(*installed, "dismiss hook removed while absent");
            hook.remove();
            *installed = false;
            log::debug!("dismiss hook removed");
        } else {
            debug_assert!(!*installed, "dismiss hook installed twice");
            hook.install(self.close_handle());
            *installed = true;
            log::debug!("dismiss hook installed");
        }
    }
}

impl Drop for StackCore {
    fn drop(&mut self) {
        // Teardown while open must still release the host listener.
        let state = self
            .hook
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if state.installed
            && let Some(hook) = state.hook.as_mut()
        {
            hook.remove();
            state.installed = false;
        }
    }
}
