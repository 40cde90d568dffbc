use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use scrim::{CloseHandle, DismissHook, ModalLayout, ModalRegistry, Orchestrator};

struct Unit;

struct PassthroughLayout;

impl ModalLayout<Unit> for PassthroughLayout {
    fn modal_wrap(&self, content: Unit, _depth: usize, _is_top: bool) -> Unit {
        content
    }

    fn background(&self, _layers: Vec<Unit>, _on_close: CloseHandle) -> Unit {
        Unit
    }
}

/// Stand-in for a process-wide escape listener: counts installs and
/// removals and keeps the handle the way a real key listener would.
#[derive(Clone, Default)]
struct CountingHook {
    installs: Arc<AtomicUsize>,
    removals: Arc<AtomicUsize>,
    handle: Arc<Mutex<Option<CloseHandle>>>,
}

impl CountingHook {
    fn installs(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }

    fn removals(&self) -> usize {
        self.removals.load(Ordering::SeqCst)
    }

    /// Simulate one escape-key activation.
    fn press_escape(&self) {
        let handle = self.handle.lock().unwrap().clone();
        if let Some(handle) = handle {
            handle.close();
        }
    }
}

impl DismissHook for CountingHook {
    fn install(&mut self, on_close: CloseHandle) {
        self.installs.fetch_add(1, Ordering::SeqCst);
        *self.handle.lock().unwrap() = Some(on_close);
    }

    fn remove(&mut self) {
        self.removals.fetch_add(1, Ordering::SeqCst);
        self.handle.lock().unwrap().take();
    }
}

fn orchestrator(hook: CountingHook) -> Orchestrator<Unit> {
    let registry = ModalRegistry::builder()
        .modal("a", || Unit)
        .modal("b", || Unit)
        .build();
    Orchestrator::new(registry, PassthroughLayout).with_dismiss_hook(hook)
}

#[test]
fn hook_installs_once_per_open_period() {
    let hook = CountingHook::default();
    let modal = orchestrator(hook.clone());

    assert_eq!(hook.installs(), 0);

    modal.push("a").unwrap();
    assert_eq!(hook.installs(), 1);

    // Nesting a second modal must not re-install.
    modal.push("b").unwrap();
    assert_eq!(hook.installs(), 1);
    assert_eq!(hook.removals(), 0);

    modal.pop();
    assert_eq!(hook.removals(), 0);

    modal.pop();
    assert_eq!(hook.removals(), 1);

    // Reopening starts a fresh period.
    modal.push("a").unwrap();
    assert_eq!(hook.installs(), 2);
}

#[test]
fn escape_dismisses_only_the_top_entry() {
    let hook = CountingHook::default();
    let modal = orchestrator(hook.clone());

    modal.push("a").unwrap();
    modal.push("b").unwrap();

    hook.press_escape();
    assert!(modal.view().is_some());
    assert_eq!(hook.removals(), 0);

    hook.press_escape();
    assert!(modal.view().is_none());
    assert_eq!(hook.removals(), 1);
}

#[test]
fn escape_with_nothing_open_is_a_noop() {
    let hook = CountingHook::default();
    let modal = orchestrator(hook.clone());

    hook.press_escape();
    assert!(modal.view().is_none());
    assert_eq!(hook.installs(), 0);
    assert_eq!(hook.removals(), 0);
}

#[test]
fn speculative_pop_never_touches_the_hook() {
    let hook = CountingHook::default();
    let modal = orchestrator(hook.clone());

    modal.pop();
    modal.pop();
    assert_eq!(hook.installs(), 0);
    assert_eq!(hook.removals(), 0);
}

#[test]
fn teardown_while_open_releases_the_listener() {
    let hook = CountingHook::default();
    let modal = orchestrator(hook.clone());

    modal.push("a").unwrap();
    assert_eq!(hook.installs(), 1);

    drop(modal);
    assert_eq!(hook.removals(), 1);
}

#[test]
fn hook_attached_while_open_installs_immediately() {
    let hook = CountingHook::default();
    let registry = ModalRegistry::builder().modal("a", || Unit).build();
    let modal = Orchestrator::new(registry, PassthroughLayout);

    modal.push("a").unwrap();
    let modal = modal.with_dismiss_hook(hook.clone());
    assert_eq!(hook.installs(), 1);

    modal.pop();
    assert_eq!(hook.removals(), 1);
}
