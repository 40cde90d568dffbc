//! The ordered stack of currently open modals.
//!
//! Index 0 is the bottom (first opened), the last index is the top (most
//! recently opened, currently interactive). The stack owns push/pop/clear
//! semantics; rendering reads it through [`StackSnapshot`].

use std::fmt;
use std::sync::Arc;

/// Identifier for a modal's content, unique within a registry.
///
/// Keys are opaque to the engine and cheap to clone; they only gain meaning
/// when resolved against a [`ModalRegistry`](crate::registry::ModalRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModalKey(Arc<str>);

impl ModalKey {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModalKey {
    fn from(key: &str) -> Self {
        Self(Arc::from(key))
    }
}

impl From<String> for ModalKey {
    fn from(key: String) -> Self {
        Self(Arc::from(key))
    }
}

impl fmt::Display for ModalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order of a push within one stack's lifetime.
///
/// Assigned from a monotonically increasing counter, so two entries sharing
/// a key are still distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceId(u64);

impl SequenceId {
    /// Get the raw counter value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// One element of the stack. Immutable once created; a pop removes the
/// entry but never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalEntry {
    key: ModalKey,
    sequence: SequenceId,
}

impl ModalEntry {
    /// The registry key this entry renders.
    pub fn key(&self) -> &ModalKey {
        &self.key
    }

    /// The push order this entry was created with.
    pub fn sequence(&self) -> SequenceId {
        self.sequence
    }
}

/// Ordered sequence of open modal entries.
///
/// # Invariants
///
/// - Insertion order is preserved; no reordering operation exists.
/// - When non-empty, exactly the last entry is the interactive top.
/// - Sequence ids are strictly increasing across pushes.
#[derive(Debug, Default)]
pub struct ModalStack {
    entries: Vec<ModalEntry>,
    next_sequence: u64,
    revision: u64,
}

impl ModalStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for `key` with a fresh sequence id.
    ///
    /// The previous top entry, if any, loses interactivity. Pushing a key
    /// that is already open yields a second, independent entry.
    pub fn push(&mut self, key: ModalKey) -> SequenceId {
        let sequence = SequenceId(self.next_sequence);
        self.next_sequence += 1;
        self.revision += 1;
        log::debug!("push `{key}` as entry {} (depth {})", sequence.0, self.entries.len());
        self.entries.push(ModalEntry { key, sequence });
        sequence
    }

    /// Remove and return the top entry.
    ///
    /// Popping an empty stack is a no-op, not an error: dismissal triggers
    /// fire speculatively.
    pub fn pop(&mut self) -> Option<ModalEntry> {
        let entry = self.entries.pop()?;
        self.revision += 1;
        log::debug!("pop `{}` ({} remaining)", entry.key, self.entries.len());
        Some(entry)
    }

    /// Empty the stack unconditionally. Returns how many entries were open.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        if dropped > 0 {
            self.entries.clear();
            self.revision += 1;
            log::debug!("cleared {dropped} entries");
        }
        dropped
    }

    /// Number of open entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no modal is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The interactive top entry, if any.
    pub fn top(&self) -> Option<&ModalEntry> {
        self.entries.last()
    }

    /// Monotonic change counter. Bumped by every mutation that changes
    /// contents; a pop on an empty stack leaves it untouched.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Produce an immutable, ordered view with derived depth and top flags.
    pub fn snapshot(&self) -> StackSnapshot {
        let len = self.entries.len();
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| SnapshotEntry {
                key: entry.key.clone(),
                sequence: entry.sequence,
                depth: len - 1 - index,
                is_top: index + 1 == len,
            })
            .collect();
        StackSnapshot {
            entries,
            revision: self.revision,
        }
    }
}

/// One entry of a [`StackSnapshot`], enriched for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    /// The registry key this entry renders.
    pub key: ModalKey,
    /// The push order this entry was created with.
    pub sequence: SequenceId,
    /// Distance from the top of the stack; the top entry is at 0.
    pub depth: usize,
    /// Whether this entry is the interactive top.
    pub is_top: bool,
}

/// Immutable, ordered view of the stack at one observation point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSnapshot {
    entries: Vec<SnapshotEntry>,
    revision: u64,
}

impl StackSnapshot {
    /// Entries from bottom (first opened) to top.
    pub fn entries(&self) -> impl Iterator<Item = &SnapshotEntry> {
        self.entries.iter()
    }

    /// Number of open entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot observed an empty stack.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The interactive top entry, if any.
    pub fn top(&self) -> Option<&SnapshotEntry> {
        self.entries.last()
    }

    /// The stack revision this snapshot was taken at.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
