//! Immutable mapping from modal keys to content factories.
//!
//! A registry is assembled once through [`RegistryBuilder`] and never
//! mutated afterwards; it must cover every key later referenced by a push.

use std::collections::HashMap;
use std::fmt;

use crate::stack::ModalKey;

type ContentFactory<N> = Box<dyn Fn() -> N + Send + Sync>;

/// Mapping from [`ModalKey`] to a zero-argument content factory.
///
/// Generic over the host's node type `N`; the engine never inspects the
/// produced content, it only hands it to the layout.
pub struct ModalRegistry<N> {
    factories: HashMap<ModalKey, ContentFactory<N>>,
    order: Vec<ModalKey>,
}

impl<N> ModalRegistry<N> {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder<N> {
        RegistryBuilder {
            factories: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Whether `key` has a registered factory.
    pub fn contains(&self, key: &ModalKey) -> bool {
        self.factories.contains_key(key)
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &ModalKey> {
        self.order.iter()
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Produce fresh content for `key`, or `None` if the key is unknown.
    pub fn produce(&self, key: &ModalKey) -> Option<N> {
        self.factories.get(key).map(|factory| factory())
    }
}

impl<N> fmt::Debug for ModalRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalRegistry")
            .field("keys", &self.order)
            .finish()
    }
}

/// Builder for [`ModalRegistry`].
pub struct RegistryBuilder<N> {
    factories: HashMap<ModalKey, ContentFactory<N>>,
    order: Vec<ModalKey>,
}

impl<N> RegistryBuilder<N> {
    /// Register a content factory under `key`.
    ///
    /// Registering the same key twice replaces the earlier factory; the
    /// key keeps its original position in registration order.
    pub fn modal(
        mut self,
        key: impl Into<ModalKey>,
        factory: impl Fn() -> N + Send + Sync + 'static,
    ) -> Self {
        let key = key.into();
        if self.factories.insert(key.clone(), Box::new(factory)).is_none() {
            self.order.push(key);
        }
        self
    }

    /// Finish the registry.
    pub fn build(self) -> ModalRegistry<N> {
        ModalRegistry {
            factories: self.factories,
            order: self.order,
        }
    }
}

impl<N> Default for RegistryBuilder<N> {
    fn default() -> Self {
        ModalRegistry::builder()
    }
}
