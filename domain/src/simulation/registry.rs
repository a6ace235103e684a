//! Handler registry: `HandlerKey → ActionHandler` table
//!
//! Built once at start-up and read-only afterwards. Registration rejects a
//! key that is already claimed, so every key maps to exactly one handler.

use super::handler::ActionHandler;
use crate::core::error::DomainError;
use crate::tool::entities::HandlerKey;
use std::collections::HashMap;
use std::sync::Arc;

/// Table of simulation handlers keyed by `(tool_name, action)`
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<HandlerKey, Arc<dyn ActionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler (builder pattern)
    ///
    /// Fails with [`DomainError::DuplicateHandler`] if the key is taken.
    pub fn register<H: ActionHandler + 'static>(
        self,
        key: HandlerKey,
        handler: H,
    ) -> Result<Self, DomainError> {
        self.register_arc(key, Arc::new(handler))
    }

    /// Register a handler (Arc version)
    pub fn register_arc(
        mut self,
        key: HandlerKey,
        handler: Arc<dyn ActionHandler>,
    ) -> Result<Self, DomainError> {
        if self.handlers.contains_key(&key) {
            return Err(DomainError::DuplicateHandler(key));
        }
        self.handlers.insert(key, handler);
        Ok(self)
    }

    pub fn get(&self, key: &HandlerKey) -> Option<&Arc<dyn ActionHandler>> {
        self.handlers.get(key)
    }

    pub fn contains(&self, key: &HandlerKey) -> bool {
        self.handlers.contains_key(key)
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<&HandlerKey> {
        let mut keys: Vec<&HandlerKey> = self.handlers.keys().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}
