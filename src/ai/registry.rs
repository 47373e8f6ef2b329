//! Agent registry.
//!
//! Maps agent names to factory functions. The registry is built explicitly
//! by the caller at startup; nothing registers itself.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Ai, GreedyAi, RandomAi};

/// Factory function type for creating agents from a seed.
pub type AiFactory = fn(u64) -> Box<dyn Ai>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("agent '{0}' is already registered")]
    Duplicate(String),

    #[error("no agent named '{0}'")]
    Unknown(String),
}

/// Name to factory mapping for agents.
#[derive(Default, Clone)]
pub struct AiRegistry {
    factories: BTreeMap<String, AiFactory>,
}

impl AiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the bundled agents: `random` and `greedy`.
    pub fn with_builtins() -> Self {
        let factories = BTreeMap::from([
            ("random".to_string(), RandomAi::boxed as AiFactory),
            ("greedy".to_string(), GreedyAi::boxed as AiFactory),
        ]);
        AiRegistry { factories }
    }

    pub fn register(&mut self, name: &str, factory: AiFactory) -> Result<(), RegistryError> {
        if self.factories.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        debug!(name, "registered agent");
        self.factories.insert(name.to_string(), factory);
        Ok(())
    }

    /// Creates a fresh agent seeded with `seed`.
    pub fn create(&self, name: &str, seed: u64) -> Result<Box<dyn Ai>, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))?;
        Ok(factory(seed))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for AiRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let registry = AiRegistry::with_builtins();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["greedy", "random"]);
        assert_eq!(registry.create("random", 1).unwrap().name(), "random");
        assert_eq!(registry.create("greedy", 1).unwrap().name(), "greedy");
    }

    #[test]
    fn builtins_accept_custom_agents() {
        let mut registry = AiRegistry::with_builtins();
        registry.register("wanderer", RandomAi::boxed).unwrap();
        assert_eq!(registry.names().count(), 3);
        assert!(registry.contains("wanderer"));
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut registry = AiRegistry::with_builtins();
        let err = registry.register("random", RandomAi::boxed).unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("random".to_string()));
    }

    #[test]
    fn unknown_name_rejected() {
        let registry = AiRegistry::new();
        assert!(!registry.contains("random"));
        assert!(matches!(
            registry.create("random", 0),
            Err(RegistryError::Unknown(_))
        ));
    }
}
