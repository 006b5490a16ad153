//! Generator registry for managing site generators

use std::collections::HashMap;
use std::sync::Arc;
use log::{info, debug};

use super::Generator;
use crate::builder::site::Site;
use crate::utils::error::BoxResult;

/// Registry for managing generators
#[derive(Default)]
pub struct GeneratorRegistry {
    /// Generators indexed by name
    generators: HashMap<String, Arc<dyn Generator>>,
    /// Registration order (ties between equal priorities)
    load_order: Vec<String>,
}

impl GeneratorRegistry {
    /// Create a new generator registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator
    pub fn register(&mut self, generator: Arc<dyn Generator>) -> Result<(), String> {
        let name = generator.name().to_string();

        if self.generators.contains_key(&name) {
            return Err(format!("Generator '{}' is already registered", name));
        }

        info!("Registering generator: {}", name);
        self.load_order.push(name.clone());
        self.generators.insert(name, generator);

        Ok(())
    }

    /// Unregister a generator
    pub fn unregister(&mut self, name: &str) -> Result<(), String> {
        if self.generators.remove(name).is_none() {
            return Err(format!("Generator '{}' is not registered", name));
        }

        info!("Unregistering generator: {}", name);
        self.load_order.retain(|n| n != name);

        Ok(())
    }

    /// Get a generator by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Generator>> {
        self.generators.get(name).cloned()
    }

    /// Generators in run order: priority first, then registration order
    pub fn generators(&self) -> Vec<Arc<dyn Generator>> {
        let mut ordered: Vec<Arc<dyn Generator>> = self
            .load_order
            .iter()
            .filter_map(|name| self.generators.get(name).cloned())
            .collect();
        ordered.sort_by_key(|generator| std::cmp::Reverse(generator.priority()));
        ordered
    }

    /// Run every generator against the site, stopping at the first error.
    ///
    /// In safe mode generators that are not marked safe are skipped.
    pub fn run(&self, site: &mut Site) -> BoxResult<()> {
        let safe_mode = site.config.safe_mode;

        for generator in self.generators() {
            if safe_mode && !generator.safe() {
                debug!("Skipping unsafe generator in safe mode: {}", generator.name());
                continue;
            }

            debug!("Running generator: {}", generator.name());
            generator.generate(site)?;
        }

        Ok(())
    }

    /// Get the number of registered generators
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::plugins::Priority;

    struct Recorder {
        name: &'static str,
        priority: Priority,
        safe: bool,
    }

    impl Generator for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> Priority {
            self.priority
        }

        fn safe(&self) -> bool {
            self.safe
        }

        fn generate(&self, site: &mut Site) -> BoxResult<()> {
            site.config.include.push(self.name.to_string());
            Ok(())
        }
    }

    fn recorder(name: &'static str, priority: Priority, safe: bool) -> Arc<dyn Generator> {
        Arc::new(Recorder { name, priority, safe })
    }

    fn empty_site(safe_mode: bool) -> Site {
        let config = Config {
            include: Vec::new(),
            safe_mode,
            ..Config::default()
        };
        Site::with_converters(config, Vec::new())
    }

    #[test]
    fn test_registry_operations() {
        let mut registry = GeneratorRegistry::new();
        assert!(registry.is_empty());

        let generator = recorder("test", Priority::Normal, true);

        // Register generator
        assert!(registry.register(generator.clone()).is_ok());
        assert_eq!(registry.len(), 1);

        // Get generator
        assert!(registry.get("test").is_some());

        // Try to register duplicate
        assert!(registry.register(generator).is_err());

        // Unregister generator
        assert!(registry.unregister("test").is_ok());
        assert!(registry.is_empty());

        // Try to unregister non-existent
        assert!(registry.unregister("test").is_err());
    }

    #[test]
    fn test_run_order() {
        let mut registry = GeneratorRegistry::new();
        registry.register(recorder("first_normal", Priority::Normal, true)).unwrap();
        registry.register(recorder("low", Priority::Low, true)).unwrap();
        registry.register(recorder("high", Priority::High, true)).unwrap();
        registry.register(recorder("second_normal", Priority::Normal, true)).unwrap();

        let mut site = empty_site(false);
        registry.run(&mut site).unwrap();

        assert_eq!(
            site.config.include,
            vec!["high", "first_normal", "second_normal", "low"]
        );
    }

    #[test]
    fn test_safe_mode_skips_unsafe_generators() {
        let mut registry = GeneratorRegistry::new();
        registry.register(recorder("trusted", Priority::Normal, true)).unwrap();
        registry.register(recorder("untrusted", Priority::Normal, false)).unwrap();

        let mut site = empty_site(true);
        registry.run(&mut site).unwrap();
        assert_eq!(site.config.include, vec!["trusted"]);

        let mut site = empty_site(false);
        registry.run(&mut site).unwrap();
        assert_eq!(site.config.include, vec!["trusted", "untrusted"]);
    }
}
