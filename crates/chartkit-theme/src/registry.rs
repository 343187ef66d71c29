//! Theme registration and live switching.
//!
//! The registry keeps two structures with different access patterns. The
//! table map behind an `RwLock` changes only when themes are registered.
//! The active color set sits in an `ArcSwap`: chart code on hot paths
//! loads a snapshot without taking a lock, and [`ThemeRegistry::activate`]
//! publishes a fully built replacement in one atomic store. Mutators keep
//! holding the table lock across that store; registration takes it
//! exclusively, so its refresh of the active set cannot interleave with
//! an activation. A snapshot handed out before a switch stays valid and
//! internally consistent for as long as the caller holds it.

use std::sync::{Arc, RwLock};

use ahash::AHashMap;
use arc_swap::ArcSwap;

use crate::builtin::{BUILTIN_THEMES, DEFAULT_TABLE, DEFAULT_THEME};
use crate::error::{Result, ThemeError};
use crate::set::ActiveColorSet;
use crate::table::ThemeTable;

/// Registered theme tables plus the currently active color set.
pub struct ThemeRegistry {
    inner: RwLock<RegistryInner>,
    current: ArcSwap<ActiveColorSet>,
}

struct RegistryInner {
    tables: AHashMap<String, ThemeTable>,
    /// Names in registration order, for stable listings.
    order: Vec<String>,
}

impl ThemeRegistry {
    /// A registry preloaded with the built-in themes, with the default
    /// theme active.
    pub fn with_defaults() -> Self {
        let mut tables = AHashMap::with_capacity(BUILTIN_THEMES.len());
        let mut order = Vec::with_capacity(BUILTIN_THEMES.len());
        for (name, table) in BUILTIN_THEMES {
            tables.insert(name.to_string(), table);
            order.push(name.to_string());
        }
        let current = ActiveColorSet::from_table(DEFAULT_THEME, &DEFAULT_TABLE);
        Self {
            inner: RwLock::new(RegistryInner { tables, order }),
            current: ArcSwap::from_pointee(current),
        }
    }

    /// The active color set.
    ///
    /// The returned snapshot never changes; call again after
    /// [`activate`](Self::activate) to observe a switch.
    pub fn current(&self) -> Arc<ActiveColorSet> {
        self.current.load_full()
    }

    /// Switches the active theme to `name`.
    ///
    /// Returns the freshly built color set, which is also what
    /// [`current`](Self::current) serves from now on. An unknown name
    /// leaves the active set untouched.
    pub fn activate(&self, name: &str) -> Result<Arc<ActiveColorSet>> {
        let set = {
            let inner = self.inner.read().expect("RwLock poisoned");
            let table = inner
                .tables
                .get(name)
                .copied()
                .ok_or_else(|| ThemeError::unknown_theme(name))?;
            let set = Arc::new(ActiveColorSet::from_table(name, &table));
            // Stored while the lock is held; `add_theme` refreshes the
            // snapshot under the write lock and must not interleave.
            self.current.store(Arc::clone(&set));
            set
        };
        tracing::debug!(theme = %name, "activated theme");
        Ok(set)
    }

    /// Registers a theme, replacing any previous table under `name`.
    ///
    /// Replacing the table of the currently active theme rebuilds the
    /// active set so readers see the new colors.
    pub fn add_theme(&self, name: impl Into<String>, table: ThemeTable) {
        let name = name.into();
        {
            let mut inner = self.inner.write().expect("RwLock poisoned");
            if inner.tables.insert(name.clone(), table).is_none() {
                inner.order.push(name.clone());
            }
            // Checked and refreshed inside the write lock; an activation
            // landing in between would be clobbered with a stale table.
            if self.current.load().theme_name() == name {
                self.current
                    .store(Arc::new(ActiveColorSet::from_table(name.as_str(), &table)));
            }
        }
        tracing::debug!(theme = %name, "registered theme");
    }

    /// Registers a theme given as `(role name, hex color)` entries.
    ///
    /// The entries are validated as a whole first; on error nothing is
    /// registered.
    pub fn add_theme_from_hex(
        &self,
        name: impl Into<String>,
        entries: &[(&str, &str)],
    ) -> Result<()> {
        let table = ThemeTable::from_hex_entries(entries)?;
        self.add_theme(name, table);
        Ok(())
    }

    /// All registered theme names, in registration order.
    pub fn theme_names(&self) -> Vec<String> {
        self.inner.read().expect("RwLock poisoned").order.clone()
    }

    /// Whether a theme named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .expect("RwLock poisoned")
            .tables
            .contains_key(name)
    }

    /// The registered table for `name`, if any.
    pub fn table(&self, name: &str) -> Option<ThemeTable> {
        self.inner
            .read()
            .expect("RwLock poisoned")
            .tables
            .get(name)
            .copied()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
