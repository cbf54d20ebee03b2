use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Keyed values handed to display derivation and click handlers.
///
/// Values are stored type-erased and read back with a typed [`get`]. A
/// missing key, or a key holding a different type, reads as `None`.
/// Cloning copies the map; the values themselves are shared.
///
/// [`get`]: Properties::get
#[derive(Clone, Default)]
pub struct Properties {
    values: HashMap<String, Rc<dyn Any>>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set<V: Any>(&mut self, key: impl Into<String>, value: V) {
        self.values.insert(key.into(), Rc::new(value));
    }

    /// Store `value` under `key` (builder).
    pub fn with<V: Any>(mut self, key: impl Into<String>, value: V) -> Self {
        self.set(key, value);
        self
    }

    pub fn get<V: Any>(&self, key: &str) -> Option<&V> {
        self.values.get(key)?.downcast_ref::<V>()
    }

    /// The value under `key`, or `default` when absent or of another type.
    pub fn get_or<V: Any + Clone>(&self, key: &str, default: V) -> V {
        self.get::<V>(key).cloned().unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("Properties").field("keys", &keys).finish()
    }
}
