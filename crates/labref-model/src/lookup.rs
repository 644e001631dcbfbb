use std::collections::HashMap;

/// Case-insensitive name index mapping spellings to a canonical name.
///
/// Keys are trimmed and folded with Unicode lowercasing so accented names
/// ("Glóbulos blancos", "GLÓBULOS BLANCOS") collapse to one entry.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    map: HashMap<String, String>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `spelling` for `canonical`.
    ///
    /// Returns the canonical name already holding the spelling, if any;
    /// the existing entry is left untouched.
    pub fn insert(&mut self, spelling: &str, canonical: &str) -> Option<&str> {
        let key = fold(spelling);
        if self.map.contains_key(&key) {
            return self.map.get(&key).map(String::as_str);
        }
        self.map.insert(key, canonical.to_string());
        None
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&fold(name)).map(String::as_str)
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}
