/// Ordered attribute map attached to an [`Element`](super::Element).
///
/// Keys keep the position of their first `set`; setting an existing key
/// replaces the value in place. Iteration always yields `class` first,
/// then `id`, then every other key in first-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, overwriting any earlier value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes in output order: `class`, `id`, then the rest.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let class = self.get("class").map(|v| ("class", v));
        let id = self.get("id").map(|v| ("id", v));
        let rest = self
            .entries
            .iter()
            .filter(|(k, _)| k != "class" && k != "id")
            .map(|(k, v)| (k.as_str(), v.as_str()));
        class.into_iter().chain(id).chain(rest)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}
