/// Cities searched during this session, oldest first, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `city` unless an identical entry already exists.
    /// Returns `true` if the entry was added.
    pub fn record(&mut self, city: &str) -> bool {
        if city.is_empty() || self.contains(city) {
            return false;
        }
        self.entries.push(city.to_string());
        true
    }

    pub fn contains(&self, city: &str) -> bool {
        self.entries.iter().any(|entry| entry == city)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
