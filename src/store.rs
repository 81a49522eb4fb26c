use crate::catalog::Catalog;
use crate::errors::CounterError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterEntry {
    pub phrase: String,
    pub count: u64,
}

/// Phrase counters for one session, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CounterStore {
    entries: Vec<CounterEntry>,
    index: HashMap<String, usize>,
}

impl CounterStore {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut store = Self::default();
        for phrase in catalog.phrases() {
            store.insert(phrase.clone(), 0);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.index.contains_key(phrase)
    }

    pub fn get(&self, phrase: &str) -> Option<u64> {
        self.index.get(phrase).map(|&slot| self.entries[slot].count)
    }

    pub fn increment(&mut self, phrase: &str) -> Result<u64, CounterError> {
        let entry = self.entry_mut(phrase)?;
        entry.count = entry.count.saturating_add(1);
        Ok(entry.count)
    }

    pub fn reset(&mut self, phrase: &str) -> Result<(), CounterError> {
        self.entry_mut(phrase)?.count = 0;
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for entry in &mut self.entries {
            entry.count = 0;
        }
    }

    /// Inserts a custom phrase with a zero count. The phrase is stored trimmed.
    pub fn add(&mut self, phrase: &str) -> Result<&CounterEntry, CounterError> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(CounterError::EmptyPhrase);
        }
        if self.contains(phrase) {
            return Err(CounterError::DuplicatePhrase(phrase.to_string()));
        }
        let slot = self.insert(phrase.to_string(), 0);
        Ok(&self.entries[slot])
    }

    /// Overwrites (or creates) each pair in order, so a later pair for the same
    /// phrase wins.
    pub fn merge<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        for (phrase, count) in batch {
            match self.index.get(&phrase) {
                Some(&slot) => self.entries[slot].count = count,
                None => {
                    self.insert(phrase, count);
                }
            }
        }
    }

    pub fn snapshot(&self) -> Vec<CounterEntry> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[CounterEntry] {
        &self.entries
    }

    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.count))
    }

    /// Highest count; among ties the earliest inserted phrase wins.
    pub fn most_recited(&self) -> Option<&CounterEntry> {
        let mut best: Option<&CounterEntry> = None;
        for entry in &self.entries {
            match best {
                Some(current) if current.count >= entry.count => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    fn entry_mut(&mut self, phrase: &str) -> Result<&mut CounterEntry, CounterError> {
        match self.index.get(phrase) {
            Some(&slot) => Ok(&mut self.entries[slot]),
            None => Err(CounterError::UnknownPhrase(phrase.to_string())),
        }
    }

    fn insert(&mut self, phrase: String, count: u64) -> usize {
        let slot = self.entries.len();
        self.index.insert(phrase.clone(), slot);
        self.entries.push(CounterEntry { phrase, count });
        slot
    }
}
