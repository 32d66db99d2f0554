//! Open-addressing hash table with linear probing.
//!
//! Keys are strings. The home slot is the sum of the key's character codes
//! modulo the table size; collisions walk forward one slot at a time, wrapping
//! at the end. Before an insert would push the load factor to
//! [`LOAD_FACTOR_THRESHOLD`] the table grows to the smallest prime at least
//! twice its size and every entry is re-placed.

use crate::config::EngineConfig;
use tracing::info;

/// Load factor an insert may not reach.
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.7;

pub const DEFAULT_TABLE_SIZE: usize = 53;

#[derive(Debug, Clone)]
struct Slot<V> {
    key: String,
    value: V,
}

#[derive(Debug, Clone)]
pub struct DynamicTable<V> {
    slots: Vec<Option<Slot<V>>>,
    count: usize,
}

impl<V> Default for DynamicTable<V> {
    fn default() -> Self {
        Self::with_size(DEFAULT_TABLE_SIZE)
    }
}

impl<V> DynamicTable<V> {
    /// # Panics
    /// If `size` is zero.
    pub fn with_size(size: usize) -> Self {
        assert!(size > 0, "table size must be positive");
        Self {
            slots: std::iter::repeat_with(|| None).take(size).collect(),
            count: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_size(config.initial_table_size)
    }

    /// Inserts or replaces the value under `key`, returning the old value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(index) = self.find(&key) {
            if let Some(slot) = self.slots[index].as_mut() {
                return Some(std::mem::replace(&mut slot.value, value));
            }
        }

        if (self.count + 1) as f64 / self.table_size() as f64 >= LOAD_FACTOR_THRESHOLD {
            self.rehash();
        }
        self.place(Slot { key, value });
        self.count += 1;
        None
    }

    pub fn retrieve(&self, key: &str) -> Option<&V> {
        let index = self.find(key)?;
        self.slots[index].as_ref().map(|slot| &slot.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.find(key)?;
        self.slots[index].as_mut().map(|slot| &mut slot.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.table_size() as f64
    }

    /// Entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots
            .iter()
            .flatten()
            .map(|slot| (slot.key.as_str(), &slot.value))
    }

    fn hash(&self, key: &str) -> usize {
        let sum = key
            .chars()
            .fold(0u64, |acc, c| acc.wrapping_add(u64::from(c)));
        (sum % self.table_size() as u64) as usize
    }

    /// Slot holding `key`, if present. Stops at the first empty slot.
    fn find(&self, key: &str) -> Option<usize> {
        let size = self.table_size();
        let home = self.hash(key);
        for step in 0..size {
            let index = (home + step) % size;
            match &self.slots[index] {
                None => return None,
                Some(slot) if slot.key == key => return Some(index),
                Some(_) => {}
            }
        }
        None
    }

    /// Puts a slot known to be absent into the first free position of its
    /// probe sequence. The load factor guarantees one exists.
    fn place(&mut self, slot: Slot<V>) {
        let size = self.table_size();
        let home = self.hash(&slot.key);
        let free = (0..size)
            .map(|step| (home + step) % size)
            .find(|&index| self.slots[index].is_none());
        if let Some(index) = free {
            self.slots[index] = Some(slot);
        }
    }

    fn rehash(&mut self) {
        let old_size = self.table_size();
        let new_size = next_prime(old_size * 2);
        let old = std::mem::replace(
            &mut self.slots,
            std::iter::repeat_with(|| None).take(new_size).collect(),
        );
        for slot in old.into_iter().flatten() {
            self.place(slot);
        }
        info!(old_size, new_size, entries = self.count, "Inventory table resized");
    }
}

/// Smallest prime `>= n`.
pub fn next_prime(n: usize) -> usize {
    (n.max(2)..).find(|&c| is_prime(c)).unwrap_or(n)
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}
