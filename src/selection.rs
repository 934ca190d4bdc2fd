//! Selection plumbing shared by the four category registries.
//!
//! - [`CategoryKey`]: closed key set of one category, with wire names
//! - [`MultiSelection`]: checklist state (objectives, constraints)
//! - [`SingleSelection`]: one-of state (problem, algorithm)
//!
//! Neither type knows about the other categories. Cross-category validity
//! lives in the registries, which receive their dependencies as arguments.

use std::fmt;
use std::hash::Hash;

/// One of the four selection categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Objective,
    Problem,
    Algorithm,
    Constraint,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Objective => "objective",
            Category::Problem => "problem",
            Category::Algorithm => "algorithm",
            Category::Constraint => "constraint",
        };
        f.write_str(name)
    }
}

/// A closed, enumerated identifier for an item within a category.
///
/// Implementors are fieldless enums. [`all`](CategoryKey::all) lists every
/// variant in catalog order; adding a variant forces every exhaustive
/// `match` over the enum to be revisited.
pub trait CategoryKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// The category this key belongs to.
    const CATEGORY: Category;

    /// Every key of the category, in catalog order.
    fn all() -> &'static [Self];

    /// Stable name used on the wire.
    fn as_str(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Looks up a key by its wire name.
    fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == s)
    }
}

/// A catalog entry of a checklist category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem<K> {
    pub key: K,
    pub label: &'static str,
    pub is_selected: bool,
}

/// A selected key paired with a shared reference to its configuration record.
#[derive(Debug, Clone)]
pub struct SelectionEntry<K, R> {
    key: K,
    config: R,
}

impl<K: Copy, R> SelectionEntry<K, R> {
    pub fn new(key: K, config: R) -> Self {
        Self { key, config }
    }

    pub fn key(&self) -> K {
        self.key
    }

    /// The record this entry refers to. Not a copy.
    pub fn config(&self) -> &R {
        &self.config
    }
}

/// Checklist selection state: a catalog with checked flags plus an
/// insertion-ordered list of [`SelectionEntry`].
#[derive(Debug, Clone)]
pub struct MultiSelection<K, R> {
    catalog: Vec<SelectableItem<K>>,
    entries: Vec<SelectionEntry<K, R>>,
}

impl<K: CategoryKey, R> MultiSelection<K, R> {
    /// Creates an empty selection over the full catalog of `K`.
    pub fn new() -> Self {
        let catalog = K::all()
            .iter()
            .map(|&key| SelectableItem {
                key,
                label: key.label(),
                is_selected: false,
            })
            .collect();
        Self {
            catalog,
            entries: Vec::new(),
        }
    }

    /// Checks or unchecks `key`.
    ///
    /// Checking an unchecked key appends an entry whose record comes from
    /// `resolve`. Checking an already checked key changes nothing.
    /// Unchecking removes every entry with that key. Returns whether the
    /// selection changed.
    ///
    /// The web stores this replaces pushed a second entry on a repeated
    /// check. Here a key appears at most once, so a single uncheck always
    /// leaves it unselected.
    pub fn toggle(&mut self, key: K, checked: bool, resolve: impl FnOnce(K) -> R) -> bool {
        let was_selected = self.is_selected(key);
        if checked {
            if was_selected {
                return false;
            }
            self.entries.push(SelectionEntry::new(key, resolve(key)));
        } else {
            if !was_selected {
                return false;
            }
            self.entries.retain(|e| e.key != key);
        }
        if let Some(item) = self.catalog.iter_mut().find(|i| i.key == key) {
            item.is_selected = checked;
        }
        true
    }

    /// Empties the selection and unchecks every catalog item.
    pub fn clear(&mut self) {
        self.entries.clear();
        for item in &mut self.catalog {
            item.is_selected = false;
        }
    }

    pub fn catalog(&self) -> &[SelectableItem<K>] {
        &self.catalog
    }

    pub fn entries(&self) -> &[SelectionEntry<K, R>] {
        &self.entries
    }

    /// Selected keys in insertion order.
    pub fn keys(&self) -> Vec<K> {
        self.entries.iter().map(|e| e.key).collect()
    }

    pub fn is_selected(&self, key: K) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: CategoryKey, R> Default for MultiSelection<K, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-of selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleSelection<K> {
    current: Option<K>,
}

impl<K: CategoryKey> SingleSelection<K> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Replaces the current choice, returning the previous one.
    pub fn select(&mut self, key: K) -> Option<K> {
        self.current.replace(key)
    }

    /// Clears the current choice, returning it.
    pub fn reset(&mut self) -> Option<K> {
        self.current.take()
    }

    pub fn current(&self) -> Option<K> {
        self.current
    }
}

impl<K: CategoryKey> Default for SingleSelection<K> {
    fn default() -> Self {
        Self::new()
    }
}
