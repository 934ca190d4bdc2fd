//! Configuration record store.
//!
//! Every category key owns exactly one live configuration record for the
//! lifetime of a [`ConfigStore`]. Records are handed out as
//! [`ConfigHandle`]s: cloning a handle aliases the record, so an edit made
//! through any handle is seen by every holder, including selection entries
//! created before the edit.
//!
//! Handles are built on `Rc<RefCell<_>>` and are therefore `!Send`. Hosts
//! with more than one thread must keep the store on the thread that owns
//! the registries.

use crate::algorithm::AlgorithmConfigs;
use crate::constraint::ConstraintConfigs;
use crate::objective::ObjectiveConfigs;
use crate::problem::ProblemConfigs;
use serde::Serialize;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Shared, mutable handle to a single configuration record.
///
/// # Examples
///
/// ```
/// use u_conslay::store::ConfigHandle;
///
/// let a = ConfigHandle::new(1_u32);
/// let b = a.clone();
/// a.update(|v| *v = 7);
/// assert_eq!(*b.borrow(), 7);
/// assert!(a.ptr_eq(&b));
/// ```
pub struct ConfigHandle<T>(Rc<RefCell<T>>);

impl<T> ConfigHandle<T> {
    pub fn new(record: T) -> Self {
        Self(Rc::new(RefCell::new(record)))
    }

    /// Immutably borrows the record.
    ///
    /// # Panics
    /// Panics if the record is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Applies `f` to the record in place. The only way to write a record.
    ///
    /// # Panics
    /// Panics if the record is borrowed, e.g. when `f` reads it again
    /// through another handle.
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut *self.0.borrow_mut());
    }

    /// Whether an [`update`](Self::update) on this record is in progress,
    /// so reading it now would panic.
    pub fn is_in_use(&self) -> bool {
        self.0.try_borrow().is_err()
    }

    /// Whether both handles point at the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this record.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<T: Clone> ConfigHandle<T> {
    /// Owned copy of the record as it is now. Later edits do not reach it.
    pub fn snapshot(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T: Serialize> ConfigHandle<T> {
    /// Renders the record as an opaque JSON payload.
    pub fn to_payload(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&*self.0.borrow())
    }
}

impl<T> Clone for ConfigHandle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for ConfigHandle<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ConfigHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(record) => f.debug_tuple("ConfigHandle").field(&*record).finish(),
            Err(_) => f.write_str("ConfigHandle(<borrowed>)"),
        }
    }
}

/// One record per category key, across all four categories.
///
/// Cloning the store clones handles, never records.
///
/// # Examples
///
/// ```
/// use u_conslay::store::ConfigStore;
/// use u_conslay::objective::ObjectiveKind;
///
/// let store = ConfigStore::new();
/// store.objectives().risk().update(|r| r.delta = 0.05);
///
/// let risk = store.objectives().get(ObjectiveKind::Risk);
/// assert_eq!(risk.kind(), ObjectiveKind::Risk);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    objectives: ObjectiveConfigs,
    problems: ProblemConfigs,
    algorithms: AlgorithmConfigs,
    constraints: ConstraintConfigs,
}

impl ConfigStore {
    /// Creates a store with every record at its default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objectives(&self) -> &ObjectiveConfigs {
        &self.objectives
    }

    pub fn problems(&self) -> &ProblemConfigs {
        &self.problems
    }

    pub fn algorithms(&self) -> &AlgorithmConfigs {
        &self.algorithms
    }

    pub fn constraints(&self) -> &ConstraintConfigs {
        &self.constraints
    }
}
