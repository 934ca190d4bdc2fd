//! Objective registry.

use super::types::{ObjectiveConfigRef, ObjectiveConfigs, ObjectiveKind};
use crate::selection::{MultiSelection, SelectableItem, SelectionEntry};
use tracing::debug;

/// A selected objective with a live reference to its record.
pub type ObjectiveEntry = SelectionEntry<ObjectiveKind, ObjectiveConfigRef>;

/// Checklist of objectives.
///
/// Objectives are the root of the dependency order: every objective is
/// always selectable, and the other registries derive their valid subsets
/// from this registry's selection.
///
/// # Examples
///
/// ```
/// use u_conslay::objective::{ObjectiveConfigs, ObjectiveKind, ObjectiveRegistry};
///
/// let mut objectives = ObjectiveRegistry::new(ObjectiveConfigs::default());
/// objectives.toggle(ObjectiveKind::Risk, true);
/// objectives.toggle(ObjectiveKind::Hoisting, true);
/// assert_eq!(objectives.keys(), vec![ObjectiveKind::Risk, ObjectiveKind::Hoisting]);
/// ```
#[derive(Debug, Clone)]
pub struct ObjectiveRegistry {
    configs: ObjectiveConfigs,
    selection: MultiSelection<ObjectiveKind, ObjectiveConfigRef>,
}

impl ObjectiveRegistry {
    pub fn new(configs: ObjectiveConfigs) -> Self {
        Self {
            configs,
            selection: MultiSelection::new(),
        }
    }

    /// Checks or unchecks an objective.
    ///
    /// A newly checked objective gets an entry referencing the objective's
    /// record; nothing is copied. Unchecking leaves the record untouched, so
    /// re-checking later sees every edit made in between.
    pub fn toggle(&mut self, kind: ObjectiveKind, checked: bool) -> bool {
        let configs = &self.configs;
        let changed = self.selection.toggle(kind, checked, |k| configs.get(k));
        if changed {
            debug!(
                objective = %kind,
                checked,
                selected = self.selection.len(),
                "objective toggled"
            );
        }
        changed
    }

    /// Selected objectives in the order they were checked.
    pub fn selection(&self) -> &[ObjectiveEntry] {
        self.selection.entries()
    }

    pub fn keys(&self) -> Vec<ObjectiveKind> {
        self.selection.keys()
    }

    pub fn catalog(&self) -> &[SelectableItem<ObjectiveKind>] {
        self.selection.catalog()
    }

    /// Every objective is always valid.
    pub fn valid_subset(&self) -> Vec<ObjectiveKind> {
        self.catalog().iter().map(|i| i.key).collect()
    }

    pub fn is_valid(&self, _kind: ObjectiveKind) -> bool {
        true
    }

    /// Catalog items that may be checked, with their checked flags.
    pub fn valid_items(&self) -> Vec<SelectableItem<ObjectiveKind>> {
        self.catalog().to_vec()
    }

    pub fn is_selected(&self, kind: ObjectiveKind) -> bool {
        self.selection.is_selected(kind)
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// The live record for `kind`, selected or not.
    pub fn get_config(&self, kind: ObjectiveKind) -> ObjectiveConfigRef {
        self.configs.get(kind)
    }

    pub fn configs(&self) -> &ObjectiveConfigs {
        &self.configs
    }
}
