//! The active effect set: stacking policy and the add/remove state machine.

use indexmap::IndexMap;

use crate::config::GameConfig;
use crate::stats::{AttrHandler, CharacteristicStore};

use super::conditions::ConditionKind;
use super::traits::TraitKind;
use super::{Effect, EffectError, EffectKind};

/// Outcome of a removal request that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The effect was active and has been removed.
    Removed,
    /// No effect of that kind was active; removing nothing is not an error
    /// and no hooks were invoked.
    NotPresent,
}

/// The set of currently-active effects on one character.
///
/// Kinds map to a small insertion-ordered list of instances; the list only
/// grows past one entry for multi-stacking kinds. Kind lookup is O(1) and
/// iteration is deterministic in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectSet<K: EffectKind> {
    active: IndexMap<K, Vec<Effect<K>>>,
}

/// Active transient conditions.
pub type Conditions = EffectSet<ConditionKind>;
/// Active permanent traits.
pub type Traits = EffectSet<TraitKind>;

impl<K: EffectKind + core::fmt::Debug> EffectSet<K> {
    pub fn new() -> Self {
        Self {
            active: IndexMap::new(),
        }
    }

    /// True iff an active effect of that kind exists.
    pub fn has(&self, kind: K) -> bool {
        self.active.get(&kind).is_some_and(|stack| !stack.is_empty())
    }

    /// The oldest active instance of that kind, if any.
    pub fn get(&self, kind: K) -> Option<&Effect<K>> {
        self.active.get(&kind).and_then(|stack| stack.first())
    }

    pub fn get_mut(&mut self, kind: K) -> Option<&mut Effect<K>> {
        self.active.get_mut(&kind).and_then(|stack| stack.first_mut())
    }

    /// All active instances, in insertion order (kinds in the order first
    /// applied, stacked instances oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Effect<K>> {
        self.active.values().flatten()
    }

    /// Total number of active instances.
    pub fn len(&self) -> usize {
        self.active.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.active.values().all(Vec::is_empty)
    }

    /// Apply an effect.
    ///
    /// If an instance of the kind is already active and does not allow
    /// stacking, fails with [`EffectError::AlreadyAffected`] and changes
    /// nothing: the apply hook is not run and the existing instance is
    /// untouched. Otherwise the apply hook runs (installing any side effects
    /// on the attribute handler), then the instance joins the active set.
    pub fn add(
        &mut self,
        mut effect: Effect<K>,
        attrs: &mut AttrHandler,
        stats: &CharacteristicStore,
    ) -> Result<(), EffectError<K>> {
        if let Some(stack) = self.active.get(&effect.kind) {
            if let Some(existing) = stack.first() {
                if !existing.allow_multi {
                    return Err(EffectError::AlreadyAffected { kind: effect.kind });
                }
                if stack.len() >= GameConfig::MAX_STACKED_EFFECTS {
                    return Err(EffectError::StackLimit { kind: effect.kind });
                }
            }
        }

        K::apply(&mut effect, attrs, stats);
        self.active.entry(effect.kind).or_default().push(effect);
        Ok(())
    }

    /// Request removal of the oldest instance of a kind.
    ///
    /// Absent kinds succeed trivially with [`RemoveOutcome::NotPresent`] and
    /// no hooks run. For an active, enabled instance the removal gate runs
    /// first; a veto returns [`EffectError::RemovalVetoed`] and leaves the
    /// instance exactly as it was (cleanup does not run). Otherwise cleanup
    /// runs and the instance is discarded.
    pub fn remove(
        &mut self,
        kind: K,
        attrs: &mut AttrHandler,
        stats: &CharacteristicStore,
    ) -> Result<RemoveOutcome, EffectError<K>> {
        let Some(stack) = self.active.get_mut(&kind) else {
            return Ok(RemoveOutcome::NotPresent);
        };
        let Some(effect) = stack.first_mut() else {
            self.active.shift_remove(&kind);
            return Ok(RemoveOutcome::NotPresent);
        };

        if effect.enabled && !K::request_removal(effect, attrs, stats) {
            return Err(EffectError::RemovalVetoed { kind });
        }

        K::cleanup(effect, attrs, stats);
        stack.remove(0);
        if stack.is_empty() {
            self.active.shift_remove(&kind);
        }
        Ok(RemoveOutcome::Removed)
    }

    /// Plain per-instance records for snapshotting.
    pub fn records(&self) -> Vec<Effect<K>> {
        self.iter().copied().collect()
    }

    /// Rebuild the set from snapshot records.
    ///
    /// Hooks are NOT re-run: installed side effects are captured separately
    /// by the vital modifier totals in the same snapshot.
    pub fn from_records(records: Vec<Effect<K>>) -> Self {
        let mut set = Self::new();
        for effect in records {
            set.active.entry(effect.kind).or_default().push(effect);
        }
        set
    }
}
