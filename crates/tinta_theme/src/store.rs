//! Theme store with fallback chains
//!
//! Themes live in a slot-map arena and reference their fallback by id, so a
//! chain is a walk over ids and cycles are rejected when a link is made.

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::codec;
use crate::error::{Result, ThemeError};
use crate::model::{self, ThemeModel};
use crate::tokens::{AttributeKey, AttributeValue};

new_key_type! {
    /// Identifier of a theme in a [`ThemeStore`]
    pub struct ThemeId;
}

#[derive(Clone, Debug)]
struct Entry {
    model: ThemeModel,
    fallback: Option<ThemeId>,
}

/// Arena of themes linked into acyclic fallback chains
#[derive(Clone, Debug, Default)]
pub struct ThemeStore {
    themes: SlotMap<ThemeId, Entry>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, model: ThemeModel) -> ThemeId {
        self.themes.insert(Entry { model, fallback: None })
    }

    /// Remove a theme; themes that fell back to it lose their fallback
    pub fn remove(&mut self, id: ThemeId) -> Option<ThemeModel> {
        let entry = self.themes.remove(id)?;
        for (other, dependant) in self.themes.iter_mut() {
            if dependant.fallback == Some(id) {
                debug!(theme = ?other, removed = ?id, "unlinked fallback");
                dependant.fallback = None;
            }
        }
        Some(entry.model)
    }

    pub fn contains(&self, id: ThemeId) -> bool {
        self.themes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn model(&self, id: ThemeId) -> Result<&ThemeModel> {
        self.entry(id).map(|entry| &entry.model)
    }

    pub fn model_mut(&mut self, id: ThemeId) -> Result<&mut ThemeModel> {
        self.themes
            .get_mut(id)
            .map(|entry| &mut entry.model)
            .ok_or(ThemeError::UnknownTheme(id))
    }

    fn entry(&self, id: ThemeId) -> Result<&Entry> {
        self.themes.get(id).ok_or(ThemeError::UnknownTheme(id))
    }

    pub fn fallback(&self, id: ThemeId) -> Result<Option<ThemeId>> {
        self.entry(id).map(|entry| entry.fallback)
    }

    /// Make `fallback` the fallback of `id`.
    ///
    /// Fails with [`ThemeError::InvalidChain`] when `id` is reachable from
    /// `fallback`, which includes linking a theme to itself.
    pub fn set_fallback(&mut self, id: ThemeId, fallback: ThemeId) -> Result<()> {
        self.entry(id)?;
        if self.chain(fallback)?.contains(&id) {
            return Err(ThemeError::InvalidChain { theme: id });
        }
        if let Some(entry) = self.themes.get_mut(id) {
            entry.fallback = Some(fallback);
        }
        debug!(theme = ?id, ?fallback, "linked fallback");
        Ok(())
    }

    pub fn clear_fallback(&mut self, id: ThemeId) -> Result<Option<ThemeId>> {
        let entry = self.themes.get_mut(id).ok_or(ThemeError::UnknownTheme(id))?;
        Ok(entry.fallback.take())
    }

    /// `id` followed by its fallbacks, nearest first
    pub fn chain(&self, id: ThemeId) -> Result<Vec<ThemeId>> {
        let mut chain = vec![id];
        let mut next = self.entry(id)?.fallback;
        while let Some(current) = next {
            // Links are cycle-checked on creation; this guards the walk anyway.
            if chain.contains(&current) {
                return Err(ThemeError::InvalidChain { theme: id });
            }
            chain.push(current);
            next = self.entry(current)?.fallback;
        }
        Ok(chain)
    }

    fn models(&self, id: ThemeId) -> Result<Vec<&ThemeModel>> {
        self.chain(id)?
            .into_iter()
            .map(|link| self.model(link))
            .collect()
    }

    /// Resolve `key` for `id` through its fallback chain
    pub fn get(&self, id: ThemeId, key: AttributeKey) -> Result<AttributeValue> {
        let chain = self.models(id)?;
        let head = chain[0];
        if !head.supports(key) {
            return Err(ThemeError::UnsupportedAttribute { key, kind: head.kind() });
        }
        Ok(model::resolve(&chain, key))
    }

    /// Standalone copy of `id` with inherited slots copied in.
    ///
    /// The copy resolves every attribute to the same value as [`Self::get`].
    pub fn flatten(&self, id: ThemeId) -> Result<ThemeModel> {
        let chain = self.models(id)?;
        let mut flat = chain[0].clone();
        for key in AttributeKey::ALL {
            if !flat.supports(key) || flat.slot(key).is_some() {
                continue;
            }
            let inherited = chain[1..]
                .iter()
                .filter(|model| model.supports(key))
                .find_map(|model| model.slot(key).copied());
            if let Some(slot) = inherited {
                flat.put(key, slot);
            }
        }
        Ok(flat)
    }

    /// Encode the flattened theme
    pub fn encode(&self, id: ThemeId, excluded: &[AttributeKey]) -> Result<String> {
        Ok(codec::encode(&self.flatten(id)?, excluded))
    }
}
