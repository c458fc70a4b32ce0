use crate::error::DashboardError;
use leptos::View;
use std::{collections::BTreeMap, rc::Rc};

pub type ClientActionFactory = Rc<dyn Fn() -> View>;

/// Client actions the host can open by tag. Filled by the composition root;
/// nothing registers itself at load time.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    entries: BTreeMap<String, ClientActionFactory>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        tag: impl Into<String>,
        factory: impl Fn() -> View + 'static,
    ) -> Result<(), DashboardError> {
        let tag = tag.into();
        if self.entries.contains_key(&tag) {
            return Err(DashboardError::ActionAlreadyRegistered(tag));
        }
        log::debug!("registered client action `{}`", tag);
        self.entries.insert(tag, Rc::new(factory));
        Ok(())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn get(&self, tag: &str) -> Option<ClientActionFactory> {
        self.entries.get(tag).cloned()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
