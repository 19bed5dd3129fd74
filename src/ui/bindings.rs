use std::collections::BTreeMap;

use super::document::ContainerId;
use super::navigation::Section;

pub type BindingId = u64;

/// Everything a click can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Activate(Section),
    ListGitHubUsers,
    BackToGitHubUsers,
    OpenGitHubUser(String),
    ListPosts,
    BackToPosts,
    OpenPost(i64),
    ListUsers,
    OpenUser(i64),
    ViewPostsByUser(i64),
}

/// How long a binding lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Registered once at bootstrap, lives as long as the page.
    Static,
    /// Lives until the container it was rendered into is replaced.
    Container(ContainerId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub id: BindingId,
    pub scope: Scope,
    pub action: Action,
}

/// Registry of every clickable element currently on the page.
#[derive(Debug, Default)]
pub struct Bindings {
    next_id: BindingId,
    entries: BTreeMap<BindingId, Binding>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    pub fn bind(&mut self, scope: Scope, action: Action) -> BindingId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.insert(id, Binding { id, scope, action });
        id
    }

    pub fn get(&self, id: BindingId) -> Option<&Binding> {
        self.entries.get(&id)
    }

    /// Issued at some point but released since, e.g. a card from a list that
    /// has been re-rendered.
    pub fn is_released(&self, id: BindingId) -> bool {
        id > 0 && id <= self.next_id && !self.entries.contains_key(&id)
    }

    pub fn release(&mut self, container: ContainerId) {
        self.entries.retain(|_, binding| binding.scope != Scope::Container(container));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.values()
    }

    pub fn in_scope(&self, scope: Scope) -> impl Iterator<Item = &Binding> {
        self.entries.values().filter(move |binding| binding.scope == scope)
    }

    pub fn find_static(&self, action: &Action) -> Option<BindingId> {
        self.in_scope(Scope::Static)
            .find(|binding| &binding.action == action)
            .map(|binding| binding.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hands out bindings for one container while it is being rendered.
pub struct Binder<'a> {
    bindings: &'a mut Bindings,
    container: ContainerId,
}

impl<'a> Binder<'a> {
    pub fn new(bindings: &'a mut Bindings, container: ContainerId) -> Self {
        Binder { bindings, container }
    }

    pub fn bind(&mut self, action: Action) -> BindingId {
        self.bindings.bind(Scope::Container(self.container), action)
    }
}
