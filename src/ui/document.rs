use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::validators;

use super::bindings::{Binder, Bindings};
use super::loading::LoadingIndicator;
use super::navigation::Navigation;

pub const DEFAULT_GITHUB_SINCE: &str = "0";
pub const DEFAULT_GITHUB_PER_PAGE: &str = "10";

/// Named regions of the page whose content viewers replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerId {
    GitHubContent,
    Repositories,
    PostsContent,
    UsersContent,
}

impl ContainerId {
    pub const ALL: [ContainerId; 4] = [
        ContainerId::GitHubContent,
        ContainerId::Repositories,
        ContainerId::PostsContent,
        ContainerId::UsersContent,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ContainerId::GitHubContent => "github-content",
            ContainerId::Repositories => "repositories-content",
            ContainerId::PostsContent => "posts-content",
            ContainerId::UsersContent => "users-content",
        }
    }

    pub fn parent(&self) -> Option<ContainerId> {
        match self {
            ContainerId::Repositories => Some(ContainerId::GitHubContent),
            _ => None,
        }
    }

    /// Marker a parent's markup carries where this container's content goes.
    pub fn slot(&self) -> String {
        format!("<!--container:{}-->", self.id())
    }

    fn children(self) -> impl Iterator<Item = ContainerId> {
        ContainerId::ALL
            .into_iter()
            .filter(move |child| child.parent() == Some(self))
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Values of the filter controls, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormInputs {
    pub github_since: String,
    pub github_per_page: String,
    pub post_user_id: String,
    pub post_limit: String,
}

impl FormInputs {
    pub fn github_since(&self) -> &str {
        non_blank(&self.github_since).unwrap_or(DEFAULT_GITHUB_SINCE)
    }

    pub fn github_per_page(&self) -> &str {
        non_blank(&self.github_per_page).unwrap_or(DEFAULT_GITHUB_PER_PAGE)
    }

    pub fn post_user_id(&self) -> Option<&str> {
        non_blank(&self.post_user_id)
    }

    pub fn post_limit(&self) -> Option<&str> {
        non_blank(&self.post_limit)
    }

    pub fn reset_github(&mut self) {
        self.github_since.clear();
        self.github_per_page.clear();
    }

    pub fn reset_posts(&mut self) {
        self.post_user_id.clear();
        self.post_limit.clear();
    }
}

fn non_blank(value: &str) -> Option<&str> {
    if validators::is_str_blank(value) {
        None
    } else {
        Some(value.trim())
    }
}

/// The whole mutable UI state: container contents, navigation, the loading
/// flag, form inputs and click bindings.
#[derive(Debug)]
pub struct Document {
    containers: BTreeMap<ContainerId, String>,
    pub navigation: Navigation,
    pub loading: LoadingIndicator,
    pub inputs: FormInputs,
    pub bindings: Bindings,
}

impl Document {
    pub fn new(navigation: Navigation) -> Self {
        Document {
            containers: BTreeMap::new(),
            navigation,
            loading: LoadingIndicator::new(),
            inputs: FormInputs::default(),
            bindings: Bindings::new(),
        }
    }

    pub fn html(&self, container: ContainerId) -> Option<&str> {
        self.containers.get(&container).map(String::as_str)
    }

    /// Content of `container` with every nested container filled in.
    pub fn render(&self, container: ContainerId) -> String {
        let mut html = self.html(container).unwrap_or_default().to_string();
        for child in container.children() {
            html = html.replace(&child.slot(), &self.render(child));
        }
        html
    }

    /// Forget the content and bindings of `container` and everything nested in it.
    pub fn clear(&mut self, container: ContainerId) {
        for child in container.children() {
            self.clear(child);
        }
        self.bindings.release(container);
        self.containers.remove(&container);
    }

    /// Start re-rendering `container`: its old content and bindings are
    /// discarded and new bindings are scoped to it.
    pub fn binder(&mut self, container: ContainerId) -> Binder<'_> {
        self.clear(container);
        Binder::new(&mut self.bindings, container)
    }

    /// Set the content of `container`. Call [`Document::binder`] first when
    /// the new content carries bindings.
    pub fn fill(&mut self, container: ContainerId, html: String) {
        for child in container.children() {
            self.clear(child);
        }
        self.containers.insert(container, html);
    }

    /// Discard and replace the content of `container` in one step.
    pub fn replace(&mut self, container: ContainerId, html: String) {
        self.clear(container);
        self.containers.insert(container, html);
    }
}
