use std::sync::Arc;

use handlebars::{Handlebars, RenderError};

use crate::error::{DispatchError, SetupError};
use crate::services::api_client::ApiClient;
use crate::services::github_service::GitHubService;
use crate::services::placeholder_service::PlaceholderService;
use crate::ui::bindings::{Action, BindingId, Scope};
use crate::ui::document::{ContainerId, Document};
use crate::ui::loading::LoadingIndicator;
use crate::ui::navigation::{Activated, Navigation, Section};
use crate::ui::templates;
use crate::viewers::{self, ViewContext};
use crate::views::page::{NavItem, PageView, SectionView};

pub const PAGE_TITLE: &str = "Global Trend API Explorer";

/// The single owner of UI state. Every click, form submission and page render
/// goes through here.
pub struct App {
    document: Document,
    registry: Handlebars<'static>,
    github: GitHubService,
    placeholder: PlaceholderService,
}

impl App {
    /// Wire the navigation bar and static controls.
    ///
    /// `sections` names the navigation controls in display order; an unknown
    /// name is a configuration error.
    pub fn bootstrap<S: AsRef<str>>(client: Arc<dyn ApiClient>, sections: &[S]) -> Result<Self, SetupError> {
        let navigation = Navigation::parse(sections)?;
        let registry = templates::registry()?;

        let mut document = Document::new(navigation);
        let nav_sections = document.navigation.sections().to_vec();
        for section in nav_sections {
            document.bindings.bind(Scope::Static, Action::Activate(section));
        }
        if document.navigation.has(Section::Users) {
            document.bindings.bind(Scope::Static, Action::ListUsers);
        }
        log::info!("Registered {} navigation bindings", document.bindings.len());

        Ok(App {
            document,
            registry,
            github: GitHubService {
                client: Arc::clone(&client),
            },
            placeholder: PlaceholderService { client },
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &Handlebars<'static> {
        &self.registry
    }

    pub fn loading_indicator(&self) -> LoadingIndicator {
        self.document.loading.clone()
    }

    /// Resolve a binding id and perform its action.
    ///
    /// A released binding (a second click on a control its first click replaced,
    /// or a link on a stale page) does nothing and leaves the page as it is.
    pub async fn trigger(&mut self, id: BindingId) -> Result<(), DispatchError> {
        if self.document.bindings.is_released(id) {
            log::info!("Ignoring released binding {}", id);
            return Ok(());
        }
        let action = self
            .document
            .bindings
            .get(id)
            .map(|binding| binding.action.clone())
            .ok_or(DispatchError::UnknownBinding(id))?;
        self.dispatch(action).await;
        Ok(())
    }

    /// Perform one action to completion.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn dispatch(&mut self, action: Action) {
        let mut ctx = ViewContext::new(&mut self.document, &self.registry);
        match action {
            Action::Activate(section) => {
                if let Some(Activated(section)) = ctx.document.navigation.activate(section) {
                    log::info!("Showing section {}", section);
                }
            }
            Action::ListGitHubUsers => {
                viewers::github::list_users(&mut ctx, &self.github).await;
            }
            Action::BackToGitHubUsers => {
                ctx.document.inputs.reset_github();
                viewers::github::list_users(&mut ctx, &self.github).await;
            }
            Action::OpenGitHubUser(login) => {
                viewers::github::open_user(&mut ctx, &self.github, &login).await;
            }
            Action::ListPosts => {
                viewers::posts::list_posts(&mut ctx, &self.placeholder).await;
            }
            Action::BackToPosts => {
                ctx.document.inputs.reset_posts();
                viewers::posts::list_posts(&mut ctx, &self.placeholder).await;
            }
            Action::OpenPost(id) => {
                viewers::posts::open_post(&mut ctx, &self.placeholder, id).await;
            }
            Action::ListUsers => {
                viewers::users::list_users(&mut ctx, &self.placeholder).await;
            }
            Action::OpenUser(id) => {
                let Some(Activated(_)) = ctx.document.navigation.activate(Section::Users) else {
                    return;
                };
                viewers::users::open_user(&mut ctx, &self.placeholder, id).await;
            }
            Action::ViewPostsByUser(id) => {
                let Some(Activated(_)) = ctx.document.navigation.activate(Section::Posts) else {
                    return;
                };
                ctx.document.inputs.post_user_id = id.to_string();
                viewers::posts::list_posts(&mut ctx, &self.placeholder).await;
            }
        }
    }

    pub async fn submit_github(&mut self, since: Option<String>, per_page: Option<String>) {
        let Some(Activated(_)) = self.document.navigation.activate(Section::GitHub) else {
            return;
        };
        self.document.inputs.github_since = since.unwrap_or_default();
        self.document.inputs.github_per_page = per_page.unwrap_or_default();
        self.dispatch(Action::ListGitHubUsers).await;
    }

    pub async fn submit_posts(&mut self, user_id: Option<String>, limit: Option<String>) {
        let Some(Activated(_)) = self.document.navigation.activate(Section::Posts) else {
            return;
        };
        self.document.inputs.post_user_id = user_id.unwrap_or_default();
        self.document.inputs.post_limit = limit.unwrap_or_default();
        self.dispatch(Action::ListPosts).await;
    }

    pub fn render_page(&self) -> Result<String, RenderError> {
        let document = &self.document;
        let navigation = &document.navigation;
        let nav = navigation
            .sections()
            .iter()
            .filter_map(|section| {
                let binding = document.bindings.find_static(&Action::Activate(*section))?;
                Some(NavItem {
                    id: section.id(),
                    label: section.label(),
                    binding,
                    active: navigation.is_active(*section),
                })
            })
            .collect();
        let section_view = |section: Section| SectionView {
            active: navigation.is_active(section),
            content: document.render(section.container()),
        };

        let page = PageView {
            title: PAGE_TITLE.to_string(),
            nav,
            github: section_view(Section::GitHub),
            posts: section_view(Section::Posts),
            users: section_view(Section::Users),
            inputs: document.inputs.clone(),
            load_users: document.bindings.find_static(&Action::ListUsers),
        };
        self.registry.render(templates::PAGE, &page)
    }

    pub fn container_html(&self, container: ContainerId) -> String {
        self.document.render(container)
    }
}
