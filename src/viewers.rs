//! The fetch → validate → render → drill-down cycle shared by every viewer.

pub mod github;
pub mod posts;
pub mod users;

use std::future::Future;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;
use crate::models::envelope::Envelope;
use crate::ui::bindings::Binder;
use crate::ui::document::{ContainerId, Document};
use crate::ui::errors;
use crate::ui::templates;
use crate::views::common::{EmptyView, Tone};

/// What a viewer operation may touch: the document and the templates.
pub struct ViewContext<'a> {
    pub document: &'a mut Document,
    pub registry: &'a Handlebars<'static>,
}

impl<'a> ViewContext<'a> {
    pub fn new(document: &'a mut Document, registry: &'a Handlebars<'static>) -> Self {
        ViewContext { document, registry }
    }

    /// Run one primary operation into `container` with the loading indicator up.
    ///
    /// Any error, from the request or from rendering, ends up as the error card.
    /// Returns whether the view was rendered.
    pub async fn run<T, Fut, F>(&mut self, container: ContainerId, what: &str, fetch: Fut, render: F) -> bool
    where
        Fut: Future<Output = Result<Envelope<T>>>,
        F: FnOnce(&mut Self, Envelope<T>) -> Result<()>,
    {
        let loading = self.document.loading.begin();

        let outcome = match fetch.await {
            Ok(envelope) => render(self, envelope),
            Err(err) => Err(err),
        };
        let rendered = match outcome {
            Ok(()) => true,
            Err(err) => {
                log::error!("Error {}: {}", what, err);
                self.show_error(container, &err.to_string());
                false
            }
        };

        loading.end();
        rendered
    }

    /// Re-render `container` from a view model built with fresh bindings.
    pub fn render<V, B>(&mut self, container: ContainerId, template: &str, build: B) -> Result<()>
    where
        V: Serialize,
        B: FnOnce(&mut Binder<'_>) -> V,
    {
        let view = {
            let mut binder = self.document.binder(container);
            build(&mut binder)
        };
        let html = self.registry.render(template, &view)?;
        self.document.fill(container, html);
        Ok(())
    }

    pub fn render_empty(&mut self, container: ContainerId, view: &EmptyView) -> Result<()> {
        let html = self.registry.render(templates::EMPTY, view)?;
        self.document.replace(container, html);
        Ok(())
    }

    pub fn show_error(&mut self, container: ContainerId, message: &str) {
        errors::show_error(self.document, self.registry, container, message);
    }

    pub fn show_notice(&mut self, container: ContainerId, tone: Tone, message: &str) {
        errors::show_notice(self.document, self.registry, container, tone, message);
    }
}
