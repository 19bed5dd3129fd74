use serde::Serialize;

use crate::ui::bindings::BindingId;
use crate::ui::document::FormInputs;

/// Everything the page shell template needs.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub title: String,
    pub nav: Vec<NavItem>,
    pub github: SectionView,
    pub posts: SectionView,
    pub users: SectionView,
    pub inputs: FormInputs,
    pub load_users: Option<BindingId>,
}

#[derive(Debug, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub binding: BindingId,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub active: bool,
    /// Already-rendered container markup.
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorPageView {
    pub title: String,
    pub message: String,
}
