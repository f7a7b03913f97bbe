#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use buildly_docs::dom::{Binding, Heading, Page};
use buildly_docs::error::DocsError;
use buildly_docs::fetch::AssetFetcher;
use buildly_docs::theme::ThemeStore;
use buildly_docs::toast::{Clipboard, ToastHost, ToastId};

/// State of one bound element in [`FakePage`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FakeElement {
    pub inner_html: String,
    pub text: String,
    pub visible: Option<bool>,
    pub class_name: String,
    pub classes: HashSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeNavLink {
    pub href: Option<String>,
    pub classes: HashSet<String>,
}

/// In-memory document standing in for the browser DOM.
#[derive(Debug, Default)]
pub struct FakePage {
    pub elements: RefCell<HashMap<Binding, FakeElement>>,
    pub root_attributes: RefCell<HashMap<String, String>>,
    pub headings: RefCell<Vec<Heading>>,
    pub nav_links: RefCell<Vec<FakeNavLink>>,
    pub path: String,
}

impl FakePage {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Default::default()
        }
    }

    pub fn with(self, binding: Binding) -> Self {
        self.elements.borrow_mut().insert(binding, FakeElement::default());
        self
    }

    pub fn with_text(self, binding: Binding, text: &str) -> Self {
        self.elements.borrow_mut().insert(
            binding,
            FakeElement {
                text: text.to_string(),
                ..Default::default()
            },
        );
        self
    }

    pub fn with_headings(self, headings: &[(u8, Option<&str>, &str)]) -> Self {
        *self.headings.borrow_mut() = headings
            .iter()
            .map(|(level, id, text)| Heading {
                level: *level,
                id: id.map(str::to_string),
                text: text.to_string(),
            })
            .collect();
        self
    }

    pub fn with_nav_links(self, hrefs: &[Option<&str>]) -> Self {
        *self.nav_links.borrow_mut() = hrefs
            .iter()
            .map(|href| FakeNavLink {
                href: href.map(str::to_string),
                classes: HashSet::new(),
            })
            .collect();
        self
    }

    /// Every binding the search, theme, navigation and metadata features use.
    pub fn full(path: &str) -> Self {
        [
            Binding::SearchInput,
            Binding::SearchResults,
            Binding::SearchContainer,
            Binding::Toc,
            Binding::ThemeToggle,
            Binding::ThemeIcon,
            Binding::SidebarToggle,
            Binding::Sidebar,
            Binding::LastUpdated,
            Binding::Version,
            Binding::FeaturesGrid,
        ]
        .into_iter()
        .fold(FakePage::new(path), FakePage::with)
    }

    pub fn element(&self, binding: Binding) -> FakeElement {
        self.elements
            .borrow()
            .get(&binding)
            .cloned()
            .unwrap_or_else(|| panic!("{binding} not on fake page"))
    }

    pub fn html(&self, binding: Binding) -> String {
        self.element(binding).inner_html
    }

    pub fn text(&self, binding: Binding) -> String {
        self.element(binding).text
    }

    pub fn root(&self, name: &str) -> Option<String> {
        self.root_attributes.borrow().get(name).cloned()
    }

    pub fn active_links(&self) -> Vec<usize> {
        self.nav_links
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, link)| link.classes.contains("active"))
            .map(|(i, _)| i)
            .collect()
    }

    fn update(&self, binding: Binding, f: impl FnOnce(&mut FakeElement)) {
        if let Some(element) = self.elements.borrow_mut().get_mut(&binding) {
            f(element);
        }
    }
}

impl Page for FakePage {
    fn exists(&self, binding: Binding) -> bool {
        self.elements.borrow().contains_key(&binding)
    }

    fn text_of(&self, binding: Binding) -> Option<String> {
        self.elements.borrow().get(&binding).map(|e| e.text.clone())
    }

    fn set_inner_html(&self, binding: Binding, html: &str) {
        self.update(binding, |e| e.inner_html = html.to_string());
    }

    fn set_text(&self, binding: Binding, text: &str) {
        self.update(binding, |e| e.text = text.to_string());
    }

    fn set_visible(&self, binding: Binding, visible: bool) {
        self.update(binding, |e| e.visible = Some(visible));
    }

    fn set_class_name(&self, binding: Binding, class_name: &str) {
        self.update(binding, |e| e.class_name = class_name.to_string());
    }

    fn toggle_class(&self, binding: Binding, class: &str) {
        self.update(binding, |e| {
            if !e.classes.remove(class) {
                e.classes.insert(class.to_string());
            }
        });
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.root_attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn headings(&self) -> Vec<Heading> {
        self.headings.borrow().clone()
    }

    fn set_heading_id(&self, index: usize, id: &str) {
        if let Some(heading) = self.headings.borrow_mut().get_mut(index) {
            heading.id = Some(id.to_string());
        }
    }

    fn nav_link_hrefs(&self) -> Vec<Option<String>> {
        self.nav_links.borrow().iter().map(|l| l.href.clone()).collect()
    }

    fn add_nav_link_class(&self, index: usize, class: &str) {
        if let Some(link) = self.nav_links.borrow_mut().get_mut(index) {
            link.classes.insert(class.to_string());
        }
    }

    fn current_path(&self) -> String {
        self.path.clone()
    }
}

/// Local storage stand-in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub values: RefCell<HashMap<String, String>>,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, DocsError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), DocsError> {
        if self.fail_writes {
            return Err(DocsError::Storage("quota exceeded".into()));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// How [`ScriptedFetcher`] answers one path.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
    NetworkError,
}

/// Serves canned replies, optionally after a delay, and records requests.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    replies: HashMap<String, (Reply, Duration)>,
    pub requested: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn reply(mut self, path: &str, reply: Reply) -> Self {
        self.replies.insert(path.to_string(), (reply, Duration::ZERO));
        self
    }

    pub fn json(self, path: &str, body: serde_json::Value) -> Self {
        self.reply(path, Reply::Body(body.to_string()))
    }

    pub fn slow(mut self, path: &str, reply: Reply, delay: Duration) -> Self {
        self.replies.insert(path.to_string(), (reply, delay));
        self
    }
}

#[async_trait(?Send)]
impl AssetFetcher for ScriptedFetcher {
    async fn get_text(&self, path: &str) -> Result<String, DocsError> {
        self.requested.borrow_mut().push(path.to_string());
        let (reply, delay) = self
            .replies
            .get(path)
            .cloned()
            .unwrap_or((Reply::Status(404), Duration::ZERO));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match reply {
            Reply::Body(body) => Ok(body),
            Reply::Status(status) => Err(DocsError::Status {
                path: path.to_string(),
                status,
            }),
            Reply::NetworkError => Err(DocsError::Fetch(format!("GET {path} failed"))),
        }
    }
}

/// Page body holding toasts by id.
#[derive(Debug, Default)]
pub struct FakeToastHost {
    pub attached: RefCell<HashMap<ToastId, String>>,
    pub shown: RefCell<Vec<ToastId>>,
    pub detach_calls: Cell<usize>,
}

impl FakeToastHost {
    /// Reader clicks the close button; the toast leaves the page.
    pub fn dismiss_by_hand(&self, id: ToastId) {
        self.attached.borrow_mut().remove(&id);
    }
}

impl ToastHost for FakeToastHost {
    fn attach(&self, id: ToastId, markup: &str) {
        self.attached.borrow_mut().insert(id, markup.to_string());
    }

    fn show(&self, id: ToastId) {
        self.shown.borrow_mut().push(id);
    }

    fn is_attached(&self, id: ToastId) -> bool {
        self.attached.borrow().contains_key(&id)
    }

    fn detach(&self, id: ToastId) {
        self.detach_calls.set(self.detach_calls.get() + 1);
        let removed = self.attached.borrow_mut().remove(&id);
        assert!(removed.is_some(), "detached toast {} twice", id.0);
    }
}

#[derive(Debug, Default)]
pub struct FakeClipboard {
    pub contents: RefCell<Option<String>>,
    pub reject: bool,
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), DocsError> {
        if self.reject {
            return Err(DocsError::Clipboard("permission denied".into()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
