//! Clipboard copy and transient toast notifications.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::str::FromStr;

use async_trait::async_trait;

use crate::components::toast::render_toast;
use crate::error::DocsError;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// Severity style of a toast, mapped to a `bg-*` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Info,
    Warning,
    Danger,
    Primary,
    Secondary,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Danger => "danger",
            ToastKind::Primary => "primary",
            ToastKind::Secondary => "secondary",
        }
    }

    /// Parse an optional kind coming from page scripts; unknown kinds become `success`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            None => ToastKind::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; using success");
                ToastKind::default()
            }),
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(ToastKind::Success),
            "info" => Ok(ToastKind::Info),
            "warning" => Ok(ToastKind::Warning),
            "danger" => Ok(ToastKind::Danger),
            "primary" => Ok(ToastKind::Primary),
            "secondary" => Ok(ToastKind::Secondary),
            other => Err(format!("Unknown toast kind '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

impl ToastId {
    /// Element id of the toast in the page.
    pub fn dom_id(self) -> String {
        format!("toast-{}", self.0)
    }
}

/// Where toasts live: appended to the page body and shown by the UI toolkit.
pub trait ToastHost {
    fn attach(&self, id: ToastId, markup: &str);
    fn show(&self, id: ToastId);
    fn is_attached(&self, id: ToastId) -> bool;
    fn detach(&self, id: ToastId);
}

/// System clipboard.
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), DocsError>;
}

/// Hands out toast ids and drives each toast's lifetime.
#[derive(Debug, Default)]
pub struct Toaster {
    next_id: Cell<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append and show a toast; it stays until dismissed.
    pub fn present(&self, host: &dyn ToastHost, message: &str, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        host.attach(id, &render_toast(id, message, kind));
        host.show(id);
        id
    }

    /// Remove a toast if it is still on the page. Returns whether it was removed.
    pub fn dismiss(&self, host: &dyn ToastHost, id: ToastId) -> bool {
        if !host.is_attached(id) {
            tracing::debug!("Toast {} already gone", id.0);
            return false;
        }
        host.detach(id);
        true
    }

    /// Show a toast and remove it once `delay` completes, unless the reader
    /// already dismissed it.
    pub async fn notify<F>(&self, host: &dyn ToastHost, message: &str, kind: ToastKind, delay: F) -> ToastId
    where
        F: Future<Output = ()>,
    {
        let id = self.present(host, message, kind);
        delay.await;
        self.dismiss(host, id);
        id
    }
}

/// Copy `text` and confirm with a success toast that expires after `delay`.
///
/// No toast is shown when the clipboard rejects the write.
pub async fn copy_to_clipboard<F>(
    clipboard: &dyn Clipboard,
    toaster: &Toaster,
    host: &dyn ToastHost,
    text: &str,
    delay: F,
) -> Result<ToastId, DocsError>
where
    F: Future<Output = ()>,
{
    clipboard.write_text(text).await?;
    Ok(toaster.notify(host, COPIED_MESSAGE, ToastKind::Success, delay).await)
}
