//! Table of contents generated from the page's `h2`..`h6` headings.

use crate::components::toc::render_toc;
use crate::dom::{Binding, Heading, Page};

/// Outline depth of the first list; `h2` items sit directly in it.
pub const BASE_LEVEL: u8 = 2;

/// Link of an outline item to its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocLink {
    pub id: String,
    pub text: String,
}

/// One item of the generated outline.
///
/// Items without a link fill skipped levels, so a heading always sits as
/// many lists deep as its level says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub link: Option<TocLink>,
    pub level: u8,
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    fn heading(id: String, text: String, level: u8) -> Self {
        Self {
            link: Some(TocLink { id, text }),
            level,
            children: Vec::new(),
        }
    }

    fn gap(level: u8, children: Vec<TocEntry>) -> Self {
        Self {
            link: None,
            level,
            children,
        }
    }

    pub fn is_gap(&self) -> bool {
        self.link.is_none()
    }

    pub fn id(&self) -> Option<&str> {
        self.link.as_ref().map(|link| link.id.as_str())
    }
}

/// Synthetic anchor for a heading that has no usable id.
pub fn synthetic_id(index: usize) -> String {
    format!("heading-{index}")
}

/// Resolve every heading's anchor, writing synthetic ids back to the page.
///
/// Returns `(id, heading)` pairs in document order.
pub fn assign_ids(page: &dyn Page) -> Vec<(String, Heading)> {
    page.headings()
        .into_iter()
        .enumerate()
        .map(|(index, heading)| {
            let id = match heading.id.as_deref() {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => {
                    let id = synthetic_id(index);
                    page.set_heading_id(index, &id);
                    id
                }
            };
            (id, heading)
        })
        .collect()
}

/// Build the nested outline from consecutive heading levels.
///
/// Starting from [`BASE_LEVEL`], a heading `n` levels deeper than the
/// previous one opens `n` lists and a shallower one closes the difference.
/// Lists opened with no item to hang from get a link-less gap item, so the
/// outline stays a tree. Out-of-order levels never fail.
pub fn build_outline(headings: Vec<(String, Heading)>) -> Vec<TocEntry> {
    // lists[d] holds the items at depth d + 1.
    let mut lists: Vec<Vec<TocEntry>> = vec![Vec::new()];

    for (id, heading) in headings {
        let level = heading.level.max(BASE_LEVEL);
        let depth = usize::from(level - BASE_LEVEL) + 1;
        while lists.len() > depth {
            close_list(&mut lists);
        }
        while lists.len() < depth {
            lists.push(Vec::new());
        }
        if let Some(list) = lists.last_mut() {
            list.push(TocEntry::heading(id, heading.text.trim().to_string(), level));
        }
    }
    while lists.len() > 1 {
        close_list(&mut lists);
    }
    lists.pop().unwrap_or_default()
}

/// Close the deepest list, nesting it under the last item of its parent list.
fn close_list(lists: &mut Vec<Vec<TocEntry>>) {
    let Some(children) = lists.pop() else {
        return;
    };
    let parent_depth = lists.len();
    let Some(parent_list) = lists.last_mut() else {
        return;
    };
    match parent_list.last_mut() {
        Some(parent) => parent.children.extend(children),
        None => {
            let level = BASE_LEVEL + parent_depth as u8 - 1;
            parent_list.push(TocEntry::gap(level, children));
        }
    }
}

/// Same-page anchor target of a TOC link, without the leading `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scan the page and render its table of contents into `#toc`.
///
/// Returns the number of headings linked.
pub fn build_table_of_contents(page: &dyn Page) -> usize {
    if !page.exists(Binding::Toc) {
        return 0;
    }

    let headings = assign_ids(page);
    let count = headings.len();
    let outline = build_outline(headings);
    page.set_inner_html(Binding::Toc, &render_toc(outline));

    tracing::debug!("Table of contents built from {count} headings");
    count
}
