//! Poem directory: the loaded manifest plus live search/tag filtering.
//!
//! DESIGN
//! ======
//! The collection is written exactly once, when the manifest load completes.
//! Every search or tag change re-derives the visible subset from that master
//! copy, so filters never compound. `recompute` is the only writer of the
//! view.
//!
//! The directory moves `Loading -> Ready` or `Loading -> Failed`. `Failed` is
//! terminal and ignores further input.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::net::manifest::ManifestError;
use crate::net::types::PoemRecord;

/// Placeholder shown when no record passes the current filters.
pub const NO_POEMS_TEXT: &str = "No poems found.";
/// Placeholder shown when the manifest could not be loaded.
pub const LOAD_FAILED_TEXT: &str = "Could not load poems list.";
/// Link target for records without a resolvable `file`.
pub const NO_LINK_HREF: &str = "#";

/// Manifest load lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Collection populated; filters are live.
    Ready,
    /// Fetch failed; only the failure placeholder is shown.
    Failed,
}

/// Current search text and tag selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search box contents.
    pub search: String,
    /// Selected tag; empty means no tag filter.
    pub tag: String,
}

impl FilterState {
    /// Trimmed, lowercased search term. Empty means no search filter.
    pub fn search_term(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// Lowercased tag selection. Empty means no tag filter.
    pub fn tag_term(&self) -> String {
        self.tag.to_lowercase()
    }
}

/// One rendered row of the poem list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEntry {
    /// Fixed-text row with no link.
    Placeholder(&'static str),
    /// Link to a poem page.
    Link { href: String, text: String },
}

/// A generated tag filter button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagOption {
    /// Button label, as first seen in the manifest.
    pub label: String,
    /// Filter value (lowercased label; empty for "All").
    pub value: String,
    /// Whether this option is the current tag selection.
    pub active: bool,
}

/// Label for the button that clears the tag filter.
pub const ALL_TAGS_LABEL: &str = "All";

/// Directory state owned by the poem index page.
#[derive(Clone, Debug, Default)]
pub struct PoemDirectory {
    phase: LoadPhase,
    poems: Vec<PoemRecord>,
    filter: FilterState,
    /// Indices into `poems`; `None` until the first render-worthy event.
    view: Option<Vec<usize>>,
    diagnostic: Option<String>,
}

impl PoemDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn poems(&self) -> &[PoemRecord] {
        &self.poems
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Error message reported when the load failed.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Complete the manifest load.
    ///
    /// Only the first completion counts; later calls are ignored so the
    /// collection is written at most once.
    pub fn apply_load(&mut self, result: Result<Vec<PoemRecord>, ManifestError>) {
        if self.phase != LoadPhase::Loading {
            return;
        }
        match result {
            Ok(poems) => {
                self.poems = poems;
                self.phase = LoadPhase::Ready;
                self.recompute();
            }
            Err(err) => {
                leptos::logging::error!("failed to load poems list: {err}");
                self.diagnostic = Some(err.to_string());
                self.phase = LoadPhase::Failed;
                self.view = None;
            }
        }
    }

    /// Update the search text and re-filter.
    pub fn set_search(&mut self, text: &str) {
        if self.phase == LoadPhase::Failed {
            return;
        }
        text.clone_into(&mut self.filter.search);
        self.recompute();
    }

    /// Update the tag selection and re-filter. Empty clears the tag filter.
    pub fn set_tag(&mut self, tag: &str) {
        if self.phase == LoadPhase::Failed {
            return;
        }
        self.filter.tag = tag.to_lowercase();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = Some(filter_poems(&self.poems, &self.filter));
    }

    /// Records currently visible, in manifest order.
    pub fn filtered(&self) -> Vec<&PoemRecord> {
        self.view
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|&i| self.poems.get(i))
            .collect()
    }

    /// "All" followed by one option per distinct tag in first-seen order.
    ///
    /// Tags that differ only by case collapse into the first label seen.
    /// Exactly one option is active. Empty until the manifest has loaded.
    pub fn tag_options(&self) -> Vec<TagOption> {
        if self.phase != LoadPhase::Ready {
            return Vec::new();
        }
        let selected = self.filter.tag_term();
        let mut options = vec![TagOption {
            label: ALL_TAGS_LABEL.to_owned(),
            value: String::new(),
            active: selected.is_empty(),
        }];
        for tag in self.poems.iter().flat_map(PoemRecord::tag_list) {
            let value = tag.to_lowercase();
            if value.is_empty() || options.iter().any(|o| o.value == value) {
                continue;
            }
            let active = value == selected;
            options.push(TagOption { label: tag.clone(), value, active });
        }
        options
    }

    /// Rows to render, with links resolved against `origin`.
    pub fn entries(&self, origin: &str) -> Vec<ListEntry> {
        match self.phase {
            LoadPhase::Failed => vec![ListEntry::Placeholder(LOAD_FAILED_TEXT)],
            LoadPhase::Loading | LoadPhase::Ready => match &self.view {
                None => Vec::new(),
                Some(view) if view.is_empty() => vec![ListEntry::Placeholder(NO_POEMS_TEXT)],
                Some(view) => view
                    .iter()
                    .filter_map(|&i| self.poems.get(i))
                    .map(|poem| ListEntry::Link {
                        href: resolve_href(poem.file.as_deref(), origin),
                        text: poem.display_title().to_owned(),
                    })
                    .collect(),
            },
        }
    }
}

/// Indices of the records in `poems` that pass `filter`, in order.
pub fn filter_poems(poems: &[PoemRecord], filter: &FilterState) -> Vec<usize> {
    let term = filter.search_term();
    let tag = filter.tag_term();
    poems
        .iter()
        .enumerate()
        .filter(|(_, poem)| term.is_empty() || matches_search(poem, &term))
        .filter(|(_, poem)| tag.is_empty() || has_tag(poem, &tag))
        .map(|(i, _)| i)
        .collect()
}

/// Substring match on title, author, or any tag. `term` must be lowercased.
fn matches_search(poem: &PoemRecord, term: &str) -> bool {
    let contains = |field: &Option<String>| field.as_deref().is_some_and(|s| s.to_lowercase().contains(term));
    contains(&poem.title)
        || contains(&poem.author)
        || poem.tag_list().iter().any(|t| t.to_lowercase().contains(term))
}

/// Exact case-insensitive tag match. `tag` must be lowercased.
fn has_tag(poem: &PoemRecord, tag: &str) -> bool {
    poem.tag_list().iter().any(|t| t.to_lowercase() == tag)
}

/// Resolve a manifest `file` against the page origin.
///
/// Absent, empty, or unresolvable paths yield [`NO_LINK_HREF`].
pub fn resolve_href(file: Option<&str>, origin: &str) -> String {
    let Some(file) = file.filter(|f| !f.is_empty()) else {
        return NO_LINK_HREF.to_owned();
    };
    url::Url::parse(origin)
        .and_then(|base| base.join(file))
        .map_or_else(|_| NO_LINK_HREF.to_owned(), String::from)
}
