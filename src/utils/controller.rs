use std::sync::Arc;

use serde::Serialize;
use tokio::{sync::Mutex, task::JoinHandle, time::Duration};
use tracing::{debug, info, warn};

use crate::{
    models::{
        news::{NewsItem, View},
        tag::{self, default_tags, TagFilter},
        tool::{builtin_tools_for, Tool},
    },
    utils::{filter::filter_items, github_client::NewsSource},
};

/// Identifies one category fetch. A completion is applied only while its
/// view is still current and nothing newer has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub view: View,
    pub generation: u64,
}

/// Which stored criteria the filtered list was last derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterBasis {
    None,
    Search,
    Tags,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    pub view: View,
    pub items: Vec<NewsItem>,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
    pub loading: bool,
    pub filter: FilterBasis,
    pub search_term: String,
    pub tags: Vec<TagFilter>,
    pub tools: Vec<Tool>,
}

struct ViewState {
    view: View,
    shown: Option<View>,
    items: Vec<NewsItem>,
    filtered: Vec<NewsItem>,
    tools: Vec<Tool>,
    tags: Vec<TagFilter>,
    search_term: String,
    basis: FilterBasis,
    page: usize,
    loading: bool,
    issued: u64,
    applied: u64,
}

impl ViewState {
    fn visible_len(&self, page_size: usize) -> usize {
        (self.page * page_size).min(self.filtered.len())
    }

    fn set_filtered(&mut self, filtered: Vec<NewsItem>) {
        self.filtered = filtered;
        self.page = 1;
    }

    fn next_ticket(&mut self, view: View) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        FetchTicket {
            view,
            generation: self.issued,
        }
    }

    fn clear_criteria(&mut self) {
        self.search_term.clear();
        self.tags.iter_mut().for_each(|t| t.selected = false);
        self.basis = FilterBasis::None;
    }

    /// Re-derives the filtered list from the full list with the active basis.
    fn refilter(&mut self) {
        let filtered = match self.basis {
            FilterBasis::None => self.items.clone(),
            FilterBasis::Search => filter_items(&self.items, &self.search_term, &[]),
            FilterBasis::Tags => {
                filter_items(&self.items, "", &tag::selected_names(&self.tags))
            }
        };
        self.set_filtered(filtered);
    }
}

pub struct FeedController {
    source: Arc<dyn NewsSource>,
    page_size: usize,
    state: Mutex<ViewState>,
}

impl FeedController {
    pub fn new(source: Arc<dyn NewsSource>, page_size: usize, initial: View) -> Self {
        FeedController {
            source,
            page_size: page_size.max(1),
            state: Mutex::new(ViewState {
                view: initial,
                shown: None,
                items: Vec::new(),
                filtered: Vec::new(),
                tools: Vec::new(),
                tags: default_tags(),
                search_term: String::new(),
                basis: FilterBasis::None,
                page: 1,
                loading: true,
                issued: 0,
                applied: 0,
            }),
        }
    }

    /// Switches to `category` and marks the feed as loading. The returned
    /// ticket must be passed to [`Self::complete_category_change`].
    pub async fn begin_category_change(&self, category: &str) -> FetchTicket {
        let view = View::parse(category);
        let mut state = self.state.lock().await;
        state.view = view;
        state.next_ticket(view)
    }

    /// Issues a ticket for the view current at this instant without switching.
    pub async fn begin_refresh(&self) -> FetchTicket {
        let mut state = self.state.lock().await;
        let view = state.view;
        state.next_ticket(view)
    }

    /// Fetches news and tools for the ticket's view together and applies both
    /// at once. Returns false when the result was discarded as stale.
    ///
    /// A batch for a different view than the one on screen clears the search
    /// term and tag selection; a batch for the same view keeps them and
    /// re-applies them to the new items.
    pub async fn complete_category_change(&self, ticket: FetchTicket) -> bool {
        let key = ticket.view.key();
        let (news, tools) = tokio::join!(self.source.fetch_news(key), self.source.fetch_tools(key));

        let mut state = self.state.lock().await;
        if state.view != ticket.view || ticket.generation <= state.applied {
            warn!(
                fetched = key,
                current = state.view.key(),
                generation = ticket.generation,
                "discarding stale fetch"
            );
            return false;
        }

        debug!(view = key, count = news.len(), "applying fetched batch");
        state.applied = ticket.generation;
        if state.shown != Some(ticket.view) {
            state.clear_criteria();
            state.shown = Some(ticket.view);
        }
        state.items = news;
        state.refilter();
        state.tools = tools;
        if ticket.generation == state.issued {
            state.loading = false;
        }
        true
    }

    pub async fn change_category(&self, category: &str) -> bool {
        let ticket = self.begin_category_change(category).await;
        self.complete_category_change(ticket).await
    }

    /// Re-runs the fetch for whatever view is current.
    pub async fn refresh(&self) -> bool {
        let ticket = self.begin_refresh().await;
        self.complete_category_change(ticket).await
    }

    /// Re-filters the full list by `term` alone.
    pub async fn search(&self, term: &str) -> FeedView {
        let mut state = self.state.lock().await;
        state.search_term = term.to_string();
        state.basis = if term.trim().is_empty() {
            FilterBasis::None
        } else {
            FilterBasis::Search
        };
        state.refilter();
        self.view_of(&state)
    }

    /// Flips a tag and re-filters the full list by the selection as it
    /// stands after the flip.
    pub async fn toggle_tag(&self, tag_id: &str) -> FeedView {
        let mut state = self.state.lock().await;
        if !tag::toggle(&mut state.tags, tag_id) {
            debug!(tag_id, "toggle for unknown tag");
        }
        state.basis = if state.tags.iter().any(|t| t.selected) {
            FilterBasis::Tags
        } else {
            FilterBasis::None
        };
        state.refilter();
        self.view_of(&state)
    }

    /// Reveals one more page, unless everything is already visible.
    pub async fn load_more(&self) -> FeedView {
        let mut state = self.state.lock().await;
        if state.visible_len(self.page_size) < state.filtered.len() {
            state.page += 1;
        }
        self.view_of(&state)
    }

    pub async fn snapshot(&self) -> FeedView {
        let state = self.state.lock().await;
        self.view_of(&state)
    }

    fn view_of(&self, state: &ViewState) -> FeedView {
        let visible = state.visible_len(self.page_size);
        let tools = if state.tools.is_empty() {
            builtin_tools_for(state.view.category())
        } else {
            state.tools.clone()
        };
        FeedView {
            view: state.view,
            items: state.filtered[..visible].to_vec(),
            total: state.filtered.len(),
            page: state.page,
            has_more: visible < state.filtered.len(),
            loading: state.loading,
            filter: state.basis,
            search_term: state.search_term.clone(),
            tags: state.tags.clone(),
            tools,
        }
    }

    /// Starts the periodic refresh. The task stops when the guard is dropped
    /// or once the controller itself is gone.
    pub fn spawn_refresh(self: &Arc<Self>, every: Duration) -> RefreshGuard {
        let controller = Arc::downgrade(self);
        let every = every.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await; // Skip the first immediate tick
            loop {
                interval.tick().await;
                let Some(controller) = controller.upgrade() else {
                    break;
                };
                info!("refreshing feed");
                controller.refresh().await;
            }
        });
        RefreshGuard { handle }
    }
}

pub struct RefreshGuard {
    handle: JoinHandle<()>,
}

impl RefreshGuard {
    pub fn stop(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("feed refresh stopped");
    }
}
