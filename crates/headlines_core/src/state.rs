use crate::view_model::{ArticleRowView, Footer, ListViewModel, RenderMode};
use crate::{Article, FetchOutcome, FetchRequest, Intent};

pub type RequestId = u64;

/// Coarse status of the most recent fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    None,
    Loading,
    Ok,
    Error,
}

/// What triggered a fetch. Kept on the in-flight tag for logging and tests.
pub type FetchKind = Intent;

/// Tag of the single fetch whose outcome will be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub request_id: RequestId,
    pub page: u32,
    pub kind: FetchKind,
}

/// Fixed request parameters for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub country: String,
    pub page_size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            page_size: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    query: ListQuery,
    items: Vec<Article>,
    page: Option<u32>,
    total_results: Option<u32>,
    phase: Phase,
    is_refreshing: bool,
    in_flight: Option<InFlight>,
    next_request_id: RequestId,
    dirty: bool,
}

impl ListState {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn items(&self) -> &[Article] {
        &self.items
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn total_results(&self) -> Option<u32> {
        self.total_results
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    pub fn in_flight(&self) -> Option<InFlight> {
        self.in_flight
    }

    /// True when every result the upstream reported has been loaded.
    pub fn is_exhausted(&self) -> bool {
        self.total_results
            .is_some_and(|total| self.items.len() as u64 >= u64::from(total))
    }

    pub fn view(&self) -> ListViewModel {
        let mode = self.render_mode();
        let rows = match mode {
            RenderMode::Populated { .. } => self.items.iter().map(ArticleRowView::from).collect(),
            _ => Vec::new(),
        };
        ListViewModel {
            mode,
            rows,
            is_refreshing: self.is_refreshing,
            page: self.page,
            total_results: self.total_results,
            dirty: self.dirty,
        }
    }

    /// Four-way render mode, derived fresh from the current fields.
    pub fn render_mode(&self) -> RenderMode {
        let on_first_page = matches!(self.page, None | Some(1));
        match self.phase {
            Phase::Loading if on_first_page => RenderMode::InitialLoading,
            Phase::Error if on_first_page && self.items.is_empty() => RenderMode::ErrorEmpty,
            _ if self.items.is_empty() => RenderMode::Empty,
            Phase::Loading => RenderMode::Populated {
                footer: Footer::Spinner,
            },
            _ => RenderMode::Populated {
                footer: Footer::Spacer,
            },
        }
    }

    /// Returns whether state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Records a new in-flight fetch for `page`, superseding any previous one.
    pub(crate) fn begin_fetch(&mut self, kind: FetchKind, page: u32) -> (RequestId, FetchRequest) {
        let prior_phase = self.phase;
        self.next_request_id += 1;
        let request_id = self.next_request_id;

        self.phase = Phase::Loading;
        match kind {
            Intent::Refresh => self.is_refreshing = true,
            Intent::Retry => {
                self.is_refreshing = !matches!(prior_phase, Phase::Error | Phase::None);
            }
            Intent::Initialize | Intent::LoadMore => {}
        }
        self.in_flight = Some(InFlight {
            request_id,
            page,
            kind,
        });
        self.mark_dirty();

        let request = FetchRequest {
            country: self.query.country.clone(),
            page,
            page_size: self.query.page_size,
        };
        (request_id, request)
    }

    /// Applies the outcome of `request_id`. Returns false when the outcome is stale.
    pub(crate) fn apply_outcome(&mut self, request_id: RequestId, outcome: FetchOutcome) -> bool {
        let in_flight = match self.in_flight {
            Some(in_flight) if in_flight.request_id == request_id => in_flight,
            _ => return false,
        };
        self.in_flight = None;
        self.is_refreshing = false;

        match outcome {
            FetchOutcome::Success {
                articles,
                total_results,
            } => {
                if in_flight.page == 1 {
                    self.items = articles;
                } else {
                    self.items.extend(articles);
                }
                self.page = Some(in_flight.page);
                self.total_results = Some(total_results);
                self.phase = Phase::Ok;
            }
            FetchOutcome::Failure { .. } => {
                self.phase = Phase::Error;
            }
        }
        self.mark_dirty();
        true
    }
}
