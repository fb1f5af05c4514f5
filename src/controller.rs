//! Refreshes carry a generation; a response for anything but the latest one
//! is dropped, so a slow older request never replaces a newer result.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use yew::Reducible;

use crate::api::Snapshot;
use crate::error::ClientError;
use crate::models::{ListingQuery, SortColumn, SortOrder, Transaction};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub query: ListingQuery,
    /// Bumped by [`Action::Reload`] to re-run the fetch for an unchanged query.
    pub revision: u32,
    pub balance: Option<i64>,
    pub transactions: Vec<Transaction>,
    pub total: u64,
    pub loading: bool,
    pub uploading: bool,
    pub refresh_failed: bool,
    latest_generation: u64,
}

pub enum Action {
    SetPage(u32),
    /// New sort column/order together with a reset to page 1.
    Resort {
        sort_by: SortColumn,
        order: SortOrder,
    },
    Reload,
    RefreshStarted(u64),
    RefreshFinished {
        generation: u64,
        outcome: Result<Snapshot, ClientError>,
    },
    UploadStarted,
    UploadFinished,
}

impl ViewState {
    pub fn new(per_page: u32) -> Self {
        Self {
            query: ListingQuery::new(per_page),
            revision: 0,
            balance: None,
            transactions: Vec::new(),
            total: 0,
            loading: false,
            uploading: false,
            refresh_failed: false,
            latest_generation: 0,
        }
    }

    /// Whatever changes here must trigger exactly one refetch.
    pub fn fetch_key(&self) -> (ListingQuery, u32) {
        (self.query, self.revision)
    }

    /// Gates the file input and upload button.
    pub fn busy(&self) -> bool {
        self.loading || self.uploading
    }

    pub fn set_page(&mut self, page: u32) {
        self.query.page = page;
    }

    /// Does not touch the page; callers pair it with a page reset.
    pub fn set_sort(&mut self, sort_by: SortColumn, order: SortOrder) {
        self.query.sort_by = sort_by;
        self.query.order = order;
    }

    fn begin_refresh(&mut self, generation: u64) {
        if generation > self.latest_generation {
            self.latest_generation = generation;
        }
        self.loading = true;
    }

    fn finish_refresh(&mut self, outcome: Result<Snapshot, ClientError>) {
        self.loading = false;
        match outcome {
            Ok(snapshot) => {
                self.balance = Some(snapshot.balance);
                self.transactions = snapshot.listing.items;
                self.total = snapshot.listing.total;
                self.refresh_failed = false;
            }
            Err(err) => {
                warn!(error = %err, "refresh failed");
                self.balance = None;
                self.transactions.clear();
                self.total = 0;
                self.refresh_failed = true;
            }
        }
    }
}

/// Hands out the tag for the next refresh.
pub fn next_generation(counter: &RefCell<u64>) -> u64 {
    let mut counter = counter.borrow_mut();
    *counter += 1;
    *counter
}

impl Reducible for ViewState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let Action::RefreshFinished { generation, .. } = &action {
            if *generation != self.latest_generation {
                debug!(
                    generation = *generation,
                    latest = self.latest_generation,
                    "discarding stale refresh"
                );
                return self;
            }
        }

        let mut next = (*self).clone();
        match action {
            Action::SetPage(page) => next.set_page(page),
            Action::Resort { sort_by, order } => {
                next.set_sort(sort_by, order);
                next.set_page(1);
            }
            Action::Reload => next.revision = next.revision.wrapping_add(1),
            Action::RefreshStarted(generation) => next.begin_refresh(generation),
            Action::RefreshFinished { outcome, .. } => next.finish_refresh(outcome),
            Action::UploadStarted => next.uploading = true,
            Action::UploadFinished => next.uploading = false,
        }
        Rc::new(next)
    }
}
