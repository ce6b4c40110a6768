//! Customer-list view status.
//!
//! DESIGN
//! ======
//! Status is a single enum so the loading, error and ready branches can never
//! be active together. A fetch replaces the whole snapshot.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::error::ExchangeError;
use crate::types::Customer;

/// Fetch status of the customer list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Loading,
    Error(String),
    Ready(Vec<Customer>),
}

/// Which branch the listing view renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Table(&'a [Customer]),
}

/// Customer list state owned by the listing view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerListing {
    status: ListingStatus,
}

impl Default for CustomerListing {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerListing {
    /// Views fetch on activation, so a new listing is already loading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: ListingStatus::Loading,
        }
    }

    #[must_use]
    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    /// Drop any previous outcome ahead of a new fetch.
    pub fn begin_fetch(&mut self) {
        self.status = ListingStatus::Loading;
    }

    /// Store the outcome of a fetch.
    pub fn resolve(&mut self, outcome: Result<Vec<Customer>, ExchangeError>) {
        self.status = match outcome {
            Ok(customers) => ListingStatus::Ready(customers),
            Err(err) => ListingStatus::Error(err.to_string()),
        };
    }

    #[must_use]
    pub fn view(&self) -> ListingView<'_> {
        match &self.status {
            ListingStatus::Loading => ListingView::Loading,
            ListingStatus::Error(message) => ListingView::Error(message),
            ListingStatus::Ready(customers) if customers.is_empty() => ListingView::Empty,
            ListingStatus::Ready(customers) => ListingView::Table(customers),
        }
    }

    /// Row count for the footer; only present while the table is shown.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        match self.view() {
            ListingView::Table(customers) => Some(customers.len()),
            _ => None,
        }
    }
}
