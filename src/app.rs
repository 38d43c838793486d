//! Application state management.
//!
//! Owns the search/pagination state of the attendee list, keeps the list
//! location in sync with it, and decides which fetch results are applied.

use crate::attendees::{Attendee, AttendeeId, PageRequest};
use crate::loader::{FetchOutcome, FetchRequest};
use crate::location::{ListLocation, NavigationHistory};
use std::collections::HashSet;

/// Fixed number of attendees per page.
pub const PAGE_SIZE: u64 = 10;

/// Application UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal table view
    List,
    /// Typing into the search box
    Search,
}

/// Failure of the last applied fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Previous rows are still shown; the message goes to the status line
    Recoverable(String),
    /// The response was unusable; the table shows the message instead of rows
    Blocking(String),
}

/// Attendee list view state.
#[derive(Debug)]
pub struct App {
    /// Search query string
    pub search: String,
    /// Current 1-indexed page
    pub page: u32,
    /// Attendees on the current page
    pub attendees: Vec<Attendee>,
    /// Total attendees matching the search (all pages)
    pub total: u64,
    /// Current UI mode
    pub mode: UiMode,
    /// Highlighted row (index in `attendees`)
    pub cursor: usize,
    /// Checked rows, by attendee id
    pub selected: HashSet<AttendeeId>,
    /// Error from the last applied fetch
    pub load_error: Option<LoadError>,
    /// Status message to display
    pub status_message: Option<String>,
    history: NavigationHistory,
    /// `total` belongs to a different search than the one being loaded
    total_stale: bool,
    next_seq: u64,
    /// Sequence number of the newest request not yet answered
    in_flight: Option<u64>,
    /// Request waiting to be dispatched by the event loop
    pending: Option<FetchRequest>,
}

impl App {
    /// Create the list view from an initial location.
    ///
    /// # Arguments
    /// * `initial` - Location to start from (e.g. a bookmarked query string)
    ///
    /// # Returns
    /// * `App` - New state with the first fetch already queued
    pub fn new(initial: ListLocation) -> Self {
        let initial = ListLocation {
            page: initial.page.max(1),
            ..initial
        };
        let mut app = Self {
            search: initial.search.clone(),
            page: initial.page,
            attendees: Vec::new(),
            total: 0,
            mode: UiMode::List,
            cursor: 0,
            selected: HashSet::new(),
            load_error: None,
            status_message: None,
            history: NavigationHistory::new(initial),
            total_stale: false,
            next_seq: 0,
            in_flight: None,
            pending: None,
        };
        app.request_reload();
        app
    }

    /// Location reflecting the current page and search.
    pub fn location(&self) -> ListLocation {
        self.history.current().clone()
    }

    /// Location entries pushed so far, including the initial one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of pages for the current total.
    ///
    /// # Returns
    /// * `u32` - `ceil(total / PAGE_SIZE)`, at least 1; 1 while the total
    ///   for a new search has not arrived yet
    pub fn total_pages(&self) -> u32 {
        if self.total_stale {
            return 1;
        }
        let pages = self.total.div_ceil(PAGE_SIZE).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether first/previous page are enabled.
    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether next/last page are enabled.
    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Handle a change of the search text.
    ///
    /// # Arguments
    /// * `text` - New search text
    ///
    /// # Details
    /// Changing the filter invalidates the pagination, so the page is reset
    /// to 1. Pushes a location entry and queues a fetch.
    pub fn on_search_input_change(&mut self, text: String) {
        self.total_stale = self.total_stale || text != self.search;
        self.search = text;
        self.page = 1;
        self.push_location();
        self.request_reload();
    }

    /// Add a character to the search text.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            let mut text = self.search.clone();
            text.push(ch);
            self.on_search_input_change(text);
        }
    }

    /// Remove the last character of the search text.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search && !self.search.is_empty() {
            let mut text = self.search.clone();
            text.pop();
            self.on_search_input_change(text);
        }
    }

    /// Set the current page, push the location and queue a fetch.
    pub fn set_current_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.push_location();
        self.request_reload();
    }

    /// Go to page 1. Disabled on page 1.
    pub fn go_to_first_page(&mut self) {
        if self.can_go_previous() {
            self.set_current_page(1);
        }
    }

    /// Go back one page. Disabled on page 1.
    pub fn go_to_previous_page(&mut self) {
        if self.can_go_previous() {
            self.set_current_page(self.page - 1);
        }
    }

    /// Go forward one page. Disabled on the last page.
    pub fn go_to_next_page(&mut self) {
        if self.can_go_next() {
            self.set_current_page(self.page + 1);
        }
    }

    /// Go to the last page. Disabled on the last page.
    pub fn go_to_last_page(&mut self) {
        if self.can_go_next() {
            self.set_current_page(self.total_pages());
        }
    }

    /// Restore the previous location entry.
    ///
    /// # Returns
    /// * `bool` - False if already at the initial entry
    ///
    /// # Details
    /// Like a browser "back": the entry is popped, nothing is pushed, and
    /// the restored view is fetched again.
    pub fn navigate_back(&mut self) -> bool {
        let Some(previous) = self.history.back().cloned() else {
            return false;
        };
        self.total_stale = self.total_stale || previous.search != self.search;
        self.page = previous.page;
        self.search = previous.search;
        self.request_reload();
        true
    }

    /// Fetch the current view again.
    pub fn reload(&mut self) {
        self.request_reload();
    }

    /// Take the request the event loop should dispatch, if any.
    pub fn take_pending_request(&mut self) -> Option<FetchRequest> {
        self.pending.take()
    }

    /// Apply a fetch completion.
    ///
    /// # Arguments
    /// * `outcome` - Completion delivered by the loader
    ///
    /// # Returns
    /// * `bool` - True if the outcome was applied, false if it was stale
    ///
    /// # Details
    /// Only the answer to the newest request is applied. On success the
    /// slice and total are replaced together; a page beyond the new last page
    /// moves the view to the last page, replacing the current location entry
    /// rather than pushing a new one. Transport and status failures keep
    /// the previous rows; malformed responses clear them.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if self.in_flight != Some(outcome.seq) {
            tracing::debug!(
                seq = outcome.seq,
                latest = ?self.in_flight,
                "discarding stale attendee response"
            );
            return false;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(page) => {
                self.attendees = page.attendees;
                self.total = page.total;
                self.total_stale = false;
                self.load_error = None;
                self.cursor = 0;

                let last_page = self.total_pages();
                if self.page > last_page {
                    tracing::info!(
                        page = self.page,
                        last_page,
                        "requested page is out of range, moving to last page"
                    );
                    self.page = last_page;
                    self.history.replace_current(self.state_location());
                    self.request_reload();
                }
            }
            Err(e) if e.is_recoverable() => {
                tracing::error!("failed to load attendees: {}", e);
                self.load_error = Some(LoadError::Recoverable(format!(
                    "Falha ao carregar participantes: {}",
                    e
                )));
            }
            Err(e) => {
                tracing::error!("unusable attendee response: {}", e);
                self.attendees.clear();
                self.cursor = 0;
                self.load_error = Some(LoadError::Blocking(format!(
                    "Resposta inválida do servidor: {}",
                    e
                )));
            }
        }
        true
    }

    /// "Mostrando X de Y itens" footer text.
    pub fn showing_summary(&self) -> String {
        format!("Mostrando {} de {} itens", self.attendees.len(), self.total)
    }

    /// "Página X de Y" footer text.
    pub fn page_summary(&self) -> String {
        format!("Página {} de {}", self.page, self.total_pages())
    }

    /// Move the row cursor up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.attendees.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.attendees.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Move the row cursor down, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.attendees.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.attendees.len();
    }

    /// Toggle the check box of the row under the cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(attendee) = self.attendees.get(self.cursor) {
            let id = attendee.id.clone();
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        }
    }

    /// Whether every row on the page is checked (false on an empty page).
    pub fn all_on_page_selected(&self) -> bool {
        !self.attendees.is_empty()
            && self
                .attendees
                .iter()
                .all(|attendee| self.selected.contains(&attendee.id))
    }

    /// Header check box: check every row on the page, or uncheck them all
    /// if they already are.
    pub fn toggle_all_on_page(&mut self) {
        if self.all_on_page_selected() {
            for attendee in &self.attendees {
                self.selected.remove(&attendee.id);
            }
        } else {
            for attendee in &self.attendees {
                self.selected.insert(attendee.id.clone());
            }
        }
    }

    /// Whether an attendee's check box is checked.
    pub fn is_selected(&self, attendee: &Attendee) -> bool {
        self.selected.contains(&attendee.id)
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    fn state_location(&self) -> ListLocation {
        ListLocation {
            page: self.page,
            search: self.search.clone(),
        }
    }

    fn push_location(&mut self) {
        self.history.push(self.state_location());
    }

    fn request_reload(&mut self) {
        self.next_seq += 1;
        let seq = self.next_seq;
        let query = if self.search.is_empty() {
            None
        } else {
            Some(self.search.clone())
        };
        self.in_flight = Some(seq);
        self.pending = Some(FetchRequest {
            seq,
            page: PageRequest {
                page_index: self.page - 1,
                query,
            },
        });
    }
}
