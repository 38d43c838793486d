//! Addressable list location and navigation history.
//!
//! A location is the `page`/`search` query string that reproduces a view of
//! the attendee list. It is accepted on start-up and pushed to the history on
//! every change.

use url::form_urlencoded;

/// Page and search text that identify one view of the attendee list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLocation {
    /// 1-indexed page number
    pub page: u32,
    /// Search text, empty when no filter is applied
    pub search: String,
}

impl Default for ListLocation {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl ListLocation {
    /// Parse a location from a query string or URL.
    ///
    /// # Arguments
    /// * `input` - `page=2&search=ana`, `?page=2`, or a full URL with a query
    ///
    /// # Returns
    /// * `ListLocation` - Parsed location
    ///
    /// # Details
    /// Unknown parameters are ignored. A missing, non-numeric or zero `page`
    /// falls back to 1, a missing `search` to the empty string.
    pub fn parse(input: &str) -> Self {
        let query = if let Some(query) = input.strip_prefix('?') {
            query
        } else if input.contains("://") {
            input.split_once('?').map(|(_, query)| query).unwrap_or_default()
        } else {
            input
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut location = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    location.page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                "search" => location.search = value.into_owned(),
                _ => {}
            }
        }
        location
    }

    /// Serialize the location as a query string (without leading `?`).
    ///
    /// # Returns
    /// * `String` - `page=<n>` followed by `&search=<text>` when search is set
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("page", &self.page.to_string());
        if !self.search.is_empty() {
            serializer.append_pair("search", &self.search);
        }
        serializer.finish()
    }
}

/// Pushed locations, oldest first.
///
/// Entries are pushed on user changes and popped by back; the current entry
/// is replaced only when the view redirects itself (out-of-range page).
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Vec<ListLocation>,
}

impl NavigationHistory {
    /// Create a history whose first entry is the initial location.
    pub fn new(initial: ListLocation) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Push a new entry.
    pub fn push(&mut self, location: ListLocation) {
        self.entries.push(location);
    }

    /// Go back one entry.
    ///
    /// # Returns
    /// * `Option<&ListLocation>` - The now-current location, or None if
    ///   already at the initial entry
    pub fn back(&mut self) -> Option<&ListLocation> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.entries.last()
    }

    /// Replace the current entry without adding one.
    pub fn replace_current(&mut self, location: ListLocation) {
        if let Some(current) = self.entries.last_mut() {
            *current = location;
        }
    }

    /// Current location.
    pub fn current(&self) -> &ListLocation {
        // back() never pops the initial entry
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(page: u32, search: &str) -> ListLocation {
        ListLocation {
            page,
            search: search.to_string(),
        }
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(ListLocation::parse(""), ListLocation::default());
        assert_eq!(ListLocation::parse("?"), ListLocation::default());
    }

    #[test]
    fn test_parse_query_forms() {
        assert_eq!(ListLocation::parse("page=3&search=ana"), location(3, "ana"));
        assert_eq!(ListLocation::parse("?search=ana&page=3"), location(3, "ana"));
        assert_eq!(
            ListLocation::parse("http://localhost:5173/?page=7&search=leandro%20s#top"),
            location(7, "leandro s")
        );
        assert_eq!(ListLocation::parse("search=a+b"), location(1, "a b"));
    }

    #[test]
    fn test_parse_invalid_page_falls_back_to_first() {
        assert_eq!(ListLocation::parse("page=abc").page, 1);
        assert_eq!(ListLocation::parse("page=0").page, 1);
        assert_eq!(ListLocation::parse("page=-2").page, 1);
    }

    #[test]
    fn test_to_query_omits_empty_search() {
        assert_eq!(location(1, "").to_query(), "page=1");
        assert_eq!(location(5, "leandro").to_query(), "page=5&search=leandro");
    }

    #[test]
    fn test_query_reload_reproduces_location() {
        let original = location(12, "joão & maria");
        assert_eq!(ListLocation::parse(&original.to_query()), original);
    }

    #[test]
    fn test_history_back_stops_at_initial_entry() {
        let mut history = NavigationHistory::new(location(1, ""));
        history.push(location(2, ""));
        history.push(location(1, "ana"));
        assert_eq!(history.len(), 3);

        assert_eq!(history.back(), Some(&location(2, "")));
        assert_eq!(history.back(), Some(&location(1, "")));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), &location(1, ""));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_replace_current_keeps_length() {
        let mut history = NavigationHistory::new(location(1, ""));
        history.push(location(99, ""));
        history.replace_current(location(23, ""));

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), &location(23, ""));
        assert_eq!(history.back(), Some(&location(1, "")));
    }

    #[test]
    fn test_parse_keeps_question_mark_inside_value() {
        assert_eq!(ListLocation::parse("search=what?"), location(1, "what?"));
        assert_eq!(ListLocation::parse("?search=what?&page=2"), location(2, "what?"));
        assert_eq!(ListLocation::parse("http://localhost:5173/"), ListLocation::default());
    }
}
