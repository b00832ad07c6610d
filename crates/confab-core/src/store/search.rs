//! In-thread message search.
//!
//! State machine: `Idle` → `Searching(query="", no results)` →
//! `Searching(query, results, current)`. Stopping is a full reset;
//! navigating wraps around the result list in both directions.

use crate::models::Message;
use crate::store::pubsub::{Publisher, Subscriber, SubscriberId};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Snapshot of the matching message at scan time
    pub message: Message,
    /// Index of the message within the thread at scan time
    pub position: usize,
    /// Occurrences of the query inside this message's text
    pub match_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub is_searching: bool,
    pub query: String,
    pub results: Vec<SearchResult>,
    /// Index into `results`; `None` while there are none
    pub current: Option<usize>,
    pub total_matches: usize,
}

impl SearchState {
    pub fn current_result(&self) -> Option<&SearchResult> {
        self.current.and_then(|index| self.results.get(index))
    }
}

pub struct SearchStore {
    state: Publisher<SearchState>,
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStore {
    pub fn new() -> Self {
        Self {
            state: Publisher::default(),
        }
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.snapshot()
    }

    pub fn is_searching(&self) -> bool {
        self.state.value().is_searching
    }

    /// Enter search mode with an empty query.
    pub fn start(&mut self) {
        self.state.publish(SearchState {
            is_searching: true,
            ..SearchState::default()
        });
    }

    /// Leave search mode and drop everything.
    pub fn stop(&mut self) {
        self.state.publish(SearchState::default());
    }

    /// Scan `thread` top to bottom for case-insensitive occurrences of
    /// `query`. A blank query clears the results but keeps search mode on.
    /// The current index lands on the first result when there is one.
    pub fn search(&mut self, thread: &[Message], query: &str) {
        if query.trim().is_empty() {
            self.state.publish(SearchState {
                is_searching: true,
                ..SearchState::default()
            });
            return;
        }

        let needle = query.to_lowercase();
        let mut results = Vec::new();
        let mut total_matches = 0;
        for (position, message) in thread.iter().enumerate() {
            let match_count = count_matches(&message.text, &needle);
            if match_count > 0 {
                total_matches += match_count;
                results.push(SearchResult {
                    message: message.clone(),
                    position,
                    match_count,
                });
            }
        }

        let current = if results.is_empty() { None } else { Some(0) };
        self.state.publish(SearchState {
            is_searching: true,
            query: query.to_string(),
            results,
            current,
            total_matches,
        });
    }

    /// Advance to the next result, wrapping from the last back to the first.
    pub fn next(&mut self) {
        let mut state = self.state.snapshot();
        if state.results.is_empty() {
            return;
        }
        state.current = Some(match state.current {
            Some(index) => (index + 1) % state.results.len(),
            None => 0,
        });
        self.state.publish(state);
    }

    /// Step back to the previous result, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let mut state = self.state.snapshot();
        if state.results.is_empty() {
            return;
        }
        state.current = Some(match state.current {
            Some(0) | None => state.results.len() - 1,
            Some(index) => index - 1,
        });
        self.state.publish(state);
    }

    pub fn subscribe(&mut self, subscriber: Subscriber<SearchState>) -> SubscriberId {
        self.state.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.state.unsubscribe(id);
    }
}

/// Count non-overlapping occurrences of `needle_lower` in `text`,
/// case-insensitively. The scan restarts after the end of each hit.
fn count_matches(text: &str, needle_lower: &str) -> usize {
    if needle_lower.is_empty() {
        return 0;
    }
    let haystack = text.to_lowercase();
    let mut count = 0;
    let mut start = 0;
    while let Some(found) = haystack[start..].find(needle_lower) {
        count += 1;
        start += found + needle_lower.len();
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(texts: &[&str]) -> Vec<Message> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Message::incoming(&format!("m_{}", i), text, "10:00", Some("a")))
            .collect()
    }

    #[test]
    fn test_search_counts_repeated_occurrences() {
        let mut store = SearchStore::new();
        store.start();
        store.search(&thread(&["hello hello world"]), "hello");

        let state = store.snapshot();
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].match_count, 2);
        assert_eq!(state.total_matches, 2);
        assert_eq!(state.current, Some(0));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut store = SearchStore::new();
        store.start();
        store.search(&thread(&["Hello there", "nothing"]), "hELLo");

        let state = store.snapshot();
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].position, 0);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let mut store = SearchStore::new();
        store.start();
        store.search(&thread(&["aaa"]), "aa");
        assert_eq!(store.snapshot().total_matches, 1);
    }

    #[test]
    fn test_blank_query_clears_results_but_stays_searching() {
        let mut store = SearchStore::new();
        store.start();
        store.search(&thread(&["hello"]), "hello");
        store.search(&thread(&["hello"]), "   ");

        let state = store.snapshot();
        assert!(state.is_searching);
        assert!(state.results.is_empty());
        assert_eq!(state.current, None);
        assert_eq!(state.total_matches, 0);
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_positions_follow_thread_order() {
        let mut store = SearchStore::new();
        store.start();
        store.search(&thread(&["yes", "no", "yes and yes"]), "yes");

        let state = store.snapshot();
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.results[0].position, 0);
        assert_eq!(state.results[1].position, 2);
        assert_eq!(state.total_matches, 3);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut store = SearchStore::new();
        store.start();
        store.search(&thread(&["x", "x", "x"]), "x");

        for _ in 0..3 {
            store.next();
        }
        assert_eq!(store.snapshot().current, Some(0));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut store = SearchStore::new();
        store.start();
        store.search(&thread(&["x", "x", "x"]), "x");

        store.previous();
        assert_eq!(store.snapshot().current, Some(2));
    }

    #[test]
    fn test_navigation_without_results_is_a_no_op() {
        let mut store = SearchStore::new();
        store.start();
        let count = std::rc::Rc::new(std::cell::RefCell::new(0usize));
        let sink = count.clone();
        store.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

        store.next();
        store.previous();
        assert_eq!(*count.borrow(), 1); // replay only
        assert_eq!(store.snapshot().current, None);
    }

    #[test]
    fn test_stop_resets_everything() {
        let mut store = SearchStore::new();
        store.start();
        store.search(&thread(&["hello"]), "hello");
        store.stop();
        assert_eq!(store.snapshot(), SearchState::default());
    }
}
