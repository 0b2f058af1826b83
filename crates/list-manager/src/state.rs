//! List State
//!
//! The fetched collection plus filter and pagination cursor for one view.
//! All changes go through plain methods so the logic runs without a
//! rendering environment.

use crate::filter::{EmptyFilter, Filter};
use crate::pagination::Pagination;
use crate::record::{Record, RecordId};

/// Confirmed server-side change, ready to be reconciled into local state
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Created(Record),
    Updated(Record),
    Deleted(RecordId),
}

impl Mutation {
    /// Identifier of the record the change applies to
    pub fn id(&self) -> RecordId {
        match self {
            Mutation::Created(record) | Mutation::Updated(record) => record.id,
            Mutation::Deleted(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    /// Server fetch order, never re-sorted locally
    collection: Vec<Record>,
    filter: Filter,
    /// Text last submitted to the filter box
    filter_input: String,
    pub pagination: Pagination,
    empty_filter: EmptyFilter,
}

impl ListState {
    pub fn new(page_size: usize, empty_filter: EmptyFilter) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            empty_filter,
            ..Default::default()
        }
    }

    pub fn collection(&self) -> &[Record] {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.collection.iter().find(|r| r.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn filter_input(&self) -> &str {
        &self.filter_input
    }

    pub fn empty_filter(&self) -> EmptyFilter {
        self.empty_filter
    }

    /// Replace everything after a successful fetch
    pub fn replace_collection(&mut self, records: Vec<Record>) {
        self.collection = records;
    }

    /// Parse `raw` and make it the active filter. Pagination is untouched.
    pub fn apply_filter(&mut self, raw: &str) -> Filter {
        self.filter_input = raw.to_string();
        self.filter = Filter::parse(raw);
        self.filter
    }

    pub fn clear_filter(&mut self) {
        self.filter_input.clear();
        self.filter = Filter::Cleared;
    }

    /// Filtered view over the live collection
    pub fn active_view(&self) -> Vec<&Record> {
        self.filter.select(&self.collection, self.empty_filter)
    }

    /// Rows of the current page of the active view
    pub fn visible_page(&self) -> Vec<Record> {
        let view = self.active_view();
        self.pagination
            .slice(&view)
            .iter()
            .map(|r| (*r).clone())
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.active_view().len())
    }

    pub fn next_page(&mut self) {
        let len = self.active_view().len();
        self.pagination.next(len);
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    /// Reconcile a confirmed change. Returns false when an update or delete
    /// named an id that is not in the collection.
    pub fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::Created(record) => {
                self.collection.push(record);
                true
            }
            Mutation::Updated(record) => match self.collection.iter_mut().find(|r| r.id == record.id) {
                Some(slot) => {
                    *slot = record;
                    true
                }
                None => false,
            },
            Mutation::Deleted(id) => {
                let before = self.collection.len();
                self.collection.retain(|r| r.id != id);
                self.collection.len() != before
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn named(id: RecordId, name: &str) -> Record {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        Record::new(id, fields)
    }

    fn names(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.display("name")).collect()
    }

    fn abc() -> ListState {
        let mut state = ListState::new(2, EmptyFilter::ShowAll);
        state.replace_collection(vec![named(1, "A"), named(2, "B"), named(3, "C")]);
        state
    }

    #[test]
    fn test_paging_then_filter_scenario() {
        let mut state = abc();
        assert_eq!(names(&state.visible_page()), ["A", "B"]);
        state.next_page();
        assert_eq!(names(&state.visible_page()), ["C"]);
        assert_eq!(state.page_count(), 2);

        state.pagination.go_to(0);
        state.apply_filter("2");
        assert_eq!(state.active_view().len(), 1);
        assert_eq!(names(&state.visible_page()), ["B"]);
        assert_eq!(state.filter_input(), "2");
    }

    #[test]
    fn test_filter_does_not_reset_page() {
        let mut state = abc();
        state.next_page();
        state.apply_filter("1");
        assert_eq!(state.pagination.page_index(), 1);
        assert!(state.visible_page().is_empty());
    }

    #[test]
    fn test_cleared_filter_with_show_none() {
        let mut state = ListState::new(5, EmptyFilter::ShowNone);
        state.replace_collection(vec![named(1, "A")]);
        state.apply_filter("nope");
        assert!(state.visible_page().is_empty());
        state.apply_filter("1");
        assert_eq!(names(&state.visible_page()), ["A"]);
        state.clear_filter();
        assert_eq!(state.page_count(), 0);
    }

    #[test]
    fn test_created_appends() {
        let mut state = abc();
        assert!(state.apply(Mutation::Created(named(4, "D"))));
        assert_eq!(state.len(), 4);
        assert_eq!(state.collection().last(), Some(&named(4, "D")));
    }

    #[test]
    fn test_updated_replaces_in_place() {
        let mut state = abc();
        let mut edited = named(2, "B2");
        edited.fields.insert("extra".to_string(), json!(1));
        assert!(state.apply(Mutation::Updated(edited.clone())));
        assert_eq!(state.len(), 3);
        assert_eq!(state.collection()[1], edited);
        assert_eq!(state.find(2), Some(&edited));
    }

    #[test]
    fn test_update_of_unknown_id_is_ignored() {
        let mut state = abc();
        assert!(!state.apply(Mutation::Updated(named(42, "Z"))));
        assert_eq!(names(state.collection()), ["A", "B", "C"]);
    }

    #[test]
    fn test_deleted_removes_by_id() {
        let mut state = abc();
        assert!(state.apply(Mutation::Deleted(2)));
        assert_eq!(state.len(), 2);
        assert!(state.find(2).is_none());
        assert!(!state.apply(Mutation::Deleted(2)));
    }

    #[test]
    fn test_filter_tracks_live_collection() {
        let mut state = abc();
        state.apply_filter("3");
        state.apply(Mutation::Deleted(3));
        assert!(state.active_view().is_empty());
    }
}
