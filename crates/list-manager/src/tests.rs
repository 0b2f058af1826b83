//! List Manager Integration Tests
//!
//! Drives ListManager against an in-memory collection service that can be
//! switched into a failing mode.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::sync::Once;

    use async_trait::async_trait;
    use log::{Level, LevelFilter, Log, Metadata, Record as LogRecord};
    use serde_json::{json, Map, Value};

    use crate::{
        submit_delete, DraftRecord, EmptyFilter, EntitySchema, ListError, ListManager, ListResult, ListState,
        Record, RecordId, RemoteCollection,
    };

    /// Server stand-in: assigns ids on create, fails every call when `failing`
    struct MemoryCollection {
        rows: RefCell<Vec<Record>>,
        next_id: Cell<RecordId>,
        failing: Cell<bool>,
        calls: RefCell<Vec<String>>,
    }

    impl MemoryCollection {
        fn with_rows(rows: Vec<Record>) -> Self {
            let next_id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            Self {
                rows: RefCell::new(rows),
                next_id: Cell::new(next_id),
                failing: Cell::new(false),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn check(&self, call: String) -> ListResult<()> {
            self.calls.borrow_mut().push(call.clone());
            if self.failing.get() {
                Err(ListError::request_failed("TEST", &call, "simulated network error"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl RemoteCollection for MemoryCollection {
        async fn list(&self) -> ListResult<Vec<Record>> {
            self.check("list".to_string())?;
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, draft: &DraftRecord) -> ListResult<Record> {
            self.check("create".to_string())?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let record = Record::from_draft(id, draft.clone());
            self.rows.borrow_mut().push(record.clone());
            Ok(record)
        }

        async fn update(&self, record: &Record) -> ListResult<()> {
            self.check(format!("update {}", record.id))?;
            if let Some(slot) = self.rows.borrow_mut().iter_mut().find(|r| r.id == record.id) {
                *slot = record.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: RecordId) -> ListResult<()> {
            self.check(format!("delete {}", id))?;
            self.rows.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }
    }

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Keeps each thread's log lines so a test only sees its own
    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &LogRecord) {
            CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT_LOGGER: Once = Once::new();

    fn capture_logs() {
        INIT_LOGGER.call_once(|| {
            log::set_logger(&LOGGER).expect("Failed to install logger");
            log::set_max_level(LevelFilter::Info);
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
    }

    fn logged_errors() -> Vec<String> {
        CAPTURED.with(|c| {
            c.borrow()
                .iter()
                .filter(|(level, _)| *level == Level::Error)
                .map(|(_, msg)| msg.clone())
                .collect()
        })
    }

    fn assert_error_logged(prefix: &str) {
        let errors = logged_errors();
        assert!(
            errors.iter().any(|msg| msg.starts_with(prefix) && msg.contains("simulated network error")),
            "no error starting with {:?} in {:?}",
            prefix,
            errors
        );
    }

    fn product(id: RecordId, name: &str) -> Record {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields.insert("description".to_string(), Value::String(String::new()));
        fields.insert("price".to_string(), json!(1.5));
        fields.insert("quantity".to_string(), json!(1));
        Record::new(id, fields)
    }

    async fn setup_manager() -> ListManager<MemoryCollection> {
        let remote = MemoryCollection::with_rows(vec![product(1, "A"), product(2, "B"), product(3, "C")]);
        let mut manager = ListManager::new(EntitySchema::products(), remote, 2);
        manager.load().await.expect("Failed to load");
        manager
    }

    fn names(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.display("name")).collect()
    }

    #[tokio::test]
    async fn test_load_and_page() {
        let mut manager = setup_manager().await;
        assert_eq!(manager.state.len(), 3);
        assert_eq!(names(&manager.state.visible_page()), ["A", "B"]);
        manager.state.next_page();
        assert_eq!(names(&manager.state.visible_page()), ["C"]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_prior_collection() {
        let mut manager = setup_manager().await;
        manager.remote().failing.set(true);
        capture_logs();

        let err = manager.load().await.unwrap_err();
        assert!(err.is_request_failure());
        assert_eq!(names(manager.state.collection()), ["A", "B", "C"]);
        assert_error_logged("[products] error fetching collection: ");
    }

    #[tokio::test]
    async fn test_failed_first_load_leaves_empty_collection() {
        let remote = MemoryCollection::with_rows(vec![product(1, "A")]);
        remote.failing.set(true);
        let mut manager = ListManager::new(EntitySchema::products(), remote, 5);
        assert!(manager.load().await.is_err());
        assert!(manager.state.is_empty());
        assert!(manager.state.visible_page().is_empty());
    }

    #[tokio::test]
    async fn test_create_appends_server_record_and_resets_draft() {
        let mut manager = setup_manager().await;
        manager.open_add_form();
        manager.set_draft_field("name", "D");
        manager.set_draft_field("price", "-4");
        manager.set_draft_field("not_a_field", "ignored");

        let id = manager.submit_draft().await.expect("Failed to create");

        assert_eq!(id, 4);
        assert_eq!(manager.state.len(), 4);
        let created = manager.state.collection().last().unwrap();
        assert_eq!(created, manager.remote().rows.borrow().last().unwrap());
        assert_eq!(created.get("price"), Some(&json!(-4)));
        assert!(created.get("not_a_field").is_none());
        assert_eq!(manager.draft(), &DraftRecord::empty(manager.schema()));
        assert!(!manager.is_add_form_open());
    }

    #[tokio::test]
    async fn test_failed_create_keeps_form_and_draft() {
        let mut manager = setup_manager().await;
        manager.open_add_form();
        manager.set_draft_field("name", "Lámpara");
        manager.remote().failing.set(true);
        capture_logs();

        assert!(manager.submit_draft().await.is_err());

        assert_error_logged("[products] error adding record: ");
        assert_eq!(manager.state.len(), 3);
        assert!(manager.is_add_form_open());
        assert_eq!(manager.draft().display("name"), "Lámpara");

        // retry succeeds once the service recovers
        manager.remote().failing.set(false);
        manager.submit_draft().await.expect("Retry failed");
        assert_eq!(manager.state.collection().last().unwrap().display("name"), "Lámpara");
    }

    #[tokio::test]
    async fn test_cancel_add_form_discards_draft() {
        let mut manager = setup_manager().await;
        manager.open_add_form();
        manager.set_draft_field("name", "X");
        manager.cancel_add_form();
        assert!(!manager.is_add_form_open());
        assert_eq!(manager.draft().display("name"), "");
    }

    #[tokio::test]
    async fn test_update_replaces_matching_record() {
        let mut manager = setup_manager().await;
        manager.open_edit(2).expect("Failed to open edit");
        manager.set_edit_field("name", "B2");
        manager.set_edit_field("quantity", "abc");
        let edited = manager.edit_buffer().cloned().unwrap();

        manager.save_edit().await.expect("Failed to update");

        assert_eq!(manager.state.len(), 3);
        assert_eq!(manager.state.find(2), Some(&edited));
        assert_eq!(manager.state.collection()[1].get("quantity"), Some(&json!("abc")));
        assert!(manager.edit_buffer().is_none());
        assert_eq!(manager.remote().rows.borrow()[1], edited);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_edit_buffer() {
        let mut manager = setup_manager().await;
        manager.open_edit(1).unwrap();
        manager.set_edit_field("name", "Changed");
        manager.remote().failing.set(true);
        capture_logs();

        assert!(manager.save_edit().await.is_err());
        assert_error_logged("[products] error updating #1: ");

        assert_eq!(manager.state.find(1).unwrap().display("name"), "A");
        assert_eq!(manager.edit_buffer().unwrap().display("name"), "Changed");
    }

    #[tokio::test]
    async fn test_update_of_unknown_record_is_not_sent() {
        let mut manager = setup_manager().await;
        let err = manager.update(product(99, "Ghost")).await.unwrap_err();
        assert_eq!(err, ListError::UnknownRecord(99));
        assert!(manager.remote().calls.borrow().iter().all(|c| !c.starts_with("update")));
        assert!(manager.open_edit(99).is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let mut manager = setup_manager().await;
        manager.delete(2).await.expect("Failed to delete");
        assert_eq!(manager.state.len(), 2);
        assert!(manager.state.find(2).is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_collection_unchanged() {
        let mut manager = setup_manager().await;
        manager.remote().failing.set(true);
        capture_logs();

        let err = manager.delete(2).await.unwrap_err();

        assert!(err.is_request_failure());
        assert_error_logged("[products] error deleting #2: ");
        assert_eq!(names(manager.state.collection()), ["A", "B", "C"]);
        assert_eq!(manager.remote().calls.borrow().last().unwrap(), "delete 2");
    }

    #[tokio::test]
    async fn test_successful_round_trips_log_no_errors() {
        capture_logs();
        let mut manager = setup_manager().await;
        manager.delete(1).await.unwrap();
        manager.open_edit(2).unwrap();
        manager.save_edit().await.unwrap();
        assert!(logged_errors().is_empty());
    }

    #[tokio::test]
    async fn test_filter_after_mutations() {
        let mut manager = setup_manager().await;
        manager.state.apply_filter("3");
        assert_eq!(names(&manager.state.visible_page()), ["C"]);
        manager.delete(3).await.unwrap();
        assert!(manager.state.visible_page().is_empty());
        manager.state.apply_filter("");
        assert_eq!(manager.state.active_view().len(), 2);
    }

    #[tokio::test]
    async fn test_stale_page_index_after_delete() {
        let mut manager = setup_manager().await;
        manager.state.next_page();
        manager.delete(3).await.unwrap();
        assert_eq!(manager.state.pagination.page_index(), 1);
        assert!(manager.state.visible_page().is_empty());
        assert!(!manager.state.pagination.has_next(manager.state.len()));
    }

    #[tokio::test]
    async fn test_submit_functions_reconcile_external_state() {
        let remote = MemoryCollection::with_rows(vec![product(1, "A"), product(2, "B")]);
        let mut state = ListState::new(5, EmptyFilter::ShowAll);
        state.replace_collection(remote.rows.borrow().clone());

        let mutation = submit_delete(&remote, "products", 1).await.unwrap();
        assert!(state.apply(mutation));
        assert_eq!(names(state.collection()), ["B"]);

        remote.failing.set(true);
        assert!(submit_delete(&remote, "products", 2).await.is_err());
        assert_eq!(state.len(), 1);
    }
}
