//! Controller Scenario Tests
//!
//! Load/mutate/reload cycles against in-memory and failing stores.

#[cfg(test)]
mod tests {
    use crate::id::SequentialIds;
    use crate::{
        Grouping, KeyValueStore, MemoryStore, StoreError, StoreResult, TodoConfig, TodoController,
        TodoList, TodoRecord, STORAGE_KEY,
    };

    /// Store whose every access fails, like a browser with storage disabled
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Write("quota exceeded".to_string()))
        }
    }

    fn load(store: &MemoryStore) -> TodoController<&MemoryStore, SequentialIds> {
        TodoController::load(store, SequentialIds::default(), TodoConfig::default())
    }

    fn texts(
        todos: &TodoController<&MemoryStore, SequentialIds>,
        grouping: Grouping,
    ) -> Vec<String> {
        todos
            .list()
            .in_grouping(grouping)
            .map(|record| record.text.clone())
            .collect()
    }

    #[test]
    fn test_seed_scenario() {
        let store = MemoryStore::new();
        let mut todos = load(&store);
        assert_eq!(todos.list().len(), 2);

        let walk_id = todos.add("Walk dog").unwrap().id.clone();
        assert_eq!(todos.list().len(), 3);
        assert_eq!(todos.list().get(&walk_id).map(|r| r.complete), Some(false));

        assert_eq!(todos.toggle("_317kdlbkp"), Some(true));
        assert_eq!(texts(&todos, Grouping::Complete), ["Buy Milk", "Buy a house"]);

        assert!(todos.remove("_a7p2joa8h").is_some());
        assert_eq!(todos.list().len(), 2);
        assert!(todos.list().records().iter().all(|r| r.text != "Buy a house"));
    }

    #[test]
    fn test_state_survives_reload() {
        let store = MemoryStore::new();
        {
            let mut todos = load(&store);
            todos.add("Walk dog").unwrap();
            todos.toggle("_317kdlbkp");
        }

        let todos = load(&store);
        assert_eq!(texts(&todos, Grouping::Incomplete), ["Walk dog"]);
        assert_eq!(texts(&todos, Grouping::Complete), ["Buy Milk", "Buy a house"]);
    }

    #[test]
    fn test_clear_all_survives_reload() {
        let store = MemoryStore::new();
        load(&store).clear_all();

        let todos = load(&store);
        assert!(todos.list().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let store = MemoryStore::new();
        let mut todos = load(&store);
        let before = todos.list().clone();

        for record in before.records() {
            todos.toggle(&record.id);
            todos.toggle(&record.id);
        }
        assert_eq!(todos.list(), &before);
        for record in before.records() {
            let grouping = todos.list().get(&record.id).map(TodoRecord::grouping);
            assert_eq!(grouping, Some(record.grouping()));
        }
    }

    #[test]
    fn test_add_grows_by_one_for_any_text() {
        let store = MemoryStore::new();
        let mut todos = load(&store);

        let inputs = ["a", " padded ", "ünïcödé ✔︎", "quote \" and \\ slash"];
        for (n, text) in inputs.into_iter().enumerate() {
            let record = todos.add(text).unwrap().clone();
            assert_eq!(todos.list().len(), 3 + n);
            assert_eq!(record.text, text);
            assert!(!record.complete);
        }
    }

    #[test]
    fn test_blank_add_leaves_collection_unchanged() {
        let store = MemoryStore::new();
        let mut todos = load(&store);
        let before = todos.list().clone();

        for blank in ["", "  ", "\t", "\n \r"] {
            let err = todos.add(blank).unwrap_err();
            assert_eq!(err.to_string(), "You cannot add an empty todo");
        }
        assert_eq!(todos.list(), &before);
    }

    #[test]
    fn test_remove_drops_exactly_one() {
        let store = MemoryStore::new();
        let mut todos = load(&store);
        let id = todos.add("Walk dog").unwrap().id.clone();

        let removed = todos.remove(&id).unwrap();
        assert_eq!(removed.text, "Walk dog");
        assert_eq!(todos.list().len(), 2);
        assert!(todos.list().get(&id).is_none());
    }

    #[test]
    fn test_snapshot_round_trip_is_byte_identical() {
        let json = concat!(
            r#"[{"id":"_a","text":"Ünïcode ✔︎","complete":true},"#,
            r#"{"id":"_b","text":"  spaced  ","complete":false},"#,
            r#"{"id":"_c","text":"say \"hi\"\n","complete":false}]"#,
        );
        let store = MemoryStore::with_entry(STORAGE_KEY, json);

        let todos = load(&store);
        assert_eq!(todos.list().len(), 3);
        assert_eq!(todos.snapshot().unwrap(), json);
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_seed() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "{not json");
        let todos = load(&store);
        assert_eq!(todos.list(), &TodoList::new(TodoConfig::default().seed));
    }

    #[test]
    fn test_unavailable_store_fails_open() {
        let mut todos =
            TodoController::load(BrokenStore, SequentialIds::default(), TodoConfig::default());
        assert_eq!(todos.list().len(), 2);

        todos.add("still works").unwrap();
        assert_eq!(todos.toggle("_317kdlbkp"), Some(true));
        todos.clear_all();
        assert!(todos.list().is_empty());
    }

    #[test]
    fn test_custom_seed() {
        let store = MemoryStore::new();
        let config = TodoConfig::default().with_seed(Vec::new());
        let todos = TodoController::load(&store, SequentialIds::default(), config);
        assert!(todos.list().is_empty());
    }
}
