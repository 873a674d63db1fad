#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskflow::db::db::Db;
    use taskflow::db::store::Store;
    use taskflow::db::tasks::{Tasks, TASKS_KEY};
    use taskflow::libs::task::{Priority, TaskDraft, TaskError};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TaskTestContext {
        fn db_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("taskflow.db")
        }

        fn tasks(&self) -> Tasks {
            Tasks::open(self.db_path()).unwrap()
        }
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            TaskTestContext { temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_collection(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();
        assert!(tasks.get_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_add_persists(ctx: &mut TaskTestContext) {
        let due = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let added = {
            let mut tasks = ctx.tasks();
            tasks
                .add(TaskDraft::new("  Pay rent ").with_description("Before noon").with_due_date(due).with_priority(Priority::High))
                .unwrap()
        };

        // Reopen to make sure the task was written to disk
        let stored = ctx.tasks().get_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], added);
        assert_eq!(stored[0].title, "Pay rent");
        assert_eq!(stored[0].description.as_deref(), Some("Before noon"));
        assert_eq!(stored[0].due_date, Some(due));
        assert_eq!(stored[0].priority, Priority::High);
        assert!(!stored[0].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_ids_are_unique(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let first = tasks.add(TaskDraft::new("First")).unwrap();
        let second = tasks.add(TaskDraft::new("Second")).unwrap();

        assert_ne!(first.id, second.id);
        let titles: Vec<String> = tasks.get_all().unwrap().into_iter().map(|task| task.title).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_blank_title_is_rejected(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let error = tasks.add(TaskDraft::new("   ")).unwrap_err();

        assert_eq!(error.downcast_ref::<TaskError>(), Some(&TaskError::EmptyTitle));
        assert!(tasks.get_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let original = tasks.add(TaskDraft::new("Original title")).unwrap();

        let mut edited = original.clone();
        edited.title = "Updated title".to_string();
        edited.priority = Priority::Low;
        edited.created_at = chrono::Utc::now() + chrono::Duration::days(3);
        tasks.update(edited).unwrap();

        let stored = tasks.get_by_id(&original.id).unwrap().unwrap();
        assert_eq!(stored.title, "Updated title");
        assert_eq!(stored.priority, Priority::Low);
        // Creation time belongs to the store
        assert_eq!(stored.created_at, original.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_unknown_task(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let mut task = tasks.add(TaskDraft::new("Real")).unwrap();
        task.id = "missing".to_string();

        let error = tasks.update(task).unwrap_err();
        assert_eq!(error.downcast_ref::<TaskError>(), Some(&TaskError::NotFound("missing".to_string())));
        assert_eq!(tasks.get_all().unwrap()[0].title, "Real");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_and_reopen(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let task = tasks.add(TaskDraft::new("Water plants")).unwrap();

        assert!(tasks.set_completed(&task.id, true).unwrap().completed);
        assert!(ctx.tasks().get_by_id(&task.id).unwrap().unwrap().completed);

        assert!(!tasks.set_completed(&task.id, false).unwrap().completed);
        assert!(!ctx.tasks().get_by_id(&task.id).unwrap().unwrap().completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let keep = tasks.add(TaskDraft::new("Keep")).unwrap();
        let drop = tasks.add(TaskDraft::new("Drop")).unwrap();

        assert_eq!(tasks.delete(&drop.id).unwrap(), drop.id);

        let remaining = ctx.tasks().get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);

        let error = tasks.delete(&drop.id).unwrap_err();
        assert!(matches!(error.downcast_ref::<TaskError>(), Some(TaskError::NotFound(_))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_find_by_prefix(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let task = tasks.add(TaskDraft::new("Find me")).unwrap();

        assert_eq!(tasks.find(&task.id).unwrap().id, task.id);
        assert_eq!(tasks.find(task.short_id()).unwrap().id, task.id);

        let error = tasks.find("zzzz-not-an-id").unwrap_err();
        assert!(matches!(error.downcast_ref::<TaskError>(), Some(TaskError::NotFound(_))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_find_ambiguous_prefix(ctx: &mut TaskTestContext) {
        let raw = r#"[
            {"id":"abc123","title":"One","createdAt":"2024-06-01T09:30:00Z"},
            {"id":"abc456","title":"Two","createdAt":"2024-06-01T09:30:00Z"}
        ]"#;
        let mut store = Store::new(Db::open(ctx.db_path()).unwrap());
        store.set_raw(TASKS_KEY, raw).unwrap();

        let tasks = ctx.tasks();
        let error = tasks.find("abc").unwrap_err();
        assert_eq!(error.downcast_ref::<TaskError>(), Some(&TaskError::AmbiguousId("abc".to_string())));
        assert_eq!(tasks.find("abc4").unwrap().title, "Two");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_malformed_fields_are_sanitised(ctx: &mut TaskTestContext) {
        let raw = r#"[
            {"id":"1","title":"Bad date","dueDate":"someday","priority":"urgent","createdAt":"2024-06-01T09:30:00Z"},
            {"id":"2","title":"Date only","dueDate":"2024-06-20","completed":true,"createdAt":"2024-06-01T09:30:00Z"}
        ]"#;
        let mut store = Store::new(Db::open(ctx.db_path()).unwrap());
        store.set_raw(TASKS_KEY, raw).unwrap();

        let stored = ctx.tasks().get_all().unwrap();
        assert_eq!(stored[0].due_date, None);
        assert_eq!(stored[0].priority, Priority::Medium);
        assert_eq!(stored[1].due_date, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap().and_hms_opt(0, 0, 0));
        assert!(stored[1].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_records_without_created_at_or_completed_load(ctx: &mut TaskTestContext) {
        let raw = r#"[
            {"id":"1","title":"Kept","priority":"high","completed":false,"createdAt":"2024-06-01T09:30:00Z"},
            {"id":"2","title":"Edited","description":"","dueDate":"2024-06-20","priority":"low","completed":false},
            {"id":"3","title":"Null flag","completed":null,"createdAt":"2024-06-02T09:30:00Z"}
        ]"#;
        let mut store = Store::new(Db::open(ctx.db_path()).unwrap());
        store.set_raw(TASKS_KEY, raw).unwrap();

        let mut tasks = ctx.tasks();
        let stored = tasks.get_all().unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[1].title, "Edited");
        assert_eq!(stored[1].created_at, chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);
        assert!(!stored[2].completed);

        // The collection stays writable
        let done = tasks.set_completed("2", true).unwrap();
        assert!(done.completed);
        assert_eq!(done.created_at, chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);
        tasks.add(TaskDraft::new("Fresh")).unwrap();
        assert_eq!(ctx.tasks().get_all().unwrap().len(), 4);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_corrupted_collection_is_an_error(ctx: &mut TaskTestContext) {
        let mut store = Store::new(Db::open(ctx.db_path()).unwrap());
        store.set_raw(TASKS_KEY, r#"{"not":"a list"}"#).unwrap();

        let mut tasks = ctx.tasks();
        assert!(tasks.get_all().is_err());
        // A failed load must not overwrite what is stored
        assert!(tasks.add(TaskDraft::new("New")).is_err());

        let store = Store::new(Db::open(ctx.db_path()).unwrap());
        assert_eq!(store.get_raw(TASKS_KEY).unwrap().as_deref(), Some(r#"{"not":"a list"}"#));
    }
}
