#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, Utc};
    use taskflow::commands::list::Listing;
    use taskflow::libs::config::DisplayConfig;
    use taskflow::libs::task::{Priority, Task, TaskDraft, TaskView};

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn task(id: &str, due: Option<NaiveDateTime>, priority: Priority) -> Task {
        let mut draft = TaskDraft::new(id).with_priority(priority);
        draft.due_date = due;
        Task::from_draft(id.to_string(), draft, Utc::now())
    }

    fn sample() -> Vec<Task> {
        vec![
            task("overdue", Some(at(2024, 6, 10)), Priority::Low),
            task("undated", None, Priority::High),
            task("soon", Some(at(2024, 6, 20)), Priority::Medium),
            task("far-low", Some(at(2024, 8, 1)), Priority::Low),
            task("far-high", Some(at(2024, 9, 1)), Priority::High),
            task("far-medium", Some(at(2024, 7, 15)), Priority::Medium),
        ]
    }

    #[test]
    fn test_today_listing_with_preview() {
        let tasks = sample();
        let listing = Listing::build(&tasks, TaskView::Today, at(2024, 6, 15), false, &DisplayConfig::default());

        let ids: Vec<&str> = listing.tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec!["undated", "overdue"]);
        assert_eq!(listing.overdue, 1);

        let preview = listing.preview.unwrap();
        let preview_ids: Vec<&str> = preview.tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(preview_ids, vec!["far-high", "far-medium", "far-low"]);
        assert_eq!(preview.hidden, 0);
    }

    #[test]
    fn test_preview_limit() {
        let tasks = sample();
        let display = DisplayConfig {
            preview_limit: 1,
            ..DisplayConfig::default()
        };
        let listing = Listing::build(&tasks, TaskView::All, at(2024, 6, 15), false, &display);

        let preview = listing.preview.unwrap();
        assert_eq!(preview.tasks.len(), 1);
        assert_eq!(preview.tasks[0].id, "far-high");
        assert_eq!(preview.hidden, 2);
    }

    #[test]
    fn test_focus_mode_hides_preview() {
        let tasks = sample();
        let listing = Listing::build(&tasks, TaskView::Today, at(2024, 6, 15), true, &DisplayConfig::default());

        assert!(listing.preview.is_none());
        assert_eq!(listing.tasks.len(), 2);
    }

    #[test]
    fn test_no_preview_under_upcoming_or_when_disabled() {
        let tasks = sample();
        let now = at(2024, 6, 15);

        let upcoming = Listing::build(&tasks, TaskView::Upcoming, now, false, &DisplayConfig::default());
        assert!(upcoming.preview.is_none());
        assert_eq!(upcoming.tasks.len(), 3);

        let display = DisplayConfig {
            show_preview: false,
            ..DisplayConfig::default()
        };
        assert!(Listing::build(&tasks, TaskView::Today, now, false, &display).preview.is_none());
    }

    #[test]
    fn test_empty_preview_is_omitted() {
        let tasks = vec![task("only", None, Priority::Medium)];
        let listing = Listing::build(&tasks, TaskView::Today, at(2024, 6, 15), false, &DisplayConfig::default());

        assert!(listing.preview.is_none());
        assert_eq!(listing.overdue, 0);
    }
}
