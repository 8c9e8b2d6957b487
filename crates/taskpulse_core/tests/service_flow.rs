use chrono::NaiveDate;
use rusqlite::Connection;
use taskpulse_core::db::open_db_in_memory;
use taskpulse_core::{
    deadline_status, Category, DeadlineStatus, DeleteOutcome, DeleteState, Filter, Motivation,
    Priority, RenameOutcome, SqliteKvRepository, TaskDraft, TaskService, Theme, ToggleOutcome,
    ValidationError,
};

fn service(conn: &Connection) -> TaskService<SqliteKvRepository<'_>> {
    TaskService::load(SqliteKvRepository::new(conn))
}

fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(title, Category::Personal, Priority::Low)
}

#[test]
fn first_task_starts_in_the_lowest_progress_tier() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.add_task(draft("Buy milk")).unwrap();

    let stats = service.statistics();
    assert_eq!(service.task_count(), 1);
    assert_eq!(stats.overall, 0);
    assert_ne!(stats.motivation, Motivation::GettingStarted);
    assert_eq!(stats.motivation, Motivation::KeepGoing);
}

#[test]
fn completing_the_only_task_reaches_all_complete() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let id = service.add_task(draft("Buy milk")).unwrap();
    assert_eq!(service.toggle_completion(id), ToggleOutcome::Completed);

    let stats = service.statistics();
    assert_eq!(stats.overall, 100);
    assert_eq!(stats.motivation, Motivation::AllComplete);
}

#[test]
fn blank_title_is_rejected_and_store_is_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.add_task(draft("existing")).unwrap();

    let err = service.add_task(draft("   ")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyTitle);
    assert_eq!(service.task_count(), 1);
}

#[test]
fn added_titles_and_annotations_are_trimmed() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let mut input = draft("  Buy milk  ");
    input.purpose = " breakfast ".to_string();
    input.description = " two liters ".to_string();
    let id = service.add_task(input).unwrap();

    let task = service.find(id).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.purpose, "breakfast");
    assert_eq!(task.description, "two liters");
    assert!(!task.completed);
}

#[test]
fn toggling_twice_restores_the_original_state() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let id = service.add_task(draft("flip me")).unwrap();

    assert_eq!(service.toggle_completion(id), ToggleOutcome::Completed);
    assert_eq!(service.toggle_completion(id), ToggleOutcome::Reactivated);
    assert!(!service.find(id).unwrap().completed);
}

#[test]
fn toggling_a_missing_id_is_a_benign_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    assert_eq!(service.toggle_completion(999), ToggleOutcome::NotFound);
}

#[test]
fn rename_replaces_the_title() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let id = service.add_task(draft("Old title")).unwrap();
    let outcome = service.rename_task(id, "  New title  ").unwrap();

    assert_eq!(outcome, RenameOutcome::Renamed);
    assert_eq!(service.find(id).unwrap().title, "New title");
}

#[test]
fn rename_to_the_same_title_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let id = service.add_task(draft("Keep me")).unwrap();

    assert_eq!(
        service.rename_task(id, "Keep me").unwrap(),
        RenameOutcome::Unchanged
    );
    assert_eq!(
        service.rename_task(id, "  Keep me  ").unwrap(),
        RenameOutcome::Unchanged
    );
}

#[test]
fn rename_rejects_blank_titles_and_tolerates_missing_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let id = service.add_task(draft("Stable")).unwrap();

    assert_eq!(
        service.rename_task(id, "   ").unwrap_err(),
        ValidationError::EmptyTitle
    );
    assert_eq!(service.find(id).unwrap().title, "Stable");

    assert_eq!(
        service.rename_task(999, "whatever").unwrap(),
        RenameOutcome::NotFound
    );
}

#[test]
fn request_then_cancel_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let id = service.add_task(draft("survivor")).unwrap();

    service.request_delete(id);
    assert_eq!(service.delete_state(), DeleteState::PendingDelete(id));

    service.cancel_delete();
    assert_eq!(service.delete_state(), DeleteState::Idle);
    assert_eq!(service.task_count(), 1);
}

#[test]
fn confirm_removes_the_pending_task() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let id = service.add_task(draft("doomed")).unwrap();
    service.request_delete(id);

    assert_eq!(service.confirm_delete(), DeleteOutcome::Deleted(id));
    assert_eq!(service.delete_state(), DeleteState::Idle);
    assert_eq!(service.task_count(), 0);
}

#[test]
fn confirm_without_a_pending_target_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.add_task(draft("bystander")).unwrap();

    assert_eq!(service.confirm_delete(), DeleteOutcome::NothingPending);
    assert_eq!(service.task_count(), 1);
}

#[test]
fn a_new_request_replaces_the_pending_target_silently() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let first = service.add_task(draft("first")).unwrap();
    let second = service.add_task(draft("second")).unwrap();

    service.request_delete(first);
    service.request_delete(second);

    assert_eq!(service.confirm_delete(), DeleteOutcome::Deleted(second));
    assert!(service.find(first).is_some());
    assert!(service.find(second).is_none());
}

#[test]
fn confirming_a_stale_target_reports_it_gone() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.request_delete(424242);

    assert_eq!(service.confirm_delete(), DeleteOutcome::AlreadyGone(424242));
    assert_eq!(service.delete_state(), DeleteState::Idle);
}

#[test]
fn filter_selection_drives_visible_tasks() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let open = service.add_task(draft("open")).unwrap();
    let done = service.add_task(draft("done")).unwrap();
    service.toggle_completion(done);

    assert_eq!(service.filter(), Filter::All);
    assert_eq!(service.visible_tasks().len(), 2);

    service.set_filter(Filter::Active);
    let visible = service.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, open);

    service.set_filter(Filter::Completed);
    let visible = service.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, done);
}

#[test]
fn state_survives_a_service_reload() {
    let conn = open_db_in_memory().unwrap();

    let (kept, removed) = {
        let mut service = service(&conn);
        let kept = service.add_task(draft("kept")).unwrap();
        let removed = service.add_task(draft("removed")).unwrap();
        service.toggle_completion(kept);
        service.set_theme(Theme::Light);
        service.request_delete(removed);
        service.confirm_delete();
        (kept, removed)
    };

    let reloaded = service(&conn);
    assert_eq!(reloaded.task_count(), 1);
    assert!(reloaded.find(kept).unwrap().completed);
    assert!(reloaded.find(removed).is_none());
    assert_eq!(reloaded.theme(), Theme::Light);
    // An in-flight delete never survives the session.
    assert_eq!(reloaded.delete_state(), DeleteState::Idle);
}

#[test]
fn completing_a_task_clears_its_overdue_flag() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    let mut input = draft("late");
    input.deadline = NaiveDate::from_ymd_opt(2026, 6, 14);
    let id = service.add_task(input).unwrap();

    assert_eq!(
        deadline_status(service.find(id).unwrap(), today),
        DeadlineStatus::Overdue
    );

    service.toggle_completion(id);
    assert_eq!(
        deadline_status(service.find(id).unwrap(), today),
        DeadlineStatus::OnTrack
    );
}
