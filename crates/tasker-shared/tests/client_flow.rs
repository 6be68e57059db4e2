use tasker_shared::{
    Session, TaskCreate, TaskDto, TaskPatch, active_tasks, completed_tasks, validate_registration,
};

fn decode_tasks(raw: &str) -> Vec<TaskDto> {
    serde_json::from_str(raw).expect("decode task set")
}

const TASK_SET: &str = r#"[
    {"id": 1, "task_name": "Pay rent", "date": "2026-09-01", "time": "09:00:00",
     "duration": 10, "notes": "", "completed": 0, "priority": 1, "reminder_sent": false},
    {"id": 2, "task_name": "Dentist", "date": "2026-08-28", "time": "14:30:00",
     "duration": 60, "notes": "bring insurance card", "completed": 0, "priority": 2,
     "reminder_sent": true},
    {"id": 3, "task_name": "Old errand", "date": "2026-08-20", "time": "08:00:00",
     "duration": 30, "notes": "", "completed": 1, "priority": 3, "reminder_sent": false}
]"#;

#[test]
fn login_then_task_list_scenario() {
    // Fresh load, no stored token.
    let session = Session::from_stored_token(None);
    assert!(!session.is_authenticated());

    // alice logs in; the client now holds the bearer token.
    let session = session.login_succeeded("bearer-alice".to_string());
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("bearer-alice"));

    // The task list view shows only the incomplete subset, soonest first.
    let tasks = decode_tasks(TASK_SET);
    let active = active_tasks(&tasks);
    assert_eq!(
        active.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![2, 1]
    );
    assert_eq!(completed_tasks(&tasks).iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn complete_action_moves_task_between_lists() {
    let mut tasks = decode_tasks(TASK_SET);

    // Server confirmed POST /task/2/complete; flip the local flag.
    let target = tasks.iter_mut().find(|t| t.id == 2).expect("task 2");
    target.completed = 1;

    let active = active_tasks(&tasks);
    assert!(!active.iter().any(|t| t.id == 2));
    assert!(completed_tasks(&tasks).iter().any(|t| t.id == 2));
}

#[test]
fn delete_removes_task_from_both_lists() {
    let mut tasks = decode_tasks(TASK_SET);
    tasks.retain(|t| t.id != 3);

    assert!(!active_tasks(&tasks).iter().any(|t| t.id == 3));
    assert!(completed_tasks(&tasks).is_empty());
}

#[test]
fn edit_scenario_changes_name_only() {
    let mut tasks = decode_tasks(TASK_SET);
    let before = tasks.iter().find(|t| t.id == 1).expect("task 1").clone();

    let patch = TaskPatch {
        task_name: Some("Buy milk".to_string()),
        ..TaskPatch::default()
    };
    let target = tasks.iter_mut().find(|t| t.id == 1).expect("task 1");
    target.apply_patch(&patch);

    assert_eq!(target.task_name, "Buy milk");
    assert_eq!(target.date, before.date);
    assert_eq!(target.time, before.time);
    assert_eq!(target.duration, before.duration);
}

#[test]
fn edited_due_date_reorders_active_list() {
    let mut tasks = decode_tasks(TASK_SET);

    // Push task 2 past task 1.
    let patch = TaskPatch {
        date: Some("2026-09-02".parse().expect("date")),
        ..TaskPatch::default()
    };
    let target = tasks.iter_mut().find(|t| t.id == 2).expect("task 2");
    target.apply_patch(&patch);

    let ids: Vec<u64> = active_tasks(&tasks).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn register_validation_blocks_network_call() {
    // Mismatch never reaches the wire; the page surfaces the message as-is.
    assert_eq!(
        validate_registration("pw1", "pw2").expect_err("mismatch"),
        "Passwords do not match"
    );
    assert!(validate_registration("pw123456", "pw123456").is_ok());
}

#[test]
fn new_task_payload_carries_canonical_defaults() {
    let create = TaskCreate::new(
        "Water plants".to_string(),
        "2026-08-30".parse().expect("date"),
        "18:00:00".parse().expect("time"),
    );
    assert_eq!(create.duration, 30);
    assert_eq!(create.priority, 3);
    assert_eq!(create.completed, 0);
}

#[test]
fn logout_discards_authentication() {
    let session = Session::from_stored_token(Some("stale".to_string()))
        .restore_confirmed()
        .logged_out();
    assert_eq!(session, Session::Anonymous);
}
