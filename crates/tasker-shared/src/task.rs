use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_MINUTES: u32 = 30;

pub const DEFAULT_PRIORITY: u8 = 3;

fn default_priority() -> u8 {
    DEFAULT_PRIORITY
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDto {
    pub id: u64,
    pub task_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: u8,
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default)]
    pub reminder_sent: bool,
}

impl TaskDto {
    pub fn is_completed(&self) -> bool {
        self.completed != 0
    }

    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(task_name) = &patch.task_name {
            self.task_name = task_name.clone();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskCreate {
    pub task_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
    pub notes: String,
    pub priority: u8,
    pub completed: u8,
}

impl TaskCreate {
    pub fn new(task_name: String, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            task_name,
            date,
            time,
            duration: DEFAULT_DURATION_MINUTES,
            notes: String::new(),
            priority: DEFAULT_PRIORITY,
            completed: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.task_name.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.duration.is_none()
            && self.notes.is_none()
            && self.priority.is_none()
    }
}

pub fn active_tasks(tasks: &[TaskDto]) -> Vec<TaskDto> {
    let mut active: Vec<TaskDto> = tasks
        .iter()
        .filter(|task| !task.is_completed())
        .cloned()
        .collect();
    active.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
    active
}

pub fn completed_tasks(tasks: &[TaskDto]) -> Vec<TaskDto> {
    tasks
        .iter()
        .filter(|task| task.is_completed())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::{TaskCreate, TaskDto, TaskPatch, active_tasks, completed_tasks};

    fn task(id: u64, name: &str, date: &str, time: &str, completed: u8) -> TaskDto {
        TaskDto {
            id,
            task_name: name.to_string(),
            date: date.parse().expect("date"),
            time: time.parse().expect("time"),
            duration: 30,
            notes: String::new(),
            completed,
            priority: 3,
            reminder_sent: false,
        }
    }

    #[test]
    fn partition_is_total_and_disjoint() {
        let tasks = vec![
            task(1, "a", "2026-08-25", "09:00:00", 0),
            task(2, "b", "2026-08-25", "10:00:00", 1),
            task(3, "c", "2026-08-26", "08:00:00", 0),
            task(4, "d", "2026-08-24", "23:30:00", 1),
        ];

        let active = active_tasks(&tasks);
        let done = completed_tasks(&tasks);

        assert_eq!(active.len() + done.len(), tasks.len());
        assert!(active.iter().all(|t| !t.is_completed()));
        assert!(done.iter().all(|t| t.is_completed()));
        for t in &active {
            assert!(!done.iter().any(|d| d.id == t.id));
        }
    }

    #[test]
    fn active_list_orders_by_date_then_time() {
        let tasks = vec![
            task(1, "later", "2026-08-26", "08:00:00", 0),
            task(2, "earlier", "2026-08-25", "10:00:00", 0),
            task(3, "same day earlier", "2026-08-25", "09:00:00", 0),
        ];

        let active = active_tasks(&tasks);
        let ids: Vec<u64> = active.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn apply_patch_touches_only_supplied_fields() {
        let mut t = task(7, "Buy bread", "2026-09-01", "12:00:00", 0);
        let patch = TaskPatch {
            task_name: Some("Buy milk".to_string()),
            ..TaskPatch::default()
        };

        t.apply_patch(&patch);

        assert_eq!(t.id, 7);
        assert_eq!(t.task_name, "Buy milk");
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2026, 9, 1).expect("date"));
        assert_eq!(
            t.time,
            NaiveTime::from_hms_opt(12, 0, 0).expect("time")
        );
        assert_eq!(t.duration, 30);
        assert_eq!(t.priority, 3);
    }

    #[test]
    fn patch_serialization_skips_unset_fields() {
        let patch = TaskPatch {
            task_name: Some("Buy milk".to_string()),
            priority: Some(1),
            ..TaskPatch::default()
        };

        let json = serde_json::to_value(&patch).expect("serialize patch");
        let object = json.as_object().expect("object");
        assert_eq!(object.len(), 2);
        assert_eq!(object["task_name"], "Buy milk");
        assert_eq!(object["priority"], 1);
    }

    #[test]
    fn task_wire_shape_matches_backend_fields() {
        let raw = r#"{
            "id": 12,
            "task_name": "Water the plants",
            "date": "2026-08-30",
            "time": "18:30:00",
            "duration": 15,
            "notes": "back garden too",
            "completed": 0,
            "priority": 2,
            "reminder_sent": true
        }"#;

        let t: TaskDto = serde_json::from_str(raw).expect("decode task");
        assert_eq!(t.id, 12);
        assert_eq!(t.task_name, "Water the plants");
        assert!(!t.is_completed());
        assert!(t.reminder_sent);

        let create = TaskCreate::new(
            "Water the plants".to_string(),
            t.date,
            t.time,
        );
        let json = serde_json::to_value(&create).expect("serialize create");
        assert_eq!(json["duration"], 30);
        assert_eq!(json["priority"], 3);
        assert_eq!(json["completed"], 0);
    }

    #[test]
    fn missing_optional_columns_use_defaults() {
        let raw = r#"{
            "id": 5,
            "task_name": "Call mom",
            "date": "2026-08-27",
            "time": "19:00:00",
            "duration": 10
        }"#;

        let t: TaskDto = serde_json::from_str(raw).expect("decode task");
        assert_eq!(t.completed, 0);
        assert_eq!(t.priority, 3);
        assert!(!t.reminder_sent);
        assert!(t.notes.is_empty());
    }
}
