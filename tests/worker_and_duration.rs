// tests/worker_and_duration.rs

use stepdag::sim::{DurationModel, DurationPolicy, IDLE_MARKER, Task, Worker, WorkerPool};

#[test]
fn duration_adds_alphabet_position_to_floor() {
    let model = DurationModel::new(60, DurationPolicy::LeadingLetter);
    assert_eq!(model.duration("A"), 61);
    assert_eq!(model.duration("Z"), 86);

    let zero = DurationModel::new(0, DurationPolicy::LeadingLetter);
    assert_eq!(zero.duration("C"), 3);
    assert_eq!(zero.duration("F"), 6);
}

#[test]
fn duration_uses_first_character_case_insensitively() {
    let model = DurationModel::new(0, DurationPolicy::LeadingLetter);
    assert_eq!(model.duration("Build"), 2);
    assert_eq!(model.duration("build"), 2);
    assert_eq!(model.duration("9lives"), 0);
    assert_eq!(model.duration("_x"), 0);
    assert_eq!(model.duration(""), 0);
}

#[test]
fn flat_policy_ignores_the_id() {
    let model = DurationModel::new(7, DurationPolicy::Flat);
    assert_eq!(model.duration("A"), 7);
    assert_eq!(model.duration("Z"), 7);
}

#[test]
fn huge_floor_saturates_instead_of_overflowing() {
    let model = DurationModel::new(u64::MAX, DurationPolicy::LeadingLetter);
    assert_eq!(model.duration("A"), u64::MAX);

    let task = Task::new(0, "Z", u64::MAX - 1, 10);
    assert_eq!(task.completion_time(), u64::MAX);
    assert!(!task.is_completed(1_000));
}

#[test]
fn duration_policy_parses_from_str() {
    assert_eq!("leading-letter".parse::<DurationPolicy>(), Ok(DurationPolicy::LeadingLetter));
    assert_eq!(" FLAT ".parse::<DurationPolicy>(), Ok(DurationPolicy::Flat));
    assert!("random".parse::<DurationPolicy>().is_err());
}

#[test]
fn worker_lifecycle() {
    let mut worker = Worker::new();
    assert!(worker.is_idle());
    assert_eq!(worker.current_task_id(), IDLE_MARKER);

    worker.assign(Task::new(0, "B", 2, 5));
    assert!(!worker.is_idle());
    assert_eq!(worker.current_task_id(), "B");

    let task = worker.task().unwrap();
    assert_eq!(task.completion_time(), 7);
    assert!(!task.is_completed(6));
    assert!(task.is_completed(7));

    let cleared = worker.clear().unwrap();
    assert_eq!(cleared.id, "B");
    assert!(worker.is_idle());
    assert!(worker.clear().is_none());
}

#[test]
#[should_panic(expected = "invalid assignment")]
fn assigning_to_busy_worker_panics() {
    let mut worker = Worker::new();
    worker.assign(Task::new(0, "A", 1, 0));
    worker.assign(Task::new(1, "B", 2, 0));
}

#[test]
fn pool_tracks_idle_slots_and_state() {
    let mut pool = WorkerPool::new(3);
    assert_eq!(pool.len(), 3);
    assert_eq!(pool.idle_slots(), vec![0, 1, 2]);

    pool.worker_mut(1).assign(Task::new(0, "Q", 17, 0));
    assert_eq!(pool.idle_slots(), vec![0, 2]);
    assert_eq!(pool.busy_count(), 1);
    assert_eq!(pool.state(), vec![".", "Q", "."]);
}
