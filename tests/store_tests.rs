use lifetrack::models::Priority;
use lifetrack::store::{CategoryPatch, NewTodo, Tracker, FALLBACK_CATEGORY, PROTECTED_CATEGORIES};
use chrono::NaiveDate;

fn new_todo(title: &str, category_id: &str) -> NewTodo {
    NewTodo {
        title: title.into(),
        priority: Priority::Medium,
        category_id: category_id.into(),
        due_date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
        due_time: None,
    }
}

#[test]
fn test_new_tracker_has_the_default_categories() {
    let tracker = Tracker::new();
    assert_eq!(tracker.categories().len(), 4);
    for id in PROTECTED_CATEGORIES {
        assert!(tracker.category(id).is_some());
        assert!(Tracker::is_protected(id));
    }
    assert!(tracker.todos().is_empty());
}

#[test]
fn test_add_todo_prepends() {
    let mut tracker = Tracker::new();
    tracker.add_todo(new_todo("First", "work")).unwrap();
    tracker.add_todo(new_todo("Second", "work")).unwrap();

    assert_eq!(tracker.todos().len(), 2);
    assert_eq!(tracker.todos()[0].title, "Second");
    assert_eq!(tracker.todos()[1].title, "First");
}

#[test]
fn test_add_todo_rejects_blank_title() {
    let mut tracker = Tracker::new();
    assert!(tracker.add_todo(new_todo("", "work")).is_none());
    assert!(tracker.add_todo(new_todo("   ", "work")).is_none());
    assert!(tracker.todos().is_empty());
}

#[test]
fn test_toggle_flips_back_and_forth() {
    let mut tracker = Tracker::new();
    let id = tracker.add_todo(new_todo("Flip me", "work")).unwrap();
    assert!(!tracker.todo(&id).unwrap().completed);

    assert!(tracker.toggle_todo(&id));
    assert!(tracker.todo(&id).unwrap().completed);

    assert!(tracker.toggle_todo(&id));
    assert!(!tracker.todo(&id).unwrap().completed);
}

#[test]
fn test_toggle_unknown_id_is_a_noop() {
    let mut tracker = Tracker::seeded();
    let before: Vec<bool> = tracker.todos().iter().map(|t| t.completed).collect();

    assert!(!tracker.toggle_todo("no-such-id"));

    let after: Vec<bool> = tracker.todos().iter().map(|t| t.completed).collect();
    assert_eq!(before, after);
}

#[test]
fn test_add_category_appends() {
    let mut tracker = Tracker::new();
    let id = tracker.add_category("Garden", "green", "home").unwrap();

    let last = tracker.categories().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.name, "Garden");
    assert!(!Tracker::is_protected(&id));
}

#[test]
fn test_add_category_rejects_blank_name() {
    let mut tracker = Tracker::new();
    assert!(tracker.add_category("  ", "blue", "briefcase").is_none());
    assert_eq!(tracker.categories().len(), 4);
}

#[test]
fn test_update_category_merges_fields() {
    let mut tracker = Tracker::new();
    let id = tracker.add_category("Garden", "green", "home").unwrap();

    let updated = tracker.update_category(&id, CategoryPatch {
        color: Some("orange".into()),
        ..Default::default()
    });
    assert!(updated);

    let cat = tracker.category(&id).unwrap();
    assert_eq!(cat.name, "Garden");
    assert_eq!(cat.color, "orange");
    assert_eq!(cat.icon, "home");
}

#[test]
fn test_update_category_unknown_id_is_a_noop() {
    let mut tracker = Tracker::new();
    let updated = tracker.update_category("no-such-id", CategoryPatch {
        name: Some("Ghost".into()),
        ..Default::default()
    });
    assert!(!updated);
}

#[test]
fn test_update_category_ignores_blank_name() {
    let mut tracker = Tracker::new();
    let id = tracker.add_category("Garden", "green", "home").unwrap();

    tracker.update_category(&id, CategoryPatch {
        name: Some("   ".into()),
        ..Default::default()
    });
    assert_eq!(tracker.category(&id).unwrap().name, "Garden");
}

#[test]
fn test_delete_protected_category_is_refused() {
    let mut tracker = Tracker::seeded();
    let categories_before = tracker.categories().len();

    assert!(!tracker.delete_category("work"));

    assert_eq!(tracker.categories().len(), categories_before);
    assert!(tracker.category("work").is_some());
}

#[test]
fn test_delete_unknown_category_is_a_noop() {
    let mut tracker = Tracker::new();
    assert!(!tracker.delete_category("no-such-id"));
    assert_eq!(tracker.categories().len(), 4);
}

#[test]
fn test_delete_category_reassigns_its_todos() {
    let mut tracker = Tracker::new();
    let id = tracker.add_category("Garden", "green", "home").unwrap();
    tracker.add_todo(new_todo("Water the plants", &id)).unwrap();
    tracker.add_todo(new_todo("Buy seeds", &id)).unwrap();
    tracker.add_todo(new_todo("Unrelated", "work")).unwrap();

    assert!(tracker.delete_category(&id));

    assert!(tracker.category(&id).is_none());
    for t in tracker.todos() {
        assert_ne!(t.category_id, id);
    }
    let reassigned = tracker
        .todos()
        .iter()
        .filter(|t| t.category_id == FALLBACK_CATEGORY)
        .count();
    assert_eq!(reassigned, 2);
    // No to-do may ever point at a missing category.
    for t in tracker.todos() {
        assert!(tracker.category(&t.category_id).is_some());
    }
}
