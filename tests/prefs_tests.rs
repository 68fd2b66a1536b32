use lifetrack::models::FontSize;
use lifetrack::prefs::{delete_prefs, load_prefs, save_prefs, Prefs};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

// Use a mutex to ensure tests run serially since they modify the environment variable
static TEST_MUTEX: Mutex<()> = Mutex::new(());

fn with_test_prefs<F>(test_name: &str, f: F)
where
    F: FnOnce(PathBuf),
{
    let _guard = TEST_MUTEX.lock().unwrap();

    let mut path = env::temp_dir();
    path.push(format!("lifetrack_test_{}.json", test_name));

    // Set env var
    env::set_var("LIFETRACK_PREFS", path.to_str().unwrap());

    // Clean up before test
    if path.exists() {
        fs::remove_file(&path).unwrap();
    }

    // Run test
    f(path.clone());

    // Clean up after test
    if path.exists() {
        fs::remove_file(&path).unwrap();
    }
    env::remove_var("LIFETRACK_PREFS");
}

#[test]
fn test_default_when_missing() {
    with_test_prefs("missing", |_path| {
        let prefs = load_prefs();
        assert_eq!(prefs.font_size, FontSize::Medium);
    });
}

#[test]
fn test_save_and_load_roundtrip() {
    with_test_prefs("roundtrip", |path| {
        let prefs = Prefs { font_size: FontSize::Large };
        save_prefs(&prefs).unwrap();
        assert!(path.exists());

        let loaded = load_prefs();
        assert_eq!(loaded.font_size, FontSize::Large);
    });
}

#[test]
fn test_extra_large_uses_kebab_case_key() {
    with_test_prefs("kebab", |path| {
        save_prefs(&Prefs { font_size: FontSize::ExtraLarge }).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("extra-large"));
        assert_eq!(load_prefs().font_size, FontSize::ExtraLarge);
    });
}

#[test]
fn test_unrecognized_value_falls_back_to_medium() {
    with_test_prefs("unrecognized", |path| {
        fs::write(&path, r#"{ "font-size": "gigantic" }"#).unwrap();
        assert_eq!(load_prefs().font_size, FontSize::Medium);
    });
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    with_test_prefs("corrupt", |path| {
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(load_prefs().font_size, FontSize::Medium);
    });
}

#[test]
fn test_reset_deletes_the_file() {
    with_test_prefs("reset", |path| {
        save_prefs(&Prefs { font_size: FontSize::Small }).unwrap();
        assert!(path.exists());

        delete_prefs().unwrap();
        assert!(!path.exists());
        assert_eq!(load_prefs().font_size, FontSize::Medium);
    });
}
