use skeletons::constants::SKIP_MARKER;
use skeletons::ignore::{build_skip_set, skip_markers};

#[test]
fn test_default_skip_markers() {
    let glob_set = skip_markers().unwrap();
    assert!(glob_set.is_match(SKIP_MARKER));
    assert!(glob_set.is_match("content/.gitkeep"));
    assert!(!glob_set.is_match("content/_index.md"));
}

#[test]
fn test_custom_skip_markers() {
    let glob_set = build_skip_set(&[".keep", "*.bak"]).unwrap();
    assert!(glob_set.is_match("static/.keep"));
    assert!(glob_set.is_match("layouts/home.html.bak"));
    assert!(!glob_set.is_match("layouts/home.html"));
    assert!(!glob_set.is_match("static/.gitkeep"));
}
