use super::*;

fn diary() -> PolicyTable {
    PolicyTable::diary().unwrap()
}

fn access(table: &PolicyTable, path: &str) -> Option<AccessType> {
    table.lookup(path).map(|p| p.access)
}

// =============================================================
// Diary table
// =============================================================

#[test]
fn diary_table_is_well_formed() {
    let table = diary();
    assert_eq!(table.len(), DIARY_PAGES.len());
    assert!(!table.is_empty());
}

#[test]
fn diary_table_lists_only_routed_pages() {
    let patterns: Vec<&str> = DIARY_PAGES.iter().map(|(pattern, _)| *pattern).collect();
    assert_eq!(
        patterns,
        vec!["/", "/diaries", "/diaries/new", "/diaries/[id]", "/pictures", "/auth/login"]
    );
    assert!(diary().lookup("/auth/signup").is_none());
}

#[test]
fn public_pages_resolve_to_anyone() {
    let table = diary();
    for path in ["/", "/diaries", "/pictures", "/auth/login"] {
        assert_eq!(access(&table, path), Some(AccessType::Anyone), "{path}");
    }
}

#[test]
fn new_diary_page_is_members_only_by_exact_match() {
    let table = diary();
    assert_eq!(access(&table, "/diaries/new"), Some(AccessType::MembersOnly));
    assert_eq!(table.policy_for("/diaries/new").layout, LayoutFlags::FRAME);
}

#[test]
fn detail_page_resolves_through_template() {
    let table = diary();
    assert_eq!(access(&table, "/diaries/42"), Some(AccessType::MembersOnly));
    assert_eq!(access(&table, "/diaries/42?tab=photos"), Some(AccessType::MembersOnly));
}

#[test]
fn template_prefix_rule_is_permissive_for_deeper_paths() {
    let table = diary();
    assert_eq!(access(&table, "/diaries/42/edit"), Some(AccessType::MembersOnly));
}

#[test]
fn auth_pages_hide_all_chrome() {
    let table = diary();
    assert_eq!(table.policy_for("/auth/login").layout, LayoutFlags::NONE);
}

#[test]
fn unknown_path_is_unresolved_and_defaults_public() {
    let table = diary();
    assert!(table.lookup("/nowhere").is_none());
    let policy = table.policy_for("/nowhere");
    assert_eq!(policy.access, AccessType::Anyone);
    assert_eq!(policy.layout, LayoutFlags::FULL);
}

#[test]
fn query_fragment_and_trailing_slash_are_ignored() {
    let table = diary();
    assert_eq!(access(&table, "/diaries/?page=2"), Some(AccessType::Anyone));
    assert_eq!(access(&table, "/diaries/7#comments"), Some(AccessType::MembersOnly));
}

#[test]
fn bare_template_prefix_does_not_match() {
    let table = PolicyTable::from_entries([(
        "/items/[id]",
        PagePolicy::new(AccessType::MembersOnly, LayoutFlags::FULL),
    )])
    .unwrap();
    assert!(table.lookup("/items").is_none());
    assert!(table.lookup("/items/").is_none());
    assert!(table.lookup("/itemsx").is_none());
}

#[test]
fn longest_template_prefix_wins() {
    let outer = PagePolicy::new(AccessType::Anyone, LayoutFlags::FULL);
    let inner = PagePolicy::new(AccessType::MembersOnly, LayoutFlags::NONE);
    let table = PolicyTable::from_entries([("/a/[x]", outer), ("/a/b/[y]", inner)]).unwrap();
    assert_eq!(table.lookup("/a/b/c"), Some(&inner));
    assert_eq!(table.lookup("/a/c"), Some(&outer));
}

// =============================================================
// Construction errors
// =============================================================

fn build(pattern: &str) -> Result<PolicyTable, PolicyError> {
    PolicyTable::from_entries([(pattern, PagePolicy::default())])
}

#[test]
fn relative_pattern_is_rejected() {
    assert_eq!(build("diaries").unwrap_err(), PolicyError::NotAbsolute("diaries".to_owned()));
}

#[test]
fn two_dynamic_segments_are_rejected() {
    assert!(matches!(build("/[a]/[b]"), Err(PolicyError::MultipleDynamicSegments(_))));
}

#[test]
fn dynamic_segment_must_be_last() {
    assert!(matches!(build("/diaries/[id]/edit"), Err(PolicyError::DynamicNotLast(_))));
}

#[test]
fn malformed_brackets_are_rejected() {
    for pattern in ["/x/[id", "/x/id]", "/x/[]", "/x/a[id]", "/x/[[id]]"] {
        assert!(matches!(build(pattern), Err(PolicyError::MalformedSegment(_))), "{pattern}");
    }
}

#[test]
fn duplicate_patterns_are_rejected() {
    let p = PagePolicy::default();
    assert!(matches!(
        PolicyTable::from_entries([("/a", p), ("/a/", p)]),
        Err(PolicyError::Duplicate(_))
    ));
    assert!(matches!(
        PolicyTable::from_entries([("/a/[x]", p), ("/a/[y]", p)]),
        Err(PolicyError::Duplicate(_))
    ));
}

#[test]
fn trailing_slash_on_template_is_tolerated() {
    let table = build("/notes/[id]/").unwrap();
    assert!(table.lookup("/notes/1").is_some());
}

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_path_cases() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("///"), "/");
    assert_eq!(normalize_path("/a/b/"), "/a/b");
    assert_eq!(normalize_path("/a?x=1"), "/a");
    assert_eq!(normalize_path("/a#top"), "/a");
}

#[test]
fn access_type_serializes_kebab_case() {
    assert_eq!(serde_json::to_string(&AccessType::MembersOnly).unwrap(), "\"members-only\"");
}
