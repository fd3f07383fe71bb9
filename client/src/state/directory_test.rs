use super::*;

const ORIGIN: &str = "https://poems.example";

// =============================================================
// Helpers
// =============================================================

fn poem(title: &str, author: Option<&str>, tags: &[&str]) -> PoemRecord {
    PoemRecord {
        title: Some(title.to_owned()),
        author: author.map(str::to_owned),
        file: Some(format!("poems/{}.html", title.to_lowercase())),
        tags: Some(tags.iter().map(|t| (*t).to_owned()).collect()),
    }
}

fn dawn_and_dusk() -> Vec<PoemRecord> {
    vec![poem("Dawn", None, &["Nature", "Hope"]), poem("Dusk", None, &["nature"])]
}

fn ready(poems: Vec<PoemRecord>) -> PoemDirectory {
    let mut dir = PoemDirectory::new();
    dir.apply_load(Ok(poems));
    dir
}

fn titles(dir: &PoemDirectory) -> Vec<&str> {
    dir.filtered().into_iter().map(PoemRecord::display_title).collect()
}

fn filter(search: &str, tag: &str) -> FilterState {
    FilterState { search: search.to_owned(), tag: tag.to_owned() }
}

// =============================================================
// filter_poems
// =============================================================

#[test]
fn empty_filter_is_identity() {
    let poems = dawn_and_dusk();
    assert_eq!(filter_poems(&poems, &FilterState::default()), vec![0, 1]);
    assert!(filter_poems(&[], &FilterState::default()).is_empty());
}

#[test]
fn whitespace_search_is_no_filter() {
    let poems = dawn_and_dusk();
    assert_eq!(filter_poems(&poems, &filter("   ", "")), vec![0, 1]);
}

#[test]
fn tag_match_is_exact_and_case_insensitive() {
    let poems = dawn_and_dusk();
    assert_eq!(filter_poems(&poems, &filter("", "nature")), vec![0, 1]);
    assert_eq!(filter_poems(&poems, &filter("", "NATURE")), vec![0, 1]);
    assert_eq!(filter_poems(&poems, &filter("", "natur")), Vec::<usize>::new());
    assert_eq!(filter_poems(&poems, &filter("", "hope")), vec![0]);
}

#[test]
fn search_is_substring_and_case_insensitive() {
    let poems = dawn_and_dusk();
    assert_eq!(filter_poems(&poems, &filter("daw", "")), vec![0]);
    assert_eq!(filter_poems(&poems, &filter("  DUS ", "")), vec![1]);
    assert_eq!(filter_poems(&poems, &filter("d", "")), vec![0, 1]);
}

#[test]
fn search_matches_author_and_tags() {
    let poems = vec![
        poem("Untold", Some("Hafez"), &[]),
        poem("Reed", Some("Rumi"), &["Longing"]),
        poem("Night", None, &["Sorrow"]),
    ];
    assert_eq!(filter_poems(&poems, &filter("hafez", "")), vec![0]);
    assert_eq!(filter_poems(&poems, &filter("long", "")), vec![1]);
    assert_eq!(filter_poems(&poems, &filter("rrow", "")), vec![2]);
}

#[test]
fn absent_fields_never_match() {
    let poems = vec![PoemRecord::default(), poem("Spring", None, &[])];
    assert_eq!(filter_poems(&poems, &filter("untitled", "")), Vec::<usize>::new());
    assert_eq!(filter_poems(&poems, &filter("", "spring")), Vec::<usize>::new());
    assert_eq!(filter_poems(&poems, &filter("spr", "")), vec![1]);
}

#[test]
fn search_and_tag_combine() {
    let poems = vec![
        poem("Dawn", None, &["Nature"]),
        poem("Dawn Song", None, &["Love"]),
        poem("Dusk", None, &["Nature"]),
    ];
    assert_eq!(filter_poems(&poems, &filter("dawn", "nature")), vec![0]);
    assert_eq!(filter_poems(&poems, &filter("dawn", "love")), vec![1]);
}

#[test]
fn filtering_preserves_manifest_order() {
    let poems = vec![
        poem("C", None, &["x"]),
        poem("A", None, &["y"]),
        poem("B", None, &["x"]),
        poem("D", None, &["x"]),
    ];
    let view = filter_poems(&poems, &filter("", "x"));
    assert_eq!(view, vec![0, 2, 3]);
    assert!(view.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================
// PoemDirectory lifecycle
// =============================================================

#[test]
fn new_directory_is_loading_and_renders_nothing() {
    let dir = PoemDirectory::new();
    assert_eq!(dir.phase(), LoadPhase::Loading);
    assert!(dir.entries(ORIGIN).is_empty());
    assert!(dir.tag_options().is_empty());
}

#[test]
fn successful_load_renders_full_collection() {
    let dir = ready(dawn_and_dusk());
    assert_eq!(dir.phase(), LoadPhase::Ready);
    assert_eq!(titles(&dir), ["Dawn", "Dusk"]);
    assert_eq!(dir.entries(ORIGIN).len(), 2);
}

#[test]
fn input_before_load_filters_empty_collection() {
    let mut dir = PoemDirectory::new();
    dir.set_search("dawn");
    assert_eq!(dir.phase(), LoadPhase::Loading);
    assert_eq!(dir.entries(ORIGIN), vec![ListEntry::Placeholder(NO_POEMS_TEXT)]);

    dir.apply_load(Ok(dawn_and_dusk()));
    assert_eq!(titles(&dir), ["Dawn"]);
}

#[test]
fn load_failure_renders_single_placeholder_and_logs() {
    let mut dir = PoemDirectory::new();
    dir.apply_load(Err(ManifestError::Network("offline".to_owned())));
    assert_eq!(dir.phase(), LoadPhase::Failed);
    assert_eq!(dir.entries(ORIGIN), vec![ListEntry::Placeholder(LOAD_FAILED_TEXT)]);
    assert_eq!(dir.diagnostic(), Some("manifest request failed: offline"));
}

#[test]
fn failed_directory_ignores_input() {
    let mut dir = PoemDirectory::new();
    dir.apply_load(Err(ManifestError::Status { status: 500 }));
    dir.set_search("dawn");
    dir.set_tag("nature");
    assert_eq!(dir.filter(), &FilterState::default());
    assert_eq!(dir.entries(ORIGIN), vec![ListEntry::Placeholder(LOAD_FAILED_TEXT)]);
    assert!(dir.tag_options().is_empty());
}

#[test]
fn second_load_completion_is_ignored() {
    let mut dir = ready(dawn_and_dusk());
    dir.apply_load(Ok(vec![poem("Other", None, &[])]));
    dir.apply_load(Err(ManifestError::Unavailable));
    assert_eq!(dir.phase(), LoadPhase::Ready);
    assert_eq!(titles(&dir), ["Dawn", "Dusk"]);
}

#[test]
fn filters_never_compound() {
    let mut dir = ready(dawn_and_dusk());
    dir.set_search("daw");
    assert_eq!(titles(&dir), ["Dawn"]);
    dir.set_search("dus");
    assert_eq!(titles(&dir), ["Dusk"]);
    dir.set_search("");
    assert_eq!(titles(&dir), ["Dawn", "Dusk"]);
    assert_eq!(dir.poems().len(), 2);
}

#[test]
fn recompute_is_idempotent() {
    let mut dir = ready(dawn_and_dusk());
    dir.set_tag("Nature");
    let first = dir.entries(ORIGIN);
    dir.set_tag("Nature");
    assert_eq!(dir.entries(ORIGIN), first);
}

#[test]
fn set_tag_stores_lowercased_value() {
    let mut dir = ready(dawn_and_dusk());
    dir.set_tag("HOPE");
    assert_eq!(dir.filter().tag, "hope");
    assert_eq!(titles(&dir), ["Dawn"]);
    dir.set_tag("");
    assert_eq!(titles(&dir), ["Dawn", "Dusk"]);
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn empty_result_renders_one_placeholder() {
    let mut dir = ready(dawn_and_dusk());
    dir.set_search("zzz");
    assert_eq!(dir.entries(ORIGIN), vec![ListEntry::Placeholder("No poems found.")]);
}

#[test]
fn empty_manifest_renders_one_placeholder() {
    let dir = ready(Vec::new());
    assert_eq!(dir.entries(ORIGIN), vec![ListEntry::Placeholder(NO_POEMS_TEXT)]);
}

#[test]
fn entries_link_each_record_in_order() {
    let dir = ready(dawn_and_dusk());
    assert_eq!(
        dir.entries(ORIGIN),
        vec![
            ListEntry::Link { href: "https://poems.example/poems/dawn.html".to_owned(), text: "Dawn".to_owned() },
            ListEntry::Link { href: "https://poems.example/poems/dusk.html".to_owned(), text: "Dusk".to_owned() },
        ]
    );
}

#[test]
fn missing_title_and_file_render_placeholder_link() {
    let dir = ready(vec![PoemRecord::default()]);
    assert_eq!(
        dir.entries(ORIGIN),
        vec![ListEntry::Link { href: "#".to_owned(), text: "Untitled".to_owned() }]
    );
}

#[test]
fn resolve_href_handles_relative_and_absolute_paths() {
    assert_eq!(resolve_href(Some("poems/a.html"), ORIGIN), "https://poems.example/poems/a.html");
    assert_eq!(resolve_href(Some("/poems/a.html"), ORIGIN), "https://poems.example/poems/a.html");
    assert_eq!(resolve_href(Some("../a.html"), ORIGIN), "https://poems.example/a.html");
    assert_eq!(resolve_href(Some("https://other.example/x.html"), ORIGIN), "https://other.example/x.html");
}

#[test]
fn resolve_href_falls_back_to_hash() {
    assert_eq!(resolve_href(None, ORIGIN), NO_LINK_HREF);
    assert_eq!(resolve_href(Some(""), ORIGIN), NO_LINK_HREF);
    assert_eq!(resolve_href(Some("a.html"), "not a url"), NO_LINK_HREF);
}

// =============================================================
// Tag options
// =============================================================

#[test]
fn tag_options_start_with_all_and_dedupe_case_insensitively() {
    let dir = ready(dawn_and_dusk());
    let options = dir.tag_options();
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
    let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(labels, ["All", "Nature", "Hope"]);
    assert_eq!(values, ["", "nature", "hope"]);
}

#[test]
fn tag_options_skip_untagged_records() {
    let dir = ready(vec![PoemRecord::default(), poem("Dawn", None, &["", "Light"])]);
    let labels: Vec<_> = dir.tag_options().into_iter().map(|o| o.label).collect();
    assert_eq!(labels, ["All", "Light"]);
}

fn active_values(dir: &PoemDirectory) -> Vec<String> {
    dir.tag_options().into_iter().filter(|o| o.active).map(|o| o.value).collect()
}

#[test]
fn exactly_one_tag_option_is_active() {
    let mut dir = ready(dawn_and_dusk());
    assert_eq!(active_values(&dir), [""]);

    dir.set_tag("Nature");
    assert_eq!(active_values(&dir), ["nature"]);

    dir.set_search("daw");
    assert_eq!(active_values(&dir), ["nature"]);

    dir.set_tag("");
    assert_eq!(active_values(&dir), [""]);
}
