use std::cell::RefCell;
use std::rc::Rc;

use webcache_location::{
    is_webcache_host, normalize_url, provide_navigator, select_navigator, AmbientLocation,
    CacheAwareNavigator, HistoryStrategy, Navigator, Options, PassThroughNavigator,
};

const CACHED_ROOT: &str =
    "http://webcache.googleusercontent.local:3000/search?q=cache:https://www.angularclass.com/";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Push {
        state: Option<String>,
        title: String,
        url: String,
        query: String,
    },
    Replace {
        state: Option<String>,
        title: String,
        url: String,
        query: String,
    },
}

/// Records every history call; normalizes like a router with no base href.
#[derive(Debug, Default)]
struct RecordingStrategy {
    calls: Vec<Call>,
}

impl HistoryStrategy for RecordingStrategy {
    fn push_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str) {
        self.calls.push(Call::Push {
            state: state.map(str::to_string),
            title: title.to_string(),
            url: url.to_string(),
            query: query.to_string(),
        });
    }

    fn replace_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str) {
        self.calls.push(Call::Replace {
            state: state.map(str::to_string),
            title: title.to_string(),
            url: url.to_string(),
            query: query.to_string(),
        });
    }
}

fn push(url: &str, query: &str) -> Call {
    Call::Push {
        state: None,
        title: String::new(),
        url: url.to_string(),
        query: query.to_string(),
    }
}

fn replace(url: &str, query: &str) -> Call {
    Call::Replace {
        state: None,
        title: String::new(),
        url: url.to_string(),
        query: query.to_string(),
    }
}

fn cache_navigator() -> CacheAwareNavigator<RecordingStrategy, AmbientLocation> {
    CacheAwareNavigator::new(
        RecordingStrategy::default(),
        AmbientLocation::new("webcache.googleusercontent.local:3000", CACHED_ROOT, ""),
    )
}

#[test]
fn normalize_empty_ending_path_is_empty() {
    assert_eq!(cache_navigator().normalize(CACHED_ROOT), "");
}

#[test]
fn normalize_host_without_trailing_slash() {
    let url = "http://webcache.googleusercontent.local:3000/search?q=cache:https://www.angularclass.com";
    assert_eq!(cache_navigator().normalize(url), "//www.angularclass.com");
}

#[test]
fn normalize_returns_original_path() {
    let nav = cache_navigator();
    assert_eq!(nav.normalize(&format!("{CACHED_ROOT}courses")), "/courses");
    assert_eq!(
        nav.normalize(
            "http://webcache.googleusercontent.local:3000/search?q=cache:https://www.blog.angularclass.com/search?aB32*#sj"
        ),
        "/search?aB32*#sj"
    );
}

#[test]
fn navigate_pushes_wrapped_url() {
    for path in ["courses", "courses/test123"] {
        let mut nav = cache_navigator();
        nav.navigate(path, "");
        assert_eq!(
            nav.strategy().calls,
            [push(&format!("{CACHED_ROOT}{path}"), "")]
        );
    }
}

#[test]
fn replace_uses_the_url_navigate_would_push() {
    for (path, query) in [("courses", ""), ("/courses/test123", "page=2")] {
        let mut nav = cache_navigator();
        nav.navigate(path, query);
        nav.replace(path, query);

        let calls = &nav.strategy().calls;
        let Call::Push { url: pushed, .. } = &calls[0] else {
            panic!("expected push first, got {calls:?}");
        };
        assert_eq!(calls[1], replace(pushed, query));
    }
}

#[test]
fn navigate_samples_location_on_every_call() {
    let location = Rc::new(RefCell::new(AmbientLocation::new(
        "webcache.googleusercontent.local:3000",
        "/search",
        "?q=cache:https://www.angularclass.com/&hl=en",
    )));
    let mut nav = CacheAwareNavigator::new(RecordingStrategy::default(), Rc::clone(&location));

    nav.navigate("courses", "");
    location.borrow_mut().search = "?q=cache:https://www.angularclass.com/courses&hl=de".to_string();
    nav.navigate("about", "");

    assert_eq!(
        nav.strategy().calls,
        [
            push("/search?q=cache:https://www.angularclass.com/courses&hl=en", ""),
            push("/search?q=cache:https://www.angularclass.com/about&hl=de", ""),
        ]
    );
}

#[test]
fn pass_through_delegates_untouched() {
    let mut nav = PassThroughNavigator::new(RecordingStrategy::default());
    nav.navigate("/courses", "a=1");
    nav.replace("courses", "");

    assert_eq!(
        nav.strategy().calls,
        [push("/courses", "a=1"), replace("courses", "")]
    );
    assert_eq!(nav.normalize("/courses/"), normalize_url("/courses/", ""));
}

#[test]
fn host_dispatch_selects_by_webcache_token() {
    assert!(is_webcache_host("webcache.googleusercontent.local"));
    assert!(!is_webcache_host("example.com"));

    let nav = select_navigator(
        "webcache.googleusercontent.local",
        RecordingStrategy::default(),
        AmbientLocation::default(),
    );
    assert!(nav.is_cache_aware());

    let nav = select_navigator("example.com", RecordingStrategy::default(), AmbientLocation::default());
    assert!(!nav.is_cache_aware());
}

#[test]
fn selection_is_not_revisited_when_host_changes() {
    let location = Rc::new(RefCell::new(AmbientLocation::new("example.com", "/", "")));
    let mut nav = provide_navigator(RecordingStrategy::default(), Rc::clone(&location), &Options::default())
        .unwrap_or_else(|err| panic!("default options are valid: {err}"));
    assert!(!nav.is_cache_aware());

    *location.borrow_mut() = AmbientLocation::new("webcache.googleusercontent.local", CACHED_ROOT, "");
    nav.navigate("courses", "");

    assert!(!nav.is_cache_aware());
    assert_eq!(nav.strategy().calls, [push("courses", "")]);
}

#[test]
fn selected_cache_navigator_from_href() {
    let location = AmbientLocation::from_href(
        "http://webcache.googleusercontent.local:3000/search?q=cache:https://www.angularclass.com/",
    )
    .unwrap_or_else(|| panic!("absolute href"));
    let mut nav = provide_navigator(RecordingStrategy::default(), location, &Options::default())
        .unwrap_or_else(|err| panic!("default options are valid: {err}"));

    nav.navigate("courses", "");
    assert_eq!(
        nav.strategy().calls,
        [push("/search?q=cache:https://www.angularclass.com/courses", "")]
    );
}
