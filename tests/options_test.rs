use webcache_location::{
    select_navigator_with_options, AmbientLocation, Error, HistoryStrategy, MemoryHistory, Navigator,
    Options,
};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.host_token, "webcache");
    assert_eq!(options.base_href, "");
    assert!(options.validate().is_ok());
}

#[test]
fn options_deserialize_with_missing_fields_defaulted() {
    let options: Options = serde_json::from_str(r#"{"base_href": "/app"}"#)
        .unwrap_or_else(|err| panic!("valid options json: {err}"));
    assert_eq!(options.host_token, "webcache");
    assert_eq!(options.base_href, "/app");

    let options: Options = serde_json::from_str("{}")
        .unwrap_or_else(|err| panic!("valid options json: {err}"));
    assert_eq!(options, Options::default());
}

#[test]
fn options_round_trip_through_json() {
    let options = Options {
        host_token: "cacheview".to_string(),
        base_href: "/app".to_string(),
    };
    let json = serde_json::to_string(&options).unwrap_or_else(|err| panic!("serialize: {err}"));
    let back: Options = serde_json::from_str(&json).unwrap_or_else(|err| panic!("deserialize: {err}"));
    assert_eq!(back, options);
}

#[test]
fn empty_host_token_is_a_config_error() {
    let options = Options {
        host_token: String::new(),
        ..Options::default()
    };
    let result = select_navigator_with_options(
        "webcache.local",
        MemoryHistory::new(),
        AmbientLocation::default(),
        &options,
    );
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn base_href_flows_into_memory_history_normalization() {
    let options = Options {
        base_href: "/app".to_string(),
        ..Options::default()
    };
    let history = MemoryHistory::with_options(&options);
    assert_eq!(history.normalize_default("/app/courses/"), "/courses");

    let location = AmbientLocation::new("webcache.local", "/search", "?q=cache:example.com/");
    let nav = select_navigator_with_options("webcache.local", history, location, &options)
        .unwrap_or_else(|err| panic!("valid options: {err}"));
    assert_eq!(nav.normalize("/search?q=cache:example.com/app/courses/"), "/courses");
}
