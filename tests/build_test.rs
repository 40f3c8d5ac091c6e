//! End-to-end build coverage: discovery through axum dispatch.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use perch::{Perch, PerchConfig, Verb};
use tower::ServiceExt;

use common::{
    CollectingReporter, IndexAction, ListSource, QuietAction, RecordingSink, WidgetsAction,
};

fn app(files: Vec<&'static str>) -> Perch {
    let mut app = Perch::new(PerchConfig::default())
        .with_source(ListSource(files))
        .with_reporter(CollectingReporter::default());
    app.register("index", IndexAction::default);
    app.register("widgets", WidgetsAction::default);
    app
}

fn triples(app: &Perch) -> Vec<(Verb, String, String)> {
    let mut sink = RecordingSink::default();
    app.build_into(&mut sink);
    sink.routes
}

#[test]
fn full_build_synthesizes_the_expected_route_set() {
    let routes = triples(&app(vec!["widgets.rs", "index.rs"]));
    assert_eq!(
        routes,
        [
            (Verb::Get, "/".to_string(), "fetch_all".to_string()),
            (Verb::Get, "/widgets/".to_string(), "fetch_all".to_string()),
            (Verb::Get, "/widgets/{id}".to_string(), "fetch_single".to_string()),
            (Verb::Get, "/widgets/stats/".to_string(), "get_stats".to_string()),
            (Verb::Post, "/widgets/".to_string(), "create".to_string()),
            (Verb::Patch, "/widgets/{id}".to_string(), "update".to_string()),
            (Verb::Delete, "/widgets/{id}".to_string(), "delete".to_string()),
        ]
    );
}

#[test]
fn rebuilds_over_an_unchanged_source_are_identical() {
    let app = app(vec!["index.rs", "widgets.rs"]);
    assert_eq!(triples(&app), triples(&app));
}

#[test]
fn actions_index_setting_moves_the_root_module() {
    let config = PerchConfig {
        actions_index: "widgets".to_string(),
        ..PerchConfig::default()
    };
    let mut app = Perch::new(config)
        .with_source(ListSource(vec!["widgets.rs"]))
        .with_reporter(CollectingReporter::default());
    app.register("widgets", WidgetsAction::default);

    let routes = triples(&app);
    assert_eq!(routes[0], (Verb::Get, "/".to_string(), "fetch_all".to_string()));
    assert_eq!(routes[1], (Verb::Get, "/{id}".to_string(), "fetch_single".to_string()));
}

#[test]
fn unresolved_action_is_reported_and_siblings_still_bind() {
    let reporter = CollectingReporter::default();
    let mut app = Perch::new(PerchConfig::default())
        .with_source(ListSource(vec!["index.rs", "phantom.rs"]))
        .with_reporter(reporter.clone());
    app.register("index", IndexAction::default);

    let build = app.build();
    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("`phantom`"));
    assert!(errors[0].contains("`Phantom`"));

    let phantom = build
        .resources
        .iter()
        .find(|r| r.module_name == "phantom")
        .unwrap();
    assert!(!phantom.is_loaded());
    assert!(phantom.routes.is_empty());
    assert_eq!(build.routes().len(), 1);
}

#[test]
fn failing_constructor_is_isolated_like_a_missing_one() {
    let reporter = CollectingReporter::default();
    let mut app = Perch::new(PerchConfig::default())
        .with_source(ListSource(vec!["index.rs", "broken.rs"]))
        .with_reporter(reporter.clone());
    app.register("index", IndexAction::default);
    app.register_fallible("broken", || Err("database offline".into()));

    let build = app.build();
    assert_eq!(build.routes().len(), 1);
    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("database offline"));
}

#[test]
fn zero_route_action_warns_without_aborting_the_build() {
    let reporter = CollectingReporter::default();
    let mut app = Perch::new(PerchConfig::default())
        .with_source(ListSource(vec!["index.rs", "quiet.rs"]))
        .with_reporter(reporter.clone());
    app.register("index", IndexAction::default);
    app.register("quiet", QuietAction::default);

    let build = app.build();
    assert_eq!(build.routes().len(), 1);
    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("`quiet`"));
}

#[test]
fn sink_failure_for_one_action_leaves_siblings_bound() {
    let reporter = CollectingReporter::default();
    let mut app = Perch::new(PerchConfig::default())
        .with_source(ListSource(vec!["index.rs", "widgets.rs"]))
        .with_reporter(reporter.clone());
    app.register("index", IndexAction::default);
    app.register("widgets", WidgetsAction::default);

    let mut sink = RecordingSink {
        fail_prefix: Some("/widgets"),
        ..Default::default()
    };
    app.build_into(&mut sink);

    assert_eq!(
        sink.routes,
        [(Verb::Get, "/".to_string(), "fetch_all".to_string())]
    );
    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("`widgets`"));
}

#[tokio::test]
async fn bound_routes_answer_requests_through_axum() {
    let router = app(vec!["index.rs", "widgets.rs"]).build().into_router();

    let response = router
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Index -> fetch_all");

    let response = router
        .clone()
        .oneshot(Request::get("/widgets/42").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Widgets -> fetch_single(42)");

    let response = router
        .clone()
        .oneshot(Request::post("/widgets/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Widgets -> create");

    // Verb mismatch on a bound path is rejected by the router.
    let response = router
        .clone()
        .oneshot(Request::delete("/widgets/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn extend_hook_adds_routes_outside_the_convention() {
    let build = app(vec!["index.rs"]).build();
    let router = build
        .extend(|router| router.route("/healthz", axum::routing::get(|| async { "ok" })))
        .into_router();

    let response = router
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn debug_build_logs_the_route_table() {
    let config = PerchConfig {
        debug: true,
        ..PerchConfig::default()
    };
    let reporter = CollectingReporter::default();
    let mut app = Perch::new(config)
        .with_source(ListSource(vec!["index.rs"]))
        .with_reporter(reporter.clone());
    app.register("index", IndexAction::default);

    app.build();
    let infos = reporter.infos.lock().unwrap();
    assert_eq!(infos.len(), 1);
    assert!(infos[0].starts_with("Available Routes:"));
    assert!(infos[0].contains("GET"));
    assert!(infos[0].contains("index.rs"));
}

#[test]
fn bare_custom_method_route_is_rejected_by_the_axum_sink() {
    use perch::{Action, ActionMethod};
    use std::sync::Arc;

    struct Bare;

    impl Action for Bare {
        fn methods(self: Arc<Self>) -> Vec<ActionMethod> {
            vec![ActionMethod::new("get", |_request| async { "bare" })]
        }
    }

    let reporter = CollectingReporter::default();
    let mut app = Perch::new(PerchConfig::default())
        .with_source(ListSource(vec!["index.rs"]))
        .with_reporter(reporter.clone());
    app.register("index", || Bare);

    // The synthesized `//` keeps the historical grammar; the axum sink
    // reports it as a binding failure instead of panicking.
    let build = app.build();
    assert_eq!(build.resources[0].routes[0].url, "//");
    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("empty path segment"));
}
