//! Dispatching through a recording transport.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use waypoint::{DispatchError, Dispatcher, Transport, invocation, invoke};
use waypoint_define::{OperationEntry, OperationRegistry, PlaceholderKind, RestMethod};

#[derive(Debug, thiserror::Error)]
#[error("rate limited on {0}")]
struct RateLimited(String);

/// Records each call and answers with a fixed value, or fails for one path.
#[derive(Debug, Default)]
struct Recorder {
    calls: Mutex<Vec<(RestMethod, String, Vec<Value>)>>,
    fail_on: Option<String>,
}

impl Recorder {
    fn failing_on(path: &str) -> Self {
        Self {
            fail_on: Some(path.to_string()),
            ..Self::default()
        }
    }

    fn record(&self, verb: RestMethod, path: &str, params: Vec<Value>) -> Result<Value, RateLimited> {
        self.calls
            .lock()
            .unwrap()
            .push((verb, path.to_string(), params));
        if self.fail_on.as_deref() == Some(path) {
            return Err(RateLimited(path.to_string()));
        }
        Ok(json!({"verb": verb.to_string(), "path": path}))
    }

    fn calls(&self) -> Vec<(RestMethod, String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for Recorder {
    type Output = Value;
    type Error = RateLimited;

    async fn get(&self, path: &str, params: Vec<Value>) -> Result<Value, RateLimited> {
        self.record(RestMethod::Get, path, params)
    }

    async fn post(&self, path: &str, params: Vec<Value>) -> Result<Value, RateLimited> {
        self.record(RestMethod::Post, path, params)
    }

    async fn put(&self, path: &str, params: Vec<Value>) -> Result<Value, RateLimited> {
        self.record(RestMethod::Put, path, params)
    }

    async fn delete(&self, path: &str, params: Vec<Value>) -> Result<Value, RateLimited> {
        self.record(RestMethod::Delete, path, params)
    }
}

const OPERATIONS: &[OperationEntry] = &[
    OperationEntry::new("list_projects", RestMethod::Get, "projects"),
    OperationEntry::new("create_project", RestMethod::Post, "projects"),
    OperationEntry::new("update_project", RestMethod::Put, "projects/{string}"),
    OperationEntry::new("delete_project", RestMethod::Delete, "projects/{string}"),
    OperationEntry::new(
        "show_sharing",
        RestMethod::Get,
        "projects/{string}/sharings/{integer}",
    ),
    OperationEntry::new("show_captions", RestMethod::Get, "medias/{string}/captions/{string}"),
    OperationEntry::new("search", RestMethod::Get, "search/{{all}}/{string}"),
];

fn dispatcher(transport: Recorder) -> Dispatcher<Recorder> {
    Dispatcher::new(OperationRegistry::from_entries(OPERATIONS).unwrap(), transport)
}

#[tokio::test]
async fn each_verb_reaches_its_transport_method() {
    let client = dispatcher(Recorder::default());

    invoke!(client, "list_projects").await.unwrap();
    invoke!(client, "create_project", json!({"name": "x"})).await.unwrap();
    invoke!(client, "update_project", "p1", json!({"name": "y"})).await.unwrap();
    invoke!(client, "delete_project", "p1").await.unwrap();

    let verbs: Vec<_> = client.transport().calls().into_iter().map(|c| c.0).collect();
    assert_eq!(
        verbs,
        vec![RestMethod::Get, RestMethod::Post, RestMethod::Put, RestMethod::Delete]
    );
}

#[tokio::test]
async fn transport_output_is_returned_untouched() {
    let client = dispatcher(Recorder::default());
    let output = invoke!(client, "show_sharing", "abc123", 42).await.unwrap();

    assert_eq!(output, json!({"verb": "GET", "path": "projects/abc123/sharings/42"}));
}

#[tokio::test]
async fn path_arguments_fill_slots_left_to_right() {
    let client = dispatcher(Recorder::default());
    invoke!(client, "show_captions", "a", "b").await.unwrap();
    invoke!(client, "show_captions", "b", "a").await.unwrap();

    let paths: Vec<_> = client.transport().calls().into_iter().map(|c| c.1).collect();
    assert_eq!(paths, vec!["medias/a/captions/b", "medias/b/captions/a"]);
}

#[tokio::test]
async fn extra_arguments_are_forwarded_in_order() {
    let client = dispatcher(Recorder::default());
    invoke!(client, "update_project", "p1", json!({"name": "y"}), "trailing", 7)
        .await
        .unwrap();

    let (_, path, params) = client.transport().calls().remove(0);
    assert_eq!(path, "projects/p1");
    assert_eq!(params, vec![json!({"name": "y"}), json!("trailing"), json!(7)]);
}

#[tokio::test]
async fn slot_values_are_coerced_to_text() {
    let client = dispatcher(Recorder::default());
    invoke!(client, "update_project", 17).await.unwrap();
    invoke!(client, "show_sharing", "abc", " 42 ").await.unwrap();

    let paths: Vec<_> = client.transport().calls().into_iter().map(|c| c.1).collect();
    assert_eq!(paths, vec!["projects/17", "projects/abc/sharings/42"]);
}

#[tokio::test]
async fn escaped_braces_render_literally() {
    let client = dispatcher(Recorder::default());
    invoke!(client, "search", "cats").await.unwrap();

    assert_eq!(client.transport().calls()[0].1, "search/{all}/cats");
}

#[tokio::test]
async fn unknown_operation_never_reaches_transport() {
    let client = dispatcher(Recorder::default()).with_owner("ProjectClient");
    let err = invoke!(client, "nonexistent_op", "x").await.unwrap_err();

    match err {
        DispatchError::UnknownOperation { operation, owner } => {
            assert_eq!(operation, "nonexistent_op");
            assert_eq!(owner, "ProjectClient");
        }
        other => panic!("expected UnknownOperation, got {other:?}"),
    }
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn operation_names_are_case_sensitive() {
    let client = dispatcher(Recorder::default());
    let err = invoke!(client, "List_Projects").await.unwrap_err();

    assert!(matches!(err, DispatchError::UnknownOperation { .. }));
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn too_few_path_arguments_never_reach_transport() {
    let client = dispatcher(Recorder::default());
    let err = invoke!(client, "show_sharing", "abc123").await.unwrap_err();

    assert!(matches!(
        err,
        DispatchError::InsufficientArguments { expected: 2, supplied: 1, .. }
    ));
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn mistyped_path_argument_never_reaches_transport() {
    let client = dispatcher(Recorder::default());
    let err = invoke!(client, "show_sharing", "abc123", "forty-two")
        .await
        .unwrap_err();

    match err {
        DispatchError::TypeMismatch { operation, position, expected, .. } => {
            assert_eq!(operation, "show_sharing");
            assert_eq!(position, 1);
            assert_eq!(expected, PlaceholderKind::Integer);
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn transport_failure_is_passed_through() {
    let client = dispatcher(Recorder::failing_on("projects/p9"));
    let err = invoke!(client, "delete_project", "p9").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.to_string(), "rate limited on projects/p9");
    assert_eq!(err.into_transport_error().unwrap().0, "projects/p9");
}

#[tokio::test]
async fn resolve_matches_what_dispatch_sends() {
    let client = dispatcher(Recorder::default());
    let call = invocation!("update_project", "p1", json!({"name": "y"}));

    let resolved = client.resolve(call.clone()).unwrap();
    client.dispatch(call).await.unwrap();

    let (verb, path, params) = client.transport().calls().remove(0);
    assert_eq!(resolved.verb, verb);
    assert_eq!(resolved.path, path);
    assert_eq!(resolved.params, params);
}

#[tokio::test]
async fn invocations_deserialized_from_json_dispatch() {
    let client = dispatcher(Recorder::default());
    let call = serde_json::from_value(json!({
        "name": "show_sharing",
        "args": ["abc123", 42]
    }))
    .unwrap();

    let output = client.dispatch(call).await.unwrap();
    assert_eq!(output["path"], "projects/abc123/sharings/42");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_dispatcher_serves_concurrent_callers() {
    let client = Arc::new(dispatcher(Recorder::default()));

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { invoke!(client, "show_sharing", "abc", i).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let mut paths: Vec<_> = client.transport().calls().into_iter().map(|c| c.1).collect();
    paths.sort();
    let mut expected: Vec<_> = (0..16).map(|i| format!("projects/abc/sharings/{i}")).collect();
    expected.sort();
    assert_eq!(paths, expected);
}

#[tokio::test]
async fn registry_loaded_from_yaml_dispatches() {
    let registry = OperationRegistry::from_yaml_str(
        r#"
- name: list_medias
  verb: get
  path: medias
- name: show_media
  verb: GET
  path: "medias/{string}"
"#,
    )
    .unwrap();
    let client = Dispatcher::new(registry, Recorder::default());

    invoke!(client, "show_media", "m1").await.unwrap();
    invoke!(client, "list_medias", json!({"page": 2})).await.unwrap();

    assert_eq!(
        client.transport().calls(),
        vec![
            (RestMethod::Get, "medias/m1".to_string(), vec![]),
            (RestMethod::Get, "medias".to_string(), vec![json!({"page": 2})]),
        ]
    );
}
