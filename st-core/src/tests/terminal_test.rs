use assertables::*;
use httpmock::Method::{
    DELETE,
    GET,
};

use super::*;

type BufferedEnvironment = TerminalEnvironment<&'static [u8], Vec<u8>>;

fn make_env(input: &'static str) -> Arc<BufferedEnvironment> {
    Arc::new(TerminalEnvironment::new(input.as_bytes(), vec![]).unwrap())
}

fn prompt() -> String {
    format!("{CONFIRM_DELETE_MESSAGE} [y/N] ")
}

#[rstest]
#[case::y("y\n", true)]
#[case::yes_upper("YES\n", true)]
#[case::padded(" yes \n", true)]
#[case::no_newline("y", true)]
#[case::n("n\n", false)]
#[case::other("sure\n", false)]
#[case::blank("\n", false)]
#[case::eof("", false)]
fn test_confirm(#[case] input: &'static str, #[case] expected: bool) {
    let env = make_env(input);
    assert_eq!(env.confirm(CONFIRM_DELETE_MESSAGE), expected);
    assert_eq!(env.transcript(), prompt());
}

#[rstest]
fn test_navigate_and_alert() {
    let env = make_env("");
    let url = Url::parse("http://localhost:8000/stories").unwrap();

    env.navigate(&url);
    env.alert(DELETE_FAILED_MESSAGE);

    assert_eq!(env.location(), Some(url));
    assert_eq!(env.transcript(), "redirected to http://localhost:8000/stories\nDelete failed.\n");
}

#[rstest]
#[tokio::test]
async fn test_delete_entity_success(id: EntityId) {
    let mut server = FakeServer::start();
    server.handle_delete(TEST_ENTITY_PATH, 204);
    let env = make_env("y\n");
    let action = DeleteAction::new(env.clone(), Endpoint::new(server.url(), TEST_RESOURCE));

    action.delete_entity(&id).await.unwrap();

    assert_eq!(env.transcript(), prompt());
    assert_none!(env.location());
    server.assert();
}

#[rstest]
#[tokio::test]
async fn test_delete_entity_declined(id: EntityId) {
    // nothing is listening on the other end, so the test would fail if a request went out
    let env = make_env("n\n");
    let endpoint = Endpoint::new(Url::parse("http://127.0.0.1:1").unwrap(), TEST_RESOURCE);
    let action = DeleteAction::new(env.clone(), endpoint);

    action.delete_entity(&id).await.unwrap();

    assert_eq!(env.transcript(), prompt());
}

#[rstest]
#[tokio::test]
async fn test_delete_entity_redirected(id: EntityId) {
    let mut server = FakeServer::start();
    server.handle_redirect(TEST_ENTITY_PATH, TEST_REDIRECT_PATH);
    let env = make_env("y\n");
    let action = DeleteAction::new(env.clone(), Endpoint::new(server.url(), TEST_RESOURCE));

    action.delete_entity(&id).await.unwrap();

    let expected = server.url().join(TEST_REDIRECT_PATH).unwrap();
    assert_eq!(env.location(), Some(expected.clone()));
    assert_eq!(env.transcript(), format!("{}redirected to {expected}\n", prompt()));
    server.assert();
}

#[rstest]
#[tokio::test]
async fn test_delete_entity_redirected_to_same_url(id: EntityId) {
    let mut server = FakeServer::start();
    server.handle(|when, then| {
        when.method(DELETE).path(TEST_ENTITY_PATH);
        then.status(303).header("location", TEST_ENTITY_PATH);
    });
    server.handle(|when, then| {
        when.method(GET).path(TEST_ENTITY_PATH);
        then.status(404);
    });
    let env = make_env("y\n");
    let action = DeleteAction::new(env.clone(), Endpoint::new(server.url(), TEST_RESOURCE));

    action.delete_entity(&id).await.unwrap();

    let expected = server.url().join(TEST_ENTITY_PATH).unwrap();
    assert_eq!(env.location(), Some(expected.clone()));
    assert_eq!(env.transcript(), format!("{}redirected to {expected}\n", prompt()));
    server.assert();
}

#[rstest]
#[tokio::test]
async fn test_delete_entity_temporary_redirect_keeps_method(id: EntityId) {
    let mut server = FakeServer::start();
    server.handle(|when, then| {
        when.method(DELETE).path(TEST_ENTITY_PATH);
        then.status(307).header("location", "/archive/42");
    });
    server.handle_delete("/archive/42", 204);
    let env = make_env("y\n");
    let action = DeleteAction::new(env.clone(), Endpoint::new(server.url(), TEST_RESOURCE));

    action.delete_entity(&id).await.unwrap();

    assert_eq!(env.location(), Some(server.url().join("/archive/42").unwrap()));
    server.assert();
}

#[rstest]
#[tokio::test]
async fn test_delete_entity_redirect_loop(id: EntityId) {
    let mut server = FakeServer::start();
    server.handle(|when, then| {
        when.method(DELETE).path(TEST_ENTITY_PATH);
        then.status(307).header("location", TEST_ENTITY_PATH);
    });
    let env = make_env("y\n");
    let action = DeleteAction::new(env.clone(), Endpoint::new(server.url(), TEST_RESOURCE));

    let err = action.delete_entity(&id).await.unwrap_err();

    assert_starts_with!(err.to_string(), "too many redirects");
    assert_eq!(env.transcript(), prompt());
}

#[rstest]
#[case::server_error(500)]
#[case::not_found(404)]
#[tokio::test]
async fn test_delete_entity_failed(#[case] status: u16, id: EntityId) {
    let mut server = FakeServer::start();
    server.handle_delete(TEST_ENTITY_PATH, status);
    let env = make_env("yes\n");
    let action = DeleteAction::new(env.clone(), Endpoint::new(server.url(), TEST_RESOURCE));

    action.delete_entity(&id).await.unwrap();

    assert_eq!(env.transcript(), format!("{}Delete failed.\n", prompt()));
    assert_none!(env.location());
    server.assert();
}

#[rstest]
#[tokio::test]
async fn test_delete_entity_unreachable(id: EntityId) {
    let env = make_env("y\n");
    let endpoint = Endpoint::new(Url::parse("http://127.0.0.1:1").unwrap(), TEST_RESOURCE);
    let action = DeleteAction::new(env.clone(), endpoint);

    let _ = action.delete_entity(&id).await.unwrap_err();

    assert_eq!(env.transcript(), prompt());
}
