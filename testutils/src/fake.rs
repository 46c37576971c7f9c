use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};
use reqwest::Url;
use st_core::prelude::*;

pub struct FakeServer {
    server: MockServer,
    mock_ids: Vec<usize>,
}

fn print_req(req: &HttpMockRequest) -> bool {
    // Use println instead of info! so that this works outside of the lib crate
    println!("    Received: {} {}", req.method(), req.uri());
    true
}

impl FakeServer {
    pub fn start() -> FakeServer {
        FakeServer { server: MockServer::start(), mock_ids: vec![] }
    }

    pub fn assert(&self) {
        for id in &self.mock_ids {
            println!("checking assertions for mock {id}");
            Mock::new(*id, &self.server).assert()
        }
    }

    pub fn handle<F: FnOnce(When, Then)>(&mut self, f: F) -> &mut Self {
        let mock = self.server.mock(|when, then| f(when.matches(print_req), then));
        self.mock_ids.push(mock.id);
        self
    }

    pub fn handle_delete(&mut self, path: &str, status: u16) -> &mut Self {
        let path = path.to_owned();
        self.handle(move |when, then| {
            when.method(DELETE).path(path).header("content-type", JSON_CONTENT_TYPE);
            then.status(status);
        })
    }

    /// DELETE `from` answers with a 303 pointing at `to`, and `to` serves a plain 200
    pub fn handle_redirect(&mut self, from: &str, to: &str) -> &mut Self {
        let (from, to) = (from.to_owned(), to.to_owned());
        let location = to.clone();
        self.handle(move |when, then| {
            when.method(DELETE).path(from);
            then.status(303).header("location", location);
        });
        self.handle(move |when, then| {
            when.method(GET).path(to);
            then.status(200).body("<html></html>");
        })
    }

    pub fn url(&self) -> Url {
        Url::parse(&self.server.url("/")).unwrap()
    }
}
