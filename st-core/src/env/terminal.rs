use std::io::{
    self,
    BufRead,
    BufReader,
    Stdin,
    Stdout,
    Write,
};
use std::sync::{
    Mutex,
    MutexGuard,
    PoisonError,
};

use async_trait::async_trait;
use reqwest::header::{
    CONTENT_TYPE,
    HeaderMap,
    LOCATION,
};
use reqwest::redirect::Policy;
use reqwest::{
    Method,
    StatusCode,
    Url,
};
use tracing::*;

use super::{
    Environment,
    ResponseDescriptor,
};
use crate::errors::ensure;

// Same cap the browser uses before giving up on a redirect chain
const MAX_REDIRECTS: usize = 20;

// A panic while holding one of these locks can't leave the reader/writer in a state we care
// about, so just keep going with whatever's inside.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Line-oriented stand-in for the browser: dialogs go to `output`, answers come from `input`, and
/// "navigating" just records (and prints) the new location.
///
/// Redirects are followed here rather than by reqwest, so that a response counts as redirected
/// whenever at least one hop was taken, even if the chain ends back where it started.
pub struct TerminalEnvironment<R, W> {
    client: reqwest::Client,
    input: Mutex<R>,
    output: Mutex<W>,
    location: Mutex<Option<Url>>,
}

impl TerminalEnvironment<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> anyhow::Result<Self> {
        TerminalEnvironment::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalEnvironment<R, W> {
    pub fn new(input: R, output: W) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().redirect(Policy::none()).build()?;
        Ok(TerminalEnvironment {
            client,
            input: Mutex::new(input),
            output: Mutex::new(output),
            location: Mutex::new(None),
        })
    }

    pub fn location(&self) -> Option<Url> {
        lock(&self.location).clone()
    }

    fn emit(&self, text: &str) {
        let mut out = lock(&self.output);
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            debug!("could not write to terminal: {err}");
        }
    }
}

impl<R> TerminalEnvironment<R, Vec<u8>> {
    /// Everything written so far; only useful when the output is an in-memory buffer.
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&lock(&self.output)).into_owned()
    }
}

#[async_trait]
impl<R: BufRead + Send, W: Write + Send> Environment for TerminalEnvironment<R, W> {
    fn confirm(&self, message: &str) -> bool {
        self.emit(&format!("{message} [y/N] "));

        let mut line = String::new();
        match lock(&self.input).read_line(&mut line) {
            Ok(0) => {
                debug!("end of input while waiting for confirmation");
                false
            },
            Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                debug!("could not read confirmation: {err}");
                false
            },
        }
    }

    async fn request(&self, method: Method, url: Url, headers: HeaderMap) -> anyhow::Result<ResponseDescriptor> {
        let (mut method, mut headers, mut current) = (method, headers, url.clone());
        let mut hops = 0;

        loop {
            debug!("sending {method} {current}");
            let res = self
                .client
                .request(method.clone(), current.clone())
                .headers(headers.clone())
                .send()
                .await?;
            let status = res.status();

            let Some(next) = redirect_target(status, &res, &current)? else {
                let mut desc = ResponseDescriptor::new(status, &url, current);
                desc.redirected |= hops > 0;
                debug!("received {} from {} (redirected: {})", desc.status, desc.url, desc.redirected);
                return Ok(desc);
            };

            hops += 1;
            ensure!(hops <= MAX_REDIRECTS, "too many redirects starting from {url}");

            // 303 always turns into a GET, and so do 301/302 for a POST; 307/308 replay the
            // original request as-is
            let to_get = match status {
                StatusCode::SEE_OTHER => method != Method::HEAD,
                StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND => method == Method::POST,
                _ => false,
            };
            if to_get {
                method = Method::GET;
                headers.remove(CONTENT_TYPE);
            }

            debug!("following {status} redirect to {next}");
            current = next;
        }
    }

    fn navigate(&self, url: &Url) {
        *lock(&self.location) = Some(url.clone());
        self.emit(&format!("redirected to {url}\n"));
    }

    fn alert(&self, message: &str) {
        self.emit(&format!("{message}\n"));
    }
}

fn redirect_target(status: StatusCode, res: &reqwest::Response, current: &Url) -> anyhow::Result<Option<Url>> {
    match status {
        StatusCode::MOVED_PERMANENTLY
        | StatusCode::FOUND
        | StatusCode::SEE_OTHER
        | StatusCode::TEMPORARY_REDIRECT
        | StatusCode::PERMANENT_REDIRECT => (),
        _ => return Ok(None),
    }

    // A redirect status without somewhere to go is handed back like any other response
    let Some(location) = res.headers().get(LOCATION) else {
        return Ok(None);
    };
    Ok(Some(current.join(location.to_str()?)?))
}
