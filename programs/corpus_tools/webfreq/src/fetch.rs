use crate::error::{Error, Result};

pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// Plain GET through minreq, one attempt, minreq's default timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = minreq::get(url).send()?;
        if response.status_code != 200 {
            return Err(Error::Status(response.status_code));
        }
        Ok(decode_body(response.as_bytes()))
    }
}

/// Bodies that are not valid utf-8 still count, bad bytes become U+FFFD.
pub fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Body of `url`, or None after logging why not. Callers skip the page.
pub fn fetch_page(fetcher: &impl Fetch, url: &str) -> Option<String> {
    match fetcher.fetch(url) {
        Ok(body) => {
            println!("fetched {url}");
            log::debug!("{url}: {} bytes", body.len());
            Some(body)
        }
        Err(e) => {
            log::warn!("could not fetch {url}: {e}");
            None
        }
    }
}

#[test]
fn test_fetch_page_swallows_errors() {
    let fetcher = |url: &str| -> Result<String> {
        match url {
            "ok" => Ok("<p>body</p>".to_string()),
            "missing" => Err(Error::Status(404)),
            _ => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "refused",
            ))),
        }
    };
    assert_eq!(fetch_page(&fetcher, "ok").as_deref(), Some("<p>body</p>"));
    assert_eq!(fetch_page(&fetcher, "missing"), None);
    assert_eq!(fetch_page(&fetcher, "elsewhere"), None);
}

#[test]
fn test_non_utf8_body_is_kept() {
    assert_eq!(decode_body(b"caf\xe9 menu"), "caf\u{fffd} menu");
    let fetcher = |_: &str| -> Result<String> { Ok(decode_body(b"<p>caf\xe9 menu menu</p>")) };
    let counts = crate::pipeline::aggregate(&fetcher, &["latin1"]);
    assert_eq!(counts.get("menu"), Some(2));
    assert_eq!(counts.get("caf\u{fffd}"), Some(1));
}
