use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use http::StatusCode;
use spin_workloads::{bacon, response, Error, Result, TextSource, Upstream};
use url::Url;

/// Serves canned chunks and records every requested URL.
#[derive(Default)]
struct FakeSource {
    chunks: RefCell<VecDeque<Result<String>>>,
    requested: RefCell<Vec<Url>>,
}

impl FakeSource {
    fn serving(chunk: &str, times: usize) -> Self {
        let source = Self::default();
        for _ in 0..times {
            source.push(Ok(chunk.to_string()));
        }
        source
    }

    fn push(&self, chunk: Result<String>) {
        self.chunks.borrow_mut().push_back(chunk);
    }

    fn requested(&self) -> Vec<Url> {
        self.requested.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TextSource for FakeSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.requested.borrow_mut().push(url.clone());
        self.chunks
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

fn paras(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == "paras")
        .map(|(_, v)| v.into_owned())
}

#[tokio::test]
async fn fifty_paragraphs_take_one_full_chunk() -> anyhow::Result<()> {
    let source = FakeSource::serving("bacon ipsum bacon\n", 1);
    let report = bacon::run("/50", &Upstream::new()?, &source).await?;

    assert_eq!(report.render(), "paragraph count = 50\nbacon count = 2\n");
    let requested = source.requested();
    assert_eq!(requested.len(), 1);
    assert_eq!(paras(&requested[0]).as_deref(), Some("100"));
    Ok(())
}

#[tokio::test]
async fn two_hundred_fifty_paragraphs_take_three_chunks() -> anyhow::Result<()> {
    let source = FakeSource::serving("Bacon bacon. bacon\n", 5);
    let report = bacon::run("/250", &Upstream::new()?, &source).await?;

    assert_eq!(report.paragraphs, 250);
    assert_eq!(report.bacon, 3);
    let requested = source.requested();
    assert_eq!(requested.len(), 3);
    assert!(requested.iter().all(|url| paras(url).as_deref() == Some("100")));
    Ok(())
}

#[tokio::test]
async fn chunks_are_concatenated_raw() -> anyhow::Result<()> {
    // The token split across the chunk boundary is counted once, joined.
    let source = FakeSource::default();
    source.push(Ok("bacon ba".to_string()));
    source.push(Ok("con\n".to_string()));

    let report = bacon::count(200, &Upstream::new()?, &source).await?;
    assert_eq!(report.bacon, 2);
    Ok(())
}

#[tokio::test]
async fn missing_parameter_uses_default_count() -> anyhow::Result<()> {
    let source = FakeSource::default();
    let report = bacon::run("/lots", &Upstream::new()?, &source).await?;

    assert_eq!(report.paragraphs, bacon::DEFAULT_PARAGRAPHS);
    assert_eq!(source.requested().len(), 10);
    Ok(())
}

#[tokio::test]
async fn configured_upstream_is_requested() -> anyhow::Result<()> {
    let upstream = Upstream::new()?.with_base_url(Url::parse("http://127.0.0.1:8080/api/")?);
    let source = FakeSource::default();
    bacon::run("/1", &upstream, &source).await?;

    assert_eq!(
        source.requested()[0].as_str(),
        "http://127.0.0.1:8080/api/?type=all-meat&paras=100&start-with-lorem=1&format=text"
    );
    Ok(())
}

#[tokio::test]
async fn failed_chunk_fails_only_the_request() -> anyhow::Result<()> {
    let url = Upstream::new()?.chunk_url();
    let source = FakeSource::serving("bacon\n", 1);
    source.push(Err(Error::Transport {
        url: url.clone(),
        source: anyhow::anyhow!("connection refused"),
    }));

    let result = bacon::run("/300", &Upstream::new()?, &source).await;
    assert!(matches!(result, Err(Error::Transport { .. })));
    // No further chunks are requested after the failure.
    assert_eq!(source.requested().len(), 2);

    let res = response::from_result(result.map(|report| report.render()));
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    // The next request is served normally.
    let source = FakeSource::serving("bacon\n", 1);
    let report = bacon::run("/1", &Upstream::new()?, &source).await?;
    assert_eq!(report.bacon, 1);
    Ok(())
}

#[tokio::test]
async fn body_read_failure_is_bad_gateway() -> anyhow::Result<()> {
    let source = FakeSource::default();
    source.push(Err(Error::Body {
        url: Upstream::new()?.chunk_url(),
        source: anyhow::anyhow!("stream closed"),
    }));

    let result = bacon::run("/1", &Upstream::new()?, &source).await;
    let res = response::from_result(result.map(|report| report.render()));
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert!(res.body().starts_with("failed to read response body from"));
    Ok(())
}
