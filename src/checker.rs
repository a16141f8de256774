use crate::answers::{self, Answer};
use crate::config;
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolve the target, submit every challenge and return the assembled flag.
pub fn run() -> Result<String> {
    let base_url = config::resolve_base_url()?;
    let fragments = collect_flag_fragments(&base_url, answers::CHALLENGES)?;
    Ok(fragments.concat())
}

/// One cookie-carrying session shared by every request of a run, so the
/// server sees a single continuous client.
fn build_session() -> Result<Client> {
    let session = Client::builder()
        .cookie_store(true)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(session)
}

/// Submit every entry of the answer table in order and collect the flag
/// fragments. The first failed request aborts the run; fragments gathered up
/// to that point are discarded.
fn collect_flag_fragments(base_url: &str, table: &[Answer]) -> Result<Vec<String>> {
    let session = build_session()?;

    // Hit the homepage once to prime any session cookies or caches.
    session
        .get(base_url)
        .send()
        .with_context(|| format!("GET {}", base_url))?
        .error_for_status()?;

    let mut fragments = Vec::with_capacity(table.len());
    for answer in table {
        fragments.push(fetch_flag_fragment(&session, base_url, answer)?);
    }

    Ok(fragments)
}

/// Submit the solved coordinates for one challenge and return the flag
/// fragment.
fn fetch_flag_fragment(session: &Client, base_url: &str, answer: &Answer) -> Result<String> {
    // Warm up: load the challenge page so the session mimics a real player.
    let challenge_path = format!("{}-{}", answer.competition, answer.challenge);
    let challenge_url = format!("{}{}", base_url, challenge_path);
    session
        .get(&challenge_url)
        .send()
        .with_context(|| format!("GET {}", challenge_url))?
        .error_for_status()?;

    let submit_url = format!("{}/submit", challenge_url);
    let (latitude, longitude) = answer.coords;
    let response = session
        .post(&submit_url)
        .json(&serde_json::json!([latitude, longitude]))
        .send()
        .with_context(|| format!("POST {}", submit_url))?
        .error_for_status()?;

    // Responses end with the flag fragment, so grab the last token even when
    // the message never mentions the word "flag".
    let body = response.text()?;
    let fragment = body
        .split_whitespace()
        .last()
        .ok_or_else(|| anyhow!("Empty response for {}", challenge_path))?;

    Ok(fragment.to_string())
}
