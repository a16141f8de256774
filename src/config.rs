use anyhow::{anyhow, Result};
use std::env;

pub const DEFAULT_URL: &str = "default.panorama-trace-mission.ctfcompetition.com/";

const URL_ENV_VAR: &str = "PTM_URL";

/// Return the challenge base URL with a single trailing slash.
pub fn resolve_base_url() -> Result<String> {
    let override_value = env::var(URL_ENV_VAR).ok();
    normalize(override_value.as_deref())
}

fn normalize(override_value: Option<&str>) -> Result<String> {
    let base = match override_value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_URL.trim(),
    };
    if base.is_empty() {
        return Err(anyhow!(
            "Base URL is empty; set {} or update DEFAULT_URL",
            URL_ENV_VAR
        ));
    }
    let mut base = base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::{normalize, DEFAULT_URL};

    #[test]
    fn override_gains_a_trailing_slash() {
        assert_eq!(normalize(Some("http://svc")).unwrap(), "http://svc/");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        assert_eq!(normalize(Some("http://svc/")).unwrap(), "http://svc/");
    }

    #[test]
    fn override_is_trimmed() {
        assert_eq!(normalize(Some("  http://svc  ")).unwrap(), "http://svc/");
    }

    #[test]
    fn missing_override_falls_back_to_default() {
        assert_eq!(normalize(None).unwrap(), DEFAULT_URL);
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(normalize(Some(" \t \n ")).unwrap(), DEFAULT_URL);
    }
}
