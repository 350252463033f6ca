use crate::config::SiteConfig;
use crate::{UrlError, UrlResult};
use regex::Regex;
use std::fmt;
use std::num::NonZeroU32;
use std::sync::LazyLock;
use url::Url;

static PROBLEM_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/problem/(\d+)").expect("problem path regex"));

/// A Baekjoon problem number; always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemId(NonZeroU32);

impl ProblemId {
    /// Returns `None` for zero
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts the problem number from the first `/problem/<n>` segment of `url`
///
/// Returns `None` when there is no such segment, when the number is zero, or
/// when it does not fit in a `u32`.
///
/// # Examples
///
/// ```
/// use boj_notion::url::extract_problem_id;
///
/// let id = extract_problem_id("https://www.acmicpc.net/problem/14716").unwrap();
/// assert_eq!(id.get(), 14716);
/// assert!(extract_problem_id("https://www.acmicpc.net/status").is_none());
/// ```
pub fn extract_problem_id(url: &str) -> Option<ProblemId> {
    let captures = PROBLEM_PATH.captures(url)?;
    let number: u32 = captures.get(1)?.as_str().parse().ok()?;
    ProblemId::new(number)
}

/// Checks that `url` is a problem page on the configured site
///
/// The host must be the site host with any `www.` prefix removed, or a
/// subdomain of it.
///
/// # Returns
///
/// * `Ok(ProblemId)` - The problem number
/// * `Err(UrlError)` - The URL is malformed, points elsewhere, or has no number
pub fn validate_problem_url(url: &str, site: &SiteConfig) -> UrlResult<ProblemId> {
    let parsed = Url::parse(url.trim()).map_err(|e| UrlError::Parse(format!("{}: {}", url, e)))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| UrlError::Parse(format!("{}: missing host", url)))?
        .to_lowercase();

    let expected = site.host().to_lowercase();
    let base = expected.strip_prefix("www.").unwrap_or(&expected);

    if host != base && !host.ends_with(&format!(".{}", base)) {
        return Err(UrlError::ForeignHost {
            url: url.to_string(),
            expected: expected.clone(),
        });
    }

    extract_problem_id(parsed.path()).ok_or_else(|| UrlError::MissingProblemId(url.to_string()))
}
