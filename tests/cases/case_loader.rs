/// Data-driven splitting cases
///
/// Loads `url_cases.json`: an array of expectation objects, with plain
/// strings allowed in between as comments.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest {
        input: String,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        raw_query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        query: Option<Vec<(String, String)>>,
        #[serde(default)]
        href: Option<String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub test_num: usize,
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load the bundled case file
pub fn load_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("url_cases.json")).expect("url_cases.json is valid")
}
