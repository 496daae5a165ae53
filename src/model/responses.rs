/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use serde::Deserialize;

/// Body returned by the API on non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Top level error object
    pub error: Option<ApiErrorBody>,
}

/// One error entry.
///
/// The API reports either `code`/`message` pairs or `domain`/`reason` pairs,
/// optionally nesting further entries under `errors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Machine readable error code
    #[serde(default)]
    pub code: Option<String>,
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Error domain, used when `code` is absent
    #[serde(default)]
    pub domain: Option<String>,
    /// Error reason, used when `code` is absent
    #[serde(default)]
    pub reason: Option<String>,
    /// Nested entries
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorBody>>,
}

impl ApiErrorBody {
    /// Entries to report: the nested list when non-empty, otherwise `self`
    pub fn entries(&self) -> Vec<&ApiErrorBody> {
        match &self.errors {
            Some(errors) if !errors.is_empty() => errors.iter().collect(),
            _ => vec![self],
        }
    }

    /// Codes of every reported entry
    pub fn codes(&self) -> Vec<&str> {
        self.entries()
            .into_iter()
            .filter_map(|e| e.code.as_deref())
            .collect()
    }

    /// Renders every entry as one line
    pub fn render(&self) -> String {
        self.entries()
            .into_iter()
            .map(ApiErrorBody::render_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_entry(&self) -> String {
        match &self.code {
            Some(code) => format!("{}: {}", code, self.message.as_deref().unwrap_or_default()),
            None => format!(
                "{}: {}",
                self.domain.as_deref().unwrap_or_default(),
                self.reason.as_deref().unwrap_or_default()
            ),
        }
    }
}
