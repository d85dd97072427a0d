use std::fmt;

/// Basename used when the configured path yields no file name.
const FALLBACK_NAME: &str = "renderer.py";

/// Process-table match pattern derived from the renderer's file name.
///
/// The escaped name has its first character wrapped in a bracket
/// expression ("[r]enderer\.py"), so `pgrep -f`/`pkill -f` match a
/// running renderer but never the shell command that carries the
/// pattern itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessPattern(String);

impl ProcessPattern {
    /// Derive the pattern from the remote executable path. Computed fresh
    /// per operation; never persisted.
    pub fn for_executable(remote_path: &str) -> Self {
        let name = remote_path
            .rsplit('/')
            .find(|part| !part.is_empty())
            .unwrap_or(FALLBACK_NAME);

        let escaped = regex::escape(name);
        let mut chars = escaped.chars();
        match chars.next() {
            // Escaping put a backslash first; bracketing it would change
            // the meaning of the escape. Leave the pattern as-is.
            Some('\\') | None => Self(escaped),
            Some(first) => Self(format!("[{}]{}", first, chars.as_str())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
