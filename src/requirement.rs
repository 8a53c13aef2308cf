//! Parser for pip-style `requirements.txt` files.
//!
//! Produces one [`RequirementEntry`] per requirement line, in file order and
//! without deduplication. Option lines (`-r`, `--index-url`, ...) are skipped,
//! and so are options trailing a requirement (`--hash=...`);
//! any line that is neither an option, a URL with an `#egg=` name, nor a
//! PEP 508 specifier is rejected with [`Error::InvalidRequirement`].

use regex::Regex;

use crate::error::{Error, Result};
use crate::models::RequirementEntry;

const NAME_PATTERN: &str =
    r"^(?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?:\[(?P<extras>[^\]]*)\])?\s*(?P<rest>.*)$";
const SPECIFIER_PATTERN: &str = r"^(~=|===|==|!=|<=|>=|<|>)\s*([A-Za-z0-9*+!._-]+)$";

struct Patterns {
    name: Regex,
    specifier: Regex,
    comment: Regex,
    trailing_options: Regex,
    egg: Regex,
}

impl Patterns {
    fn new() -> Result<Self> {
        Ok(Self {
            name: compile(NAME_PATTERN)?,
            specifier: compile(SPECIFIER_PATTERN)?,
            comment: compile(r"(^|\s)#.*$")?,
            trailing_options: compile(r"\s--[A-Za-z].*$")?,
            egg: compile(r"#egg=([A-Za-z0-9][A-Za-z0-9._-]*)")?,
        })
    }

    /// PEP 508 `name @ url` lines contain a URL but name themselves.
    fn is_direct_reference(&self, line: &str) -> bool {
        self.name
            .captures(line)
            .is_some_and(|caps| caps["rest"].starts_with('@'))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Parse the full contents of a requirements file.
pub fn parse_requirements(content: &str) -> Result<Vec<RequirementEntry>> {
    let patterns = Patterns::new()?;
    let mut entries = Vec::new();

    for (line_no, line) in logical_lines(content) {
        let line = patterns.comment.replace(&line, "");
        // Per-requirement options such as `--hash=sha256:...` follow the specifier.
        let line = patterns.trailing_options.replace(&line, "");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(option) = line.strip_prefix('-') {
            match editable_target(option) {
                Some(target) => entries.push(parse_url(&patterns, line_no, line, target)?),
                None => tracing::debug!("skipping option line {}: {}", line_no, line),
            }
            continue;
        }

        if line.contains("://") && !patterns.is_direct_reference(line) {
            entries.push(parse_url(&patterns, line_no, line, line)?);
            continue;
        }

        entries.push(parse_specifier(&patterns, line_no, line)?);
    }

    Ok(entries)
}

/// Join backslash continuations, keeping the number of the first physical line.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let (start, mut buf) = pending.take().unwrap_or((idx + 1, String::new()));
        match raw.strip_suffix('\\') {
            Some(head) => {
                buf.push_str(head);
                pending = Some((start, buf));
            }
            None => {
                buf.push_str(raw);
                lines.push((start, buf));
            }
        }
    }
    if let Some(last) = pending {
        lines.push(last);
    }

    lines
}

/// `-e <url>` / `--editable <url>` carry a requirement; other options do not.
fn editable_target(option: &str) -> Option<&str> {
    let rest = option
        .strip_prefix("-editable")
        .or_else(|| option.strip_prefix('e'))?;
    let rest = rest.trim_start_matches('=').trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

fn parse_url(patterns: &Patterns, line_no: usize, line: &str, url: &str) -> Result<RequirementEntry> {
    match patterns.egg.captures(url) {
        Some(caps) => Ok(RequirementEntry {
            name: caps[1].to_string(),
            constraints: Vec::new(),
        }),
        None => Err(invalid(line_no, line, "URL requirement without an #egg= name")),
    }
}

fn parse_specifier(patterns: &Patterns, line_no: usize, line: &str) -> Result<RequirementEntry> {
    let caps = patterns
        .name
        .captures(line)
        .ok_or_else(|| invalid(line_no, line, "expected a package name"))?;
    let name = caps["name"].to_string();

    // Environment markers do not constrain the version.
    let rest = caps["rest"].split(';').next().unwrap_or("").trim();

    if rest.starts_with('@') {
        return Ok(RequirementEntry {
            name,
            constraints: Vec::new(),
        });
    }

    let rest = rest
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .unwrap_or(rest)
        .trim();

    let mut constraints = Vec::new();
    if !rest.is_empty() {
        for spec in rest.split(',') {
            let spec = spec.trim();
            let spec_caps = patterns
                .specifier
                .captures(spec)
                .ok_or_else(|| invalid(line_no, line, &format!("unrecognized version specifier `{}`", spec)))?;
            constraints.push(format!("{}{}", &spec_caps[1], &spec_caps[2]));
        }
    }

    Ok(RequirementEntry { name, constraints })
}

fn invalid(line: usize, text: &str, reason: &str) -> Error {
    Error::InvalidRequirement {
        line,
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn constraint_set(entry: &RequirementEntry) -> HashSet<&str> {
        entry.constraints.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_range_and_bare_name() {
        let entries = parse_requirements("requests>=2.0,<3.0\nflask\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "requests");
        assert_eq!(constraint_set(&entries[0]), HashSet::from(["<3.0", ">=2.0"]));
        assert_eq!(entries[1].name, "flask");
        assert!(entries[1].constraints.is_empty());
    }

    #[test]
    fn test_malformed_line_is_rejected() {
        let err = parse_requirements("requests>=2.0\ninvalid!!line\n").unwrap_err();
        match err {
            Error::InvalidRequirement { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "invalid!!line");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_comments_options_and_markers() {
        let content = "\
# pinned for the modules
-r other.txt
--index-url https://pypi.example.org/simple

jmespath==1.0.1  # used by json_query
pywinrm[credssp] >= 0.4 ; sys_platform == 'win32'
";
        let entries = parse_requirements(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "jmespath");
        assert_eq!(entries[0].constraints, vec!["==1.0.1"]);
        assert_eq!(entries[1].name, "pywinrm");
        assert_eq!(entries[1].constraints, vec![">=0.4"]);
    }

    #[test]
    fn test_urls_and_direct_references() {
        let content = "\
-e git+https://github.com/example/netaddr.git#egg=netaddr
pyvmomi @ https://example.org/pyvmomi-8.0.tar.gz
";
        let entries = parse_requirements(content).unwrap();
        assert_eq!(entries[0].name, "netaddr");
        assert_eq!(entries[1].name, "pyvmomi");
        assert!(entries.iter().all(|e| e.constraints.is_empty()));

        assert!(parse_requirements("https://example.org/thing.tar.gz\n").is_err());
    }

    #[test]
    fn test_continuation_and_duplicates() {
        let entries = parse_requirements("requests>=2.0,\\\n  <3.0\nrequests\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].constraints, vec![">=2.0", "<3.0"]);
        assert_eq!(entries[1].name, "requests");
    }

    #[test]
    fn test_hash_pinned_requirements() {
        let content = "\
requests==2.31.0 \\
    --hash=sha256:58cd2187c01e70e6e26505bca751777aa9f2ee0b7f4300988b709f44e013003f \\
    --hash=sha256:942c5a758f98d790eaed1a29cb6eefc7ffb0d1cf7af05c3d2791656dbd6ad1e1
idna==3.6 --hash=sha256:c05567e9c24a6b9faaa835c4821bad0590fbb9d5779e7caa6e1cc4978e7eb24f
";
        let entries = parse_requirements(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "requests");
        assert_eq!(entries[0].constraints, vec!["==2.31.0"]);
        assert_eq!(entries[1].name, "idna");
        assert_eq!(entries[1].constraints, vec!["==3.6"]);
    }
}
