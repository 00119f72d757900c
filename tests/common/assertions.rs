//! Custom assertion macros for CLI tests.

/// Assert that the generated document has an entry for `key`.
///
/// # Example
/// ```ignore
/// assert_bundled!(doc, "knight");
/// ```
#[macro_export]
macro_rules! assert_bundled {
    ($doc:expr, $key:expr) => {
        let needle = format!("    '{}': 'data:", $key);
        assert!(
            $doc.contains(&needle),
            "Expected entry for '{}' in document:\n{}",
            $key,
            $doc
        );
    };
}

/// Assert that the generated document has no entry for `key`.
#[macro_export]
macro_rules! assert_not_bundled {
    ($doc:expr, $key:expr) => {
        let needle = format!("'{}':", $key);
        assert!(
            !$doc.contains(&needle),
            "Did not expect entry for '{}' in document:\n{}",
            $key,
            $doc
        );
    };
}

/// Payloads of every entry line, in document order
pub fn entry_payloads(doc: &str) -> Vec<(String, String)> {
    doc.lines()
        .filter_map(|line| line.strip_prefix("    '"))
        .filter_map(|rest| {
            let (key, rest) = rest.split_once("': '")?;
            let uri = rest.strip_suffix("',")?;
            let payload = uri.split_once(";base64,")?.1;
            Some((key.to_string(), payload.to_string()))
        })
        .collect()
}
