//! Pick the final response's `Last-Modified` out of raw header lines.

/// Returns the `Last-Modified` value of the last response in `lines`.
///
/// When redirects are followed libcurl hands back every hop's headers in
/// order, each hop starting with its status line; only the last hop counts.
/// An empty value is treated as absent.
pub(crate) fn final_last_modified(lines: &[String]) -> Option<String> {
    let start = lines
        .iter()
        .rposition(|line| line.starts_with("HTTP/"))
        .unwrap_or(0);

    lines[start..].iter().find_map(|line| {
        let (name, value) = line.trim().split_once(':')?;
        if !name.trim().eq_ignore_ascii_case("last-modified") {
            return None;
        }
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
