/// Parse a file extension given on the command line.
///
/// A leading dot is accepted and dropped; what remains must be a non-empty
/// run of ASCII letters and digits.
///
/// # Examples
///
/// Valid: `js`, `.mjs`, `es6`
/// Invalid: `""`, `.`, `d.ts`, `j s`
///
/// # Errors
///
/// Returns an error message if the extension is invalid.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.strip_prefix('.').unwrap_or(s);

    if ext.is_empty() {
        return Err("Extension cannot be empty".to_string());
    }

    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!(
            "Extension can only contain ASCII letters and digits: '{}'",
            s
        ));
    }

    Ok(ext.to_string())
}

/// Parse a separator, expanding `\n`, `\r`, `\t` and `\\`.
///
/// Shells make literal newlines awkward to pass, so escapes are expanded
/// here. Any other backslash sequence is kept as written.
///
/// # Errors
///
/// Never fails today; the signature matches clap's value parsers.
pub fn parse_separator(s: &str) -> Result<String, String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    Ok(out)
}
