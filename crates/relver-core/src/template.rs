//! Component version file rendering
//!
//! Downstream tooling parses these files as Python source assignments, so the
//! output is bit-exact: a present value renders as a double-quoted string
//! literal, an absent value as the literal token `None`. The two cases are
//! explicit render functions, never inferred from the value's shape.

/// Render a value as a double-quoted string literal
pub fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

/// Render an optional value as a Python literal: quoted if present, else `None`
pub fn python_literal(value: Option<&str>) -> String {
    match value {
        Some(v) => quoted(v),
        None => "None".to_string(),
    }
}

/// Render the full two-assignment component version file
pub fn render_version_file(version: Option<&str>, release_tag: Option<&str>) -> String {
    format!(
        "\n\
         # Version of the library that will be used to upload to pypi\n\
         __version__ = {}\n\
         \n\
         # Git tag that will be checked to determine whether to trigger upload to pypi\n\
         __release_tag__ = {}\n",
        python_literal(version),
        python_literal(release_tag),
    )
}
