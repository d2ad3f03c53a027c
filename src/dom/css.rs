//! Inline `style=""` editing.
//!
//! Declarations are kept in source order and written back as
//! `prop: value` pairs joined with `"; "`, the same form the renderers
//! emit, so a style edited in place matches a freshly rendered one.

/// Parsed `property: value` pairs, in order. Property names are
/// lowercased; malformed declarations are skipped.
pub fn parse_inline_style(style: &str) -> Vec<(String, String)> {
    let mut decls = Vec::new();
    for decl in style.split(';') {
        let Some((prop, val)) = decl.split_once(':') else {
            continue;
        };
        let prop = prop.trim().to_ascii_lowercase();
        let val = val.trim();
        if prop.is_empty() || val.is_empty() {
            continue;
        }
        decls.push((prop, val.to_string()));
    }
    decls
}

pub fn format_style(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(p, v)| format!("{}: {}", p, v))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn get_property(style: &str, property: &str) -> Option<String> {
    parse_inline_style(style)
        .into_iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(property))
        .map(|(_, v)| v)
}

/// Set `property`, replacing an existing declaration in place or
/// appending a new one.
pub fn set_property(style: &str, property: &str, value: &str) -> String {
    let mut decls = parse_inline_style(style);
    match decls.iter_mut().find(|(p, _)| p.eq_ignore_ascii_case(property)) {
        Some(decl) => decl.1 = value.to_string(),
        None => decls.push((property.to_ascii_lowercase(), value.to_string())),
    }
    format_style(&decls)
}

pub fn remove_property(style: &str, property: &str) -> String {
    let mut decls = parse_inline_style(style);
    decls.retain(|(p, _)| !p.eq_ignore_ascii_case(property));
    format_style(&decls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_malformed() {
        let decls = parse_inline_style("color: red; ; font-size 20px; Background: #333;");
        assert_eq!(
            decls,
            vec![
                ("color".to_string(), "red".to_string()),
                ("background".to_string(), "#333".to_string()),
            ]
        );
    }

    #[test]
    fn set_replaces_in_place() {
        let style = "background: conic-gradient(#667eea 0deg 0deg, #e0e0e0 0deg 360deg); color: red";
        let out = set_property(style, "background", "blue");
        assert_eq!(out, "background: blue; color: red");
        assert_eq!(set_property("", "display", "none"), "display: none");
    }

    #[test]
    fn remove_last_leaves_empty() {
        assert_eq!(remove_property("display: none", "display"), "");
        assert_eq!(remove_property("display: none; color: red", "display"), "color: red");
    }

    #[test]
    fn value_may_contain_colon() {
        assert_eq!(get_property("a: b:c", "a").as_deref(), Some("b:c"));
    }
}
