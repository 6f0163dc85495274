use regex::Regex;

/// Extract `{{name}}` template placeholders from an HTML fragment.
///
/// De-duplicated, order of first appearance preserved. Placeholder names
/// are word characters and dots (`{{user.name}}`).
pub fn extract_template_placeholders(html: &str) -> Vec<String> {
    let pattern = match Regex::new(r"\{\{([\w.]+)\}\}") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let mut seen = Vec::new();
    for capture in pattern.captures_iter(html) {
        if let Some(name) = capture.get(1) {
            let name = name.as_str().to_string();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
    }
    seen
}
