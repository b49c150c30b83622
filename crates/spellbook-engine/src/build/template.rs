/// Normalize a configured base template name to a file name.
pub fn base_template_name(base: &str) -> String {
    if base.ends_with(".html") {
        base.to_string()
    } else {
        format!("{base}.html")
    }
}

/// Wrap rendered HTML so it extends `base`, or return it unchanged.
pub fn wrap_in_base_template(html: &str, base: Option<&str>) -> String {
    match base {
        Some(base) => format!(
            "{{% extends '{}' %}}\n\n{{% block spellbook_md %}}\n{html}\n{{% endblock %}}",
            base_template_name(base)
        ),
        None => html.to_string(),
    }
}
