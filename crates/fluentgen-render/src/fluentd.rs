//! Renders a [`Directive`] tree as fluentd configuration text.
//!
//! Sections nest with two-space indentation. `@type` comes first in
//! every section; `@id` is emitted for the root directive only, matching
//! fluentd's plugin-id convention. Parameters print in the order the
//! compiler mapped them, so diffs stay stable across runs.

use fluentgen_core::Directive;

/// Render a directive tree as fluentd configuration text.
pub fn render(directive: &Directive) -> String {
    let mut out = String::new();
    render_section(directive, 0, true, &mut out);
    out
}

fn render_section(directive: &Directive, depth: usize, root: bool, out: &mut String) {
    let indent = "  ".repeat(depth);
    let meta = &directive.meta;

    match &meta.tag {
        Some(tag) => out.push_str(&format!("{indent}<{} {}>\n", meta.directive, tag)),
        None => out.push_str(&format!("{indent}<{}>\n", meta.directive)),
    }
    out.push_str(&format!("{indent}  @type {}\n", meta.kind));
    if root {
        out.push_str(&format!("{indent}  @id {}\n", meta.id));
    }
    for (name, value) in directive.params.iter() {
        out.push_str(&format!("{indent}  {name} {value}\n"));
    }
    for child in &directive.children {
        render_section(child, depth + 1, false, out);
    }
    out.push_str(&format!("{indent}</{}>\n", meta.directive));
}
