/// Class carried by every wrapped line; its presence marks content as done.
pub const STAGGER_LINE_CLASS: &str = "stagger-line";

#[inline]
pub fn is_staggered(html: &str) -> bool {
    html.contains(&format!("class=\"{STAGGER_LINE_CLASS}\""))
}

/// Split `html` on top-level `<br>` and wrap each line in a span whose transition
/// delay grows by `step_ms` per line. Already wrapped content is returned
/// unchanged.
pub fn stagger_lines(html: &str, step_ms: u32) -> String {
    if is_staggered(html) {
        return html.to_string();
    }
    split_lines(html)
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                "<span class=\"{STAGGER_LINE_CLASS}\" style=\"transition-delay: {}ms\">{}</span>",
                i as u32 * step_ms,
                line
            )
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// Only breaks outside any element split lines, so a `<br>` nested in inline
// markup stays inside its span. Browsers serialize `<br>`, but hand-written
// markup may use the XHTML forms.
fn split_lines(html: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut depth = 0usize;
    let mut line_start = 0;
    let mut cursor = 0;
    while let Some(offset) = html[cursor..].find('<') {
        let open = cursor + offset;
        let Some(len) = html[open..].find('>') else {
            break;
        };
        let close = open + len + 1;
        let tag = &html[open + 1..close - 1];
        cursor = close;
        if tag.starts_with('!') {
            continue;
        }
        if tag.starts_with('/') {
            depth = depth.saturating_sub(1);
            continue;
        }
        let name = tag_name(tag);
        if name.eq_ignore_ascii_case("br") {
            if depth == 0 {
                lines.push(&html[line_start..open]);
                line_start = close;
            }
        } else if !tag.ends_with('/') && !VOID_ELEMENTS.iter().any(|v| name.eq_ignore_ascii_case(v)) {
            depth += 1;
        }
    }
    lines.push(&html[line_start..]);
    lines
}

fn tag_name(tag: &str) -> &str {
    tag.split(|c: char| c.is_ascii_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
}
