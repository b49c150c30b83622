// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Sections wrapped in tags, nested `depth` levels deep.
#[allow(dead_code)]
pub fn generate_tagged_content(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str(&generate_nested_tags(depth, 1));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_tags(remaining_depth: usize, level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = format!("{{% div .level-{level} #l{level} data-depth=\"{level}\" %}}\n");
    content.push_str("Some paragraph content with *emphasis*. This helps create realistic document structure.\n\n");
    for i in 0..3 {
        content.push_str(&format!("- Item {i} at level {level}\n"));
    }
    content.push('\n');

    if level % 2 == 0 {
        content.push_str("```python\ndef handler(request):\n    return render(request, 'page.html')\n```\n\n");
    }

    content.push_str(&generate_nested_tags(remaining_depth - 1, level + 1));
    content.push_str("{% enddiv %}\n\n");
    content
}
