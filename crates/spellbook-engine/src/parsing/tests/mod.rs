//! Whole-pipeline behaviour: blocks in, HTML out.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::markup::{Element, Node};
use crate::parsing::blocks::{Block, BlockProcessor, BlockQueue};
use crate::parsing::{
    CmarkEngine, Diagnostic, MarkdownEngine, NestingMode, Outcome, ParseContext, ParseError,
    ParseOptions, Pipeline, render_markdown,
};

fn render(text: &str) -> String {
    render_markdown(text).unwrap()
}

fn pipeline(nesting: NestingMode) -> Pipeline {
    Pipeline::new(ParseOptions {
        nesting,
        ..ParseOptions::default()
    })
}

#[test]
fn tag_with_classes_wraps_rendered_body() {
    assert_eq!(
        render("{% div .a .b %}\nX\n{% enddiv %}"),
        "<div class=\"a b\">\n<p>X</p>\n</div>\n"
    );
}

#[test]
fn mismatched_close_is_an_error() {
    let err = render_markdown("{% div %}\nX\n{% endspan %}").unwrap_err();
    assert_eq!(
        err,
        ParseError::MismatchedTag {
            opened: "div".to_string(),
            closed: "span".to_string()
        }
    );
}

#[test]
fn fenced_python_keeps_indentation() {
    assert_eq!(
        render("```python\ndef f():\n    pass\n```"),
        "<pre><code class=\"language-python\" data-language=\"python\">def f():\n    pass</code></pre>\n"
    );
}

#[test]
fn fence_keeps_blank_lines_inside_the_body() {
    assert_eq!(
        render("```py\na = 1\n\n\nb = 2\n```"),
        "<pre><code class=\"language-py\" data-language=\"py\">a = 1\n\n\nb = 2</code></pre>\n"
    );
}

#[test]
fn fence_body_is_escaped() {
    assert_eq!(
        render("```\nif a < b && c > d {}\n```"),
        "<pre><code>if a &lt; b &amp;&amp; c &gt; d {}</code></pre>\n"
    );
}

const MIXED: &str = "{% div .container %}
# Heading
- List item 1
- List item 2
{% div .nested %}
**Bold text**
{% enddiv %}
{% enddiv %}";

const MIXED_HTML: &str = "<div class=\"container\">
<h1>Heading</h1>
<ul>
<li>List item 1</li>
<li>List item 2</li>
</ul>
<div class=\"nested\">
<p><strong>Bold text</strong></p>
</div>
</div>
";

#[test]
fn mixed_content_nests_elements() {
    let doc = pipeline(NestingMode::DepthAware).parse(MIXED).unwrap();
    assert_eq!(doc.to_html(), MIXED_HTML);
    assert_eq!(doc.outcome(), Outcome::Complete);

    let container = doc.tree.root().find("div").unwrap();
    assert_eq!(container.attributes.get("class"), Some("container"));
    let nested = container.find("div").unwrap();
    assert_eq!(nested.attributes.get("class"), Some("nested"));
}

#[test]
fn first_match_closes_the_outer_tag_early() {
    let doc = pipeline(NestingMode::FirstMatch).parse(MIXED).unwrap();
    assert_eq!(doc.to_html(), MIXED_HTML);
    assert_eq!(doc.outcome(), Outcome::Unterminated(vec!["div".to_string()]));
}

#[test]
fn plain_markdown_matches_the_engine_alone() {
    let text = "\n\n# Title\n\nSome *emphasis* and **strong** text.\n\n\n- loose\n\n- list\n\n    indented code\n\n\n    more code\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";
    let engine = CmarkEngine::default();
    assert_eq!(render(text), engine.render(text));
}

#[test]
fn unclaimed_blocks_render_in_one_engine_call() {
    let doc = Pipeline::default()
        .parse("Para one\n\n- a\n- b\n\n{% div %}\nx\n{% enddiv %}\n\nPara two")
        .unwrap();
    let children = doc.tree.children();
    assert_eq!(children.len(), 3);
    assert_eq!(
        children[0],
        Node::Raw("<p>Para one</p>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n".to_string())
    );
    assert!(matches!(&children[1], Node::Element(e) if e.name == "div"));
    assert_eq!(children[2], Node::Raw("<p>Para two</p>\n".to_string()));
}

#[test]
fn text_around_a_tag_in_one_block() {
    let text = "Intro line\n{% aside .note %}\nInside\n{% endaside %}\nOutro line";
    assert_eq!(
        pipeline(NestingMode::DepthAware).render(text).unwrap(),
        "<p>Intro line</p>\n<aside class=\"note\">\n<p>Inside</p>\n</aside>\n<p>Outro line</p>\n"
    );
    assert_eq!(
        pipeline(NestingMode::FirstMatch).render(text).unwrap(),
        "<p>Intro line</p>\n<aside class=\"note\">\n<p>Inside</p>\n</aside>\n"
    );
}

#[test]
fn blank_lines_inside_a_tag_separate_paragraphs() {
    assert_eq!(
        render("{% section %}\n\nOne\n\nTwo\n\n{% endsection %}"),
        "<section>\n<p>One</p>\n<p>Two</p>\n</section>\n"
    );
}

#[test]
fn same_name_tags_nest_when_depth_aware() {
    let text = "{% div .outer %}\n{% div .inner #inner-id %}\nContent\n{% enddiv %}\n{% enddiv %}";
    let expected =
        "<div class=\"outer\">\n<div class=\"inner\" id=\"inner-id\">\n<p>Content</p>\n</div>\n</div>\n";

    let doc = pipeline(NestingMode::DepthAware).parse(text).unwrap();
    assert_eq!(doc.to_html(), expected);
    assert!(doc.is_complete());

    let doc = pipeline(NestingMode::FirstMatch).parse(text).unwrap();
    assert_eq!(doc.to_html(), expected);
    assert!(!doc.is_complete());
}

#[rstest]
#[case(NestingMode::DepthAware)]
#[case(NestingMode::FirstMatch)]
fn literal_marker_start_in_a_body_is_text(#[case] nesting: NestingMode) {
    let text = "{% div %}\nTemplate tags start with {% and more\n{% enddiv %}\n\nAfter";
    let doc = pipeline(nesting).parse(text).unwrap();
    assert_eq!(
        doc.to_html(),
        "<div>\n<p>Template tags start with {% and more</p>\n</div>\n<p>After</p>\n"
    );
    assert!(doc.is_complete());
}

#[rstest]
#[case(NestingMode::DepthAware)]
#[case(NestingMode::FirstMatch)]
fn unpaired_template_tag_in_a_body_still_closes(#[case] nesting: NestingMode) {
    let text = "{% div .note %}\nAdd {% csrf_token %} to your form.\n{% enddiv %}\n\nAfter";
    let doc = pipeline(nesting).parse(text).unwrap();
    let html = doc.to_html();

    assert!(html.starts_with("<div class=\"note\">\n<p>Add</p>\n"));
    assert!(html.ends_with("</div>\n<p>After</p>\n"));
    // The template tag itself opens an element that runs to the end of the body.
    assert_eq!(
        doc.outcome(),
        Outcome::Unterminated(vec!["csrf_token".to_string()])
    );
}

#[test]
fn closer_for_a_tag_that_never_opened_is_still_an_error() {
    let text = "{% section %}\n{% div %}\nx\n{% endspan %}\n{% endsection %}";
    let err = pipeline(NestingMode::DepthAware).parse(text).unwrap_err();
    assert_eq!(
        err,
        ParseError::MismatchedTag {
            opened: "section".to_string(),
            closed: "span".to_string()
        }
    );
}

#[test]
fn fence_inside_a_tag_hides_its_markers() {
    let text = "{% div .example %}\n```html\n<b>{% raw %}</b>\n```\n{% enddiv %}";
    assert_eq!(
        render(text),
        "<div class=\"example\">\n<pre><code class=\"language-html\" data-language=\"html\">&lt;b&gt;{% raw %}&lt;/b&gt;</code></pre>\n</div>\n"
    );
}

#[test]
fn text_after_a_fence_is_parsed_again() {
    let text = "```sh\nls -la\n```\n{% div .after %}\nDone\n{% enddiv %}";
    assert_eq!(
        render(text),
        "<pre><code class=\"language-sh\" data-language=\"sh\">ls -la</code></pre>\n<div class=\"after\">\n<p>Done</p>\n</div>\n"
    );
}

#[test]
fn text_before_a_fence_is_kept() {
    let text = "Run this:\n```sh\nmake\n```";
    assert_eq!(
        render(text),
        "<p>Run this:</p>\n<pre><code class=\"language-sh\" data-language=\"sh\">make</code></pre>\n"
    );
}

#[test]
fn unclosed_fence_falls_back_to_the_engine() {
    let html = render("```py\nnot closed");
    assert!(html.contains("not closed"));
    assert!(!html.contains("data-language"));
}

#[test]
fn stray_closer_is_plain_text() {
    assert_eq!(
        render("Text\n\n{% enddiv %}"),
        "<p>Text</p>\n<p>{% enddiv %}</p>\n"
    );
}

#[test]
fn unterminated_tag_takes_the_rest_of_the_input() {
    let doc = Pipeline::default().parse("{% div %}\nNever closed").unwrap();
    assert_eq!(doc.to_html(), "<div>\n<p>Never closed</p>\n</div>\n");
    assert_eq!(
        doc.diagnostics,
        vec![Diagnostic::UnterminatedTag {
            tag: "div".to_string()
        }]
    );
    assert_eq!(doc.outcome(), Outcome::Unterminated(vec!["div".to_string()]));
}

#[test]
fn strict_mode_rejects_unterminated_tags() {
    let strict = Pipeline::new(ParseOptions {
        strict: true,
        ..ParseOptions::default()
    });
    assert_eq!(
        strict.parse("{% div %}\nNever closed").unwrap_err(),
        ParseError::UnterminatedTag {
            tag: "div".to_string()
        }
    );
}

#[test]
fn empty_input_has_no_nodes() {
    let doc = Pipeline::default().parse("").unwrap();
    assert!(doc.tree.children().is_empty());
    assert_eq!(doc.to_html(), "");
}

#[rstest]
#[case::htmx(
    "{% div hx-get=\"/api/data\" hx-trigger=\"click\" hx-swap=\"outerHTML\" %}\nLoad\n{% enddiv %}",
    "<div hx-get=\"/api/data\" hx-trigger=\"click\" hx-swap=\"outerHTML\">\n<p>Load</p>\n</div>\n"
)]
#[case::alpine(
    "{% div x-data=\"{ open: false }\" @click=\"open = !open\" :class=\"{ 'active': open }\" %}\nToggle\n{% enddiv %}",
    "<div x-data=\"{ open: false }\" @click=\"open = !open\" :class=\"{ 'active': open }\">\n<p>Toggle</p>\n</div>\n"
)]
#[case::tailwind(
    "{% div .bg-blue-500 .hover:bg-blue-700 .md:flex %}\nStyled\n{% enddiv %}",
    "<div class=\"bg-blue-500 hover:bg-blue-700 md:flex\">\n<p>Styled</p>\n</div>\n"
)]
#[case::custom_element(
    "{% my-card #intro data-size=\"lg\" %}\n*Hi*\n{% endmy-card %}",
    "<my-card id=\"intro\" data-size=\"lg\">\n<p><em>Hi</em></p>\n</my-card>\n"
)]
#[case::multi_line_header(
    "{% div\n  .card\n  data-x=\"1\" %}\nBody\n{% enddiv %}",
    "<div class=\"card\" data-x=\"1\">\n<p>Body</p>\n</div>\n"
)]
fn framework_attributes(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(render(text), expected);
}

#[rstest]
#[case("# H1\n\n## H2\n\n### H3", "<h1>H1</h1>\n<h2>H2</h2>\n<h3>H3</h3>\n")]
#[case("*em* and **strong**", "<p><em>em</em> and <strong>strong</strong></p>\n")]
#[case("1. one\n2. two", "<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n")]
#[case("[link](https://example.com)", "<p><a href=\"https://example.com\">link</a></p>\n")]
fn plain_markdown(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(render(text), expected);
}

/// Claims `!!! text` blocks as admonitions.
struct Admonition;

impl BlockProcessor for Admonition {
    fn name(&self) -> &'static str {
        "admonition"
    }

    fn accepts(&self, block: &Block) -> bool {
        block.text().starts_with("!!! ")
    }

    fn consume(
        &self,
        cx: &mut ParseContext<'_>,
        parent: &mut Element,
        blocks: &mut BlockQueue,
    ) -> Result<bool, ParseError> {
        let Some(block) = blocks.pop() else {
            return Ok(false);
        };
        let body = block.text().trim_start_matches("!!! ").to_string();
        let mut element = Element::new("div", [("class", "admonition")].into_iter().collect());
        cx.parse_into(&mut element, &body)?;
        parent.push_element(element);
        Ok(true)
    }
}

/// Never claims anything, even though it accepts every block.
struct Declines;

impl BlockProcessor for Declines {
    fn name(&self) -> &'static str {
        "declines"
    }

    fn accepts(&self, _block: &Block) -> bool {
        true
    }

    fn consume(
        &self,
        _cx: &mut ParseContext<'_>,
        _parent: &mut Element,
        _blocks: &mut BlockQueue,
    ) -> Result<bool, ParseError> {
        Ok(false)
    }
}

#[test]
fn processors_run_in_priority_order() {
    let pipeline = Pipeline::builder(ParseOptions::default())
        .register(Declines, 10)
        .with_default_processors()
        .register(Admonition, 190)
        .build();
    assert_eq!(
        pipeline.processor_names(),
        vec!["admonition", "code_fence", "tag", "declines"]
    );
}

#[test]
fn custom_processor_recurses_through_the_context() {
    let pipeline = Pipeline::builder(ParseOptions::default())
        .with_default_processors()
        .register(Admonition, 190)
        .build();
    assert_eq!(
        pipeline
            .render("Before\n\n!!! Careful *now*\n\nAfter")
            .unwrap(),
        "<p>Before</p>\n<div class=\"admonition\">\n<p>Careful <em>now</em></p>\n</div>\n<p>After</p>\n"
    );
}

#[test]
fn declining_processor_leaves_the_block_for_the_engine() {
    let pipeline = Pipeline::builder(ParseOptions::default())
        .register(Declines, 200)
        .build();
    assert_eq!(pipeline.render("Just text").unwrap(), "<p>Just text</p>\n");
}

struct Shouting;

impl MarkdownEngine for Shouting {
    fn render(&self, markdown: &str) -> String {
        markdown.trim().to_uppercase()
    }
}

#[test]
fn engine_can_be_replaced() {
    let pipeline = Pipeline::builder(ParseOptions::default())
        .with_default_processors()
        .engine(Shouting)
        .build();
    assert_eq!(
        pipeline.render("{% p %}\nquiet\n{% endp %}").unwrap(),
        "<p>\nQUIET</p>\n"
    );
}

#[test]
fn pipeline_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pipeline>();

    let pipeline = Pipeline::default();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let pipeline = &pipeline;
                s.spawn(move || pipeline.render(&format!("{{% div #n{i} %}}\nX\n{{% enddiv %}}")))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let html = handle.join().unwrap().unwrap();
            assert_eq!(html, format!("<div id=\"n{i}\">\n<p>X</p>\n</div>\n"));
        }
    });
}
