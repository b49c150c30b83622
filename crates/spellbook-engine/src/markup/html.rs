use super::{Element, Node};

pub fn write_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        write_node(out, node);
    }
}

pub fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(e) => write_element(out, e),
        Node::Text(t) => out.push_str(&html_escape::encode_text(t)),
        Node::Raw(html) => out.push_str(html),
    }
}

fn write_element(out: &mut String, e: &Element) {
    out.push('<');
    out.push_str(&e.name);
    for (key, value) in e.attributes.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if e.block && e.children.first().is_some_and(Node::is_block) {
        out.push('\n');
    }
    write_nodes(out, &e.children);

    out.push_str("</");
    out.push_str(&e.name);
    out.push('>');
    if e.block {
        out.push('\n');
    }
}
