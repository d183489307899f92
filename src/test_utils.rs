use std::fmt::{Display, Write};

use proptest::prelude::*;

use crate::{
    node::{Color, NodeId},
    RedBlackTree,
};

/// Generate short lowercase words from a small alphabet, so that generated
/// collections frequently repeat a word.
pub(crate) fn arbitrary_word() -> impl Strategy<Value = String> {
    "[a-e'-]{1,3}"
}

/// Generate text containing mixed-case words separated by runs of
/// delimiters.
pub(crate) fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-eA-E'-]{1,4}", "[ .,;!?\n\t0-9]{1,3}"), 0..100).prop_map(
        |v| {
            v.into_iter()
                .flat_map(|(word, delim)| [word, delim])
                .collect::<String>()
        },
    )
}

/// Render `t` as a Graphviz digraph, with nodes filled by their color.
pub(crate) fn print_dot<K, V>(t: &RedBlackTree<K, V>) -> String
where
    K: Display,
    V: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = white;];"#
    )
    .unwrap();
    if !t.root_id().is_nil() {
        recurse(t, t.root_id(), &mut buf);
    }
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<K, V, W>(t: &RedBlackTree<K, V>, id: NodeId, buf: &mut W)
where
    W: std::fmt::Write,
    K: Display,
    V: Display,
{
    let n = t.node(id);
    let fill = match n.color() {
        Color::Red => "red",
        Color::Black => "black",
    };

    writeln!(
        buf,
        r#""{}" [label="{} | {}"; fillcolor = {};];"#,
        n.key(),
        n.key(),
        n.value(),
        fill,
    )
    .unwrap();

    for child in [n.left(), n.right()] {
        if child.is_nil() {
            writeln!(buf, "\"nil_{}\" [shape=point,style=invis];", n.key()).unwrap();
            writeln!(buf, "\"{}\" -> \"nil_{}\" [style=invis];", n.key(), n.key()).unwrap();
            continue;
        }

        writeln!(buf, "\"{}\" -> \"{}\";", n.key(), t.node(child).key()).unwrap();
        recurse(t, child, buf);
    }
}
