// Graphviz DOT rendering of the match graph.
//
// Each identity is a node and each match an undirected edge weighted by its
// similarity. Feed the output to `dot`/`neato` or any graph viewer.

use std::collections::HashSet;
use std::fmt::Write;

use crate::similarity::traits::MatchResult;

/// Render the matches as an undirected DOT graph.
pub fn to_dot(matches: &[MatchResult]) -> String {
    let mut out = String::from("graph plagiarism {\n");
    out.push_str("  node [shape=ellipse];\n");

    // Nodes in first-seen order so output is stable
    let mut seen = HashSet::new();
    for m in matches {
        for identity in [&m.pair.0, &m.pair.1] {
            if seen.insert(identity.as_str()) {
                let _ = writeln!(out, "  {};", quote(identity));
            }
        }
    }

    for m in matches {
        let _ = writeln!(
            out,
            "  {} -- {} [weight={:.4}, label=\"{:.2}\"];",
            quote(&m.pair.0),
            quote(&m.pair.1),
            m.similarity,
            m.similarity
        );
    }

    out.push_str("}\n");
    out
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
