//! Plain-text dump of a layout.
//!
//! Each row prints every column as its letter followed by a space, or as
//! two spaces when the cell is empty. After the last row comes a blank
//! line and a [`DIVIDER`] line, so several dumps can be appended to one
//! sink and still be told apart.

use std::fmt;

use crate::layout::Layout;

/// Line closing every dump.
pub const DIVIDER: &str = "=====================================";

/// Append the dump of `layout` to `out`.
pub fn write_snapshot<W: fmt::Write + ?Sized>(out: &mut W, layout: &Layout) -> fmt::Result {
    for row in layout.rows() {
        for cell in row {
            match cell {
                Some(letter) => {
                    out.write_char(letter)?;
                    out.write_char(' ')?;
                }
                None => out.write_str("  ")?,
            }
        }
        out.write_char('\n')?;
    }
    out.write_char('\n')?;
    out.write_str(DIVIDER)?;
    out.write_char('\n')
}

/// The dump of `layout` as a new string.
pub fn render_snapshot(layout: &Layout) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_snapshot(&mut out, layout);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::embed_plan;
    use crate::grid::AdjacencyRule;
    use crossgrid_core::{WordId, WordSet};
    use crossgrid_graph::{IntersectionGraph, SpanningTree, TraversalPlan};

    fn layout(words: &[&str]) -> Layout {
        let mut set = WordSet::from_inputs(words);
        let graph = IntersectionGraph::build(&mut set);
        let tree = SpanningTree::from_edges(graph.edges().iter().copied(), set.len());
        let plan = TraversalPlan::from_root(&tree, WordId(0), set.len());
        let embedding = embed_plan(&mut set, &plan, AdjacencyRule::Strict).unwrap();
        Layout::from_embedding(embedding, &set, 0).unwrap()
    }

    #[test]
    fn divider_is_37_wide() {
        assert_eq!(DIVIDER.len(), 37);
        assert!(DIVIDER.chars().all(|c| c == '='));
    }

    #[test]
    fn cat_car_dump() {
        let text = render_snapshot(&layout(&["CAT", "CAR"]));
        let expected = format!("  C   \nC A T \n  R   \n\n{DIVIDER}\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn single_word_dump() {
        let text = render_snapshot(&layout(&["hp"]));
        assert_eq!(text, format!("H P \n\n{DIVIDER}\n"));
    }

    #[test]
    fn dumps_concatenate() {
        let one = layout(&["HP"]);
        let mut out = String::new();
        write_snapshot(&mut out, &one).unwrap();
        write_snapshot(&mut out, &one).unwrap();
        assert_eq!(out.matches(DIVIDER).count(), 2);
        assert_eq!(out, render_snapshot(&one).repeat(2));
    }
}
