//! Layout invariant assertions.
//!
//! These functions check properties every finished layout must satisfy,
//! whatever words and seed produced it. Reused by unit, integration and
//! property tests across the workspace.

use crossgrid_core::Position;
use crossgrid_grid::Layout;

/// Assert that every placed word reads back its text from its anchor.
pub fn assert_words_read_back(layout: &Layout) {
    for word in layout.placed() {
        for (i, expected) in word.text.chars().enumerate() {
            let at = word.placement.cell(i);
            assert_eq!(
                layout.letter_at(at),
                Some(expected),
                "{} letter {i} at {at} does not read back",
                word.text
            );
        }
    }
}

/// Assert that every cell has one or two occupants, and that the two
/// occupants of an intersection run in opposite directions.
pub fn assert_cell_occupancy(layout: &Layout) {
    for cell in layout.cells() {
        let occupants = cell.occupants();
        assert!(
            (1..=2).contains(&occupants.len()),
            "cell {} has {} occupants",
            cell.position(),
            occupants.len()
        );
        if let [a, b] = occupants {
            assert_ne!(
                a.orientation,
                b.orientation,
                "cell {} is shared by two {} words",
                cell.position(),
                a.orientation
            );
        }
    }
}

/// Assert that the layout's minimum corner is `(0, 0)`, that every cell
/// lies inside `width x height`, and that normalizing again is a no-op.
pub fn assert_normalized(layout: &Layout) {
    if layout.cells().next().is_none() {
        assert_eq!((layout.width(), layout.height()), (0, 0));
        return;
    }
    let min_x = layout.cells().map(|c| c.position().x).min();
    let min_y = layout.cells().map(|c| c.position().y).min();
    assert_eq!(min_x, Some(0), "min x is not 0");
    assert_eq!(min_y, Some(0), "min y is not 0");
    for cell in layout.cells() {
        let Position { x, y } = cell.position();
        assert!(
            (x as u32) < layout.width() && (y as u32) < layout.height(),
            "cell ({x}, {y}) outside {}x{}",
            layout.width(),
            layout.height()
        );
    }
    assert_eq!(&layout.normalized(), layout, "normalization is not idempotent");
}

/// Assert the placed and dropped bookkeeping.
pub fn assert_counts(layout: &Layout) {
    assert!(layout.placed_count() <= layout.input_count());
    assert!(
        layout.placed().iter().any(|w| w.id == layout.root()),
        "root word is not placed"
    );
    for dropped in layout.dropped() {
        assert!(
            layout.placed().iter().all(|w| w.id != dropped.id),
            "{} is both placed and dropped",
            dropped.text
        );
    }
}

/// Run every layout check.
pub fn assert_layout_invariants(layout: &Layout) {
    assert_words_read_back(layout);
    assert_cell_occupancy(layout);
    assert_normalized(layout);
    assert_counts(layout);
}
