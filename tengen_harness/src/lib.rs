// Copyright 2026 the Tengen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test and demo doubles for tengen.
//!
//! Pixel backends are deliberately outside the core crates, so exercising a
//! full update/draw pass needs stand-ins for the pieces a real application
//! provides:
//!
//! - [`RecordingCanvas`] — a [`Canvas`] that records every draw call, in
//!   order, as comparable [`DrawCmd`] values.
//! - [`PositionBuilder`] — a fluent builder for [`Position`] snapshots,
//!   including a text-diagram shorthand for stone placement.
//! - [`CountingSink`] — a [`TraceSink`] that tallies render-pass events.
//!
//! These are plain value types with no test-framework coupling, so demo
//! binaries can use them too (e.g. dumping a recorded command list).

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use tengen_core::color::Rgba;
use tengen_core::coord::{Coord, Move, Player};
use tengen_core::position::{Annotation, Child, Position};
use tengen_render::canvas::Canvas;
use tengen_render::trace::{
    DrawBeginEvent, DrawEndEvent, LayerUpdateEvent, TraceSink, UpdateBeginEvent, UpdateEndEvent,
};

/// One recorded draw primitive, comparable for assertions.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// A filled axis-aligned rectangle.
    Rect {
        /// The filled area.
        rect: Rect,
        /// The fill color.
        color: Rgba,
    },
    /// A filled circle.
    Circle {
        /// The circle center.
        center: Point,
        /// The circle radius.
        radius: f64,
        /// The fill color.
        color: Rgba,
    },
    /// A stroked line segment.
    Line {
        /// The segment start.
        from: Point,
        /// The segment end.
        to: Point,
        /// The stroke width.
        width: f64,
        /// The stroke color.
        color: Rgba,
    },
    /// Text centered on a point.
    Text {
        /// The text payload.
        text: String,
        /// The center point.
        center: Point,
        /// The em height.
        size: f64,
        /// The text color.
        color: Rgba,
    },
}

/// A [`Canvas`] that records every draw call in call order.
///
/// Recorded order is the paint order, so command-list assertions double as
/// z-order assertions.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCmd>,
}

impl RecordingCanvas {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        core::mem::take(&mut self.commands)
    }

    /// The recorded text payloads, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCmd::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, center: Point, size: f64, color: Rgba) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }
}

/// Fluent builder for [`Position`] snapshots.
///
/// Starts from [`Position::empty`] and fills in whatever a test needs;
/// everything else keeps the empty-position defaults.
#[derive(Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl PositionBuilder {
    /// Starts from an empty position of the given board size.
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self {
            position: Position::empty(size),
        }
    }

    /// Places one stone.
    #[must_use]
    pub fn stone(mut self, at: Coord, player: Player) -> Self {
        let index = at.index(self.position.size);
        self.position.stones[index] = Some(player);
        self
    }

    /// Fills the board from a row-per-string diagram.
    ///
    /// `X` places a black stone, `O` a white stone, `.` leaves the cell
    /// empty. Row 0 is the top of the board.
    ///
    /// # Panics
    ///
    /// Panics if the diagram's shape does not match the board size or a
    /// cell character is unrecognized.
    #[must_use]
    pub fn diagram(mut self, rows: &[&str]) -> Self {
        let size = self.position.size as usize;
        assert_eq!(rows.len(), size, "diagram row count must match board size");
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), size, "diagram row width must match board size");
            for (col, cell) in line.bytes().enumerate() {
                self.position.stones[row * size + col] = match cell {
                    b'X' => Some(Player::Black),
                    b'O' => Some(Player::White),
                    b'.' => None,
                    other => panic!("unrecognized diagram cell {:?}", other as char),
                };
            }
        }
        self
    }

    /// Sets the player to move.
    #[must_use]
    pub fn to_play(mut self, player: Player) -> Self {
        self.position.to_play = player;
        self
    }

    /// Sets the node visit count.
    #[must_use]
    pub fn visits(mut self, n: u32) -> Self {
        self.position.n = n;
        self
    }

    /// Sets the node value estimate.
    #[must_use]
    pub fn value(mut self, q: f64) -> Self {
        self.position.q = q;
        self
    }

    /// Sets one per-cell child visit count, materializing the statistics
    /// array (all zeros) on first use.
    #[must_use]
    pub fn child_visit(mut self, at: Coord, n: u32) -> Self {
        let cells = self.position.cells();
        let index = at.index(self.position.size);
        self.position.child_n.get_or_insert_with(|| vec![0; cells])[index] = n;
        self
    }

    /// Sets one per-cell child value estimate, materializing the statistics
    /// array (all zeros) on first use.
    #[must_use]
    pub fn child_value(mut self, at: Coord, q: f64) -> Self {
        let cells = self.position.cells();
        let index = at.index(self.position.size);
        self.position.child_q.get_or_insert_with(|| vec![0.0; cells])[index] = q;
        self
    }

    /// Adds a realized game-tree child.
    #[must_use]
    pub fn child(mut self, last_move: Move) -> Self {
        self.position.children.push(Child { last_move });
        self
    }

    /// Adds a named variation.
    #[must_use]
    pub fn variation(mut self, name: impl Into<String>, moves: Vec<Move>) -> Self {
        self.position.variations.insert(name.into(), moves);
        self
    }

    /// Adds an annotation.
    #[must_use]
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.position.annotations.push(annotation);
        self
    }

    /// Finishes the snapshot.
    ///
    /// Search layers expect both statistics arrays when either is present,
    /// so if only one was populated the other is materialized as zeros.
    #[must_use]
    pub fn build(mut self) -> Position {
        let cells = self.position.cells();
        if self.position.child_n.is_some() && self.position.child_q.is_none() {
            self.position.child_q = Some(vec![0.0; cells]);
        }
        if self.position.child_q.is_some() && self.position.child_n.is_none() {
            self.position.child_n = Some(vec![0; cells]);
        }
        self.position
    }
}

/// A [`TraceSink`] that tallies render-pass events.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountingSink {
    /// Update passes begun.
    pub update_begins: u32,
    /// Per-layer update callbacks observed.
    pub layer_updates: u32,
    /// Per-layer updates that reported a redraw.
    pub layer_redraws: u32,
    /// Update passes completed.
    pub update_ends: u32,
    /// Draw passes begun.
    pub draw_begins: u32,
    /// Draw passes completed.
    pub draw_ends: u32,
    /// Visible layers drawn, summed over all draw passes.
    pub layers_drawn: u32,
}

impl CountingSink {
    /// Creates a sink with all tallies at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for CountingSink {
    fn on_update_begin(&mut self, _e: &UpdateBeginEvent) {
        self.update_begins += 1;
    }

    fn on_layer_update(&mut self, e: &LayerUpdateEvent) {
        self.layer_updates += 1;
        if e.redraw {
            self.layer_redraws += 1;
        }
    }

    fn on_update_end(&mut self, _e: &UpdateEndEvent) {
        self.update_ends += 1;
    }

    fn on_draw_begin(&mut self, _e: &DrawBeginEvent) {
        self.draw_begins += 1;
    }

    fn on_draw_end(&mut self, e: &DrawEndEvent) {
        self.draw_ends += 1;
        self.layers_drawn += e.layers_drawn;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use tengen_core::field::Field;
    use tengen_render::board::BoardView;
    use tengen_render::layer::{
        BoardLayer, SearchLayer, StoneLayer, VariationLayer, VisitCountLayer,
    };
    use tengen_render::trace::Tracer;
    use tengen_render::transform::GridTransform;

    use super::*;

    fn view(size: u8) -> BoardView {
        BoardView::new(GridTransform::new(Point::new(0.0, 0.0), 10.0, size))
    }

    fn circles(commands: &[DrawCmd]) -> Vec<&DrawCmd> {
        commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Circle { .. }))
            .collect()
    }

    #[test]
    fn commands_record_in_z_order() {
        let mut view = view(3);
        view.push(BoardLayer::VisitCount(VisitCountLayer::new()));
        view.push(BoardLayer::Stones(StoneLayer::new()));

        let pos = PositionBuilder::new(3)
            .stone(Coord::new(1, 1), Player::Black)
            .visits(10)
            .child_visit(Coord::new(0, 0), 5)
            .build();

        assert!(view.update(&pos, Field::Stones | Field::ChildVisits));
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas, &pos);

        // Heat map (one colored, unoccupied cell) below the stone.
        let commands = canvas.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCmd::Rect { .. }));
        assert!(matches!(commands[1], DrawCmd::Circle { .. }));
    }

    #[test]
    fn heat_map_skips_occupied_cells() {
        let mut view = view(3);
        view.push(BoardLayer::VisitCount(VisitCountLayer::new()));

        let mut pos = PositionBuilder::new(3)
            .stone(Coord::new(0, 0), Player::White)
            .visits(9)
            .build();
        pos.child_n = Some(vec![1; 9]);

        assert!(view.update(&pos, Field::ChildVisits | Field::Stones));
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas, &pos);

        // All nine cells carry a color, but the occupied one is not painted.
        assert_eq!(canvas.commands().len(), 8);
    }

    #[test]
    fn search_overlay_draws_one_significant_candidate() {
        let mut view = view(3);
        view.push(BoardLayer::Search(SearchLayer::new()));

        // 10 clears the 1000/100 floor; 5 stops the scan; 1 and 0 never
        // qualify.
        let pos = PositionBuilder::new(3)
            .visits(1000)
            .child_visit(Coord::new(0, 0), 10)
            .child_visit(Coord::new(0, 1), 5)
            .child_visit(Coord::new(0, 2), 1)
            .build();

        assert!(view.update(&pos, Field::ChildVisits | Field::ChildValues));
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas, &pos);

        assert_eq!(circles(canvas.commands()).len(), 1);
        assert_eq!(canvas.texts(), vec!["50.0"]);
    }

    #[test]
    fn search_overlay_colors_and_labels_for_black_to_play() {
        let mut view = view(3);
        view.push(BoardLayer::Search(SearchLayer::new()));

        let at = Coord::new(1, 1);
        let pos = PositionBuilder::new(3)
            .to_play(Player::Black)
            .visits(1)
            .child_visit(at, 100)
            .child_value(at, 0.5)
            .build();

        assert!(view.update(&pos, Field::ChildVisits | Field::ChildValues));
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas, &pos);

        // Black to play, so the suggestion renders as a white stone at full
        // intensity ((ln 100 / ln 100)² = 1).
        let commands = canvas.commands();
        assert_eq!(commands.len(), 2);
        let DrawCmd::Circle { center, color, .. } = &commands[0] else {
            panic!("expected the candidate circle first");
        };
        assert_eq!(*center, view.transform().point(at));
        assert_eq!(*color, Rgba::WHITE);

        // Win rate from Black's perspective: 50 + 50·0.5.
        assert_eq!(canvas.texts(), vec!["75.0"]);
    }

    #[test]
    fn variation_repeat_point_draws_one_stone_with_starred_label() {
        let a = Coord::new(2, 2);
        let mut view = view(5);
        view.push(BoardLayer::Variation(VariationLayer::new("main")));

        let pos = PositionBuilder::new(5)
            .variation("main", vec![Move::Play(a), Move::Play(a)])
            .build();

        assert!(view.update(&pos, Field::Variations | Field::Stones));
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas, &pos);

        assert_eq!(circles(canvas.commands()).len(), 1);
        assert_eq!(canvas.texts(), vec!["1*"]);
    }

    #[test]
    fn counting_sink_tallies_a_full_pass() {
        let mut view = view(3);
        view.push(BoardLayer::Stones(StoneLayer::new()));
        let hidden = view.push(BoardLayer::Search(SearchLayer::new()));
        assert!(view.set_visible(hidden, false));

        let pos = PositionBuilder::new(3)
            .stone(Coord::new(0, 0), Player::Black)
            .build();

        let mut sink = CountingSink::new();
        assert!(view.update_traced(&pos, Field::Stones.into(), &mut Tracer::new(&mut sink)));
        let mut canvas = RecordingCanvas::new();
        view.draw_traced(&mut canvas, &pos, &mut Tracer::new(&mut sink));

        assert_eq!(sink.update_begins, 1);
        assert_eq!(sink.layer_updates, 2);
        assert_eq!(sink.layer_redraws, 1);
        assert_eq!(sink.update_ends, 1);
        assert_eq!(sink.draw_begins, 1);
        assert_eq!(sink.draw_ends, 1);
        // The hidden search layer updates but does not draw.
        assert_eq!(sink.layers_drawn, 1);
    }

    #[test]
    fn diagram_places_stones_row_major() {
        let pos = PositionBuilder::new(3)
            .diagram(&[
                "X.O", //
                "...", //
                ".X.",
            ])
            .build();
        assert_eq!(pos.stone_at(Coord::new(0, 0)), Some(Player::Black));
        assert_eq!(pos.stone_at(Coord::new(0, 2)), Some(Player::White));
        assert_eq!(pos.stone_at(Coord::new(2, 1)), Some(Player::Black));
        assert_eq!(pos.stone_at(Coord::new(1, 1)), None);
    }

    #[test]
    #[should_panic(expected = "diagram row width")]
    fn diagram_rejects_ragged_rows() {
        let _ = PositionBuilder::new(3).diagram(&["X.", "...", "..."]);
    }

    #[test]
    fn builder_materializes_the_sibling_statistics_array() {
        let pos = PositionBuilder::new(3)
            .child_visit(Coord::new(0, 0), 7)
            .build();
        assert_eq!(pos.child_n.as_deref().map(<[u32]>::len), Some(9));
        assert_eq!(pos.child_q.as_deref().map(<[f64]>::len), Some(9));
    }

    #[test]
    fn take_drains_the_recorder() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_text("a", Point::new(0.0, 0.0), 8.0, Rgba::BLACK);
        let taken = canvas.take();
        assert_eq!(taken.len(), 1);
        assert!(canvas.commands().is_empty());
    }
}
