//! The pointer-driven interaction engine.
//!
//! [`Editor`] owns the single source of truth (scene, selection, active
//! gesture) and consumes host input events synchronously. Every event is
//! handled to completion; mutations happen only here, and each one that
//! affects visible output triggers a full repaint through the [`Painter`].

use crate::input::{InputEvent, Key, Modifiers};
use crate::render::Painter;
use crate::scene::SceneDocument;
use crate::shapes::{contains_inclusive, Circle, Element, Freehand, Line, Polygon, Rectangle, Text};
use crate::tools::{ToolKind, ToolSettings};
use kurbo::{Point, Rect};

/// Side length of the square resize handle, in surface units.
pub const HANDLE_SIZE: f64 = 10.0;

/// Hit region of the resize handle: a square centered on the bounding
/// box's bottom-right corner.
pub fn resize_handle(bounds: Rect) -> Rect {
    let half = HANDLE_SIZE / 2.0;
    Rect::new(
        bounds.x1 - half,
        bounds.y1 - half,
        bounds.x1 + half,
        bounds.y1 + half,
    )
}

/// The active gesture.
///
/// Exactly one variant is live at a time, so the illegal flag combinations
/// of an `is_drawing`/`is_resizing`/`is_dragging` design cannot be
/// represented. Gestures other than polygon accumulation and text editing
/// begin only from `Idle`.
#[derive(Debug, Clone)]
pub enum Mode {
    /// No gesture in progress.
    Idle,
    /// Dragging out a rectangle, circle, or line from an anchor.
    ///
    /// `current` stays `None` until the first move; a down-up pair with no
    /// movement commits nothing.
    DrawingShape {
        tool: ToolKind,
        anchor: Point,
        current: Option<Point>,
    },
    /// Collecting freehand points while the pointer is down.
    DrawingFreehand { points: Vec<Point> },
    /// Collecting polygon vertices across several click cycles; ended only
    /// by a double-click with enough vertices.
    AccumulatingPolygon { vertices: Vec<Point> },
    /// Moving an element. `original` is the pre-gesture snapshot; every
    /// move recomputes from it, so repeated deltas cannot drift.
    Dragging {
        index: usize,
        original: Element,
        grab: Point,
    },
    /// Resizing the selected element from its bottom-right handle.
    Resizing { index: usize },
    /// Editing text at `origin`. `target` is `None` for a new element.
    EditingText {
        origin: Point,
        target: Option<usize>,
        buffer: String,
    },
}

/// The interaction engine.
#[derive(Debug, Clone)]
pub struct Editor {
    scene: SceneDocument,
    selection: Option<usize>,
    mode: Mode,
    tool: ToolKind,
    settings: ToolSettings,
    /// Last pointer position, used for the polygon rubber band.
    pointer: Point,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with an empty scene.
    pub fn new() -> Self {
        Self::with_scene(SceneDocument::new())
    }

    /// Create an editor around an existing scene.
    pub fn with_scene(scene: SceneDocument) -> Self {
        Self {
            scene,
            selection: None,
            mode: Mode::Idle,
            tool: ToolKind::default(),
            settings: ToolSettings::default(),
            pointer: Point::ZERO,
        }
    }

    /// Read-only view of the scene, for export and persistence.
    pub fn scene(&self) -> &SceneDocument {
        &self.scene
    }

    /// The currently selected element index, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The currently selected element, if any.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.and_then(|index| self.scene.get(index))
    }

    /// The active tool.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Set the active tool. The transient gesture is abandoned; the
    /// selection is kept so the resize handle keeps working from any tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.mode = Mode::Idle;
    }

    /// Host-owned toolbar configuration.
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Mutable access for the host toolbar.
    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    /// Whether a text editing session is active.
    pub fn is_editing_text(&self) -> bool {
        matches!(self.mode, Mode::EditingText { .. })
    }

    /// The text being edited, for the host's input overlay.
    pub fn text_buffer(&self) -> Option<&str> {
        match &self.mode {
            Mode::EditingText { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Handle one input event to completion.
    pub fn handle_event(&mut self, event: InputEvent, painter: &mut dyn Painter) {
        match event {
            InputEvent::PointerDown(point) => self.on_pointer_down(point, painter),
            InputEvent::PointerMove(point) => self.on_pointer_move(point, painter),
            InputEvent::PointerUp(point) => self.on_pointer_up(point, painter),
            InputEvent::DoubleClick(point) => self.on_double_click(point, painter),
            InputEvent::KeyDown { key, modifiers } => self.on_key_down(key, modifiers, painter),
        }
    }

    /// Commit the active text editing session, as on focus loss.
    pub fn finish_text_editing(&mut self, painter: &mut dyn Painter) {
        self.commit_text(painter);
    }

    fn on_pointer_down(&mut self, point: Point, painter: &mut dyn Painter) {
        self.pointer = point;

        // A click outside the text overlay takes its focus; commit the
        // session before interpreting the press.
        if self.is_editing_text() {
            self.commit_text(painter);
        }

        self.validate_selection();

        // A live selection exposes a resize handle that pre-empts every
        // tool, including drawing tools.
        if let Some(index) = self.selection {
            if let Some(element) = self.scene.get(index) {
                if contains_inclusive(resize_handle(element.bounds()), point) {
                    self.mode = Mode::Resizing { index };
                    return;
                }
            }
        }

        match self.tool {
            // Text creation is double-click driven.
            ToolKind::Text => {}
            ToolKind::Select => {
                match self.scene.topmost_hit(point) {
                    Some(index) => {
                        self.selection = Some(index);
                        let original = self.scene.elements()[index].clone();
                        self.mode = Mode::Dragging {
                            index,
                            original,
                            grab: point,
                        };
                    }
                    None => self.selection = None,
                }
                self.repaint(painter);
            }
            ToolKind::Freehand => {
                self.mode = Mode::DrawingFreehand {
                    points: vec![point],
                };
            }
            ToolKind::Polygon => match &mut self.mode {
                Mode::AccumulatingPolygon { vertices } => vertices.push(point),
                _ => {
                    self.mode = Mode::AccumulatingPolygon {
                        vertices: vec![point],
                    };
                }
            },
            ToolKind::Rectangle | ToolKind::Circle | ToolKind::Line => {
                self.mode = Mode::DrawingShape {
                    tool: self.tool,
                    anchor: point,
                    current: None,
                };
            }
        }
    }

    fn on_pointer_move(&mut self, point: Point, painter: &mut dyn Painter) {
        self.pointer = point;
        match &mut self.mode {
            Mode::Resizing { index } => {
                let index = *index;
                if let Some(element) = self.scene.get_mut(index) {
                    match element {
                        // Anchor is the recorded origin corner; the extent
                        // may go negative and is normalized for display.
                        Element::Rectangle(rect) => {
                            rect.width = point.x - rect.origin.x;
                            rect.height = point.y - rect.origin.y;
                        }
                        // Anchor is the center; the radius tracks the
                        // pointer distance.
                        Element::Circle(circle) => {
                            circle.radius = circle.center.distance(point);
                        }
                        // Other elements have no size field on this handle.
                        _ => {}
                    }
                }
            }
            Mode::Dragging {
                index,
                original,
                grab,
            } => {
                let moved = original.translated(point - *grab);
                let index = *index;
                if let Some(slot) = self.scene.get_mut(index) {
                    *slot = moved;
                }
            }
            Mode::DrawingShape { current, .. } => *current = Some(point),
            Mode::DrawingFreehand { points } => points.push(point),
            // Repaint only; the rubber band follows `self.pointer`.
            Mode::AccumulatingPolygon { .. } => {}
            Mode::Idle | Mode::EditingText { .. } => return,
        }
        self.repaint(painter);
    }

    fn on_pointer_up(&mut self, point: Point, painter: &mut dyn Painter) {
        self.pointer = point;
        match std::mem::replace(&mut self.mode, Mode::Idle) {
            // Transform gestures end unconditionally; the selection stays.
            Mode::Resizing { .. } | Mode::Dragging { .. } => {}
            Mode::DrawingShape {
                tool,
                anchor,
                current,
            } => {
                if let Some(end) = current {
                    self.commit_dragged_shape(tool, anchor, end);
                }
                self.repaint(painter);
            }
            Mode::DrawingFreehand { points } => {
                if points.len() >= Freehand::MIN_POINTS {
                    let element =
                        Element::Freehand(Freehand::from_points(points, self.settings.style()));
                    let index = self.scene.push(element);
                    log::debug!("committed freehand element at index {index}");
                } else {
                    log::debug!("dropped freehand gesture with too few points");
                }
                self.repaint(painter);
            }
            // Polygon accumulation spans click cycles; only a double-click
            // ends it.
            mode @ Mode::AccumulatingPolygon { .. } => self.mode = mode,
            mode @ Mode::EditingText { .. } => self.mode = mode,
            Mode::Idle => {}
        }
    }

    fn on_double_click(&mut self, point: Point, painter: &mut dyn Painter) {
        self.pointer = point;
        match self.tool {
            ToolKind::Text => {
                self.mode = Mode::EditingText {
                    origin: point,
                    target: None,
                    buffer: String::new(),
                };
            }
            ToolKind::Select => {
                if let Some(index) = self.scene.topmost_hit(point) {
                    if let Some(text) = self.scene.elements()[index].as_text() {
                        self.mode = Mode::EditingText {
                            origin: text.origin,
                            target: Some(index),
                            buffer: text.content.clone(),
                        };
                    }
                }
            }
            ToolKind::Polygon => self.finalize_polygon(painter),
            _ => {}
        }
    }

    fn on_key_down(&mut self, key: Key, modifiers: Modifiers, painter: &mut dyn Painter) {
        if self.is_editing_text() {
            match key {
                Key::Enter => self.commit_text(painter),
                Key::Backspace => {
                    if let Mode::EditingText { buffer, .. } = &mut self.mode {
                        buffer.pop();
                    }
                }
                Key::Char(c) if !modifiers.ctrl && !modifiers.meta => {
                    if let Mode::EditingText { buffer, .. } = &mut self.mode {
                        buffer.push(c);
                    }
                }
                _ => {}
            }
            return;
        }

        self.validate_selection();
        let Some(index) = self.selection else { return };
        match key {
            Key::Delete | Key::Backspace => {
                self.scene.remove(index);
                self.selection = None;
                log::debug!("deleted element at index {index}");
                self.repaint(painter);
            }
            Key::Char(c) if modifiers.ctrl && c.eq_ignore_ascii_case(&'d') => {
                let copy = self.scene.elements()[index].duplicated();
                let at = self.scene.push(copy);
                log::debug!("duplicated element {index} to index {at}");
                self.repaint(painter);
            }
            _ => {}
        }
    }

    fn commit_dragged_shape(&mut self, tool: ToolKind, anchor: Point, end: Point) {
        let style = self.settings.style();
        let element = match tool {
            ToolKind::Rectangle => Some(Element::Rectangle(Rectangle::from_anchor(
                anchor, end, style,
            ))),
            ToolKind::Circle => Some(Element::Circle(Circle::from_anchor(anchor, end, style))),
            ToolKind::Line if anchor == end => {
                log::debug!("dropped zero-length line");
                None
            }
            ToolKind::Line => Some(Element::Line(Line::new(anchor, end, style))),
            _ => None,
        };
        if let Some(element) = element {
            let index = self.scene.push(element);
            log::debug!("committed {tool:?} element at index {index}");
        }
    }

    fn finalize_polygon(&mut self, painter: &mut dyn Painter) {
        let ready = matches!(
            &self.mode,
            Mode::AccumulatingPolygon { vertices } if vertices.len() >= Polygon::MIN_VERTICES
        );
        if !ready {
            // Too few vertices: nothing commits and the buffer is kept for
            // further clicks.
            return;
        }
        if let Mode::AccumulatingPolygon { vertices } =
            std::mem::replace(&mut self.mode, Mode::Idle)
        {
            let element = Element::Polygon(Polygon::from_points(vertices, self.settings.style()));
            let index = self.scene.push(element);
            log::debug!("committed polygon element at index {index}");
            self.repaint(painter);
        }
    }

    fn commit_text(&mut self, painter: &mut dyn Painter) {
        if !self.is_editing_text() {
            return;
        }
        let Mode::EditingText {
            origin,
            target,
            buffer,
        } = std::mem::replace(&mut self.mode, Mode::Idle)
        else {
            return;
        };

        if buffer.trim().is_empty() {
            log::debug!("discarded whitespace-only text commit");
            return;
        }

        let font = self.settings.font();
        let size = painter.measure_text(&buffer, &font);
        match target {
            Some(index) => match self.scene.get_mut(index) {
                Some(Element::Text(text)) => {
                    text.content = buffer;
                    text.font = font;
                    text.width = size.width;
                    text.height = size.height;
                }
                _ => log::warn!("text commit target {index} is gone; edit discarded"),
            },
            None => {
                let element = Element::Text(Text::new(
                    origin,
                    buffer,
                    font,
                    size.width,
                    size.height,
                    self.settings.text_style(),
                ));
                let index = self.scene.push(element);
                log::debug!("committed text element at index {index}");
            }
        }
        self.repaint(painter);
    }

    /// Repaint the whole surface from current state: background, all
    /// elements in z-order, the selection highlight, then the transient
    /// preview. Idempotent; repeated calls with unchanged state paint
    /// identically.
    pub fn repaint(&self, painter: &mut dyn Painter) {
        painter.fill_background(self.settings.background.into());
        for element in self.scene.elements() {
            draw_element(painter, element);
        }
        if let Some(element) = self.selected_element() {
            let bounds = element.bounds();
            painter.draw_selection(bounds, resize_handle(bounds));
        }
        self.draw_preview(painter);
    }

    /// Paint the in-progress gesture without committing it to the scene.
    fn draw_preview(&self, painter: &mut dyn Painter) {
        match &self.mode {
            Mode::DrawingShape {
                tool,
                anchor,
                current: Some(end),
            } => {
                let style = self.settings.style();
                match tool {
                    ToolKind::Rectangle => {
                        painter.draw_rectangle(&Rectangle::from_anchor(*anchor, *end, style));
                    }
                    ToolKind::Circle => {
                        painter.draw_circle(&Circle::from_anchor(*anchor, *end, style));
                    }
                    ToolKind::Line => painter.draw_line(&Line::new(*anchor, *end, style)),
                    _ => {}
                }
            }
            Mode::DrawingFreehand { points } if points.len() >= Freehand::MIN_POINTS => {
                painter.draw_freehand(&Freehand::from_points(
                    points.clone(),
                    self.settings.style(),
                ));
            }
            Mode::AccumulatingPolygon { vertices } => {
                if vertices.len() >= 2 {
                    painter.draw_polygon(&Polygon::from_points(
                        vertices.clone(),
                        self.settings.style(),
                    ));
                }
                // Rubber band from the last committed vertex to the pointer.
                if let Some(last) = vertices.last() {
                    painter.draw_line(&Line::new(*last, self.pointer, self.settings.style()));
                }
            }
            _ => {}
        }
    }

    /// Drop a selection index that no longer references a live element.
    fn validate_selection(&mut self) {
        if let Some(index) = self.selection {
            if index >= self.scene.len() {
                self.selection = None;
            }
        }
    }
}

fn draw_element(painter: &mut dyn Painter, element: &Element) {
    match element {
        Element::Rectangle(e) => painter.draw_rectangle(e),
        Element::Circle(e) => painter.draw_circle(e),
        Element::Line(e) => painter.draw_line(e),
        Element::Freehand(e) => painter.draw_freehand(e),
        Element::Polygon(e) => painter.draw_polygon(e),
        Element::Text(e) => painter.draw_text(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::FontSpec;
    use kurbo::Size;
    use peniko::Color;

    /// Records the primitives of the most recent frame, one tag per call.
    /// `fill_background` starts a new frame, mirroring a real surface
    /// clear.
    #[derive(Default)]
    struct RecordingPainter {
        frame: Vec<String>,
    }

    impl Painter for RecordingPainter {
        fn fill_background(&mut self, _color: Color) {
            self.frame.clear();
            self.frame.push("background".to_string());
        }

        fn draw_rectangle(&mut self, rectangle: &Rectangle) {
            self.frame
                .push(format!("rect {}x{}", rectangle.width, rectangle.height));
        }

        fn draw_circle(&mut self, circle: &Circle) {
            self.frame.push(format!("circle r{}", circle.radius));
        }

        fn draw_line(&mut self, _line: &Line) {
            self.frame.push("line".to_string());
        }

        fn draw_freehand(&mut self, freehand: &Freehand) {
            self.frame.push(format!("freehand {}", freehand.points.len()));
        }

        fn draw_polygon(&mut self, polygon: &Polygon) {
            self.frame.push(format!("polygon {}", polygon.points.len()));
        }

        fn draw_text(&mut self, text: &Text) {
            self.frame.push(format!("text {}", text.content));
        }

        fn draw_selection(&mut self, _bounds: Rect, _handle: Rect) {
            self.frame.push("selection".to_string());
        }

        fn measure_text(&self, content: &str, font: &FontSpec) -> Size {
            Size::new(content.chars().count() as f64 * 10.0, font.size)
        }
    }

    fn down(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerDown(Point::new(x, y))
    }

    fn mv(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerMove(Point::new(x, y))
    }

    fn up(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerUp(Point::new(x, y))
    }

    fn dbl(x: f64, y: f64) -> InputEvent {
        InputEvent::DoubleClick(Point::new(x, y))
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::KeyDown {
            key,
            modifiers: Modifiers::default(),
        }
    }

    fn type_text(editor: &mut Editor, painter: &mut RecordingPainter, text: &str) {
        for c in text.chars() {
            editor.handle_event(key(Key::Char(c)), painter);
        }
    }

    /// Editor with one 100x100 rectangle at the origin.
    fn editor_with_rect() -> (Editor, RecordingPainter) {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Rectangle);
        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(mv(100.0, 100.0), &mut painter);
        editor.handle_event(up(100.0, 100.0), &mut painter);
        (editor, painter)
    }

    #[test]
    fn test_rectangle_drag_commit() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Rectangle);

        editor.handle_event(down(10.0, 10.0), &mut painter);
        editor.handle_event(mv(50.0, 40.0), &mut painter);
        editor.handle_event(up(50.0, 40.0), &mut painter);

        assert_eq!(editor.scene().len(), 1);
        match &editor.scene().elements()[0] {
            Element::Rectangle(rect) => {
                assert!((rect.origin.x - 10.0).abs() < f64::EPSILON);
                assert!((rect.origin.y - 10.0).abs() < f64::EPSILON);
                assert!((rect.width - 40.0).abs() < f64::EPSILON);
                assert!((rect.height - 30.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Rectangle"),
        }
    }

    #[test]
    fn test_circle_drag_commit() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Circle);

        editor.handle_event(down(100.0, 100.0), &mut painter);
        editor.handle_event(mv(130.0, 100.0), &mut painter);
        editor.handle_event(up(130.0, 100.0), &mut painter);

        assert_eq!(editor.scene().len(), 1);
        match &editor.scene().elements()[0] {
            Element::Circle(circle) => {
                assert!((circle.center.x - 100.0).abs() < f64::EPSILON);
                assert!((circle.center.y - 100.0).abs() < f64::EPSILON);
                assert!((circle.radius - 30.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Circle"),
        }
    }

    #[test]
    fn test_click_without_move_commits_nothing() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Rectangle);

        editor.handle_event(down(10.0, 10.0), &mut painter);
        editor.handle_event(up(10.0, 10.0), &mut painter);

        assert!(editor.scene().is_empty());
    }

    #[test]
    fn test_zero_length_line_is_dropped() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Line);

        editor.handle_event(down(10.0, 10.0), &mut painter);
        editor.handle_event(mv(30.0, 30.0), &mut painter);
        editor.handle_event(mv(10.0, 10.0), &mut painter);
        editor.handle_event(up(10.0, 10.0), &mut painter);

        assert!(editor.scene().is_empty());
    }

    #[test]
    fn test_freehand_commit_and_minimum() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Freehand);

        // One seeded point, no movement: dropped.
        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(up(0.0, 0.0), &mut painter);
        assert!(editor.scene().is_empty());

        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(mv(5.0, 5.0), &mut painter);
        editor.handle_event(mv(10.0, 2.0), &mut painter);
        editor.handle_event(up(10.0, 2.0), &mut painter);

        assert_eq!(editor.scene().len(), 1);
        match &editor.scene().elements()[0] {
            Element::Freehand(freehand) => assert_eq!(freehand.points.len(), 3),
            _ => panic!("expected Freehand"),
        }
    }

    #[test]
    fn test_polygon_accumulates_across_clicks() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Polygon);

        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(up(0.0, 0.0), &mut painter);
        editor.handle_event(down(10.0, 0.0), &mut painter);
        editor.handle_event(up(10.0, 0.0), &mut painter);
        editor.handle_event(down(5.0, 10.0), &mut painter);
        editor.handle_event(up(5.0, 10.0), &mut painter);
        assert!(editor.scene().is_empty());

        editor.handle_event(dbl(5.0, 10.0), &mut painter);

        assert_eq!(editor.scene().len(), 1);
        match &editor.scene().elements()[0] {
            Element::Polygon(poly) => {
                assert_eq!(poly.points.len(), 3);
                assert!((poly.points[0].x).abs() < f64::EPSILON);
                assert!((poly.points[1].x - 10.0).abs() < f64::EPSILON);
                assert!((poly.points[2].y - 10.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Polygon"),
        }
        assert!(matches!(editor.mode, Mode::Idle));
    }

    #[test]
    fn test_polygon_finalize_needs_three_vertices() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Polygon);

        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(up(0.0, 0.0), &mut painter);
        editor.handle_event(down(10.0, 0.0), &mut painter);
        editor.handle_event(up(10.0, 0.0), &mut painter);
        editor.handle_event(dbl(10.0, 0.0), &mut painter);

        // Two vertices: nothing committed, buffer kept.
        assert!(editor.scene().is_empty());
        assert!(matches!(&editor.mode, Mode::AccumulatingPolygon { vertices } if vertices.len() == 2));

        // A third click makes the next finalize succeed and clears the buffer.
        editor.handle_event(down(5.0, 10.0), &mut painter);
        editor.handle_event(up(5.0, 10.0), &mut painter);
        editor.handle_event(dbl(5.0, 10.0), &mut painter);
        assert_eq!(editor.scene().len(), 1);
        assert!(matches!(editor.mode, Mode::Idle));
    }

    #[test]
    fn test_select_and_drag_uses_snapshot_math() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);

        editor.handle_event(down(50.0, 50.0), &mut painter);
        assert_eq!(editor.selection(), Some(0));

        // Deltas are always relative to the grab point, never cumulative.
        editor.handle_event(mv(70.0, 80.0), &mut painter);
        editor.handle_event(mv(60.0, 60.0), &mut painter);
        editor.handle_event(up(60.0, 60.0), &mut painter);

        match &editor.scene().elements()[0] {
            Element::Rectangle(rect) => {
                assert!((rect.origin.x - 10.0).abs() < f64::EPSILON);
                assert!((rect.origin.y - 10.0).abs() < f64::EPSILON);
                assert!((rect.width - 100.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Rectangle"),
        }
        // Selection persists after the drag ends.
        assert_eq!(editor.selection(), Some(0));
    }

    #[test]
    fn test_select_miss_clears_selection() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);

        editor.handle_event(down(50.0, 50.0), &mut painter);
        editor.handle_event(up(50.0, 50.0), &mut painter);
        assert_eq!(editor.selection(), Some(0));

        editor.handle_event(down(500.0, 500.0), &mut painter);
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn test_selection_prefers_topmost() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Rectangle);
        editor.handle_event(down(50.0, 50.0), &mut painter);
        editor.handle_event(mv(150.0, 150.0), &mut painter);
        editor.handle_event(up(150.0, 150.0), &mut painter);

        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(75.0, 75.0), &mut painter);
        assert_eq!(editor.selection(), Some(1));
    }

    #[test]
    fn test_resize_rectangle_from_handle() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(50.0, 50.0), &mut painter);
        editor.handle_event(up(50.0, 50.0), &mut painter);

        // The handle sits on the bounding box's bottom-right corner.
        editor.handle_event(down(102.0, 98.0), &mut painter);
        assert!(matches!(editor.mode, Mode::Resizing { index: 0 }));

        editor.handle_event(mv(140.0, 60.0), &mut painter);
        editor.handle_event(up(140.0, 60.0), &mut painter);

        match &editor.scene().elements()[0] {
            Element::Rectangle(rect) => {
                assert!((rect.width - 140.0).abs() < f64::EPSILON);
                assert!((rect.height - 60.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Rectangle"),
        }
        assert_eq!(editor.selection(), Some(0));
    }

    #[test]
    fn test_resize_pre_empts_drawing_tools() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(50.0, 50.0), &mut painter);
        editor.handle_event(up(50.0, 50.0), &mut painter);

        // Switching tool keeps the selection; the handle still wins.
        editor.set_tool(ToolKind::Circle);
        editor.handle_event(down(100.0, 100.0), &mut painter);
        assert!(matches!(editor.mode, Mode::Resizing { .. }));
        editor.handle_event(mv(120.0, 120.0), &mut painter);
        editor.handle_event(up(120.0, 120.0), &mut painter);

        // No circle was created.
        assert_eq!(editor.scene().len(), 1);
    }

    #[test]
    fn test_resize_circle_tracks_pointer_distance() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Circle);
        editor.handle_event(down(100.0, 100.0), &mut painter);
        editor.handle_event(mv(130.0, 100.0), &mut painter);
        editor.handle_event(up(130.0, 100.0), &mut painter);

        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(110.0, 110.0), &mut painter);
        editor.handle_event(up(110.0, 110.0), &mut painter);
        assert_eq!(editor.selection(), Some(0));

        // Bounds are (70,70)..(130,130); grab the handle.
        editor.handle_event(down(130.0, 130.0), &mut painter);
        assert!(matches!(editor.mode, Mode::Resizing { .. }));
        editor.handle_event(mv(100.0, 150.0), &mut painter);
        editor.handle_event(up(100.0, 150.0), &mut painter);

        match &editor.scene().elements()[0] {
            Element::Circle(circle) => {
                assert!((circle.radius - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Circle"),
        }
    }

    #[test]
    fn test_negative_resize_keeps_normalized_bounds() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(50.0, 50.0), &mut painter);
        editor.handle_event(up(50.0, 50.0), &mut painter);

        editor.handle_event(down(100.0, 100.0), &mut painter);
        editor.handle_event(mv(-20.0, -40.0), &mut painter);
        editor.handle_event(up(-20.0, -40.0), &mut painter);

        let element = &editor.scene().elements()[0];
        match element {
            Element::Rectangle(rect) => {
                assert!((rect.width + 20.0).abs() < f64::EPSILON);
                assert!((rect.height + 40.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Rectangle"),
        }
        let bounds = element.bounds();
        assert!(bounds.x0 <= bounds.x1);
        assert!(bounds.y0 <= bounds.y1);
    }

    #[test]
    fn test_delete_clears_selection() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(50.0, 50.0), &mut painter);
        editor.handle_event(up(50.0, 50.0), &mut painter);

        editor.handle_event(key(Key::Delete), &mut painter);
        assert!(editor.scene().is_empty());
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn test_duplicate_shortcut_appends_offset_clone() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(50.0, 50.0), &mut painter);
        editor.handle_event(up(50.0, 50.0), &mut painter);

        editor.handle_event(
            InputEvent::KeyDown {
                key: Key::Char('d'),
                modifiers: Modifiers::ctrl(),
            },
            &mut painter,
        );

        assert_eq!(editor.scene().len(), 2);
        // Selection stays on the original, not the clone.
        assert_eq!(editor.selection(), Some(0));
        match &editor.scene().elements()[1] {
            Element::Rectangle(rect) => {
                assert!((rect.origin.x - 20.0).abs() < f64::EPSILON);
                assert!((rect.origin.y - 20.0).abs() < f64::EPSILON);
                assert!((rect.width - 100.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Rectangle"),
        }
    }

    #[test]
    fn test_key_without_selection_is_ignored() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.handle_event(key(Key::Delete), &mut painter);
        assert_eq!(editor.scene().len(), 1);
    }

    #[test]
    fn test_stale_selection_is_treated_as_none() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.selection = Some(99);
        editor.handle_event(key(Key::Delete), &mut painter);
        assert_eq!(editor.scene().len(), 1);
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn test_text_creation_via_double_click() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Text);

        editor.handle_event(down(40.0, 60.0), &mut painter);
        assert!(matches!(editor.mode, Mode::Idle));

        editor.handle_event(dbl(40.0, 60.0), &mut painter);
        assert!(editor.is_editing_text());

        type_text(&mut editor, &mut painter, "hello");
        assert_eq!(editor.text_buffer(), Some("hello"));
        editor.handle_event(key(Key::Enter), &mut painter);

        assert_eq!(editor.scene().len(), 1);
        match &editor.scene().elements()[0] {
            Element::Text(text) => {
                assert_eq!(text.content, "hello");
                assert!((text.origin.x - 40.0).abs() < f64::EPSILON);
                assert!((text.width - 50.0).abs() < f64::EPSILON);
                assert!((text.height - editor.settings().font_size).abs() < f64::EPSILON);
            }
            _ => panic!("expected Text"),
        }
        assert!(matches!(editor.mode, Mode::Idle));
    }

    #[test]
    fn test_whitespace_text_commit_discards() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Text);

        editor.handle_event(dbl(0.0, 0.0), &mut painter);
        type_text(&mut editor, &mut painter, "   ");
        editor.handle_event(key(Key::Enter), &mut painter);

        assert!(editor.scene().is_empty());
        assert!(matches!(editor.mode, Mode::Idle));
    }

    #[test]
    fn test_edit_existing_text_in_place() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Text);
        editor.handle_event(dbl(10.0, 30.0), &mut painter);
        type_text(&mut editor, &mut painter, "old");
        editor.handle_event(key(Key::Enter), &mut painter);

        editor.set_tool(ToolKind::Select);
        // The text box spans (10, 30 - height)..(10 + width, 30).
        editor.handle_event(dbl(20.0, 25.0), &mut painter);
        assert!(editor.is_editing_text());
        assert_eq!(editor.text_buffer(), Some("old"));

        editor.handle_event(key(Key::Backspace), &mut painter);
        editor.handle_event(key(Key::Backspace), &mut painter);
        editor.handle_event(key(Key::Backspace), &mut painter);
        type_text(&mut editor, &mut painter, "newer");
        editor.handle_event(key(Key::Enter), &mut painter);

        assert_eq!(editor.scene().len(), 1);
        match &editor.scene().elements()[0] {
            Element::Text(text) => {
                assert_eq!(text.content, "newer");
                assert!((text.width - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected Text"),
        }
    }

    #[test]
    fn test_double_click_on_non_text_does_not_edit() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);
        editor.handle_event(dbl(50.0, 50.0), &mut painter);
        assert!(!editor.is_editing_text());
    }

    #[test]
    fn test_finish_text_editing_is_blur_commit() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Text);
        editor.handle_event(dbl(5.0, 5.0), &mut painter);
        type_text(&mut editor, &mut painter, "note");

        editor.finish_text_editing(&mut painter);
        assert_eq!(editor.scene().len(), 1);

        // A second call is a no-op.
        editor.finish_text_editing(&mut painter);
        assert_eq!(editor.scene().len(), 1);
    }

    #[test]
    fn test_pointer_down_commits_text_session() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Text);
        editor.handle_event(dbl(10.0, 20.0), &mut painter);
        type_text(&mut editor, &mut painter, "note");

        // Clicking elsewhere behaves like the overlay losing focus.
        editor.handle_event(down(300.0, 300.0), &mut painter);
        assert!(!editor.is_editing_text());
        assert_eq!(editor.scene().len(), 1);
    }

    #[test]
    fn test_preview_is_not_committed() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Rectangle);

        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(mv(30.0, 30.0), &mut painter);

        // The frame shows the preview, but the scene holds nothing yet.
        assert!(editor.scene().is_empty());
        assert!(painter.frame.iter().any(|op| op.starts_with("rect")));
    }

    #[test]
    fn test_polygon_preview_includes_rubber_band() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Polygon);

        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(up(0.0, 0.0), &mut painter);
        editor.handle_event(down(10.0, 0.0), &mut painter);
        editor.handle_event(up(10.0, 0.0), &mut painter);
        editor.handle_event(mv(5.0, 20.0), &mut painter);

        assert!(painter.frame.iter().any(|op| op.starts_with("polygon")));
        assert!(painter.frame.iter().any(|op| op == "line"));
    }

    #[test]
    fn test_repaint_is_idempotent() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(50.0, 50.0), &mut painter);
        editor.handle_event(up(50.0, 50.0), &mut painter);

        editor.repaint(&mut painter);
        let first = painter.frame.clone();
        editor.repaint(&mut painter);
        assert_eq!(painter.frame, first);
        assert!(first.contains(&"selection".to_string()));
    }

    #[test]
    fn test_selection_repaint_draws_highlight() {
        let (mut editor, mut painter) = editor_with_rect();
        editor.set_tool(ToolKind::Select);
        editor.handle_event(down(50.0, 50.0), &mut painter);
        assert!(painter.frame.contains(&"selection".to_string()));
    }

    #[test]
    fn test_resize_handle_geometry() {
        let handle = resize_handle(Rect::new(0.0, 0.0, 100.0, 80.0));
        assert!((handle.x0 - 95.0).abs() < f64::EPSILON);
        assert!((handle.y0 - 75.0).abs() < f64::EPSILON);
        assert!((handle.x1 - 105.0).abs() < f64::EPSILON);
        assert!((handle.y1 - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_settings_are_read_at_commit_time() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Rectangle);

        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(mv(10.0, 10.0), &mut painter);
        // The toolbar changes mid-gesture; the commit picks up the new value.
        editor.settings_mut().stroke_width = 7.0;
        editor.handle_event(up(10.0, 10.0), &mut painter);

        let style = editor.scene().elements()[0].style();
        assert!((style.stroke_width - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_tool_abandons_gesture() {
        let mut editor = Editor::new();
        let mut painter = RecordingPainter::default();
        editor.set_tool(ToolKind::Polygon);
        editor.handle_event(down(0.0, 0.0), &mut painter);
        editor.handle_event(up(0.0, 0.0), &mut painter);
        assert!(matches!(editor.mode, Mode::AccumulatingPolygon { .. }));

        editor.set_tool(ToolKind::Select);
        assert!(matches!(editor.mode, Mode::Idle));
    }
}
