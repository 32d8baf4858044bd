//! Pointer-driven state machine for trendline editing.
//!
//! The machine owns no trendline data. Each frame the host hands it the
//! current collection plus the active scale ([`ChartFrame`]), feeds it
//! pointer events, and applies the [`ChartCommand`]s it emits. Drag
//! progress is tracked against a snapshot of the grabbed line taken at
//! pointer-down, so intermediate updates never compound.

use {
    eframe::egui::{Color32, CursorIcon, Pos2},
    rand::Rng,
};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{ChartPoint, Trendline};
use crate::utils::epoch_secs_to_datetime;

use super::hit::{self, Hit, HitRegion};
use super::scale::ChartScale;

/// Raw pointer events, already positioned in screen space by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Pos2),
    Moved(Pos2),
    Released(Pos2),
    Clicked(Pos2),
    DoubleClicked(Pos2),
}

/// Mutations the host must apply to its trendline collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartCommand {
    Add(Trendline),
    Update(Trendline),
    Delete(String),
    Select(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Created,
    Dragged,
    Deleted,
    Inspected,
}

/// Observer event describing a completed gesture. The host shows these
/// as transient toasts; the core does not care what happens to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, verb: &str, line: &Trendline) -> Self {
        let direction = if line.is_bullish() { "bullish" } else { "bearish" };
        Self {
            kind,
            text: format!(
                "Trendline #{} {}: ({}, ${:.2}) to ({}, ${:.2}), {} {:+.2}",
                line.short_id(),
                verb,
                epoch_secs_to_datetime(line.start_point.time),
                line.start_point.price,
                epoch_secs_to_datetime(line.end_point.time),
                line.end_point.price,
                direction,
                line.price_change(),
            ),
        }
    }
}

/// Everything the machine emitted while handling events this frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Output {
    pub commands: Vec<ChartCommand>,
    pub notices: Vec<Notice>,
}

impl Output {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.notices.is_empty()
    }
}

/// Per-frame view of the host's state. The slice order matters: it is
/// the hit-test priority order.
pub struct ChartFrame<'a> {
    pub trendlines: &'a [Trendline],
    pub scale: &'a ChartScale,
    pub drawing_mode: bool,
}

impl ChartFrame<'_> {
    fn find(&self, id: &str) -> Option<&Trendline> {
        self.trendlines.iter().find(|line| line.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DrawState {
    Idle,
    /// First click landed; holds the pending start point.
    AwaitingEnd(ChartPoint),
}

#[derive(Debug, Clone, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        id: String,
        region: HitRegion,
        /// Pointer position at grab time; body drags are deltas from here.
        anchor: Pos2,
        /// Endpoints as they were at grab time. Every move replaces the
        /// line relative to these, never relative to the previous move.
        start_snapshot: ChartPoint,
        end_snapshot: ChartPoint,
        /// Whether any update has been emitted. A press-release with no
        /// movement is a click, not a drag, and is handled as one.
        moved: bool,
    },
}

pub struct Interaction {
    draw: DrawState,
    drag: DragState,
    hovered_id: Option<String>,
    selected_id: Option<String>,
    cursor: CursorIcon,
    /// egui reports a click on release even after a drag; the release
    /// handler arms this so the trailing click does not change selection.
    suppress_click: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            draw: DrawState::Idle,
            drag: DragState::Idle,
            hovered_id: None,
            selected_id: None,
            cursor: CursorIcon::Default,
            suppress_click: false,
        }
    }
}

impl Interaction {
    pub fn handle_event(&mut self, event: PointerEvent, frame: &ChartFrame<'_>, out: &mut Output) {
        match event {
            PointerEvent::Pressed(pos) => self.on_pressed(pos, frame, out),
            PointerEvent::Moved(pos) => self.on_moved(pos, frame, out),
            PointerEvent::Released(pos) => self.on_released(pos, frame, out),
            PointerEvent::Clicked(pos) => self.on_clicked(pos, frame, out),
            PointerEvent::DoubleClicked(pos) => self.on_double_clicked(pos, frame, out),
        }
    }

    /// Drawing-mode toggle. Turning the mode off abandons a pending
    /// start point; turning it on cancels any drag and hover.
    pub fn set_drawing_mode(&mut self, on: bool) {
        self.draw = DrawState::Idle;
        if on {
            self.drag = DragState::Idle;
            self.hovered_id = None;
        }
    }

    /// Delete affordance (the button over a hovered line). Stale hover
    /// ids resolve to a silent no-op.
    pub fn delete_hovered(&mut self, frame: &ChartFrame<'_>, out: &mut Output) {
        let Some(id) = self.hovered_id.take() else {
            return;
        };
        let Some(line) = frame.find(&id) else {
            return;
        };
        out.notices.push(Notice::new(NoticeKind::Deleted, "deleted", line));
        out.commands.push(ChartCommand::Delete(id.clone()));
        if self.selected_id.as_deref() == Some(id.as_str()) {
            self.selected_id = None;
            out.commands.push(ChartCommand::Select(None));
        }
    }

    /// Host-driven selection, e.g. from the manager panel.
    pub fn set_selected(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    /// Drops transient references to a line the host removed outside the
    /// pointer flow (panel delete, clear-all).
    pub fn forget_line(&mut self, id: &str) {
        if self.hovered_id.as_deref() == Some(id) {
            self.hovered_id = None;
        }
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        if self.dragging_id() == Some(id) {
            self.drag = DragState::Idle;
        }
    }

    /// Back to a blank slate; pending draw clicks included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn pending_start(&self) -> Option<ChartPoint> {
        match self.draw {
            DrawState::AwaitingEnd(point) => Some(point),
            DrawState::Idle => None,
        }
    }

    pub fn dragging_id(&self) -> Option<&str> {
        match &self.drag {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    fn on_pressed(&mut self, pos: Pos2, frame: &ChartFrame<'_>, out: &mut Output) {
        if frame.drawing_mode {
            return;
        }
        let Some(Hit { id, region }) = hit::hit_test(pos, frame.trendlines, frame.scale) else {
            return;
        };
        // The hit came from this frame's collection, so the lookup holds.
        let Some(line) = frame.find(&id) else {
            return;
        };
        // Grabbing a line selects it, whether or not a drag follows.
        if self.selected_id.as_deref() != Some(id.as_str()) {
            self.selected_id = Some(id.clone());
            out.commands.push(ChartCommand::Select(Some(id.clone())));
        }
        self.drag = DragState::Dragging {
            id,
            region,
            anchor: pos,
            start_snapshot: line.start_point,
            end_snapshot: line.end_point,
            moved: false,
        };
        self.cursor = CursorIcon::Grabbing;
    }

    fn on_moved(&mut self, pos: Pos2, frame: &ChartFrame<'_>, out: &mut Output) {
        if let DragState::Dragging {
            id,
            region,
            anchor,
            start_snapshot,
            end_snapshot,
            ..
        } = self.drag.clone()
        {
            let Some(line) = frame.find(&id) else {
                self.drag = DragState::Idle;
                return;
            };
            let moved = match region {
                HitRegion::Start => frame
                    .scale
                    .screen_to_chart(pos)
                    .map(|p| line.with_endpoints(p, end_snapshot)),
                HitRegion::End => frame
                    .scale
                    .screen_to_chart(pos)
                    .map(|p| line.with_endpoints(start_snapshot, p)),
                HitRegion::Body => {
                    let delta = pos - anchor;
                    let start = frame.scale.chart_to_screen(start_snapshot) + delta;
                    let end = frame.scale.chart_to_screen(end_snapshot) + delta;
                    match (
                        frame.scale.screen_to_chart(start),
                        frame.scale.screen_to_chart(end),
                    ) {
                        (Some(a), Some(b)) => Some(line.with_endpoints(a, b)),
                        // Either endpoint left the plot: drop this move.
                        _ => None,
                    }
                }
            };
            if let Some(updated) = moved {
                out.commands.push(ChartCommand::Update(updated));
                if let DragState::Dragging { moved, .. } = &mut self.drag {
                    *moved = true;
                }
            }
            return;
        }

        if frame.drawing_mode {
            self.cursor = CursorIcon::Crosshair;
            self.hovered_id = None;
            return;
        }

        let hit = hit::hit_test(pos, frame.trendlines, frame.scale);
        self.cursor = hit::cursor_for(hit.as_ref());
        self.hovered_id = hit.map(|h| h.id);
    }

    fn on_released(&mut self, _pos: Pos2, frame: &ChartFrame<'_>, out: &mut Output) {
        if let DragState::Dragging { id, moved, .. } = &self.drag {
            if *moved {
                if let Some(line) = frame.find(id) {
                    out.notices.push(Notice::new(NoticeKind::Dragged, "moved", line));
                }
                // Eat the click egui reports for this release.
                self.suppress_click = true;
            }
            self.drag = DragState::Idle;
            self.cursor = CursorIcon::Default;
        }
    }

    fn on_clicked(&mut self, pos: Pos2, frame: &ChartFrame<'_>, out: &mut Output) {
        if self.suppress_click {
            self.suppress_click = false;
            return;
        }

        if frame.drawing_mode {
            let Some(point) = frame.scale.screen_to_chart(pos) else {
                return;
            };
            match self.draw {
                DrawState::Idle => self.draw = DrawState::AwaitingEnd(point),
                DrawState::AwaitingEnd(start) => {
                    let line = Trendline::new(start, point, random_palette_color());
                    out.notices.push(Notice::new(NoticeKind::Created, "created", &line));
                    self.selected_id = Some(line.id.clone());
                    out.commands.push(ChartCommand::Select(Some(line.id.clone())));
                    out.commands.push(ChartCommand::Add(line));
                    self.draw = DrawState::Idle;
                }
            }
            return;
        }

        if let Some(id) = hit::body_hit(pos, frame.trendlines, frame.scale) {
            // The press already selected it; only a change is worth a command.
            if self.selected_id.as_deref() != Some(id.as_str()) {
                self.selected_id = Some(id.clone());
                out.commands.push(ChartCommand::Select(Some(id)));
            }
        } else if frame.scale.rect.contains(pos) && self.selected_id.is_some() {
            self.selected_id = None;
            out.commands.push(ChartCommand::Select(None));
        }
    }

    fn on_double_clicked(&mut self, pos: Pos2, frame: &ChartFrame<'_>, out: &mut Output) {
        if frame.drawing_mode {
            return;
        }
        let Some(id) = hit::body_hit(pos, frame.trendlines, frame.scale) else {
            return;
        };
        if let Some(line) = frame.find(&id) {
            out.notices.push(Notice::new(NoticeKind::Inspected, "inspected", line));
        }
        self.selected_id = Some(id.clone());
        out.commands.push(ChartCommand::Select(Some(id)));
    }
}

fn random_palette_color() -> Color32 {
    let palette = PLOT_CONFIG.trendline_palette;
    palette[rand::thread_rng().gen_range(0..palette.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Rect, pos2, vec2};

    /// time 0..800 -> x 0..800, price 0..500 -> y 500..0.
    fn scale() -> ChartScale {
        ChartScale::from_bounds(
            0.0,
            800.0,
            0.0,
            500.0,
            Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 500.0)),
        )
    }

    fn screen(point: ChartPoint, scale: &ChartScale) -> Pos2 {
        scale.chart_to_screen(point)
    }

    fn line(t1: f64, p1: f64, t2: f64, p2: f64) -> Trendline {
        Trendline::new(
            ChartPoint::new(t1, p1),
            ChartPoint::new(t2, p2),
            Color32::RED,
        )
    }

    fn drive(
        machine: &mut Interaction,
        events: &[PointerEvent],
        trendlines: &[Trendline],
        scale: &ChartScale,
        drawing_mode: bool,
    ) -> Output {
        let frame = ChartFrame {
            trendlines,
            scale,
            drawing_mode,
        };
        let mut out = Output::default();
        for event in events {
            machine.handle_event(*event, &frame, &mut out);
        }
        out
    }

    #[test]
    fn two_clicks_create_a_time_ordered_trendline() {
        let scale = scale();
        let mut machine = Interaction::default();
        machine.set_drawing_mode(true);

        // Later point clicked first.
        let first = screen(ChartPoint::new(100.0, 50.0), &scale);
        let second = screen(ChartPoint::new(50.0, 80.0), &scale);
        let out = drive(
            &mut machine,
            &[PointerEvent::Clicked(first), PointerEvent::Clicked(second)],
            &[],
            &scale,
            true,
        );

        let added = out
            .commands
            .iter()
            .find_map(|c| match c {
                ChartCommand::Add(line) => Some(line),
                _ => None,
            })
            .expect("second click adds");
        assert!((added.start_point.time - 50.0).abs() < 1e-3);
        assert!((added.start_point.price - 80.0).abs() < 1e-3);
        assert!((added.end_point.time - 100.0).abs() < 1e-3);
        assert!((added.end_point.price - 50.0).abs() < 1e-3);

        // New line arrives selected, machine ready for the next gesture.
        assert!(out.commands.contains(&ChartCommand::Select(Some(added.id.clone()))));
        assert!(machine.pending_start().is_none());
        assert_eq!(out.notices.len(), 1);
        assert_eq!(out.notices[0].kind, NoticeKind::Created);
    }

    #[test]
    fn toggling_drawing_off_discards_the_pending_point() {
        let scale = scale();
        let mut machine = Interaction::default();
        machine.set_drawing_mode(true);

        drive(
            &mut machine,
            &[PointerEvent::Clicked(pos2(100.0, 100.0))],
            &[],
            &scale,
            true,
        );
        assert!(machine.pending_start().is_some());

        machine.set_drawing_mode(false);
        assert!(machine.pending_start().is_none());

        // Re-arming starts the gesture over: one click is pending again,
        // not a completed line.
        machine.set_drawing_mode(true);
        let out = drive(
            &mut machine,
            &[PointerEvent::Clicked(pos2(200.0, 200.0))],
            &[],
            &scale,
            true,
        );
        assert!(out.commands.is_empty());
        assert!(machine.pending_start().is_some());
    }

    #[test]
    fn clicks_outside_the_plot_are_ignored_while_drawing() {
        let scale = scale();
        let mut machine = Interaction::default();
        machine.set_drawing_mode(true);

        let out = drive(
            &mut machine,
            &[PointerEvent::Clicked(pos2(-10.0, 100.0))],
            &[],
            &scale,
            true,
        );
        assert!(out.is_empty());
        assert!(machine.pending_start().is_none());
    }

    #[test]
    fn body_drag_translates_both_endpoints_by_the_pixel_delta() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        let mid = pos2(200.0, 350.0); // screen midpoint of the segment
        let target = pos2(230.0, 310.0); // +30 px right, -40 px up
        let out = drive(
            &mut machine,
            &[PointerEvent::Pressed(mid), PointerEvent::Moved(target)],
            &lines,
            &scale,
            false,
        );

        let updated = out
            .commands
            .iter()
            .find_map(|c| match c {
                ChartCommand::Update(line) => Some(line),
                _ => None,
            })
            .expect("move emits an update");

        // Identity scale: +30 px x is +30 time, -40 px y is +40 price.
        assert!((updated.start_point.time - 130.0).abs() < 1e-3);
        assert!((updated.start_point.price - 140.0).abs() < 1e-3);
        assert!((updated.end_point.time - 330.0).abs() < 1e-3);
        assert!((updated.end_point.price - 240.0).abs() < 1e-3);
        assert!(updated.start_point.time <= updated.end_point.time);
        assert_eq!(updated.id, lines[0].id);
    }

    #[test]
    fn body_drag_rejects_moves_that_leave_the_plot() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        let mid = pos2(200.0, 350.0);
        // 700 px right pushes the end point past x=800.
        let out = drive(
            &mut machine,
            &[PointerEvent::Pressed(mid), PointerEvent::Moved(pos2(900.0, 350.0))],
            &lines,
            &scale,
            false,
        );
        assert!(
            !out.commands
                .iter()
                .any(|c| matches!(c, ChartCommand::Update(_))),
            "out-of-bounds move must not update"
        );
        // Still dragging: a later in-bounds move succeeds.
        assert!(machine.dragging_id().is_some());
    }

    #[test]
    fn drag_initiating_press_selects_the_line() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        let out = drive(
            &mut machine,
            &[
                PointerEvent::Pressed(pos2(200.0, 350.0)),
                PointerEvent::Moved(pos2(210.0, 340.0)),
                PointerEvent::Released(pos2(210.0, 340.0)),
            ],
            &lines,
            &scale,
            false,
        );

        // Selection lands at press time, before any movement.
        assert_eq!(
            out.commands.first(),
            Some(&ChartCommand::Select(Some(lines[0].id.clone())))
        );
        assert_eq!(machine.selected_id(), Some(lines[0].id.as_str()));

        // A handle grab selects the same way a body grab does.
        let mut machine = Interaction::default();
        let handle = screen(ChartPoint::new(100.0, 100.0), &scale);
        let out = drive(&mut machine, &[PointerEvent::Pressed(handle)], &lines, &scale, false);
        assert_eq!(
            out.commands,
            vec![ChartCommand::Select(Some(lines[0].id.clone()))]
        );
    }

    #[test]
    fn handle_drag_reorders_when_crossing_the_other_endpoint() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        let start_handle = screen(ChartPoint::new(100.0, 100.0), &scale);
        // Drag the start handle past the end point in time.
        let out = drive(
            &mut machine,
            &[
                PointerEvent::Pressed(start_handle),
                PointerEvent::Moved(screen(ChartPoint::new(400.0, 50.0), &scale)),
            ],
            &lines,
            &scale,
            false,
        );

        let updated = out
            .commands
            .iter()
            .find_map(|c| match c {
                ChartCommand::Update(line) => Some(line),
                _ => None,
            })
            .unwrap();
        assert!((updated.start_point.time - 300.0).abs() < 1e-3);
        assert!((updated.end_point.time - 400.0).abs() < 1e-3);
    }

    #[test]
    fn stale_id_during_drag_resets_silently() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        drive(
            &mut machine,
            &[PointerEvent::Pressed(pos2(200.0, 350.0))],
            &lines,
            &scale,
            false,
        );
        assert!(machine.dragging_id().is_some());

        // The line vanished underneath the drag (e.g. cleared elsewhere).
        let out = drive(
            &mut machine,
            &[PointerEvent::Moved(pos2(210.0, 350.0))],
            &[],
            &scale,
            false,
        );
        assert!(out.is_empty());
        assert!(machine.dragging_id().is_none());
    }

    #[test]
    fn deselect_is_idempotent() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        // Select via a body click.
        let out = drive(
            &mut machine,
            &[PointerEvent::Clicked(pos2(200.0, 350.0))],
            &lines,
            &scale,
            false,
        );
        assert_eq!(
            out.commands,
            vec![ChartCommand::Select(Some(lines[0].id.clone()))]
        );

        // Empty-space click clears it once.
        let empty = pos2(700.0, 50.0);
        let out = drive(&mut machine, &[PointerEvent::Clicked(empty)], &lines, &scale, false);
        assert_eq!(out.commands, vec![ChartCommand::Select(None)]);

        // And is a no-op when nothing is selected.
        let out = drive(&mut machine, &[PointerEvent::Clicked(empty)], &lines, &scale, false);
        assert!(out.is_empty());
    }

    #[test]
    fn click_after_a_drag_does_not_change_selection() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        let out = drive(
            &mut machine,
            &[
                PointerEvent::Pressed(pos2(200.0, 350.0)),
                PointerEvent::Moved(pos2(210.0, 340.0)),
                PointerEvent::Released(pos2(210.0, 340.0)),
                PointerEvent::Clicked(pos2(210.0, 340.0)),
            ],
            &lines,
            &scale,
            false,
        );

        assert!(out.notices.iter().any(|n| n.kind == NoticeKind::Dragged));
        // The press selected the grabbed line; the trailing click adds
        // nothing on top.
        let selects: Vec<_> = out
            .commands
            .iter()
            .filter(|c| matches!(c, ChartCommand::Select(_)))
            .collect();
        assert_eq!(selects, vec![&ChartCommand::Select(Some(lines[0].id.clone()))]);

        // The suppression is one-shot: the next empty-space click deselects.
        let out = drive(
            &mut machine,
            &[PointerEvent::Clicked(pos2(700.0, 50.0))],
            &lines,
            &scale,
            false,
        );
        assert_eq!(out.commands, vec![ChartCommand::Select(None)]);
    }

    #[test]
    fn stationary_press_release_still_selects_on_click() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        // Full real event sequence for a plain click on a body: the
        // press grabs and selects; with no movement the release is not
        // a drag and the trailing click repeats no command.
        let spot = pos2(200.0, 350.0);
        let out = drive(
            &mut machine,
            &[
                PointerEvent::Pressed(spot),
                PointerEvent::Released(spot),
                PointerEvent::Clicked(spot),
            ],
            &lines,
            &scale,
            false,
        );

        assert_eq!(
            out.commands,
            vec![ChartCommand::Select(Some(lines[0].id.clone()))]
        );
        assert!(out.notices.is_empty(), "no drag happened, no notice");
    }

    #[test]
    fn double_click_reselects_and_raises_a_notice() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        let out = drive(
            &mut machine,
            &[PointerEvent::DoubleClicked(pos2(200.0, 350.0))],
            &lines,
            &scale,
            false,
        );
        assert_eq!(
            out.commands,
            vec![ChartCommand::Select(Some(lines[0].id.clone()))]
        );
        assert_eq!(out.notices.len(), 1);
        assert_eq!(out.notices[0].kind, NoticeKind::Inspected);
    }

    #[test]
    fn delete_removes_hovered_line_and_clears_its_selection() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        // Hover then select the line.
        drive(
            &mut machine,
            &[
                PointerEvent::Moved(pos2(200.0, 350.0)),
                PointerEvent::Clicked(pos2(200.0, 350.0)),
            ],
            &lines,
            &scale,
            false,
        );
        assert_eq!(machine.hovered_id(), Some(lines[0].id.as_str()));

        let frame = ChartFrame {
            trendlines: &lines,
            scale: &scale,
            drawing_mode: false,
        };
        let mut out = Output::default();
        machine.delete_hovered(&frame, &mut out);

        assert!(out.commands.contains(&ChartCommand::Delete(lines[0].id.clone())));
        assert!(out.commands.contains(&ChartCommand::Select(None)));
        assert!(machine.hovered_id().is_none());
        assert!(machine.selected_id().is_none());

        // Second call with nothing hovered: silent no-op.
        let mut out = Output::default();
        machine.delete_hovered(&frame, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn hover_tracks_the_cursor_shape() {
        let scale = scale();
        let lines = vec![line(100.0, 100.0, 300.0, 200.0)];
        let mut machine = Interaction::default();

        let handle = screen(ChartPoint::new(100.0, 100.0), &scale);
        drive(&mut machine, &[PointerEvent::Moved(handle)], &lines, &scale, false);
        assert_eq!(machine.cursor(), CursorIcon::Grab);

        drive(
            &mut machine,
            &[PointerEvent::Moved(pos2(200.0, 350.0))],
            &lines,
            &scale,
            false,
        );
        assert_eq!(machine.cursor(), CursorIcon::Move);

        drive(
            &mut machine,
            &[PointerEvent::Moved(pos2(700.0, 50.0))],
            &lines,
            &scale,
            false,
        );
        assert_eq!(machine.cursor(), CursorIcon::Default);
        assert!(machine.hovered_id().is_none());
    }
}
