//! Resolves which trendline (and which part of it) sits under the
//! pointer. Used both for drag initiation and for hover highlighting.

use eframe::egui::{CursorIcon, Pos2};

use crate::config::plot::PLOT_CONFIG;
use crate::models::Trendline;

use super::geometry::{distance_to_point, distance_to_segment};
use super::scale::ChartScale;

/// Part of a trendline under the pointer. Handles (endpoints) win over
/// the body, and the start handle is checked before the end handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Start,
    End,
    Body,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub id: String,
    pub region: HitRegion,
}

/// Tests every trendline in collection order and returns the first hit.
/// Later trendlines are never considered once one matches, even if they
/// are closer: overlaps are disambiguated by list order, deliberately.
pub fn hit_test(pos: Pos2, trendlines: &[Trendline], scale: &ChartScale) -> Option<Hit> {
    for line in trendlines {
        let start = scale.chart_to_screen(line.start_point);
        let end = scale.chart_to_screen(line.end_point);

        if let Some(region) = classify(pos, start, end) {
            return Some(Hit {
                id: line.id.clone(),
                region,
            });
        }
    }
    None
}

fn classify(pos: Pos2, start: Pos2, end: Pos2) -> Option<HitRegion> {
    if distance_to_point(pos.x, pos.y, start.x, start.y) <= PLOT_CONFIG.handle_grab_radius {
        return Some(HitRegion::Start);
    }
    if distance_to_point(pos.x, pos.y, end.x, end.y) <= PLOT_CONFIG.handle_grab_radius {
        return Some(HitRegion::End);
    }
    if distance_to_segment(pos.x, pos.y, start.x, start.y, end.x, end.y)
        <= PLOT_CONFIG.body_grab_radius
    {
        return Some(HitRegion::Body);
    }
    None
}

/// Body-only variant used by the plain-click selection path, which
/// ignores handles on purpose: clicking a bare endpoint of an
/// unselected line should not select it.
pub fn body_hit(pos: Pos2, trendlines: &[Trendline], scale: &ChartScale) -> Option<String> {
    trendlines
        .iter()
        .find(|line| {
            let start = scale.chart_to_screen(line.start_point);
            let end = scale.chart_to_screen(line.end_point);
            distance_to_segment(pos.x, pos.y, start.x, start.y, end.x, end.y)
                <= PLOT_CONFIG.body_grab_radius
        })
        .map(|line| line.id.clone())
}

/// Cursor shape for hover mode: grab over a handle, move over a body.
pub fn cursor_for(hit: Option<&Hit>) -> CursorIcon {
    match hit.map(|h| h.region) {
        Some(HitRegion::Start) | Some(HitRegion::End) => CursorIcon::Grab,
        Some(HitRegion::Body) => CursorIcon::Move,
        None => CursorIcon::Default,
    }
}
