//! Builds the per-frame `ViewTree`: the playfield with its status bar while running,
//! the final stats once the session has ended.

use engine::graphics::{Color, text_size};
use engine::ui::{Anchor, Rect};
use engine::view_tree::{RectNode, TextNode, ViewNode, ViewTree};

use crate::session::{Session, SessionPhase};
use crate::timefmt::format_time;

pub const LABEL_SCALE: u32 = 3;

/// Left edge of each status bar label: time, speed, hits, lives.
pub const TOP_BAR_LABEL_X: [u32; 4] = [5, 200, 450, 650];

/// Top edge of each end screen row: time, speed, hits, accuracy.
pub const END_SCREEN_ROW_Y: [u32; 4] = [100, 200, 300, 400];

pub fn build_view(session: &Session) -> ViewTree {
    let mut view = ViewTree::new();
    match session.phase() {
        SessionPhase::Running => {
            draw_playfield(&mut view, session);
            draw_top_bar(&mut view, session);
        }
        SessionPhase::Ended => draw_end_screen(&mut view, session),
    }
    view
}

pub fn top_bar_labels(session: &Session) -> [String; 4] {
    [
        time_label(session),
        speed_label(session),
        hits_label(session),
        format!("Lives: {}", session.lives_left()),
    ]
}

pub fn end_screen_labels(session: &Session) -> [String; 4] {
    [
        time_label(session),
        speed_label(session),
        hits_label(session),
        format!("Accuracy: %{:.1}", session.accuracy()),
    ]
}

fn time_label(session: &Session) -> String {
    format!("Time: {}", format_time(session.elapsed().as_secs_f64()))
}

fn speed_label(session: &Session) -> String {
    format!("Speed: {:.1} t/s", session.speed())
}

fn hits_label(session: &Session) -> String {
    format!("Hits: {}", session.hits())
}

fn screen(session: &Session) -> Rect {
    let window = &session.settings().window;
    Rect::from_size(window.width, window.height)
}

fn push_fill(view: &mut ViewTree, rect: Rect, color: Color) {
    view.push(ViewNode::Rect(RectNode { rect, color }));
}

fn push_label(view: &mut ViewTree, area: Rect, anchor: Anchor, text: String, color: Color) {
    let placed = area.place(text_size(&text, LABEL_SCALE), anchor);
    view.push(ViewNode::Text(TextNode {
        pos: (placed.x, placed.y),
        text,
        color,
        scale: LABEL_SCALE,
    }));
}

/// Background plus every live target, oldest first.
pub fn draw_playfield(view: &mut ViewTree, session: &Session) {
    let colors = &session.settings().colors;
    push_fill(view, screen(session), colors.background);
    for target in session.targets() {
        target.draw(view, colors.target_primary, colors.target_secondary);
    }
}

pub fn draw_top_bar(view: &mut ViewTree, session: &Session) {
    let settings = session.settings();
    let bar = Rect::new(0, 0, settings.window.width, settings.layout.top_bar_height);
    push_fill(view, bar, settings.colors.top_bar);

    for (x, text) in TOP_BAR_LABEL_X.into_iter().zip(top_bar_labels(session)) {
        let slot = Rect::new(x, bar.y, bar.w.saturating_sub(x), bar.h);
        push_label(view, slot, Anchor::CenterLeft, text, settings.colors.top_bar_text);
    }
}

pub fn draw_end_screen(view: &mut ViewTree, session: &Session) {
    let settings = session.settings();
    let screen = screen(session);
    push_fill(view, screen, settings.colors.background);

    for (y, text) in END_SCREEN_ROW_Y.into_iter().zip(end_screen_labels(session)) {
        let row = Rect::new(0, y, screen.w, screen.h.saturating_sub(y));
        push_label(view, row, Anchor::TopCenter, text, settings.colors.end_screen_text);
    }
}
