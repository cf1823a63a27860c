use eframe::egui::{Color32, Rect, Response, Sense, Ui, pos2, vec2};

pub(in crate::app) const ZOOM_MIN: f32 = 0.0;
pub(in crate::app) const ZOOM_MAX: f32 = 100.0;

const TRACK_HEIGHT: f32 = 14.0;
const HANDLE_WIDTH: f32 = 12.0;

const TRACK_COLOR: Color32 = Color32::from_rgb(38, 44, 52);
const FILL_COLOR: Color32 = Color32::from_rgb(64, 116, 166);
const HANDLE_COLOR: Color32 = Color32::from_gray(210);

/// One in-flight drag gesture: the pointer x the gesture is measured against
/// and the value at press time. Nothing else survives between frames.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    anchor_x: f32,
    anchor_value: f32,
}

/// Pure press/move/release state machine behind the zoom slider.
///
/// A press never produces a value; it only installs the drag anchor. A press
/// on the track body anchors at the x-coordinate the current value maps to
/// (the handle's visual position), so the gesture behaves as if it had
/// started on the handle. Release reports one final value and always
/// discards the session, so post-release movement can never produce updates.
#[derive(Clone, Copy, Debug, Default)]
pub(in crate::app) struct ZoomDrag {
    session: Option<DragSession>,
}

impl ZoomDrag {
    pub(in crate::app) fn press(
        &mut self,
        press_x: f32,
        on_handle: bool,
        track_left: f32,
        track_width: f32,
        value: f32,
    ) {
        let anchor_x = if on_handle {
            press_x
        } else {
            track_left + (value / ZOOM_MAX) * track_width
        };
        self.session = Some(DragSession {
            anchor_x,
            anchor_value: value,
        });
    }

    pub(in crate::app) fn pointer_moved(&self, pointer_x: f32, track_width: f32) -> Option<f32> {
        let session = self.session?;
        if track_width <= 0.0 {
            return Some(session.anchor_value);
        }
        let delta = pointer_x - session.anchor_x;
        Some((session.anchor_value + delta * (ZOOM_MAX / track_width)).clamp(ZOOM_MIN, ZOOM_MAX))
    }

    pub(in crate::app) fn release(&mut self, pointer_x: f32, track_width: f32) -> Option<f32> {
        let last = self.pointer_moved(pointer_x, track_width);
        self.session = None;
        last
    }

    pub(in crate::app) fn abort(&mut self) {
        self.session = None;
    }

    pub(in crate::app) fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

fn handle_rect(track: Rect, value: f32) -> Rect {
    let center_x = track.left() + (value / ZOOM_MAX) * track.width();
    Rect::from_center_size(
        pos2(center_x, track.center().y),
        vec2(HANDLE_WIDTH, track.height() + 6.0),
    )
}

/// Continuous zoom slider over an externally owned value in [0, 100].
///
/// The widget holds no value state of its own; between frames only the
/// in-flight `ZoomDrag` session lives in egui temp memory under the widget
/// id, and it is removed unconditionally when the gesture ends.
pub(in crate::app) fn zoom_slider(ui: &mut Ui, value: &mut f32) -> Response {
    let desired = vec2(ui.available_width().max(120.0), TRACK_HEIGHT + 8.0);
    let (rect, mut response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

    // Track measured fresh every frame; the handle center stays inside it.
    let track = Rect::from_min_max(
        pos2(rect.left() + HANDLE_WIDTH / 2.0, rect.center().y - TRACK_HEIGHT / 2.0),
        pos2(rect.right() - HANDLE_WIDTH / 2.0, rect.center().y + TRACK_HEIGHT / 2.0),
    );

    let id = response.id;
    let mut drag = ui
        .ctx()
        .data(|data| data.get_temp::<ZoomDrag>(id).unwrap_or_default());

    if response.drag_started() {
        if let Some(press) = response.interact_pointer_pos() {
            let on_handle = handle_rect(track, *value).contains(press);
            drag.press(press.x, on_handle, track.left(), track.width(), *value);
        }
    } else if response.dragged() {
        if let Some(pointer) = response.interact_pointer_pos()
            && let Some(next) = drag.pointer_moved(pointer.x, track.width())
            && next != *value
        {
            *value = next;
            response.mark_changed();
        }
    }

    if response.drag_stopped() {
        let release_x = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|input| input.pointer.latest_pos()))
            .map(|pointer| pointer.x);

        if let Some(release_x) = release_x {
            if let Some(next) = drag.release(release_x, track.width())
                && next != *value
            {
                *value = next;
                response.mark_changed();
            }
        } else {
            drag.abort();
        }
    }

    // A session with the pointer already up means the gesture ended without
    // this widget seeing the release; drop it rather than leak it.
    if drag.is_active() && !response.dragged() && !ui.input(|input| input.pointer.any_down()) {
        drag.abort();
    }

    ui.ctx().data_mut(|data| data.insert_temp(id, drag));

    let painter = ui.painter();
    painter.rect_filled(track, 4.0, TRACK_COLOR);
    let fill_width = track.width() * (value.clamp(ZOOM_MIN, ZOOM_MAX) / ZOOM_MAX);
    if fill_width > 0.0 {
        painter.rect_filled(
            Rect::from_min_size(track.left_top(), vec2(fill_width, track.height())),
            4.0,
            FILL_COLOR,
        );
    }
    painter.rect_filled(handle_rect(track, *value), 3.0, HANDLE_COLOR);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK_LEFT: f32 = 0.0;
    const TRACK_WIDTH: f32 = 200.0;

    #[test]
    fn press_alone_reports_nothing() {
        let mut drag = ZoomDrag::default();
        drag.press(100.0, false, TRACK_LEFT, TRACK_WIDTH, 30.0);
        // Only installing the anchor; no value is produced until a move.
        assert!(drag.is_active());
    }

    #[test]
    fn track_press_anchors_at_the_handle_position() {
        // Value 30 puts the handle at x=60 on a 200px track. Pressing at
        // x=100 (which maps to value 50) must anchor at 60, so a move back
        // to the handle's own x reports exactly the pre-press value.
        let mut drag = ZoomDrag::default();
        drag.press(100.0, false, TRACK_LEFT, TRACK_WIDTH, 30.0);

        assert_eq!(drag.pointer_moved(60.0, TRACK_WIDTH), Some(30.0));
        assert_eq!(drag.pointer_moved(100.0, TRACK_WIDTH), Some(50.0));
    }

    #[test]
    fn handle_press_anchors_at_the_press_point() {
        let mut drag = ZoomDrag::default();
        drag.press(61.0, true, TRACK_LEFT, TRACK_WIDTH, 30.0);

        // No movement, no change.
        assert_eq!(drag.pointer_moved(61.0, TRACK_WIDTH), Some(30.0));
        // +20px on a 200px track is +10 value.
        assert_eq!(drag.pointer_moved(81.0, TRACK_WIDTH), Some(40.0));
    }

    #[test]
    fn values_clamp_to_the_closed_range() {
        let mut drag = ZoomDrag::default();
        drag.press(190.0, true, TRACK_LEFT, TRACK_WIDTH, 95.0);

        assert_eq!(drag.pointer_moved(10_000.0, TRACK_WIDTH), Some(100.0));
        assert_eq!(drag.pointer_moved(-10_000.0, TRACK_WIDTH), Some(0.0));

        let final_value = drag.release(5_000.0, TRACK_WIDTH);
        assert_eq!(final_value, Some(100.0));
    }

    #[test]
    fn release_performs_a_final_update_then_discards_the_session() {
        let mut drag = ZoomDrag::default();
        drag.press(60.0, true, TRACK_LEFT, TRACK_WIDTH, 30.0);
        assert_eq!(drag.pointer_moved(80.0, TRACK_WIDTH), Some(40.0));

        assert_eq!(drag.release(100.0, TRACK_WIDTH), Some(50.0));
        assert!(!drag.is_active());

        // Synthetic moves after release must not produce values.
        assert_eq!(drag.pointer_moved(180.0, TRACK_WIDTH), None);
        assert_eq!(drag.pointer_moved(0.0, TRACK_WIDTH), None);
    }

    #[test]
    fn abort_discards_without_reporting() {
        let mut drag = ZoomDrag::default();
        drag.press(60.0, true, TRACK_LEFT, TRACK_WIDTH, 30.0);
        drag.abort();
        assert!(!drag.is_active());
        assert_eq!(drag.pointer_moved(120.0, TRACK_WIDTH), None);
    }

    #[test]
    fn degenerate_track_width_reports_the_anchor_value() {
        let mut drag = ZoomDrag::default();
        drag.press(10.0, true, TRACK_LEFT, 0.0, 42.0);
        assert_eq!(drag.pointer_moved(500.0, 0.0), Some(42.0));
    }

    #[test]
    fn handle_is_centered_on_the_value_position() {
        let track = Rect::from_min_max(pos2(0.0, 0.0), pos2(200.0, 14.0));
        // Handle for value 50 is centered at x=100, half a handle wide each side.
        assert!(handle_rect(track, 50.0).contains(pos2(100.0, 7.0)));
        assert!(handle_rect(track, 50.0).contains(pos2(95.0, 7.0)));
        assert!(!handle_rect(track, 50.0).contains(pos2(85.0, 7.0)));
    }
}
