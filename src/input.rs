use glam::Vec2;
use liquid_core::{InputEvent, RawTouch, Surface};
use web_sys as web;

// ---------------- Coordinate helpers ----------------

/// Map viewport (client) coordinates into surface units.
///
/// `rect_origin` and `rect_size` are the element's bounding box in CSS
/// pixels. The offset is rescaled by `surface / rect_size` so a canvas
/// stretched by CSS still lands on the outline it shows.
#[inline]
pub fn client_to_surface(client: Vec2, rect_origin: Vec2, rect_size: Vec2, surface: Surface) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local * Vec2::new(surface.width, surface.height) / rect_size
    } else {
        local
    }
}

/// Touch pressure if the device reported one.
#[inline]
pub fn touch_force(force: f32, min_force: f32) -> Option<f32> {
    (force.is_finite() && force > min_force).then_some(force)
}

// ---------------- Event conversion ----------------

#[inline]
fn element_rect(el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    (
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

/// Mouse or pen movement over `el`. Touch pointers are left to the touch
/// handlers, which see every finger at once.
pub fn pointer_move(ev: &web::PointerEvent, el: &web::Element, surface: Surface) -> Option<InputEvent> {
    if ev.pointer_type() == "touch" {
        return None;
    }
    let (origin, size) = element_rect(el);
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    Some(InputEvent::PointerMove(client_to_surface(
        client, origin, size, surface,
    )))
}

/// Every active touch, in `el`'s surface coordinates. Filtering to the
/// surface happens when the event is applied.
pub fn touches(ev: &web::TouchEvent, el: &web::Element, surface: Surface, min_force: f32) -> InputEvent {
    let (origin, size) = element_rect(el);
    let list = ev.touches();
    let raw = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| RawTouch {
            position: client_to_surface(
                Vec2::new(t.client_x() as f32, t.client_y() as f32),
                origin,
                size,
                surface,
            ),
            force: touch_force(t.force(), min_force),
        })
        .collect();
    InputEvent::Touches(raw)
}
