use balloon_core::light::ndc_from_client;
use glam::Vec2;
use web_sys as web;

/// Normalized device coordinates of a client-space point relative to an
/// element's bounding rect.
#[inline]
pub fn client_to_ndc(
    client_x: f32,
    client_y: f32,
    rect_left: f32,
    rect_top: f32,
    rect_width: f32,
    rect_height: f32,
) -> Vec2 {
    ndc_from_client(
        client_x - rect_left,
        client_y - rect_top,
        rect_width,
        rect_height,
    )
}

#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
