use crate::core::RegionRect;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Whether a structural page marker is present (one-time mode detection).
#[inline]
pub fn has_marker(document: &web::Document, selector: &str) -> bool {
    matches!(document.query_selector(selector), Ok(Some(_)))
}

/// Measure a bound region in document space. None when the selector does
/// not match, in which case that binding is simply not active on this page.
pub fn region_rect(document: &web::Document, selector: &str, scroll_y: f32) -> Option<RegionRect> {
    let el = document.query_selector(selector).ok().flatten()?;
    let rect = el.get_bounding_client_rect();
    Some(RegionRect {
        top: rect.top() as f32 + scroll_y,
        height: rect.height() as f32,
    })
}
