use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into header, body, and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into an error banner of `banner_height` rows and the rest.
pub fn split_banner(body: Rect, banner_height: u16) -> (Rect, Rect) {
    let banner_height = banner_height.min(body.height);
    let banner = Rect {
        height: banner_height,
        ..body
    };
    let rest = Rect {
        y: body.y + banner_height,
        height: body.height - banner_height,
        ..body
    };
    (banner, rest)
}
