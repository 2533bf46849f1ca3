//! Geometric helpers for placement and hit tests.

use macroquad::math::{Rect, Vec2};

use super::params::Params;

/// Tests whether a circle overlaps an axis-aligned rectangle.
///
/// Touching counts as overlapping.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = Vec2::new(
        center.x.clamp(rect.x, rect.x + rect.w),
        center.y.clamp(rect.y, rect.y + rect.h),
    );
    center.distance_squared(nearest) <= radius * radius
}

/// The ground strip the player bar and food rest on.
pub fn ground_rect(params: &Params) -> Rect {
    let top = params.screen_height - params.screen_height / 8.0;
    Rect::new(
        0.0,
        top + top / 36.0,
        params.screen_width,
        params.screen_height / 9.0,
    )
}
