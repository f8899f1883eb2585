//! Circle rasterization: midpoint border ring and filled-disk interior.

use crate::surface::DrawTarget;

/// Draws a circle border as a `width`-thick ring of midpoint circles.
pub fn stroke_circle<T: DrawTarget>(
    target: &mut T,
    center_x: i32,
    center_y: i32,
    radius: i32,
    width: i32,
    argb: u32,
) {
    let inner = (radius - width + 1).max(1);
    for ring in inner..=radius {
        circle_ring(target, center_x, center_y, ring, argb);
    }
}

/// One single-pixel ring via the midpoint-circle algorithm.
///
/// The error term starts at `4 * (0.25 - r)`, scaled by four so it stays
/// integral; each first-octant step is mirrored eight ways.
fn circle_ring<T: DrawTarget>(
    target: &mut T,
    center_x: i32,
    center_y: i32,
    radius: i32,
    argb: u32,
) {
    let mut x = 0;
    let mut y = -radius;
    let mut determination = -4 * radius + 1;

    while x < -y {
        if determination < 0 {
            // midpoint inside the circle
            determination += 8 * x + 4;
        } else {
            // midpoint outside: step inwards
            y += 1;
            determination += 8 * (x + y) + 4;
        }

        target.draw_pixel(center_x + x, center_y + y, argb);
        target.draw_pixel(center_x - x, center_y + y, argb);
        target.draw_pixel(center_x + x, center_y - y, argb);
        target.draw_pixel(center_x - x, center_y - y, argb);
        target.draw_pixel(center_x + y, center_y + x, argb);
        target.draw_pixel(center_x - y, center_y + x, argb);
        target.draw_pixel(center_x + y, center_y - x, argb);
        target.draw_pixel(center_x - y, center_y - x, argb);

        x += 1;
    }
}

/// Fills the disk interior left inside a `border_width`-thick border.
///
/// Covers every pixel within `radius - border_width` of the center using
/// one horizontal span per scanline, so the border ring is never
/// overdrawn.
pub fn fill_circle<T: DrawTarget>(
    target: &mut T,
    center_x: i32,
    center_y: i32,
    radius: i32,
    border_width: i32,
    argb: u32,
) {
    let interior = radius - border_width;
    if interior <= 0 {
        return;
    }
    for dy in -interior..=interior {
        let half = (((interior * interior - dy * dy) as f64).sqrt()) as i32;
        target.fill_rect(center_x - half, center_y + dy, 2 * half + 1, 1, argb);
    }
}
