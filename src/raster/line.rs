//! Line rasterization: Bresenham and Wu steppers.

use crate::surface::DrawTarget;

/// Plots a solid line from `(x0, y0)` to `(x1, y1)` using Bresenham's
/// algorithm.
///
/// The stepper walks the major axis and produces a connected pixel path
/// covering both endpoints. Strokes wider than one pixel plot
/// `width / 2` extra pixels on each side along the minor axis, keeping the
/// stroke centered on the ideal line.
pub fn stroke_line<T: DrawTarget>(
    target: &mut T,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    argb: u32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let steep = -dy > dx;
    let radius = width / 2;

    let mut err = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        // Thicken along the minor axis.
        for offset in -radius..=radius {
            if steep {
                target.draw_pixel(x + offset, y, argb);
            } else {
                target.draw_pixel(x, y + offset, argb);
            }
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Plots an antialiased line using Wu-style fractional coverage.
///
/// Each step along the major axis splits coverage between the two pixels
/// nearest the ideal line by the fractional part of its minor-axis
/// position; the coverage scales the alpha channel of `argb`, producing
/// partially-transparent writes at the stroke edges. Strokes wider than one
/// pixel keep a solid core and blend only the outermost pixel on each side.
pub fn stroke_line_antialiased<T: DrawTarget>(
    target: &mut T,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    argb: u32,
) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (mut x0, mut y0, mut x1, mut y1) = if steep {
        (y0, x0, y1, x1)
    } else {
        (x0, y0, x1, y1)
    };
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = (x1 - x0) as f64;
    let gradient = if dx == 0.0 {
        1.0
    } else {
        (y1 - y0) as f64 / dx
    };
    let radius = width / 2;

    let mut intery = y0 as f64;
    for x in x0..=x1 {
        let base = intery.floor() as i32;
        let frac = intery - intery.floor();

        plot(target, steep, x, base - radius, argb, 1.0 - frac);
        for minor in (base - radius + 1)..=(base + radius) {
            plot(target, steep, x, minor, argb, 1.0);
        }
        plot(target, steep, x, base + radius + 1, argb, frac);

        intery += gradient;
    }
}

/// Writes one pixel with its alpha scaled by `coverage`, undoing the
/// steep-axis swap.
fn plot<T: DrawTarget>(
    target: &mut T,
    steep: bool,
    major: i32,
    minor: i32,
    argb: u32,
    coverage: f64,
) {
    let value = with_coverage(argb, coverage);
    if steep {
        target.draw_pixel(minor, major, value);
    } else {
        target.draw_pixel(major, minor, value);
    }
}

fn with_coverage(argb: u32, coverage: f64) -> u32 {
    let alpha = (argb >> 24) as f64 * coverage.clamp(0.0, 1.0);
    ((alpha.round() as u32) << 24) | (argb & 0x00FF_FFFF)
}
