use cairo::ImageSurface;
use scribblepad::draw::{Color, RED, WHITE};
use scribblepad::{DrawingSurface, SurfaceSettings, Tool};

const OPAQUE_RED: u32 = 0xFFFF0000;
const OPAQUE_WHITE: u32 = 0xFFFFFFFF;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_surface() -> DrawingSurface {
    init_logging();
    DrawingSurface::new(SurfaceSettings {
        pen_color: RED,
        background_color: WHITE,
        pen_width: 4.0,
        ..SurfaceSettings::default()
    })
}

fn render(surface: &DrawingSurface, width: i32, height: i32) -> ImageSurface {
    surface
        .render_to_image(width, height)
        .expect("image surface should be created")
}

/// Reads a pixel as premultiplied `0xAARRGGBB`.
fn pixel(image: &mut ImageSurface, x: usize, y: usize) -> u32 {
    let stride = image.stride() as usize;
    let data = image.data().expect("exclusive access to image data");
    let offset = y * stride + x * 4;
    u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn gesture(surface: &mut DrawingSurface, tool: Tool, from: (f64, f64), to: &[(f64, f64)]) {
    surface.set_tool(tool);
    surface.on_press(from.0, from.1);
    for &(x, y) in to {
        surface.on_drag(x, y).expect("gesture is active");
    }
    surface.on_release();
}

#[test]
fn empty_surface_renders_background_only() {
    let surface = make_surface();
    let mut image = render(&surface, 32, 32);
    assert_eq!(pixel(&mut image, 0, 0), OPAQUE_WHITE);
    assert_eq!(pixel(&mut image, 31, 31), OPAQUE_WHITE);
}

#[test]
fn rectangle_strokes_outline_not_interior() {
    let mut surface = make_surface();
    gesture(&mut surface, Tool::Rectangle, (20.0, 20.0), &[(80.0, 60.0)]);

    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 20, 40), OPAQUE_RED);
    assert_eq!(pixel(&mut image, 79, 40), OPAQUE_RED);
    assert_eq!(pixel(&mut image, 50, 40), OPAQUE_WHITE);
}

#[test]
fn undone_steps_leave_no_pixels() {
    let mut surface = make_surface();
    gesture(&mut surface, Tool::Rectangle, (20.0, 20.0), &[(80.0, 60.0)]);
    surface.undo();

    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 20, 40), OPAQUE_WHITE);

    surface.redo();
    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 20, 40), OPAQUE_RED);
}

#[test]
fn oval_is_inscribed_in_its_box() {
    let mut surface = make_surface();
    gesture(&mut surface, Tool::Oval, (20.0, 20.0), &[(80.0, 80.0)]);

    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 50, 20), OPAQUE_RED);
    assert_eq!(pixel(&mut image, 50, 50), OPAQUE_WHITE);
    // Box corners lie outside the ellipse
    assert_eq!(pixel(&mut image, 21, 21), OPAQUE_WHITE);
}

#[test]
fn single_press_pen_draws_a_dot() {
    let mut surface = make_surface();
    surface.set_pen_width(10.0).unwrap();
    gesture(&mut surface, Tool::Pen, (50.0, 50.0), &[]);

    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 50, 50), OPAQUE_RED);
    assert_eq!(pixel(&mut image, 70, 50), OPAQUE_WHITE);
}

#[test]
fn eraser_paints_background_over_ink() {
    let mut surface = make_surface();
    surface.set_pen_width(6.0).unwrap();
    gesture(&mut surface, Tool::Pen, (10.0, 50.0), &[(90.0, 50.0)]);

    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 50, 50), OPAQUE_RED);

    surface.set_pen_width(12.0).unwrap();
    gesture(&mut surface, Tool::Eraser, (10.0, 50.0), &[(90.0, 50.0)]);

    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 50, 50), OPAQUE_WHITE);

    surface.undo();
    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 50, 50), OPAQUE_RED);
}

#[test]
fn steps_keep_their_own_colors() {
    let mut surface = make_surface();
    gesture(&mut surface, Tool::Pen, (10.0, 10.0), &[(90.0, 10.0)]);
    surface.set_pen_color(Color::from_argb(0xFF0000FF));
    gesture(&mut surface, Tool::Pen, (10.0, 90.0), &[(90.0, 90.0)]);

    let mut image = render(&surface, 100, 100);
    assert_eq!(pixel(&mut image, 50, 10), OPAQUE_RED);
    assert_eq!(pixel(&mut image, 50, 90), 0xFF0000FF);
}

#[test]
fn rendering_is_repeatable() {
    let mut surface = make_surface();
    gesture(
        &mut surface,
        Tool::Pen,
        (5.0, 5.0),
        &[(40.0, 60.0), (70.0, 20.0), (95.0, 95.0)],
    );
    gesture(&mut surface, Tool::Oval, (10.0, 60.0), &[(60.0, 90.0)]);

    let mut first = render(&surface, 100, 100);
    let mut second = render(&surface, 100, 100);
    let first_data = first.data().unwrap().to_vec();
    let second_data = second.data().unwrap().to_vec();
    assert_eq!(first_data, second_data);
    assert_eq!(surface.history().len(), 2);
}

#[test]
fn label_draws_text_outline() {
    let mut surface = make_surface();
    surface.set_tool(Tool::Label);
    surface.on_press(10.0, 110.0);
    surface.set_label_text("Hi");

    let mut image = render(&surface, 200, 150);
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let has_ink = data
        .chunks(stride)
        .flat_map(|row| row[..200 * 4].chunks_exact(4))
        .any(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) != OPAQUE_WHITE);
    assert!(has_ink, "label should change some pixels");
}

#[test]
fn label_baseline_sits_at_anchor() {
    let mut surface = make_surface();
    surface.set_tool(Tool::Label);
    surface.on_press(10.0, 110.0);
    surface.set_label_text("HH");

    let mut image = render(&surface, 200, 150);
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let row_has_ink = |y: usize| {
        data[y * stride..y * stride + 200 * 4]
            .chunks_exact(4)
            .any(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) != OPAQUE_WHITE)
    };

    assert!(
        (100..110).any(&row_has_ink),
        "glyphs should reach down to the anchor row"
    );
    assert!(
        !(116..150).any(&row_has_ink),
        "nothing should be drawn well below the baseline"
    );
}
