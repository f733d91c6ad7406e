use engine::graphics::{CpuRenderer, Renderer2d, text_size};
use engine::surface::{RgbaBufferSurface, SurfaceSize};
use engine::ui::Rect;
use engine::view_tree::{CircleNode, RectNode, TextNode, ViewNode, ViewTree, draw_view};

const BLACK: [u8; 4] = [0, 0, 0, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * width + x) * 4) as usize;
    [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
}

#[test]
fn fill_rect_clips_to_the_frame() {
    let width = 8u32;
    let height = 6u32;
    let mut frame = vec![0u8; (width * height * 4) as usize];
    let mut gfx = CpuRenderer::new(&mut frame, SurfaceSize::new(width, height));

    gfx.fill_rect(Rect::new(6, 4, 10, 10), RED);

    assert_eq!(pixel(&frame, width, 7, 5), RED);
    assert_eq!(pixel(&frame, width, 5, 5), [0, 0, 0, 0]);
    assert_eq!(pixel(&frame, width, 7, 3), [0, 0, 0, 0]);
}

#[test]
fn fill_circle_covers_the_disc_and_nothing_outside() {
    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(64, 64));
    {
        let mut gfx = surface.renderer();
        gfx.clear(BLACK);
        gfx.fill_circle(32, 32, 10.0, RED);
    }

    assert_eq!(surface.pixel(32, 32), Some(RED));
    assert_eq!(surface.pixel(42, 32), Some(RED));
    assert_eq!(surface.pixel(32, 22), Some(RED));
    assert_eq!(surface.pixel(39, 39), Some(RED));
    assert_eq!(surface.pixel(43, 32), Some(BLACK));
    assert_eq!(surface.pixel(40, 40), Some(BLACK));
}

#[test]
fn fill_circle_below_one_pixel_draws_nothing() {
    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(8, 8));
    {
        let mut gfx = surface.renderer();
        gfx.clear(BLACK);
        gfx.fill_circle(4, 4, 0.6, RED);
        gfx.fill_circle(4, 4, -3.0, RED);
    }
    assert!(surface.frame().chunks_exact(4).all(|px| px == BLACK));
}

#[test]
fn fill_circle_partially_off_screen_is_clipped() {
    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(16, 16));
    {
        let mut gfx = surface.renderer();
        gfx.clear(BLACK);
        gfx.fill_circle(-2, 0, 5.0, RED);
    }
    assert_eq!(surface.pixel(0, 0), Some(RED));
    assert_eq!(surface.pixel(2, 0), Some(RED));
    assert_eq!(surface.pixel(4, 0), Some(BLACK));
}

#[test]
fn text_stays_within_its_measured_box() {
    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(200, 40));
    let label = "Hits: 12";
    let scale = 3;
    {
        let mut gfx = surface.renderer();
        gfx.clear(BLACK);
        gfx.draw_text_scaled(10, 5, label, WHITE, scale);
    }

    let size = text_size(label, scale);
    let mut lit = 0;
    for y in 0..40 {
        for x in 0..200 {
            if surface.pixel(x, y) == Some(WHITE) {
                lit += 1;
                assert!((10..10 + size.w).contains(&x), "x {x} outside the text box");
                assert!((5..5 + size.h).contains(&y), "y {y} outside the text box");
            }
        }
    }
    assert!(lit > 0);
}

#[test]
fn draw_view_paints_nodes_in_order() {
    let mut view = ViewTree::new();
    view.push(ViewNode::Rect(RectNode {
        rect: Rect::from_size(32, 32),
        color: BLACK,
    }));
    view.push(ViewNode::Circle(CircleNode {
        center: (16, 16),
        radius: 10.0,
        color: RED,
    }));
    view.push(ViewNode::Circle(CircleNode {
        center: (16, 16),
        radius: 4.0,
        color: WHITE,
    }));
    view.push(ViewNode::Text(TextNode {
        pos: (0, 0),
        text: "1".to_string(),
        color: WHITE,
        scale: 1,
    }));

    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(32, 32));
    draw_view(&view, &mut surface.renderer());

    assert_eq!(surface.pixel(16, 16), Some(WHITE));
    assert_eq!(surface.pixel(16 + 8, 16), Some(RED));
    assert_eq!(surface.pixel(31, 31), Some(BLACK));
    // Top-middle bit of the "1" glyph.
    assert_eq!(surface.pixel(1, 0), Some(WHITE));
}

#[test]
fn view_tree_round_trips_through_json() {
    let mut view = ViewTree::new();
    view.push(ViewNode::Circle(CircleNode {
        center: (5, -3),
        radius: 2.5,
        color: RED,
    }));
    let json = serde_json::to_string(&view).expect("serialize view");
    let restored: ViewTree = serde_json::from_str(&json).expect("deserialize view");
    assert_eq!(restored, view);
}
