use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10">
<rect width="20" height="10" fill="#0d1117"/>
<rect x="10" y="0" width="10" height="10" fill="#39d353"><animate attributeName="opacity" values="1;0" dur="1s"/></rect>
</svg>"##;

#[test]
fn parse_svg_rejects_garbage() {
    assert!(parse_svg("not svg").is_err());
    assert!(parse_svg(SQUARE).is_ok());
}

#[test]
fn rasterize_draws_the_first_frame() {
    let tree = parse_svg(SQUARE).unwrap();
    let img = rasterize_svg(&tree, 1.0).unwrap();
    assert_eq!(img.dimensions(), (20, 10));
    assert_eq!(img.get_pixel(2, 5).0, [0x0d, 0x11, 0x17, 255]);
    assert_eq!(img.get_pixel(15, 5).0, [0x39, 0xd3, 0x53, 255]);
}

#[test]
fn scale_multiplies_the_canvas() {
    let tree = parse_svg(SQUARE).unwrap();
    let img = rasterize_svg(&tree, 2.0).unwrap();
    assert_eq!(img.dimensions(), (40, 20));
}

#[test]
fn invalid_scales_are_rejected() {
    let tree = parse_svg(SQUARE).unwrap();
    for scale in [0.0, -1.0, f32::NAN, 10_000.0] {
        let err = rasterize_svg(&tree, scale).unwrap_err();
        assert!(matches!(err, SnakeError::Render(_)), "{scale}: {err}");
    }
}

#[test]
fn demultiply_restores_straight_alpha() {
    let mut px = vec![64, 32, 0, 128, 10, 20, 30, 255, 5, 5, 5, 0];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[5, 5, 5, 0]);
}

#[test]
fn preview_png_is_written_and_decodable() {
    let out = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("render_raster")
        .join("preview.png");
    let _ = std::fs::remove_file(&out);

    let dims = render_preview_png(SQUARE, 1.0, &out).unwrap();
    assert_eq!(dims, (20, 10));

    let decoded = image::open(&out).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (20, 10));
}
