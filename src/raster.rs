use resvg::usvg;
use tiny_skia::{Pixmap, Transform};

/// Rasterize an SVG document to PNG bytes. Fully headless: fonts come
/// from the system database with generic-family fallbacks picked from
/// whatever is installed.
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, String> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("Invalid --png-scale value: {}", scale));
    }

    let mut opts = usvg::Options::default();
    {
        let fontdb = opts.fontdb_mut();
        fontdb.load_system_fonts();
        configure_font_fallbacks(fontdb);
    }

    let tree =
        usvg::Tree::from_str(svg, &opts).map_err(|e| format!("Failed to parse SVG: {}", e))?;

    let png_width = (tree.size().width() * scale).ceil() as u32;
    let png_height = (tree.size().height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(png_width, png_height).ok_or("Failed to create pixmap")?;
    let transform = Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| format!("Failed to encode PNG: {}", e))
}

fn configure_font_fallbacks(fontdb: &mut usvg::fontdb::Database) {
    let mut sans_family: Option<String> = None;
    let mut mono_family: Option<String> = None;
    let mut first_family: Option<String> = None;

    for face in fontdb.faces() {
        for (family, _) in &face.families {
            if first_family.is_none() {
                first_family = Some(family.clone());
            }
            let lower = family.to_ascii_lowercase();
            if sans_family.is_none() && lower.contains("sans") {
                sans_family = Some(family.clone());
            }
            if mono_family.is_none() && (lower.contains("mono") || lower.contains("code")) {
                mono_family = Some(family.clone());
            }
        }
    }

    if let Some(family) = sans_family.as_deref().or(first_family.as_deref()) {
        fontdb.set_sans_serif_family(family);
        fontdb.set_serif_family(family);
    }
    if let Some(family) = mono_family
        .as_deref()
        .or(sans_family.as_deref())
        .or(first_family.as_deref())
    {
        fontdb.set_monospace_family(family);
    }
}

#[cfg(test)]
mod tests {
    use super::svg_to_png;

    const SAMPLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10" width="20" height="10"><rect width="100%" height="100%" fill="#ffffff" /><rect x="2" y="2" width="6" height="6" fill="#add8e6" /></svg>"##;

    #[test]
    fn produces_png_bytes() {
        let png = svg_to_png(SAMPLE, 1.0).expect("rasterize");
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn scale_multiplies_dimensions() {
        let small = svg_to_png(SAMPLE, 1.0).expect("1x");
        let large = svg_to_png(SAMPLE, 2.0).expect("2x");
        // IHDR width is bytes 16..20 big-endian.
        let width = |png: &[u8]| u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        assert_eq!(width(&small), 20);
        assert_eq!(width(&large), 40);
    }

    #[test]
    fn rejects_bad_scale() {
        assert!(svg_to_png(SAMPLE, 0.0).is_err());
        assert!(svg_to_png(SAMPLE, f32::NAN).is_err());
    }
}
