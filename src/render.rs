use crate::error::RenderError;
use resvg::{tiny_skia, usvg};
use std::io::Write;

//===========================================================================//

/// A parsed SVG document that can be rasterized at any square size.
pub struct SvgRenderer {
    tree: usvg::Tree,
}

impl SvgRenderer {
    /// Parses an SVG document.  Returns an error if the data is malformed or
    /// has no drawable area.
    pub fn from_data(svg: &[u8]) -> Result<SvgRenderer, RenderError> {
        let tree = usvg::Tree::from_data(svg, &usvg::Options::default())?;
        let size = tree.size();
        if !(size.width() > 0.0 && size.height() > 0.0) {
            return Err(RenderError::EmptySource);
        }
        Ok(SvgRenderer { tree })
    }

    /// Renders the document scaled to `size` x `size` pixels and returns
    /// straight (not premultiplied) RGBA data, row-major from the top.
    pub fn render_rgba(&self, size: u32) -> Result<Vec<u8>, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidSize(size));
        }
        let mut pixmap = match tiny_skia::Pixmap::new(size, size) {
            Some(pixmap) => pixmap,
            None => return Err(RenderError::Pixmap(size)),
        };
        let source = self.tree.size();
        let transform = tiny_skia::Transform::from_scale(
            size as f32 / source.width(),
            size as f32 / source.height(),
        );
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());
        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for pixel in pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.push(color.red());
            rgba.push(color.green());
            rgba.push(color.blue());
            rgba.push(color.alpha());
        }
        Ok(rgba)
    }

    /// Renders the document at `size` x `size` pixels and encodes it as an
    /// 8-bit RGBA PNG file.
    pub fn render_png(&self, size: u32) -> Result<Vec<u8>, RenderError> {
        let rgba = self.render_rgba(size)?;
        let mut data = Vec::new();
        write_png(size, size, &rgba, &mut data)?;
        Ok(data)
    }
}

//===========================================================================//

fn write_png<W: Write>(
    width: u32,
    height: u32,
    rgba_data: &[u8],
    writer: W,
) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba_data)?;
    writer.finish()?;
    Ok(())
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::SvgRenderer;
    use crate::error::RenderError;

    const RED_SQUARE: &[u8] = b"<svg xmlns=\"http://www.w3.org/2000/svg\" \
        viewBox=\"0 0 8 8\"><rect width=\"8\" height=\"8\" fill=\"#f00\"/>\
        </svg>";

    #[test]
    fn render_solid_square() {
        let renderer = SvgRenderer::from_data(RED_SQUARE).unwrap();
        let rgba = renderer.render_rgba(4).unwrap();
        assert_eq!(rgba.len(), 4 * 4 * 4);
        for pixel in rgba.chunks(4) {
            assert_eq!(pixel, &[0xff, 0x00, 0x00, 0xff]);
        }
    }

    #[test]
    fn render_png_has_signature() {
        let renderer = SvgRenderer::from_data(RED_SQUARE).unwrap();
        let data = renderer.render_png(16).unwrap();
        assert!(data.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn render_zero_size_fails() {
        let renderer = SvgRenderer::from_data(RED_SQUARE).unwrap();
        match renderer.render_rgba(0) {
            Err(RenderError::InvalidSize(0)) => {}
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_svg_fails() {
        assert!(SvgRenderer::from_data(b"not an svg").is_err());
    }
}

//===========================================================================//
