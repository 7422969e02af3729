//! The site's built-in monogram artwork and the default output sets.

//===========================================================================//

/// White "P" monogram on a black square.  Used for the PNG icon set, so it
/// carries no CSS media queries.
pub const FAVICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128">
  <rect width="128" height="128" fill="#000"/>
  <path fill="#FFF" d="M32 16h40c22.1 0 40 17.9 40 40s-17.9 40-40 40H48v16c0 4.4-3.6 8-8 8s-8-3.6-8-8V24c0-4.4 3.6-8 8-8zm16 64h24c13.3 0 24-10.7 24-24s-10.7-24-24-24H48v48z"/>
</svg>"##;

/// White "P" monogram on a rounded amber square, matching the logo.  Used
/// for the ICO favicon.
pub const ICO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128">
  <rect width="128" height="128" rx="16" ry="16" fill="#b45309"/>
  <path fill="#FFF" d="M32 16h40c22.1 0 40 17.9 40 40s-17.9 40-40 40H48v16c0 4.4-3.6 8-8 8s-8-3.6-8-8V24c0-4.4 3.6-8 8-8zm16 64h24c13.3 0 24-10.7 24-24s-10.7-24-24-24H48v48z"/>
</svg>"##;

//===========================================================================//

/// A PNG file to generate: its file name and its square size in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PngTarget {
    /// File name, relative to the output directory.
    pub name: &'static str,
    /// Width and height, in pixels.
    pub size: u32,
}

/// The PNG icon set written for the site.
pub const PNG_TARGETS: &[PngTarget] = &[
    PngTarget { name: "apple-touch-icon.png", size: 180 },
    PngTarget { name: "icon-192.png", size: 192 },
    PngTarget { name: "icon-512.png", size: 512 },
    PngTarget { name: "favicon-32.png", size: 32 },
];

/// The image sizes packed into `favicon.ico`, in directory order.
pub const ICO_SIZES: &[u32] = &[16, 32, 48];

/// File name of the generated ICO container.
pub const ICO_FILE_NAME: &str = "favicon.ico";

/// Directory the CLI writes into when no `--output` is given.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{ICO_SIZES, PNG_TARGETS};
    use crate::format::{MAX_SIZE, MIN_SIZE};

    #[test]
    fn ico_sizes_fit_in_container() {
        for &size in ICO_SIZES {
            assert!(size >= MIN_SIZE && size <= MAX_SIZE);
        }
    }

    #[test]
    fn png_targets_have_distinct_names() {
        for (index, target) in PNG_TARGETS.iter().enumerate() {
            for other in &PNG_TARGETS[(index + 1)..] {
                assert_ne!(target.name, other.name);
            }
        }
    }
}

//===========================================================================//
