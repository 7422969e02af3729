use crate::encoder::encode;
use crate::entry::ImageEntry;
use crate::error::GenerateError;
use crate::monogram::{PngTarget, ICO_FILE_NAME};
use crate::render::SvgRenderer;
use std::fs;
use std::path::{Path, PathBuf};

//===========================================================================//

/// Renders each target as a PNG file in `out_dir`, creating the directory if
/// needed.  Stops at the first failure.  Returns the paths written.
pub fn generate_pngs(
    renderer: &SvgRenderer,
    targets: &[PngTarget],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    create_out_dir(out_dir)?;
    let mut written = Vec::with_capacity(targets.len());
    for target in targets {
        let data = renderer.render_png(target.size)?;
        let path = out_dir.join(target.name);
        fs::write(&path, &data).map_err(|err| GenerateError::io(&path, err))?;
        log::info!(
            "Generated {} ({}x{})",
            target.name,
            target.size,
            target.size
        );
        written.push(path);
    }
    Ok(written)
}

/// Renders the document at each size and packs the results, in order, into
/// `out_dir/favicon.ico`.  Every image is rendered and the whole container
/// encoded before the file is created, so a failed run leaves no partial
/// container behind.
pub fn generate_ico(
    renderer: &SvgRenderer,
    sizes: &[u32],
    out_dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let mut entries = Vec::with_capacity(sizes.len());
    for &size in sizes {
        entries.push(ImageEntry::new(size, renderer.render_png(size)?));
    }
    let data = encode(&entries)?;
    create_out_dir(out_dir)?;
    let path = out_dir.join(ICO_FILE_NAME);
    fs::write(&path, &data).map_err(|err| GenerateError::io(&path, err))?;
    log::info!(
        "Generated {} ({} bytes, sizes {:?})",
        ICO_FILE_NAME,
        data.len(),
        sizes
    );
    Ok(path)
}

fn create_out_dir(out_dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(out_dir).map_err(|err| GenerateError::io(out_dir, err))
}

//===========================================================================//


//===========================================================================//
