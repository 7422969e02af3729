use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use favicon_kit::{monogram, GenerateError, IconContainer, SvgRenderer};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

//===========================================================================//

fn main() {
    let output_arg = || {
        Arg::with_name("output")
            .takes_value(true)
            .value_name("DIR")
            .short("o")
            .long("output")
            .help("Sets output directory (default: public)")
    };
    let svg_arg = || {
        Arg::with_name("svg")
            .takes_value(true)
            .value_name("PATH")
            .long("svg")
            .help("Renders this SVG file instead of the built-in monogram")
    };
    let matches = App::new("favicon-kit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates the site's PNG icons and ICO favicon")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Logs per-entry details"),
        )
        .subcommand(
            SubCommand::with_name("pngs")
                .about("Renders the PNG icon set")
                .arg(output_arg())
                .arg(svg_arg()),
        )
        .subcommand(
            SubCommand::with_name("ico")
                .about("Renders and packs favicon.ico")
                .arg(output_arg())
                .arg(svg_arg()),
        )
        .subcommand(
            SubCommand::with_name("all")
                .about("Renders the PNG icon set and favicon.ico")
                .arg(output_arg()),
        )
        .subcommand(
            SubCommand::with_name("list")
                .about("Lists the images in an ICO file")
                .arg(Arg::with_name("ico").required(true)),
        )
        .get_matches();

    let default_filter = if matches.is_present("verbose") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    let result = match matches.subcommand() {
        ("pngs", Some(submatches)) => run_pngs(submatches),
        ("ico", Some(submatches)) => run_ico(submatches),
        ("all", Some(submatches)) => run_all(submatches),
        ("list", Some(submatches)) => run_list(submatches),
        _ => Ok(()),
    };
    if let Err(error) = result {
        log::error!("{}", error);
        process::exit(1);
    }
}

//===========================================================================//

fn run_pngs(submatches: &ArgMatches) -> Result<(), GenerateError> {
    let renderer = load_renderer(submatches, monogram::FAVICON_SVG)?;
    favicon_kit::generate_pngs(
        &renderer,
        monogram::PNG_TARGETS,
        &output_dir(submatches),
    )?;
    Ok(())
}

fn run_ico(submatches: &ArgMatches) -> Result<(), GenerateError> {
    let renderer = load_renderer(submatches, monogram::ICO_SVG)?;
    favicon_kit::generate_ico(
        &renderer,
        monogram::ICO_SIZES,
        &output_dir(submatches),
    )?;
    Ok(())
}

fn run_all(submatches: &ArgMatches) -> Result<(), GenerateError> {
    let out_dir = output_dir(submatches);
    let renderer = SvgRenderer::from_data(monogram::FAVICON_SVG.as_bytes())?;
    favicon_kit::generate_pngs(&renderer, monogram::PNG_TARGETS, &out_dir)?;
    let renderer = SvgRenderer::from_data(monogram::ICO_SVG.as_bytes())?;
    favicon_kit::generate_ico(&renderer, monogram::ICO_SIZES, &out_dir)?;
    log::info!("All icons generated successfully!");
    Ok(())
}

fn run_list(submatches: &ArgMatches) -> Result<(), GenerateError> {
    let path = Path::new(submatches.value_of("ico").unwrap_or_default());
    let file = fs::File::open(path).map_err(|err| io_error(path, err))?;
    let container =
        IconContainer::read(file).map_err(|err| io_error(path, err))?;
    for (index, entry) in container.entries().iter().enumerate() {
        let kind = if entry.is_png() { "PNG" } else { "BMP" };
        println!(
            "{:5}: {}x{} {}, {} bpp, {} bytes",
            index,
            entry.width(),
            entry.height(),
            kind,
            entry.bits_per_pixel(),
            entry.payload().len()
        );
    }
    Ok(())
}

//===========================================================================//

fn output_dir(submatches: &ArgMatches) -> PathBuf {
    PathBuf::from(
        submatches.value_of("output").unwrap_or(monogram::DEFAULT_OUTPUT_DIR),
    )
}

fn load_renderer(
    submatches: &ArgMatches,
    builtin: &str,
) -> Result<SvgRenderer, GenerateError> {
    match submatches.value_of("svg") {
        Some(path) => {
            let data = fs::read(path).map_err(|err| io_error(path, err))?;
            Ok(SvgRenderer::from_data(&data)?)
        }
        None => Ok(SvgRenderer::from_data(builtin.as_bytes())?),
    }
}

fn io_error(path: impl AsRef<Path>, source: std::io::Error) -> GenerateError {
    GenerateError::Io { path: path.as_ref().to_path_buf(), source }
}

//===========================================================================//
