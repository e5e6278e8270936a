use std::{
    io::IsTerminal as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use selas_scripts::{
    Clipboard as _, ColourMode, MagickConverter, SystemClipboard, TextureConverter, ToolConfig,
    shell::listing,
};

#[derive(Parser, Debug)]
#[command(name = "selas", version, about = "Selas content pipeline utilities")]
struct Cli {
    /// Tool configuration JSON (defaults to $SELAS_CONFIG, then built-in paths).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate an MTL file into <mtl dir>/Materials/<name>.json files.
    MtlToMaterials(MtlArgs),
    /// Emit Bistro material JSON and optionally convert its textures.
    ConvertBistro(BistroArgs),
    /// Print a `cd` command for an engine directory keyword.
    Nav(NavArgs),
    /// List files like `ls -ld --color=auto`.
    Ls(LsArgs),
    /// Copy a `<unix time>ul` literal to the clipboard.
    VersionStamp(StampArgs),
}

#[derive(Parser, Debug)]
struct MtlArgs {
    /// Source MTL file, somewhere below a `Content` directory.
    mtl: PathBuf,
}

#[derive(Parser, Debug)]
struct BistroArgs {
    /// Also convert DDS textures to PNG (BC5 normal maps are not supported by ImageMagick).
    #[arg(long)]
    convert: bool,

    /// Convert with the built-in decoder instead of ImageMagick.
    #[arg(long, requires = "convert")]
    in_process: bool,
}

#[derive(Parser, Debug)]
struct NavArgs {
    /// Directory keyword (source, core, apps, scripts, content, ...).
    keyword: Option<String>,
}

#[derive(Parser, Debug)]
struct LsArgs {
    /// When to colourize names.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Files to list (defaults to the non-hidden entries of the current directory).
    files: Vec<String>,
}

#[derive(Parser, Debug)]
struct StampArgs {
    /// Print the stamp without touching the clipboard.
    #[arg(long)]
    print_only: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColourMode {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::Auto => ColourMode::Auto,
            ColorChoice::Always => ColourMode::Always,
            ColorChoice::Never => ColourMode::Never,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = || ToolConfig::load(cli.config.as_deref());
    match cli.cmd {
        Command::MtlToMaterials(args) => cmd_mtl(args),
        Command::ConvertBistro(args) => cmd_bistro(args, &config()?),
        Command::Nav(args) => cmd_nav(args, &config()?),
        Command::Ls(args) => cmd_ls(args),
        Command::VersionStamp(args) => cmd_stamp(args),
    }
}

// Diagnostics go to stderr; stdout carries `nav`/`ls` output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "selas_scripts=info,selas=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn cmd_mtl(args: MtlArgs) -> anyhow::Result<()> {
    let layout = selas_scripts::content_layout(&args.mtl)?;
    tracing::info!(prefix = %layout.texture_prefix, out = %layout.output_dir.display(), "layout");

    let materials = selas_scripts::parse_mtl_file(&args.mtl)?;
    let written =
        selas_scripts::write_material_assets(&layout.output_dir, &layout.texture_prefix, &materials)?;

    eprintln!(
        "wrote {} materials to {}",
        written.len(),
        layout.output_dir.display()
    );
    Ok(())
}

fn cmd_bistro(args: BistroArgs, config: &ToolConfig) -> anyhow::Result<()> {
    let paths = &config.bistro;
    let names = selas_scripts::gather_materials(&paths.texture_source_dir)?;
    let written = selas_scripts::create_material_assets(paths, &names)?;
    eprintln!(
        "wrote {} materials to {}",
        written.len(),
        paths.material_dest_dir.display()
    );

    if !args.convert {
        return Ok(());
    }

    let converter: Box<dyn TextureConverter> = if args.in_process {
        Box::new(selas_scripts::ImageCrateConverter)
    } else {
        let magick = MagickConverter::new(config.image_magick());
        if !magick.is_available() {
            anyhow::bail!(
                "ImageMagick not found at '{}' (set image_magick in the config or use --in-process)",
                magick.program().display()
            );
        }
        Box::new(magick)
    };

    let report = selas_scripts::convert_textures(paths, &names, converter.as_ref())?;
    eprintln!(
        "converted {} textures ({} sources missing)",
        report.converted, report.skipped
    );
    Ok(())
}

fn cmd_nav(args: NavArgs, config: &ToolConfig) -> anyhow::Result<()> {
    let engine_dir = config.engine_dir()?;
    let target =
        selas_scripts::resolve_target(&engine_dir, &config.demos_dir(), args.keyword.as_deref());
    println!("{}", selas_scripts::cd_command(&target));
    Ok(())
}

fn cmd_ls(args: LsArgs) -> anyhow::Result<()> {
    let cwd = Path::new(".");
    let names = listing::collect_targets(&args.files, cwd)?;

    let stdout = std::io::stdout();
    let term = std::env::var("TERM").ok();
    let use_colour = ColourMode::from(args.color).enabled(stdout.is_terminal(), term.as_deref());

    let mut out = stdout.lock();
    let mut err = std::io::stderr().lock();
    listing::list(cwd, &names, use_colour, &mut out, &mut err)?;
    Ok(())
}

fn cmd_stamp(args: StampArgs) -> anyhow::Result<()> {
    let stamp = selas_scripts::current_stamp();
    if args.print_only {
        println!("{stamp}");
        return Ok(());
    }

    println!("Copying {stamp} to clipboard");
    SystemClipboard::detect()
        .copy(&stamp)
        .context("copy version stamp")?;
    Ok(())
}
