use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use glyphscan::io::read_image;
use glyphscan::transform::UPSCALE_FACTOR;
use glyphscan::recog::{
    DEFAULT_ALPHABET, DEFAULT_PLACEHOLDER, DirectoryStore, RecogMethod, RecogOptions, Recognizer,
    TemplateLibrary, save_alphabet,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cut a reference alphabet image into one template image per label
    BuildLibrary {
        /// Image of the alphabet, glyphs in label order left to right
        alphabet: PathBuf,
        /// Directory the template images are written to
        dir: PathBuf,
        /// Labels in alphabet order (default: a-z, A-Z, '.', ',')
        #[arg(long)]
        labels: Option<String>,
    },
    /// Recognize the text in an image
    Recognize {
        /// Image to read
        image: PathBuf,
        /// Directory holding the template images
        #[arg(short, long)]
        library: PathBuf,
        /// Matching method: squares or outline
        #[arg(short, long, default_value = "squares")]
        method: String,
        /// Labels to load from the library (default: a-z, A-Z, '.', ',')
        #[arg(long)]
        labels: Option<String>,
        /// Character printed for glyphs that cannot be matched
        #[arg(long, default_value_t = DEFAULT_PLACEHOLDER)]
        placeholder: char,
        /// Keep short row runs as lines of their own
        #[arg(long)]
        no_merge: bool,
        /// Upscale factor applied to both the page and the templates
        #[arg(long, default_value_t = UPSCALE_FACTOR)]
        upscale_factor: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::BuildLibrary {
            alphabet,
            dir,
            labels,
        } => build_library(&alphabet, &dir, labels.as_deref()),
        Commands::Recognize {
            image,
            library,
            method,
            labels,
            placeholder,
            no_merge,
            upscale_factor,
        } => {
            // Parsed before any file is touched
            let method: RecogMethod = method.parse()?;
            let options = RecogOptions::default()
                .with_method(method)
                .with_placeholder(placeholder)
                .with_merge_small_lines(!no_merge)
                .with_upscale_factor(upscale_factor);
            recognize(&image, &library, labels.as_deref(), options)
        }
    }
}

fn label_list(labels: Option<&str>) -> Result<Vec<char>> {
    match labels {
        None => Ok(DEFAULT_ALPHABET.to_vec()),
        Some(s) => {
            let labels: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
            if labels.is_empty() {
                bail!("--labels must name at least one character");
            }
            Ok(labels)
        }
    }
}

fn build_library(alphabet: &Path, dir: &Path, labels: Option<&str>) -> Result<()> {
    let labels = label_list(labels)?;
    let image = read_image(alphabet)
        .with_context(|| format!("failed to read alphabet image {}", alphabet.display()))?;
    let mut store = DirectoryStore::new(dir);
    let saved = save_alphabet(&image, &labels, &mut store)
        .with_context(|| format!("failed to build library from {}", alphabet.display()))?;
    info!(saved, dir = %dir.display(), "template library written");
    Ok(())
}

fn recognize(
    image: &Path,
    library: &Path,
    labels: Option<&str>,
    options: RecogOptions,
) -> Result<()> {
    let labels = label_list(labels)?;
    let store = DirectoryStore::new(library);
    let library =
        TemplateLibrary::load_scaled(&store, &labels, options.method, options.upscale_factor)
            .with_context(|| format!("failed to load templates from {}", library.display()))?;
    let recognizer = Recognizer::new(Arc::new(library), options)?;

    let page =
        read_image(image).with_context(|| format!("failed to read {}", image.display()))?;
    let report = recognizer.recognize_detailed(&page)?;
    for failure in &report.failures {
        warn!(
            line = failure.line,
            glyph = failure.glyph,
            "unmatched glyph: {}",
            failure.error
        );
    }
    println!("{}", report.text());
    Ok(())
}
