//! # Quotecard CLI
//!
//! Command-line front end for the quote card compositor.
//!
//! ## Usage
//!
//! ```bash
//! # List available styles
//! quotecard styles
//!
//! # Render a card onto a photo
//! quotecard render --image beach.jpg --quote "Stay hungry" --author "Someone" \
//!     --style noir --output card.png
//!
//! # Render from a JSON spec, overriding the size
//! quotecard render --spec card.json --size 48 --output card.jpg
//!
//! # Print the text bounding box as JSON
//! quotecard bounds --quote "Hello world" --anchor 60,60
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use quotecard::{
    Canvas, QuotecardError, RenderMode, Studio, Style,
    bounds::Point,
    config::StudioConfig,
    export,
    font::SystemFontResolver,
    logging,
    text::{TextSpecPatch, parse_color, parse_point},
};

/// Quotecard - place quotes on styled background images
#[derive(Parser, Debug)]
#[command(name = "quotecard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose a card and save it
    Render {
        /// Output file (.png or .jpg; .png is appended when missing)
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,

        /// Draw the preview drop shadow for styles that use one
        #[arg(long)]
        preview_shadow: bool,

        #[command(flatten)]
        card: CardArgs,
    },
    /// Print the text bounding box as JSON
    Bounds {
        #[command(flatten)]
        card: CardArgs,
    },
    /// List available styles
    Styles,
}

#[derive(Args, Debug)]
struct CardArgs {
    /// Background image (defaults to a blank canvas)
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// JSON text spec; flags below override its fields
    #[arg(long, value_name = "FILE")]
    spec: Option<PathBuf>,

    /// Quote text
    #[arg(long)]
    quote: Option<String>,

    /// Author name
    #[arg(long)]
    author: Option<String>,

    /// Font size in pixels (10-200)
    #[arg(long)]
    size: Option<u32>,

    /// Background style
    #[arg(long, value_enum)]
    style: Option<Style>,

    /// Text color as #rrggbb or r,g,b
    #[arg(long, value_parser = parse_color)]
    color: Option<[u8; 3]>,

    /// Top-left of the text block as X,Y (defaults to the canvas margin)
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    anchor: Option<Point>,

    /// Only use the built-in font
    #[arg(long)]
    no_system_fonts: bool,

    /// Pull the text block back inside the canvas before rendering
    #[arg(long)]
    clamp: bool,
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), QuotecardError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            output,
            preview_shadow,
            card,
        } => {
            let studio = build_studio(&card)?;
            let written = if preview_shadow {
                let preview = studio.render(RenderMode::Preview)?;
                export::save(&preview.image, &output, studio.config().jpeg_quality)?
            } else {
                studio.export(&output)?
            };
            println!("Saved {}", written.display());
        }

        Commands::Bounds { card } => {
            let studio = build_studio(&card)?;
            let composition = studio.render(RenderMode::Final)?;
            println!("{}", serde_json::to_string_pretty(&composition.bbox)?);
        }

        Commands::Styles => {
            for style in Style::ALL {
                println!("{}", style);
            }
        }
    }

    Ok(())
}

fn build_studio(args: &CardArgs) -> Result<Studio<SystemFontResolver>, QuotecardError> {
    let mut config = StudioConfig::load();
    if args.no_system_fonts {
        config.load_system_fonts = false;
    }

    let fonts = SystemFontResolver::new(&config.font_config());
    let canvas = match &args.image {
        Some(path) => Canvas::open(path)?,
        None => config.blank_canvas.to_canvas(),
    };
    let mut studio = Studio::with_canvas(config, canvas, fonts);

    let mut spec = studio.spec().clone();
    if let Some(path) = &args.spec {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str::<TextSpecPatch>(&contents)?.apply(&mut spec);
    }
    if let Some(quote) = &args.quote {
        spec.quote = quote.clone();
    }
    if let Some(author) = &args.author {
        spec.author = author.clone();
    }
    if let Some(size) = args.size {
        spec.font_size = size;
    }
    if let Some(style) = args.style {
        spec.style = style;
    }
    if let Some(color) = args.color {
        spec.color = color;
    }
    if let Some(anchor) = args.anchor {
        spec.anchor = anchor;
    }
    studio.set_spec(spec);

    if args.clamp {
        studio.clamp_anchor()?;
    }
    Ok(studio)
}
