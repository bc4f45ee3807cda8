use clap::Parser;
use std::path::PathBuf;
use widescreen::imaging::{ConversionRequest, Quality, ResizeMethod, codec, convert_file};
use widescreen::{batch, output};

#[derive(Parser)]
#[command(name = "widescreen")]
#[command(about = "Convert images to a 16:9 aspect ratio with high quality")]
#[command(long_about = "\
Convert images to a 16:9 aspect ratio with high quality

Three methods are available:

  crop     cut a centered 16:9 region out of the source (no resampling,
           highest quality; default)
  fit      letterbox/pillarbox the full source onto a black 16:9 canvas
  stretch  resample to 16:9 without preserving the content's aspect

Supported formats, by file extension: jpg, jpeg, png, bmp, tiff, webp.

Single file:
  widescreen photo.jpg                      # writes photo_16_9.jpg
  widescreen photo.jpg -o wide.png -m fit

Directory:
  widescreen photos/ -b -o wide/            # mirrors photos/ under wide/")]
#[command(version)]
struct Cli {
    /// Input image file, or directory when --batch is set
    input: PathBuf,

    /// Output file, or directory when --batch is set
    /// (defaults: <stem>_16_9.<ext> next to the input, or output_16_9/)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Resize method: crop (default), fit (letterbox), or stretch
    #[arg(short, long, default_value = "crop")]
    method: ResizeMethod,

    /// Output quality for lossy formats (1-100)
    #[arg(short, long, default_value_t = 95, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Process all images in the input directory
    #[arg(short, long)]
    batch: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let quality = Quality::new(cli.quality);

    if cli.batch {
        let output_root = cli
            .output
            .unwrap_or_else(|| PathBuf::from("output_16_9"));

        let files = batch::discover_images(&cli.input)?;
        println!("Found {} images to process\n", files.len());

        let summary = batch::convert_files(
            &cli.input,
            &output_root,
            files,
            cli.method,
            quality,
            output::print_batch_entry,
        );

        println!("{}", output::format_batch_summary(&summary));
        if summary.failed() > 0 {
            std::process::exit(1);
        }
    } else {
        let output_path = cli
            .output
            .unwrap_or_else(|| codec::default_output_path(&cli.input));

        let report = convert_file(&ConversionRequest {
            input: cli.input,
            output: output_path,
            method: cli.method,
            quality,
        })?;
        output::print_report(&report);
    }

    Ok(())
}
