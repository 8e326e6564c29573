use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "pxl2000", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a sequence of images through one filter instance, one image per frame.
    Apply(ApplyArgs),
    /// Print the default effect parameters as JSON.
    Params,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input images, in frame order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory receiving `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// JSON file overriding effect parameters.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Process rows on a rayon thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Rows per partition (parallel mode only).
    #[arg(long)]
    rows_per_chunk: Option<usize>,

    /// Feed every input this many consecutive times (stills settle after a few frames).
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Snap the output onto the filter's advertised palette.
    #[arg(long, default_value_t = false)]
    quantize: bool,

    /// Print a sha256 of every written frame's pixels.
    #[arg(long, default_value_t = false)]
    digest: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Params => cmd_params(),
    }
}

fn cmd_params() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&pxl2000::Pxl2000Params::default())
        .context("serialize default params")?;
    println!("{json}");
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let params = match &args.params {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read params '{}'", path.display()))?;
            pxl2000::Pxl2000Params::from_json_str(&text)?
        }
        None => pxl2000::Pxl2000Params::default(),
    };
    let opts = pxl2000::FilterOpts {
        parallel: args.parallel,
        threads: args.threads,
        rows_per_chunk: args.rows_per_chunk,
    };
    let mut filter = pxl2000::Pxl2000Filter::new(params, opts)?;
    let palette = if args.quantize {
        Some(pxl2000::MonochromePalette::from_descriptor(filter.described_palette())?)
    } else {
        None
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0u64;
    for input in &args.inputs {
        let bytes =
            std::fs::read(input).with_context(|| format!("read image '{}'", input.display()))?;
        let source = pxl2000::decode_frame(&bytes)
            .with_context(|| format!("decode image '{}'", input.display()))?;

        for _ in 0..args.repeat.max(1) {
            let mut frame = source.clone();
            filter.process(&mut frame)?;
            if let Some(palette) = &palette {
                palette.quantize_frame(&mut frame);
            }

            let out_path = args.out_dir.join(format!("frame_{written:05}.png"));
            pxl2000::frame_to_rgba_image(&frame)?
                .save_with_format(&out_path, image::ImageFormat::Png)
                .with_context(|| format!("write png '{}'", out_path.display()))?;

            if args.digest {
                println!("{} {}", sha256_hex(&frame), out_path.display());
            }
            written += 1;
        }
    }

    tracing::info!(frames = written, "done");
    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn sha256_hex(frame: &pxl2000::FrameArgb32) -> String {
    let mut hasher = sha2::Sha256::new();
    for px in frame.pixels() {
        hasher.update(px.to_le_bytes());
    }
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
