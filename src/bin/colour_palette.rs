use anyhow::Context;
use clap::Parser;
use log::info;

use mandel_movie::{PaletteArgs, PaletteController};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = PaletteArgs::parse();

    let written = PaletteController::ppm()
        .run(
            &args.colour_file,
            &args.output_folder,
            args.width as usize,
            args.height_per_colour as usize,
        )
        .with_context(|| {
            format!(
                "failed to render palette from {}",
                args.colour_file.display()
            )
        })?;

    info!("Done: {} palette images", written.len());

    Ok(())
}
