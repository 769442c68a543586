use anyhow::Context;
use clap::Parser;
use log::info;

use mandel_movie::{MovieArgs, MovieController, PpmFilePresenter};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = MovieArgs::parse();
    let params = args.params().context("invalid movie parameters")?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .build_global()
            .context("failed to configure the render thread pool")?;
    }
    info!("Rendering on {} threads", rayon::current_num_threads());

    let controller = MovieController::new(PpmFilePresenter::new(args.encoding.into()));
    let written = controller
        .run(&params, &args.colour_file, &args.output_folder)
        .with_context(|| format!("failed to render movie into {}", args.output_folder.display()))?;

    info!(
        "Done: {} frames in {}",
        written.len(),
        args.output_folder.display()
    );

    Ok(())
}
