//! Sample Capture Pipeline - Main Entry Point

use capture::{init_logging, run_pipeline, PipelineSettings};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Sample Capture Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = PipelineSettings::load()?;
    run_pipeline(&settings)?;

    Ok(())
}
