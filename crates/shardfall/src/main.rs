use anyhow::Result;

use shardfall::{Config, ShardfallApp};
use shardfall_engine::device::GpuInit;
use shardfall_engine::logging::init_logging;
use shardfall_engine::window::Runtime;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(config.logging.clone());
    config.log_summary();

    let app = ShardfallApp::new(&config);
    Runtime::run(config.runtime_config(), GpuInit::default(), app)
}
