use clap::Parser;

use crate::opts::{EngineOpts, HttpOpts};

#[derive(Parser, Debug)]
#[clap(name = "simplr", rename_all = "kebab-case")]
pub struct Cli {
    /// Tokio worker threads (optional override)
    #[arg(long, env = "SIMPLR_WORKER_THREADS")]
    pub worker_threads: Option<usize>,

    #[clap(flatten)]
    pub http: HttpOpts,

    #[clap(flatten)]
    pub engine: EngineOpts,
}

impl Cli {
    pub fn create_runtime(
        worker_threads: Option<usize>,
    ) -> anyhow::Result<tokio::runtime::Runtime> {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        if let Some(n) = worker_threads {
            builder.worker_threads(n);
        }
        builder.enable_all().build().map_err(Into::into)
    }
}
