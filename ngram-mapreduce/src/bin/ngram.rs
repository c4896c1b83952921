use std::path::PathBuf;
use structopt::StructOpt;

use ngram_mapreduce::{compute, corpus, Cluster};

#[derive(StructOpt, Debug)]
#[structopt(name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"), author = env!("CARGO_PKG_AUTHORS"))]
struct Opt {
    /// Number of workers
    #[structopt(short = "t", long)]
    threads: usize,

    /// Number of words per n-gram
    #[structopt(short = "n", long)]
    ngram: usize,

    /// Only files with this extension are counted
    #[structopt(long, default_value = "txt")]
    ext: String,

    /// Print each report as a JSON line
    #[structopt(long)]
    json: bool,

    /// Directory holding the corpus
    #[structopt(name = "DIR", parse(from_os_str))]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opt = Opt::from_args();
    let files = corpus::list_files(&opt.dir, &opt.ext)?;
    if !opt.json {
        compute(opt.threads, opt.ngram, files).await?;
        return Ok(());
    }

    let cluster = Cluster {
        workers: opt.threads,
        ngram: opt.ngram,
        files,
    };
    for report in cluster.reports().await? {
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
