use std::path::PathBuf;
use structopt::StructOpt;

use ngram_mapreduce::report::TOP_K;
use ngram_mapreduce::{corpus, counter, Report};

#[derive(StructOpt, Debug)]
#[structopt(name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"), author = env!("CARGO_PKG_AUTHORS"))]
struct Opt {
    /// Number of words per n-gram
    #[structopt(short = "n", long)]
    ngram: usize,

    #[structopt(long, default_value = "txt")]
    ext: String,

    /// Print every n-gram instead of the top ones
    #[structopt(long)]
    all: bool,

    #[structopt(name = "DIR", parse(from_os_str))]
    dir: PathBuf,
}

// Single pass over the whole corpus, for checking distributed runs against.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opt = Opt::from_args();
    anyhow::ensure!(opt.ngram > 0, "n-gram size should be at least 1");
    let files = corpus::list_files(&opt.dir, &opt.ext)?;
    let counts = counter::count_files(&files, opt.ngram).await?;

    let k = if opt.all { counts.len() } else { TOP_K };
    print!("{}", Report::top(0, &counts, k));
    Ok(())
}
