#![forbid(unsafe_code)]

fn main() -> anyhow::Result<()> {
    curlicue_cli::trace::init_tracing();
    let args = std::env::args();
    curlicue_cli::run_with_args(args)
}
