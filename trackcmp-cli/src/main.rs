mod cli;
mod handlers;

use anyhow::Result;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "trackcmp";
}

fn main() -> Result<()> {
    let app = cli::build_compare_cli();
    let matches = app.get_matches();

    handlers::run_compare(&matches)
}
