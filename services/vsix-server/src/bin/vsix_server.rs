//! VSIX server binary
//!
//! Lists and serves `.vsix` extension packages from a directory.
//!
//! # Examples
//!
//! ```bash
//! # Serve ./vsix_files on 0.0.0.0:8000
//! vsix-server
//!
//! # Serve a specific directory on another port
//! vsix-server serve --dir /srv/vsix --port 9000
//!
//! # Print the listing as JSON
//! vsix-server list --dir /srv/vsix --format json
//! ```

use clap::Parser;
use vsix_server::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
