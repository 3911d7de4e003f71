//! Host-side helper: `cargo run` compiles the WASM bundle into `static/pkg`
//! and serves the site locally so it can be exercised in a browser.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const SERVE_PORT: &str = "8080";

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("Compiling the wasm bundle …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack reported errors; see output above.");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found in PATH; serving whatever is already in static/pkg. \
                 Install it from https://rustwasm.github.io/wasm-pack/ for a fresh bundle."
            );
        }
    }

    println!("Serving the site at http://127.0.0.1:{SERVE_PORT} …");
    let _server = Command::new("python3")
        .args(["-m", "http.server", SERVE_PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Keep the server's parent process alive.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
