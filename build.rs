//! Build script resolving the host byte order and generating the man page.
//!
//! Exactly one `host_order` cfg value is emitted; the library refuses to
//! compile without it.

use std::env;

#[cfg(feature = "cli")]
#[expect(dead_code, reason = "only the CLI definition is needed here")]
#[path = "src/cli.rs"]
mod cli;

#[expect(
    dead_code,
    reason = "the library exposes the whole decision table; the build only resolves"
)]
#[path = "src/detect.rs"]
mod detect;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/detect.rs");
    for var in detect::Signals::watched_vars() {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo::rustc-check-cfg=cfg(host_order, values(\"little\", \"big\"))");
    println!(
        "cargo::rustc-check-cfg=cfg(host_order_rule, values(\"builtin\", \"byte-order-macros\", \
         \"architecture\", \"override\"))"
    );

    let signals = detect::Signals::from_lookup(|name| env::var(name).ok());
    let resolution = match detect::resolve(&signals) {
        Ok(resolution) => resolution,
        Err(err) => {
            eprintln!("error: {err}");
            return Err(err.into());
        }
    };
    if resolution.rule != detect::Rule::Builtin {
        println!(
            "cargo:warning=host byte order `{}` resolved by the {} rule",
            resolution.order, resolution.rule
        );
    }
    println!("cargo::rustc-cfg=host_order=\"{}\"", resolution.order);
    println!("cargo::rustc-cfg=host_order_rule=\"{}\"", resolution.rule);

    // The man page is a by-product; it must never fail the build.
    #[cfg(feature = "cli")]
    if let Err(err) = man::render() {
        println!("cargo:warning=man page not generated: {err}");
    }

    Ok(())
}

#[cfg(feature = "cli")]
mod man {
    use std::{env, fs, path::PathBuf};

    use clap::CommandFactory;
    use clap_mangen::Man;

    use crate::cli;

    /// Render `endianness.1` into `$OUT_DIR/man`.
    pub fn render() -> Result<(), Box<dyn std::error::Error>> {
        let out_dir = PathBuf::from(env::var("OUT_DIR")?).join("man");
        fs::create_dir_all(&out_dir)?;

        let cmd = cli::Cli::command();
        let man = Man::new(cmd);
        let mut buf: Vec<u8> = Vec::new();
        man.render(&mut buf)?;
        fs::write(out_dir.join("endianness.1"), buf)?;

        Ok(())
    }
}
