#![cfg(feature = "cli")]
//! The build script renders the man page into its own output directory.

use std::{fs, path::Path};

#[test]
fn man_page_is_rendered_into_out_dir() {
    let page = Path::new(env!("OUT_DIR")).join("man").join("endianness.1");
    let text = fs::read_to_string(&page).expect("man page should be generated");
    assert!(text.contains(".TH endianness"));
    assert!(text.contains("convert"));
}
