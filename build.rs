use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::error::Error;
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT: &str = "assets/dist/movieweb.css";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all("assets/dist")?;

    // Resolve @import chain from the entry stylesheet
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("failed to bundle {}: {}", ENTRY, e))?;

    stylesheet.minify(MinifyOptions::default())?;

    let css = stylesheet.to_css(PrinterOptions {
        minify: true,
        ..Default::default()
    })?;

    fs::write(OUTPUT, css.code)?;
    Ok(())
}
