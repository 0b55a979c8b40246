//! Converts the authored markdown under `content/` into HTML fragments.
//!
//! Each `content/<section>/<name>.md` becomes `$OUT_DIR/<section>_<name>.html`,
//! which the library embeds with `include_str!`.

use std::path::Path;
use std::{env, fs};

use pulldown_cmark::{Options, Parser, html};

/// Markdown documents relative to `content/`, without extension.
const DOCUMENTS: &[&str] = &[
    "home/page",
    "home/menu",
    "reference/page",
    "reference/menu",
    "tutorial/page",
    "tutorial/menu",
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_HEADING_ATTRIBUTES;

    for name in DOCUMENTS {
        let source = Path::new("content").join(format!("{name}.md"));
        let markdown = fs::read_to_string(&source)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", source.display()));

        let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut rendered, Parser::new_ext(&markdown, options));

        let target = Path::new(&out_dir).join(format!("{}.html", name.replace('/', "_")));
        fs::write(&target, rendered)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", target.display()));

        println!("cargo:rerun-if-changed={}", source.display());
    }

    println!("cargo:rerun-if-changed=content/not_found/code.txt");
    println!("cargo:rerun-if-changed=build.rs");
}
