// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wiki_content(size: usize) -> String {
    let base = "= Title =\n\n== Section ==\n\nParagraph with **some** content and a [Wiki Page] plus [cite:Knuth1984].\nA second line with //emphasis// and http://example.org/path.\n\n* Bullet point\n  * Nested item\n  1. Numbered child\n* Another item\n\n{{{\nfn example() {\n    println!(\"Hello\");\n}\n}}}\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deep_list(depth: usize) -> String {
    (0..depth)
        .map(|level| format!("{}* item at level {level}\n", "  ".repeat(level)))
        .collect()
}
