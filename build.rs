#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_inline_words(&outdir_path, "inline_words.rs")?;
    Ok(())
}

/// Create inline_words.rs, containing definition of constant INLINE_WORDS
///
/// INLINE_WORDS is how many words a DigitBuffer holds inline before it
/// moves to a shared heap allocation. It is also the smallest heap capacity.
fn write_inline_words(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let inline_words = env::var("RUST_TWOS_BIGINT_INLINE_WORDS")
        .map(|s| s.parse::<std::num::NonZeroUsize>().expect("$RUST_TWOS_BIGINT_INLINE_WORDS must be an integer > 0"))
        .map(|nz_num| nz_num.into())
        .unwrap_or(4usize);

    let inline_words_rs_path = outdir_path.join(filename);

    let inline_words = format!("const INLINE_WORDS: usize = {inline_words};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&inline_words_rs_path) {
        Ok(existing_contents) if existing_contents == inline_words => {},
        _ => {
            let mut inline_words_rs = File::create(&inline_words_rs_path)
                .expect("Could not create inline_words.rs");
            write!(inline_words_rs, "{inline_words}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", inline_words_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_TWOS_BIGINT_INLINE_WORDS");

    Ok(())
}
