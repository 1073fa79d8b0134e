//! Build script to embed the bundled dictionary sample
//!
//! Reads the sample file and generates Rust source code with string constants.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const SAMPLE_PATH: &str = "data/sample1.tsv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_sample(
        SAMPLE_PATH,
        &Path::new(&out_dir).join("sample.rs"),
        "Ranked word triplets: 40 high, 40 medium and 40 rare sample points",
    );

    // Rebuild if the sample changes
    println!("cargo:rerun-if-changed={SAMPLE_PATH}");
}

fn generate_sample(input_path: &str, output_path: &Path, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let name = Path::new(input_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_else(|| panic!("Sample path has no file stem: {input_path}"));

    let records = content.lines().filter(|l| !l.trim().is_empty()).count();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary sample").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const EMBEDDED_SAMPLE: &str = {content:?};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Name of the embedded sample (file stem)").unwrap();
    writeln!(output, "pub const EMBEDDED_SAMPLE_NAME: &str = {name:?};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of records in `EMBEDDED_SAMPLE`").unwrap();
    writeln!(output, "pub const EMBEDDED_RECORD_COUNT: usize = {records};").unwrap();
}
