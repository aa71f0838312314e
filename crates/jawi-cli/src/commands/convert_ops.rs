use std::io::{self, BufRead, BufWriter, Write};

use jawi_core::converter::Converter;
use jawi_core::dict::Dictionary;
use jawi_engine::JawiEngine;

use super::{die, load_config, open_dictionary, ResourcePaths};

/// Engine with the requested configuration and its dictionary loaded (the
/// empty dictionary when none is given).
pub fn build_engine(paths: &ResourcePaths<'_>) -> JawiEngine {
    let (tables, settings) = die!(load_config(paths), "Error: {}");
    let dict = match paths.dict {
        Some(path) => die!(open_dictionary(path), "Error opening dictionary: {}"),
        None => Dictionary::empty(),
    };
    let engine = JawiEngine::with_config(tables, settings);
    engine.load_with(|| Ok(dict));
    engine
}

/// Convert each TEXT argument on its own line, or stdin when none is given.
pub fn convert_cmd(texts: &[String], paths: &ResourcePaths<'_>) {
    let engine = build_engine(paths);
    if texts.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let written = die!(
            engine.with_converter(|conv| convert_stream(conv, stdin.lock(), stdout.lock())),
            "Error: {}"
        );
        die!(written, "Error converting stdin: {}");
        return;
    }
    for output in die!(engine.convert_batch(texts), "Error: {}") {
        println!("{output}");
    }
}

/// Convert `input` line by line, writing each finished line as soon as it
/// is complete.
pub fn convert_stream<R: BufRead, W: Write>(
    conv: &Converter<'_>,
    mut input: R,
    output: W,
) -> io::Result<()> {
    let mut out = BufWriter::new(output);
    let mut chunked = conv.chunked();
    let mut line = String::new();
    while input.read_line(&mut line)? > 0 {
        out.write_all(chunked.push(&line).as_bytes())?;
        line.clear();
    }
    out.write_all(chunked.finish().as_bytes())?;
    out.flush()
}

pub fn explain_cmd(text: &str, paths: &ResourcePaths<'_>, json: bool) {
    let engine = build_engine(paths);
    let trace = die!(engine.explain(text), "Error: {}");
    if json {
        let rendered = die!(serde_json::to_string_pretty(&trace), "Error: {}");
        println!("{rendered}");
        return;
    }
    for t in &trace {
        println!("{}", t.describe());
    }
    let joined: String = trace.iter().map(|t| t.output.as_str()).collect();
    println!("=> {joined}");
}
