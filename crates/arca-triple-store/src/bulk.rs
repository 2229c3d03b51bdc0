//! Line chunking for raw bulk uploads.
//!
//! Bulk endpoints have practical payload-size limits, so serialized dumps
//! are split into fixed-size line groups and uploaded sequentially.

/// Lines per uploaded chunk.
pub(crate) const LINES_PER_CHUNK: usize = 10_000;

/// Split text into groups of at most `lines_per_chunk` lines.
pub(crate) fn chunk_lines(content: &str, lines_per_chunk: usize) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    lines
        .chunks(lines_per_chunk)
        .map(|chunk| chunk.join("\n"))
        .collect()
}

/// A Turtle document split for chunked upload. Declarations are extracted
/// once and re-prepended to every chunk so each chunk parses on its own.
pub(crate) struct TurtleChunks {
    pub(crate) declarations: String,
    pub(crate) data_chunks: Vec<String>,
}

pub(crate) fn chunk_turtle(content: &str, lines_per_chunk: usize) -> TurtleChunks {
    let mut declarations = Vec::new();
    let mut data = Vec::new();
    for line in content.lines() {
        if line.trim_start().starts_with("@prefix") {
            declarations.push(line);
        } else {
            data.push(line);
        }
    }

    let data_chunks = data
        .chunks(lines_per_chunk)
        .map(|chunk| chunk.join("\n"))
        .collect();

    let mut declarations = declarations.join("\n");
    declarations.push('\n');

    TurtleChunks {
        declarations,
        data_chunks,
    }
}
