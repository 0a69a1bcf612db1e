// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use poem_notebook_engine::Poem;

#[allow(dead_code)]
pub fn generate_stanzas(stanzas: usize, marker_every: usize) -> String {
    let mut content = String::new();
    for s in 0..stanzas {
        if s > 0 {
            content.push_str("\n\n");
        }
        for line in 0..4 {
            if (s * 4 + line) % marker_every == 0 {
                content.push_str(&format!("line {line} of {{stanza {s}\nwith a}} marker\n"));
            } else {
                content.push_str(&format!("line {line} of stanza {s}\n"));
            }
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_poem(stanzas: usize) -> Poem {
    let original = generate_stanzas(stanzas, 3);
    let translation = generate_stanzas(stanzas, 5);
    let markers = original.matches('{').count() + translation.matches('{').count();
    Poem::new("Benchmark", &original, &translation)
        .with_hover_text((0..markers).map(|i| format!("alternate {i}")))
}

/// One empty marker per line, each with its own note.
#[allow(dead_code)]
pub fn generate_dense_poem(lines: usize) -> Poem {
    let original = "{}\n".repeat(lines);
    Poem::new("Dense", original.trim_end(), "x")
        .with_hover_text((0..lines).map(|i| format!("alternate {i}")))
}
