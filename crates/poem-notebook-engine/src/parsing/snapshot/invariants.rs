use crate::parsing::{ParsedPoem, projection::marker_content};

/// Validates pipeline output invariants.
///
/// Asserts that, for every field:
/// - Nodes are contiguous and cover the whole text
/// - Marker ids strictly increase
/// - Every fragment lies within its line
/// - Each marker's fragments rejoin to its inner content
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(parsed: &ParsedPoem<'_>) {
    for pf in &parsed.fields {
        let n = pf.source.len();

        let mut pos = 0;
        for node in &pf.parsed.nodes {
            let sp = node.full_span();
            assert_eq!(
                sp.start, pos,
                "{} node {:?} does not continue from {}",
                pf.field.key(),
                node,
                pos
            );
            assert!(
                sp.start <= sp.end && sp.end <= n,
                "{} node span out of bounds: {:?} (text len: {})",
                pf.field.key(),
                sp,
                n
            );
            pos = sp.end;
        }
        assert_eq!(pos, n, "{} nodes do not cover the text", pf.field.key());

        for pair in pf.parsed.markers.windows(2) {
            assert!(
                pair[0].id < pair[1].id,
                "marker ids not increasing: {} then {}",
                pair[0].id,
                pair[1].id
            );
        }

        for line in &pf.lines {
            for frag in &line.fragments {
                assert!(
                    frag.span.start <= frag.span.end && frag.span.end <= line.span.len(),
                    "fragment {:?} outside line {} {:?}",
                    frag.span,
                    line.index,
                    line.span
                );
            }
        }

        for marker in &pf.parsed.markers {
            assert_eq!(
                marker_content(pf.source, &pf.lines, marker.id),
                marker.inner.slice(pf.source),
                "fragments of {} do not rejoin to its content",
                marker.id
            );
        }
    }
}
