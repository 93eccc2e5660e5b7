/// URL markers, grouped in priority order. Within a group the earliest
/// occurrence in the input wins.
const URL_MARKERS: &[&[&str]] = &[
    &["youtube.com/watch?v=", "youtu.be/"],
    &["youtube.com/embed/"],
    &["youtube.com/v/"],
];

const VIDEO_ID_LEN: usize = 11;

/// Pull a video identifier out of a YouTube URL, or accept the input as-is
/// when it already looks like a bare identifier.
pub fn extract_video_id(input: &str) -> Option<String> {
    URL_MARKERS
        .iter()
        .find_map(|group| capture_after_markers(input, group))
        .or_else(|| is_bare_video_id(input).then(|| input.to_string()))
}

fn capture_after_markers(input: &str, markers: &[&str]) -> Option<String> {
    let mut hits: Vec<usize> = markers
        .iter()
        .flat_map(|marker| {
            input
                .match_indices(marker)
                .map(move |(idx, m)| idx + m.len())
        })
        .collect();
    hits.sort_unstable();

    hits.into_iter().find_map(|start| {
        let rest = &input[start..];
        let end = rest
            .find(|c: char| matches!(c, '&' | '\n' | '?' | '#'))
            .unwrap_or(rest.len());
        (end > 0).then(|| rest[..end].to_string())
    })
}

// Any 11-character input without a slash passes, unrelated text included.
fn is_bare_video_id(input: &str) -> bool {
    input.chars().count() == VIDEO_ID_LEN && !input.contains('/')
}
