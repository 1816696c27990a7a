/// Drop blank lines and section annotations such as `[Chorus]`, keeping the
/// remaining lines in order.
pub fn strip_lyrics(lyrics: &str) -> String {
    lyrics
        .split('\n')
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('['))
        .collect::<Vec<_>>()
        .join("\n")
}
