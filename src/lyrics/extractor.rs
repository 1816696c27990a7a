use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{LyricsError, Result};

// Older song pages keep everything in a single div
const LYRICS_DIV: &str = "div.lyrics";
// Current pages split the text over several containers separated by <br>
const LYRICS_CONTAINERS: &str = r#"div[data-lyrics-container="true"]"#;

/// Pull the lyrics text, section headers included, out of a song page.
///
/// `url` only labels the error when no lyrics element is present.
pub fn extract_lyrics(html: &str, url: &str) -> Result<String> {
    let document = Html::parse_document(html);

    if let Some(element) = document.select(&selector(LYRICS_DIV)).next() {
        return Ok(element.text().collect());
    }

    let mut lyrics = String::new();
    let mut containers = 0;

    for container in document.select(&selector(LYRICS_CONTAINERS)) {
        containers += 1;
        push_container_text(container, &mut lyrics);
        lyrics.push('\n');
    }

    if containers == 0 {
        return Err(LyricsError::LyricsElementNotFound {
            url: url.to_string(),
        });
    }

    Ok(lyrics)
}

fn push_container_text(container: ElementRef<'_>, out: &mut String) {
    for node in container.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("lyrics selectors are valid CSS")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://genius.com/Fall-out-boy-sugar-were-goin-down-lyrics";

    #[test]
    fn test_extract_lyrics_div() {
        let html = r#"<html><body>
            <div class="header">Fall Out Boy</div>
            <div class="lyrics">
<p>[Verse 1]<br>
Am I more than you <a href="/1">bargained for</a> yet?<br>
I've been dying to tell you anything you want to hear</p>
</div>
            <div class="footer">About</div>
        </body></html>"#;

        let lyrics = extract_lyrics(html, URL).unwrap();

        assert!(lyrics.contains("[Verse 1]"));
        assert!(lyrics.contains("Am I more than you bargained for yet?"));
        assert!(lyrics.contains("I've been dying to tell you anything you want to hear"));
        assert!(!lyrics.contains("<a"));
        assert!(!lyrics.contains("Fall Out Boy"));
        assert!(!lyrics.contains("About"));
    }

    #[test]
    fn test_lyrics_class_among_others() {
        let html = r#"<div class="song_body lyrics">line one
line two</div>"#;

        assert_eq!(extract_lyrics(html, URL).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_first_lyrics_div_wins() {
        let html = r#"<div class="lyrics">first</div><div class="lyrics">second</div>"#;
        assert_eq!(extract_lyrics(html, URL).unwrap(), "first");
    }

    #[test]
    fn test_extract_lyrics_containers() {
        let html = r#"<html><body>
            <div data-lyrics-container="true">[Chorus]<br>We're going down, <a href="/a"><span>down in an earlier round</span></a><br>And sugar, we're going down swinging</div>
            <div class="ad">buy things</div>
            <div data-lyrics-container="true">[Verse 2]<br>Is this more than you bargained for yet?</div>
        </body></html>"#;

        let lyrics = extract_lyrics(html, URL).unwrap();

        assert_eq!(
            lyrics,
            "[Chorus]\nWe're going down, down in an earlier round\nAnd sugar, we're going down swinging\n[Verse 2]\nIs this more than you bargained for yet?\n"
        );
    }

    #[test]
    fn test_missing_lyrics_element() {
        let html = "<html><body><div class=\"lyric\">nope</div></body></html>";

        match extract_lyrics(html, URL) {
            Err(LyricsError::LyricsElementNotFound { url }) => assert_eq!(url, URL),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_document() {
        let err = extract_lyrics("", URL).unwrap_err();
        assert!(matches!(err, LyricsError::LyricsElementNotFound { .. }));
    }
}
