//! Prompt text for the two backend requests.

use research_core::SourceRecord;

/// Sources asked for per request, including every "next page" request.
pub const SOURCES_PER_REQUEST: usize = 10;
/// Advisory lower bound on script length, in characters.
pub const SCRIPT_MIN_CHARS: usize = 2900;
/// Advisory upper bound on script length, in characters.
pub const SCRIPT_MAX_CHARS: usize = 5000;

pub fn source_request_prompt(topic: &str) -> String {
    format!(
        "You are a research assistant for a YouTube content creator. \
         Your task is to find {SOURCES_PER_REQUEST} highly relevant web resources for the topic: \"{topic}\". \
         For each resource, provide the full URL, a concise title, and a 2-3 sentence summary \
         explaining its relevance to the topic. Focus on providing diverse and useful sources \
         from across the web, without any language or content restrictions."
    )
}

/// Numbered `Source n (title):` blocks separated by blank lines.
pub fn enumerate_sources(sources: &[SourceRecord]) -> String {
    sources
        .iter()
        .enumerate()
        .map(|(index, source)| {
            format!("Source {} ({}):\n{}", index + 1, source.title, source.summary)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn script_request_prompt(topic: &str, sources: &[SourceRecord], language: &str) -> String {
    let source_block = enumerate_sources(sources);
    format!(
        "You are an expert YouTube scriptwriter. Your task is to synthesize the information in the \
following web source summaries into one coherent, detailed narrative for a YouTube video. \
The topic is: \"{topic}\".

Source material:
{source_block}

Instructions:
1. Write in {language}.
2. The result must be one long, flowing paragraph, without markdown or any special formatting.
3. Be direct and to the point: state what happens, who the main characters or subjects are, and where the setting or story arc takes place.
4. Give rich detail drawn from the material, but skip small talk and unnecessary introductions. Go straight to the core of the subject.
5. Keep the total length between {SCRIPT_MIN_CHARS} and {SCRIPT_MAX_CHARS} characters. If the information is thin, elaborate on the existing details to reach the minimum length.
6. Never say \"according to the sources\" or \"the article states\". Present the information as if you were the expert.
7. Output plain text only, with no JSON or markdown wrapper.

Begin your script now."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> Vec<SourceRecord> {
        vec![
            SourceRecord::new("Krakatoa", "https://a.example.com", "The 1883 eruption."),
            SourceRecord::new("Etna", "https://b.example.com", "Europe's busiest volcano."),
        ]
    }

    #[test]
    fn source_prompt_names_topic_and_count() {
        let prompt = source_request_prompt("volcanoes");
        assert!(prompt.contains("\"volcanoes\""));
        assert!(prompt.contains("find 10 highly relevant"));
        assert!(prompt.contains("without any language or content restrictions"));
    }

    #[test]
    fn sources_are_numbered_from_one() {
        assert_eq!(
            enumerate_sources(&sources()),
            "Source 1 (Krakatoa):\nThe 1883 eruption.\n\nSource 2 (Etna):\nEurope's busiest volcano."
        );
    }

    #[test]
    fn script_prompt_carries_language_and_length_bounds() {
        let prompt = script_request_prompt("volcanoes", &sources(), "Bahasa Indonesia");
        assert!(prompt.contains("Write in Bahasa Indonesia."));
        assert!(prompt.contains("between 2900 and 5000 characters"));
        assert!(prompt.contains("Source 2 (Etna):"));
        assert!(!prompt.contains("https://a.example.com"));
    }
}
