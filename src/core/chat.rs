use crate::core::knowledge::{KnowledgeEntry, FALLBACK_ANSWER, KNOWLEDGE_BASE};

/// Rule-based responder for the awareness chat
///
/// Lowercases and trims the message, then returns the answer of the first
/// dictionary keyword contained in it. Matching is plain substring search,
/// so an earlier short keyword can shadow a later one.
#[derive(Debug, Clone, Copy)]
pub struct ChatResponder {
    entries: &'static [KnowledgeEntry],
    fallback: &'static str,
}

impl ChatResponder {
    pub fn new(entries: &'static [KnowledgeEntry], fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    pub fn with_default_knowledge() -> Self {
        Self::new(KNOWLEDGE_BASE, FALLBACK_ANSWER)
    }

    /// Entry matched by a message, if any
    pub fn find_entry(&self, message: &str) -> Option<&'static KnowledgeEntry> {
        let normalized = normalize(message);
        self.entries
            .iter()
            .find(|entry| normalized.contains(entry.keyword))
    }

    /// Answer for a message, falling back to the generic help text
    pub fn respond(&self, message: &str) -> &'static str {
        match self.find_entry(message) {
            Some(entry) => {
                tracing::debug!("Chat keyword matched: {}", entry.keyword);
                entry.answer
            }
            None => {
                tracing::debug!("Chat message matched no keyword");
                self.fallback
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::with_default_knowledge()
    }
}

fn normalize(message: &str) -> String {
    message.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    static TINY: &[KnowledgeEntry] = &[
        KnowledgeEntry { keyword: "ab", answer: "first" },
        KnowledgeEntry { keyword: "abc", answer: "second" },
        KnowledgeEntry { keyword: "xyz", answer: "third" },
    ];

    #[test]
    fn test_first_match_wins() {
        let responder = ChatResponder::new(TINY, "none");
        assert_eq!(responder.respond("abc"), "first");
        assert_eq!(responder.respond("say xyz then ab"), "first");
        assert_eq!(responder.respond("xyz"), "third");
    }

    #[test]
    fn test_fallback() {
        let responder = ChatResponder::new(TINY, "none");
        assert_eq!(responder.respond("nothing here"), "none");
        assert_eq!(responder.respond(""), "none");
        assert!(responder.find_entry("   ").is_none());
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let responder = ChatResponder::with_default_knowledge();
        let entry = responder.find_entry("  QUELS SONT LES SYMPTÔMES ?  ").unwrap();
        assert_eq!(entry.keyword, "symptômes");
    }

    #[test]
    fn test_greeting_shadows_topic() {
        let responder = ChatResponder::with_default_knowledge();
        let entry = responder.find_entry("Bonjour, parlez-moi du dépistage").unwrap();
        assert_eq!(entry.keyword, "bonjour");
    }

    #[test]
    fn test_multi_word_keywords() {
        let responder = ChatResponder::with_default_knowledge();
        assert_eq!(responder.find_entry("C'est quoi Octobre Rose").unwrap().keyword, "octobre rose");
        assert_eq!(responder.find_entry("au revoir Rosa").unwrap().keyword, "au revoir");
    }

    #[test]
    fn test_default_knowledge_size() {
        assert_eq!(ChatResponder::default().len(), 42);
    }
}
