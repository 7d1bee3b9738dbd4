//! Synthetic corpus generation.
//!
//! This module synthesizes fake social-media posts about a topic by
//! drawing uniform-random (with replacement) from a fixed pool of
//! hand-authored templates. The pool is split into three equal groups
//! intended to read positive, negative, or neutral, but the intended
//! tone is never surfaced downstream: the classifier re-derives
//! sentiment from the text alone, and the two may disagree.

use crate::models::TextItem;
use rand::Rng;
use tracing::debug;

/// Placeholder interpolated with the topic in every template.
const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Templates intended to read as positive.
const POSITIVE_TEMPLATES: &[&str] = &[
    "I absolutely love {topic}! Best thing ever! 😍",
    "{topic} makes my day so much better! ❤️",
    "Just had amazing {topic}. So happy right now! 🎉",
    "{topic} is the best! Everyone should try it 👍",
    "Having {topic} with friends. Life is good! 😊",
    "Can't get enough of {topic}! It's incredible 🌟",
    "{topic} always puts me in a great mood! 😄",
];

/// Templates intended to read as negative.
const NEGATIVE_TEMPLATES: &[&str] = &[
    "Really disappointed with {topic}. Not good at all 😞",
    "{topic} is overrated. Don't understand the hype 👎",
    "Had terrible {topic} today. Waste of money 💸",
    "Why do people like {topic}? It's awful 😤",
    "{topic} gave me a headache. Never again! 😣",
    "Worst {topic} experience ever. So frustrated 😠",
    "{topic} is not worth it. Very disappointing 😔",
];

/// Templates intended to read as neutral.
const NEUTRAL_TEMPLATES: &[&str] = &[
    "Just saw some {topic}. It exists, I guess 🤷",
    "Meeting friends for {topic} later today",
    "Store has {topic} on sale this week",
    "My sister likes {topic} but I'm not sure",
    "Reading about {topic} for my homework assignment",
    "{topic} is available in many different varieties",
    "Some people prefer {topic}, others don't. That's normal",
];

/// The fixed pool of post templates.
#[derive(Debug, Clone)]
pub struct TemplatePool {
    templates: Vec<&'static str>,
}

impl Default for TemplatePool {
    fn default() -> Self {
        let templates = POSITIVE_TEMPLATES
            .iter()
            .chain(NEGATIVE_TEMPLATES)
            .chain(NEUTRAL_TEMPLATES)
            .copied()
            .collect();
        Self { templates }
    }
}

impl TemplatePool {
    /// Number of templates in the combined pool.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the pool is empty.
    #[allow(dead_code)] // Companion to len()
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render the template at `index` with the topic interpolated.
    fn render(&self, index: usize, topic: &str) -> String {
        self.templates[index].replace(TOPIC_PLACEHOLDER, topic)
    }
}

/// Generates synthetic posts from an injected random source.
///
/// Output is deterministic for a given RNG state, so callers that need
/// reproducible corpora seed the RNG themselves.
pub struct CorpusProducer<R: Rng> {
    rng: R,
    pool: TemplatePool,
}

impl<R: Rng> CorpusProducer<R> {
    /// Create a producer over the default template pool.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            pool: TemplatePool::default(),
        }
    }

    /// Generate exactly `count` posts about `topic`.
    ///
    /// Selection is uniform over the combined pool, not stratified by
    /// intended tone. `count == 0` yields an empty corpus.
    pub fn generate(&mut self, topic: &str, count: usize) -> Vec<TextItem> {
        debug!("Generating {} posts about '{}'", count, topic);

        (0..count)
            .map(|_| {
                let index = self.rng.random_range(0..self.pool.len());
                TextItem::new(self.pool.render(index, topic), topic)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_producer(seed: u64) -> CorpusProducer<StdRng> {
        CorpusProducer::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_pool_has_three_equal_groups() {
        let pool = TemplatePool::default();
        assert_eq!(POSITIVE_TEMPLATES.len(), NEGATIVE_TEMPLATES.len());
        assert_eq!(NEGATIVE_TEMPLATES.len(), NEUTRAL_TEMPLATES.len());
        assert_eq!(pool.len(), POSITIVE_TEMPLATES.len() * 3);
    }

    #[test]
    fn test_every_template_interpolates_topic() {
        let pool = TemplatePool::default();
        for template in &pool.templates {
            assert!(
                template.contains(TOPIC_PLACEHOLDER),
                "template missing placeholder: {}",
                template
            );
        }
    }

    #[test]
    fn test_generate_exact_count() {
        let mut producer = seeded_producer(42);
        let items = producer.generate("pizza", 50);
        assert_eq!(items.len(), 50);
    }

    #[test]
    fn test_generate_zero_count_is_empty() {
        let mut producer = seeded_producer(42);
        let items = producer.generate("pizza", 0);
        assert!(items.is_empty());
    }

    #[test]
    fn test_every_post_contains_topic() {
        let mut producer = seeded_producer(7);
        let items = producer.generate("bubble tea", 30);
        for item in &items {
            assert!(item.text.contains("bubble tea"), "post: {}", item.text);
            assert_eq!(item.topic, "bubble tea");
        }
    }

    #[test]
    fn test_same_seed_same_corpus() {
        let a = seeded_producer(123).generate("coffee", 25);
        let b = seeded_producer(123).generate("coffee", 25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let a = seeded_producer(1).generate("coffee", 25);
        let b = seeded_producer(2).generate("coffee", 25);
        // 21^25 possible draws; identical sequences would be astonishing.
        assert_ne!(a, b);
    }
}
