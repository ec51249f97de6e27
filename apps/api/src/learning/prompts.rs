// All LLM prompt construction for the learning module.
// Cross-cutting fragments live in llm_client::prompts.

use crate::learning::models::{Depth, Level};

/// Resource medium requested from the generator. Videos only for now.
const MEDIUM: &str = "video";

/// Instruction asking for 3–5 subtopics of `topic`, calibrated to skill level
/// and depth. Colons are banned from the output because resource entries are
/// split on ": " downstream.
pub fn auto_subtopics_prompt(topic: &str, level: Level, depth: Depth) -> String {
    format!(
        "List 3-5 {depth}-level subtopics of {topic}, useful for a {level} learner. \
         Return only a JSON array of short strings, 5 words or fewer each. \
         Do not use colons inside the strings."
    )
}

/// Instruction asking for one resource link per subtopic, in the same order.
pub fn resource_links_prompt(
    topic: &str,
    level: Level,
    depth: Depth,
    subtopics: &[String],
    goal: Option<&str>,
) -> String {
    let goal = goal.unwrap_or("learn the topic");
    let subtopics = subtopics.join(", ");
    format!(
        "For each subtopic in [{subtopics}], give one {MEDIUM} link about {topic} \
         at {depth} level, useful to a {level} learner working toward: {goal}. \
         Return a JSON object with a single \"resources\" array of URL strings, \
         one per subtopic, in the same order as the subtopics. No extra colons."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_prompt_mentions_topic_and_output_format() {
        let prompt = auto_subtopics_prompt("linear algebra", Level::Beginner, Depth::Overview);
        assert!(!prompt.is_empty());
        assert!(prompt.contains("linear algebra"));
        assert!(prompt.contains("beginner"));
        assert!(prompt.contains("overview"));
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("colons"));
    }

    #[test]
    fn resource_prompt_mentions_topic_and_output_format() {
        let subs = vec!["vectors".to_string(), "matrices".to_string()];
        let prompt = resource_links_prompt(
            "linear algebra",
            Level::Advanced,
            Depth::DeepDive,
            &subs,
            Some("pass the qualifier"),
        );
        assert!(!prompt.is_empty());
        assert!(prompt.contains("linear algebra"));
        assert!(prompt.contains("advanced"));
        assert!(prompt.contains("deep-dive"));
        assert!(prompt.contains("pass the qualifier"));
        assert!(prompt.contains("\"resources\""));
    }

    #[test]
    fn resource_prompt_preserves_subtopic_order() {
        let subs = vec!["zeta".to_string(), "alpha".to_string(), "kappa".to_string()];
        let prompt = resource_links_prompt("x", Level::Beginner, Depth::Standard, &subs, None);
        let z = prompt.find("zeta").unwrap();
        let a = prompt.find("alpha").unwrap();
        let k = prompt.find("kappa").unwrap();
        assert!(z < a && a < k);
    }

    #[test]
    fn resource_prompt_without_goal_still_composes() {
        let subs = vec!["vectors".to_string()];
        let prompt = resource_links_prompt("x", Level::Beginner, Depth::Standard, &subs, None);
        assert!(prompt.contains("learn the topic"));
    }
}
