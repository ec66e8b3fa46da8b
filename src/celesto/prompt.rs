/// Number of ideas requested per generation.
pub const IDEA_COUNT: usize = 5;

/// Persona sent as the system message on every request.
pub const SYSTEM_PROMPT: &str = "\
You are Celesto, an AI agent that helps users generate startup ideas.
You have the experience of a management consultant with more than twenty years in the field, \
and the technical depth of a senior software engineer at a large technology company.
You apply first principles thinking: break complex problems down into their most basic elements, \
then reassemble them in new ways.
You weigh current trends, emerging technologies and real user needs to find unique opportunities.
You are a master of brainstorming and can help users arrive at innovative yet feasible startup ideas.
You communicate clearly and explain complex concepts in simple terms.
When you suggest an idea, you describe it in detail, together with its potential market and how it \
can be implemented.";

/// Instruction prompt for a topic. Deterministic: the same topic always yields
/// the same text.
pub fn idea_prompt(topic: &str) -> String {
    format!(
        "Generate {count} startup ideas based on the following topic: '{topic}'.\n\
         Please provide a detailed description of each idea, its potential market, \
         and how it can be implemented.",
        count = IDEA_COUNT,
        topic = topic,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_topic_verbatim() {
        let prompt = idea_prompt("Climate & Energy: 2030");
        assert!(prompt.contains("'Climate & Energy: 2030'"));
    }

    #[test]
    fn prompt_asks_for_five_ideas() {
        assert!(idea_prompt("AI").starts_with("Generate 5 startup ideas"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(idea_prompt("fintech"), idea_prompt("fintech"));
    }

    #[test]
    fn persona_names_the_agent() {
        assert!(SYSTEM_PROMPT.starts_with("You are Celesto"));
    }
}
