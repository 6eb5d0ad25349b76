//! Fixed prompt set for the query and assistant endpoints

/// System instruction for answering RAG queries.
pub const RAG_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that answers questions based on the given context.";

/// Persona instruction for the direct completion endpoint.
pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are a blockchain expert chatbot. You provide accurate, technical, and insightful answers strictly related to blockchain, cryptocurrencies, smart contracts, and decentralized finance (DeFi).";

/// Build the user message for a RAG query.
///
/// The retrieved context and the question are embedded verbatim; an empty
/// context still produces the full scaffold so the model is told to answer
/// from context alone.
#[must_use]
pub fn build_rag_user_prompt(context: &str, question: &str) -> String {
    format!(
        "Context:\n{context}\n\nQuestion: {question}\n\nAnswer the question using only the provided context."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rag_prompt_embeds_context_and_question() {
        let prompt = build_rag_user_prompt("Rollups batch transactions.", "What is a rollup?");

        assert!(prompt.starts_with("Context:\nRollups batch transactions."));
        assert!(prompt.contains("Question: What is a rollup?"));
        assert!(prompt.ends_with("Answer the question using only the provided context."));
    }

    #[test]
    fn test_rag_prompt_with_empty_context() {
        let prompt = build_rag_user_prompt("", "What is a rollup?");

        // The scaffold survives even with nothing retrieved
        assert!(prompt.starts_with("Context:\n\n\nQuestion:"));
    }

    #[test]
    fn test_rag_prompt_preserves_question_verbatim() {
        let question = "  spaced  and \"quoted\"  ";
        let prompt = build_rag_user_prompt("ctx", question);

        assert!(prompt.contains(&format!("Question: {question}")));
    }
}
