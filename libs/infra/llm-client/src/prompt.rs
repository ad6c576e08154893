// [libs/infra/llm-client/src/prompt.rs]
//! Composicion del prompt de generacion a partir de plantilla de sistema,
//! pedido del usuario, y fragmentos recuperados (spec.md 4.8).

pub struct PromptContext<'a> {
    pub system_template: &'a str,
    pub user_request: &'a str,
    pub rag_snippets: &'a [String],
}

pub fn compose_prompt(context: &PromptContext<'_>) -> String {
    let mut prompt = String::new();
    prompt.push_str(context.system_template);
    prompt.push_str("\n\n--- USER REQUEST ---\n");
    prompt.push_str(context.user_request);

    if !context.rag_snippets.is_empty() {
        prompt.push_str("\n\n--- RETRIEVED CONTEXT ---\n");
        for (index, snippet) in context.rag_snippets.iter().enumerate() {
            prompt.push_str(&format!("[{}] {}\n", index + 1, snippet));
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_sections_in_order() {
        let context = PromptContext {
            system_template: "SYSTEM",
            user_request: "write an ERC20",
            rag_snippets: &["snippet one".to_string()],
        };
        let prompt = compose_prompt(&context);
        assert!(prompt.find("SYSTEM").unwrap() < prompt.find("write an ERC20").unwrap());
        assert!(prompt.find("write an ERC20").unwrap() < prompt.find("snippet one").unwrap());
    }

    #[test]
    fn omits_rag_section_when_empty() {
        let context = PromptContext { system_template: "SYSTEM", user_request: "req", rag_snippets: &[] };
        assert!(!compose_prompt(&context).contains("RETRIEVED CONTEXT"));
    }
}
