pub mod prompts;
pub mod question_templates;
pub mod quiz_prompt;
