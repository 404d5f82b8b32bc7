//! Question stems for the deterministic generator. `{title}` is replaced with the article title.

pub const GENERIC_QUESTION_TEMPLATES: [&str; 15] = [
    "What is a key characteristic of {title}?",
    "According to the article, {title} is primarily known for what?",
    "Which statement best describes {title}?",
    "What important aspect of {title} is mentioned?",
    "How is {title} typically defined or characterized?",
    "What significant feature of {title} does the article highlight?",
    "Which of the following is associated with {title}?",
    "What notable information about {title} is provided?",
    "According to the content, {title} can be described as what?",
    "What key point about {title} is emphasized in the article?",
    "What fundamental principle underlies {title}?",
    "Which aspect makes {title} particularly important?",
    "How does {title} relate to its field of study?",
    "What distinguishes {title} from similar concepts?",
    "What practical application of {title} is discussed?",
];

pub const DESCRIPTIVE_QUESTION: &str = "According to the article, what is true about {title}?";
pub const USAGE_QUESTION: &str = "How is {title} typically used or applied?";
pub const HISTORICAL_QUESTION: &str =
    "Regarding the development of {title}, what does the article mention?";

pub const DESCRIPTIVE_KEYWORDS: [&str; 4] = ["is", "was", "are", "were"];
pub const USAGE_KEYWORDS: [&str; 3] = ["used", "apply", "application"];
pub const HISTORICAL_KEYWORDS: [&str; 3] = ["develop", "create", "invent"];

/// Replacements for a distractor that collides with an earlier option.
pub const SPARE_DISTRACTORS: [&str; 4] = [
    "It is unrelated to {title}",
    "It contradicts the commonly accepted view of {title}",
    "It describes a minor historical footnote about {title}",
    "It was disproven in early studies of {title}",
];

pub fn fill_title(template: &str, title: &str) -> String {
    template.replace("{title}", title)
}
