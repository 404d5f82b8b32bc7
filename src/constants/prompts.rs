pub const STUDY_SUMMARY_PROMPT: &str = "Create a comprehensive study summary about \"{title}\". Generate educational content based on your knowledge of this topic.

IMPORTANT: DO NOT use any ** asterisks, markdown formatting, or special characters. Use only plain text.

Write a clean study summary with these sections (use plain text headers only):

Overview: Key concepts and main ideas (2-3 sentences)
Important Facts: Key dates, figures, and historical information
Key Points: Main aspects students should understand
Context: Background information and significance

Use simple bullet points with - (dash) not * (asterisk).
No bold text, no ** formatting, no markdown at all.
Keep it concise but informative (300-500 words).
Make it completely clean and readable as plain text only.";
