pub const QUIZ_GENERATION_PROMPT: &str = "You are an educational AI that converts encyclopedia content into a JSON-structured quiz.

Create a quiz from the following article about \"{title}\":

{article_text}

Generate exactly {question_count} multiple choice questions with 4 options each (A, B, C, D).
Make sure the questions test understanding of key concepts from the article.
Make questions challenging but fair, covering different aspects of the topic.
The answer field must repeat the text of the correct option exactly.

Also provide a comprehensive study_summary that includes:
- Key concepts and definitions
- Important facts and figures
- Main points to remember for studying
- Context and background information

{format_instructions}";

pub const FORMAT_INSTRUCTIONS_HEADER: &str = "The output should be formatted as a JSON instance that conforms to the JSON schema below.

As an example, for the schema {\"properties\": {\"foo\": {\"title\": \"Foo\", \"description\": \"a list of strings\", \"type\": \"array\", \"items\": {\"type\": \"string\"}}}, \"required\": [\"foo\"]}
the object {\"foo\": [\"bar\", \"baz\"]} is a well-formatted instance of the schema. The object {\"properties\": {\"foo\": [\"bar\", \"baz\"]}} is not well-formatted.

Here is the output schema:";
