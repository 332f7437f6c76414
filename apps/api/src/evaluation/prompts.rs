// All model prompt templates for the evaluation pipeline.
// Output constraints come from llm_client::prompts and are substituted at
// {output_instruction}.

/// Ideal answer prompt. Replace: {question}
pub const IDEAL_ANSWER_PROMPT_TEMPLATE: &str = r#"You are an experienced interviewer.
Write a concise, correct, high-quality answer to the following interview question,
as a strong candidate would give it. Keep it under 150 words.

QUESTION:
{question}

{output_instruction}"#;

/// Relevance prompt. Replace: {question}, {answer}, {output_instruction}
pub const RELEVANCE_PROMPT_TEMPLATE: &str = r#"Rate how relevant the candidate's answer is to the interview question.
Judge topical alignment only, not correctness or quality.

QUESTION:
{question}

CANDIDATE ANSWER:
{answer}

SCALE:
- 9-10: highly relevant, directly addresses the question
- 7-8: mostly relevant with minor tangents
- 5-6: somewhat relevant but misses key points
- 3-4: partially relevant, mostly off-topic
- 1-2: barely relevant
- 0: completely irrelevant or a different topic

{output_instruction}"#;

/// Content score prompt. Replace: {question}, {ideal_answer}, {answer}, {output_instruction}
pub const CONTENT_PROMPT_TEMPLATE: &str = r#"Score the candidate's answer against the reference answer for this interview question.

QUESTION:
{question}

REFERENCE ANSWER:
{ideal_answer}

CANDIDATE ANSWER:
{answer}

WEIGHTED RUBRIC:
- Accuracy (40%): is the information correct and does it address the question?
- Completeness (25%): are the key points of the reference answer covered?
- Clarity (20%): is the answer clear and well structured?
- Relevance (15%): does the answer stay on the question asked?

BANDS:
- 9-10: comprehensive, accurate, well articulated
- 7-8: mostly accurate with minor gaps
- 5-6: partially correct, missing key points
- 3-4: significant inaccuracies or gaps
- 1-2: mostly irrelevant or incorrect
- 0: completely wrong

HARD RULE: an empty, unrelated or irrelevant answer MUST score 0-2.

{output_instruction}"#;

/// Skill analysis prompt. Replace: {question}, {answer}, {media_note}, {output_instruction}
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Assess how the candidate delivered this interview answer. Score each dimension from 0 to 10.

QUESTION:
{question}

CANDIDATE ANSWER:
{answer}
{media_note}
DIMENSIONS:
1. Communication: clarity, logical flow, ability to convey ideas
2. Grammar: sentence structure, vocabulary, professional language
3. Attitude: enthusiasm, professionalism, willingness to learn
4. Soft skills: problem-solving approach, adaptability, critical thinking

BANDS: 9-10 exceptional, 7-8 good, 5-6 average, 3-4 below average, 1-2 poor, 0 absent.
If the answer ignores the question, score communication and soft skills 1-3.

{output_instruction}"#;

pub const MEDIA_NOTE: &str = "\n(An audio recording of this answer exists; the text above is its transcription.)\n";

/// Feedback prompt. Replace: {question}, {answer}, {ideal_answer}, {content_score},
/// {relevance_score}, {output_instruction}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Write constructive feedback for this interview answer.

QUESTION:
{question}

CANDIDATE ANSWER:
{answer}

REFERENCE ANSWER:
{ideal_answer}

CONTENT SCORE: {content_score}/10
RELEVANCE SCORE: {relevance_score}/10

Cover, in a short paragraph each:
1. What the candidate did well
2. What to improve
3. One concrete suggestion for a stronger answer

Be encouraging. For low scores focus on how to improve rather than what went wrong.

{output_instruction}"#;

/// Skill classification prompt. Replace: {skills}, {question}
pub const SKILL_TAG_PROMPT_TEMPLATE: &str = r#"Which one of these skills does the interview question below primarily assess?

SKILLS:
{skills}

QUESTION:
{question}

Respond with the skill name exactly as written in the list and nothing else."#;

/// Ideal answer substituted when the model cannot produce one.
pub const IDEAL_ANSWER_UNAVAILABLE: &str = "Unable to generate an ideal answer at this time.";

/// Ideal answer used by the whole-interview offline report.
pub const IDEAL_ANSWER_OFFLINE: &str = "AI analysis temporarily unavailable.";
