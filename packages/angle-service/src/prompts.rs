//! Prompt text for the three generation workflows.
//!
//! Every builder returns plain strings; the reference block and the review block are passed in
//! already rendered and are embedded verbatim.

use angle_domain::{pacing::VideoLength, review::SearchHit, tiers::Tier};

const TIMESTAMP_FORMAT: &str = "CRITICAL FORMATTING REQUIREMENTS:
- Every line must follow the format: \"timestamp: content\"
- Timestamps must be in the format \"00:00-00:04\" (start time-end time)";
const TIMESTAMP_PACING: &str = "- Each timestamp should represent approximately 2-5 seconds of spoken content
- Write in a conversational, authentic voice matching the reference scripts";

/// Numbered review digest, or an empty string when there are no hits.
pub fn review_context(hits: &[SearchHit]) -> String {
	if hits.is_empty() {
		return String::new();
	}

	let mut out = String::from("\n\n=== REAL USER REVIEWS AND DISCUSSIONS (Reddit & Amazon) ===\n\n");

	for (index, hit) in hits.iter().enumerate() {
		out.push_str(&format!("{}. [{}] {}\n", index + 1, hit.source.label(), hit.title));
		out.push_str(&format!("   {}\n", hit.snippet));
		out.push_str(&format!("   Source: {}\n\n", hit.url));
	}

	out.push_str(
		"\nUse these real user reviews and discussions to understand:
- What problems users actually experience
- What conditions/symptoms they mention
- What language they use to describe their issues
- What solutions they're looking for\n\n",
	);

	out
}

pub fn angle_system_prompt(reference_context: &str, review_context: &str) -> String {
	let review_note = if review_context.is_empty() {
		""
	} else {
		"The real user reviews above show actual problems and language used by real customers. Use these insights to create angles that resonate with real user experiences."
	};

	format!(
		"You are an expert marketing analyst specializing in supplement advertising. You create compelling marketing angles for new supplement products.

{reference_context}

{review_context}

These reference scripts are examples of EXCELLENT supplement marketing scripts with proven effective angles. Study them to understand:
- What types of problem/condition combinations work well
- How successful scripts frame problems and solutions
- What story structures and hooks are most effective
- How supplements are positioned to solve problems

{review_note}

Use these scripts as inspiration and reference for creating NEW angles for a NEW product. Do NOT extract angles from these scripts - instead, create fresh, creative angles that follow the successful patterns and frameworks you see in these examples."
	)
}

pub fn angle_user_prompt(brand_name: &str, product_name: &str, level: u8, tier: &Tier) -> String {
	let count = tier.angle_count;
	let tone = tier.angle_tone;

	format!(
		"Study the reference scripts above as examples of successful supplement marketing. These scripts demonstrate proven effective angles and frameworks.

Now create NEW, CREATIVE angles for this NEW product:

Brand Name: {brand_name}
Product: {product_name}
Aggressiveness Level: {level}/10 - {tone}

INSTRUCTIONS:
1. Study the reference scripts to understand what makes effective angles:
   - What problem/condition combinations work well together?
   - How do successful scripts frame problems and solutions?
   - What story structures and hooks are most compelling?
   - How are supplements positioned to solve problems?

2. Create NEW angles for {product_name} that follow successful patterns from the reference scripts:
   - Generate problem/condition lists that would be relevant for this product
   - Create solution angles that show how {product_name} solves these problems
   - Use similar frameworks and structures that work in the reference scripts
   - Make them creative and tailored to {product_name}, not copied from the scripts

3. Format each angle as:
   - Problem list: \"condition1, condition2, condition3, condition4\" (comma-separated list of related problems/conditions)
   - Solution: Brief description (1-2 sentences) of how {product_name} solves these problems

4. Calculate likelihood scores based on:
   - How well the angle follows proven frameworks from the reference scripts
   - How compelling and relevant the problem-solution pairing is
   - How well it matches the aggressiveness level

For each angle, provide:
1. A problem/condition list in the format: \"condition1, condition2, condition3, condition4\"
2. A brief description (1-2 sentences) of HOW {product_name} SOLVES these problems

Return your response as a JSON array with this exact format:
[
  {{
    \"angle\": \"IBS, bloating, low energy, weight gain, obesity, sugar cravings. [How {product_name} solves these problems - creative solution angle].\",
    \"likelihood\": 85
  }},
  {{
    \"angle\": \"acne, joint pain, allergies, anxiety, brain fog, and frequent colds. [How {product_name} addresses these conditions - creative solution angle].\",
    \"likelihood\": 78
  }}
]

Generate exactly {count} NEW, CREATIVE angles for {product_name}. Each angle should:
- Include a comma-separated list of related conditions/problems
- Show how {product_name} solves these problems
- Follow successful patterns from the reference scripts but be original and tailored to this product
- Match the aggressiveness level specified

Only return the JSON array, no other text."
	)
}

pub fn script_system_prompt(reference_context: &str) -> String {
	format!(
		"You are a professional script writer specializing in supplement marketing scripts. You write engaging, compelling scripts in the exact style and format of the reference scripts provided.

{reference_context}

{TIMESTAMP_FORMAT}
- Use realistic timestamps that progress naturally (e.g., 00:00-00:04, 00:04-00:08, 00:08-00:12)
{TIMESTAMP_PACING}
- Include emotional hooks, personal stories, and compelling narratives
- End with a strong call-to-action mentioning the brand name

When generating scripts, match the style, tone, structure, and formatting of the reference scripts exactly."
	)
}

pub struct ScriptBrief<'a> {
	pub brand_name: &'a str,
	pub benefit: &'a str,
	pub angle: &'a str,
	pub length: VideoLength,
	pub level: u8,
	pub tier: &'a Tier,
}

pub fn script_user_prompt(brief: &ScriptBrief<'_>) -> String {
	let ScriptBrief { brand_name, benefit, angle, length, level, tier } = brief;
	let minutes = length.minutes_label();
	let seconds = length.seconds_label();
	let last_mark = length.final_timestamp();
	let tone = tier.script_tone;

	format!(
		"Create a marketing script for a supplement brand with the following details:

Brand Name: {brand_name}
Benefit: {benefit}
Angle/Story Approach: {angle}
Target Video Length: {minutes} minutes ({seconds} seconds)
Aggressiveness Level: {level}/10 - The script should be {tone}.

Generate a complete script that is approximately {minutes} minutes long when spoken. Include timestamps for every line in the format \"00:00-00:04: content\". The final timestamp should be close to {last_mark}. Make it compelling, authentic, and match the style of the reference scripts. Adjust the tone and urgency based on the aggressiveness level specified."
	)
}

pub fn variation_system_prompt(reference_context: &str) -> String {
	format!(
		"You are a professional script writer specializing in supplement marketing scripts. You create variations of existing scripts while maintaining the same style and format.

{reference_context}

{TIMESTAMP_FORMAT}
- Use realistic timestamps that progress naturally
{TIMESTAMP_PACING}
- Maintain the same overall structure and flow as the original script
- Adjust tone and urgency based on aggressiveness level

When creating variations, keep the core message and story but change the wording, examples, and specific details to create a fresh version."
	)
}

pub fn variation_user_prompt(script: &str, length: VideoLength, level: u8, tier: &Tier) -> String {
	let minutes = length.minutes_label();
	let seconds = length.seconds_label();
	let last_mark = length.final_timestamp();
	let tone = tier.script_tone;

	format!(
		"Create a variation of the following script. Keep the same core message, story structure, and brand information, but rewrite it with different wording, examples, and details.

Original Script:
{script}

Target Video Length: {minutes} minutes ({seconds} seconds)
Aggressiveness Level: {level}/10 - The variation should be {tone}.

Generate a complete variation following the exact format of the reference scripts above. Include timestamps for every line in the format \"00:00-00:04: content\". The final timestamp should be close to {last_mark}. Make it compelling, authentic, and match the style of the reference scripts while being distinctly different from the original."
	)
}
