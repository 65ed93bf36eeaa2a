const FACTORS: &str = "Factors to consider:
- respect for boundaries
- communication style
- emotional manipulation
- controlling behavior
- consistency and honesty
- reaction to disagreement";

const SCALE: &str = "Red flag scale (0-5):
0 = no red flags, healthy communication
1 = minor concerns, possibly circumstantial
2 = some concerning patterns worth noting
3 = significant red flags present
4 = multiple serious red flags
5 = extremely concerning patterns, needs immediate attention";

pub fn dual_prompt() -> String {
    super::with_footer(&format!(
        "You are an expert in spotting behavioral red flags in conversations.
The chat below is a conversation between two people. Rate each person separately for red flags or concerning patterns.

{}

{}

OUTPUT FORMAT - respond with a JSON object containing exactly these fields:
{{
  \"name_person_1\": \"name of the first person as it appears in the chat\",
  \"name_person_2\": \"name of the second person as it appears in the chat\",
  \"red_flag_level_1\": integer between 0 and 5,
  \"red_flag_level_2\": integer between 0 and 5,
  \"analysis_1\": \"explanation of the red flags, or their absence, for person 1\",
  \"analysis_2\": \"explanation of the red flags, or their absence, for person 2\",
  \"identified_flags_1\": [\"specific red flags observed for person 1\"],
  \"identified_flags_2\": [\"specific red flags observed for person 2\"]
}}",
        FACTORS, SCALE
    ))
}

pub fn single_prompt() -> String {
    super::with_footer(&format!(
        "You are an expert in spotting behavioral red flags in conversations.
Rate the overall red flag level of the chat below.

{}

{}

OUTPUT FORMAT - respond with a JSON object containing exactly these fields:
{{
  \"red_flag_level\": integer between 0 and 5,
  \"confidence\": number between 0 and 1,
  \"analysis\": \"explanation of the red flags or their absence\",
  \"identified_flags\": [\"specific red flags observed\"]
}}",
        FACTORS, SCALE
    ))
}
