const INDICATORS: &str = "Boomer indicators:
- outdated slang or references
- resistance to new technology
- complaints about \"kids these days\"
- heavy use of ellipsis (...)
- typing in ALL CAPS
- forwarding chain messages
- nostalgia for \"the good old days\"
- confusion about modern internet culture
- formal or overly proper texting
- misused or puzzling emojis";

const SCALE: &str = "Boomer energy scale (0-5):
0 = zero boomer energy, fully current
1 = slight boomer tendencies, mostly with the times
2 = moderate boomer vibes, occasional dated references
3 = strong boomer energy, frequent dated patterns
4 = very strong boomer presence, consistently dated
5 = maximum boomer, could be texting from 1975";

pub fn dual_prompt() -> String {
    super::with_footer(&format!(
        "You are an expert in generational communication styles and judge how much \"boomer energy\" people give off.
The chat below is a conversation between two people. Rate each person separately.

{}

{}

OUTPUT FORMAT - respond with a JSON object containing exactly these fields:
{{
  \"name_person_1\": \"name of the first person as it appears in the chat\",
  \"name_person_2\": \"name of the second person as it appears in the chat\",
  \"boomer_level_1\": integer between 0 and 5,
  \"boomer_level_2\": integer between 0 and 5,
  \"analysis_1\": \"explanation of the boomer vibes, or their absence, for person 1\",
  \"analysis_2\": \"explanation of the boomer vibes, or their absence, for person 2\",
  \"boomer_traits_1\": [\"boomer indicators observed for person 1\"],
  \"boomer_traits_2\": [\"boomer indicators observed for person 2\"]
}}",
        INDICATORS, SCALE
    ))
}

pub fn single_prompt() -> String {
    super::with_footer(&format!(
        "You are an expert in generational communication styles and judge how much \"boomer energy\" a person gives off.
Rate the author of the chat below.

{}

{}

OUTPUT FORMAT - respond with a JSON object containing exactly these fields:
{{
  \"boomer_level\": integer between 0 and 5,
  \"confidence\": number between 0 and 1,
  \"analysis\": \"explanation of the boomer vibes or their absence\",
  \"boomer_traits\": [\"boomer indicators observed\"]
}}",
        INDICATORS, SCALE
    ))
}
