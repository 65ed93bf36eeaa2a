const HOUSES: &str = "House traits to weigh:
- Gryffindor: courage, bravery, determination, chivalry
- Slytherin: ambition, resourcefulness, cunning, leadership
- Ravenclaw: intelligence, wit, wisdom, creativity
- Hufflepuff: hard work, dedication, patience, loyalty";

pub fn dual_prompt() -> String {
    super::with_footer(&format!(
        "You are an expert in reading communication patterns and personality traits and deciding which Hogwarts house a person belongs to.
The chat below is a conversation between two people. Study how each of them writes, what they care about and how they behave, then sort each person into the house that fits them best.

{}

OUTPUT FORMAT - respond with a JSON object containing exactly these fields:
{{
  \"name_person_1\": \"name of the first person as it appears in the chat\",
  \"name_person_2\": \"name of the second person as it appears in the chat\",
  \"house_1\": \"house for person 1\",
  \"house_2\": \"house for person 2\",
  \"analysis_1\": \"why this house fits person 1\",
  \"analysis_2\": \"why this house fits person 2\",
  \"key_traits_1\": [\"traits observed in person 1\"],
  \"key_traits_2\": [\"traits observed in person 2\"]
}}",
        HOUSES
    ))
}

pub fn single_prompt() -> String {
    super::with_footer(&format!(
        "You are an expert in reading communication patterns and personality traits and deciding which Hogwarts house a person belongs to.
Study the chat below - writing style, values and behavior - and pick the house that fits the author best.

{}

OUTPUT FORMAT - respond with a JSON object containing exactly these fields:
{{
  \"house\": \"house name\",
  \"confidence\": number between 0 and 1,
  \"analysis\": \"why this house fits\",
  \"key_traits\": [\"traits that led to this conclusion\"]
}}",
        HOUSES
    ))
}
