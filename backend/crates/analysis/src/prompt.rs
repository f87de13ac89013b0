/// Render the bias-detection instruction around `text`.
///
/// The text is embedded verbatim; nothing is escaped.
pub fn build_prompt(text: &str) -> String {
    format!(
        "You are a bias detection expert. Analyze the following text for biased or loaded language.\n\
         \n\
         IMPORTANT: Return ONLY a valid JSON array. Do not include any text before or after the JSON.\n\
         \n\
         If you find biased language, return JSON in this exact format:\n\
         [\n\
         \x20 {{\n\
         \x20   \"text\": \"problematic words or phrase\",\n\
         \x20   \"severity\": 0.5,\n\
         \x20   \"type\": \"political\",\n\
         \x20   \"reason\": \"explanation\",\n\
         \x20   \"suggestion\": \"neutral version\"\n\
         \x20 }}\n\
         ]\n\
         \n\
         If no bias is found, return: []\n\
         \n\
         Rules:\n\
         - Extract the exact problematic words or phrases from the original text, including any surrounding punctuation like quotation marks, apostrophes, parentheses, etc.\n\
         - Include the complete biased expression as it appears in the text\n\
         - severity: 0.0 (no bias) to 1.0 (strong bias)\n\
         - type: one of \"political\", \"emotional\", \"framing\", \"assumption\", \"loaded language\"\n\
         - Be conservative - only flag obvious bias\n\
         \n\
         Text to analyze:\n\
         {text}\n\
         \n\
         Return only JSON:"
    )
}
