use crate::domain::crop_doctor::{
    entities::{DiagnosisRecord, Language, Severity},
    ports::ChatMessage,
    value_objects::DiagnoseCropInput,
};

const ENGLISH_SYSTEM_PROMPT: &str = "You are Crop Doctor, an expert agricultural scientist helping Indian farmers. \
Diagnose the crop problem the farmer describes and answer in simple English using exactly this format, one field per line:
Problem: <name of the disease or problem>
Cause: <what causes it>
Solution: <practical treatment with product names and doses where possible>
Prevention: <how to avoid it in future>
Severity: <Mild, Moderate or Severe>";

const HINDI_SYSTEM_PROMPT: &str = "आप क्रॉप डॉक्टर हैं, भारतीय किसानों की मदद करने वाले एक अनुभवी कृषि वैज्ञानिक। \
किसान द्वारा बताई गई फसल की समस्या का निदान करें और सरल हिंदी में ठीक इसी प्रारूप में उत्तर दें, हर पंक्ति में एक जानकारी:
समस्या: <रोग या समस्या का नाम>
कारण: <समस्या का कारण>
समाधान: <व्यावहारिक उपचार, संभव हो तो दवा का नाम और मात्रा सहित>
रोकथाम: <भविष्य में बचाव के उपाय>
गंभीरता: <हल्का, मध्यम या गंभीर>";

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH_SYSTEM_PROMPT,
        Language::Hindi => HINDI_SYSTEM_PROMPT,
    }
}

/// The user turn: the farmer's text, plus the photo's file name when one was
/// uploaded. Image content is not sent.
pub fn user_message(input: &DiagnoseCropInput) -> String {
    let text = input.text.trim();

    match &input.image {
        Some(image) if text.is_empty() => format!("[Image uploaded: {}]", image.file_name),
        Some(image) => format!("{}\n\n[Image uploaded: {}]", text, image.file_name),
        None => text.to_string(),
    }
}

pub fn build_messages(input: &DiagnoseCropInput, language: Language) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt(language)),
        ChatMessage::user(user_message(input)),
    ]
}

pub const MOCK_RAW_RESPONSE: &str =
    "Mock response: no chat API key is configured, showing an example diagnosis";

pub const FALLBACK_RAW_RESPONSE: &str =
    "Symptom-based diagnosis: the AI service is unavailable, matched on keywords in the description";

/// Example answer served when no chat API key is configured.
pub fn mock_diagnosis() -> DiagnosisRecord {
    DiagnosisRecord::new(
        "Rice Blast (Fungal Disease)",
        "Caused by the fungus Magnaporthe oryzae. It spreads quickly in humid weather, with heavy dew and excess nitrogen fertilizer.",
        "Spray Tricyclazole 75% WP (0.6 g per litre of water) or Carbendazim 50% WP (1 g per litre). Repeat after 10-15 days if symptoms persist.",
        "Use resistant varieties, avoid excess nitrogen, keep proper plant spacing, and burn infected crop residue after harvest.",
        Severity::Moderate,
    )
}
