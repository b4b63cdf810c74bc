//! Symptom keyword matching used when the chat API cannot be reached.

use crate::domain::crop_doctor::entities::{DiagnosisRecord, Language, Severity};

struct CannedText {
    cause: &'static str,
    solution: &'static str,
    prevention: &'static str,
}

struct KeywordGroup {
    english_keywords: &'static [&'static str],
    hindi_keywords: &'static [&'static str],
    problem: &'static str,
    severity: Severity,
    english: CannedText,
    hindi: CannedText,
}

impl KeywordGroup {
    fn matches(&self, lowered: &str, language: Language) -> bool {
        let english = self.english_keywords.iter().any(|k| lowered.contains(k));
        match language {
            Language::English => english,
            Language::Hindi => english || self.hindi_keywords.iter().any(|k| lowered.contains(k)),
        }
    }

    fn record(&self, language: Language) -> DiagnosisRecord {
        let text = match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
        };

        DiagnosisRecord::new(
            self.problem,
            text.cause,
            text.solution,
            text.prevention,
            self.severity,
        )
    }
}

const KEYWORD_GROUPS: [KeywordGroup; 5] = [
    KeywordGroup {
        english_keywords: &["brown", "red", "spot"],
        hindi_keywords: &["भूरा", "भूरे", "लाल", "धब्बा", "धब्बे"],
        problem: "Leaf Spot Disease / Blight",
        severity: Severity::Moderate,
        english: CannedText {
            cause: "Fungal or bacterial infection, usually favoured by high humidity and water standing on the leaves.",
            solution: "Remove and destroy affected leaves. Spray a copper-based fungicide or Mancozeb (2 g per litre of water) every 7-10 days.",
            prevention: "Keep spacing between plants for air flow, water at the base instead of over the leaves, and rotate crops every season.",
        },
        hindi: CannedText {
            cause: "फफूंद या जीवाणु संक्रमण, जो अधिक नमी और पत्तियों पर पानी रुकने से बढ़ता है।",
            solution: "प्रभावित पत्तियों को हटाकर नष्ट करें। कॉपर आधारित फफूंदनाशक या मैनकोज़ेब (2 ग्राम प्रति लीटर पानी) का हर 7-10 दिन में छिड़काव करें।",
            prevention: "पौधों के बीच हवा के लिए दूरी रखें, पत्तियों की बजाय जड़ों में पानी दें और हर मौसम फसल चक्र अपनाएं।",
        },
    },
    KeywordGroup {
        english_keywords: &["yellow", "wilt", "droop"],
        hindi_keywords: &["पीला", "पीले", "पीली", "मुरझा", "झुक"],
        problem: "Nutritional Deficiency / Wilting",
        severity: Severity::Moderate,
        english: CannedText {
            cause: "Shortage of nitrogen or other nutrients, irregular watering, or early root damage.",
            solution: "Apply a balanced NPK fertilizer or urea as per soil test results, and keep soil moisture steady.",
            prevention: "Test the soil before sowing, add organic compost, and follow a regular irrigation schedule.",
        },
        hindi: CannedText {
            cause: "नाइट्रोजन या अन्य पोषक तत्वों की कमी, अनियमित सिंचाई या जड़ों को शुरुआती नुकसान।",
            solution: "मिट्टी जांच के अनुसार संतुलित NPK खाद या यूरिया डालें और मिट्टी की नमी बनाए रखें।",
            prevention: "बुवाई से पहले मिट्टी की जांच कराएं, जैविक खाद मिलाएं और नियमित सिंचाई करें।",
        },
    },
    KeywordGroup {
        english_keywords: &["white", "powder", "mildew"],
        hindi_keywords: &["सफेद", "सफ़ेद", "पाउडर", "चूर्ण"],
        problem: "Powdery Mildew",
        severity: Severity::Mild,
        english: CannedText {
            cause: "Fungal infection that spreads in warm, dry days followed by cool, humid nights.",
            solution: "Spray wettable sulphur (2-3 g per litre) or a neem oil solution on both sides of the leaves.",
            prevention: "Avoid dense planting, remove infected plant debris, and grow resistant varieties where available.",
        },
        hindi: CannedText {
            cause: "फफूंद संक्रमण जो गर्म सूखे दिनों और ठंडी नम रातों में फैलता है।",
            solution: "पत्तियों के दोनों ओर घुलनशील गंधक (2-3 ग्राम प्रति लीटर) या नीम तेल का छिड़काव करें।",
            prevention: "घनी बुवाई से बचें, संक्रमित अवशेष हटाएं और उपलब्ध हो तो रोग प्रतिरोधी किस्में लगाएं।",
        },
    },
    KeywordGroup {
        english_keywords: &["hole", "worm", "insect", "borer"],
        hindi_keywords: &["छेद", "कीड़", "कीट", "इल्ली", "बेधक"],
        problem: "Insect Pest Infestation",
        severity: Severity::Moderate,
        english: CannedText {
            cause: "Chewing or boring insects such as caterpillars, stem borers or beetles feeding on the crop.",
            solution: "Spray neem oil (5 ml per litre) for early attacks; for heavy infestation use a recommended insecticide such as Chlorantraniliprole.",
            prevention: "Install pheromone or light traps, remove affected plant parts early, and encourage natural predators.",
        },
        hindi: CannedText {
            cause: "इल्ली, तना छेदक या भृंग जैसे कीट फसल को खा रहे हैं।",
            solution: "शुरुआती हमले में नीम तेल (5 मिली प्रति लीटर) छिड़कें; अधिक प्रकोप में क्लोरेंट्रानिलिप्रोल जैसे अनुशंसित कीटनाशक का प्रयोग करें।",
            prevention: "फेरोमोन या प्रकाश जाल लगाएं, प्रभावित भाग जल्दी हटाएं और मित्र कीटों को बढ़ावा दें।",
        },
    },
    KeywordGroup {
        english_keywords: &["rot", "stem", "decay"],
        hindi_keywords: &["सड़", "तना", "गल"],
        problem: "Stem / Root Rot",
        severity: Severity::Severe,
        english: CannedText {
            cause: "Soil-borne fungi such as Pythium or Fusarium, made worse by waterlogging and poor drainage.",
            solution: "Remove badly affected plants, improve drainage, and drench the soil around the roots with Carbendazim (1 g per litre) or Trichoderma.",
            prevention: "Avoid over-irrigation, treat seeds with Trichoderma before sowing, and use raised beds in heavy soils.",
        },
        hindi: CannedText {
            cause: "पाइथियम या फ्यूजेरियम जैसे मिट्टी जनित फफूंद, जो जलभराव और खराब जल निकासी से बढ़ते हैं।",
            solution: "अधिक प्रभावित पौधों को हटा दें, जल निकासी सुधारें और जड़ों के पास कार्बेन्डाजिम (1 ग्राम प्रति लीटर) या ट्राइकोडर्मा डालें।",
            prevention: "अधिक सिंचाई से बचें, बुवाई से पहले बीज को ट्राइकोडर्मा से उपचारित करें और भारी मिट्टी में ऊंची क्यारियां बनाएं।",
        },
    },
];

const UNKNOWN_PROBLEM: &str = "Unknown crop disease";

const UNKNOWN_ENGLISH: CannedText = CannedText {
    cause: "The symptoms described are not enough to identify the disease.",
    solution: "Consult your local Krishi Vigyan Kendra or agriculture officer with a sample of the affected plant.",
    prevention: "Inspect the crop regularly, keep the field clean, and use certified seeds.",
};

const UNKNOWN_HINDI: CannedText = CannedText {
    cause: "बताए गए लक्षणों से रोग की पहचान नहीं हो सकी।",
    solution: "प्रभावित पौधे का नमूना लेकर नजदीकी कृषि विज्ञान केंद्र या कृषि अधिकारी से संपर्क करें।",
    prevention: "फसल की नियमित जांच करें, खेत साफ रखें और प्रमाणित बीजों का उपयोग करें।",
};

/// Picks the first keyword group found in `text`.
pub fn select_by_keywords(text: &str, language: Language) -> DiagnosisRecord {
    let lowered = text.to_lowercase();

    if let Some(group) = KEYWORD_GROUPS
        .iter()
        .find(|group| group.matches(&lowered, language))
    {
        return group.record(language);
    }

    let text = match language {
        Language::English => &UNKNOWN_ENGLISH,
        Language::Hindi => &UNKNOWN_HINDI,
    };
    DiagnosisRecord::new(
        UNKNOWN_PROBLEM,
        text.cause,
        text.solution,
        text.prevention,
        Severity::Moderate,
    )
}
