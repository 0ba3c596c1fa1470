//! Compiled-in condition knowledge base.
//!
//! Declaration order matters: the matcher's stable sort keeps it within a tier.

use crate::models::enums::SeverityTier;
use crate::models::Disease;

pub static DISEASES: &[Disease] = &[
    Disease {
        id: "common_cold",
        name: "Common Cold",
        symptoms: &[
            "runny nose",
            "sneezing",
            "cough",
            "sore throat",
            "mild headache",
            "congestion",
            "low fever",
        ],
        severity: SeverityTier::Low,
        description: "A viral infection of the upper respiratory tract",
        common_causes: &["Rhinovirus", "Coronavirus", "Respiratory syncytial virus"],
        recommendations: &[
            "Get plenty of rest",
            "Stay hydrated",
            "Use saline nasal drops",
            "Consider over-the-counter pain relievers",
            "Gargle with warm salt water",
        ],
        medicines: Some(&[
            "Paracetamol 500mg for fever/headache",
            "Cetirizine 10mg for runny nose",
            "Throat lozenges for sore throat",
            "Saline nasal spray for congestion",
        ]),
        emergency_symptoms: &[],
    },
    Disease {
        id: "flu",
        name: "Influenza (Flu)",
        symptoms: &[
            "high fever",
            "body aches",
            "fatigue",
            "headache",
            "cough",
            "sore throat",
            "chills",
        ],
        severity: SeverityTier::Moderate,
        description: "A viral infection that attacks the respiratory system",
        common_causes: &["Influenza A virus", "Influenza B virus"],
        recommendations: &[
            "Rest and stay home",
            "Drink plenty of fluids",
            "Consider antiviral medications if caught early",
            "Use fever reducers as needed",
            "Seek medical attention if symptoms worsen",
        ],
        medicines: Some(&[
            "Paracetamol 500mg every 6 hours for fever",
            "Ibuprofen 400mg for body aches",
            "ORS packets for hydration",
            "Cough syrup (Dextromethorphan) for dry cough",
        ]),
        emergency_symptoms: &["difficulty breathing", "chest pain", "persistent vomiting"],
    },
    Disease {
        id: "migraine",
        name: "Migraine Headache",
        symptoms: &[
            "severe headache",
            "nausea",
            "vomiting",
            "sensitivity to light",
            "sensitivity to sound",
            "visual disturbances",
        ],
        severity: SeverityTier::Moderate,
        description: "A neurological condition causing intense headaches",
        common_causes: &[
            "Stress",
            "Hormonal changes",
            "Certain foods",
            "Sleep changes",
            "Weather changes",
        ],
        recommendations: &[
            "Rest in a dark, quiet room",
            "Apply cold or warm compress",
            "Stay hydrated",
            "Consider over-the-counter pain relievers",
            "Identify and avoid triggers",
        ],
        medicines: Some(&[
            "Sumatriptan 50mg for acute migraine",
            "Paracetamol 1000mg + Domperidone 10mg",
            "Ibuprofen 600mg for pain relief",
            "Anti-nausea medication (Ondansetron 4mg)",
        ]),
        emergency_symptoms: &[
            "sudden severe headache",
            "fever with headache",
            "confusion",
            "vision loss",
        ],
    },
    Disease {
        id: "food_poisoning",
        name: "Food Poisoning",
        symptoms: &[
            "nausea",
            "vomiting",
            "diarrhea",
            "stomach cramps",
            "fever",
            "headache",
        ],
        severity: SeverityTier::Moderate,
        description: "Illness caused by consuming contaminated food or water",
        common_causes: &["Salmonella", "E. coli", "Norovirus", "Campylobacter"],
        recommendations: &[
            "Stay hydrated with clear fluids",
            "Rest and avoid solid foods initially",
            "Gradually return to bland foods",
            "Avoid dairy and fatty foods",
            "Seek medical attention if symptoms persist",
        ],
        medicines: Some(&[
            "ORS packets for rehydration",
            "Loperamide 2mg for diarrhea (if no fever)",
            "Ondansetron 4mg for vomiting",
            "Probiotics to restore gut flora",
        ]),
        emergency_symptoms: &[
            "severe dehydration",
            "high fever",
            "blood in stool",
            "severe abdominal pain",
        ],
    },
    Disease {
        id: "urinary_tract_infection",
        name: "Urinary Tract Infection (UTI)",
        symptoms: &[
            "burning urination",
            "frequent urination",
            "cloudy urine",
            "strong urine odor",
            "pelvic pain",
            "blood in urine",
        ],
        severity: SeverityTier::Moderate,
        description: "Bacterial infection of the urinary system",
        common_causes: &[
            "E. coli bacteria",
            "Sexual activity",
            "Poor hygiene",
            "Kidney stones",
        ],
        recommendations: &[
            "Drink plenty of water",
            "Urinate frequently",
            "Wipe front to back",
            "Avoid irritating feminine products",
            "See a healthcare provider for antibiotic treatment",
        ],
        medicines: Some(&[
            "Cranberry supplements for prevention",
            "Paracetamol 500mg for pain relief",
            "Potassium citrate for urinary alkalinization",
            "Antibiotics (requires prescription - see doctor)",
        ]),
        emergency_symptoms: &["high fever", "severe back pain", "nausea and vomiting"],
    },
    Disease {
        id: "pneumonia",
        name: "Pneumonia",
        symptoms: &[
            "cough with phlegm",
            "fever",
            "chills",
            "difficulty breathing",
            "chest pain",
            "fatigue",
        ],
        severity: SeverityTier::Concerning,
        description: "Infection that inflames air sacs in one or both lungs",
        common_causes: &[
            "Streptococcus pneumoniae",
            "Viral infections",
            "Mycoplasma pneumoniae",
        ],
        recommendations: &[
            "Seek medical attention promptly",
            "Take prescribed antibiotics as directed",
            "Get plenty of rest",
            "Stay hydrated",
            "Use a humidifier",
        ],
        medicines: Some(&[
            "Antibiotics (requires prescription)",
            "Paracetamol for fever and pain",
            "Expectorant cough syrup",
            "Steam inhalation for congestion",
        ]),
        emergency_symptoms: &[
            "severe difficulty breathing",
            "chest pain",
            "high fever",
            "confusion",
        ],
    },
    Disease {
        id: "heart_attack",
        name: "Heart Attack",
        symptoms: &[
            "chest pain",
            "shortness of breath",
            "nausea",
            "sweating",
            "pain in arm",
            "jaw pain",
            "dizziness",
        ],
        severity: SeverityTier::Emergency,
        description: "Blockage of blood flow to the heart muscle",
        common_causes: &["Coronary artery disease", "Blood clots", "Plaque buildup"],
        recommendations: &[
            "Call emergency services immediately (108)",
            "Chew aspirin if not allergic",
            "Stay calm and rest",
            "Do not drive yourself to hospital",
        ],
        medicines: Some(&[
            "Aspirin 300mg (chew immediately)",
            "Nitroglycerin (if prescribed)",
            "Emergency medications given by paramedics",
            "Hospital treatment required immediately",
        ]),
        emergency_symptoms: &["chest pain", "shortness of breath", "sweating", "nausea"],
    },
    Disease {
        id: "stroke",
        name: "Stroke",
        symptoms: &[
            "sudden weakness",
            "face drooping",
            "speech difficulty",
            "confusion",
            "severe headache",
            "vision problems",
        ],
        severity: SeverityTier::Emergency,
        description: "Interruption of blood supply to the brain",
        common_causes: &["Blood clots", "Bleeding in brain", "High blood pressure"],
        recommendations: &[
            "Call emergency services immediately (108)",
            "Note time symptoms started",
            "Do not give food or water",
            "Keep person calm and lying down",
        ],
        medicines: Some(&[
            "Emergency clot-busting drugs (hospital only)",
            "Blood thinners (hospital treatment)",
            "Blood pressure medications",
            "Immediate hospital intervention required",
        ]),
        emergency_symptoms: &[
            "sudden weakness",
            "face drooping",
            "speech difficulty",
            "severe headache",
        ],
    },
    Disease {
        id: "appendicitis",
        name: "Appendicitis",
        symptoms: &[
            "abdominal pain",
            "nausea",
            "vomiting",
            "fever",
            "loss of appetite",
            "pain in right side",
        ],
        severity: SeverityTier::Urgent,
        description: "Inflammation of the appendix",
        common_causes: &["Blockage of appendix", "Infection"],
        recommendations: &[
            "Seek immediate medical attention",
            "Do not eat or drink",
            "Do not take pain medications",
            "Go to emergency room",
        ],
        medicines: Some(&[
            "No self-medication recommended",
            "Antibiotics (hospital treatment)",
            "Pain management (hospital only)",
            "Surgery may be required",
        ]),
        emergency_symptoms: &["severe abdominal pain", "high fever", "vomiting"],
    },
    Disease {
        id: "asthma_attack",
        name: "Asthma Attack",
        symptoms: &[
            "difficulty breathing",
            "wheezing",
            "chest tightness",
            "coughing",
            "shortness of breath",
        ],
        severity: SeverityTier::Urgent,
        description: "Sudden worsening of asthma symptoms",
        common_causes: &["Allergens", "Exercise", "Cold air", "Stress", "Infections"],
        recommendations: &[
            "Use rescue inhaler immediately",
            "Sit upright",
            "Stay calm",
            "Seek medical attention if no improvement",
            "Call emergency services if severe",
        ],
        medicines: Some(&[
            "Salbutamol inhaler (rescue inhaler)",
            "Prednisolone tablets (if prescribed)",
            "Nebulizer treatment (hospital/clinic)",
            "Emergency bronchodilators (hospital)",
        ]),
        emergency_symptoms: &[
            "severe difficulty breathing",
            "inability to speak",
            "blue lips or face",
        ],
    },
];

/// Look up a condition by its identifier.
pub fn find_disease(id: &str) -> Option<&'static Disease> {
    DISEASES.iter().find(|d| d.id == id)
}
