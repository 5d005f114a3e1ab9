//! Emergency phrase detection.
//!
//! Exact substring containment only, no fuzzy matching. Categories are
//! scanned in declaration order and the first hit wins.

use std::sync::LazyLock;

use super::fuzzy::normalize;
use super::types::{
    compile, CatalogueEntry, EmergencyDetection, EmergencyResponse, Hotline, PhraseList,
    CRISIS_LIFELINE, EMERGENCY_SERVICES, POISON_CONTROL,
};
use crate::models::enums::EmergencyCategory;

const EMERGENCY_PHRASES: &[PhraseList<EmergencyCategory>] = &[
    PhraseList {
        category: EmergencyCategory::Cardiac,
        en: &[
            "chest pain",
            "heart attack",
            "crushing chest",
            "pressure in chest",
            "tight chest",
            "squeezing chest",
            "chest discomfort",
            "pain radiating to arm",
            "pain in left arm",
            "jaw pain with chest",
            "chest pain and sweating",
            "chest and shortness of breath",
            "angina",
            "heart racing and chest pain",
        ],
        es: &[
            "dolor de pecho",
            "dolor en el pecho",
            "ataque al corazón",
            "ataque cardíaco",
            "infarto",
            "presión en el pecho",
            "dolor en el brazo izquierdo",
        ],
    },
    PhraseList {
        category: EmergencyCategory::Respiratory,
        en: &[
            "can't breathe",
            "cannot breathe",
            "difficulty breathing",
            "hard to breathe",
            "gasping for air",
            "choking",
            "blue lips",
            "blue skin",
            "cyanosis",
            "severe shortness of breath",
            "can't catch breath",
            "wheezing severely",
        ],
        es: &[
            "no puedo respirar",
            "dificultad para respirar",
            "me ahogo",
            "me estoy ahogando",
            "labios azules",
            "piel azul",
            "falta de aire severa",
        ],
    },
    PhraseList {
        category: EmergencyCategory::Neurological,
        en: &[
            "stroke",
            "face drooping",
            "one side of face numb",
            "arm weakness",
            "can't lift arm",
            "slurred speech",
            "confused speech",
            "sudden confusion",
            "trouble speaking",
            "sudden severe headache",
            "worst headache of life",
            "thunderclap headache",
            "loss of vision",
            "sudden blindness",
            "double vision sudden",
            "loss of balance",
            "sudden dizziness severe",
        ],
        es: &[
            "derrame cerebral",
            "cara caída",
            "habla arrastrada",
            "dificultad para hablar",
            "confusión repentina",
            "el peor dolor de cabeza",
            "pérdida de visión",
            "debilidad en un lado",
        ],
    },
    PhraseList {
        category: EmergencyCategory::Consciousness,
        en: &[
            "unconscious",
            "passed out",
            "unresponsive",
            "not waking up",
            "seizure",
            "convulsions",
            "altered mental status",
            "extremely confused",
            "hallucinating",
            "suicidal",
            "want to die",
            "going to hurt myself",
        ],
        es: &[
            "inconsciente",
            "se desmayó",
            "me desmayé",
            "no responde",
            "convulsión",
            "convulsiones",
            "quiero morir",
            "suicida",
            "hacerme daño",
        ],
    },
    PhraseList {
        category: EmergencyCategory::Bleeding,
        en: &[
            "severe bleeding",
            "bleeding won't stop",
            "heavy bleeding",
            "spurting blood",
            "arterial bleeding",
            "bleeding profusely",
            "severe head injury",
            "head trauma",
            "major accident",
            "severe burn",
            "amputation",
            "impalement",
        ],
        es: &[
            "sangrado abundante",
            "sangrado severo",
            "hemorragia",
            "no para de sangrar",
            "golpe fuerte en la cabeza",
            "accidente grave",
            "quemadura grave",
        ],
    },
    PhraseList {
        category: EmergencyCategory::Allergic,
        en: &[
            "anaphylaxis",
            "throat swelling",
            "tongue swelling",
            "severe allergic reaction",
            "hives and difficulty breathing",
            "throat closing",
            "can't swallow",
            "severe allergy",
        ],
        es: &[
            "anafilaxia",
            "garganta hinchada",
            "lengua hinchada",
            "se me cierra la garganta",
            "reacción alérgica grave",
            "no puedo tragar",
        ],
    },
    PhraseList {
        category: EmergencyCategory::Poisoning,
        en: &[
            "overdose",
            "took too many pills",
            "poisoning",
            "poisoned",
            "drank poison",
            "chemical exposure",
            "carbon monoxide",
            "drug overdose",
        ],
        es: &[
            "sobredosis",
            "tomé demasiadas pastillas",
            "envenenamiento",
            "envenenado",
            "envenenada",
            "bebí veneno",
            "monóxido de carbono",
        ],
    },
    PhraseList {
        category: EmergencyCategory::Pregnancy,
        en: &[
            "pregnant and severe pain",
            "pregnant and bleeding heavily",
            "miscarriage",
            "baby not moving",
            "pregnancy and chest pain",
            "eclampsia",
            "severe headache pregnant",
        ],
        es: &[
            "embarazada y sangrado",
            "embarazada con dolor fuerte",
            "aborto espontáneo",
            "el bebé no se mueve",
            "eclampsia",
        ],
    },
    PhraseList {
        category: EmergencyCategory::Acute,
        en: &[
            "excruciating pain",
            "worst pain of my life",
            "pain 10 out of 10",
            "unbearable pain",
            "ruptured",
            "burst appendix",
        ],
        es: &[
            "dolor insoportable",
            "el peor dolor de mi vida",
            "dolor 10 de 10",
            "apéndice reventado",
        ],
    },
];

static CATALOGUE: LazyLock<Vec<CatalogueEntry<EmergencyCategory>>> =
    LazyLock::new(|| compile(EMERGENCY_PHRASES));

/// Scan the text for a life-threatening phrase.
pub fn detect_emergency(text: &str) -> Option<EmergencyDetection> {
    let haystack = normalize(text);
    if haystack.is_empty() {
        return None;
    }

    CATALOGUE.iter().find_map(|entry| {
        entry
            .patterns
            .iter()
            .find(|pattern| haystack.contains(pattern.as_str()))
            .map(|pattern| EmergencyDetection {
                category: entry.category,
                matched_pattern: pattern.as_str(),
            })
    })
}

/// Hotlines to surface for a category. Emergency services always come first.
pub fn hotlines_for(category: EmergencyCategory) -> Vec<Hotline> {
    match category {
        EmergencyCategory::Poisoning => vec![EMERGENCY_SERVICES, POISON_CONTROL],
        EmergencyCategory::Consciousness => vec![EMERGENCY_SERVICES, CRISIS_LIFELINE],
        _ => vec![EMERGENCY_SERVICES],
    }
}

pub fn response_for(category: EmergencyCategory) -> &'static EmergencyResponse {
    match category {
        EmergencyCategory::Cardiac => &CARDIAC,
        EmergencyCategory::Respiratory => &RESPIRATORY,
        EmergencyCategory::Neurological => &NEUROLOGICAL,
        EmergencyCategory::Consciousness => &CONSCIOUSNESS,
        EmergencyCategory::Bleeding => &BLEEDING,
        EmergencyCategory::Allergic => &ALLERGIC,
        EmergencyCategory::Poisoning => &POISONING,
        EmergencyCategory::Pregnancy => &PREGNANCY,
        EmergencyCategory::Acute => &ACUTE,
    }
}

const CALL_911: &str = "CALL 911 IMMEDIATELY";

static CARDIAC: EmergencyResponse = EmergencyResponse {
    title: "CARDIAC EMERGENCY",
    action: CALL_911,
    instructions: &[
        "Do NOT drive yourself to the hospital",
        "Sit down and rest immediately",
        "Chew an aspirin if available (unless allergic)",
        "Stay calm and wait for paramedics",
    ],
    warning: "Heart attacks can be fatal within minutes. Every second counts.",
};

static RESPIRATORY: EmergencyResponse = EmergencyResponse {
    title: "BREATHING EMERGENCY",
    action: CALL_911,
    instructions: &[
        "Sit upright to help breathing",
        "Loosen tight clothing",
        "Use rescue inhaler if you have one",
        "Do NOT lie down",
    ],
    warning: "Severe breathing problems can be life-threatening.",
};

static NEUROLOGICAL: EmergencyResponse = EmergencyResponse {
    title: "STROKE EMERGENCY",
    action: CALL_911,
    instructions: &[
        "Note the time symptoms started (critical for treatment)",
        "Do NOT give food, drink, or medication",
        "Keep person comfortable and calm",
        "Do NOT let them drive",
    ],
    warning: "Time = Brain. Treatment within 3 hours can prevent permanent damage.",
};

static CONSCIOUSNESS: EmergencyResponse = EmergencyResponse {
    title: "CONSCIOUSNESS EMERGENCY",
    action: CALL_911,
    instructions: &[
        "If unconscious, check if breathing",
        "Turn person on their side if breathing (recovery position)",
        "Do NOT leave person alone",
        "If not breathing, start CPR if trained",
    ],
    warning: "Loss of consciousness is always a medical emergency.",
};

static BLEEDING: EmergencyResponse = EmergencyResponse {
    title: "SEVERE BLEEDING EMERGENCY",
    action: CALL_911,
    instructions: &[
        "Apply direct pressure to wound",
        "Keep person lying down",
        "Elevate injured area if possible",
        "Do NOT remove objects impaled in body",
    ],
    warning: "Severe bleeding can lead to shock and death within minutes.",
};

static ALLERGIC: EmergencyResponse = EmergencyResponse {
    title: "ALLERGIC EMERGENCY (ANAPHYLAXIS)",
    action: CALL_911,
    instructions: &[
        "Use EpiPen immediately if available",
        "Person should lie down with legs elevated",
        "Loosen tight clothing",
        "Be prepared to perform CPR if needed",
    ],
    warning: "Anaphylaxis can be fatal within minutes without treatment.",
};

static POISONING: EmergencyResponse = EmergencyResponse {
    title: "POISONING EMERGENCY",
    action: "CALL 911 AND POISON CONTROL (1-800-222-1222)",
    instructions: &[
        "Do NOT make person vomit unless told by poison control",
        "Keep container of substance if safe to do so",
        "Note time of exposure",
        "Keep person calm and still",
    ],
    warning: "Some poisons work quickly. Immediate treatment is critical.",
};

static PREGNANCY: EmergencyResponse = EmergencyResponse {
    title: "PREGNANCY EMERGENCY",
    action: CALL_911,
    instructions: &[
        "Keep person lying down",
        "Note timing and severity of symptoms",
        "Keep person calm",
        "Do NOT give anything by mouth",
    ],
    warning: "Pregnancy emergencies require immediate obstetric care.",
};

static ACUTE: EmergencyResponse = EmergencyResponse {
    title: "SEVERE PAIN EMERGENCY",
    action: CALL_911,
    instructions: &[
        "Keep person still and comfortable",
        "Note location and type of pain",
        "Do NOT give food or drink",
        "Watch for signs of shock (pale, sweating, rapid pulse)",
    ],
    warning: "Severe, sudden pain can indicate life-threatening conditions.",
};
