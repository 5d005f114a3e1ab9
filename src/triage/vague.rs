//! Vague-symptom detection.
//!
//! Fuzzy scan over the vague catalogue. The first exact hit ends the scan;
//! otherwise the best fuzzy candidate wins, and a later candidate only
//! replaces it with a strictly greater score.

use std::sync::LazyLock;

use super::fuzzy::{match_pattern, normalize, MatchResult};
use super::questions::question_set;
use super::types::{compile, CatalogueEntry, PhraseList, VagueDetection};
use crate::models::enums::VagueCategory;

const VAGUE_PHRASES: &[PhraseList<VagueCategory>] = &[
    PhraseList {
        category: VagueCategory::Abdominal,
        en: &[
            "stomach pain",
            "stomach ache",
            "stomachache",
            "belly pain",
            "tummy hurts",
            "abdominal pain",
            "stomach hurts",
            "pain in stomach",
            "pain in belly",
            "stomach discomfort",
            "upset stomach",
            "stomach cramps",
        ],
        es: &[
            "dolor de estómago",
            "me duele el estómago",
            "dolor abdominal",
            "dolor de barriga",
            "dolor de panza",
            "malestar estomacal",
        ],
    },
    PhraseList {
        category: VagueCategory::Headache,
        en: &["headache", "headaches", "head hurts", "head pain", "pain in head"],
        es: &["dolor de cabeza", "me duele la cabeza", "jaqueca", "migraña"],
    },
    PhraseList {
        category: VagueCategory::Chest,
        en: &[
            "chest discomfort",
            "chest tightness",
            "chest feels",
            "uncomfortable chest",
            "chest pressure light",
            "mild chest",
        ],
        es: &["molestia en el pecho", "opresión en el pecho", "pecho apretado"],
    },
    PhraseList {
        category: VagueCategory::Back,
        en: &["back pain", "back hurts", "sore back", "back ache", "backache", "pain in back"],
        es: &["dolor de espalda", "me duele la espalda", "dolor lumbar"],
    },
    PhraseList {
        category: VagueCategory::Dizziness,
        en: &[
            "dizzy",
            "dizziness",
            "lightheaded",
            "light headed",
            "feel faint",
            "spinning",
            "vertigo",
        ],
        es: &["mareado", "mareada", "tengo mareos", "vértigo"],
    },
    PhraseList {
        category: VagueCategory::Fever,
        en: &[
            "high fever",
            "low grade fever",
            "running a fever",
            "fever and chills",
            "feverish",
            "temperature",
            "have a temp",
        ],
        es: &["fiebre", "calentura"],
    },
    PhraseList {
        category: VagueCategory::Breathing,
        en: &[
            "shortness of breath",
            "short of breath",
            "out of breath",
            "trouble breathing",
            "breathing problems",
            "breathless",
        ],
        es: &["falta de aire", "me falta el aire", "sin aliento"],
    },
    PhraseList {
        category: VagueCategory::Fatigue,
        en: &[
            "tired",
            "tiredness",
            "fatigue",
            "fatigued",
            "exhausted",
            "lack of energy",
        ],
        es: &["cansado", "cansada", "cansancio", "fatiga", "agotado", "agotada", "sin energía"],
    },
    PhraseList {
        category: VagueCategory::Nausea,
        en: &[
            "nausea",
            "nauseous",
            "nauseated",
            "feel sick",
            "throwing up",
            "vomiting",
        ],
        es: &["náuseas", "vómitos", "vomitando", "ganas de vomitar"],
    },
    PhraseList {
        category: VagueCategory::Skin,
        en: &[
            "skin rash",
            "itchy rash",
            "itchy skin",
            "skin irritation",
            "broke out in",
            "red spots",
            "itchy",
        ],
        es: &["erupción", "sarpullido", "picazón", "comezón", "ronchas"],
    },
    PhraseList {
        category: VagueCategory::Joint,
        en: &[
            "joint pain",
            "joints hurt",
            "joint ache",
            "sore joints",
            "achy joints",
            "knee pain",
            "shoulder pain",
            "ankle pain",
            "muscle pain",
            "muscle ache",
        ],
        es: &[
            "dolor de articulaciones",
            "dolor articular",
            "dolor de rodilla",
            "me duele la rodilla",
            "dolor muscular",
        ],
    },
    PhraseList {
        category: VagueCategory::Urinary,
        en: &[
            "urinary problems",
            "painful urination",
            "pain when urinating",
            "burning when i pee",
            "burns when i pee",
            "frequent urination",
            "peeing a lot",
            "bladder infection",
            "blood in urine",
        ],
        es: &["ardor al orinar", "dolor al orinar", "infección urinaria", "orino mucho"],
    },
    PhraseList {
        category: VagueCategory::Anxiety,
        en: &[
            "anxious",
            "anxiety",
            "panic attack",
            "nervous",
            "stressed out",
            "worried all the time",
            "feeling down",
            "depressed",
        ],
        es: &["ansiedad", "ansioso", "ansiosa", "nervioso", "nerviosa", "estresado", "deprimido"],
    },
    PhraseList {
        category: VagueCategory::Sleep,
        en: &[
            "trouble sleeping",
            "cant sleep",
            "cannot sleep",
            "not sleeping",
            "insomnia",
            "sleep problems",
            "sleeping too much",
        ],
        es: &["no puedo dormir", "insomnio", "no duermo bien", "problemas para dormir"],
    },
    PhraseList {
        category: VagueCategory::Temperature,
        en: &[
            "always cold",
            "always feel cold",
            "cold all the time",
            "cant get warm",
            "hot flashes",
            "cold sweats",
            "hot and cold",
        ],
        es: &["siempre tengo frío", "sofocos", "sudores fríos", "escalofríos"],
    },
    PhraseList {
        category: VagueCategory::Numbness,
        en: &[
            "numbness",
            "tingling",
            "pins and needles",
            "feel numb",
            "is numb",
            "went numb",
        ],
        es: &["entumecimiento", "hormigueo", "adormecido", "adormecida"],
    },
    PhraseList {
        category: VagueCategory::Weight,
        en: &[
            "losing weight",
            "lost weight",
            "gaining weight",
            "gained weight",
            "weight loss",
            "weight gain",
            "weight change",
        ],
        es: &["bajando de peso", "perdí peso", "subiendo de peso", "aumento de peso"],
    },
    PhraseList {
        category: VagueCategory::Nonspecific,
        en: &[
            "not feeling well",
            "dont feel well",
            "feel unwell",
            "feeling unwell",
            "under the weather",
            "dont feel right",
            "not feeling myself",
            "malaise",
        ],
        es: &["me siento mal", "no me siento bien", "malestar general"],
    },
];

static CATALOGUE: LazyLock<Vec<CatalogueEntry<VagueCategory>>> =
    LazyLock::new(|| compile(VAGUE_PHRASES));

/// Scan raw (unaugmented) text for an under-specified symptom.
pub fn detect_vague(text: &str) -> Option<VagueDetection> {
    let haystack = normalize(text);
    if haystack.is_empty() {
        return None;
    }

    let mut best: Option<VagueDetection> = None;

    for entry in CATALOGUE.iter() {
        for pattern in &entry.patterns {
            let result = match_pattern(&haystack, pattern);
            if !result.matched {
                continue;
            }

            if result.exact {
                return Some(detection(entry.category, pattern, result));
            }

            if best.map_or(true, |b| result.score > b.score) {
                best = Some(detection(entry.category, pattern, result));
            }
        }
    }

    best
}

fn detection(
    category: VagueCategory,
    pattern: &'static str,
    result: MatchResult,
) -> VagueDetection {
    VagueDetection {
        category,
        matched_pattern: pattern,
        score: result.score,
        exact: result.exact,
        question_set: question_set(category),
    }
}
