//! Clarifying-question batteries, one per vague-symptom category.
//!
//! Plain static tables. Every set has at least one question, unique ids,
//! non-empty option lists and `min < max` on scales (checked in tests).

use serde::Serialize;

use crate::models::enums::VagueCategory;

/// Multi-select sentinel, mutually exclusive with every other option.
pub const NONE_OF_THESE: &str = "None of these";

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    Choice {
        options: &'static [&'static str],
    },
    Scale {
        min: u8,
        max: u8,
        min_label: &'static str,
        max_label: &'static str,
    },
    MultiSelect {
        options: &'static [&'static str],
    },
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    /// Human-readable name used when answers are written back as text.
    pub label: &'static str,
    pub prompt: &'static str,
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// Declared options; empty for scales.
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            QuestionKind::Choice { options } | QuestionKind::MultiSelect { options } => options,
            QuestionKind::Scale { .. } => &[],
        }
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    pub category: VagueCategory,
    pub questions: &'static [Question],
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

pub fn question_set(category: VagueCategory) -> &'static QuestionSet {
    match category {
        VagueCategory::Abdominal => &ABDOMINAL,
        VagueCategory::Headache => &HEADACHE,
        VagueCategory::Chest => &CHEST,
        VagueCategory::Back => &BACK,
        VagueCategory::Dizziness => &DIZZINESS,
        VagueCategory::Fever => &FEVER,
        VagueCategory::Breathing => &BREATHING,
        VagueCategory::Fatigue => &FATIGUE,
        VagueCategory::Nausea => &NAUSEA,
        VagueCategory::Skin => &SKIN,
        VagueCategory::Joint => &JOINT,
        VagueCategory::Urinary => &URINARY,
        VagueCategory::Anxiety => &ANXIETY,
        VagueCategory::Sleep => &SLEEP,
        VagueCategory::Temperature => &TEMPERATURE,
        VagueCategory::Numbness => &NUMBNESS,
        VagueCategory::Weight => &WEIGHT,
        VagueCategory::Nonspecific => &NONSPECIFIC,
    }
}

// (id, label)
type Key = (&'static str, &'static str);

const LOCATION: Key = ("location", "Pain Location");
const SEVERITY: Key = ("severity", "Severity (1-10)");
const REBOUND: Key = ("rebound", "Rebound Tenderness");
const ASSOCIATED: Key = ("associated", "Associated Symptoms");
const DURATION: Key = ("duration", "Duration");
const ONSET: Key = ("onset", "Onset");
const TYPE: Key = ("type", "Type");
const TRIGGERS: Key = ("triggers", "Triggers");
const RADIATES: Key = ("radiates", "Radiates To");
const TEMPERATURE_READING: Key = ("temperature", "Temperature");
const RECENT: Key = ("recent", "Recent Events");
const VOMITING: Key = ("vomiting", "Vomiting Status");
const CONTENT: Key = ("content", "Vomit Appearance");
const ACTIVITIES: Key = ("activities", "Activity Impact");
const MOBILITY: Key = ("mobility", "Joint Mobility");
const PAIN_LOCATION: Key = ("pain_location", "Pain Location");
const HISTORY: Key = ("history", "Medical History");
const PROBLEM: Key = ("problem", "Sleep Problem");
const SYMPTOM: Key = ("symptom", "Temperature Symptom");
const SYMPTOMS: Key = ("symptoms", "Symptoms");
const TIMING: Key = ("timing", "Timing");
const AMOUNT: Key = ("amount", "Amount");
const APPETITE: Key = ("appetite", "Appetite");
const IMPACT: Key = ("impact", "Impact on Daily Life");
const PHYSICAL: Key = ("physical", "Physical Symptoms");
const HABITS: Key = ("habits", "Sleep Habits");
const AREA: Key = ("location", "Body Area");

const fn choice(key: Key, prompt: &'static str, options: &'static [&'static str]) -> Question {
    Question {
        id: key.0,
        label: key.1,
        prompt,
        required: true,
        kind: QuestionKind::Choice { options },
    }
}

const fn multi(key: Key, prompt: &'static str, options: &'static [&'static str]) -> Question {
    Question {
        id: key.0,
        label: key.1,
        prompt,
        required: true,
        kind: QuestionKind::MultiSelect { options },
    }
}

const fn scale(
    key: Key,
    prompt: &'static str,
    min_label: &'static str,
    max_label: &'static str,
) -> Question {
    Question {
        id: key.0,
        label: key.1,
        prompt,
        required: true,
        kind: QuestionKind::Scale {
            min: 1,
            max: 10,
            min_label,
            max_label,
        },
    }
}

static ABDOMINAL: QuestionSet = QuestionSet {
    category: VagueCategory::Abdominal,
    questions: &[
        choice(
            LOCATION,
            "Where exactly is the pain?",
            &[
                "Upper right (below ribs)",
                "Upper left (below ribs)",
                "Lower right",
                "Lower left",
                "Center/around belly button",
                "All over",
            ],
        ),
        scale(SEVERITY, "How severe is the pain?", "Mild", "Worst pain ever"),
        choice(
            REBOUND,
            "Does it hurt MORE when you press down and then quickly release?",
            &["Yes", "No", "Not sure"],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Fever/chills",
                "Nausea or vomiting",
                "Diarrhea",
                "Constipation",
                "Blood in stool",
                "Unable to pass gas",
                NONE_OF_THESE,
            ],
        ),
        choice(
            DURATION,
            "When did the pain start?",
            &[
                "Within last hour",
                "1-6 hours ago",
                "6-24 hours ago",
                "1-2 days ago",
                "More than 2 days ago",
            ],
        ),
    ],
};

static HEADACHE: QuestionSet = QuestionSet {
    category: VagueCategory::Headache,
    questions: &[
        scale(SEVERITY, "How severe is the headache?", "Mild", "Worst headache ever"),
        choice(
            ONSET,
            "How did it start?",
            &[
                "Sudden/thunderclap (worst headache of life)",
                "Gradual over hours",
                "Gradual over days",
                "Woke up with it",
            ],
        ),
        choice(
            LOCATION,
            "Where is the pain?",
            &[
                "One side of head",
                "Both sides",
                "Front/forehead",
                "Back of head/neck",
                "Behind eyes",
                "All over",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Vision changes",
                "Nausea/vomiting",
                "Sensitivity to light",
                "Fever",
                "Stiff neck",
                "Confusion",
                NONE_OF_THESE,
            ],
        ),
        choice(
            DURATION,
            "How long have you had it?",
            &["Less than 1 hour", "1-6 hours", "6-24 hours", "More than 1 day"],
        ),
    ],
};

static CHEST: QuestionSet = QuestionSet {
    category: VagueCategory::Chest,
    questions: &[
        scale(SEVERITY, "How severe is it?", "Mild", "Severe"),
        choice(
            LOCATION,
            "Where exactly?",
            &["Center of chest", "Left side", "Right side", "All over chest"],
        ),
        choice(
            RADIATES,
            "Does the discomfort spread anywhere?",
            &[
                "No, stays in one place",
                "To arm (left or right)",
                "To jaw/neck",
                "To back",
                "To shoulder",
            ],
        ),
        multi(
            TRIGGERS,
            "What makes it worse?",
            &[
                "Deep breathing",
                "Moving/changing position",
                "Exercise/activity",
                "Eating",
                "Nothing specific",
                "Gets worse at rest",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Shortness of breath",
                "Sweating",
                "Nausea",
                "Dizziness",
                "Heart racing",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static BACK: QuestionSet = QuestionSet {
    category: VagueCategory::Back,
    questions: &[
        choice(
            LOCATION,
            "Where is the back pain?",
            &[
                "Upper back (shoulders/neck)",
                "Middle back",
                "Lower back",
                "All along spine",
            ],
        ),
        scale(SEVERITY, "How severe?", "Mild", "Severe"),
        choice(
            ONSET,
            "How did it start?",
            &[
                "Sudden (after lifting/movement)",
                "Gradual over time",
                "After injury/fall",
                "Woke up with it",
            ],
        ),
        choice(
            RADIATES,
            "Does pain go down your leg?",
            &["Yes, down one leg", "Yes, down both legs", "No, stays in back"],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Numbness/tingling in legs",
                "Weakness in legs",
                "Loss of bladder/bowel control",
                "Fever",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static DIZZINESS: QuestionSet = QuestionSet {
    category: VagueCategory::Dizziness,
    questions: &[
        choice(
            TYPE,
            "What does the dizziness feel like?",
            &[
                "Room spinning",
                "Lightheaded/about to faint",
                "Off balance/unsteady",
                "Floating feeling",
            ],
        ),
        multi(
            TRIGGERS,
            "When does it happen?",
            &[
                "When standing up",
                "When moving head",
                "All the time",
                "Comes and goes",
                "Only when walking",
            ],
        ),
        scale(SEVERITY, "How severe?", "Mild", "Severe"),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Nausea/vomiting",
                "Hearing loss/ringing",
                "Headache",
                "Vision changes",
                "Chest pain",
                NONE_OF_THESE,
            ],
        ),
        choice(
            DURATION,
            "How long has this been happening?",
            &[
                "Just started (within hours)",
                "1-2 days",
                "Several days",
                "Weeks or longer",
            ],
        ),
    ],
};

static FEVER: QuestionSet = QuestionSet {
    category: VagueCategory::Fever,
    questions: &[
        choice(
            TEMPERATURE_READING,
            "What is your temperature (if measured)?",
            &[
                "Below 100.4°F (38°C)",
                "100.4-102°F (38-39°C)",
                "102-104°F (39-40°C)",
                "Above 104°F (40°C)",
                "Haven't measured",
            ],
        ),
        choice(
            DURATION,
            "How long have you had fever?",
            &["Less than 24 hours", "1-2 days", "3-5 days", "More than 5 days"],
        ),
        multi(
            ASSOCIATED,
            "What other symptoms do you have?",
            &[
                "Cough",
                "Sore throat",
                "Body aches",
                "Chills/shaking",
                "Rash",
                "Confusion",
                "Difficulty breathing",
                "Severe headache",
                "Stiff neck",
                NONE_OF_THESE,
            ],
        ),
        multi(
            RECENT,
            "Any recent (past 2 weeks)?",
            &[
                "Travel outside country",
                "Sick contacts",
                "Surgery/procedure",
                "Tick bite",
                NONE_OF_THESE,
            ],
        )
        .optional(),
    ],
};

static BREATHING: QuestionSet = QuestionSet {
    category: VagueCategory::Breathing,
    questions: &[
        scale(SEVERITY, "How severe is the breathing difficulty?", "Mild", "Severe"),
        choice(
            ONSET,
            "When did it start?",
            &[
                "Suddenly (within minutes)",
                "Over past few hours",
                "Gradually over days",
                "Chronic (weeks/months)",
                "Comes and goes",
            ],
        ),
        multi(
            TRIGGERS,
            "When does it happen?",
            &[
                "At rest",
                "With activity/exercise",
                "When lying down",
                "All the time",
                "Comes and goes",
                "After small tasks",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Chest pain/discomfort",
                "Cough",
                "Wheezing",
                "Fever",
                "Leg swelling",
                "Blue lips/fingers",
                "Anxiety/nervousness",
                NONE_OF_THESE,
            ],
        ),
        multi(
            HISTORY,
            "Do you have any of these conditions?",
            &[
                "Asthma",
                "COPD/emphysema",
                "Heart problems",
                "Allergies",
                "Anxiety disorder",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static FATIGUE: QuestionSet = QuestionSet {
    category: VagueCategory::Fatigue,
    questions: &[
        scale(SEVERITY, "How severe is the fatigue?", "Mild", "Extreme"),
        choice(
            DURATION,
            "How long have you felt this way?",
            &[
                "Just today",
                "2-3 days",
                "1-2 weeks",
                "Several weeks",
                "Months",
                "Always/chronic",
            ],
        ),
        choice(
            ONSET,
            "Did it come on suddenly or gradually?",
            &[
                "Suddenly (within hours/days)",
                "Gradually over time",
                "Has been constant",
                "Comes and goes",
            ],
        ),
        choice(
            ACTIVITIES,
            "How does it affect daily activities?",
            &[
                "Cannot do normal activities",
                "Can do some but not all",
                "Can do everything but more tired",
                "Minimal impact",
                "Tired after small tasks",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Fever",
                "Weight loss",
                "Weight gain",
                "Shortness of breath",
                "Chest pain",
                "Confusion",
                "Muscle weakness",
                "Depression/sadness",
                "Sleep problems",
                "Loss of interest in things",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static NAUSEA: QuestionSet = QuestionSet {
    category: VagueCategory::Nausea,
    questions: &[
        scale(SEVERITY, "How bad is the nausea/vomiting?", "Mild", "Severe"),
        choice(
            VOMITING,
            "Are you vomiting or just nauseous?",
            &[
                "Just nauseous, no vomiting",
                "Vomiting occasionally",
                "Vomiting frequently (multiple times)",
                "Cannot keep anything down",
                "Nausea on and off",
            ],
        ),
        choice(
            DURATION,
            "How long has this been happening?",
            &[
                "Less than 6 hours",
                "6-24 hours",
                "1-2 days",
                "More than 2 days",
                "On and off for weeks",
            ],
        ),
        choice(
            CONTENT,
            "What does the vomit look like? (if vomiting)",
            &[
                "Normal food/liquid",
                "Green/yellow bile",
                "Blood or coffee-ground appearance",
                "Black material",
                "Not vomiting",
                "Not sure",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Abdominal pain",
                "Diarrhea",
                "Fever",
                "Headache",
                "Dizziness",
                "Signs of dehydration (very thirsty, dry mouth)",
                "Loss of appetite",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static SKIN: QuestionSet = QuestionSet {
    category: VagueCategory::Skin,
    questions: &[
        choice(
            TYPE,
            "What does it look like?",
            &[
                "Red bumps/hives",
                "Flat red rash",
                "Blisters/fluid-filled",
                "Swelling (no rash)",
                "Itchy but no visible rash",
                "Dry/sensitive skin",
                "Other/not sure",
            ],
        ),
        choice(
            LOCATION,
            "Where is it located?",
            &[
                "Face",
                "Arms",
                "Legs",
                "Torso/chest/back",
                "Hands/feet",
                "Scalp/hair",
                "All over body",
            ],
        ),
        choice(
            ONSET,
            "When did it start?",
            &[
                "Within last hour",
                "1-6 hours ago",
                "6-24 hours ago",
                "1-2 days ago",
                "More than 2 days ago",
                "Comes and goes",
            ],
        ),
        multi(
            SYMPTOMS,
            "What symptoms does it have?",
            &[
                "Very itchy",
                "Painful",
                "Warm to touch",
                "Spreading rapidly",
                "No other symptoms",
                "Feels sensitive",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Difficulty breathing",
                "Throat/tongue swelling",
                "Fever",
                "Recent medication change",
                "Recent insect bite",
                "Recent new food",
                "Hair loss",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static JOINT: QuestionSet = QuestionSet {
    category: VagueCategory::Joint,
    questions: &[
        choice(
            LOCATION,
            "Which joint(s)/area hurt?",
            &[
                "Knee",
                "Ankle",
                "Shoulder",
                "Elbow",
                "Wrist",
                "Hip",
                "Multiple joints",
                "Muscles (not joints)",
            ],
        ),
        scale(SEVERITY, "How severe is the pain?", "Mild", "Severe"),
        choice(
            ONSET,
            "How did it start?",
            &[
                "After injury/trauma",
                "After exercise/activity",
                "Gradually over time",
                "Woke up with it",
                "Suddenly without injury",
                "Random/moves around",
            ],
        ),
        choice(
            MOBILITY,
            "Can you move the joint?",
            &[
                "Normal range of motion",
                "Limited but can move it",
                "Very limited movement",
                "Cannot move it at all",
                "Stiff especially in morning",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Swelling",
                "Redness",
                "Warm to touch",
                "Fever",
                "Cannot bear weight (if leg)",
                "Deformity/looks wrong",
                "Weakness",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static URINARY: QuestionSet = QuestionSet {
    category: VagueCategory::Urinary,
    questions: &[
        multi(
            SYMPTOMS,
            "What are you experiencing?",
            &[
                "Pain/burning when urinating",
                "Frequent need to urinate",
                "Difficulty starting urination",
                "Blood in urine",
                "Dark/cloudy urine",
                "Strong odor",
                "Urinary urgency (sudden need to go)",
                "Mild burning sometimes",
            ],
        ),
        scale(SEVERITY, "How severe is the discomfort?", "Mild", "Severe"),
        choice(
            DURATION,
            "How long have you had these symptoms?",
            &[
                "Less than 24 hours",
                "1-2 days",
                "3-5 days",
                "More than 5 days",
                "On and off",
            ],
        ),
        choice(
            PAIN_LOCATION,
            "Where is the pain/discomfort?",
            &[
                "When urinating only",
                "Lower abdomen/bladder area",
                "Back/flank (kidney area)",
                "Pelvic area",
                "No pain, just other symptoms",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Fever/chills",
                "Back pain",
                "Nausea/vomiting",
                "Unable to urinate at all",
                "Incontinence (cannot hold urine)",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static ANXIETY: QuestionSet = QuestionSet {
    category: VagueCategory::Anxiety,
    questions: &[
        scale(SEVERITY, "How severe are these feelings?", "Mild", "Extreme"),
        choice(
            DURATION,
            "How long have you felt this way?",
            &[
                "Just today",
                "Few days",
                "1-2 weeks",
                "Several weeks",
                "Months or longer",
            ],
        ),
        multi(
            SYMPTOMS,
            "What are you experiencing?",
            &[
                "Anxious/nervous without knowing why",
                "Feeling down/sad",
                "Mood changes without reason",
                "Irritability",
                "Loss of interest in activities",
                "Panic attacks",
                "Constant worry",
                NONE_OF_THESE,
            ],
        ),
        multi(
            PHYSICAL,
            "Any physical symptoms?",
            &[
                "Heart racing",
                "Shortness of breath",
                "Chest tightness",
                "Sweating",
                "Trembling",
                "Sleep problems",
                "Fatigue",
                NONE_OF_THESE,
            ],
        ),
        choice(
            IMPACT,
            "How does it affect daily life?",
            &[
                "Cannot do normal activities",
                "Struggling but managing",
                "Manageable with effort",
                "Minimal impact",
            ],
        ),
    ],
};

static SLEEP: QuestionSet = QuestionSet {
    category: VagueCategory::Sleep,
    questions: &[
        choice(
            PROBLEM,
            "What sleep issues are you having?",
            &[
                "Trouble falling asleep",
                "Wake up during night",
                "Wake up too early",
                "Sleeping too much",
                "Restless/unrefreshing sleep",
                "Nightmares",
                "Snoring/breathing stops",
            ],
        ),
        choice(
            DURATION,
            "How long has this been happening?",
            &["Just recently", "1-2 weeks", "3-4 weeks", "Months", "Years"],
        ),
        choice(
            IMPACT,
            "How does it affect your day?",
            &[
                "Severely - cannot function well",
                "Moderately - tired but managing",
                "Mildly - slightly tired",
                "No daytime impact",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Stress/worry",
                "Pain keeping you awake",
                "Frequent urination at night",
                "Snoring",
                "Waking up short of breath",
                "Leg movements",
                "Anxiety/depression",
                NONE_OF_THESE,
            ],
        ),
        multi(
            HABITS,
            "Sleep habits:",
            &[
                "Irregular sleep schedule",
                "Screen time before bed",
                "Caffeine in evening",
                "Alcohol before bed",
                "Exercise close to bedtime",
                "Good sleep hygiene",
            ],
        )
        .optional(),
    ],
};

static TEMPERATURE: QuestionSet = QuestionSet {
    category: VagueCategory::Temperature,
    questions: &[
        choice(
            SYMPTOM,
            "What are you experiencing?",
            &[
                "Always feeling hot",
                "Always feeling cold",
                "Alternating hot and cold",
                "Hot flashes",
                "Cold sweats",
                "Cannot regulate temperature",
            ],
        ),
        scale(SEVERITY, "How bothersome is this?", "Mild", "Severe"),
        choice(
            DURATION,
            "How long has this been happening?",
            &["Few days", "1-2 weeks", "Few weeks", "Months", "Years"],
        ),
        choice(
            TIMING,
            "When does it happen?",
            &[
                "All the time",
                "Mostly at night",
                "Mostly during day",
                "During activity",
                "At rest",
                "Randomly",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Sweating",
                "Shivering",
                "Fatigue",
                "Weight changes",
                "Heart palpitations",
                "Anxiety",
                "Menstrual changes (if applicable)",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static NUMBNESS: QuestionSet = QuestionSet {
    category: VagueCategory::Numbness,
    questions: &[
        choice(
            LOCATION,
            "Where do you feel tingling/numbness?",
            &[
                "Hands",
                "Feet",
                "Arms",
                "Legs",
                "Face",
                "One side of body",
                "Multiple areas",
            ],
        ),
        scale(SEVERITY, "How bothersome is it?", "Mild", "Severe"),
        choice(
            TIMING,
            "When does it happen?",
            &[
                "All the time",
                "Comes and goes",
                "Only at certain times",
                "After certain positions",
                "Randomly",
            ],
        ),
        choice(
            ONSET,
            "How did it start?",
            &[
                "Suddenly",
                "Gradually over days",
                "Gradually over weeks",
                "After injury",
                "Always had it",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Weakness in affected area",
                "Pain",
                "Difficulty with balance",
                "Difficulty with fine movements",
                "Vision changes",
                "Dizziness",
                "Diabetes",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static WEIGHT: QuestionSet = QuestionSet {
    category: VagueCategory::Weight,
    questions: &[
        choice(
            TYPE,
            "What is happening with your weight?",
            &[
                "Losing weight without trying",
                "Gaining weight without trying",
                "Rapid weight loss",
                "Rapid weight gain",
                "Fluctuating weight",
            ],
        ),
        choice(
            AMOUNT,
            "How much weight change?",
            &[
                "Less than 5 pounds",
                "5-10 pounds",
                "10-20 pounds",
                "More than 20 pounds",
                "Not sure/significant",
            ],
        ),
        choice(
            DURATION,
            "Over what time period?",
            &["Few days", "1-2 weeks", "Few weeks", "1-2 months", "Several months"],
        ),
        choice(
            APPETITE,
            "How is your appetite?",
            &[
                "Increased appetite",
                "Decreased appetite",
                "No change in appetite",
                "Loss of appetite",
                "Always hungry",
            ],
        ),
        multi(
            ASSOCIATED,
            "Do you have any of these?",
            &[
                "Fatigue",
                "Fever",
                "Night sweats",
                "Changes in bowel habits",
                "Nausea/vomiting",
                "Increased thirst",
                "Frequent urination",
                "Mood changes",
                NONE_OF_THESE,
            ],
        ),
    ],
};

static NONSPECIFIC: QuestionSet = QuestionSet {
    category: VagueCategory::Nonspecific,
    questions: &[
        scale(
            SEVERITY,
            "How concerning is this feeling?",
            "Mildly concerning",
            "Very concerning",
        ),
        choice(
            DURATION,
            "How long have you felt this way?",
            &[
                "Just started today",
                "Few days",
                "1-2 weeks",
                "Several weeks",
                "Longer",
            ],
        ),
        multi(
            SYMPTOMS,
            "Can you identify any specific symptoms?",
            &[
                "Fatigue/tiredness",
                "Pain somewhere",
                "Dizziness",
                "Nausea",
                "Headache",
                "Shortness of breath",
                "Chest discomfort",
                "Anxiety/nervousness",
                "No specific symptoms, just feel off",
            ],
        ),
        choice(
            AREA,
            "Any particular body area feels wrong?",
            &[
                "Head",
                "Chest",
                "Stomach/abdomen",
                "Arms/legs",
                "All over",
                "Cannot pinpoint",
            ],
        ),
        choice(
            IMPACT,
            "How does it affect your daily activities?",
            &[
                "Cannot do normal activities",
                "Struggling but managing",
                "Can function but feel off",
                "Minimal impact",
            ],
        ),
    ],
};
