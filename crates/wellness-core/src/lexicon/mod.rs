//! Static keyword tables and curated condition records.
//!
//! Every table is an ordered list: matching walks it in declaration order and
//! the first keyword contained in the input wins. Matching is plain
//! case-insensitive substring containment with no word boundaries, so
//! `"hi"` also matches `"this"` and `"cold"` matches `"scolding"`.

mod conditions;

use serde::{Deserialize, Serialize};

use crate::models::ConditionRecord;
use conditions::CONDITIONS;

/// Reply for anything that looks like an emergency.
pub const EMERGENCY_MESSAGE: &str = "🚨 IMPORTANT: If you are experiencing a medical emergency, please call your local emergency services (like 911) immediately.";

/// Fallback reply when nothing matches.
pub const DEFAULT_RESPONSE: &str = "I'm here to help with wellness tips, common symptoms, disease information, or medication basics. Can you tell me more about what's on your mind?";

/// Reply to a greeting.
pub const GREETING_RESPONSE: &str = "Hello! I can provide wellness tips or information about common symptoms like headaches, fever, or fatigue. What's on your mind?";

/// First message of every chat session.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI Wellness Assistant. How can I help you feel better today? (Reminder: I provide general information, not medical diagnoses.)";

const EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "can't breathe",
    "unconscious",
    "stroke",
    "severe bleeding",
    "heart attack",
    "seizure",
];

const ADVICE_TRIGGERS: &[&str] = &["wellness", "advice", "tip"];

const GREETING_TRIGGERS: &[&str] = &["hello", "hi"];

const SYMPTOM_RESPONSES: &[(&str, &str)] = &[
    ("headache", "For a mild headache, rest in a quiet room and stay hydrated. If it's severe or persistent, please consult a doctor."),
    ("fever", "A fever often indicates your body is fighting an infection. Rest and drink fluids. If it exceeds 103°F (39.4°C), seek medical attention."),
    ("cough", "Common coughs can be relieved with honey or warm fluids. If you have chest pain or difficulty breathing, contact emergency services."),
    ("sore throat", "Gargling with warm salt water can help. Stay hydrated and rest your voice."),
    ("tired", "Fatigue can be caused by stress, poor sleep, or diet. Try consistent sleep patterns, but see a professional if it persists."),
    ("fatigue", "Persistent fatigue may be linked to anemia, sleep disorders, or stress. Ensure you're getting 7-9 hours of sleep and adequate nutrition."),
    ("nausea", "Nausea can be caused by various factors like motion sickness, indigestion, or infection. Sip clear fluids and eat bland foods like crackers."),
    ("dizziness", "Dizziness can result from dehydration, low blood sugar, or inner ear issues. Sit or lie down immediately. If it persists, see a doctor."),
    ("insomnia", "Difficulty sleeping can be improved by limiting screen time before bed, maintaining a regular schedule, and avoiding caffeine late in the day."),
];

const DISEASE_INFO: &[(&str, &str)] = &[
    ("diabetes", "Diabetes is a chronic condition that affects how your body turns food into energy. It requires careful management of blood sugar through diet, exercise, and sometimes medication. Please consult an endocrinologist for a personalized plan."),
    ("hypertension", "Hypertension (high blood pressure) is when the force of your blood against artery walls is too high. It often has no symptoms but increases risk for heart disease. Lifestyle changes and medication can manage it."),
    ("flu", "The flu is a viral infection that attacks your respiratory system. Rest, fluids, and over-the-counter pain relievers usually help. If symptoms are severe, see a doctor within 48 hours for potential antiviral meds."),
    ("asthma", "Asthma is a condition where your airways narrow and swell, producing extra mucus. It can make breathing difficult and trigger coughing or wheezing. It is typically managed with rescue and maintenance inhalers."),
    ("cold", "The common cold is a viral infection of your nose and throat. It's usually harmless, though it may not feel that way. Rest and fluids are key; most people recover in 7-10 days."),
    ("malaria", "Malaria is a life-threatening disease caused by parasites that are transmitted to people through the bites of infected female Anopheles mosquitoes. It is preventable and curable."),
    ("tuberculosis", "Tuberculosis (TB) is an infectious disease usually caused by Mycobacterium tuberculosis bacteria. It generally affects the lungs, but can also affect other parts of the body."),
    ("cancer", "Cancer refers to any one of a large number of diseases characterized by the development of abnormal cells that divide uncontrollably and have the ability to infiltrate and destroy normal body tissue."),
    ("cholera", "Cholera is an acute diarrheal infection caused by ingestion of food or water contaminated with the bacterium Vibrio cholerae. It remains a global threat to public health."),
    ("heart disease", "Heart disease describes a range of conditions that affect your heart. Diseases under the heart disease umbrella include blood vessel diseases, such as coronary artery disease; heart rhythm problems (arrhythmias); and heart defects you're born with (congenital heart defects), among others."),
];

const MEDICATION_INFO: &[(&str, &str)] = &[
    ("ibuprofen", "Ibuprofen is a Non-Steroidal Anti-Inflammatory Drug (NSAID) used to treat pain, fever, and inflammation. Take with food to avoid stomach upset. Do not exceed recommended doses."),
    ("paracetamol", "Paracetamol (Acetaminophen) is used to treat pain and fever. It is generally gentle on the stomach but can cause liver damage if taken in excess. Never exceed 4g in 24 hours."),
    ("aspirin", "Aspirin is used to reduce pain, fever, or inflammation. It is also sometimes used as a blood thinner. Not recommended for children under 16 due to Reye's syndrome risk."),
    ("antihistamine", "Antihistamines are used to relieve allergy symptoms like sneezing or itching. Some can cause drowsiness. Check the label if you need to drive or operate machinery."),
    ("antibiotics", "Antibiotics treat bacterial infections, not viruses (like colds/flu). Always finish the entire prescribed course even if you feel better, to prevent antibiotic resistance."),
    ("insulin", "Insulin is a hormone made by the pancreas that allows your body to use sugar (glucose) from carbohydrates in the food that you eat for energy or to store glucose for future use."),
    ("metformin", "Metformin is a medication used to treat type 2 diabetes and sometimes used to prevent the condition in those at high risk. It works by improving the way your body handles insulin."),
];

const WELLNESS_ADVICE: &[&str] = &[
    "Eat a Balanced Diet: Incorporate a variety of fruits, vegetables, whole grains, and lean proteins into your meals.",
    "Prioritize Quality Sleep: Aim for 7-9 hours of quality sleep each night to support mental and physical health.",
    "Stay Hydrated: Drink plenty of water throughout the day to maintain hydration and support bodily functions.",
    "Manage Stress: Practice mindfulness, meditation, or yoga to reduce stress and improve mental well-being.",
    "Limit Processed Foods: Reduce intake of processed and sugary foods to maintain a healthy weight and energy levels.",
    "Routine Medical Check-ups: Schedule regular health screenings and check-ups to catch potential health issues early.",
    "Build Strong Relationships: Foster social connections and support networks to enhance emotional health.",
    "Practice Gratitude: Keep a gratitude journal to focus on positive aspects of life and improve mental health.",
    "Limit Screen Time: Reduce time spent on screens to improve sleep quality and mental well-being.",
    "Get Moving: Engage in regular physical activity to boost your mood and energy levels.",
];

/// Group of condition names shown together in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseCategory {
    pub name: String,
    pub diseases: Vec<String>,
}

/// Browsable listing of every curated condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseDirectory {
    pub title: String,
    pub description: String,
    pub categories: Vec<DiseaseCategory>,
}

/// Ordered keyword tables plus curated condition records.
#[derive(Debug, Clone)]
pub struct Lexicon {
    emergency_keywords: Vec<String>,
    symptoms: Vec<(String, String)>,
    diseases: Vec<(String, String)>,
    medications: Vec<(String, String)>,
    wellness_tips: Vec<String>,
    advice_triggers: Vec<String>,
    greeting_triggers: Vec<String>,
    conditions: Vec<ConditionRecord>,
    /// (group name, condition aliases) in display order
    groups: Vec<(String, Vec<String>)>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create a lexicon with the built-in tables.
    pub fn new() -> Self {
        let mut lexicon = Self {
            emergency_keywords: to_strings(EMERGENCY_KEYWORDS),
            symptoms: to_pairs(SYMPTOM_RESPONSES),
            diseases: to_pairs(DISEASE_INFO),
            medications: to_pairs(MEDICATION_INFO),
            wellness_tips: to_strings(WELLNESS_ADVICE),
            advice_triggers: to_strings(ADVICE_TRIGGERS),
            greeting_triggers: to_strings(GREETING_TRIGGERS),
            conditions: Vec::with_capacity(CONDITIONS.len()),
            groups: Vec::new(),
        };

        for entry in CONDITIONS {
            let record = ConditionRecord {
                alias: entry.alias.to_string(),
                name: entry.name.to_string(),
                causes: to_strings(entry.causes),
                symptoms: to_strings(entry.symptoms),
                precautions: to_strings(entry.precautions),
                medications: to_strings(entry.medications),
                home_remedies: to_strings(entry.home_remedies),
                disease_knowledge: None,
            };
            lexicon.add_condition_to_group(entry.group, record);
        }

        lexicon
    }

    /// Check whether the lowercased input contains an emergency phrase.
    pub fn is_emergency(&self, lowered: &str) -> bool {
        self.emergency_keywords
            .iter()
            .any(|k| lowered.contains(k.as_str()))
    }

    /// First symptom keyword contained in the input.
    pub fn find_symptom(&self, lowered: &str) -> Option<(&str, &str)> {
        first_match(&self.symptoms, lowered)
    }

    /// First disease keyword contained in the input.
    pub fn find_disease(&self, lowered: &str) -> Option<(&str, &str)> {
        first_match(&self.diseases, lowered)
    }

    /// First medication keyword contained in the input.
    pub fn find_medication(&self, lowered: &str) -> Option<(&str, &str)> {
        first_match(&self.medications, lowered)
    }

    /// Check whether the input asks for advice.
    pub fn wants_advice(&self, lowered: &str) -> bool {
        self.advice_triggers
            .iter()
            .any(|t| lowered.contains(t.as_str()))
    }

    /// Check whether the input is a greeting.
    pub fn is_greeting(&self, lowered: &str) -> bool {
        self.greeting_triggers
            .iter()
            .any(|t| lowered.contains(t.as_str()))
    }

    /// Wellness tips to pick from.
    pub fn wellness_tips(&self) -> &[String] {
        &self.wellness_tips
    }

    /// Curated condition records in lookup order.
    pub fn conditions(&self) -> &[ConditionRecord] {
        &self.conditions
    }

    /// First condition record whose alias and the query contain one another.
    pub fn find_condition(&self, query: &str) -> Option<&ConditionRecord> {
        let lowered = query.trim().to_lowercase();
        self.conditions.iter().find(|c| c.matches_query(&lowered))
    }

    /// Add a custom emergency phrase.
    pub fn add_emergency_keyword(&mut self, phrase: &str) {
        self.emergency_keywords.push(phrase.to_lowercase());
    }

    /// Add a custom symptom response, matched after the built-ins.
    pub fn add_symptom(&mut self, keyword: &str, response: &str) {
        self.symptoms
            .push((keyword.to_lowercase(), response.to_string()));
    }

    /// Add a custom disease description, matched after the built-ins.
    pub fn add_disease(&mut self, keyword: &str, description: &str) {
        self.diseases
            .push((keyword.to_lowercase(), description.to_string()));
    }

    /// Add a custom medication description, matched after the built-ins.
    pub fn add_medication(&mut self, keyword: &str, description: &str) {
        self.medications
            .push((keyword.to_lowercase(), description.to_string()));
    }

    /// Add a custom wellness tip.
    pub fn add_wellness_tip(&mut self, tip: &str) {
        self.wellness_tips.push(tip.to_string());
    }

    /// Add a custom condition record under an "Other" heading.
    pub fn add_condition(&mut self, record: ConditionRecord) {
        self.add_condition_to_group("Other", record);
    }

    fn add_condition_to_group(&mut self, group: &str, record: ConditionRecord) {
        match self.groups.iter_mut().find(|(name, _)| name == group) {
            Some((_, aliases)) => aliases.push(record.alias.clone()),
            None => self
                .groups
                .push((group.to_string(), vec![record.alias.clone()])),
        }
        self.conditions.push(record);
    }

    /// Directory of curated conditions by group.
    pub fn directory(&self) -> DiseaseDirectory {
        let categories = self
            .groups
            .iter()
            .map(|(name, aliases)| DiseaseCategory {
                name: name.clone(),
                diseases: aliases
                    .iter()
                    .filter_map(|a| self.conditions.iter().find(|c| &c.alias == a))
                    .map(|c| c.name.clone())
                    .collect(),
            })
            .collect();

        DiseaseDirectory {
            title: "Global Health Registry".to_string(),
            description: format!(
                "{} curated conditions. Ask about any of them for causes, symptoms, precautions and remedies.",
                self.conditions.len()
            ),
            categories,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn first_match<'a>(table: &'a [(String, String)], lowered: &str) -> Option<(&'a str, &'a str)> {
    table
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword.as_str()))
        .map(|(k, v)| (k.as_str(), v.as_str()))
}
