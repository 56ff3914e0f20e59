//! Curated condition records, grouped for the disease directory.

/// Static form of a condition record.
pub(crate) struct ConditionEntry {
    pub alias: &'static str,
    pub name: &'static str,
    pub group: &'static str,
    pub causes: &'static [&'static str],
    pub symptoms: &'static [&'static str],
    pub precautions: &'static [&'static str],
    pub medications: &'static [&'static str],
    pub home_remedies: &'static [&'static str],
}

/// Lookup order matters: the first alias matching a query wins.
pub(crate) const CONDITIONS: &[ConditionEntry] = &[
    // Respiratory
    ConditionEntry {
        alias: "flu",
        name: "Influenza (Flu)",
        group: "Respiratory",
        causes: &[
            "Influenza viruses (A, B, C)",
            "Airborne droplets",
            "Direct contact",
        ],
        symptoms: &[
            "Sudden high fever",
            "Dry cough",
            "Sore throat",
            "Severe muscle aches",
            "Fatigue",
        ],
        precautions: &[
            "Annual flu vaccine",
            "Frequent handwashing",
            "Masking in crowds",
            "Isolation",
        ],
        medications: &[
            "Oseltamivir (Tamiflu)",
            "Baloxavir (Xofluza)",
            "Acetaminophen",
            "Ibuprofen",
        ],
        home_remedies: &[
            "Warm broth and excessive fluids",
            "Steam inhalation with eucalyptus",
            "Saltwater gargle",
            "Complete bed rest",
        ],
    },
    ConditionEntry {
        alias: "covid",
        name: "COVID-19",
        group: "Respiratory",
        causes: &[
            "SARS-CoV-2 virus",
            "Airborne aerosols",
            "Close contact",
        ],
        symptoms: &[
            "Fever/Chills",
            "New loss of taste/smell",
            "Shortness of breath",
            "Fatigue",
            "Dry cough",
        ],
        precautions: &[
            "Vaccination & Boosters",
            "N95/KN95 Masking",
            "Ventilation",
            "Hand hygiene",
        ],
        medications: &[
            "Paxlovid (Nirmatrelvir/Ritonavir)",
            "Remdesivir",
            "Molnupiravir",
            "Dexamethasone (severe)",
        ],
        home_remedies: &[
            "Prone positioning for breathing",
            "Honey and lemon for cough",
            "Hydration with electrolytes",
            "Zinc and Vitamin C/D supplements (supportive)",
        ],
    },
    ConditionEntry {
        alias: "cold",
        name: "Common Cold",
        group: "Respiratory",
        causes: &[
            "Rhinovirus (most common)",
            "Coronavirus",
            "RSV",
        ],
        symptoms: &[
            "Runny/stuffy nose",
            "Sore throat",
            "Sneezing",
            "Mild cough",
            "Low-grade fever",
        ],
        precautions: &[
            "Hand washing",
            "Avoid touching face",
            "Disinfect surfaces",
        ],
        medications: &[
            "Decongestants (Pseudoephedrine)",
            "Antihistamines",
            "Cough suppressants (Dextromethorphan)",
        ],
        home_remedies: &[
            "Chicken soup (anti-inflammatory)",
            "Ginger tea with honey",
            "Humidifier usage",
            "Saline nasal drops",
        ],
    },
    ConditionEntry {
        alias: "asthma",
        name: "Bronchial Asthma",
        group: "Respiratory",
        causes: &[
            "Allergens (pollen, dust)",
            "Pollution",
            "Cold air",
            "Exercise",
            "Genetics",
        ],
        symptoms: &[
            "Wheezing",
            "Chest tightness",
            "Shortness of breath",
            "Night-time coughing",
        ],
        precautions: &[
            "Identify and avoid triggers",
            "Air purifiers",
            "Flu vaccination",
        ],
        medications: &[
            "Albuterol (Rescue Inhaler)",
            "Fluticasone (Steroid)",
            "Montelukast",
            "Salmeterol",
        ],
        home_remedies: &[
            "Caffeine (mild bronchodilator)",
            "Steam inhalation",
            "Breathing exercises (Buteyko/Pranayama)",
            "Ginger/Turmeric tea",
        ],
    },
    ConditionEntry {
        alias: "pneumonia",
        name: "Pneumonia",
        group: "Respiratory",
        causes: &[
            "Bacteria (Streptococcus)",
            "Viruses",
            "Fungi",
            "Aspiration",
        ],
        symptoms: &[
            "Productive cough (green/yellow mucus)",
            "Stabbing chest pain",
            "High fever with chills",
            "Shortness of breath",
        ],
        precautions: &[
            "Pneumococcal vaccine",
            "Quit smoking",
            "Good hygiene",
        ],
        medications: &[
            "Antibiotics (Azithromycin, Amoxicillin)",
            "Antivirals",
            "Fever reducers",
        ],
        home_remedies: &[
            "Warm peppermint tea",
            "Chest percussion (physiotherapy)",
            "Elecampane root tea (expectorant)",
            "Hydration",
        ],
    },
    ConditionEntry {
        alias: "tuberculosis",
        name: "Tuberculosis (TB)",
        group: "Respiratory",
        causes: &[
            "Mycobacterium tuberculosis bacteria",
            "Airborne transmission",
        ],
        symptoms: &[
            "Coughing up blood",
            "Weight loss",
            "Night sweats",
            "Fever",
            "Fatigue",
        ],
        precautions: &[
            "BCG Vaccine",
            "Well-ventilated spaces",
            "N95 masks for caregivers",
        ],
        medications: &[
            "Isoniazid",
            "Rifampicin",
            "Pyrazinamide",
            "Ethambutol (RIPE therapy)",
        ],
        home_remedies: &[
            "High-protein diet",
            "Pineapple (bromelain for mucus)",
            "Garlic (antimicrobial support)",
            "Sunlight (Vitamin D)",
        ],
    },
    ConditionEntry {
        alias: "bronchitis",
        name: "Bronchitis",
        group: "Respiratory",
        causes: &[
            "Viral Flu/Cold",
            "Smoking",
            "Pollution",
        ],
        symptoms: &[
            "Persistent cough with mucus",
            "Wheezing",
            "Low fever",
            "Chest discomfort",
        ],
        precautions: &[
            "Avoid smoke/fumes",
            "Mask wearing",
            "Hand hygiene",
        ],
        medications: &[
            "Cough suppressants",
            "Bronchodilators",
            "Anti-inflammatories",
        ],
        home_remedies: &[
            "Honey and warm water",
            "Steam with thyme",
            "Hydration",
            "Avoid dairy (may thicken mucus)",
        ],
    },
    // Vector-borne & Tropical
    ConditionEntry {
        alias: "malaria",
        name: "Malaria",
        group: "Vector-borne & Tropical",
        causes: &[
            "Plasmodium parasites",
            "Anopheles mosquito bite",
        ],
        symptoms: &[
            "Cyclical high fever",
            "Shaking chills",
            "Sweating",
            "Headache",
            "Nausea",
        ],
        precautions: &[
            "Mosquito nets",
            "DEET repellent",
            "Antimalarial prophylaxis",
            "Long sleeves",
        ],
        medications: &[
            "Artemether-lumefantrine (Coartem)",
            "Chloroquine",
            "Doxycycline",
            "Primaquine",
        ],
        home_remedies: &[
            "Cinnamon and basil tea",
            "Grapefruit (Quinine content - *caution with meds*)",
            "Ginger water",
            "Tepid sponging",
        ],
    },
    ConditionEntry {
        alias: "dengue",
        name: "Dengue Fever",
        group: "Vector-borne & Tropical",
        causes: &[
            "Dengue virus",
            "Aedes aegypti mosquito",
        ],
        symptoms: &[
            "Sudden high fever",
            "Severe joint/bone pain ('Breakbone fever')",
            "Pain behind eyes",
            "Rash",
        ],
        precautions: &[
            "Eliminate standing water",
            "Mosquito repellents",
            "Screening windows",
        ],
        medications: &[
            "Acetaminophen (Paracetamol) ONLY - Avoid Aspirin/Ibuprofen due to bleeding risk",
            "IV fluids",
        ],
        home_remedies: &[
            "Papaya leaf juice (for platelets)",
            "Coconut water",
            "Neem leaf tea",
            "Kiwi fruit",
        ],
    },
    ConditionEntry {
        alias: "typhoid",
        name: "Typhoid Fever",
        group: "Vector-borne & Tropical",
        causes: &[
            "Salmonella Typhi bacteria",
            "Contaminated food/water",
        ],
        symptoms: &[
            "Step-ladder rising fever",
            "Stomach pain",
            "Headache",
            "Rose spots rash",
            "Constipation/Diarrhea",
        ],
        precautions: &[
            "Typhoid vaccine",
            "Drink boiled/bottled water",
            "Avoid raw street food",
        ],
        medications: &[
            "Ciprofloxacin",
            "Azithromycin",
            "Ceftriaxone",
        ],
        home_remedies: &[
            "Banana and yogurt",
            "Apple cider vinegar",
            "ORS (Oral Rehydration Solution)",
            "Honey and warm water",
        ],
    },
    ConditionEntry {
        alias: "cholera",
        name: "Cholera",
        group: "Vector-borne & Tropical",
        causes: &[
            "Vibrio cholerae",
            "Unsafe water",
            "Poor sanitation",
        ],
        symptoms: &[
            "Profuse watery diarrhea ('Rice-water stool')",
            "Vomiting",
            "Severe dehydration",
            "Muscle cramps",
        ],
        precautions: &[
            "Water purification",
            "Safe sanitation",
            "Cholera vaccine",
        ],
        medications: &[
            "Doxycycline",
            "Azithromycin",
            "Zinc supplements",
        ],
        home_remedies: &[
            "Homemade ORS (Water + Sugar + Salt)",
            "Lemon water",
            "Coconut water",
            "Rice water",
        ],
    },
    ConditionEntry {
        alias: "zika",
        name: "Zika Virus",
        group: "Vector-borne & Tropical",
        causes: &[
            "Zika virus",
            "Aedes mosquito",
            "Sexual contact",
        ],
        symptoms: &[
            "Mild fever",
            "Rash",
            "Joint pain",
            "Red eyes",
        ],
        precautions: &[
            "Prevent mosquito bites",
            "Safe sex (can stay in fluids)",
        ],
        medications: &[
            "Rest",
            "Fluids",
            "Acetaminophen",
        ],
        home_remedies: &[
            "Complete rest",
            "Oatmeal bath for rash",
            "Cold compress",
        ],
    },
    ConditionEntry {
        alias: "chikungunya",
        name: "Chikungunya",
        group: "Vector-borne & Tropical",
        causes: &[
            "Chikungunya virus",
            "Mosquito bite",
        ],
        symptoms: &[
            "Severe joint pain",
            "Fever",
            "Rash",
            "Muscle pain",
        ],
        precautions: &[
            "Mosquito control",
            "Protective clothing",
        ],
        medications: &[
            "Naproxen",
            "Ibuprofen",
            "Paracetamol",
        ],
        home_remedies: &[
            "Cold packs for joints",
            "Turmeric milk",
            "Ginger tea",
            "Epsom salt bath",
        ],
    },
    // Chronic & Lifestyle
    ConditionEntry {
        alias: "diabetes",
        name: "Diabetes Mellitus (Type 2)",
        group: "Chronic & Lifestyle",
        causes: &[
            "Insulin resistance",
            "Obesity",
            "Genetics",
            "Sedentary lifestyle",
        ],
        symptoms: &[
            "Polyuria (frequent urination)",
            "Polydipsia (excess thirst)",
            "Blurred vision",
            "Slow healing sores",
        ],
        precautions: &[
            "Weight management",
            "Low-glycemic diet",
            "Regular exercise",
        ],
        medications: &[
            "Metformin",
            "Glipizide",
            "SGLT2 inhibitors (Jardiance)",
            "Insulin (if advanced)",
        ],
        home_remedies: &[
            "Bitter melon juice",
            "Fenugreek seeds",
            "Cinnamon tea",
            "Apple cider vinegar",
        ],
    },
    ConditionEntry {
        alias: "hypertension",
        name: "Hypertension (BP)",
        group: "Chronic & Lifestyle",
        causes: &[
            "High salt intake",
            "Stress",
            "Obesity",
            "Age",
            "Genetics",
        ],
        symptoms: &[
            "Often silent",
            "Morning headaches",
            "Nosebleeds",
            "Tinnitus (ear ringing)",
        ],
        precautions: &[
            "DASH diet",
            "Reduce sodium (<2.3g/day)",
            "Quit smoking",
        ],
        medications: &[
            "Lisinopril",
            "Amlodipine",
            "Losartan",
            "Hydrochlorothiazide",
        ],
        home_remedies: &[
            "Hibiscus tea",
            "Garlic",
            "Beetroot juice",
            "Meditation/Yoga",
        ],
    },
    ConditionEntry {
        alias: "heart_disease",
        name: "Coronary Artery Disease",
        group: "Chronic & Lifestyle",
        causes: &[
            "Plaque buildup (Cholesterol)",
            "Smoking",
            "High BP",
            "Diabetes",
        ],
        symptoms: &[
            "Chest pain (Angina)",
            "Shortness of breath",
            "Fatigue",
            "Heart palpitations",
        ],
        precautions: &[
            "Heart-healthy diet",
            "Regular cardio",
            "Stress management",
        ],
        medications: &[
            "Atorvastatin",
            "Aspirin",
            "Beta-blockers (Metoprolol)",
            "Nitroglycerin",
        ],
        home_remedies: &[
            "Omega-3 rich foods (Fish/Flax)",
            "Garlic",
            "Green tea",
            "Arjuna bark powder",
        ],
    },
    ConditionEntry {
        alias: "kidney_stone",
        name: "Kidney Stones (Renal Calculi)",
        group: "Chronic & Lifestyle",
        causes: &[
            "Dehydration",
            "High oxalate diet",
            "Obesity",
            "Family history",
        ],
        symptoms: &[
            "Severe side/back pain",
            "Blood in urine",
            "Nausea",
            "Frequent urination",
        ],
        precautions: &[
            "Drink 3L+ water/day",
            "Limit salt",
            "Limit animal protein",
        ],
        medications: &[
            "Tamsulosin (to relax ureter)",
            "Pain relievers (Ketorolac)",
            "Potassium citrate",
        ],
        home_remedies: &[
            "Lemon juice + Olive oil",
            "Apple cider vinegar",
            "Kidney bean broth",
            "Basil juice",
        ],
    },
    ConditionEntry {
        alias: "gerd",
        name: "GERD (Acid Reflux)",
        group: "Chronic & Lifestyle",
        causes: &[
            "Weak esophageal sphincter",
            "Obesity",
            "Spicy food",
            "Late eating",
        ],
        symptoms: &[
            "Heartburn",
            "Regurgitation",
            "Chest pain",
            "Lump in throat",
        ],
        precautions: &[
            "Eat small meals",
            "Don't lie down after eating",
            "Elevate head of bed",
        ],
        medications: &[
            "Omeprazole",
            "Famotidine",
            "Antacids (Tums/Gaviscon)",
        ],
        home_remedies: &[
            "Aloe vera juice",
            "Ginger tea",
            "Chewing gum (increases saliva)",
            "Baking soda in water",
        ],
    },
    // Neurological & Mental
    ConditionEntry {
        alias: "migraine",
        name: "Migraine",
        group: "Neurological & Mental",
        causes: &[
            "Hormonal changes",
            "Triggers (wine, cheese)",
            "Stress",
            "Weather",
        ],
        symptoms: &[
            "Unilateral throbbing pain",
            "Aura (visual starts)",
            "Nausea",
            "Light sensitivity",
        ],
        precautions: &[
            "Regular sleep schedule",
            "Hydration",
            "Magnesium supplements",
        ],
        medications: &[
            "Sumatriptan",
            "Rizatriptan",
            "Topiramate (preventive)",
            "Excedrin",
        ],
        home_remedies: &[
            "Lavender oil inhalation",
            "Ginger tea for nausea",
            "Cold compress on neck",
            "Dark room rest",
        ],
    },
    ConditionEntry {
        alias: "alzheimer",
        name: "Alzheimer's Disease",
        group: "Neurological & Mental",
        causes: &[
            "Amyloid plaques",
            "Tau tangles",
            "Genetics (APOE-e4)",
            "Age",
        ],
        symptoms: &[
            "Short-term memory loss",
            "Confusion about time/place",
            "Word-finding difficulty",
            "Mood changes",
        ],
        precautions: &[
            "Cognitive stimulation",
            "Mediterranean diet",
            "Social engagement",
        ],
        medications: &[
            "Donepezil",
            "Memantine",
            "Rivastigmine",
        ],
        home_remedies: &[
            "Coconut oil (MCTs)",
            "Turmeric (Curcumin)",
            "Omega-3 fatty acids",
            "Music therapy",
        ],
    },
    ConditionEntry {
        alias: "depression",
        name: "Major Depressive Disorder",
        group: "Neurological & Mental",
        causes: &[
            "Neurotransmitter imbalance",
            "Trauma",
            "Chronic illness",
            "Genetics",
        ],
        symptoms: &[
            "Persistent sadness",
            "Loss of interest (Anhedonia)",
            "Changes in sleep/appetite",
            "Fatigue",
        ],
        precautions: &[
            "Regular routine",
            "Avoid isolation",
            "Exercise (natural endorphins)",
        ],
        medications: &[
            "Sertraline (Zoloft)",
            "Fluoxetine (Prozac)",
            "Escitalopram",
            "Bupropion",
        ],
        home_remedies: &[
            "St. John's Wort (consult doctor)",
            "Saffron extract",
            "Omega-3s",
            "Light therapy",
        ],
    },
    ConditionEntry {
        alias: "anxiety",
        name: "Generalized Anxiety Disorder",
        group: "Neurological & Mental",
        causes: &[
            "Stress pickup",
            "Brain chemistry",
            "Genetics",
        ],
        symptoms: &[
            "Excessive worry",
            "Restlessness",
            "Rapid heart rate",
            "Insomnia",
        ],
        precautions: &[
            "Limit caffeine/alcohol",
            "Sleep hygiene",
            "Stress management",
        ],
        medications: &[
            "Buspirone",
            "Escitalopram",
            "Alprazolam (short-term)",
        ],
        home_remedies: &[
            "Chamomile tea",
            "Ashwagandha",
            "Valerian root",
            "Box breathing technique",
        ],
    },
    // Skin & Others
    ConditionEntry {
        alias: "acne",
        name: "Acne Vulgaris",
        group: "Skin & Others",
        causes: &[
            "Clogged pores",
            "Bacteria (C. acnes)",
            "Hormones",
            "Diet",
        ],
        symptoms: &[
            "Pimples",
            "Blackheads",
            "Cysts",
            "Oily skin",
        ],
        precautions: &[
            "Don't touch face",
            "Non-comedogenic products",
            "Clean pillowcases",
        ],
        medications: &[
            "Benzoyl Peroxide",
            "Salicylic Acid",
            "Tretinoin",
            "Doxycycline",
        ],
        home_remedies: &[
            "Tea tree oil (diluted)",
            "Honey mask",
            "Green tea extract application",
            "Zinc supplements",
        ],
    },
    ConditionEntry {
        alias: "eczema",
        name: "Eczema (Atopic Dermatitis)",
        group: "Skin & Others",
        causes: &[
            "Immune system overreaction",
            "Dry skin",
            "Irritants",
        ],
        symptoms: &[
            "Itchy, red, cracked skin",
            "Inflammation",
            "Patches",
        ],
        precautions: &[
            "Avoid harsh soaps",
            "Moisturize frequently",
            "Wear cotton",
        ],
        medications: &[
            "Hydrocortisone cream",
            "Tacrolimus ointment",
            "Antihistamines",
        ],
        home_remedies: &[
            "Colloidal oatmeal bath",
            "Coconut oil",
            "Aloe vera",
            "Apple cider vinegar bath",
        ],
    },
    ConditionEntry {
        alias: "conjunctivitis",
        name: "Conjunctivitis (Pink Eye)",
        group: "Skin & Others",
        causes: &[
            "Viruses",
            "Bacteria",
            "Allergies",
        ],
        symptoms: &[
            "Redness",
            "Gritty feeling",
            "Discharge/Crusting",
            "Tearing",
        ],
        precautions: &[
            "Wash hands",
            "Don't share towels/makeup",
            "Discard old lenses",
        ],
        medications: &[
            "Antibiotic drops (Moxifloxacin)",
            "Antihistamine drops",
            "Artificial tears",
        ],
        home_remedies: &[
            "Warm compress (for bacterial)",
            "Cold compress (for allergic)",
            "Honey water drops (traditional)",
            "Rose water",
        ],
    },
    ConditionEntry {
        alias: "anemia",
        name: "Iron Deficiency Anemia",
        group: "Skin & Others",
        causes: &[
            "Blood loss",
            "Poor diet",
            "Absorption issues",
        ],
        symptoms: &[
            "Fatigue",
            "Pale skin",
            "Cold hands",
            "Brittleness nails",
        ],
        precautions: &[
            "Dietary changes",
            "Treat underlying bleeding",
        ],
        medications: &[
            "Ferrous Sulfate",
            "Iron Dextran",
            "Vitamin C (aids absorption)",
        ],
        home_remedies: &[
            "Spinach and legumes",
            "Jaggery",
            "Cooking in cast iron",
            "Beetroot juice",
        ],
    },
    ConditionEntry {
        alias: "uti",
        name: "Urinary Tract Infection (UTI)",
        group: "Skin & Others",
        causes: &[
            "E. coli bacteria",
            "Dehydration",
            "Holding urine",
        ],
        symptoms: &[
            "Burning urination",
            "Frequent urge",
            "Cloudy urine",
            "Pelvic pain",
        ],
        precautions: &[
            "Hydration",
            "Wipe front to back",
            "Urinate after sex",
        ],
        medications: &[
            "Nitrofurantoin",
            "Trimethoprim",
            "Ciprofloxacin",
        ],
        home_remedies: &[
            "Cranberry juice (unsweetened)",
            "D-Mannose",
            "Probiotics",
            "Plenty of water",
        ],
    },
];
