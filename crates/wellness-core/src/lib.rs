//! Wellness Core Library
//!
//! Local-first wellness assistant: rule-based chat, condition lookup with
//! encyclopedia enrichment, and a health metric log with a fitness score.
//!
//! # Architecture
//!
//! ```text
//!   chat text ──► IntentMatcher ──► canned reply ──► ChatSession
//!                     │
//!                  Lexicon ◄──────────────┐
//!                                         │ curated record (wins)
//!   condition ──► ConditionLookup ────────┤
//!                     │                   │ article text (fallback)
//!                     └──► EncyclopediaClient ──► Extractor
//!
//!   metric input ──► Database (kv_store JSON) ──► LatestVitals ──► FitnessScore
//! ```
//!
//! # Core Principle
//!
//! **Nothing here is medical advice.** Every condition result carries the
//! disclaimer, and emergency phrases always win over any other reply.
//!
//! # Modules
//!
//! - [`assistant`]: Intent matching and chat history
//! - [`lexicon`]: Built-in keyword tables and curated condition records
//! - [`enrichment`]: Encyclopedia client and the condition merger
//! - [`db`]: SQLite key-value store for metrics and the user goal
//! - [`fitness`]: Fitness score from the latest vitals
//! - [`models`]: Domain types (ChatMessage, ConditionInfo, HealthMetricReading, etc.)

pub mod assistant;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod fitness;
pub mod lexicon;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use assistant::{ChatSession, Intent, IntentMatcher, RandomSource};
pub use config::WellnessConfig;
pub use db::Database;
pub use enrichment::{ConditionLookup, EncyclopediaClient, WikipediaClient};
pub use fitness::compute_score;
pub use lexicon::Lexicon;
pub use models::{
    ChatMessage, ConditionInfo, ConditionRecord, FitnessScore, HealthMetricReading, LatestVitals,
    MetricCategory, ScoreStatus, StorageData,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum WellnessError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<db::DbError> for WellnessError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::InvalidMetric(msg) => WellnessError::InvalidInput(msg),
            other => WellnessError::DatabaseError(other.to_string()),
        }
    }
}

impl From<enrichment::EnrichmentError> for WellnessError {
    fn from(e: enrichment::EnrichmentError) -> Self {
        WellnessError::NetworkError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for WellnessError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        WellnessError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

fn parse_category(category: &str) -> Result<MetricCategory, WellnessError> {
    category.parse().map_err(WellnessError::InvalidInput)
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a wellness store at the given path.
#[uniffi::export]
pub fn open_wellness(path: String) -> Result<Arc<WellnessCore>, WellnessError> {
    let db = Database::open(&path)?;
    WellnessCore::from_config(db, &WellnessConfig::from_env())
}

/// Open the store named by `WELLNESS_DB_PATH`, in memory when it is unset.
#[uniffi::export]
pub fn open_wellness_from_env() -> Result<Arc<WellnessCore>, WellnessError> {
    let config = WellnessConfig::from_env();
    let db = Database::from_config(&config)?;
    WellnessCore::from_config(db, &config)
}

/// Create an in-memory wellness store (for testing).
#[uniffi::export]
pub fn open_wellness_in_memory() -> Result<Arc<WellnessCore>, WellnessError> {
    let db = Database::open_in_memory()?;
    WellnessCore::from_config(db, &WellnessConfig::from_env())
}

/// Install the log subscriber. Returns false if one was already installed.
#[uniffi::export]
pub fn enable_logging() -> bool {
    logging::init_logging()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe assistant wrapper for FFI.
#[derive(uniffi::Object)]
pub struct WellnessCore {
    db: Arc<Mutex<Database>>,
    session: Mutex<ChatSession>,
    rng: Mutex<StdRng>,
    lexicon: Lexicon,
    lookup: ConditionLookup<Box<dyn EncyclopediaClient>>,
}

impl WellnessCore {
    /// Build with the encyclopedia client described by `config`.
    pub fn from_config(db: Database, config: &WellnessConfig) -> Result<Arc<Self>, WellnessError> {
        let client = WikipediaClient::from_config(config)?;
        Ok(Self::with_client(db, Box::new(client), config))
    }

    /// Build with any encyclopedia client (mock, alternate wiki, ...).
    pub fn with_client(
        db: Database,
        client: Box<dyn EncyclopediaClient>,
        config: &WellnessConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            db: Arc::new(Mutex::new(db)),
            session: Mutex::new(ChatSession::new()),
            rng: Mutex::new(StdRng::from_entropy()),
            lexicon: Lexicon::new(),
            lookup: ConditionLookup::with_extraction(client, config.extraction),
        })
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl WellnessCore {
    // =========================================================================
    // Chat Operations
    // =========================================================================

    /// Send a chat message. Blank input returns `None` and records nothing.
    pub fn send_chat_message(&self, text: String) -> Result<Option<FfiChatExchange>, WellnessError> {
        let mut rng = self.rng.lock()?;
        let mut session = self.session.lock()?;
        let exchange = session.send_message(&self.lexicon, &text, &mut *rng);
        Ok(exchange.map(|(user, reply)| FfiChatExchange {
            user: user.into(),
            reply: reply.into(),
        }))
    }

    /// Full chat history, oldest first.
    pub fn chat_history(&self) -> Result<Vec<FfiChatMessage>, WellnessError> {
        let session = self.session.lock()?;
        Ok(session.messages().iter().cloned().map(|m| m.into()).collect())
    }

    /// Start over with only the welcome message.
    pub fn reset_chat(&self) -> Result<(), WellnessError> {
        let mut session = self.session.lock()?;
        *session = ChatSession::new();
        Ok(())
    }

    // =========================================================================
    // Condition Operations
    // =========================================================================

    /// Look up a condition and record the exchange in the chat history.
    ///
    /// Never fails on network problems; those degrade to curated-only or
    /// not-found results.
    pub async fn lookup_condition(&self, query: String) -> Result<FfiConditionInfo, WellnessError> {
        let info = self.lookup.lookup(&self.lexicon, &query).await;

        let mut session = self.session.lock()?;
        session.record_lookup(&query, info.clone());
        Ok(info.into())
    }

    /// Curated conditions grouped for browsing.
    pub fn disease_directory(&self) -> FfiDiseaseDirectory {
        self.lexicon.directory().into()
    }

    // =========================================================================
    // Metric Operations
    // =========================================================================

    /// Log a numeric reading.
    pub fn log_metric(
        &self,
        category: String,
        value: f64,
        unit: String,
    ) -> Result<FfiMetricReading, WellnessError> {
        let category = parse_category(&category)?;
        let db = self.db.lock()?;
        let reading = db.log_metric(category, value, &unit)?;
        Ok(reading.into())
    }

    /// Log a reading typed by the user. Non-numeric input returns `None`.
    pub fn log_metric_input(
        &self,
        category: String,
        raw: String,
        unit: String,
    ) -> Result<Option<FfiMetricReading>, WellnessError> {
        let category = parse_category(&category)?;
        let db = self.db.lock()?;
        let reading = db.log_metric_input(category, &raw, &unit)?;
        Ok(reading.map(|r| r.into()))
    }

    /// History of every category.
    pub fn get_all_metrics(&self) -> Result<Vec<FfiMetricHistory>, WellnessError> {
        let db = self.db.lock()?;
        let metrics = db.get_all_metrics()?;
        Ok(metrics
            .into_iter()
            .map(|(category, readings)| FfiMetricHistory {
                category: category.as_str().to_string(),
                readings: readings.into_iter().map(|r| r.into()).collect(),
            })
            .collect())
    }

    /// History of one category, oldest first.
    pub fn get_metric_history(&self, category: String) -> Result<Vec<FfiMetricReading>, WellnessError> {
        let category = parse_category(&category)?;
        let db = self.db.lock()?;
        let history = db.get_history(category)?;
        Ok(history.into_iter().map(|r| r.into()).collect())
    }

    /// Fitness score from the latest vitals.
    pub fn compute_score(&self) -> Result<FfiFitnessScore, WellnessError> {
        let db = self.db.lock()?;
        let vitals = db.latest_vitals()?;
        Ok(fitness::compute_score(&vitals).into())
    }

    /// Store the user's goal.
    pub fn save_user_goal(&self, goal: String) -> Result<(), WellnessError> {
        let db = self.db.lock()?;
        db.save_user_goal(&goal)?;
        Ok(())
    }

    /// The user's goal, if set.
    pub fn get_user_goal(&self) -> Result<Option<String>, WellnessError> {
        let db = self.db.lock()?;
        Ok(db.get_user_goal()?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe condition lookup result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConditionInfo {
    pub title: String,
    pub summary: String,
    pub image_url: Option<String>,
    pub causes: Option<Vec<String>>,
    pub symptoms: Option<Vec<String>>,
    pub precautions: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
    pub home_remedies: Option<Vec<String>>,
    pub disease_knowledge: Option<Vec<String>>,
    pub disclaimer: String,
}

impl From<ConditionInfo> for FfiConditionInfo {
    fn from(info: ConditionInfo) -> Self {
        Self {
            title: info.title,
            summary: info.summary,
            image_url: info.image_url,
            causes: info.causes,
            symptoms: info.symptoms,
            precautions: info.precautions,
            medications: info.medications,
            home_remedies: info.home_remedies,
            disease_knowledge: info.disease_knowledge,
            disclaimer: info.disclaimer,
        }
    }
}

/// FFI-safe chat message.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiChatMessage {
    pub id: String,
    pub text: String,
    /// "user" or "bot"
    pub role: String,
    /// RFC 3339
    pub timestamp: String,
    pub medical_data: Option<FfiConditionInfo>,
}

impl From<ChatMessage> for FfiChatMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            text: message.text,
            role: match message.role {
                models::MessageRole::User => "user".to_string(),
                models::MessageRole::Bot => "bot".to_string(),
            },
            timestamp: message.timestamp.to_rfc3339(),
            medical_data: message.medical_data.map(|d| d.into()),
        }
    }
}

/// A user message and the assistant's reply.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiChatExchange {
    pub user: FfiChatMessage,
    pub reply: FfiChatMessage,
}

/// FFI-safe metric reading.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMetricReading {
    pub id: String,
    pub category: String,
    pub value: f64,
    pub unit: String,
    /// RFC 3339
    pub recorded_at: String,
}

impl From<HealthMetricReading> for FfiMetricReading {
    fn from(reading: HealthMetricReading) -> Self {
        Self {
            id: reading.id,
            category: reading.category.as_str().to_string(),
            value: reading.value,
            unit: reading.unit,
            recorded_at: reading.recorded_at.to_rfc3339(),
        }
    }
}

/// All readings of one category.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMetricHistory {
    pub category: String,
    pub readings: Vec<FfiMetricReading>,
}

/// FFI-safe fitness score.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFitnessScore {
    pub total: u32,
    pub status: String,
    pub color: String,
    pub bmi: Option<f64>,
    /// One decimal, as displayed
    pub bmi_display: Option<String>,
    pub bmi_points: Option<u32>,
    pub sleep_points: Option<u32>,
    pub blood_pressure_points: Option<u32>,
    pub recommendation: String,
}

impl From<FitnessScore> for FfiFitnessScore {
    fn from(score: FitnessScore) -> Self {
        Self {
            total: score.total,
            status: score.status.label().to_string(),
            color: score.color.clone(),
            bmi: score.bmi,
            bmi_display: score.bmi_display(),
            bmi_points: score.breakdown.map(|b| b.bmi),
            sleep_points: score.breakdown.map(|b| b.sleep),
            blood_pressure_points: score.breakdown.map(|b| b.blood_pressure),
            recommendation: score.status.recommendation().to_string(),
        }
    }
}

/// FFI-safe condition group.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDiseaseCategory {
    pub name: String,
    pub diseases: Vec<String>,
}

/// FFI-safe condition directory.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDiseaseDirectory {
    pub title: String,
    pub description: String,
    pub categories: Vec<FfiDiseaseCategory>,
}

impl From<lexicon::DiseaseDirectory> for FfiDiseaseDirectory {
    fn from(directory: lexicon::DiseaseDirectory) -> Self {
        Self {
            title: directory.title,
            description: directory.description,
            categories: directory
                .categories
                .into_iter()
                .map(|c| FfiDiseaseCategory {
                    name: c.name,
                    diseases: c.diseases,
                })
                .collect(),
        }
    }
}
