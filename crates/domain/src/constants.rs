//! Application constants
//!
//! Keyword rules used to resolve semantic fields against board column titles,
//! and the status vocabularies the KPI rules compare against. Every entry is
//! lower-case; matching happens on lower-cased titles and statuses.

// Deal board keyword rules (first matching column wins)
pub const DEAL_VALUE_KEYWORDS: &[&str] = &["value", "amount", "budget", "price"];
pub const DEAL_STAGE_KEYWORDS: &[&str] = &["stage", "status"];
pub const DEAL_SECTOR_KEYWORDS: &[&str] = &["sector", "industry", "vertical"];
pub const DEAL_PROBABILITY_KEYWORDS: &[&str] = &["probability", "confidence", "%"];
pub const DEAL_CLOSE_DATE_KEYWORDS: &[&str] = &["close", "date", "timeline"];
pub const DEAL_OWNER_KEYWORDS: &[&str] = &["owner", "person"];

// Work order board keyword rules
pub const WORK_ORDER_STATUS_KEYWORDS: &[&str] = &["execution status", "wo status", "invoice status"];
pub const WORK_ORDER_ENERGY_KEYWORDS: &[&str] = &["nature of work", "type of work"];
pub const WORK_ORDER_START_KEYWORDS: &[&str] = &["probable start", "start date"];
pub const WORK_ORDER_END_KEYWORDS: &[&str] = &["probable end", "end date", "delivery date"];

// Field defaults
pub const DEFAULT_SECTOR: &str = "Unassigned";
pub const DEFAULT_WORK_ORDER_STATUS: &str = "Pending";

// Qualitative probability labels
pub const PROBABILITY_HIGH: u8 = 90;
pub const PROBABILITY_MEDIUM: u8 = 50;
pub const PROBABILITY_LOW: u8 = 20;

// Status vocabularies
pub const CLOSED_DEAL_STAGES: &[&str] = &["won", "lost", "done", "closed", "fulfilled"];
pub const COMPLETED_WORK_ORDER_STATUSES: &[&str] = &["done", "completed", "finished"];
/// Statuses that exempt a work order from the overdue-date check. Narrower
/// than [`COMPLETED_WORK_ORDER_STATUSES`]: "finished" is still date-checked.
pub const DELAY_EXEMPT_STATUSES: &[&str] = &["done", "completed"];
pub const DELAY_STATUS_MARKERS: &[&str] = &["delayed", "stuck", "issue"];

// Context rendering
pub const CONTEXT_TOP_ENTRIES: usize = 5;

// Data source query
pub const DEFAULT_MONDAY_API_URL: &str = "https://api.monday.com/v2";
pub const BOARD_ITEM_LIMIT: u32 = 500;

// Generation backends
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_HF_MODEL_URL: &str =
    "https://router.huggingface.co/mistralai/Mistral-7B-Instruct-v0.3";

// Timeouts (seconds)
pub const DEFAULT_MONDAY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 20;

// Server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
