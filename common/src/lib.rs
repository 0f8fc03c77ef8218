//! objdetect Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod config;
pub mod intake;
pub mod parser;
pub mod session;
pub mod cards;

pub use types::{AnalysisResult, DefectStatus};
pub use error::{Error, Result, UploadError, UPLOAD_FAILED_MESSAGE};
pub use config::{ClientConfig, API_BASE_URL_ENV, ANALYZE_PATH, DEFAULT_API_BASE_URL};
pub use intake::{is_accepted, mime_type_for, partition_accepted, Intake, ACCEPT_ATTRIBUTE, UPLOAD_FIELD_NAME};
pub use parser::{check_status, parse_analysis_body, parse_analysis_response, AnalysisResponse};
pub use session::{RequestTicket, SessionState, Settlement};
pub use cards::{result_cards, ResultCard};
