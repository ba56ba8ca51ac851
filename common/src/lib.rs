//! PlatePal Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod payload;
pub mod gemini;
pub mod session;
pub mod progress;
pub mod card;

pub use types::{DishRecord, MenuResult, SpiceLevel, DEFAULT_PAIRING};
pub use error::{Error, Result, INTERPRETATION_FAILED_MESSAGE, UNKNOWN_ERROR_MESSAGE};
pub use prompts::{
    build_illustration_prompt, build_menu_prompt, menu_response_schema,
    DEFAULT_ILLUSTRATION_MODEL, DEFAULT_INTERPRET_MODEL, DEFAULT_TARGET_LANGUAGE,
    PLACEHOLDER_IMAGE_URL,
};
pub use parser::{extract_json, parse_menu_response};
pub use payload::EncodedImage;
pub use gemini::{
    build_illustration_request, build_menu_request, endpoint_url, menu_from_response,
    GeminiRequest, GeminiResponse, DEFAULT_API_BASE_URL,
};
pub use session::{CycleId, Phase, UploadSession};
pub use progress::UploadStage;
pub use card::{dish_count_heading, DishCardView, Illustration, SpiceMeter};
