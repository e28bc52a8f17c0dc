//! Natural-language translation
//!
//! Turns free text into structured queries via an external model. The
//! engine never depends on a particular translator.

mod errors;
mod gemini;
mod prompt;
mod translator;

pub use errors::{TranslationError, TranslationResult};
pub use gemini::{GeminiTranslator, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use prompt::{build_prompt, parse_model_output, strip_code_fences};
pub use translator::{StaticTranslator, Translator};
