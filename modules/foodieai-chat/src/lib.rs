pub mod context;
pub mod pipeline;
pub mod prompt;
pub mod query;
pub mod recommend;
pub mod traits;

pub use pipeline::{run_chat, ChatReply, FALLBACK_MODEL, PRIMARY_MODEL};
pub use traits::TextGenerator;
