//! Renderings of a finalized dialogue corpus.
//!
//! Every renderer is a pure function of the dialogue list (and the rescale
//! range where an output carries a 1..100 average). The `write_*` functions
//! serialize a rendering and hand it to `turnstat-store` for an atomic write.

mod chat;
mod records;
mod text;
mod write;

pub use chat::{build_chat, ChatDocument, ChatMessage, Conversation, MessageMetadata};
pub use records::{build_records, DialogueRecord, RecordDocument, TurnRecord};
pub use text::render_text;
pub use write::{write_chat, write_records, write_text, OutputFormat};
