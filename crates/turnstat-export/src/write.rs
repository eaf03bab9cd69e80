use crate::chat::build_chat;
use crate::records::build_records;
use crate::text::render_text;
use std::path::Path;
use turnstat_aggregate::Scale;
use turnstat_core::Dialogue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Records,
    Chat,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Records,
        OutputFormat::Chat,
    ];

    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Text => "dialogues_output.txt",
            OutputFormat::Records => "dialogues_output.json",
            OutputFormat::Chat => "dialogues_chat_format.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Records => "json",
            OutputFormat::Chat => "chat",
        }
    }
}

pub fn write_text(path: &Path, dialogues: &[Dialogue]) -> anyhow::Result<()> {
    let out = render_text(dialogues);
    turnstat_store::write_atomic(path, out.as_bytes())?;
    tracing::info!(path = %path.display(), dialogues = dialogues.len(), "text format saved");
    Ok(())
}

pub fn write_records(
    path: &Path,
    dialogues: &[Dialogue],
    scale: &Scale,
    pretty: bool,
) -> anyhow::Result<()> {
    let doc = build_records(dialogues, scale);
    turnstat_store::write_atomic_with(path, |w| {
        if pretty {
            serde_json::to_writer_pretty(w, &doc)?;
        } else {
            serde_json::to_writer(w, &doc)?;
        }
        Ok(())
    })?;
    tracing::info!(path = %path.display(), dialogues = dialogues.len(), "json format saved");
    Ok(())
}

/// Chat documents are always pretty-printed.
pub fn write_chat(path: &Path, dialogues: &[Dialogue], scale: &Scale) -> anyhow::Result<()> {
    let doc = build_chat(dialogues, scale);
    turnstat_store::write_atomic_with(path, |w| {
        serde_json::to_writer_pretty(w, &doc)?;
        Ok(())
    })?;
    tracing::info!(path = %path.display(), conversations = dialogues.len(), "chat format saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnstat_core::read_from_text;

    const CORPUS: &str = "USER\tJ'aime les comédies.\tENTITY_NAME\t3,4\nSYSTEM\tok\tOTHER\nUSER\tOVERALL\tOTHER\t5";

    #[test]
    fn writes_all_three_formats() {
        let tmp = tempfile::tempdir().unwrap();
        let corpus = read_from_text(CORPUS).unwrap();
        let scale = Scale::default();

        let text_path = tmp.path().join(OutputFormat::Text.default_file_name());
        let json_path = tmp.path().join(OutputFormat::Records.default_file_name());
        let chat_path = tmp.path().join(OutputFormat::Chat.default_file_name());

        write_text(&text_path, &corpus.dialogues).unwrap();
        write_records(&json_path, &corpus.dialogues, &scale, true).unwrap();
        write_chat(&chat_path, &corpus.dialogues, &scale).unwrap();

        let text = std::fs::read_to_string(&text_path).unwrap();
        assert!(text.starts_with("DIALOGUE 1 (Average Score: 5.00)"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["total_dialogues"], 1);
        assert_eq!(json["dialogues"][0]["average_score_100"], 100.0);

        let chat: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&chat_path).unwrap()).unwrap();
        assert_eq!(chat["conversations"][0]["messages"][0]["role"], "user");
    }

    #[test]
    fn non_ascii_is_written_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let corpus = read_from_text(CORPUS).unwrap();
        let path = tmp.path().join("out.json");
        write_records(&path, &corpus.dialogues, &Scale::default(), false).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("comédies"));
        assert!(!raw.contains('\n'));
    }

    #[test]
    fn pretty_records_use_two_space_indent() {
        let tmp = tempfile::tempdir().unwrap();
        let corpus = read_from_text(CORPUS).unwrap();
        let path = tmp.path().join("out.json");
        write_records(&path, &corpus.dialogues, &Scale::default(), true).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"total_dialogues\": 1,"));
    }

    #[test]
    fn text_and_json_agree_on_tied_average() {
        let tmp = tempfile::tempdir().unwrap();
        let corpus = read_from_text("USER\ta\tASK\nUSER\tOVERALL\tOTHER\t1,1,1,1,1,1,1,2").unwrap();
        let scale = Scale::default();

        let text_path = tmp.path().join("out.txt");
        let json_path = tmp.path().join("out.json");
        let chat_path = tmp.path().join("chat.json");
        write_text(&text_path, &corpus.dialogues).unwrap();
        write_records(&json_path, &corpus.dialogues, &scale, false).unwrap();
        write_chat(&chat_path, &corpus.dialogues, &scale).unwrap();

        let text = std::fs::read_to_string(&text_path).unwrap();
        assert!(text.starts_with("DIALOGUE 1 (Average Score: 1.12)"));
        assert!(text.contains("(Average: 1.12)"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["dialogues"][0]["average_score"], 1.12);

        let chat: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&chat_path).unwrap()).unwrap();
        assert_eq!(chat["conversations"][0]["average_score"], 1.12);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["text", "json", "chat"]);
    }
}
