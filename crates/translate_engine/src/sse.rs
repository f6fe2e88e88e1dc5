//! Incremental decoder for `text/event-stream` bodies as sent by
//! chat-completions endpoints.

/// A decoded server-sent event of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseFrame {
    /// Payload of a `data:` line.
    Data(String),
    /// The `data: [DONE]` terminator.
    Done,
}

/// Splits a byte stream into lines and extracts `data:` payloads.
///
/// Lines are cut on raw bytes before UTF-8 decoding, so a multi-byte
/// character split across network chunks is reassembled intact.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(chunk);
        let mut frames = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(frame) = parse_line(&line[..line.len() - 1]) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Flushes a trailing line that was not newline-terminated.
    pub fn finish(&mut self) -> Vec<SseFrame> {
        let rest = std::mem::take(&mut self.buffer);
        parse_line(&rest).into_iter().collect()
    }
}

fn parse_line(line: &[u8]) -> Option<SseFrame> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let payload = line.strip_prefix(b"data:")?;
    let payload = payload.strip_prefix(b" ").unwrap_or(payload);
    let text = String::from_utf8_lossy(payload);
    let text = text.trim();
    if text.is_empty() {
        None
    } else if text == "[DONE]" {
        Some(SseFrame::Done)
    } else {
        Some(SseFrame::Data(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{SseDecoder, SseFrame};

    #[test]
    fn data_lines_are_extracted_and_others_skipped() {
        let mut decoder = SseDecoder::new();
        let frames = decoder.push(b": keep-alive\nevent: message\ndata: {\"a\":1}\n\ndata: [DONE]\n");
        assert_eq!(
            frames,
            vec![SseFrame::Data("{\"a\":1}".to_string()), SseFrame::Done]
        );
    }

    #[test]
    fn lines_split_across_chunks_are_joined() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(b"data: {\"x\":").is_empty());
        let frames = decoder.push(b"\"y\"}\r\n");
        assert_eq!(frames, vec![SseFrame::Data("{\"x\":\"y\"}".to_string())]);
    }

    #[test]
    fn multibyte_characters_survive_chunk_boundaries() {
        let line = "data: 你好\n".as_bytes();
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(&line[..8]).is_empty());
        let frames = decoder.push(&line[8..]);
        assert_eq!(frames, vec![SseFrame::Data("你好".to_string())]);
    }

    #[test]
    fn finish_flushes_unterminated_line() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(b"data:[DONE]").is_empty());
        assert_eq!(decoder.finish(), vec![SseFrame::Done]);
        assert!(decoder.finish().is_empty());
    }
}
