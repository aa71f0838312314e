use serde::Serialize;

use crate::tokenizer::TokenKind;

use super::resolver::Resolution;
use super::shaping::ShapingRule;
use super::Segment;

/// One output segment with the reason it looks the way it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenTrace {
    pub kind: TokenKind,
    pub source: String,
    pub output: String,
    /// Byte offsets in the input.
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shaping: Vec<ShapingRule>,
}

impl TokenTrace {
    pub(crate) fn from_segment(segment: Segment, text: &str) -> Self {
        Self {
            kind: segment.kind,
            source: segment.source(text).to_string(),
            start: segment.span.start,
            end: segment.span.end,
            output: segment.output,
            resolution: segment.resolution,
            shaping: segment.shaping,
        }
    }

    /// One-line human-readable form, as printed by the CLI.
    pub fn describe(&self) -> String {
        let how = match &self.resolution {
            Some(Resolution::Phrase { key }) => format!("phrase `{key}`"),
            Some(Resolution::Dictionary {
                prefixes,
                root,
                suffixes,
            }) => {
                let mut parts: Vec<String> = prefixes.iter().map(|p| format!("{p}-")).collect();
                parts.push(format!("[{root}]"));
                parts.extend(suffixes.iter().map(|s| format!("-{s}")));
                format!("dictionary {}", parts.join(" "))
            }
            Some(Resolution::Fallback) => "fallback".to_string(),
            Some(Resolution::Unit) => "numeral + unit".to_string(),
            None => format!("{:?}", self.kind).to_lowercase(),
        };
        let mut line = format!("{:?} -> {:?}  ({how})", self.source, self.output);
        for rule in &self.shaping {
            line.push_str(&format!(" +{rule:?}").to_lowercase());
        }
        line
    }
}
