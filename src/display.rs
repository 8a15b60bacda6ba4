// 翻译结果输出
//
// 将手势序列渲染为终端文本或 JSON

use anyhow::Result;
use std::fmt::Write as _;

use crate::config::OutputFormat;
use crate::sign::{SignDescriptor, TranslationResult};

/// 空结果时提示的示例短语
pub const EXAMPLE_PHRASES: &[&str] = &["hello", "water", "thank you", "I need help"];

/// 渲染选项
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_original: bool,
    pub show_details: bool,
}

/// 渲染翻译结果
pub fn render(result: &TranslationResult, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => render_json(result, options.show_original),
        OutputFormat::Text => Ok(render_text(result, options)),
    }
}

fn render_json(result: &TranslationResult, show_original: bool) -> Result<String> {
    let value = if show_original {
        serde_json::json!({
            "originalText": result.original,
            "signs": result.signs,
        })
    } else {
        serde_json::json!({ "signs": result.signs })
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_text(result: &TranslationResult, options: &RenderOptions) -> String {
    let mut out = String::new();

    if result.is_empty() {
        out.push_str("Sign language translation will appear here\n");
        let examples = EXAMPLE_PHRASES
            .iter()
            .map(|p| format!("\"{}\"", p))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Try saying {}", examples);
        return out;
    }

    if options.show_original {
        let _ = writeln!(out, "Original Text: {}", result.original);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Sign Language Translation ({} signs):",
        result.signs.len()
    );

    for (index, sign) in result.signs.iter().enumerate() {
        render_sign(&mut out, index + 1, sign, options.show_details);
    }

    out
}

fn render_sign(out: &mut String, number: usize, sign: &SignDescriptor, show_details: bool) {
    let _ = writeln!(
        out,
        "{:>3}. {} {} - {}",
        number,
        sign.emoji,
        sign.word.to_uppercase(),
        sign.description
    );

    if show_details {
        let _ = writeln!(out, "     Hand Shape: {}", sign.hand_shape);
        let _ = writeln!(out, "     Movement:   {}", sign.movement);
        let _ = writeln!(out, "     Location:   {}", sign.location);
        let _ = writeln!(out, "     Practice:   {}", sign.visual_cue);
    }
}
