use crate::{
    error::TryOnError,
    models::{GenerateContentResponse, GeneratedImage, GenerationOutcome, Part},
};

/// Turns a model reply into an outcome.
///
/// A response with no candidate at all is usually a blocked prompt; its block
/// reason is reported as a refusal.
pub fn interpret(response: &GenerateContentResponse) -> GenerationOutcome {
    if response.candidates.is_empty() {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            log::warn!("Prompt blocked by the model: {}", reason);
            return GenerationOutcome::Failed(TryOnError::ModelRefused(format!(
                "Prompt blocked: {}",
                reason
            )));
        }
    }

    interpret_parts(response.first_candidate_parts())
}

/// The first inline image wins. Without one, any text is the model's
/// explanation; with neither, the reply is empty.
pub fn interpret_parts(parts: &[Part]) -> GenerationOutcome {
    let first_image = parts.iter().find_map(|part| match part {
        Part::InlineData { inline_data } => Some(inline_data),
        _ => None,
    });
    if let Some(inline) = first_image {
        log::debug!(
            "Model returned {} image ({} base64 chars)",
            inline.mime_type,
            inline.data.len()
        );
        return GenerationOutcome::Image(GeneratedImage::new(
            inline.mime_type.as_str(),
            inline.data.as_str(),
        ));
    }

    let diagnostic = parts
        .iter()
        .filter_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    if !diagnostic.is_empty() {
        log::warn!("Model answered with text only: {}", diagnostic);
        return GenerationOutcome::Failed(TryOnError::ModelRefused(diagnostic));
    }

    GenerationOutcome::Failed(TryOnError::NoImageData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, InlineData, PromptFeedback};

    fn image_part(mime_type: &str, data: &str) -> Part {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            },
        }
    }

    #[test]
    fn test_text_only_is_refusal() {
        let outcome = interpret_parts(&[Part::text("refused")]);
        match outcome.error() {
            Some(TryOnError::ModelRefused(text)) => assert_eq!(text, "refused"),
            other => panic!("expected refusal, got {:?}", other),
        }
        assert!(outcome.message().unwrap().contains("refused"));
    }

    #[test]
    fn test_image_then_text_ignores_text() {
        let outcome = interpret_parts(&[image_part("image/png", "AAAA"), Part::text("ignored")]);
        assert_eq!(
            outcome.image().unwrap().data_url(),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn test_no_parts_is_no_image_data() {
        let outcome = interpret_parts(&[]);
        assert!(matches!(outcome.error(), Some(TryOnError::NoImageData)));
    }

    #[test]
    fn test_text_before_image_still_yields_image() {
        let outcome = interpret_parts(&[Part::text("Here it is"), image_part("image/webp", "BBBB")]);
        assert_eq!(outcome.image().unwrap().media_type(), "image/webp");
    }

    #[test]
    fn test_first_of_several_images_wins() {
        let outcome = interpret_parts(&[
            image_part("image/png", "FIRST"),
            image_part("image/jpeg", "SECOND"),
        ]);
        assert_eq!(outcome.image().unwrap().payload(), "FIRST");
    }

    #[test]
    fn test_text_parts_are_space_joined_and_trimmed() {
        let outcome = interpret_parts(&[
            Part::text("  I cannot"),
            Part::Other(serde_json::json!({"thoughtSignature": "abc"})),
            Part::text("edit this photo. "),
        ]);
        match outcome.error() {
            Some(TryOnError::ModelRefused(text)) => assert_eq!(text, "I cannot edit this photo."),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_parts_are_skipped() {
        let outcome = interpret_parts(&[Part::text("a"), Part::text(""), Part::text("b")]);
        match outcome.error() {
            Some(TryOnError::ModelRefused(text)) => assert_eq!(text, "a b"),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_text_is_no_image_data() {
        let outcome = interpret_parts(&[Part::text("   ")]);
        assert!(matches!(outcome.error(), Some(TryOnError::NoImageData)));
    }

    #[test]
    fn test_blocked_prompt_is_refusal() {
        let response = GenerateContentResponse {
            candidates: Vec::new(),
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some("SAFETY".into()),
            }),
        };
        match interpret(&response).error() {
            Some(TryOnError::ModelRefused(text)) => assert_eq!(text, "Prompt blocked: SAFETY"),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn test_candidate_without_content_is_no_image_data() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some("IMAGE_SAFETY".into()),
            }],
            prompt_feedback: None,
        };
        assert!(matches!(
            interpret(&response).error(),
            Some(TryOnError::NoImageData)
        ));
    }
}
