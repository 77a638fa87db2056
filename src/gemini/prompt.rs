use crate::models::{
    Content, EncodedImage, GenerateContentRequest, GenerationConfig, Modality, Part,
};

const BASE_INSTRUCTION: &str = "You will be given two images. The first is a person, the second is an article of clothing. Your task is to perform a virtual try-on.";

const ISOLATE_GARMENT: &str = "First, you MUST isolate the clothing item from its background in the second image, and use only the isolated clothing in the steps that follow.";

const COMPOSITE_INSTRUCTION: &str = "Realistically place the clothing onto the person from the first image. The clothing must conform to the person's body shape, posture, and any visible perspective. It is crucial that you preserve the person's original appearance (face, hair, skin tone) and the background from the first image. The final result should be a single, high-quality, photorealistic image.";

pub fn build_instruction(remove_background: bool) -> String {
    let mut instruction = String::from(BASE_INSTRUCTION);
    if remove_background {
        instruction.push(' ');
        instruction.push_str(ISOLATE_GARMENT);
    }
    instruction.push(' ');
    instruction.push_str(COMPOSITE_INSTRUCTION);
    instruction
}

/// Parts go out in a fixed order: person, outfit, instruction. The reply may
/// carry text as well as images so a refusal can be explained.
pub fn build_request(
    person: &EncodedImage,
    outfit: &EncodedImage,
    remove_background: bool,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part::image(person),
                Part::image(outfit),
                Part::text(build_instruction(remove_background)),
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec![Modality::Image, Modality::Text],
        },
    }
}
