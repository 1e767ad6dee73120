use tracing::{debug, error};

use crate::interfaces::openai::OpenAiClient;

pub const DEFAULT_REPLY: &str = "Gracias por escribir a REDCO 🙌 ¿En qué puedo apoyarte?";

pub const MENU_FALLBACK_REPLY: &str = "Gracias por escribir a REDCO 🙌\n\
En este momento no puedo consultar la información.\n\
Opciones:\n\
1) Próximos cursos\n\
2) Costos e inscripción\n\
3) Descuentos REDCO\n\
4) Hablar con un asesor\n\
\n\
Responde con el número de la opción que te interese.";

const SYSTEM_PROMPT: &str = "Eres el asistente virtual de Red Científica Odontológica (REDCO). \
Responde en español, en tono cercano, profesional y empático. \
Sé claro y breve; ofrece pasos concretos. \
No des consejos clínicos personalizados. \
Objetivo: informar y facilitar inscripción a cursos y resolver dudas.";

const MODEL: &str = "gpt-4o";
const TEMPERATURE: f32 = 0.6;

/// Turns inbound user text into the reply sent back on WhatsApp.
///
/// Every path yields a reply: a missing backend or empty text gets
/// [`DEFAULT_REPLY`], a failed backend call gets [`MENU_FALLBACK_REPLY`].
#[derive(Debug, Clone)]
pub struct ReplyGenerator {
    backend: Option<OpenAiClient>,
}

impl ReplyGenerator {
    #[must_use]
    pub fn new(backend: Option<OpenAiClient>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn generate(&self, user_text: &str) -> String {
        let Some(backend) = &self.backend else {
            return DEFAULT_REPLY.to_owned();
        };
        if user_text.is_empty() {
            return DEFAULT_REPLY.to_owned();
        }

        match backend.complete(MODEL, SYSTEM_PROMPT, user_text, TEMPERATURE).await {
            Ok(output) => {
                let reply = output.trim();
                if reply.is_empty() {
                    debug!(model = MODEL, "completion returned empty output");
                    DEFAULT_REPLY.to_owned()
                } else {
                    reply.to_owned()
                }
            }
            Err(error) => {
                error!(model = MODEL, "completion request failed: {error}");
                MENU_FALLBACK_REPLY.to_owned()
            }
        }
    }
}
