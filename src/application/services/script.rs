//! All assistant copy lives here as data. The opening burst and the reset
//! burst consume the same [`Script`] value, so the two call sites can never
//! drift apart.

/// An ordered series of assistant lines played by the announcer.
#[derive(Debug, Clone)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The fixed opening burst. After the final line the qualifying question is
/// answered with quick replies, not free text.
pub fn opening_script() -> Script {
    Script::new(vec![
        "Olá, seja bem vindo".to_string(),
        "Sou atendente virtual da Redshark e vou iniciar seu atendimento...".to_string(),
        "Antes de iniciar, me conta mais sobre o que procura...".to_string(),
        "Você utiliza ergogênico hoje?".to_string(),
    ])
}

pub(crate) const ASK_NAME: &str = "Perfeito! Agora preciso do seu nome completo:";
pub(crate) const ASK_EMAIL: &str = "Ótimo! Agora preciso do seu email:";
pub(crate) const CONFIRMATION: &str = "✅ Perfeito! Seus dados foram registrados com sucesso!";

pub(crate) fn ask_phone(name: &str) -> String {
    format!(
        "Prazer em conhecê-lo, {}! 😊 Agora, pode me informar seu telefone?",
        name
    )
}
