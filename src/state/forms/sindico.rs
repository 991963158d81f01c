//! Membership application for building managers (síndicos)

use super::field::{ChoiceOption, FormField, Mask};
use super::options::{ESTADOS, LGPD_ACCEPTED, LGPD_LABEL, NOT_INFORMED};
use super::schema::{Check, FormSchema, Rule};

const TIPOS_ATUACAO: &[ChoiceOption] = &[
    ChoiceOption::new("morador", "Síndico morador"),
    ChoiceOption::new("profissional", "Síndico profissional"),
];

const TEMPOS_ATUACAO: &[ChoiceOption] = &[
    ChoiceOption::new("ate1", "Até 1 ano"),
    ChoiceOption::new("1a3", "1 a 3 anos"),
    ChoiceOption::new("3a5", "3 a 5 anos"),
    ChoiceOption::new("mais5", "Mais de 5 anos"),
];

/// Institutional commitments; all of them must be accepted
pub const COMPROMISSOS: &[&str] = &[
    "Reconhece a importância da governança estruturada como fundamento da gestão condominial.",
    "Compromete-se a atuar com ética, transparência e responsabilidade institucional na administração do patrimônio coletivo.",
    "Assume compromisso com a adoção progressiva das diretrizes e boas práticas estabelecidas pela ABRACS.",
    "Compromete-se a buscar capacitação contínua como instrumento de aprimoramento da função síndica.",
    "Declara ciência de que a associação representa responsabilidade institucional perante o setor.",
    "Autoriza análise técnica de enquadramento para fins de aprovação e certificação institucional.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SindicoField {
    Nome,
    Cpf,
    Telefone,
    Email,
    Cidade,
    Estado,
    TipoAtuacao,
    TempoAtuacao,
    NumCondominios,
    Formacao,
    Compromissos,
    Lgpd,
}

const KEYS: &[SindicoField] = &[
    SindicoField::Nome,
    SindicoField::Cpf,
    SindicoField::Telefone,
    SindicoField::Email,
    SindicoField::Cidade,
    SindicoField::Estado,
    SindicoField::TipoAtuacao,
    SindicoField::TempoAtuacao,
    SindicoField::NumCondominios,
    SindicoField::Formacao,
    SindicoField::Compromissos,
    SindicoField::Lgpd,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SindicoForm {
    pub nome: FormField,
    pub cpf: FormField,
    pub telefone: FormField,
    pub email: FormField,
    pub cidade: FormField,
    pub estado: FormField,
    pub tipo_atuacao: FormField,
    pub tempo_atuacao: FormField,
    pub num_condominios: FormField,
    pub formacao: FormField,
    pub compromissos: FormField,
    pub lgpd: FormField,
}

impl SindicoForm {
    pub fn new() -> Self {
        Self {
            nome: FormField::text("nome", "Nome completo *"),
            cpf: FormField::masked("cpf", "CPF *", Mask::Individual),
            telefone: FormField::masked("telefone", "Telefone *", Mask::Phone),
            email: FormField::text("email", "E-mail profissional *"),
            cidade: FormField::text("cidade", "Cidade *"),
            estado: FormField::choice("estado", "Estado *", ESTADOS),
            tipo_atuacao: FormField::choice("tipoAtuacao", "Tipo de atuação *", TIPOS_ATUACAO),
            tempo_atuacao: FormField::choice(
                "tempoAtuacao",
                "Tempo de atuação *",
                TEMPOS_ATUACAO,
            ),
            num_condominios: FormField::text(
                "numCondominios",
                "Nº de condomínios administrados *",
            ),
            formacao: FormField::text(
                "formacao",
                "Formação relacionada à gestão condominial",
            ),
            compromissos: FormField::checklist(
                "compromissos",
                "Declaração de Adesão à Governança ABRACS *",
                COMPROMISSOS,
            ),
            lgpd: FormField::flag("lgpd", LGPD_LABEL),
        }
    }
}

impl Default for SindicoForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSchema for SindicoForm {
    type Key = SindicoField;

    const TITLE: &'static str = "Solicitação de Associação – Síndico";
    const SUBJECT: &'static str = "Nova Solicitação de Associação - Síndico";
    const CONFIRMATION: &'static str = "Sua solicitação de associação foi enviada para análise \
institucional. Entraremos em contato em breve.";
    const SUBMIT_LABEL: &'static str = "Enviar Solicitação para Análise";

    fn keys() -> &'static [SindicoField] {
        KEYS
    }

    fn field(&self, key: SindicoField) -> &FormField {
        match key {
            SindicoField::Nome => &self.nome,
            SindicoField::Cpf => &self.cpf,
            SindicoField::Telefone => &self.telefone,
            SindicoField::Email => &self.email,
            SindicoField::Cidade => &self.cidade,
            SindicoField::Estado => &self.estado,
            SindicoField::TipoAtuacao => &self.tipo_atuacao,
            SindicoField::TempoAtuacao => &self.tempo_atuacao,
            SindicoField::NumCondominios => &self.num_condominios,
            SindicoField::Formacao => &self.formacao,
            SindicoField::Compromissos => &self.compromissos,
            SindicoField::Lgpd => &self.lgpd,
        }
    }

    fn field_mut(&mut self, key: SindicoField) -> &mut FormField {
        match key {
            SindicoField::Nome => &mut self.nome,
            SindicoField::Cpf => &mut self.cpf,
            SindicoField::Telefone => &mut self.telefone,
            SindicoField::Email => &mut self.email,
            SindicoField::Cidade => &mut self.cidade,
            SindicoField::Estado => &mut self.estado,
            SindicoField::TipoAtuacao => &mut self.tipo_atuacao,
            SindicoField::TempoAtuacao => &mut self.tempo_atuacao,
            SindicoField::NumCondominios => &mut self.num_condominios,
            SindicoField::Formacao => &mut self.formacao,
            SindicoField::Compromissos => &mut self.compromissos,
            SindicoField::Lgpd => &mut self.lgpd,
        }
    }

    fn rules() -> Vec<Rule<SindicoField>> {
        use SindicoField::*;
        vec![
            Rule::new(Nome, Check::Filled, "Nome é obrigatório"),
            Rule::new(Cpf, Check::IndividualId, "CPF inválido"),
            Rule::new(Telefone, Check::Filled, "Telefone é obrigatório"),
            Rule::new(Email, Check::Email, "E-mail inválido"),
            Rule::new(Cidade, Check::Filled, "Cidade é obrigatória"),
            Rule::new(Estado, Check::Chosen, "Estado é obrigatório"),
            Rule::new(TipoAtuacao, Check::Chosen, "Selecione o tipo de atuação"),
            Rule::new(TempoAtuacao, Check::Chosen, "Selecione o tempo de atuação"),
            Rule::new(
                NumCondominios,
                Check::Filled,
                "Informe o número de condomínios",
            ),
            Rule::new(
                Compromissos,
                Check::AllChecked,
                "Todos os compromissos são obrigatórios",
            ),
            Rule::new(Lgpd, Check::Accepted, "Autorização LGPD é obrigatória"),
        ]
    }

    fn payload(&self) -> Vec<(String, String)> {
        let selected_label = |field: &FormField| {
            field
                .selected()
                .map(|option| option.label)
                .unwrap_or_default()
        };

        [
            ("Nome Completo", self.nome.as_text()),
            ("CPF", self.cpf.as_text()),
            ("Telefone", self.telefone.as_text()),
            ("E-mail", self.email.as_text()),
            ("Cidade", self.cidade.as_text()),
            ("Estado", selected_label(&self.estado)),
            ("Tipo de Atuação", selected_label(&self.tipo_atuacao)),
            ("Tempo de Atuação", selected_label(&self.tempo_atuacao)),
            (
                "Número de Condomínios Administrados",
                self.num_condominios.as_text(),
            ),
            (
                "Formação em Gestão Condominial",
                self.formacao.text_or(NOT_INFORMED),
            ),
        ]
        .into_iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .chain([
            (
                "Compromissos Institucionais Aceitos".to_string(),
                self.compromissos.checked_bullets().unwrap_or_default(),
            ),
            ("Autorização LGPD".to_string(), LGPD_ACCEPTED.to_string()),
        ])
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::fixtures::filled_sindico as filled;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_cover_every_field_once() {
        let form = SindicoForm::new();
        let mut names: Vec<&str> = SindicoForm::keys()
            .iter()
            .map(|k| form.field(*k).name)
            .collect();
        assert_eq!(names.len(), 12);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = SindicoForm::new();
        assert_eq!(form.nome.as_text(), "");
        assert!(form.estado.selected().is_none());
        assert_eq!(form.compromissos.checked(), &[false; 6]);
        assert!(!form.lgpd.as_flag());
    }

    #[test]
    fn test_masked_fields() {
        let form = filled();
        assert_eq!(form.cpf.as_text(), "529.982.247-25");
        assert_eq!(form.telefone.as_text(), "(81) 98765-4321");
    }

    #[test]
    fn test_every_default_rule_passes_on_filled_form() {
        let form = filled();
        for rule in SindicoForm::rules() {
            assert!(rule.passes(&form), "{:?}", rule.field);
        }
    }

    #[test]
    fn test_formacao_is_optional() {
        assert!(!SindicoForm::rules()
            .iter()
            .any(|r| r.field == SindicoField::Formacao));
    }

    #[test]
    fn test_payload() {
        let form = filled();
        let expected: Vec<(String, String)> = vec![
            ("Nome Completo", "Maria Silva"),
            ("CPF", "529.982.247-25"),
            ("Telefone", "(81) 98765-4321"),
            ("E-mail", "maria@exemplo.com"),
            ("Cidade", "Recife"),
            ("Estado", "PE"),
            ("Tipo de Atuação", "Síndico profissional"),
            ("Tempo de Atuação", "3 a 5 anos"),
            ("Número de Condomínios Administrados", "3"),
            ("Formação em Gestão Condominial", "Não informado"),
        ]
        .into_iter()
        .map(|(l, v)| (l.to_string(), v.to_string()))
        .collect();

        let payload = form.payload();
        assert_eq!(payload[..10].to_vec(), expected);
        assert_eq!(payload[10].0, "Compromissos Institucionais Aceitos");
        assert!(payload[10].1.starts_with("• Reconhece a importância"));
        assert_eq!(payload[10].1.matches("\n• ").count(), 5);
        assert_eq!(
            payload[11],
            ("Autorização LGPD".to_string(), "Sim, autorizado".to_string())
        );
    }

    #[test]
    fn test_submission_subject() {
        let submission = filled().submission();
        assert_eq!(submission.subject(), "Nova Solicitação de Associação - Síndico");
        assert_eq!(submission.get("Cidade"), Some("Recife"));
    }
}
