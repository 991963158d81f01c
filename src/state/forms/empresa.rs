//! Membership application for companies serving condominiums

use super::field::{ChoiceOption, FormField, Mask};
use super::options::{ESTADOS, LGPD_ACCEPTED, LGPD_LABEL, NONE_SELECTED, NOT_INFORMED};
use super::schema::{Check, FormSchema, Rule};

/// Area whose selection requires `outra_area` to be filled
pub const OUTRA_AREA: &str = "Outro";

const AREAS_ATUACAO: &[ChoiceOption] = &[
    ChoiceOption::plain("Administradora"),
    ChoiceOption::plain("Jurídico"),
    ChoiceOption::plain("Contábil"),
    ChoiceOption::plain("Engenharia"),
    ChoiceOption::plain("Manutenção"),
    ChoiceOption::plain("Segurança"),
    ChoiceOption::plain("Tecnologia"),
    ChoiceOption::plain("Limpeza"),
    ChoiceOption::plain(OUTRA_AREA),
];

/// Compliance declarations; all of them must be accepted
pub const CONFORMIDADE: &[&str] = &[
    "Encontra-se regularmente constituída, com situação jurídica e fiscal compatível com o exercício de suas atividades.",
    "Compromete-se a manter conduta ética, transparência contratual e respeito às boas práticas no relacionamento com síndicos e condomínios.",
    "Declara que suas atividades são exercidas por profissionais tecnicamente habilitados, quando exigido por legislação específica.",
    "Autoriza a ABRACS a realizar análise documental para fins de enquadramento institucional e eventual concessão de chancela ou selo.",
    "Reconhece que a concessão de selo ou certificação está condicionada ao atendimento dos critérios estabelecidos pela entidade.",
];

/// Optional institutional interests
pub const INTERESSES: &[&str] = &[
    "Participar do Programa Oficial de Capacitação, mediante avaliação técnica e validação de conteúdo.",
    "Ministrar cursos, workshops ou treinamentos voltados à formação de síndicos e corpo diretivo.",
    "Integrar eventos institucionais de relacionamento e fóruns técnicos promovidos pela ABRACS.",
    "Solicitar avaliação para concessão do Selo Legado Condominial.",
    "Contribuir com debates técnicos e construção de boas práticas setoriais.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmpresaField {
    RazaoSocial,
    NomeFantasia,
    Cnpj,
    Cidade,
    Estado,
    Telefone,
    EmailInstitucional,
    Site,
    AreaAtuacao,
    OutraArea,
    ResponsavelNome,
    ResponsavelCargo,
    ResponsavelTelefone,
    ResponsavelEmail,
    Conformidade,
    Interesses,
    Lgpd,
}

const KEYS: &[EmpresaField] = &[
    EmpresaField::RazaoSocial,
    EmpresaField::NomeFantasia,
    EmpresaField::Cnpj,
    EmpresaField::Cidade,
    EmpresaField::Estado,
    EmpresaField::Telefone,
    EmpresaField::EmailInstitucional,
    EmpresaField::Site,
    EmpresaField::AreaAtuacao,
    EmpresaField::OutraArea,
    EmpresaField::ResponsavelNome,
    EmpresaField::ResponsavelCargo,
    EmpresaField::ResponsavelTelefone,
    EmpresaField::ResponsavelEmail,
    EmpresaField::Conformidade,
    EmpresaField::Interesses,
    EmpresaField::Lgpd,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpresaForm {
    pub razao_social: FormField,
    pub nome_fantasia: FormField,
    pub cnpj: FormField,
    pub cidade: FormField,
    pub estado: FormField,
    pub telefone: FormField,
    pub email_institucional: FormField,
    pub site: FormField,
    pub area_atuacao: FormField,
    pub outra_area: FormField,
    pub responsavel_nome: FormField,
    pub responsavel_cargo: FormField,
    pub responsavel_telefone: FormField,
    pub responsavel_email: FormField,
    pub conformidade: FormField,
    pub interesses: FormField,
    pub lgpd: FormField,
}

impl EmpresaForm {
    pub fn new() -> Self {
        Self {
            razao_social: FormField::text("razaoSocial", "Razão social *"),
            nome_fantasia: FormField::text("nomeFantasia", "Nome fantasia *"),
            cnpj: FormField::masked("cnpj", "CNPJ *", Mask::Organizational),
            cidade: FormField::text("cidade", "Cidade *"),
            estado: FormField::choice("estado", "Estado *", ESTADOS),
            telefone: FormField::masked("telefone", "Telefone *", Mask::Phone),
            email_institucional: FormField::text("emailInstitucional", "E-mail institucional *"),
            site: FormField::text("site", "Site"),
            area_atuacao: FormField::choice("areaAtuacao", "Área de atuação *", AREAS_ATUACAO),
            outra_area: FormField::text("outraArea", "Especifique a área (se \"Outro\")"),
            responsavel_nome: FormField::text("responsavelNome", "Nome do responsável *"),
            responsavel_cargo: FormField::text("responsavelCargo", "Cargo *"),
            responsavel_telefone: FormField::masked(
                "responsavelTelefone",
                "Telefone do responsável *",
                Mask::Phone,
            ),
            responsavel_email: FormField::text("responsavelEmail", "E-mail do responsável *"),
            conformidade: FormField::checklist(
                "conformidade",
                "Declarações de conformidade *",
                CONFORMIDADE,
            ),
            interesses: FormField::checklist(
                "interesses",
                "Interesses institucionais",
                INTERESSES,
            ),
            lgpd: FormField::flag("lgpd", LGPD_LABEL),
        }
    }

    /// Area reported to the relay: the free-text area when "Outro" is selected
    pub fn area_reported(&self) -> &str {
        match self.area_atuacao.selected() {
            Some(option) if option.value == OUTRA_AREA => self.outra_area.as_text(),
            Some(option) => option.label,
            None => "",
        }
    }
}

impl Default for EmpresaForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSchema for EmpresaForm {
    type Key = EmpresaField;

    const TITLE: &'static str = "Solicitação de Associação – Empresa";
    const SUBJECT: &'static str = "Nova Solicitação de Associação - Empresa";
    const CONFIRMATION: &'static str = "Sua solicitação de avaliação institucional foi enviada. \
Nossa equipe fará a análise e entrará em contato.";
    const SUBMIT_LABEL: &'static str = "Solicitar Avaliação Institucional";

    fn keys() -> &'static [EmpresaField] {
        KEYS
    }

    fn field(&self, key: EmpresaField) -> &FormField {
        match key {
            EmpresaField::RazaoSocial => &self.razao_social,
            EmpresaField::NomeFantasia => &self.nome_fantasia,
            EmpresaField::Cnpj => &self.cnpj,
            EmpresaField::Cidade => &self.cidade,
            EmpresaField::Estado => &self.estado,
            EmpresaField::Telefone => &self.telefone,
            EmpresaField::EmailInstitucional => &self.email_institucional,
            EmpresaField::Site => &self.site,
            EmpresaField::AreaAtuacao => &self.area_atuacao,
            EmpresaField::OutraArea => &self.outra_area,
            EmpresaField::ResponsavelNome => &self.responsavel_nome,
            EmpresaField::ResponsavelCargo => &self.responsavel_cargo,
            EmpresaField::ResponsavelTelefone => &self.responsavel_telefone,
            EmpresaField::ResponsavelEmail => &self.responsavel_email,
            EmpresaField::Conformidade => &self.conformidade,
            EmpresaField::Interesses => &self.interesses,
            EmpresaField::Lgpd => &self.lgpd,
        }
    }

    fn field_mut(&mut self, key: EmpresaField) -> &mut FormField {
        match key {
            EmpresaField::RazaoSocial => &mut self.razao_social,
            EmpresaField::NomeFantasia => &mut self.nome_fantasia,
            EmpresaField::Cnpj => &mut self.cnpj,
            EmpresaField::Cidade => &mut self.cidade,
            EmpresaField::Estado => &mut self.estado,
            EmpresaField::Telefone => &mut self.telefone,
            EmpresaField::EmailInstitucional => &mut self.email_institucional,
            EmpresaField::Site => &mut self.site,
            EmpresaField::AreaAtuacao => &mut self.area_atuacao,
            EmpresaField::OutraArea => &mut self.outra_area,
            EmpresaField::ResponsavelNome => &mut self.responsavel_nome,
            EmpresaField::ResponsavelCargo => &mut self.responsavel_cargo,
            EmpresaField::ResponsavelTelefone => &mut self.responsavel_telefone,
            EmpresaField::ResponsavelEmail => &mut self.responsavel_email,
            EmpresaField::Conformidade => &mut self.conformidade,
            EmpresaField::Interesses => &mut self.interesses,
            EmpresaField::Lgpd => &mut self.lgpd,
        }
    }

    fn rules() -> Vec<Rule<EmpresaField>> {
        use EmpresaField::*;
        vec![
            Rule::new(RazaoSocial, Check::Filled, "Razão social é obrigatória"),
            Rule::new(NomeFantasia, Check::Filled, "Nome fantasia é obrigatório"),
            Rule::new(Cnpj, Check::OrganizationalId, "CNPJ inválido"),
            Rule::new(Cidade, Check::Filled, "Cidade é obrigatória"),
            Rule::new(Estado, Check::Chosen, "Estado é obrigatório"),
            Rule::new(Telefone, Check::Filled, "Telefone é obrigatório"),
            Rule::new(EmailInstitucional, Check::Email, "E-mail inválido"),
            Rule::new(AreaAtuacao, Check::Chosen, "Área de atuação é obrigatória"),
            Rule::new(
                OutraArea,
                Check::FilledWhen {
                    field: AreaAtuacao,
                    value: OUTRA_AREA,
                },
                "Especifique a área",
            ),
            Rule::new(
                ResponsavelNome,
                Check::Filled,
                "Nome do responsável é obrigatório",
            ),
            Rule::new(ResponsavelCargo, Check::Filled, "Cargo é obrigatório"),
            Rule::new(ResponsavelTelefone, Check::Filled, "Telefone é obrigatório"),
            Rule::new(ResponsavelEmail, Check::Email, "E-mail inválido"),
            Rule::new(
                Conformidade,
                Check::AllChecked,
                "Todas as declarações são obrigatórias",
            ),
            Rule::new(Lgpd, Check::Accepted, "Autorização LGPD é obrigatória"),
        ]
    }

    fn payload(&self) -> Vec<(String, String)> {
        let estado = self
            .estado
            .selected()
            .map(|option| option.label)
            .unwrap_or_default();

        [
            ("Razão Social", self.razao_social.as_text()),
            ("Nome Fantasia", self.nome_fantasia.as_text()),
            ("CNPJ", self.cnpj.as_text()),
            ("Cidade", self.cidade.as_text()),
            ("Estado", estado),
            ("Telefone da Empresa", self.telefone.as_text()),
            ("E-mail Institucional", self.email_institucional.as_text()),
            ("Site", self.site.text_or(NOT_INFORMED)),
            ("Área de Atuação", self.area_reported()),
            ("Nome do Responsável", self.responsavel_nome.as_text()),
            ("Cargo do Responsável", self.responsavel_cargo.as_text()),
            ("Telefone do Responsável", self.responsavel_telefone.as_text()),
            ("E-mail do Responsável", self.responsavel_email.as_text()),
        ]
        .into_iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .chain([
            (
                "Declarações de Conformidade".to_string(),
                self.conformidade.checked_bullets().unwrap_or_default(),
            ),
            (
                "Interesses Institucionais".to_string(),
                self.interesses
                    .checked_bullets()
                    .unwrap_or_else(|| NONE_SELECTED.to_string()),
            ),
            ("Autorização LGPD".to_string(), LGPD_ACCEPTED.to_string()),
        ])
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::fixtures::filled_empresa as filled;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_cover_every_field_once() {
        let form = EmpresaForm::new();
        let mut names: Vec<&str> = EmpresaForm::keys()
            .iter()
            .map(|k| form.field(*k).name)
            .collect();
        assert_eq!(names.len(), 17);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn test_every_default_rule_passes_on_filled_form() {
        let form = filled();
        for rule in EmpresaForm::rules() {
            assert!(rule.passes(&form), "{:?}", rule.field);
        }
    }

    #[test]
    fn test_outra_area_required_only_for_outro() {
        let rule = EmpresaForm::rules()
            .into_iter()
            .find(|r| r.field == EmpresaField::OutraArea)
            .unwrap();

        let mut form = filled();
        assert!(rule.passes(&form));

        form.area_atuacao.select(AREAS_ATUACAO.len() - 1);
        assert!(!rule.passes(&form));

        form.outra_area.set_text("Paisagismo");
        assert!(rule.passes(&form));
    }

    #[test]
    fn test_area_reported() {
        let mut form = filled();
        assert_eq!(form.area_reported(), "Jurídico");
        form.area_atuacao.select(AREAS_ATUACAO.len() - 1);
        form.outra_area.set_text("Paisagismo");
        assert_eq!(form.area_reported(), "Paisagismo");
    }

    #[test]
    fn test_payload_fallbacks() {
        let payload = filled().submission();
        assert_eq!(payload.get("Site"), Some("Não informado"));
        assert_eq!(payload.get("Interesses Institucionais"), Some("Nenhum selecionado"));
        assert_eq!(payload.get("Autorização LGPD"), Some("Sim, autorizado"));
        assert_eq!(payload.get("CNPJ"), Some("11.222.333/0001-81"));
        assert_eq!(payload.get("Telefone da Empresa"), Some("(11) 3456-7890"));
    }

    #[test]
    fn test_payload_lists_checked_interests_only() {
        let mut form = filled();
        form.interesses.toggle_item(1);
        form.interesses.toggle_item(3);
        let submission = form.submission();
        assert_eq!(
            submission.get("Interesses Institucionais"),
            Some(
                "• Ministrar cursos, workshops ou treinamentos voltados à formação de síndicos e corpo diretivo.\n\
                 • Solicitar avaliação para concessão do Selo Legado Condominial."
            )
        );
    }

    #[test]
    fn test_payload_order_and_subject() {
        let submission = filled().submission();
        assert_eq!(submission.subject(), "Nova Solicitação de Associação - Empresa");
        let labels: Vec<&str> = submission.fields().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels.first(), Some(&"Razão Social"));
        assert_eq!(labels.last(), Some(&"Autorização LGPD"));
        assert_eq!(labels.len(), 16);
    }
}
