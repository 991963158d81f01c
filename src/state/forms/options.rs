//! Option lists shared by the membership forms

use super::field::ChoiceOption;

/// Brazilian federative units
pub const ESTADOS: &[ChoiceOption] = &[
    ChoiceOption::plain("AC"),
    ChoiceOption::plain("AL"),
    ChoiceOption::plain("AM"),
    ChoiceOption::plain("AP"),
    ChoiceOption::plain("BA"),
    ChoiceOption::plain("CE"),
    ChoiceOption::plain("DF"),
    ChoiceOption::plain("ES"),
    ChoiceOption::plain("GO"),
    ChoiceOption::plain("MA"),
    ChoiceOption::plain("MG"),
    ChoiceOption::plain("MS"),
    ChoiceOption::plain("MT"),
    ChoiceOption::plain("PA"),
    ChoiceOption::plain("PB"),
    ChoiceOption::plain("PE"),
    ChoiceOption::plain("PI"),
    ChoiceOption::plain("PR"),
    ChoiceOption::plain("RJ"),
    ChoiceOption::plain("RN"),
    ChoiceOption::plain("RO"),
    ChoiceOption::plain("RR"),
    ChoiceOption::plain("RS"),
    ChoiceOption::plain("SC"),
    ChoiceOption::plain("SE"),
    ChoiceOption::plain("SP"),
    ChoiceOption::plain("TO"),
];

/// Authorization text shared by both forms
pub const LGPD_LABEL: &str = "Autorizo o tratamento dos meus dados pessoais para fins de análise \
institucional, comunicação e integração aos programas da entidade, nos termos da Lei nº \
13.709/2018 (LGPD).";

/// Payload value sent for the LGPD authorization once validated
pub const LGPD_ACCEPTED: &str = "Sim, autorizado";

/// Fallback for blank optional text
pub const NOT_INFORMED: &str = "Não informado";

/// Fallback for an optional checklist with nothing checked
pub const NONE_SELECTED: &str = "Nenhum selecionado";
