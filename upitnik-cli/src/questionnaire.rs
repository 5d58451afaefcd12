//! The childhood ASD screening questionnaire instance.
//!
//! Three sections: demographics, then two pages of behavioral questions.
//! Ids, labels, and option strings are exactly what the prediction service
//! expects — answers are submitted verbatim.

use upitnik_wizard::{NumberQuestion, Question, QuestionKind, Section, SelectQuestion};

fn yes_no(id: &str, label: &str) -> Question {
    Question::new(
        id,
        label,
        QuestionKind::Select(SelectQuestion::with_placeholder_option(["Da", "Ne"])),
    )
    .with_placeholder("Odaberite odgovor")
}

/// Build the screening questionnaire sections.
pub fn sections() -> Vec<Section> {
    vec![
        Section::new(vec![
            Question::new(
                "age",
                "Godine",
                QuestionKind::Number(NumberQuestion::with_bounds(1.0, 18.0)),
            )
            .with_placeholder("Unesite godine"),
            Question::new(
                "gender",
                "Spol",
                QuestionKind::Select(SelectQuestion::with_placeholder_option([
                    "Muško", "Žensko",
                ])),
            )
            .with_placeholder("Odaberite spol"),
            yes_no("jundice", "Rođen/a sa žuticom"),
            yes_no("relation", "Genetska predispozicija (porodična istorija PDD)"),
        ]),
        Section::new(vec![
            yes_no("q1", "Da li dijete izbjegava kontakt očima?"),
            yes_no("q2", "Da li dijete voli igrati samo?"),
            yes_no("q3", "Da li dijete ponavlja riječi?"),
            yes_no("q4", "Ima li dijete poteškoća s rutinama?"),
            yes_no("q5", "Neobične reakcije na zvuk ili svjetlo?"),
        ]),
        Section::new(vec![
            yes_no("q6", "Da li dijete ima specifična interesovanja?"),
            yes_no("q7", "Pokazuje li dijete ponavljajuće pokrete?"),
            yes_no("q8", "Poteškoće u razumijevanju emocija?"),
            yes_no("q9", "Izbjegava li dijete fizički kontakt?"),
            yes_no("q10", "Kašnjenje u govoru?"),
        ]),
    ]
}
